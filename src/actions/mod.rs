//! Scaffolding actions
//!
//! One module per init flag. Actions are independent: each receives the
//! shared [`ActionContext`] and returns a user-facing success line or an
//! error the dispatcher reports without stopping the other actions.

pub mod cursor;
pub mod devcontainer;
pub mod editorconfig;
pub mod github_action;
pub mod gitignore;
pub mod jmc;
pub mod maven;
pub mod maven_plugins;
pub mod quarkus_cli;
pub mod sdkman;
pub mod spring_cli;
pub mod visualvm;

use std::path::PathBuf;

use anyhow::Result;

use crate::error::hints;
use crate::exec::subprocess::ProcessRunner;
use crate::templates::TemplateStore;
use crate::utils::terminal::print_warning;

pub use cursor::CursorRules;

/// Dependencies handed to every action
pub struct ActionContext<'a> {
    pub store: &'a dyn TemplateStore,
    pub runner: &'a ProcessRunner,
    pub cwd: PathBuf,
    pub verbose: bool,
}

/// One requested scaffolding action.
///
/// Requests are collected in flag declaration order and executed exactly
/// once each; the variants form the closed set of init options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRequest {
    Devcontainer,
    Maven,
    SpringCli,
    QuarkusCli,
    Cursor(CursorRules),
    GithubAction,
    Editorconfig,
    Sdkman,
    Gitignore,
    MavenPlugins,
    Visualvm,
    Jmc,
}

impl ActionRequest {
    /// Flag name, for progress and failure reporting
    pub fn name(&self) -> &'static str {
        match self {
            ActionRequest::Devcontainer => "devcontainer",
            ActionRequest::Maven => "maven",
            ActionRequest::SpringCli => "spring-cli",
            ActionRequest::QuarkusCli => "quarkus-cli",
            ActionRequest::Cursor(_) => "cursor",
            ActionRequest::GithubAction => "github-action",
            ActionRequest::Editorconfig => "editorconfig",
            ActionRequest::Sdkman => "sdkman",
            ActionRequest::Gitignore => "gitignore",
            ActionRequest::MavenPlugins => "maven-plugins",
            ActionRequest::Visualvm => "visualvm",
            ActionRequest::Jmc => "jmc",
        }
    }

    /// Execute the action
    pub fn execute(&self, ctx: &ActionContext<'_>) -> Result<String> {
        match self {
            ActionRequest::Devcontainer => devcontainer::run(ctx),
            ActionRequest::Maven => maven::run(ctx),
            ActionRequest::SpringCli => spring_cli::run(ctx),
            ActionRequest::QuarkusCli => quarkus_cli::run(ctx),
            ActionRequest::Cursor(rules) => cursor::run(ctx, *rules),
            ActionRequest::GithubAction => github_action::run(ctx),
            ActionRequest::Editorconfig => editorconfig::run(ctx),
            ActionRequest::Sdkman => sdkman::run(ctx),
            ActionRequest::Gitignore => gitignore::run(ctx),
            ActionRequest::MavenPlugins => maven_plugins::run(ctx),
            ActionRequest::Visualvm => visualvm::run(ctx),
            ActionRequest::Jmc => jmc::run(ctx),
        }
    }
}

/// The sdk command is a shell function provided by SDKMAN, so PATH lookups
/// cannot see it; the init script exports SDKMAN_DIR instead.
pub(crate) fn warn_if_sdkman_missing() {
    if std::env::var_os("SDKMAN_DIR").is_none() {
        print_warning("SDKMAN does not appear to be installed (SDKMAN_DIR is not set)");
        eprintln!("{}", hints::sdkman());
    }
}
