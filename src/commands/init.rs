//! Init command implementation
//!
//! Validates the requested options, then runs every selected scaffolding
//! action exactly once. Actions are independent: one failing is reported
//! but never stops the others, and the aggregate outcome stays successful
//! as long as at least one action was attempted.

use anyhow::Result;
use clap::Args;
use console::style;

use crate::actions::{cursor, ActionContext, ActionRequest, CursorRules};
use crate::error::OnboardError;
use crate::exec::subprocess::ProcessRunner;
use crate::templates::EmbeddedTemplates;
use crate::utils::git_info::GitInfo;
use crate::utils::terminal::{print_error, print_success};

/// Scaffold repository boilerplate in the current directory
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Scaffold a .devcontainer/ setup with JDK 21 and Maven
    #[arg(long)]
    pub devcontainer: bool,

    /// Generate a new Maven project skeleton (quickstart archetype)
    #[arg(long)]
    pub maven: bool,

    /// Print the Spring CLI commands for bootstrapping a Spring Boot project
    #[arg(long = "spring-cli")]
    pub spring_cli: bool,

    /// Print the Quarkus CLI commands for bootstrapping a Quarkus project
    #[arg(long = "quarkus-cli")]
    pub quarkus_cli: bool,

    /// Install Cursor AI rules (java, spring-boot, quarkus, tasks, agile)
    #[arg(long, value_name = "RULES", default_value = cursor::NOT_SET, hide_default_value = true)]
    pub cursor: String,

    /// Copy a GitHub Actions Maven workflow plus CODEOWNERS and dependabot config
    #[arg(long = "github-action")]
    pub github_action: bool,

    /// Copy an .editorconfig with Java-friendly defaults
    #[arg(long)]
    pub editorconfig: bool,

    /// Write an .sdkmanrc pinning the JDK and Maven versions
    #[arg(long)]
    pub sdkman: bool,

    /// Copy a Maven-oriented .gitignore
    #[arg(long)]
    pub gitignore: bool,

    /// Add the recommended Maven plugins to an existing pom.xml
    #[arg(long = "maven-plugins")]
    pub maven_plugins: bool,

    /// Print the SDKMAN commands to install and launch VisualVM
    #[arg(long)]
    pub visualvm: bool,

    /// Print the SDKMAN commands to install and launch JDK Mission Control
    #[arg(long)]
    pub jmc: bool,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(self, verbose: bool) -> Result<()> {
        let cwd = std::env::current_dir()?;
        print_banner(&cwd);

        let requests = self.requests();
        if requests.is_empty() {
            println!(
                "No options selected. Run 'onboard init --help' to list the available scaffolds."
            );
            std::process::exit(1);
        }

        let store = EmbeddedTemplates::new();
        let runner = ProcessRunner::default();
        let ctx = ActionContext {
            store: &store,
            runner: &runner,
            cwd,
            verbose,
        };

        let mut failed = 0usize;
        for request in &requests {
            if verbose {
                println!("▶ {}", request.name());
            }
            match request.execute(&ctx) {
                Ok(message) => print_success(&message),
                Err(err) => {
                    failed += 1;
                    match err.downcast_ref::<OnboardError>() {
                        Some(known) => known.display_with_hints(),
                        None => print_error(&format!("{} failed: {:#}", request.name(), err)),
                    }
                }
            }
        }

        if failed > 0 {
            println!(
                "\n{} {} of {} actions reported problems, see messages above",
                style("note:").yellow().bold(),
                failed,
                requests.len()
            );
        }
        println!("🎉 All executed successfully");

        Ok(())
    }

    /// Requested actions in flag declaration order.
    ///
    /// An unrecognized --cursor value simply contributes nothing, so on
    /// its own it behaves exactly like passing no flags at all.
    fn requests(&self) -> Vec<ActionRequest> {
        let mut requests = Vec::new();

        if self.devcontainer {
            requests.push(ActionRequest::Devcontainer);
        }
        if self.maven {
            requests.push(ActionRequest::Maven);
        }
        if self.spring_cli {
            requests.push(ActionRequest::SpringCli);
        }
        if self.quarkus_cli {
            requests.push(ActionRequest::QuarkusCli);
        }
        if let Some(rules) = CursorRules::parse(&self.cursor) {
            requests.push(ActionRequest::Cursor(rules));
        }
        if self.github_action {
            requests.push(ActionRequest::GithubAction);
        }
        if self.editorconfig {
            requests.push(ActionRequest::Editorconfig);
        }
        if self.sdkman {
            requests.push(ActionRequest::Sdkman);
        }
        if self.gitignore {
            requests.push(ActionRequest::Gitignore);
        }
        if self.maven_plugins {
            requests.push(ActionRequest::MavenPlugins);
        }
        if self.visualvm {
            requests.push(ActionRequest::Visualvm);
        }
        if self.jmc {
            requests.push(ActionRequest::Jmc);
        }

        requests
    }
}

fn print_banner(cwd: &std::path::Path) {
    println!(
        "🚀 {} {}",
        style("onboard").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    if let Some(info) = GitInfo::discover(cwd) {
        println!("   {}", style(info).dim());
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> InitCommand {
        InitCommand {
            devcontainer: false,
            maven: false,
            spring_cli: false,
            quarkus_cli: false,
            cursor: cursor::NOT_SET.to_string(),
            github_action: false,
            editorconfig: false,
            sdkman: false,
            gitignore: false,
            maven_plugins: false,
            visualvm: false,
            jmc: false,
        }
    }

    #[test]
    fn no_flags_selects_nothing() {
        assert!(base().requests().is_empty());
    }

    #[test]
    fn invalid_cursor_value_alone_selects_nothing() {
        let cmd = InitCommand {
            cursor: "kotlin".to_string(),
            ..base()
        };
        assert!(cmd.requests().is_empty());
    }

    #[test]
    fn single_flag_selects_exactly_one_action() {
        let cmd = InitCommand {
            gitignore: true,
            ..base()
        };
        assert_eq!(cmd.requests(), vec![ActionRequest::Gitignore]);
    }

    #[test]
    fn valid_cursor_value_selects_the_cursor_action() {
        let cmd = InitCommand {
            cursor: "spring-boot".to_string(),
            ..base()
        };
        assert_eq!(
            cmd.requests(),
            vec![ActionRequest::Cursor(CursorRules::SpringBoot)]
        );
    }

    #[test]
    fn invalid_cursor_value_does_not_block_other_flags() {
        let cmd = InitCommand {
            cursor: "kotlin".to_string(),
            editorconfig: true,
            ..base()
        };
        assert_eq!(cmd.requests(), vec![ActionRequest::Editorconfig]);
    }

    #[test]
    fn requests_follow_declaration_order() {
        let cmd = InitCommand {
            jmc: true,
            devcontainer: true,
            gitignore: true,
            ..base()
        };
        assert_eq!(
            cmd.requests(),
            vec![
                ActionRequest::Devcontainer,
                ActionRequest::Gitignore,
                ActionRequest::Jmc,
            ]
        );
    }
}
