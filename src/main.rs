//! Onboard CLI - scaffolding for day-one repository setup
//!
//! Copies bundled templates (devcontainer, editorconfig, CI workflow,
//! Cursor rules, ...) into the current directory and wraps the handful of
//! external commands (mvn, sdk, spring, quarkus) a new Java repository
//! usually starts with.

mod actions;
mod cli;
mod commands;
mod error;
mod exec;
mod pom;
mod templates;
mod utils;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}
