//! Quarkus CLI action

use anyhow::Result;

use super::{warn_if_sdkman_missing, ActionContext};

/// Print the command sequence for bootstrapping a Quarkus project
pub fn run(_ctx: &ActionContext<'_>) -> Result<String> {
    warn_if_sdkman_missing();

    println!("Bootstrap a Quarkus project with the Quarkus CLI:");
    println!();
    println!("    sdk install quarkus");
    println!("    quarkus create app com.example:demo");
    println!();
    println!("See https://quarkus.io/guides/cli-tooling for the full option list.");

    Ok("Quarkus CLI commands printed".to_string())
}
