//! Devcontainer action

use anyhow::{Context, Result};

use super::ActionContext;

/// Copy the Java devcontainer template into `.devcontainer/`.
///
/// The template folder carries a README describing the template itself;
/// that file stays behind.
pub fn run(ctx: &ActionContext<'_>) -> Result<String> {
    let dest = ctx.cwd.join(".devcontainer");
    let written = ctx
        .store
        .copy_folder_excluding("devcontainer", &dest, &["README.md"])
        .context("copying the devcontainer template")?;

    if ctx.verbose {
        for file in &written {
            println!("  created {}", file.display());
        }
    }

    Ok(".devcontainer/ scaffolded (JDK 21 + Maven image)".to_string())
}
