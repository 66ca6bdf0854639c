//! GitHub Actions workflow action

use anyhow::{Context, Result};

use super::ActionContext;

/// Copy the CI workflow plus repository metadata into `.github/`
pub fn run(ctx: &ActionContext<'_>) -> Result<String> {
    let dest = ctx.cwd.join(".github");
    let written = ctx
        .store
        .copy_folder("github", &dest)
        .context("copying the GitHub workflow templates")?;

    if ctx.verbose {
        for file in &written {
            println!("  created {}", file.display());
        }
    }

    Ok(".github/ scaffolded (Maven CI workflow, CODEOWNERS, dependabot)".to_string())
}
