//! Gitignore action

use anyhow::{Context, Result};

use super::ActionContext;

pub fn run(ctx: &ActionContext<'_>) -> Result<String> {
    ctx.store
        .copy_file("gitignore/gitignore", &ctx.cwd.join(".gitignore"))
        .context("copying the .gitignore template")?;

    Ok(".gitignore written (Maven layout)".to_string())
}
