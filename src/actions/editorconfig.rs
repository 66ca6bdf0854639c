//! Editorconfig action

use anyhow::{Context, Result};

use super::ActionContext;

pub fn run(ctx: &ActionContext<'_>) -> Result<String> {
    ctx.store
        .copy_file("editorconfig/editorconfig", &ctx.cwd.join(".editorconfig"))
        .context("copying the .editorconfig template")?;

    Ok(".editorconfig written".to_string())
}
