//! SDKMAN action

use anyhow::{Context, Result};

use super::{warn_if_sdkman_missing, ActionContext};

/// Candidate versions pinned by the generated .sdkmanrc
const JAVA_CANDIDATE: &str = "21.0.2-tem";
const MAVEN_CANDIDATE: &str = "3.9.9";

/// Write an `.sdkmanrc` pinning the JDK and Maven versions
pub fn run(ctx: &ActionContext<'_>) -> Result<String> {
    warn_if_sdkman_missing();

    let content = format!("java={JAVA_CANDIDATE}\nmaven={MAVEN_CANDIDATE}\n");
    ctx.store
        .copy_content(&content, &ctx.cwd.join(".sdkmanrc"))
        .context("writing .sdkmanrc")?;

    Ok(".sdkmanrc written (run 'sdk env install' to apply it)".to_string())
}
