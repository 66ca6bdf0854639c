//! JDK Mission Control action

use anyhow::Result;

use super::{warn_if_sdkman_missing, ActionContext};

/// Print the command sequence for installing and launching JMC
pub fn run(_ctx: &ActionContext<'_>) -> Result<String> {
    warn_if_sdkman_missing();

    println!("Inspect flight recordings with JDK Mission Control:");
    println!();
    println!("    sdk install jmc");
    println!("    jmc");
    println!();

    Ok("JDK Mission Control commands printed".to_string())
}
