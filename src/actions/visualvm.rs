//! VisualVM action

use anyhow::Result;

use super::{warn_if_sdkman_missing, ActionContext};

/// Print the command sequence for installing and launching VisualVM
pub fn run(_ctx: &ActionContext<'_>) -> Result<String> {
    warn_if_sdkman_missing();

    println!("Profile a running JVM with VisualVM:");
    println!();
    println!("    sdk install visualvm");
    println!("    visualvm --jdkhome \"$JAVA_HOME\"");
    println!();

    Ok("VisualVM commands printed".to_string())
}
