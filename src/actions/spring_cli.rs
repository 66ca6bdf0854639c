//! Spring CLI action

use anyhow::Result;

use super::{warn_if_sdkman_missing, ActionContext};

/// Print the command sequence for bootstrapping a Spring Boot project
pub fn run(_ctx: &ActionContext<'_>) -> Result<String> {
    warn_if_sdkman_missing();

    println!("Bootstrap a Spring Boot project with the Spring CLI:");
    println!();
    println!("    sdk install springboot");
    println!("    spring init --dependencies=web,actuator,devtools --build=maven --force .");
    println!();
    println!("See https://docs.spring.io/spring-boot/cli/ for the full option list.");

    Ok("Spring CLI commands printed".to_string())
}
