//! Maven project scaffold action

use anyhow::Result;

use super::ActionContext;
use crate::error::{hints, OnboardError};
use crate::exec::subprocess::command_exists;
use crate::utils::terminal::{create_spinner, print_warning};

/// Archetype coordinates for the generated skeleton
const ARCHETYPE_ARGS: [&str; 9] = [
    "-B",
    "archetype:generate",
    "-DarchetypeGroupId=org.apache.maven.archetypes",
    "-DarchetypeArtifactId=maven-archetype-quickstart",
    "-DarchetypeVersion=1.5",
    "-DgroupId=com.example",
    "-DartifactId=app",
    "-Dversion=1.0-SNAPSHOT",
    "-Dpackage=com.example.app",
];

/// Generate a new Maven project skeleton in the current directory.
///
/// Aborts before any side effect when a pom.xml is already present or
/// when Maven is not installed.
pub fn run(ctx: &ActionContext<'_>) -> Result<String> {
    if ctx.cwd.join("pom.xml").exists() {
        return Err(OnboardError::conflict(
            "pom.xml already exists in this directory",
            "Run in an empty directory, or use --maven-plugins to patch the existing build",
        )
        .into());
    }

    if !command_exists("mvn") {
        return Err(OnboardError::missing_tool(
            "mvn",
            "scaffolding a Maven project",
            hints::maven(),
        )
        .into());
    }

    warn_if_maven_is_old(ctx);

    let spinner = create_spinner("Generating Maven project skeleton...");
    let result = ctx.runner.run("mvn", &ARCHETYPE_ARGS, &ctx.cwd)?;
    spinner.finish_and_clear();

    if ctx.verbose && !result.stdout.is_empty() {
        println!("{}", result.stdout);
    }

    if !result.success {
        let mut message = format!("exited with status {}", result.exit_code);
        if let Some(line) = first_error_line(&result.stdout, &result.stderr) {
            message.push_str(&format!(": {line}"));
        }
        return Err(OnboardError::process_failure(
            "mvn archetype:generate",
            message,
            Some("Re-run with --verbose to see the full Maven output".to_string()),
        )
        .into());
    }

    Ok(format!(
        "Maven project 'app' generated in {:.1}s (maven-archetype-quickstart)",
        result.duration.as_secs_f64()
    ))
}

/// The enforcer template pins Maven 3.9+, so nudge older installations
fn warn_if_maven_is_old(ctx: &ActionContext<'_>) {
    let Ok(result) = ctx.runner.run("mvn", &["--version"], &ctx.cwd) else {
        return;
    };
    if !result.success {
        return;
    }

    if let Some(caps) = regex::Regex::new(r"Apache Maven (\d+)\.(\d+)")
        .ok()
        .and_then(|re| re.captures(&result.stdout))
    {
        let major: u32 = caps[1].parse().unwrap_or(0);
        let minor: u32 = caps[2].parse().unwrap_or(0);
        if major < 3 || (major == 3 && minor < 9) {
            print_warning(&format!(
                "Maven {}.{} is old. Recommended: 3.9+",
                major, minor
            ));
        }
    }
}

/// First `[ERROR]` line of the captured output, for a compact failure
/// message
fn first_error_line(stdout: &str, stderr: &str) -> Option<String> {
    stdout
        .lines()
        .chain(stderr.lines())
        .find(|line| line.starts_with("[ERROR]"))
        .map(|line| line.trim().to_string())
}
