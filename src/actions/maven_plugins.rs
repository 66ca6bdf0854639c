//! Maven plugin suggestions action

use anyhow::Result;

use super::ActionContext;
use crate::pom::{MergeOutcome, PomMerger};
use crate::utils::terminal::{print_info, print_warning};

const ENFORCER_PLUGIN: &str = "fragments/maven-enforcer-plugin.xml";
const ENFORCER_VERSION_PROPERTY: &str = "fragments/maven-enforcer-plugin-version.xml";

/// Merge the recommended enforcer plugin (and its version property) into
/// an existing `./pom.xml`.
///
/// This scaffolding is advisory: merge failures are reported as warnings
/// and the descriptor is left untouched, so a malformed or missing pom
/// never aborts the session.
pub fn run(ctx: &ActionContext<'_>) -> Result<String> {
    let pom_path = ctx.cwd.join("pom.xml");
    let merger = PomMerger::new(ctx.store);

    match merger.merge_property(&pom_path, ENFORCER_VERSION_PROPERTY) {
        Ok(outcome) if ctx.verbose => {
            print_info(&format!(
                "maven-enforcer-plugin.version property {}",
                describe(outcome)
            ));
        }
        Ok(_) => {}
        Err(err) => print_warning(&format!("pom.xml property not merged: {err}")),
    }

    match merger.merge_plugin(&pom_path, ENFORCER_PLUGIN) {
        Ok(_) if ctx.verbose => {
            print_info("maven-enforcer-plugin appended to build/plugins");
        }
        Ok(_) => {}
        Err(err) => print_warning(&format!("pom.xml plugin not merged: {err}")),
    }

    Ok("pom.xml reviewed for recommended plugins (maven-enforcer-plugin)".to_string())
}

fn describe(outcome: MergeOutcome) -> &'static str {
    match outcome {
        MergeOutcome::Inserted => "added",
        MergeOutcome::Updated => "updated",
    }
}
