//! Cursor rules action

use anyhow::{Context, Result};

use super::ActionContext;

/// Sentinel used as the clap default for `--cursor`; never a legal value
pub const NOT_SET: &str = "NA";

/// The closed set of Cursor rule bundles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorRules {
    Java,
    SpringBoot,
    Quarkus,
    Tasks,
    Agile,
}

impl CursorRules {
    /// Parse a `--cursor` value. Anything outside the closed set
    /// (including the `NA` sentinel and the empty string) is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "java" => Some(CursorRules::Java),
            "spring-boot" => Some(CursorRules::SpringBoot),
            "quarkus" => Some(CursorRules::Quarkus),
            "tasks" => Some(CursorRules::Tasks),
            "agile" => Some(CursorRules::Agile),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CursorRules::Java => "java",
            CursorRules::SpringBoot => "spring-boot",
            CursorRules::Quarkus => "quarkus",
            CursorRules::Tasks => "tasks",
            CursorRules::Agile => "agile",
        }
    }

    fn folder(self) -> String {
        format!("cursor/{}", self.as_str())
    }
}

/// Copy the selected rule bundle into `.cursor/rules/`
pub fn run(ctx: &ActionContext<'_>, rules: CursorRules) -> Result<String> {
    let dest = ctx.cwd.join(".cursor/rules");
    let written = ctx
        .store
        .copy_folder(&rules.folder(), &dest)
        .with_context(|| format!("copying the '{}' Cursor rules", rules.as_str()))?;

    if ctx.verbose {
        for file in &written {
            println!("  created {}", file.display());
        }
    }

    Ok(format!(
        "Cursor rules '{}' installed under .cursor/rules/ ({} file{})",
        rules.as_str(),
        written.len(),
        if written.len() == 1 { "" } else { "s" }
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_enumerated_values_parse() {
        let all = [
            CursorRules::Java,
            CursorRules::SpringBoot,
            CursorRules::Quarkus,
            CursorRules::Tasks,
            CursorRules::Agile,
        ];
        for rules in all {
            assert_eq!(CursorRules::parse(rules.as_str()), Some(rules));
        }
    }

    #[test]
    fn sentinel_and_garbage_do_not_parse() {
        assert_eq!(CursorRules::parse(NOT_SET), None);
        assert_eq!(CursorRules::parse(""), None);
        assert_eq!(CursorRules::parse("JAVA"), None);
        assert_eq!(CursorRules::parse("kotlin"), None);
    }
}
