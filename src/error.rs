//! Error types and helpers for user-friendly error messages
//!
//! Custom error types with actionable hints so a failed scaffolding step
//! tells the user how to unblock themselves.

use thiserror::Error;

/// Custom error types with helpful context and suggestions
#[derive(Error, Debug)]
pub enum OnboardError {
    /// Tool/executable not found or misconfigured
    #[error("Missing tool: {tool}")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },

    /// A file that must not exist is already present
    #[error("Conflict: {message}")]
    Conflict { message: String, hint: String },

    /// An external command ran but reported failure
    #[error("Command failed: {command} ({message})")]
    Process {
        command: String,
        message: String,
        hint: Option<String>,
    },
}

impl OnboardError {
    /// Create a missing tool error
    pub fn missing_tool(
        tool: impl Into<String>,
        required_for: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            required_for: required_for.into(),
            hint: hint.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create a process failure error
    pub fn process_failure(
        command: impl Into<String>,
        message: impl Into<String>,
        hint: Option<String>,
    ) -> Self {
        Self::Process {
            command: command.into(),
            message: message.into(),
            hint,
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        match self {
            OnboardError::MissingTool {
                required_for, hint, ..
            } => {
                eprintln!("  Required for: {}", required_for);
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), hint);
            }
            OnboardError::Conflict { hint, .. } => {
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), hint);
            }
            OnboardError::Process { hint, .. } => {
                if let Some(h) = hint {
                    eprintln!("\n{} {}", style("HINT:").yellow().bold(), h);
                }
            }
        }

        eprintln!();
    }
}

/// Common error hints for missing tools
pub mod hints {
    /// Get hint for missing Maven
    pub fn maven() -> &'static str {
        "Install Maven from https://maven.apache.org/ or use your package manager:\n\
         • SDKMAN: sdk install maven\n\
         • macOS: brew install maven\n\
         • Ubuntu: sudo apt install maven"
    }

    /// Get hint for missing SDKMAN
    pub fn sdkman() -> &'static str {
        "Install SDKMAN to manage JDK and tooling versions:\n\
         1. Run: curl -s \"https://get.sdkman.io\" | bash\n\
         2. Open a new terminal (or source ~/.sdkman/bin/sdkman-init.sh)\n\
         3. Verify with: sdk version"
    }
}
