//! Git information for the startup banner

use std::fmt;
use std::path::Path;
use std::process::Command;

/// Snapshot of the git state of a working directory
#[derive(Debug, Clone)]
pub struct GitInfo {
    /// Git branch name
    pub branch: String,
    /// Short commit hash
    pub revision: String,
    /// Whether the working directory has uncommitted changes
    pub dirty: bool,
}

impl GitInfo {
    /// Read branch/revision/dirty state from `dir`.
    ///
    /// Returns `None` when `dir` is not a git checkout or git is not
    /// installed; the banner simply omits the line in that case.
    pub fn discover(dir: &Path) -> Option<Self> {
        let branch = git_output(dir, &["rev-parse", "--abbrev-ref", "HEAD"])?;
        let revision = git_output(dir, &["rev-parse", "--short", "HEAD"])?;
        let dirty = git_output(dir, &["status", "--porcelain"])
            .is_some_and(|status| !status.is_empty());

        Some(Self {
            branch,
            revision,
            dirty,
        })
    }
}

impl fmt::Display for GitInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.branch, self.revision)?;
        if self.dirty {
            write!(f, " (dirty)")?;
        }
        Ok(())
    }
}

fn git_output(dir: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
