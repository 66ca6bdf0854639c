//! Subprocess execution with timeout support

#![allow(dead_code)]

use std::io::Read;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

/// Default wall-clock budget for an external command
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Fatal execution errors, distinct from a command that ran and failed
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed while waiting for '{program}': {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' did not finish within {timeout:?}")]
    TimedOut { program: String, timeout: Duration },
}

/// Result of a subprocess execution
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code
    pub exit_code: i32,

    /// Captured standard output
    pub stdout: String,

    /// Captured standard error
    pub stderr: String,

    /// Execution duration
    pub duration: Duration,
}

impl CommandResult {
    fn from_status(status: ExitStatus, stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            success: status.success(),
            exit_code: status.code().unwrap_or(-1),
            stdout,
            stderr,
            duration,
        }
    }
}

/// Runs one external command at a time with a bounded wait.
///
/// Non-zero exit codes are reported through [`CommandResult`]; only spawn
/// failures, wait failures and timeouts surface as [`ProcessError`]. On
/// timeout the child receives a best-effort kill but is not reaped, which
/// is acceptable for a short-lived CLI process.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    timeout: Duration,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ProcessRunner {
    /// Create a runner with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Run a command with captured output
    pub fn run(
        &self,
        program: &str,
        args: &[&str],
        working_dir: &Path,
    ) -> Result<CommandResult, ProcessError> {
        let start = Instant::now();

        let mut child = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ProcessError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let stdout = drain_pipe(child.stdout.take());
        let stderr = drain_pipe(child.stderr.take());

        let deadline = start + self.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {
                    if Instant::now() >= deadline {
                        let _ = child.kill();
                        return Err(ProcessError::TimedOut {
                            program: program.to_string(),
                            timeout: self.timeout,
                        });
                    }
                    thread::sleep(Duration::from_millis(100));
                }
                Err(source) => {
                    return Err(ProcessError::Wait {
                        program: program.to_string(),
                        source,
                    });
                }
            }
        };

        let stdout = stdout.join().unwrap_or_default();
        let stderr = stderr.join().unwrap_or_default();

        Ok(CommandResult::from_status(
            status,
            stdout,
            stderr,
            start.elapsed(),
        ))
    }
}

/// Collect a child pipe on a separate thread so the child never blocks on
/// a full pipe buffer while we poll for its exit.
fn drain_pipe<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut captured = String::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_string(&mut captured);
        }
        captured
    })
}

/// Check if a command exists in PATH
pub fn command_exists(program: &str) -> bool {
    which::which(program).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn cwd() -> PathBuf {
        std::env::temp_dir()
    }

    #[test]
    fn captures_stdout_and_exit_code() {
        let runner = ProcessRunner::default();
        let result = runner.run("echo", &["hello"], &cwd()).unwrap();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout.trim(), "hello");
    }

    #[test]
    fn reports_nonzero_exit_as_structured_failure() {
        let runner = ProcessRunner::default();
        let result = runner.run("false", &[], &cwd()).unwrap();
        assert!(!result.success);
        assert_ne!(result.exit_code, 0);
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let runner = ProcessRunner::default();
        let err = runner
            .run("definitely-not-a-real-binary", &[], &cwd())
            .unwrap_err();
        assert!(matches!(err, ProcessError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn times_out_long_running_commands() {
        let runner = ProcessRunner::with_timeout(Duration::from_millis(200));
        let err = runner.run("sleep", &["5"], &cwd()).unwrap_err();
        assert!(matches!(err, ProcessError::TimedOut { .. }));
    }
}
