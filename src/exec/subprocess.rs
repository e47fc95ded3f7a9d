//! Synchronous subprocess execution with inherited stdio

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

/// Result of a subprocess execution
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code, `None` when terminated by a signal
    pub exit_code: Option<i32>,

    /// Execution duration
    pub duration: Duration,
}

impl CommandResult {
    /// Create a CommandResult from an exit status
    pub fn from_status(status: ExitStatus, duration: Duration) -> Self {
        Self {
            success: status.success(),
            exit_code: status.code(),
            duration,
        }
    }
}

/// Run a command to completion, sharing this process's stdin/stdout/stderr.
///
/// Blocks until the child exits; there is no timeout.
pub fn run_command(program: &Path, args: &[String]) -> Result<CommandResult> {
    let start = Instant::now();

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to execute {}", program.display()))?;

    let result = CommandResult::from_status(status, start.elapsed());
    tracing::debug!(
        "{} exited with {:?} after {:.2?}",
        program.display(),
        result.exit_code,
        result.duration
    );
    Ok(result)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_failure_status() {
        let sh = Path::new("/bin/sh");
        let ok = run_command(sh, &["-c".to_string(), "exit 0".to_string()]).unwrap();
        assert!(ok.success);
        assert_eq!(ok.exit_code, Some(0));

        let failed = run_command(sh, &["-c".to_string(), "exit 3".to_string()]).unwrap();
        assert!(!failed.success);
        assert_eq!(failed.exit_code, Some(3));
    }

    #[test]
    fn test_spawn_failure_is_an_error() {
        let missing = Path::new("/nonexistent/definitely-not-here");
        assert!(run_command(missing, &[]).is_err());
    }
}
