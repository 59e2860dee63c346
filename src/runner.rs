//! Final deploy execution.

use std::process::{Command, Stdio};

use crate::error::{DeployError, DeployResult};

/// Executes a built deploy command.
pub trait CommandRunner {
    /// Run `command` with the caller's standard streams attached, so the
    /// external tool's output reaches the user live.
    fn run(&self, command: &str) -> DeployResult<()>;
}

/// Runs commands through `sh -c`.
///
/// The command is the exact string that may also have been written to the
/// history script, so it goes through the shell rather than being re-split.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> DeployResult<()> {
        let status = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        if status.success() {
            Ok(())
        } else {
            Err(DeployError::DeployFailed {
                code: status.code().unwrap_or(1),
            })
        }
    }
}

#[cfg(unix)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_success() {
        let runner = ShellRunner;
        assert!(runner.run("exit 0").is_ok());
    }

    #[test]
    fn test_run_propagates_exit_code() {
        let runner = ShellRunner;
        match runner.run("exit 3") {
            Err(DeployError::DeployFailed { code }) => assert_eq!(code, 3),
            other => panic!("expected DeployFailed, got {other:?}"),
        }
    }
}
