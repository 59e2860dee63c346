//! Deploy preview invocation and JSON recovery.
//!
//! The sf CLI writes its JSON report to stdout even when it exits non-zero
//! (a preview with conflicts is a "failed" process), so the raw process
//! outcome is modeled explicitly and parsing happens in a second step.

use std::process::{Command, Stdio};

use crate::error::{DeployError, DeployResult};
use crate::models::PreviewResult;

/// Outcome of one finished preview invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Process exited zero; stdout should be the JSON report.
    Success(String),
    /// Process exited non-zero but produced stdout that may still be JSON.
    FailureWithOutput {
        stdout: String,
        status: Option<i32>,
    },
}

/// Source of deploy preview reports.
///
/// Implementations: `SfCli` invokes the real `sf` binary; tests substitute
/// a fake returning canned reports.
pub trait PreviewClient {
    /// Run the preview once and return its normalized report. Never retries.
    fn preview(&self, target_org: Option<&str>) -> DeployResult<PreviewResult>;
}

/// `PreviewClient` backed by the `sf` binary on PATH.
pub struct SfCli;

impl SfCli {
    fn invoke(&self, target_org: Option<&str>) -> DeployResult<ProcessOutcome> {
        let mut cmd = Command::new("sf");
        cmd.args(["project", "deploy", "preview", "--json"]);
        if let Some(org) = target_org {
            cmd.args(["-o", org]);
        }
        cmd.stdin(Stdio::null());

        let output = cmd.output().map_err(|e| DeployError::PreviewSpawn {
            command: "sf project deploy preview --json".to_string(),
            source: e,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if output.status.success() {
            Ok(ProcessOutcome::Success(stdout))
        } else {
            Ok(ProcessOutcome::FailureWithOutput {
                stdout,
                status: output.status.code(),
            })
        }
    }
}

impl PreviewClient for SfCli {
    fn preview(&self, target_org: Option<&str>) -> DeployResult<PreviewResult> {
        parse_outcome(self.invoke(target_org)?)
    }
}

/// Recover a `PreviewResult` from a finished preview process.
///
/// A failed process is only an error once its stdout turns out not to be
/// JSON; the returned error then carries both the raw output and the
/// original failure.
pub fn parse_outcome(outcome: ProcessOutcome) -> DeployResult<PreviewResult> {
    match outcome {
        ProcessOutcome::Success(stdout) => {
            serde_json::from_str(&stdout).map_err(|e| DeployError::PreviewUnparsable {
                message: e.to_string(),
                raw_output: stdout,
            })
        }
        ProcessOutcome::FailureWithOutput { stdout, status } => {
            serde_json::from_str(&stdout).map_err(|e| {
                let exit = status.map_or_else(|| "signal".to_string(), |c| c.to_string());
                DeployError::PreviewUnparsable {
                    message: format!("preview exited with {exit}: {e}"),
                    raw_output: stdout,
                }
            })
        }
    }
}
