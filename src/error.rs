//! Error types for sfdeploy
//!
//! Uses `thiserror` for library errors; the binary maps them to exit codes.

use thiserror::Error;

/// Result type alias for sfdeploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for sfdeploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// The preview command could not be spawned at all
    #[error("failed to run `{command}`: {source}")]
    PreviewSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The preview process failed and its output was not valid JSON
    #[error("could not parse the deploy preview output ({message})\n--- raw output ---\n{raw_output}")]
    PreviewUnparsable { message: String, raw_output: String },

    /// The external tool ran but reported an internal error
    #[error("{name}: {message} (exit code {exit_code})")]
    PreviewReported {
        name: String,
        message: String,
        exit_code: i32,
    },

    /// The final deploy command exited non-zero
    #[error("deploy command exited with code {code}")]
    DeployFailed { code: i32 },

    /// A prompt was interrupted (Ctrl+C)
    #[error("interrupted")]
    Interrupted,

    /// A prompt failed for reasons other than interruption (e.g. stdin closed)
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeployError {
    /// Exit code the process should terminate with for this error.
    ///
    /// Tool-reported exit codes are propagated; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::PreviewReported { exit_code, .. } => nonzero(*exit_code),
            Self::DeployFailed { code } => nonzero(*code),
            _ => 1,
        }
    }
}

fn nonzero(code: i32) -> i32 {
    if code == 0 {
        1
    } else {
        code
    }
}
