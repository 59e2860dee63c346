//! sfdeploy - interactive, conflict-aware deploy wizard for the Salesforce CLI
//!
//! sfdeploy wraps `sf project deploy preview` and `sf project deploy start`
//! in a sequential prompt flow: pick a target org, preview the changes,
//! confirm any conflicts, choose the metadata to deploy, optionally save the
//! generated command to a history script, optionally run it.
//!
//! The Salesforce CLI is an external collaborator reached only through its
//! JSON output contract; nothing here interprets metadata beyond the
//! `type:fullName` identifiers the CLI reports.

pub mod command;
pub mod error;
pub mod history;
pub mod models;
pub mod preview;
pub mod prompt;
pub mod runner;
pub mod theme;
pub mod wizard;

// Re-exports for convenience
pub use command::build_deploy_command;
pub use error::{DeployError, DeployResult};
pub use history::{FsHistoryStore, HistoryStore, DEFAULT_HISTORY_DIR};
pub use models::{MetadataComponent, PreviewDetails, PreviewResult};
pub use preview::{parse_outcome, PreviewClient, ProcessOutcome, SfCli};
pub use prompt::{metadata_choices, MetadataChoice, Prompter, TerminalPrompter};
pub use runner::{CommandRunner, ShellRunner};
pub use wizard::{Wizard, WizardOutcome};
