//! End-to-end wizard flow.
//!
//! Strictly linear: org → preview → conflict check → selection → build →
//! optional save → optional run. No step ever branches back.

use crate::command::build_deploy_command;
use crate::error::{DeployError, DeployResult};
use crate::history::HistoryStore;
use crate::models::PreviewResult;
use crate::preview::PreviewClient;
use crate::prompt::Prompter;
use crate::runner::CommandRunner;

/// Terminal states of one wizard run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardOutcome {
    /// The deploy command ran to completion.
    Deployed,
    /// The user declined the final run.
    Cancelled,
    /// The preview reported nothing deployable, or the selection came back
    /// empty.
    NothingToDeploy,
    /// The user declined to proceed past conflicts.
    ConflictsDeclined,
}

impl WizardOutcome {
    /// Process exit code for this outcome. Declining past conflicts is the
    /// only non-zero completion.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::ConflictsDeclined => 1,
            _ => 0,
        }
    }
}

/// The wizard with its injected collaborators.
///
/// Everything with a side effect comes in through a trait, so tests can run
/// the full flow against fakes.
pub struct Wizard<'a> {
    pub preview: &'a dyn PreviewClient,
    pub prompter: &'a dyn Prompter,
    pub history: &'a dyn HistoryStore,
    pub runner: &'a dyn CommandRunner,
}

impl Wizard<'_> {
    /// Run the wizard once. `target_org` pre-answers the org prompt when the
    /// user passed `-o` on the command line.
    pub fn run(&self, target_org: Option<String>) -> DeployResult<WizardOutcome> {
        let target_org = match target_org {
            Some(org) => Some(org),
            None => self.prompter.ask_target_org()?,
        };

        println!("\nChecking locally changed components...");
        let preview = self.preview.preview(target_org.as_deref())?;

        if preview.status != 0 && preview.result.is_none() {
            return Err(reported_error(&preview));
        }

        for warning in &preview.warnings {
            eprintln!("⚠ {warning}");
        }

        let (components, conflicts) = match preview.result {
            Some(details) => (details.files, details.conflicts),
            None => (Vec::new(), Vec::new()),
        };

        let mut ignore_conflicts = false;
        if !conflicts.is_empty() {
            if self.prompter.confirm_continue_with_conflicts(&conflicts)? {
                ignore_conflicts = true;
                println!("\n⚠ Selected files will be deployed with --ignore-conflicts.");
            } else {
                println!("\nResolve the conflicts, then try the deploy again.");
                return Ok(WizardOutcome::ConflictsDeclined);
            }
        }

        if components.is_empty() && conflicts.is_empty() {
            println!("No files to deploy.");
            return Ok(WizardOutcome::NothingToDeploy);
        }

        let selection = self.prompter.select_metadata(&components, &conflicts)?;
        if selection.is_empty() {
            println!("Nothing was selected; exiting.");
            return Ok(WizardOutcome::NothingToDeploy);
        }

        let command = build_deploy_command(&selection, target_org.as_deref(), ignore_conflicts);

        if self.prompter.confirm_save_to_file()? {
            // Best effort: a failed save must never abort the deploy flow
            match self.history.save(&command) {
                Ok(path) => println!("\nCommand saved to {}.", path.display()),
                Err(err) => eprintln!("\n⚠ Could not save the command: {err}"),
            }
        }

        if self.prompter.confirm_deploy()? {
            println!("\nRunning: {command}");
            self.runner.run(&command)?;
            println!("\n✓ Deploy finished.");
            Ok(WizardOutcome::Deployed)
        } else {
            println!("Deploy cancelled.");
            Ok(WizardOutcome::Cancelled)
        }
    }
}

fn reported_error(preview: &PreviewResult) -> DeployError {
    DeployError::PreviewReported {
        name: preview.name.clone().unwrap_or_else(|| "sf".to_string()),
        message: preview
            .message
            .clone()
            .unwrap_or_else(|| "the deploy preview failed".to_string()),
        exit_code: preview.exit_code.unwrap_or(preview.status),
    }
}
