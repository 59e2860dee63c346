//! Interactive prompt steps.
//!
//! One trait method per wizard question, in the order the wizard asks them.
//! Prompts are strictly sequential; each blocks until the user answers.

use dialoguer::{Confirm, Input, MultiSelect};

use crate::error::{DeployError, DeployResult};
use crate::models::MetadataComponent;
use crate::theme::{colors, paint, Icon, TermCaps, WizardTheme};

/// Question/answer surface of the wizard.
///
/// Implementations: `TerminalPrompter` asks on the attached terminal; tests
/// substitute scripted fakes.
pub trait Prompter {
    /// Free-text org input; `None` means "use the default org".
    fn ask_target_org(&self) -> DeployResult<Option<String>>;

    /// Lists every conflict as a warning, then asks whether to continue.
    /// Defaults to no.
    fn confirm_continue_with_conflicts(
        &self,
        conflicts: &[MetadataComponent],
    ) -> DeployResult<bool>;

    /// Multi-select over components and conflicts. Returns the selected
    /// identifiers in list order; never returns an empty selection.
    fn select_metadata(
        &self,
        components: &[MetadataComponent],
        conflicts: &[MetadataComponent],
    ) -> DeployResult<Vec<String>>;

    /// Whether to save the built command to a history script. Defaults to no.
    fn confirm_save_to_file(&self) -> DeployResult<bool>;

    /// Whether to run the built command. Defaults to yes.
    fn confirm_deploy(&self) -> DeployResult<bool>;
}

/// One entry in the metadata multi-select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataChoice {
    pub label: String,
    pub identifier: String,
}

/// Build the selection list: components first, then conflicts tagged
/// `(conflict)`, de-duplicated by identifier.
pub fn metadata_choices(
    components: &[MetadataComponent],
    conflicts: &[MetadataComponent],
) -> Vec<MetadataChoice> {
    let mut choices: Vec<MetadataChoice> = Vec::with_capacity(components.len() + conflicts.len());

    for component in components {
        let identifier = component.identifier();
        if choices.iter().all(|c| c.identifier != identifier) {
            choices.push(MetadataChoice {
                label: identifier.clone(),
                identifier,
            });
        }
    }

    for conflict in conflicts {
        let identifier = conflict.identifier();
        if choices.iter().all(|c| c.identifier != identifier) {
            choices.push(MetadataChoice {
                label: format!("{identifier} (conflict)"),
                identifier,
            });
        }
    }

    choices
}

/// `Prompter` asking on the attached terminal via dialoguer.
pub struct TerminalPrompter {
    caps: TermCaps,
    theme: WizardTheme,
}

impl TerminalPrompter {
    pub fn new(caps: TermCaps) -> Self {
        Self {
            caps,
            theme: WizardTheme::new(caps.unicode),
        }
    }
}

fn prompt_err(err: dialoguer::Error) -> DeployError {
    match err {
        dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
            DeployError::Interrupted
        }
        other => DeployError::Prompt(other.to_string()),
    }
}

impl Prompter for TerminalPrompter {
    fn ask_target_org(&self) -> DeployResult<Option<String>> {
        let org: String = Input::with_theme(&self.theme)
            .with_prompt("Target org (leave blank for the default org)")
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_err)?;

        let org = org.trim().to_string();
        Ok(if org.is_empty() { None } else { Some(org) })
    }

    fn confirm_continue_with_conflicts(
        &self,
        conflicts: &[MetadataComponent],
    ) -> DeployResult<bool> {
        eprintln!();
        eprintln!(
            "{} {}",
            Icon::Warning.colored(self.caps),
            paint(
                "Conflicts detected in the following components:",
                colors::WARNING,
                self.caps.color,
            )
        );
        for conflict in conflicts {
            eprintln!("  - {}", conflict.identifier());
            eprintln!("      {}", conflict.path);
        }
        eprintln!();

        Confirm::with_theme(&self.theme)
            .with_prompt("Proceed to selecting components to deploy?")
            .default(false)
            .interact()
            .map_err(prompt_err)
    }

    fn select_metadata(
        &self,
        components: &[MetadataComponent],
        conflicts: &[MetadataComponent],
    ) -> DeployResult<Vec<String>> {
        let choices = metadata_choices(components, conflicts);
        let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();

        loop {
            let picked = MultiSelect::with_theme(&self.theme)
                .with_prompt("Select the metadata to deploy (space toggles, enter confirms)")
                .items(&labels)
                .interact()
                .map_err(prompt_err)?;

            if picked.is_empty() {
                eprintln!(
                    "{} Select at least one item.",
                    Icon::Warning.colored(self.caps)
                );
                continue;
            }

            return Ok(picked
                .into_iter()
                .filter_map(|i| choices.get(i))
                .map(|c| c.identifier.clone())
                .collect());
        }
    }

    fn confirm_save_to_file(&self) -> DeployResult<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt("Save this command to a file?")
            .default(false)
            .interact()
            .map_err(prompt_err)
    }

    fn confirm_deploy(&self) -> DeployResult<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt("Run this command now?")
            .default(true)
            .interact()
            .map_err(prompt_err)
    }
}
