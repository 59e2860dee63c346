//! sfdeploy CLI - interactive, conflict-aware deploys through the Salesforce CLI
//!
//! Usage: sfdeploy [-o <org>] [--history-dir <dir>]
//!
//! Runs the deploy wizard: target org → preview → conflict confirmation →
//! metadata selection → optional save → optional run.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;

use sfdeploy::error::DeployError;
use sfdeploy::history::{FsHistoryStore, DEFAULT_HISTORY_DIR};
use sfdeploy::preview::SfCli;
use sfdeploy::prompt::TerminalPrompter;
use sfdeploy::runner::ShellRunner;
use sfdeploy::theme::{self, Icon};
use sfdeploy::wizard::{Wizard, WizardOutcome};

/// sfdeploy - interactive deploy wizard for the Salesforce CLI
#[derive(Parser, Debug)]
#[command(name = "sfdeploy")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Target org; skips the org prompt
    #[arg(short = 'o', long)]
    target_org: Option<String>,

    /// Directory generated deploy scripts are saved to
    #[arg(long, default_value = DEFAULT_HISTORY_DIR)]
    history_dir: PathBuf,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    let caps = theme::detect();

    match run(cli) {
        Ok(outcome) => process::exit(outcome.exit_code()),
        Err(err) => {
            if let Some(DeployError::Interrupted) = err.downcast_ref::<DeployError>() {
                eprintln!("\nInterrupted.");
                process::exit(1);
            }
            eprintln!("\n{} {err:#}", Icon::Error.colored(caps));
            let code = err
                .downcast_ref::<DeployError>()
                .map_or(1, DeployError::exit_code);
            process::exit(code);
        }
    }
}

fn run(cli: Cli) -> Result<WizardOutcome> {
    if !std::io::stdin().is_terminal() {
        anyhow::bail!("sfdeploy is interactive and needs a terminal on stdin");
    }

    // SIGINT outside a prompt (prompts catch Ctrl+C themselves in raw mode)
    ctrlc::set_handler(|| {
        eprintln!("\nInterrupted.");
        process::exit(1);
    })
    .context("failed to install the interrupt handler")?;

    if cli.verbose > 0 {
        eprintln!("history dir: {}", cli.history_dir.display());
        match &cli.target_org {
            Some(org) => eprintln!("target org: {org}"),
            None => eprintln!("target org: (will prompt)"),
        }
    }

    let caps = theme::detect();
    let preview = SfCli;
    let prompter = TerminalPrompter::new(caps);
    let history = FsHistoryStore::new(cli.history_dir);
    let runner = ShellRunner;

    let wizard = Wizard {
        preview: &preview,
        prompter: &prompter,
        history: &history,
        runner: &runner,
    };

    Ok(wizard.run(cli.target_org)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::try_parse_from(["sfdeploy"]).unwrap();
        assert!(cli.target_org.is_none());
        assert_eq!(cli.history_dir, PathBuf::from(DEFAULT_HISTORY_DIR));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parse_target_org() {
        let cli = Cli::try_parse_from(["sfdeploy", "-o", "my-sandbox"]).unwrap();
        assert_eq!(cli.target_org.as_deref(), Some("my-sandbox"));

        let cli = Cli::try_parse_from(["sfdeploy", "--target-org", "my-sandbox"]).unwrap();
        assert_eq!(cli.target_org.as_deref(), Some("my-sandbox"));
    }

    #[test]
    fn test_cli_parse_history_dir() {
        let cli = Cli::try_parse_from(["sfdeploy", "--history-dir", "/tmp/history"]).unwrap();
        assert_eq!(cli.history_dir, PathBuf::from("/tmp/history"));
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["sfdeploy", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_rejects_unknown_args() {
        assert!(Cli::try_parse_from(["sfdeploy", "--force"]).is_err());
    }
}
