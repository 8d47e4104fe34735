//! CLI interface for pr-style.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::actions::ActionOutcome;

pub mod generate;
pub mod learn;
pub mod save;
pub mod style;

/// pr-style: learns a team's pull request conventions and drafts new PRs in them.
#[derive(Parser)]
#[command(name = "pr-style")]
#[command(about = "Learn your team's PR style and draft PRs that follow it", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Learns the PR style from recently merged pull requests.
    Learn(learn::LearnCommand),
    /// Prints a generation prompt for the current branch.
    Generate(generate::GenerateCommand),
    /// Saves a drafted title and body to PR_DESCRIPTION.md.
    Save(save::SaveCommand),
    /// Shows the learned PR style.
    Style(style::StyleCommand),
}

impl Cli {
    /// Executes the CLI command.
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Learn(learn_cmd) => learn_cmd.execute().await,
            Commands::Generate(generate_cmd) => generate_cmd.execute(),
            Commands::Save(save_cmd) => save_cmd.execute(),
            Commands::Style(style_cmd) => style_cmd.execute(),
        }
    }
}

/// Prints a successful outcome to stdout, turning a failed one into an error.
pub(crate) fn finish(outcome: ActionOutcome) -> Result<()> {
    if !outcome.success {
        anyhow::bail!(outcome.text);
    }

    println!("{}", outcome.text);
    Ok(())
}
