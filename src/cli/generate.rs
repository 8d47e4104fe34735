//! Generate command: prints the PR generation prompt for the current branch.

use anyhow::Result;
use clap::Parser;

use crate::actions::{self, DEFAULT_BASE_BRANCH};

/// Generate command options.
#[derive(Parser)]
pub struct GenerateCommand {
    /// Branch to compare the current branch against.
    #[arg(long, default_value = DEFAULT_BASE_BRANCH)]
    pub base: String,

    /// Includes the (truncated) diff in the prompt.
    #[arg(long)]
    pub include_diff: bool,
}

impl GenerateCommand {
    /// Executes the generate command.
    pub fn execute(self) -> Result<()> {
        crate::utils::check_git_repository()?;

        super::finish(actions::generate_pr_text(&self.base, self.include_diff))
    }
}
