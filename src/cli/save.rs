//! Save command: writes PR_DESCRIPTION.md at the repository root.

use anyhow::Result;
use clap::Parser;

use crate::actions;

/// Save command options.
#[derive(Parser)]
pub struct SaveCommand {
    /// PR title.
    #[arg(long)]
    pub title: String,

    /// PR body in markdown.
    #[arg(long)]
    pub body: String,
}

impl SaveCommand {
    /// Executes the save command.
    pub fn execute(self) -> Result<()> {
        super::finish(actions::save_pr_description(&self.title, &self.body))
    }
}
