//! Learn command: derives the PR style from merged pull requests.

use anyhow::Result;
use clap::builder::TypedValueParser;
use clap::Parser;

use crate::actions::{self, DEFAULT_LEARN_COUNT};

/// Learn command options.
#[derive(Parser)]
pub struct LearnCommand {
    /// Number of recent merged PRs to analyze.
    #[arg(long, short = 'n', default_value_t = DEFAULT_LEARN_COUNT,
          value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub count: usize,
}

impl LearnCommand {
    /// Executes the learn command.
    pub async fn execute(self) -> Result<()> {
        crate::utils::check_git_repository()?;

        super::finish(actions::learn_style(self.count).await)
    }
}
