//! Style command: shows the learned PR style.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::actions;
use crate::data::to_yaml;
use crate::git::GitRepository;
use crate::style::StyleStore;

/// Output formats for the stored profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StyleFormat {
    /// Human-readable report.
    #[default]
    Text,
    /// The stored JSON document.
    Json,
    /// YAML rendering of the profile.
    Yaml,
}

/// Style command options.
#[derive(Parser)]
pub struct StyleCommand {
    /// Output format.
    #[arg(long, value_enum, default_value_t = StyleFormat::Text)]
    pub format: StyleFormat,
}

impl StyleCommand {
    /// Executes the style command.
    pub fn execute(self) -> Result<()> {
        crate::utils::check_git_repository()?;

        if self.format == StyleFormat::Text {
            return super::finish(actions::get_learned_style());
        }

        let repo = GitRepository::open().context("Failed to open git repository")?;
        let profile = StyleStore::for_repository(repo.root()?)
            .load()
            .context("No learned style. Run learn_pr_style first.")?;

        let output = match self.format {
            StyleFormat::Json => serde_json::to_string_pretty(&profile)
                .context("Failed to serialize style profile")?,
            _ => to_yaml(&profile)?,
        };
        print!("{output}");
        if !output.ends_with('\n') {
            println!();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn parses_format_flag() {
        let cli = Cli::parse_from(["pr-style", "style", "--format", "yaml"]);
        match cli.command {
            Commands::Style(cmd) => assert_eq!(cmd.format, StyleFormat::Yaml),
            _ => panic!("expected style command"),
        }
    }

    #[test]
    fn format_defaults_to_text() {
        let cli = Cli::parse_from(["pr-style", "style"]);
        match cli.command {
            Commands::Style(cmd) => assert_eq!(cmd.format, StyleFormat::Text),
            _ => panic!("expected style command"),
        }
    }
}
