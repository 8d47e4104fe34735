//! Generated pull request descriptions and their markdown file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PrStyleError, Result};

/// File name of the saved description, relative to the repository root.
pub const DESCRIPTION_FILE_NAME: &str = "PR_DESCRIPTION.md";

/// A drafted pull request title and body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrDescription {
    /// Concise PR title.
    pub title: String,
    /// Full PR body in markdown.
    pub body: String,
}

impl PrDescription {
    /// Creates a description, rejecting a blank title or body.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Result<Self> {
        let title = title.into();
        let body = body.into();

        if title.trim().is_empty() || body.trim().is_empty() {
            return Err(PrStyleError::Input(
                "Title and body are required".to_string(),
            ));
        }

        Ok(Self { title, body })
    }

    /// Renders the description as markdown with the title as an H1.
    pub fn to_markdown(&self) -> String {
        format!("# {}\n\n{}\n", self.title, self.body)
    }

    /// Writes the description to `PR_DESCRIPTION.md` under `repo_root`.
    pub fn write_to<P: AsRef<Path>>(&self, repo_root: P) -> Result<PathBuf> {
        let path = repo_root.as_ref().join(DESCRIPTION_FILE_NAME);
        fs::write(&path, self.to_markdown()).map_err(|e| PrStyleError::io(&path, e))?;
        Ok(path)
    }
}
