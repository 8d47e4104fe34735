//! Error kinds surfaced by style learning and PR drafting.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the style pipeline and its collaborators.
#[derive(Error, Debug)]
pub enum PrStyleError {
    /// A required parameter is missing or empty.
    #[error("{0}")]
    Input(String),

    /// The repository identity could not be resolved or is not accessible.
    #[error("{0}")]
    Access(String),

    /// Required configuration (e.g. a credential) is missing.
    #[error("{0}")]
    Config(String),

    /// No qualifying PR records were found to learn from.
    #[error("No merged PRs found in repository")]
    EmptyCorpus,

    /// Filesystem read or write failure.
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        /// The path being read or written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The corpus source API request failed.
    #[error("GitHub API request failed: {0}")]
    Api(String),

    /// Serializing a value for persistence failed.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A local git operation failed.
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),
}

impl PrStyleError {
    /// Wraps an I/O error together with the path that triggered it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for operations returning [`PrStyleError`].
pub type Result<T> = std::result::Result<T, PrStyleError>;
