//! Merged pull request records fetched from the corpus source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A merged pull request as seen by the style extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrRecord {
    /// Pull request number.
    pub number: u64,
    /// Pull request title.
    pub title: String,
    /// Pull request body, empty when the author left none.
    pub body: String,
    /// When the pull request was merged.
    pub merged_at: Option<DateTime<Utc>>,
    /// Login of the author, `"unknown"` when not available.
    pub author: String,
    /// Label names attached to the pull request.
    pub labels: Vec<String>,
    /// Lines added, zero when details could not be fetched.
    pub additions: u64,
    /// Lines deleted, zero when details could not be fetched.
    pub deletions: u64,
    /// Number of files changed, zero when details could not be fetched.
    pub changed_files: u64,
}

impl PrRecord {
    /// Creates a record with the given title and body and empty metadata.
    pub fn new(number: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            body: body.into(),
            merged_at: None,
            author: "unknown".to_string(),
            labels: Vec::new(),
            additions: 0,
            deletions: 0,
            changed_files: 0,
        }
    }
}
