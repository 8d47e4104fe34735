//! The learned style profile and its tagged fields.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dominant convention for PR titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TitlePattern {
    /// Conventional-commit style, e.g. `feat(api): add endpoint`.
    Conventional,
    /// Ticket id leading the title, e.g. `[ABC-123] Fix login`.
    TicketPrefix,
}

impl TitlePattern {
    /// Returns the persisted name of the pattern.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Conventional => "conventional",
            Self::TicketPrefix => "ticket-prefix",
        }
    }
}

impl fmt::Display for TitlePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of the ticket identifiers a team references.
///
/// Serialized as the regular expression describing the shape so the profile
/// file stays readable by other tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketPattern {
    /// JIRA project keys, e.g. `JIRA-42`.
    #[serde(rename = r"JIRA-\d+")]
    Jira,
    /// Any key of two or more uppercase letters, e.g. `OPS-7`.
    #[serde(rename = r"[A-Z]{2,}-\d+")]
    Generic,
}

impl TicketPattern {
    /// Returns the regular expression for this ticket shape.
    pub fn regex(self) -> &'static str {
        match self {
            Self::Jira => r"JIRA-\d+",
            Self::Generic => r"[A-Z]{2,}-\d+",
        }
    }
}

impl fmt::Display for TicketPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.regex())
    }
}

/// Coarse register of PR bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Impersonal framing ("This PR ...") dominates.
    Formal,
    /// First-person or informal markers are common.
    Casual,
    /// Neither register dominates.
    Mixed,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Formal => "formal",
            Self::Casual => "casual",
            Self::Mixed => "mixed",
        })
    }
}

/// Identity of the repository a profile was learned from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

impl fmt::Display for RepositoryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Structured summary of a team's PR writing conventions.
///
/// Profiles are immutable values: relearning produces a new profile that
/// replaces the stored one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProfile {
    /// Recurring markdown headings, most frequent first.
    pub sections: Vec<String>,
    /// Whether any body uses `[ ]` / `[x]` checkboxes.
    pub uses_checkboxes: bool,
    /// Whether any body uses `-` or `*` bullets.
    pub uses_bullet_points: bool,
    /// Whether any body uses `1.` style numbered lists.
    pub uses_numbered_lists: bool,
    /// Dominant title convention, if one dominates.
    pub title_pattern: Option<TitlePattern>,
    /// Distinct conventional-commit prefixes seen in titles, e.g. `feat:`.
    pub title_prefix_examples: Vec<String>,
    /// Mean body length in characters over non-empty bodies.
    pub average_body_length: usize,
    /// Mean body length in lines over non-empty bodies.
    pub average_line_count: usize,
    /// Whether any body references a ticket id.
    pub mentions_tickets: bool,
    /// Dominant ticket id shape, if any.
    pub ticket_pattern: Option<TicketPattern>,
    /// Coarse tone classification.
    pub tone: Tone,
    /// Whether any body is written in the first person.
    pub uses_first_person: bool,
    /// Whether any body or title contains emoji.
    pub uses_emojis: bool,
    /// Canonical phrases present in a majority of bodies.
    pub always_includes: Vec<String>,
    /// Number of PRs the profile was derived from.
    pub sample_count: usize,
    /// When the profile was derived.
    pub last_updated: DateTime<Utc>,
    /// The repository the profile belongs to.
    pub repository_info: RepositoryInfo,
}

impl StyleProfile {
    /// Checks structural invariants that deserialization alone cannot.
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_count == 0 {
            return Err("sampleCount must be at least 1".to_string());
        }
        if self.repository_info.owner.trim().is_empty()
            || self.repository_info.repo.trim().is_empty()
        {
            return Err("repositoryInfo must name an owner and a repo".to_string());
        }
        Ok(())
    }
}
