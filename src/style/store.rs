//! File-backed persistence for the learned style profile.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::profile::StyleProfile;
use crate::error::{PrStyleError, Result};

/// File name of the stored profile, relative to the repository root.
pub const STYLE_FILE_NAME: &str = ".pr-style.json";

/// Stores exactly one style profile per repository working copy.
#[derive(Debug, Clone)]
pub struct StyleStore {
    path: PathBuf,
}

impl StyleStore {
    /// Creates a store for the repository rooted at `repo_root`.
    pub fn for_repository<P: AsRef<Path>>(repo_root: P) -> Self {
        Self {
            path: repo_root.as_ref().join(STYLE_FILE_NAME),
        }
    }

    /// Creates a store backed by an explicit file path.
    pub fn at<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored profile.
    ///
    /// Returns `None` when nothing was saved yet, and also when the file is
    /// unreadable or does not describe a valid profile.
    pub fn load(&self) -> Option<StyleProfile> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No stored style profile");
            return None;
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read style profile");
                return None;
            }
        };

        let profile: StyleProfile = match serde_json::from_str(&content) {
            Ok(profile) => profile,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring malformed style profile");
                return None;
            }
        };

        if let Err(reason) = profile.validate() {
            warn!(path = %self.path.display(), %reason, "Ignoring invalid style profile");
            return None;
        }

        Some(profile)
    }

    /// Replaces the stored profile with `profile`.
    ///
    /// The JSON is written to a sibling temp file and renamed into place, so
    /// readers never observe a partially written profile.
    pub fn save(&self, profile: &StyleProfile) -> Result<()> {
        let json = serde_json::to_string_pretty(profile)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut temp = tempfile::NamedTempFile::new_in(&dir)
            .map_err(|e| PrStyleError::io(&self.path, e))?;
        temp.write_all(json.as_bytes())
            .and_then(|()| temp.write_all(b"\n"))
            .map_err(|e| PrStyleError::io(&self.path, e))?;
        temp.persist(&self.path)
            .map_err(|e| PrStyleError::io(&self.path, e.error))?;

        debug!(
            path = %self.path.display(),
            sample_count = profile.sample_count,
            "Saved style profile"
        );
        Ok(())
    }
}
