//! Git repository operations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use git2::{Commit, Repository};

/// Remotes consulted, in order, when resolving the repository identity.
const IDENTITY_REMOTES: [&str; 2] = ["origin", "upstream"];

/// Git repository wrapper
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Open the repository containing the current directory
    pub fn open() -> Result<Self> {
        Self::open_at(".")
    }

    /// Open the repository containing the specified path
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path).context("Not in a git repository")?;

        Ok(Self { repo })
    }

    /// Get access to the underlying git2::Repository
    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    /// Get the root of the working tree
    pub fn root(&self) -> Result<PathBuf> {
        self.repo
            .workdir()
            .map(Path::to_path_buf)
            .context("Repository has no working directory (bare repository)")
    }

    /// Get current branch name
    pub fn get_current_branch(&self) -> Result<String> {
        let head = self.repo.head().context("Failed to get HEAD reference")?;

        if let Some(name) = head.shorthand() {
            if name != "HEAD" {
                return Ok(name.to_string());
            }
        }

        anyhow::bail!("Repository is in detached HEAD state")
    }

    /// Get the commit HEAD points at, if any
    pub fn head_commit(&self) -> Option<Commit<'_>> {
        self.repo.head().ok()?.peel_to_commit().ok()
    }

    /// Resolve a branch to the commits it may name, `<branch>` then `origin/<branch>`
    pub fn base_candidates(&self, branch: &str) -> Vec<Commit<'_>> {
        [branch.to_string(), format!("origin/{branch}")]
            .iter()
            .filter_map(|spec| self.repo.revparse_single(spec).ok()?.peel_to_commit().ok())
            .collect()
    }

    /// Get the URL of the `origin` remote, falling back to `upstream`
    pub fn remote_url(&self) -> Result<String> {
        for name in IDENTITY_REMOTES {
            if let Ok(remote) = self.repo.find_remote(name) {
                if let Some(url) = remote.url() {
                    return Ok(url.to_string());
                }
            }
        }

        anyhow::bail!("No origin or upstream remote configured")
    }
}
