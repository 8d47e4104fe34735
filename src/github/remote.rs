//! GitHub repository identity parsed from git remote URLs.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static SSH_REMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"git@github\.com:(?P<owner>[^/]+)/(?P<repo>.+?)(?:\.git)?/?$").unwrap()
});

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static HTTPS_REMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"github\.com/(?P<owner>[^/]+)/(?P<repo>.+?)(?:\.git)?/?$").unwrap()
});

/// Owner and name of a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
}

impl RepoId {
    /// Creates a repository identity.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parses an SSH (`git@github.com:owner/repo.git`) or HTTPS
    /// (`https://github.com/owner/repo.git`) remote URL.
    pub fn from_remote_url(url: &str) -> Option<Self> {
        let url = url.trim();
        let captures = SSH_REMOTE
            .captures(url)
            .or_else(|| HTTPS_REMOTE.captures(url))?;

        let owner = captures.name("owner")?.as_str();
        let repo = captures.name("repo")?.as_str();
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return None;
        }

        Some(Self::new(owner, repo))
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ssh_remote() {
        assert_eq!(
            RepoId::from_remote_url("git@github.com:acme/widgets.git"),
            Some(RepoId::new("acme", "widgets"))
        );
        assert_eq!(
            RepoId::from_remote_url("git@github.com:acme/widgets"),
            Some(RepoId::new("acme", "widgets"))
        );
    }

    #[test]
    fn parses_https_remote() {
        assert_eq!(
            RepoId::from_remote_url("https://github.com/acme/widgets.git"),
            Some(RepoId::new("acme", "widgets"))
        );
        assert_eq!(
            RepoId::from_remote_url("https://github.com/acme/widgets\n"),
            Some(RepoId::new("acme", "widgets"))
        );
        assert_eq!(
            RepoId::from_remote_url("ssh://git@github.com/acme/my.repo.git"),
            Some(RepoId::new("acme", "my.repo"))
        );
    }

    #[test]
    fn rejects_non_github_remotes() {
        assert_eq!(RepoId::from_remote_url("https://gitlab.com/acme/widgets"), None);
        assert_eq!(RepoId::from_remote_url("git@github.com:acme"), None);
        assert_eq!(RepoId::from_remote_url(""), None);
    }

    #[test]
    fn display_joins_owner_and_repo() {
        assert_eq!(RepoId::new("acme", "widgets").to_string(), "acme/widgets");
    }
}
