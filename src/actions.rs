//! The four operations exposed to command surfaces.
//!
//! Every operation reports its failures in the returned [`ActionOutcome`]
//! instead of propagating them, so the CLI and the MCP server can forward
//! the text as-is.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::data::PrDescription;
use crate::error::{PrStyleError, Result};
use crate::git::{ChangeSet, GitRepository};
use crate::github::{GitHubClient, PrSource, RepoId};
use crate::prompt;
use crate::style::{render, StyleExtractor, StyleStore};
use crate::utils::{api_base_url, github_token};

/// Default number of merged PRs to learn from.
pub const DEFAULT_LEARN_COUNT: usize = 10;

/// Default base branch for generation.
pub const DEFAULT_BASE_BRANCH: &str = "main";

/// Warning prepended to generated prompts when no style was learned.
pub const NO_STYLE_WARNING: &str = "⚠️ No learned style. Run learn_pr_style first.\n\n";

/// Success flag and human-readable text of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Text to show the caller.
    pub text: String,
}

impl ActionOutcome {
    fn succeeded(text: impl Into<String>) -> Self {
        Self {
            success: true,
            text: text.into(),
        }
    }

    fn failed(text: impl Into<String>) -> Self {
        Self {
            success: false,
            text: text.into(),
        }
    }
}

impl From<Result<String>> for ActionOutcome {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(text) => Self::succeeded(text),
            Err(e) => Self::failed(e.to_string()),
        }
    }
}

/// Learns the style of the repository in the current directory from its
/// `count` most recent merged PRs and stores it.
pub async fn learn_style(count: usize) -> ActionOutcome {
    learn_in_current_repository(count).await.into()
}

async fn learn_in_current_repository(count: usize) -> Result<String> {
    let (root, repo_id) = {
        let repo = open_repository()?;
        (repository_root(&repo)?, resolve_repo_id(&repo)?)
    };
    let token = github_token()?;
    let client = GitHubClient::with_base_url(token, &api_base_url())?;

    learn_from_source(&client, &repo_id, &StyleStore::for_repository(root), count).await
}

/// Learns from an arbitrary corpus source and saves into `store`.
pub async fn learn_from_source(
    source: &dyn PrSource,
    repo_id: &RepoId,
    store: &StyleStore,
    count: usize,
) -> Result<String> {
    if !source.verify_access(repo_id).await {
        return Err(PrStyleError::Access(format!(
            "Cannot access {repo_id}. Check your GITHUB_TOKEN."
        )));
    }

    let prs = source.fetch_merged_prs(repo_id, count).await?;
    info!(repository = %repo_id, count = prs.len(), "Fetched merged PRs");

    let profile = StyleExtractor::extract(&prs, &repo_id.owner, &repo_id.repo)?;
    store.save(&profile)?;

    Ok([
        format!("✅ Learned PR style from {} merged PRs!", prs.len()),
        String::new(),
        render(&profile),
        String::new(),
        format!("📁 Saved to: {}", store.path().display()),
    ]
    .join("\n"))
}

/// Builds the generation prompt for the current branch against `base`.
pub fn generate_pr_text(base: &str, include_diff: bool) -> ActionOutcome {
    open_repository()
        .and_then(|repo| generate_in(&repo, base, include_diff))
        .into()
}

/// Builds the generation prompt for `repo`, prefixed with a warning when
/// no style profile is stored.
pub fn generate_in(repo: &GitRepository, base: &str, include_diff: bool) -> Result<String> {
    let root = repository_root(repo)?;
    let changes = ChangeSet::collect(repo, base)
        .map_err(|e| PrStyleError::Access(format!("Failed to read changes: {e:#}")))?;
    let style = StyleStore::for_repository(&root).load();

    if style.is_none() {
        debug!("No stored style profile, generating without guidance");
    }

    let prefix = if style.is_some() { "" } else { NO_STYLE_WARNING };
    Ok(format!(
        "{prefix}{}",
        prompt::assemble(&changes, style.as_ref(), include_diff)
    ))
}

/// Writes `PR_DESCRIPTION.md` at the root of the current repository.
pub fn save_pr_description(title: &str, body: &str) -> ActionOutcome {
    PrDescription::new(title, body)
        .and_then(|description| {
            let repo = open_repository()?;
            save_in(&repository_root(&repo)?, &description)
        })
        .into()
}

/// Writes `description` under `root`.
pub fn save_in(root: &Path, description: &PrDescription) -> Result<String> {
    let path = description.write_to(root)?;
    info!(path = %path.display(), "Saved PR description");
    Ok(format!("✅ PR description saved to {}", path.display()))
}

/// Renders the stored style profile of the current repository.
pub fn get_learned_style() -> ActionOutcome {
    open_repository()
        .and_then(|repo| repository_root(&repo))
        .and_then(|root| style_in(&root))
        .into()
}

/// Renders the profile stored under `root`.
pub fn style_in(root: &Path) -> Result<String> {
    StyleStore::for_repository(root)
        .load()
        .map(|profile| render(&profile))
        .ok_or_else(|| PrStyleError::Input("No learned style. Run learn_pr_style first.".into()))
}

fn open_repository() -> Result<GitRepository> {
    GitRepository::open().map_err(|e| PrStyleError::Access(format!("{e:#}")))
}

fn repository_root(repo: &GitRepository) -> Result<PathBuf> {
    repo.root().map_err(|e| PrStyleError::Access(format!("{e:#}")))
}

fn resolve_repo_id(repo: &GitRepository) -> Result<RepoId> {
    let url = repo
        .remote_url()
        .map_err(|e| PrStyleError::Access(format!("{e:#}")))?;

    RepoId::from_remote_url(&url).ok_or_else(|| {
        PrStyleError::Access(format!("Could not parse GitHub repository from: {url}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PrRecord;
    use std::future::Future;
    use std::pin::Pin;
    use tempfile::TempDir;

    struct FakeSource {
        accessible: bool,
        prs: Vec<PrRecord>,
    }

    impl PrSource for FakeSource {
        fn fetch_merged_prs<'a>(
            &'a self,
            _repo: &'a RepoId,
            count: usize,
        ) -> Pin<Box<dyn Future<Output = Result<Vec<PrRecord>>> + Send + 'a>> {
            Box::pin(async move { Ok(self.prs.iter().take(count).cloned().collect()) })
        }

        fn verify_access<'a>(
            &'a self,
            _repo: &'a RepoId,
        ) -> Pin<Box<dyn Future<Output = bool> + Send + 'a>> {
            Box::pin(async move { self.accessible })
        }
    }

    fn corpus() -> Vec<PrRecord> {
        vec![
            PrRecord::new(3, "feat: add export", "## Summary\nAdds export\n\n## Testing\n- unit"),
            PrRecord::new(2, "fix: crash on empty input", "## Summary\nFixes crash"),
            PrRecord::new(1, "chore: bump deps", ""),
        ]
    }

    #[tokio::test]
    async fn learn_saves_profile_and_reports() {
        let dir = TempDir::new().unwrap();
        let store = StyleStore::for_repository(dir.path());
        let source = FakeSource {
            accessible: true,
            prs: corpus(),
        };

        let text = learn_from_source(&source, &RepoId::new("acme", "widgets"), &store, 10)
            .await
            .unwrap();

        assert!(text.starts_with("✅ Learned PR style from 3 merged PRs!\n\n"));
        assert!(text.contains("## Learned PR Style for acme/widgets"));
        assert!(text.ends_with(&format!("📁 Saved to: {}", store.path().display())));

        let profile = store.load().unwrap();
        assert_eq!(profile.sample_count, 3);
        assert_eq!(profile.repository_info.to_string(), "acme/widgets");
    }

    #[tokio::test]
    async fn learn_respects_count() {
        let dir = TempDir::new().unwrap();
        let store = StyleStore::for_repository(dir.path());
        let source = FakeSource {
            accessible: true,
            prs: corpus(),
        };

        learn_from_source(&source, &RepoId::new("acme", "widgets"), &store, 2)
            .await
            .unwrap();

        assert_eq!(store.load().unwrap().sample_count, 2);
    }

    #[tokio::test]
    async fn learn_fails_without_access() {
        let dir = TempDir::new().unwrap();
        let store = StyleStore::for_repository(dir.path());
        let source = FakeSource {
            accessible: false,
            prs: corpus(),
        };

        let err = learn_from_source(&source, &RepoId::new("acme", "secret"), &store, 10)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Cannot access acme/secret. Check your GITHUB_TOKEN."
        );
        assert!(store.load().is_none());
    }

    #[tokio::test]
    async fn learn_fails_on_empty_corpus_without_writing() {
        let dir = TempDir::new().unwrap();
        let store = StyleStore::for_repository(dir.path());
        let source = FakeSource {
            accessible: true,
            prs: Vec::new(),
        };

        let outcome: ActionOutcome =
            learn_from_source(&source, &RepoId::new("acme", "widgets"), &store, 10)
                .await
                .into();

        assert!(!outcome.success);
        assert_eq!(outcome.text, "No merged PRs found in repository");
        assert!(!store.path().exists());
    }

    #[test]
    fn save_writes_markdown() {
        let dir = TempDir::new().unwrap();
        let description = PrDescription::new("Add export", "## Summary\nAdds export").unwrap();

        let text = save_in(dir.path(), &description).unwrap();

        let path = dir.path().join("PR_DESCRIPTION.md");
        assert_eq!(
            text,
            format!("✅ PR description saved to {}", path.display())
        );
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "# Add export\n\n## Summary\nAdds export\n"
        );
    }

    #[test]
    fn save_rejects_blank_title_before_touching_disk() {
        let outcome = save_pr_description("", "body");
        assert!(!outcome.success);
        assert_eq!(outcome.text, "Title and body are required");
    }

    #[test]
    fn style_reports_missing_profile() {
        let dir = TempDir::new().unwrap();
        let outcome: ActionOutcome = style_in(dir.path()).into();

        assert!(!outcome.success);
        assert_eq!(outcome.text, "No learned style. Run learn_pr_style first.");
    }

    #[tokio::test]
    async fn style_renders_stored_profile() {
        let dir = TempDir::new().unwrap();
        let store = StyleStore::for_repository(dir.path());
        let source = FakeSource {
            accessible: true,
            prs: corpus(),
        };
        learn_from_source(&source, &RepoId::new("acme", "widgets"), &store, 10)
            .await
            .unwrap();

        let text = style_in(dir.path()).unwrap();
        assert_eq!(text, render(&store.load().unwrap()));
    }
}
