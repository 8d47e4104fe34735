//! Branch change set gathered for PR generation

use anyhow::{Context, Result};
use git2::{Diff, DiffFormat, DiffStatsFormat, Oid, Repository, Sort};
use tracing::debug;

use super::repository::GitRepository;

/// Width used when rendering the file change summary.
const STAT_WIDTH: usize = 80;

/// Everything known about the current branch's changes relative to a base.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// Current branch name
    pub branch_name: String,
    /// Subjects of commits on the branch but not on the base, oldest first
    pub commit_subjects: Vec<String>,
    /// Per-file change summary in `git diff --stat` shape
    pub file_summary: String,
    /// Unified diff text
    pub diff: String,
}

impl ChangeSet {
    /// Collects the changes of HEAD relative to `base`.
    ///
    /// The base is resolved as `base`, then `origin/<base>`; the first one
    /// sharing history with HEAD wins. When none does, or the branch has no
    /// committed changes against it, the staged and unstaged working-copy
    /// changes are used instead. Never fails on an unknown or unrelated base;
    /// the affected fields are simply empty.
    pub fn collect(repo: &GitRepository, base: &str) -> Result<Self> {
        let git = repo.repository();
        let branch_name = repo
            .get_current_branch()
            .unwrap_or_else(|_| "HEAD".to_string());

        let head = repo.head_commit();
        let range = head
            .as_ref()
            .and_then(|head| related_base(repo, base, head.id()).map(|r| (head.id(), r)));

        let (commit_subjects, committed) = match range {
            Some((head, (base_id, merge_base))) => {
                let subjects = branch_subjects(git, head, base_id)?;
                let diff = tree_diff(git, merge_base, head)?;
                (subjects, Some(diff))
            }
            None => {
                debug!(base = %base, "No base related to HEAD, using working copy changes");
                (Vec::new(), None)
            }
        };

        let committed = committed.filter(|diff| diff.deltas().len() > 0);

        let (diff, file_summary) = match committed {
            Some(diff) => (patch_text(&diff)?, stat_text(&diff)?),
            None => working_copy_changes(git, head.as_ref())?,
        };

        debug!(
            branch = %branch_name,
            commits = commit_subjects.len(),
            diff_bytes = diff.len(),
            "Collected branch changes"
        );

        Ok(Self {
            branch_name,
            commit_subjects,
            file_summary,
            diff,
        })
    }
}

/// First base candidate sharing history with `head`, with their merge base.
fn related_base(repo: &GitRepository, base: &str, head: Oid) -> Option<(Oid, Oid)> {
    repo.base_candidates(base).iter().find_map(|candidate| {
        match repo.repository().merge_base(candidate.id(), head) {
            Ok(merge_base) => Some((candidate.id(), merge_base)),
            Err(e) => {
                debug!(base = %candidate.id(), error = %e, "Base shares no history with HEAD");
                None
            }
        }
    })
}

/// Subjects of non-merge commits reachable from `head` but not from `base`.
fn branch_subjects(repo: &Repository, head: Oid, base: Oid) -> Result<Vec<String>> {
    let mut revwalk = repo.revwalk().context("Failed to create revwalk")?;
    revwalk
        .set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)
        .context("Failed to set revwalk order")?;
    revwalk.push(head).context("Failed to push HEAD to revwalk")?;
    revwalk.hide(base).context("Failed to hide base from revwalk")?;

    let mut subjects = Vec::new();
    for oid in revwalk {
        let oid = oid.context("Failed to walk commits")?;
        let commit = repo.find_commit(oid).context("Failed to find commit")?;

        if commit.parent_count() > 1 {
            continue;
        }

        if let Some(summary) = commit.summary() {
            subjects.push(summary.to_string());
        }
    }

    Ok(subjects)
}

fn tree_diff(repo: &Repository, from: Oid, to: Oid) -> Result<Diff<'_>> {
    let from_tree = repo.find_commit(from)?.tree()?;
    let to_tree = repo.find_commit(to)?.tree()?;

    repo.diff_tree_to_tree(Some(&from_tree), Some(&to_tree), None)
        .context("Failed to create diff")
}

/// Staged plus unstaged changes, with the summary covering both.
fn working_copy_changes(
    repo: &Repository,
    head: Option<&git2::Commit<'_>>,
) -> Result<(String, String)> {
    let head_tree = head.map(|c| c.tree()).transpose()?;

    let staged = repo
        .diff_tree_to_index(head_tree.as_ref(), None, None)
        .context("Failed to diff staged changes")?;
    let unstaged = repo
        .diff_index_to_workdir(None, None)
        .context("Failed to diff unstaged changes")?;

    let diff = [patch_text(&staged)?, patch_text(&unstaged)?]
        .into_iter()
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    let combined = repo
        .diff_tree_to_workdir_with_index(head_tree.as_ref(), None)
        .context("Failed to diff working copy")?;

    Ok((diff, stat_text(&combined)?))
}

/// Renders a diff as unified patch text.
fn patch_text(diff: &Diff<'_>) -> Result<String> {
    let mut content = String::new();

    diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        let text = std::str::from_utf8(line.content()).unwrap_or("<binary>");
        let prefix = match line.origin() {
            '+' => "+",
            '-' => "-",
            ' ' => " ",
            _ => "",
        };
        content.push_str(prefix);
        content.push_str(text);
        true
    })
    .context("Failed to render diff")?;

    Ok(content)
}

/// Renders a diff as a `--stat` style summary.
fn stat_text(diff: &Diff<'_>) -> Result<String> {
    let stats = diff.stats().context("Failed to get diff stats")?;
    let buf = stats
        .to_buf(DiffStatsFormat::FULL, STAT_WIDTH)
        .context("Failed to render diff stats")?;

    Ok(buf.as_str().unwrap_or_default().to_string())
}
