//! Instruction document handed to an external PR text generator.

use crate::git::ChangeSet;
use crate::style::{render, StyleProfile};

/// Maximum number of diff characters embedded in the prompt.
pub const MAX_DIFF_CHARS: usize = 6000;

/// Marker appended to a diff cut at [`MAX_DIFF_CHARS`].
pub const TRUNCATION_MARKER: &str = "\n... (truncated)";

/// Assembles the generation prompt from resolved change data and an optional profile.
pub fn assemble(changes: &ChangeSet, style: Option<&StyleProfile>, include_diff: bool) -> String {
    let mut lines: Vec<String> = vec![
        "Generate a pull request title and description based on the following.".to_string(),
        String::new(),
    ];

    match style {
        Some(profile) => {
            lines.push("## Team PR Style (FOLLOW THIS EXACTLY)".to_string());
            lines.push(String::new());
            lines.push(render(profile));
            lines.push(String::new());
        }
        None => {
            lines.push(
                "## Note: No learned style found. Run `learn_pr_style` first for better results."
                    .to_string(),
            );
            lines.push(String::new());
        }
    }

    lines.push(format!("## Branch: `{}`", changes.branch_name));
    lines.push(String::new());

    if !changes.commit_subjects.is_empty() {
        lines.push("## Commits".to_string());
        lines.extend(changes.commit_subjects.iter().map(|s| format!("- {s}")));
        lines.push(String::new());
    }

    lines.push("## Files Changed".to_string());
    lines.push("```".to_string());
    lines.push(changes.file_summary.trim_end().to_string());
    lines.push("```".to_string());
    lines.push(String::new());

    if include_diff && !changes.diff.is_empty() {
        lines.push("## Diff".to_string());
        lines.push("```diff".to_string());
        lines.push(truncate_diff(&changes.diff));
        lines.push("```".to_string());
        lines.push(String::new());
    }

    lines.extend(
        [
            "## Instructions",
            "Generate:",
            "1. **Title** - concise, following team style if available",
            "2. **Description** - full PR body with appropriate sections",
            "",
            "After generating, call `save_pr_description` to save as PR_DESCRIPTION.md",
        ]
        .map(String::from),
    );

    lines.join("\n")
}

/// Cuts the diff to [`MAX_DIFF_CHARS`] characters, appending the marker when cut.
fn truncate_diff(diff: &str) -> String {
    match diff.char_indices().nth(MAX_DIFF_CHARS) {
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &diff[..cut]),
        None => diff.to_string(),
    }
}
