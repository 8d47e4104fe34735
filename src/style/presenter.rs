//! Human-readable rendering of a style profile.

use super::profile::StyleProfile;

/// Placeholder for list fields with nothing detected.
const NONE_DETECTED: &str = "None detected";

/// Renders a profile as a markdown report.
///
/// The output depends only on the profile, so it is used both for the
/// standalone report and inside generation prompts.
pub fn render(profile: &StyleProfile) -> String {
    let mut lines = vec![
        format!("## Learned PR Style for {}", profile.repository_info),
        format!(
            "Based on {} merged PRs (updated: {})",
            profile.sample_count,
            profile.last_updated.format("%Y-%m-%d")
        ),
        String::new(),
        "### Structure".to_string(),
        format!("- Sections: {}", join_or_none(&profile.sections)),
        format!("- Checkboxes: {}", yes_no(profile.uses_checkboxes)),
        format!("- Bullet points: {}", yes_no(profile.uses_bullet_points)),
        format!("- Numbered lists: {}", yes_no(profile.uses_numbered_lists)),
        format!(
            "- Average length: ~{} lines (~{} characters)",
            profile.average_line_count, profile.average_body_length
        ),
        format!(
            "- Always includes: {}",
            join_or_none(&profile.always_includes)
        ),
        String::new(),
        "### Title Style".to_string(),
        format!(
            "- Pattern: {}",
            profile
                .title_pattern
                .map_or_else(|| "No consistent pattern".to_string(), |p| p.to_string())
        ),
        format!(
            "- Prefixes: {}",
            join_or_none(&profile.title_prefix_examples)
        ),
        String::new(),
        "### Tone".to_string(),
        format!("- Style: {}", profile.tone),
        format!("- First person: {}", yes_no(profile.uses_first_person)),
        format!("- Emojis: {}", yes_no(profile.uses_emojis)),
    ];

    if profile.mentions_tickets {
        lines.push(String::new());
        lines.push("### Tickets".to_string());
        lines.push(format!(
            "- Pattern: {}",
            profile
                .ticket_pattern
                .map_or_else(|| NONE_DETECTED.to_string(), |p| p.to_string())
        ));
    }

    lines.join("\n")
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        NONE_DETECTED.to_string()
    } else {
        items.join(", ")
    }
}
