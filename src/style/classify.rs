//! Pure text classifiers used by the style extractor.
//!
//! Each function looks at one aspect of a title or body and returns a plain
//! value. None of them fail: text without the pattern simply does not match.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::profile::{TicketPattern, TitlePattern, Tone};

/// Canonical phrases checked for `alwaysIncludes`.
pub const COMMON_PHRASES: &[&str] = &[
    "## Description",
    "## Testing",
    "## Changes",
    "Fixes #",
    "Closes #",
];

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static HEADING_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,3}\s+\S").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static CHECKBOX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[ x]\]").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static BULLET_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*[-*]\s").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static NUMBERED_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*\d+\.\s").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static CONVENTIONAL_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<type>feat|fix|docs|style|refactor|test|chore|build|ci|perf|revert)(?:\([^)]+\))?!?:\s",
    )
    .unwrap()
});

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static TITLE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<type>feat|fix|docs|style|refactor|test|chore|build|ci|perf|revert)(?:\([^)]+\))?!?:",
    )
    .unwrap()
});

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static TICKET_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[?[A-Z]+-\d+\]?\s").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static TICKET_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]+-\d+").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static JIRA_TICKET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"JIRA-\d+").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static GENERIC_TICKET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Z]{2,}-\d+").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static FORMAL_FRAMING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(this pr|this commit|this change)\b").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static CASUAL_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(i |we |gonna|wanna|lol)\b").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static FIRST_PERSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(i |i'|my |we |we'|our )").unwrap());

/// Returns true when `count` is strictly more than half of `total`.
pub fn is_strict_majority(count: usize, total: usize) -> bool {
    count * 2 > total
}

/// Returns true when `count` is strictly more than `percent`% of `total`.
pub fn exceeds_percent(count: usize, total: usize, percent: usize) -> bool {
    count * 100 > total * percent
}

/// Returns true when `count` is at least `percent`% of `total`.
pub fn reaches_percent(count: usize, total: usize, percent: usize) -> bool {
    count * 100 >= total * percent
}

/// Returns the distinct level 1-3 markdown heading lines of a body, in order.
pub fn headings(body: &str) -> Vec<&str> {
    let mut found: Vec<&str> = Vec::new();
    for line in body.lines() {
        if HEADING_LINE.is_match(line) {
            let heading = line.trim();
            if !found.contains(&heading) {
                found.push(heading);
            }
        }
    }
    found
}

/// Returns headings present in at least `percent`% of `bodies`, most common first.
///
/// Ties keep the order in which the headings were first seen.
pub fn common_sections(bodies: &[&str], percent: usize) -> Vec<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for body in bodies {
        for heading in headings(body) {
            let count = counts.entry(heading).or_insert(0);
            if *count == 0 {
                order.push(heading);
            }
            *count += 1;
        }
    }

    let mut kept: Vec<(&str, usize)> = order
        .into_iter()
        .map(|heading| (heading, counts.get(heading).copied().unwrap_or(0)))
        .filter(|(_, count)| reaches_percent(*count, bodies.len(), percent))
        .collect();
    // Stable sort keeps first-seen order for equal counts
    kept.sort_by(|a, b| b.1.cmp(&a.1));

    kept.into_iter()
        .map(|(heading, _)| heading.to_string())
        .collect()
}

/// Returns true if the body contains a markdown checkbox.
pub fn has_checkbox(body: &str) -> bool {
    CHECKBOX.is_match(body)
}

/// Returns true if any line starts with a `-` or `*` bullet.
pub fn has_bullet_list(body: &str) -> bool {
    BULLET_LINE.is_match(body)
}

/// Returns true if any line starts with a `1.` style item.
pub fn has_numbered_list(body: &str) -> bool {
    NUMBERED_LINE.is_match(body)
}

/// Returns true if the title follows the conventional-commit format.
pub fn is_conventional_title(title: &str) -> bool {
    CONVENTIONAL_TITLE.is_match(title)
}

/// Returns the conventional-commit type of a title, e.g. `feat`.
///
/// Only the `type:` prefix is checked, so `feat:tidy` still yields `feat`.
pub fn conventional_type(title: &str) -> Option<&str> {
    TITLE_PREFIX
        .captures(title)
        .and_then(|captures| captures.name("type"))
        .map(|m| m.as_str())
}

/// Returns true if the title leads with a ticket id like `[ABC-1]` or `ABC-1`.
pub fn is_ticket_prefixed_title(title: &str) -> bool {
    TICKET_TITLE.is_match(title)
}

/// Determines the dominant title convention.
///
/// A convention dominates when strictly more than half of the titles follow
/// it. Conventional commits are checked first.
pub fn detect_title_pattern(titles: &[&str]) -> Option<TitlePattern> {
    let conventional = titles.iter().filter(|t| is_conventional_title(t)).count();
    if is_strict_majority(conventional, titles.len()) {
        return Some(TitlePattern::Conventional);
    }

    let ticket_prefixed = titles
        .iter()
        .filter(|t| is_ticket_prefixed_title(t))
        .count();
    if is_strict_majority(ticket_prefixed, titles.len()) {
        return Some(TitlePattern::TicketPrefix);
    }

    None
}

/// Collects distinct conventional-commit prefixes (`feat:`) in first-seen order.
pub fn title_prefixes(titles: &[&str]) -> Vec<String> {
    let mut prefixes: Vec<String> = Vec::new();
    for title in titles {
        if let Some(kind) = conventional_type(title) {
            let prefix = format!("{kind}:");
            if !prefixes.contains(&prefix) {
                prefixes.push(prefix);
            }
        }
    }
    prefixes
}

/// Returns true if the text contains an uppercase ticket token like `ABC-12`.
pub fn mentions_ticket(text: &str) -> bool {
    TICKET_TOKEN.is_match(text)
}

/// Determines the ticket id shape across all texts.
///
/// The JIRA shape wins over the generic shape whenever both appear.
pub fn detect_ticket_pattern(texts: &[&str]) -> Option<TicketPattern> {
    if texts.iter().any(|t| JIRA_TICKET.is_match(t)) {
        Some(TicketPattern::Jira)
    } else if texts.iter().any(|t| GENERIC_TICKET.is_match(t)) {
        Some(TicketPattern::Generic)
    } else {
        None
    }
}

/// Returns true if the body uses impersonal framing ("This PR ...").
pub fn has_formal_framing(body: &str) -> bool {
    FORMAL_FRAMING.is_match(body)
}

/// Returns true if the body contains first-person or informal markers.
pub fn has_casual_marker(body: &str) -> bool {
    CASUAL_MARKER.is_match(body)
}

/// Classifies the overall tone of a set of bodies.
///
/// Formal wins when more than half of the bodies use impersonal framing;
/// otherwise casual wins when more than 30% carry casual markers.
pub fn classify_tone(bodies: &[&str]) -> Tone {
    let formal = bodies.iter().filter(|b| has_formal_framing(b)).count();
    let casual = bodies.iter().filter(|b| has_casual_marker(b)).count();

    if is_strict_majority(formal, bodies.len()) {
        Tone::Formal
    } else if exceeds_percent(casual, bodies.len(), 30) {
        Tone::Casual
    } else {
        Tone::Mixed
    }
}

/// Returns true if the text is written in the first person.
pub fn uses_first_person(text: &str) -> bool {
    FIRST_PERSON.is_match(text)
}

/// Returns true if the text contains a pictograph or miscellaneous symbol emoji.
pub fn has_emoji(text: &str) -> bool {
    text.chars()
        .any(|c| matches!(c, '\u{1F300}'..='\u{1F9FF}' | '\u{2600}'..='\u{26FF}'))
}

/// Returns the canonical phrases present in a strict majority of bodies.
pub fn common_phrases(bodies: &[&str]) -> Vec<String> {
    COMMON_PHRASES
        .iter()
        .filter(|phrase| {
            let count = bodies.iter().filter(|b| b.contains(*phrase)).count();
            is_strict_majority(count, bodies.len())
        })
        .map(|phrase| (*phrase).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_levels_one_to_three() {
        let body = "# Title\n## Summary\n### Details\n#### Too deep\n#NoSpace\n";
        assert_eq!(headings(body), vec!["# Title", "## Summary", "### Details"]);
    }

    #[test]
    fn headings_deduplicated_within_body() {
        let body = "## Notes\ntext\n## Notes\n";
        assert_eq!(headings(body), vec!["## Notes"]);
    }

    #[test]
    fn common_sections_sorted_by_count_then_first_seen() {
        let bodies = ["## B\n## A", "## A\n## C", "## C"];
        let sections = common_sections(&bodies, 30);
        assert_eq!(sections, vec!["## A", "## C", "## B"]);
    }

    #[test]
    fn list_styles() {
        assert!(has_checkbox("- [ ] todo"));
        assert!(has_checkbox("- [x] done"));
        assert!(!has_checkbox("[link](url)"));

        assert!(has_bullet_list("intro\n- item"));
        assert!(has_bullet_list("  * nested"));
        assert!(!has_bullet_list("no-bullets-here"));

        assert!(has_numbered_list("1. first\n2. second"));
        assert!(!has_numbered_list("version 1.2"));
    }

    #[test]
    fn conventional_titles() {
        assert!(is_conventional_title("feat: add login"));
        assert!(is_conventional_title("fix(auth): handle expiry"));
        assert!(is_conventional_title("refactor!: drop legacy api"));
        assert!(!is_conventional_title("feature: add login"));
        assert!(!is_conventional_title("feat:missing space"));
        assert!(!is_conventional_title("Add login"));
    }

    #[test]
    fn conventional_type_extraction() {
        assert_eq!(conventional_type("feat(api)!: breaking"), Some("feat"));
        assert_eq!(conventional_type("docs: readme"), Some("docs"));
        assert_eq!(conventional_type("Update docs"), None);
    }

    #[test]
    fn prefix_recorded_without_space_after_colon() {
        assert_eq!(conventional_type("feat:tidy imports"), Some("feat"));
        assert_eq!(title_prefixes(&["feat:tidy imports"]), vec!["feat:"]);
        assert!(!is_conventional_title("feat:tidy imports"));
    }

    #[test]
    fn ticket_prefixed_titles() {
        assert!(is_ticket_prefixed_title("[ABC-123] Fix login"));
        assert!(is_ticket_prefixed_title("ABC-123 Fix login"));
        assert!(!is_ticket_prefixed_title("Fix ABC-123"));
    }

    #[test]
    fn title_pattern_requires_strict_majority() {
        assert_eq!(
            detect_title_pattern(&["feat: a", "fix: b", "Update c"]),
            Some(TitlePattern::Conventional)
        );
        assert_eq!(detect_title_pattern(&["feat: a", "Update b"]), None);
        assert_eq!(
            detect_title_pattern(&["[AB-1] a", "AB-2 b", "c"]),
            Some(TitlePattern::TicketPrefix)
        );
        assert_eq!(detect_title_pattern(&[]), None);
    }

    #[test]
    fn title_prefixes_first_seen_order() {
        let titles = ["fix: a", "feat(x): b", "fix: c", "Plain"];
        assert_eq!(title_prefixes(&titles), vec!["fix:", "feat:"]);
    }

    #[test]
    fn ticket_pattern_prefers_jira() {
        assert_eq!(
            detect_ticket_pattern(&["OPS-1 and JIRA-42"]),
            Some(TicketPattern::Jira)
        );
        assert_eq!(
            detect_ticket_pattern(&["see OPS-17"]),
            Some(TicketPattern::Generic)
        );
        assert_eq!(detect_ticket_pattern(&["X-1 only"]), None);
        assert!(mentions_ticket("X-1 only"));
    }

    #[test]
    fn tone_signals() {
        assert!(has_formal_framing("This PR adds caching."));
        assert!(has_formal_framing("this change removes X"));
        assert!(has_casual_marker("I think this works"));
        assert!(has_casual_marker("gonna fix later"));
        assert!(!has_casual_marker("Adds caching to the loader."));
    }

    #[test]
    fn tone_formal_takes_precedence() {
        let bodies = ["This PR does X. I think", "This change does Y. we did"];
        assert_eq!(classify_tone(&bodies), Tone::Formal);
    }

    #[test]
    fn tone_casual_and_mixed() {
        let bodies = ["I fixed it", "Adds a thing", "Removes a thing"];
        assert_eq!(classify_tone(&bodies), Tone::Casual);

        let bodies = ["Adds a thing", "Removes a thing", "Moves a thing"];
        assert_eq!(classify_tone(&bodies), Tone::Mixed);

        assert_eq!(classify_tone(&[]), Tone::Mixed);
    }

    #[test]
    fn first_person_and_emoji() {
        assert!(uses_first_person("I'm adding tests"));
        assert!(uses_first_person("Our build was slow"));
        assert!(!uses_first_person("Adds tests"));

        assert!(has_emoji("Ship it 🚀"));
        assert!(has_emoji("Sunny ☀ day"));
        assert!(!has_emoji("plain text"));
    }

    #[test]
    fn common_phrases_strict_majority() {
        let bodies = ["## Description\nFixes #1", "## Description\n", "none"];
        assert_eq!(common_phrases(&bodies), vec!["## Description"]);

        let bodies = ["Closes #2", "nothing"];
        assert!(common_phrases(&bodies).is_empty());
    }

    #[test]
    fn threshold_helpers() {
        assert!(is_strict_majority(2, 3));
        assert!(!is_strict_majority(1, 2));
        assert!(exceeds_percent(1, 3, 30));
        assert!(!exceeds_percent(3, 10, 30));
        assert!(reaches_percent(3, 10, 30));
        assert!(!reaches_percent(2, 10, 30));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn classifiers_never_panic(s in ".*") {
                let _ = headings(&s);
                let _ = has_checkbox(&s);
                let _ = has_bullet_list(&s);
                let _ = has_numbered_list(&s);
                let _ = conventional_type(&s);
                let _ = has_emoji(&s);
                let _ = uses_first_person(&s);
            }

            #[test]
            fn title_pattern_deterministic(titles in proptest::collection::vec(".*", 0..8)) {
                let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
                prop_assert_eq!(detect_title_pattern(&refs), detect_title_pattern(&refs));
            }

            #[test]
            fn prefixes_are_distinct(titles in proptest::collection::vec("(feat|fix|docs): [a-z]{1,5}", 0..10)) {
                let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
                let prefixes = title_prefixes(&refs);
                let mut deduped = prefixes.clone();
                deduped.dedup();
                prop_assert_eq!(prefixes.len(), deduped.len());
                prop_assert!(prefixes.len() <= 3);
            }
        }
    }
}
