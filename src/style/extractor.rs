//! Derives a style profile from a corpus of merged pull requests.

use chrono::Utc;
use tracing::debug;

use super::classify;
use super::profile::{RepositoryInfo, StyleProfile};
use crate::data::PrRecord;
use crate::error::{PrStyleError, Result};

/// Share of bodies (in percent) a heading must appear in to count as a section.
pub const SECTION_THRESHOLD_PERCENT: usize = 30;

/// Style extractor for PR corpora.
pub struct StyleExtractor;

impl StyleExtractor {
    /// Derives a profile from `prs`.
    ///
    /// Fails with [`PrStyleError::EmptyCorpus`] when `prs` is empty; a profile
    /// always describes at least one PR.
    pub fn extract(prs: &[PrRecord], owner: &str, repo: &str) -> Result<StyleProfile> {
        if prs.is_empty() {
            return Err(PrStyleError::EmptyCorpus);
        }

        let bodies: Vec<&str> = prs
            .iter()
            .map(|pr| pr.body.as_str())
            .filter(|body| !body.is_empty())
            .collect();
        let titles: Vec<&str> = prs.iter().map(|pr| pr.title.as_str()).collect();

        debug!(
            prs = prs.len(),
            bodies = bodies.len(),
            owner,
            repo,
            "Extracting PR style"
        );

        let mut ticket_texts = bodies.clone();
        ticket_texts.extend(titles.iter().copied());

        Ok(StyleProfile {
            sections: classify::common_sections(&bodies, SECTION_THRESHOLD_PERCENT),
            uses_checkboxes: bodies.iter().any(|b| classify::has_checkbox(b)),
            uses_bullet_points: bodies.iter().any(|b| classify::has_bullet_list(b)),
            uses_numbered_lists: bodies.iter().any(|b| classify::has_numbered_list(b)),
            title_pattern: classify::detect_title_pattern(&titles),
            title_prefix_examples: classify::title_prefixes(&titles),
            average_body_length: rounded_mean(bodies.iter().map(|b| b.chars().count())),
            average_line_count: rounded_mean(bodies.iter().map(|b| b.split('\n').count())),
            mentions_tickets: bodies.iter().any(|b| classify::mentions_ticket(b)),
            ticket_pattern: classify::detect_ticket_pattern(&ticket_texts),
            tone: classify::classify_tone(&bodies),
            uses_first_person: bodies.iter().any(|b| classify::uses_first_person(b)),
            uses_emojis: bodies.iter().chain(titles.iter()).any(|t| classify::has_emoji(t)),
            always_includes: classify::common_phrases(&bodies),
            sample_count: prs.len(),
            last_updated: Utc::now(),
            repository_info: RepositoryInfo {
                owner: owner.to_string(),
                repo: repo.to_string(),
            },
        })
    }
}

/// Arithmetic mean rounded half away from zero; zero for no values.
fn rounded_mean(values: impl Iterator<Item = usize>) -> usize {
    let (sum, count) = values.fold((0usize, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return 0;
    }
    (sum as f64 / count as f64).round() as usize
}
