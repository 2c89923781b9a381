//! Owner and manager mentions in review text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static OWNER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(owners?|proprietor|founders?|co-owner)\b").unwrap());
static MANAGER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(managers?|management|gm)\b").unwrap());

/// Mentions needed before reviews count as evidence
pub const OWNER_MENTION_THRESHOLD: usize = 2;
pub const MANAGER_MENTION_THRESHOLD: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReviewMentions {
    pub owner: usize,
    pub manager: usize,
}

impl ReviewMentions {
    pub fn owner_involved(&self) -> bool {
        self.owner >= OWNER_MENTION_THRESHOLD
    }

    pub fn professional_management(&self) -> bool {
        self.manager >= MANAGER_MENTION_THRESHOLD
    }
}

/// Count whole-word owner and manager mentions across reviews
pub fn count_mentions<S: AsRef<str>>(reviews: &[S]) -> ReviewMentions {
    reviews
        .iter()
        .fold(ReviewMentions::default(), |mut mentions, review| {
            let text = review.as_ref();
            mentions.owner += OWNER_PATTERN.find_iter(text).count();
            mentions.manager += MANAGER_PATTERN.find_iter(text).count();
            mentions
        })
}
