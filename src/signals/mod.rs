//! Categorical attributes derived from a listing's free text.
//!
//! Every extractor is best effort: it always returns a value, and the
//! caller treats low-confidence results as soft signals.

pub mod attributes;
pub mod business_type;
pub mod presence;
pub mod size;

use crate::core::{GymType, Lead};
use serde::Serialize;

pub use attributes::{extract_attributes, ListingAttributes};
pub use business_type::classify_business_type;
pub use size::{estimate_size, SizeEstimate, SizeInputs};

/// Everything signal extraction learns about a lead
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GymProfile {
    pub gym_type: GymType,
    pub size: SizeEstimate,
    pub attributes: ListingAttributes,
}

/// Run every extractor over a lead's listing fields
pub fn profile_lead(lead: &Lead) -> GymProfile {
    let text = lead.listing_text();
    let gym_type = classify_business_type(&text, lead.category.as_deref());
    let franchise = franchise_match(&text);

    let size = estimate_size(&SizeInputs {
        text: &text,
        review_count: lead.review_count,
        rating: lead.rating,
        gym_type,
        franchise,
    });

    let attributes = extract_attributes(lead, &text, gym_type, &size);

    log::debug!(
        "Profiled {}: {} / {} (size score {:.0}, confidence {:.0})",
        lead.name,
        gym_type,
        size.tier,
        size.score,
        size.confidence
    );

    GymProfile {
        gym_type,
        size,
        attributes,
    }
}

/// Scale of a known chain, which drives the size estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainScale {
    Large,
    MidSize,
    Affiliate,
}

pub(crate) const FRANCHISE_CHAINS: &[(&str, ChainScale)] = &[
    ("planet fitness", ChainScale::Large),
    ("la fitness", ChainScale::Large),
    ("24 hour fitness", ChainScale::Large),
    ("gold's gym", ChainScale::Large),
    ("life time", ChainScale::Large),
    ("equinox", ChainScale::Large),
    ("crunch fitness", ChainScale::Large),
    ("ymca", ChainScale::Large),
    ("anytime fitness", ChainScale::MidSize),
    ("snap fitness", ChainScale::MidSize),
    ("orangetheory", ChainScale::MidSize),
    ("f45", ChainScale::MidSize),
    ("club pilates", ChainScale::MidSize),
    ("pure barre", ChainScale::MidSize),
    ("curves", ChainScale::MidSize),
    ("ufc gym", ChainScale::MidSize),
    ("crossfit", ChainScale::Affiliate),
];

/// The first known chain named in lowercased text
pub fn franchise_match(text: &str) -> Option<(&'static str, ChainScale)> {
    FRANCHISE_CHAINS
        .iter()
        .find(|(name, _)| contains_keyword(text, name))
        .copied()
}

/// True when `keyword` occurs in `text` starting at a word boundary.
///
/// Both sides are expected lowercase. A leading boundary keeps short
/// keywords like "wod" from matching inside "hollywood" while still
/// matching plurals ("wods").
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }
    text.match_indices(keyword).any(|(start, _)| {
        text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric())
    })
}

pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| contains_keyword(text, k))
}

/// Keywords from the list that occur in the text, in list order
pub fn matched_keywords<'k>(text: &str, keywords: &[&'k str]) -> Vec<&'k str> {
    keywords
        .iter()
        .copied()
        .filter(|k| contains_keyword(text, k))
        .collect()
}

/// Labels of every table row with a keyword in the text, in table order
pub fn matching_labels(text: &str, table: &[(&'static str, &[&str])]) -> Vec<String> {
    table
        .iter()
        .filter(|(_, keywords)| contains_any(text, keywords))
        .map(|(label, _)| label.to_string())
        .collect()
}

/// Label of the first table row with a keyword in the text
pub fn first_label(text: &str, table: &[(&'static str, &[&str])]) -> Option<&'static str> {
    table
        .iter()
        .find(|(_, keywords)| contains_any(text, keywords))
        .map(|(label, _)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_keyword_requires_leading_boundary() {
        assert!(contains_keyword("daily wod board", "wod"));
        assert!(contains_keyword("wods posted daily", "wod"));
        assert!(!contains_keyword("hollywood fitness", "wod"));
        assert!(contains_keyword("gold's gym downtown", "gold's gym"));
    }

    #[test]
    fn test_franchise_match_prefers_table_order() {
        assert_eq!(
            franchise_match("planet fitness - bakersfield"),
            Some(("planet fitness", ChainScale::Large))
        );
        assert_eq!(
            franchise_match("crossfit delano"),
            Some(("crossfit", ChainScale::Affiliate))
        );
        assert_eq!(franchise_match("iron temple"), None);
    }

    #[test]
    fn test_profile_lead_scenario_a() {
        let mut lead = Lead::new("Planet Fitness");
        lead.review_count = 1200;
        lead.rating = Some(4.5);
        let profile = profile_lead(&lead);
        assert_eq!(profile.size.tier, crate::core::SizeTier::Large);
        assert!(profile.size.score >= 80.0);
        assert_eq!(profile.attributes.franchise_chain.as_deref(), Some("Planet Fitness"));
    }
}
