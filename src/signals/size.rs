//! Facility size estimation.
//!
//! Each signal contributes a signed point delta. The clamped total picks
//! the tier (>= 80 large, >= 30 medium, else small) and the number of
//! signals that fired gives the confidence.

use super::{matched_keywords, ChainScale};
use crate::core::types::{clamp_score, title_case};
use crate::core::{GymType, SizeTier};
use serde::Serialize;

const LARGE_FACILITY_WORDS: &[&str] = &[
    "large",
    "huge",
    "massive",
    "mega",
    "multiple locations",
    "24/7",
    "24 hour",
    "complete",
    "full service",
    "olympic",
    "multiple rooms",
    "spacious",
];

const SMALL_FACILITY_WORDS: &[&str] = &[
    "boutique",
    "intimate",
    "small",
    "private",
    "personal",
    "exclusive",
    "cozy",
    "1-on-1",
    "studio",
];

const FACILITY_WORD_POINTS: f64 = 20.0;
const FACILITY_WORD_CAP: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeEstimate {
    pub tier: SizeTier,
    /// Clamped point total, 0-100
    pub score: f64,
    /// min(100, 20 per contributing signal)
    pub confidence: f64,
    pub factors: Vec<String>,
}

/// Inputs to the size estimate, borrowed from the lead
#[derive(Debug, Clone, Copy)]
pub struct SizeInputs<'a> {
    /// Lowercased listing text
    pub text: &'a str,
    pub review_count: u32,
    pub rating: Option<f64>,
    pub gym_type: GymType,
    pub franchise: Option<(&'static str, ChainScale)>,
}

fn review_points(review_count: u32) -> Option<(f64, &'static str)> {
    match review_count {
        0 => None,
        n if n >= 1000 => Some((50.0, "Very high review count")),
        n if n >= 500 => Some((40.0, "High review count")),
        n if n >= 300 => Some((30.0, "Substantial review count")),
        n if n >= 200 => Some((25.0, "Good review count")),
        n if n >= 100 => Some((20.0, "Moderate review count")),
        n if n >= 50 => Some((5.0, "Some reviews")),
        _ => Some((-10.0, "Low review count")),
    }
}

fn type_prior(gym_type: GymType) -> f64 {
    match gym_type {
        GymType::RecreationCenter => 20.0,
        GymType::TraditionalGym | GymType::HealthClub | GymType::FitnessCenter => 10.0,
        GymType::MartialArts | GymType::DanceStudio => -5.0,
        GymType::BoutiqueFitness | GymType::YogaStudio => -10.0,
        GymType::PersonalTraining => -20.0,
        _ => 0.0,
    }
}

fn location_points(text: &str) -> Option<(f64, &'static str)> {
    if super::contains_any(text, &["mall", "shopping center", "plaza"]) {
        Some((5.0, "Shopping center location"))
    } else if super::contains_any(text, &["home studio", "garage"]) {
        Some((-10.0, "Home or garage studio"))
    } else {
        None
    }
}

fn reputation_points(review_count: u32, rating: Option<f64>) -> Option<f64> {
    let rating = rating?;
    if review_count >= 500 && rating >= 4.0 {
        Some(10.0)
    } else if review_count >= 100 && rating >= 4.5 {
        Some(5.0)
    } else {
        None
    }
}

fn signed(points: f64) -> String {
    format!("{:+}", points)
}

pub fn estimate_size(inputs: &SizeInputs<'_>) -> SizeEstimate {
    let mut points = 0.0;
    let mut factors = Vec::new();

    if let Some((delta, label)) = review_points(inputs.review_count) {
        points += delta;
        factors.push(format!(
            "{} ({} reviews): {}",
            label,
            inputs.review_count,
            signed(delta)
        ));
    }

    if let Some((chain, scale)) = inputs.franchise {
        let (delta, label) = match scale {
            ChainScale::Large => (40.0, "Large fitness chain"),
            ChainScale::MidSize => (20.0, "Mid-size fitness chain"),
            ChainScale::Affiliate => (0.0, "Affiliate chain"),
        };
        points += delta;
        factors.push(format!("{}: {}: {}", label, title_case(chain), signed(delta)));
    }

    let large_words = matched_keywords(inputs.text, LARGE_FACILITY_WORDS);
    if !large_words.is_empty() {
        let delta = (large_words.len() as f64 * FACILITY_WORD_POINTS).min(FACILITY_WORD_CAP);
        points += delta;
        factors.push(format!(
            "Large facility language ({}): {}",
            large_words.join(", "),
            signed(delta)
        ));
    }

    let small_words = matched_keywords(inputs.text, SMALL_FACILITY_WORDS);
    if !small_words.is_empty() {
        let delta = -(small_words.len() as f64 * FACILITY_WORD_POINTS).min(FACILITY_WORD_CAP);
        points += delta;
        factors.push(format!(
            "Small facility language ({}): {}",
            small_words.join(", "),
            signed(delta)
        ));
    }

    let prior = type_prior(inputs.gym_type);
    if prior != 0.0 {
        points += prior;
        factors.push(format!(
            "Business type prior ({}): {}",
            inputs.gym_type,
            signed(prior)
        ));
    }

    if let Some((delta, label)) = location_points(inputs.text) {
        points += delta;
        factors.push(format!("{}: {}", label, signed(delta)));
    }

    if let Some(delta) = reputation_points(inputs.review_count, inputs.rating) {
        points += delta;
        factors.push(format!(
            "Established reputation ({:.1} stars, {} reviews): {}",
            inputs.rating.unwrap_or_default(),
            inputs.review_count,
            signed(delta)
        ));
    }

    let score = clamp_score(points);
    let tier = if score >= 80.0 {
        SizeTier::Large
    } else if score >= 30.0 {
        SizeTier::Medium
    } else {
        SizeTier::Small
    };

    SizeEstimate {
        tier,
        score,
        confidence: (factors.len() as f64 * 20.0).min(100.0),
        factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(text: &str) -> SizeInputs<'_> {
        SizeInputs {
            text,
            review_count: 0,
            rating: None,
            gym_type: GymType::GeneralFitness,
            franchise: None,
        }
    }

    #[test]
    fn test_planet_fitness_is_large() {
        let estimate = estimate_size(&SizeInputs {
            review_count: 1200,
            rating: Some(4.5),
            franchise: Some(("planet fitness", ChainScale::Large)),
            ..inputs("planet fitness")
        });
        assert_eq!(estimate.score, 100.0);
        assert_eq!(estimate.tier, SizeTier::Large);
        assert_eq!(estimate.confidence, 60.0);
        assert!(estimate.factors[1].contains("chain"));
        assert!(estimate.factors[1].contains("Planet Fitness"));
    }

    #[test]
    fn test_no_signals_is_small_with_zero_confidence() {
        let estimate = estimate_size(&inputs("summit wellness"));
        assert_eq!(estimate.tier, SizeTier::Small);
        assert_eq!(estimate.score, 0.0);
        assert_eq!(estimate.confidence, 0.0);
        assert!(estimate.factors.is_empty());
    }

    #[test]
    fn test_facility_language_is_capped() {
        let estimate = estimate_size(&inputs(
            "huge massive mega spacious olympic complex with multiple rooms",
        ));
        assert_eq!(estimate.score, 50.0);
        assert_eq!(estimate.tier, SizeTier::Medium);
        assert_eq!(estimate.factors.len(), 1);
    }

    #[test]
    fn test_boutique_studio_stays_small() {
        let estimate = estimate_size(&SizeInputs {
            review_count: 150,
            rating: Some(4.8),
            gym_type: GymType::BoutiqueFitness,
            ..inputs("intimate boutique studio")
        });
        // 20 reviews + 5 reputation - 50 language - 10 prior
        assert_eq!(estimate.score, 0.0);
        assert_eq!(estimate.tier, SizeTier::Small);
    }

    #[test]
    fn test_low_review_count_penalized() {
        let estimate = estimate_size(&SizeInputs {
            review_count: 12,
            gym_type: GymType::TraditionalGym,
            ..inputs("iron gym in the plaza")
        });
        // -10 reviews + 10 prior + 5 location
        assert_eq!(estimate.score, 5.0);
        assert_eq!(estimate.factors.len(), 3);
    }
}
