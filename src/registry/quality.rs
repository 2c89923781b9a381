//! Per-product quality scoring.

use super::CapabilityEntry;
use crate::config::SoftwareConfig;
use crate::core::types::clamp_score;
use serde::Serialize;

/// Quality of one product, in [0, 100].
///
/// Tier base, minus 10 per year past the staleness grace period, plus 2 per
/// feature (at most 20), 10 for a mobile app, 5 for an API and 1 per
/// integration (at most 10).
pub fn quality_score(entry: &CapabilityEntry, config: &SoftwareConfig) -> f64 {
    let years_since_update = config.reference_year - entry.last_updated;
    let staleness = if years_since_update > config.grace_years {
        10.0 * f64::from(years_since_update - config.grace_years)
    } else {
        0.0
    };

    let features = (entry.features.len() as f64 * 2.0).min(20.0);
    let mobile = if entry.mobile_app { 10.0 } else { 0.0 };
    let api = if entry.api_available { 5.0 } else { 0.0 };
    let integrations = (entry.integrations.len() as f64).min(10.0);

    clamp_score(entry.quality.base_score() - staleness + features + mobile + api + integrations)
}

pub fn recommendation_for(score: f64) -> &'static str {
    if score >= 80.0 {
        "Excellent choice - modern, feature-rich platform"
    } else if score >= 70.0 {
        "Good choice - solid platform with good features"
    } else if score >= 50.0 {
        "Acceptable - basic platform that meets minimum needs"
    } else if score >= 30.0 {
        "Concerning - limited features, may need upgrade"
    } else {
        "RED FLAG - outdated platform, urgent upgrade recommended"
    }
}

/// One human-readable flag per failed condition
pub fn red_flags(entry: &CapabilityEntry, score: f64) -> Vec<String> {
    let mut flags = Vec::new();
    if score < 40.0 {
        flags.push(format!("{}: low quality score ({:.0}/100)", entry.name, score));
    }
    if !entry.mobile_app {
        flags.push(format!("{}: no mobile app support", entry.name));
    }
    if !entry.api_available {
        flags.push(format!("{}: no API access for integrations", entry.name));
    }
    if entry.is_outdated() {
        flags.push(format!(
            "{}: outdated platform (last updated {})",
            entry.name, entry.last_updated
        ));
    }
    flags
}

/// Quality assessment of one product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoftwareReport {
    pub name: String,
    pub key: String,
    pub category: String,
    pub quality_tier: String,
    pub quality_score: f64,
    pub last_updated: i32,
    pub years_since_update: i32,
    pub mobile_app: bool,
    pub api_available: bool,
    pub feature_count: usize,
    pub integration_count: usize,
    pub gym_specific: bool,
    pub supports_booking: bool,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendation: String,
    pub red_flags: Vec<String>,
    pub member_app_rating: Option<f64>,
}

impl SoftwareReport {
    pub fn assess(entry: &CapabilityEntry, config: &SoftwareConfig) -> Self {
        let score = quality_score(entry, config);
        Self {
            name: entry.name.to_string(),
            key: entry.key(),
            category: entry.category.as_str().to_string(),
            quality_tier: entry.quality.as_str().to_string(),
            quality_score: score,
            last_updated: entry.last_updated,
            years_since_update: config.reference_year - entry.last_updated,
            mobile_app: entry.mobile_app,
            api_available: entry.api_available,
            feature_count: entry.features.len(),
            integration_count: entry.integrations.len(),
            gym_specific: entry.is_gym_specific(),
            supports_booking: entry.supports_booking(),
            strengths: entry.strengths.iter().map(|s| s.to_string()).collect(),
            weaknesses: entry.weaknesses.iter().map(|s| s.to_string()).collect(),
            recommendation: recommendation_for(score).to_string(),
            red_flags: red_flags(entry, score),
            member_app_rating: entry.member_app_rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::registry;

    fn score_of(name: &str) -> f64 {
        let entry = registry().get_by_name(name).unwrap();
        quality_score(entry, &SoftwareConfig::default())
    }

    #[test]
    fn test_known_product_scores() {
        assert_eq!(score_of("MindBody"), 100.0);
        assert_eq!(score_of("Zen Planner"), 100.0);
        assert_eq!(score_of("Calendly"), 68.0);
        assert_eq!(score_of("ABC Financial"), 31.0);
    }

    #[test]
    fn test_staleness_penalty_after_grace_period() {
        let entry = registry().get_by_name("ABC Financial").unwrap();
        let later = SoftwareConfig {
            reference_year: 2026,
            ..Default::default()
        };
        // Four years stale, two past grace
        assert_eq!(quality_score(entry, &later), 11.0);
    }

    #[test]
    fn test_red_flags_describe_each_condition() {
        let entry = registry().get_by_name("ABC Financial").unwrap();
        let flags = red_flags(entry, 31.0);
        assert_eq!(
            flags,
            vec![
                "ABC Financial: low quality score (31/100)",
                "ABC Financial: no mobile app support",
                "ABC Financial: no API access for integrations",
                "ABC Financial: outdated platform (last updated 2022)",
            ]
        );
        let mindbody = registry().get_by_name("MindBody").unwrap();
        assert!(red_flags(mindbody, 100.0).is_empty());
    }

    #[test]
    fn test_recommendation_bands() {
        assert!(recommendation_for(80.0).starts_with("Excellent"));
        assert!(recommendation_for(79.9).starts_with("Good"));
        assert!(recommendation_for(50.0).starts_with("Acceptable"));
        assert!(recommendation_for(30.0).starts_with("Concerning"));
        assert!(recommendation_for(29.0).starts_with("RED FLAG"));
    }

    #[test]
    fn test_report_carries_profile() {
        let entry = registry().get_by_name("Calendly").unwrap();
        let report = SoftwareReport::assess(entry, &SoftwareConfig::default());
        assert_eq!(report.key, "calendly");
        assert!(!report.gym_specific);
        assert_eq!(report.recommendation, "Acceptable - basic platform that meets minimum needs");
    }
}
