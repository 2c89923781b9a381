//! Five-category pain factor analysis.
//!
//! Each category is a list of checks against upstream results. A check is
//! applicable when its input is known; the category average is the summed
//! severity of fired checks over the applicable ones, so closing a gap can
//! only lower a category.

use super::PainCategory;
use crate::config::PainWeights;
use crate::core::{CompositeScore, Factor, ScoreComponent, Urgency};
use crate::features::FeatureFlags;
use serde::Serialize;
use std::collections::BTreeMap;

/// Upstream results the pain checks read
#[derive(Debug, Clone, Copy)]
pub struct PainInputs<'a> {
    pub flags: &'a FeatureFlags,
    pub has_app: bool,
    pub app_quality: f64,
    pub has_gym_software: bool,
    pub infrastructure_score: f64,
    pub technology_age_score: f64,
    pub mobile_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PainAnalysis {
    pub score: f64,
    pub urgency: Urgency,
    /// Category with the highest average severity; none when nothing fired
    pub primary_category: Option<PainCategory>,
    pub category_averages: BTreeMap<String, f64>,
    pub factors: Vec<Factor>,
    pub total_pain_points: usize,
    pub critical_issues: usize,
}

impl PainAnalysis {
    /// Analysis with a given score and no factors
    pub fn from_score(score: f64) -> Self {
        Self {
            score,
            urgency: Urgency::from_score(score),
            primary_category: None,
            category_averages: BTreeMap::new(),
            factors: Vec::new(),
            total_pain_points: 0,
            critical_issues: 0,
        }
    }

    pub fn factors_in(&self, category: PainCategory) -> impl Iterator<Item = &Factor> {
        self.factors
            .iter()
            .filter(move |f| f.category == category.as_str())
    }
}

/// One pain check: `None` when its input is unknown, otherwise whether it fired
pub(crate) struct Check {
    pub description: &'static str,
    pub impact: &'static str,
    pub severity: u8,
    pub fired: Option<bool>,
}

impl Check {
    pub(crate) fn when(
        fired: bool,
        description: &'static str,
        impact: &'static str,
        severity: u8,
    ) -> Self {
        Self {
            description,
            impact,
            severity,
            fired: Some(fired),
        }
    }

    pub(crate) fn when_known(
        fired: Option<bool>,
        description: &'static str,
        impact: &'static str,
        severity: u8,
    ) -> Self {
        Self {
            description,
            impact,
            severity,
            fired,
        }
    }
}

/// Fired factors and the average severity over applicable checks
pub(crate) fn evaluate(category: &str, checks: &[Check]) -> (Vec<Factor>, f64) {
    let applicable = checks.iter().filter(|c| c.fired.is_some()).count();
    let factors: Vec<Factor> = checks
        .iter()
        .filter(|c| c.fired == Some(true))
        .map(|c| Factor::new(category, c.description, c.impact, c.severity))
        .collect();
    let average = if factors.is_empty() || applicable == 0 {
        0.0
    } else {
        factors.iter().map(|f| f64::from(f.severity)).sum::<f64>() / applicable as f64
    };
    (factors, average)
}

fn checks_for(category: PainCategory, inputs: &PainInputs<'_>) -> Vec<Check> {
    let flags = inputs.flags;
    match category {
        PainCategory::Operational => vec![
            Check::when(
                !flags.online_booking,
                "Manual class booking",
                "Staff hours lost to phone and front-desk bookings",
                8,
            ),
            Check::when(
                !flags.payment_processing,
                "Manual payment processing",
                "Late payments and billing overhead",
                7,
            ),
            Check::when(
                !inputs.has_gym_software,
                "No integrated gym management system",
                "Disconnected tools and duplicated admin work",
                9,
            ),
        ],
        PainCategory::Retention => vec![
            Check::when(
                !inputs.has_app,
                "No member mobile app",
                "25% higher churn rate",
                9,
            ),
            Check::when(
                !flags.member_portal,
                "No self-service member portal",
                "Members depend on staff for routine account changes",
                7,
            ),
            Check::when_known(
                inputs.mobile_score.map(|m| m < 60.0),
                "Poor mobile website experience",
                "Mobile visitors leave before booking",
                8,
            ),
            Check::when(
                !flags.membership_management,
                "No digital membership management",
                "Renewals and freezes handled on paper",
                6,
            ),
        ],
        PainCategory::Competitive => vec![
            Check::when(
                inputs.infrastructure_score < 50.0,
                "Digital infrastructure behind competitors",
                "Prospects choose digitally mature gyms",
                8,
            ),
            Check::when(
                !flags.virtual_classes,
                "No virtual or hybrid class options",
                "Members who travel or train at home go elsewhere",
                6,
            ),
            Check::when(
                inputs.technology_age_score < 50.0,
                "Outdated website technology",
                "Slow, insecure site undermines credibility",
                7,
            ),
        ],
        PainCategory::RevenueLoss => vec![
            Check::when(
                !flags.ecommerce,
                "No online merchandise sales",
                "$500-2000/month in missed retail revenue",
                6,
            ),
            Check::when(
                !flags.online_booking,
                "No online class booking",
                "Empty class spots that could have been filled",
                7,
            ),
            Check::when_known(
                inputs.has_app.then_some(inputs.app_quality < 50.0),
                "Poor member app quality",
                "Low app engagement limits upsell opportunities",
                7,
            ),
        ],
        PainCategory::Growth => vec![
            Check::when(
                !flags.social_integration,
                "No social media integration",
                "Limited word-of-mouth reach",
                6,
            ),
            Check::when(
                !flags.live_chat,
                "No instant communication channel",
                "Losing 20% of prospects",
                7,
            ),
        ],
    }
}

fn category_weight(category: PainCategory, weights: &PainWeights) -> f64 {
    match category {
        PainCategory::Operational => weights.operational,
        PainCategory::Retention => weights.retention,
        PainCategory::Competitive => weights.competitive,
        PainCategory::RevenueLoss => weights.revenue_loss,
        PainCategory::Growth => weights.growth,
    }
}

/// Score the five pain categories into a 0-100 pain score
pub fn analyze_pain(inputs: &PainInputs<'_>, weights: &PainWeights) -> PainAnalysis {
    let mut components = Vec::with_capacity(PainCategory::ALL.len());
    let mut category_averages = BTreeMap::new();
    let mut primary: Option<(PainCategory, f64)> = None;

    for category in PainCategory::ALL {
        let (factors, average) = evaluate(category.as_str(), &checks_for(category, inputs));
        if average > 0.0 && primary.map_or(true, |(_, best)| average > best) {
            primary = Some((category, average));
        }
        category_averages.insert(category.as_str().to_string(), average);
        components.push(
            ScoreComponent::new(
                category.as_str(),
                average * 10.0,
                category_weight(category, weights),
            )
            .with_factors(factors),
        );
    }

    let composite = CompositeScore::compose(components);
    let score = composite.total;
    let factors: Vec<Factor> = composite
        .components
        .into_iter()
        .flat_map(|c| c.factors)
        .collect();
    let critical_issues = factors.iter().filter(|f| f.is_critical()).count();

    PainAnalysis {
        score,
        urgency: Urgency::from_score(score),
        primary_category: primary.map(|(category, _)| category),
        category_averages,
        total_pain_points: factors.len(),
        critical_issues,
        factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::WebsiteFeature;

    fn inputs(flags: &FeatureFlags) -> PainInputs<'_> {
        PainInputs {
            flags,
            has_app: false,
            app_quality: 0.0,
            has_gym_software: false,
            infrastructure_score: 0.0,
            technology_age_score: 30.0,
            mobile_score: Some(35.0),
        }
    }

    #[test]
    fn test_everything_missing_is_critical() {
        let flags = FeatureFlags::default();
        let analysis = analyze_pain(&inputs(&flags), &PainWeights::default());
        assert!((analysis.score - 72.75).abs() < 1e-9);
        assert_eq!(analysis.urgency, Urgency::Critical);
        assert_eq!(analysis.primary_category, Some(PainCategory::Operational));
        assert_eq!(analysis.total_pain_points, 14);
        assert_eq!(analysis.critical_issues, 5);
        assert_eq!(analysis.category_averages["retention"], 7.5);
        assert_eq!(analysis.category_averages["revenue_loss"], 6.5);
    }

    #[test]
    fn test_healthy_lead_has_no_pain() {
        let flags = FeatureFlags::all();
        let analysis = analyze_pain(
            &PainInputs {
                flags: &flags,
                has_app: true,
                app_quality: 85.0,
                has_gym_software: true,
                infrastructure_score: 90.0,
                technology_age_score: 90.0,
                mobile_score: Some(90.0),
            },
            &PainWeights::default(),
        );
        assert_eq!(analysis.score, 0.0);
        assert_eq!(analysis.urgency, Urgency::Low);
        assert_eq!(analysis.primary_category, None);
        assert!(analysis.factors.is_empty());
    }

    #[test]
    fn test_unknown_mobile_score_is_not_a_check() {
        let flags = FeatureFlags::default();
        let mut unknown = inputs(&flags);
        unknown.mobile_score = None;
        let analysis = analyze_pain(&unknown, &PainWeights::default());
        // 9 + 7 + 6 over three applicable checks
        assert!((analysis.category_averages["retention"] - 22.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_closing_a_gap_lowers_its_category() {
        let flags = FeatureFlags::default();
        let before = analyze_pain(&inputs(&flags), &PainWeights::default());
        let flags = flags.with(WebsiteFeature::LiveChat);
        let after = analyze_pain(&inputs(&flags), &PainWeights::default());
        assert!(after.category_averages["growth"] < before.category_averages["growth"]);
        assert!(after.score < before.score);
        assert_eq!(
            after
                .factors_in(PainCategory::Growth)
                .map(|f| f.description.as_str())
                .collect::<Vec<_>>(),
            vec!["No social media integration"]
        );
    }
}
