//! Revenue qualification and software budget estimation.
//!
//! Runs off the profiled lead and does not depend on the pain or
//! classification stages. The detailed [`budget`] estimator reads the
//! qualification's member and revenue estimates.

pub mod budget;
pub mod revenue;

use crate::core::{GymType, SizeTier};
use crate::signals::attributes::PriceLevel;
use serde::Serialize;

pub use budget::{estimate_budget, BudgetEstimate, BudgetInputs, PricingTier};
pub use revenue::{MemberTier, RevenuePotential, RevenueTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationTier {
    Unqualified,
    MarginallyQualified,
    Qualified,
    HighlyQualified,
}

impl QualificationTier {
    pub fn from_viability(score: f64) -> Self {
        if score >= 70.0 {
            QualificationTier::HighlyQualified
        } else if score >= 50.0 {
            QualificationTier::Qualified
        } else if score >= 30.0 {
            QualificationTier::MarginallyQualified
        } else {
            QualificationTier::Unqualified
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QualificationTier::Unqualified => "unqualified",
            QualificationTier::MarginallyQualified => "marginally_qualified",
            QualificationTier::Qualified => "qualified",
            QualificationTier::HighlyQualified => "highly_qualified",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualificationInputs {
    pub size: SizeTier,
    pub gym_type: GymType,
    pub price: PriceLevel,
    pub review_count: u32,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Qualification {
    pub member_count: u32,
    pub monthly_revenue: u64,
    pub viability_score: f64,
    pub size_tier: MemberTier,
    pub revenue_tier: RevenueTier,
    pub revenue_potential: RevenuePotential,
    pub tier: QualificationTier,
    pub software_budget: u64,
    pub price_level: PriceLevel,
    pub reasons: Vec<String>,
    pub disqualification_reasons: Vec<String>,
}

/// Which list a finding belongs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Finding {
    Reason(&'static str),
    Disqualifier(&'static str),
}

fn revenue_finding(tier: RevenueTier) -> Finding {
    match tier {
        RevenueTier::Enterprise => Finding::Reason("Very high revenue potential ($100K+/month)"),
        RevenueTier::Large => Finding::Reason("High revenue potential ($50K-100K/month)"),
        RevenueTier::Medium => Finding::Reason("Good revenue potential ($20K-50K/month)"),
        RevenueTier::Small => Finding::Reason("Low revenue potential ($10K-20K/month)"),
        RevenueTier::Micro => Finding::Disqualifier("Very low revenue potential (<$10K/month)"),
    }
}

/// Estimate members and revenue and score how worthwhile the lead is
pub fn qualify(inputs: &QualificationInputs) -> Qualification {
    let member_count = revenue::estimate_members(inputs.size, inputs.gym_type, inputs.review_count);
    let monthly_revenue = (f64::from(member_count)
        * revenue::member_rate(inputs.gym_type, inputs.price))
    .round() as u64;
    let revenue_tier = RevenueTier::from_monthly(monthly_revenue);
    let size_tier = MemberTier::from_members(member_count);
    let software_budget =
        (monthly_revenue as f64 * revenue::software_share(inputs.gym_type)).round() as u64;

    let reputation = revenue::reputation_points(inputs.rating, inputs.review_count);
    let growth = revenue::growth_points(inputs.gym_type);
    let viability_score =
        (revenue_tier.points() + size_tier.points() + reputation + growth).min(100.0);

    let mut reasons = Vec::new();
    let mut disqualification_reasons = Vec::new();

    match revenue_finding(revenue_tier) {
        Finding::Reason(reason) => reasons.push(reason.to_string()),
        Finding::Disqualifier(reason) => disqualification_reasons.push(reason.to_string()),
    }
    match size_tier {
        MemberTier::Large | MemberTier::Medium => {
            reasons.push(format!("Good member base size (~{} members)", member_count))
        }
        MemberTier::Small => {
            reasons.push(format!("Moderate member base (~{} members)", member_count))
        }
        MemberTier::Micro => {
            disqualification_reasons.push("Very small member base (<100 members)".to_string())
        }
    }
    if reputation >= 20.0 {
        reasons.push("Excellent reputation (4.5+ rating, 100+ reviews)".to_string());
    } else if reputation >= 15.0 {
        reasons.push("Good reputation (4.0+ rating, 50+ reviews)".to_string());
    }
    if inputs.rating.is_some_and(|r| r < 3.5) {
        disqualification_reasons.push("Poor reputation (rating < 3.5)".to_string());
    }
    if growth > 0.0 {
        reasons.push(format!("High-growth gym type ({})", inputs.gym_type));
    }
    match software_budget {
        b if b >= 1000 => reasons.push(format!(
            "Strong software budget potential (~${}/month)",
            b
        )),
        b if b >= 500 => reasons.push(format!("Moderate software budget (~${}/month)", b)),
        _ => disqualification_reasons.push("Limited software budget (<$500/month)".to_string()),
    }

    Qualification {
        member_count,
        monthly_revenue,
        viability_score,
        size_tier,
        revenue_tier,
        revenue_potential: revenue_tier.potential(),
        tier: QualificationTier::from_viability(viability_score),
        software_budget,
        price_level: inputs.price,
        reasons,
        disqualification_reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(
        size: SizeTier,
        gym_type: GymType,
        price: PriceLevel,
        review_count: u32,
        rating: f64,
    ) -> QualificationInputs {
        QualificationInputs {
            size,
            gym_type,
            price,
            review_count,
            rating: Some(rating),
        }
    }

    #[test]
    fn test_large_premium_crossfit_is_highly_qualified() {
        let q = qualify(&inputs(
            SizeTier::Large,
            GymType::Crossfit,
            PriceLevel::Premium,
            600,
            4.8,
        ));
        assert_eq!(q.member_count, 1300);
        assert_eq!(q.monthly_revenue, 260_000);
        assert_eq!(q.revenue_tier, RevenueTier::Enterprise);
        assert_eq!(q.revenue_potential, RevenuePotential::VeryHigh);
        assert_eq!(q.tier, QualificationTier::HighlyQualified);
        assert_eq!(q.software_budget, 7800);
        assert!(q
            .reasons
            .contains(&"Good member base size (~1300 members)".to_string()));
        assert!(q
            .reasons
            .contains(&"Excellent reputation (4.5+ rating, 100+ reviews)".to_string()));
    }

    #[test]
    fn test_medium_budget_gym_is_qualified() {
        let q = qualify(&inputs(
            SizeTier::Medium,
            GymType::TraditionalGym,
            PriceLevel::Budget,
            250,
            4.2,
        ));
        assert_eq!(q.member_count, 660);
        assert_eq!(q.monthly_revenue, 13_200);
        assert_eq!(q.size_tier, MemberTier::Medium);
        assert_eq!(q.software_budget, 264);
        assert_eq!(q.tier, QualificationTier::Qualified);
        assert!(q
            .reasons
            .contains(&"Low revenue potential ($10K-20K/month)".to_string()));
    }

    #[test]
    fn test_only_micro_revenue_disqualifies() {
        assert_eq!(
            revenue_finding(RevenueTier::Micro),
            Finding::Disqualifier("Very low revenue potential (<$10K/month)")
        );
        for tier in [
            RevenueTier::Enterprise,
            RevenueTier::Large,
            RevenueTier::Medium,
            RevenueTier::Small,
        ] {
            assert!(matches!(revenue_finding(tier), Finding::Reason(_)));
        }
    }

    #[test]
    fn test_micro_studio_is_unqualified() {
        let q = qualify(&inputs(
            SizeTier::Small,
            GymType::YogaStudio,
            PriceLevel::Budget,
            20,
            4.5,
        ));
        assert_eq!(q.tier, QualificationTier::Unqualified);
        assert_eq!(q.revenue_potential, RevenuePotential::VeryLow);
        assert_eq!(q.size_tier, MemberTier::Micro);
        assert_eq!(
            q.disqualification_reasons,
            vec![
                "Very low revenue potential (<$10K/month)".to_string(),
                "Very small member base (<100 members)".to_string(),
                "Limited software budget (<$500/month)".to_string(),
            ]
        );
    }

    #[test]
    fn test_poor_reputation_is_noted_but_not_fatal() {
        let q = qualify(&inputs(
            SizeTier::Large,
            GymType::FitnessCenter,
            PriceLevel::Premium,
            200,
            3.2,
        ));
        assert_eq!(q.tier, QualificationTier::HighlyQualified);
        assert!(q
            .disqualification_reasons
            .contains(&"Poor reputation (rating < 3.5)".to_string()));
    }

    #[test]
    fn test_martial_arts_school_is_qualified() {
        let q = qualify(&inputs(
            SizeTier::Medium,
            GymType::MartialArts,
            PriceLevel::Mid,
            180,
            4.6,
        ));
        assert_eq!(q.member_count, 420);
        assert_eq!(q.monthly_revenue, 42_000);
        assert_eq!(q.tier, QualificationTier::Qualified);
    }

    #[test]
    fn test_empty_listing_is_unqualified() {
        let q = qualify(&QualificationInputs {
            size: SizeTier::Unknown,
            gym_type: GymType::Unknown,
            price: PriceLevel::Mid,
            review_count: 0,
            rating: None,
        });
        assert_eq!(q.tier, QualificationTier::Unqualified);
        assert!(q.viability_score < 30.0);
    }
}
