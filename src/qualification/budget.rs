//! Detailed software budget estimation.
//!
//! Starts from a business-model share of monthly revenue, adjusts for
//! digital maturity and the current software footprint, then derives a
//! pricing tier, a spend breakdown, contract terms, a competitor spend
//! estimate and ROI projections.

use crate::classification::Verdict;
use crate::core::{GymType, SizeTier};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingTier {
    Unknown,
    Basic,
    Standard,
    Professional,
    Enterprise,
}

impl PricingTier {
    pub fn from_members(members: u32) -> Self {
        match members {
            0 => PricingTier::Unknown,
            m if m >= 1000 => PricingTier::Enterprise,
            m if m >= 500 => PricingTier::Professional,
            m if m >= 200 => PricingTier::Standard,
            _ => PricingTier::Basic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PricingTier::Unknown => "unknown",
            PricingTier::Basic => "basic",
            PricingTier::Standard => "standard",
            PricingTier::Professional => "professional",
            PricingTier::Enterprise => "enterprise",
        }
    }

    pub fn package(&self) -> &'static str {
        match self {
            PricingTier::Unknown => "consultation",
            PricingTier::Basic => "starter",
            PricingTier::Standard => "standard",
            PricingTier::Professional => "professional_plus",
            PricingTier::Enterprise => "enterprise_unlimited",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PricingTier::Unknown => "Unknown",
            PricingTier::Basic => "Basic",
            PricingTier::Standard => "Standard",
            PricingTier::Professional => "Professional",
            PricingTier::Enterprise => "Enterprise",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetConfidence {
    Low,
    Medium,
    High,
}

impl BudgetConfidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetConfidence::Low => "low",
            BudgetConfidence::Medium => "medium",
            BudgetConfidence::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetBreakdown {
    pub core_platform: u64,
    pub mobile_app: u64,
    pub integrations: u64,
    pub support: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContractRecommendation {
    pub term: &'static str,
    pub negotiation_leverage: &'static str,
    pub key_terms: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoiProjections {
    pub monthly_efficiency_savings: u64,
    pub member_retention_value: u64,
    pub new_member_acquisition: u64,
    pub monthly_benefit: u64,
    /// Monthly benefit as a multiple of the monthly budget
    pub roi_multiple: f64,
    pub payback_period_months: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetInputs<'a> {
    pub monthly_revenue: u64,
    pub member_count: u32,
    pub gym_type: GymType,
    pub size: SizeTier,
    pub software_systems: usize,
    pub infrastructure_score: f64,
    pub verdict: Option<Verdict>,
    pub franchise_chain: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetEstimate {
    pub total_budget: u64,
    pub pricing_tier: PricingTier,
    pub recommended_package: &'static str,
    pub factors: Vec<String>,
    pub breakdown: BudgetBreakdown,
    pub contract: ContractRecommendation,
    pub competitor_spend: u64,
    pub roi: RoiProjections,
    pub confidence: BudgetConfidence,
}

/// Share of monthly revenue a business of this model budgets for software
pub fn base_share(gym_type: GymType) -> f64 {
    match gym_type {
        GymType::Crossfit => 0.035,
        GymType::BoutiqueFitness | GymType::RecreationCenter => 0.03,
        GymType::HealthClub
        | GymType::YogaStudio
        | GymType::MartialArts
        | GymType::Boxing
        | GymType::Specialty => 0.025,
        GymType::PersonalTraining => 0.015,
        GymType::TraditionalGym
        | GymType::FitnessCenter
        | GymType::DanceStudio
        | GymType::GeneralFitness
        | GymType::Unknown => 0.02,
    }
}

fn maturity_adjustment(infrastructure_score: f64) -> (f64, &'static str) {
    if infrastructure_score >= 80.0 {
        (1.3, "High digital maturity (+30% budget)")
    } else if infrastructure_score >= 60.0 {
        (1.1, "Good digital maturity (+10% budget)")
    } else if infrastructure_score >= 40.0 {
        (1.0, "Moderate digital maturity (no adjustment)")
    } else {
        (0.8, "Low digital maturity (-20% budget)")
    }
}

fn footprint_adjustment(systems: usize) -> Option<(f64, &'static str)> {
    match systems {
        0 | 1 => Some((1.2, "Limited current software (+20% budget for initial setup)")),
        2 => None,
        _ => Some((0.9, "Multiple systems in place (-10% for consolidation)")),
    }
}

fn competitor_multiplier(gym_type: GymType) -> f64 {
    match gym_type {
        GymType::BoutiqueFitness => 1.15,
        GymType::Crossfit => 1.1,
        GymType::TraditionalGym => 0.9,
        GymType::PersonalTraining => 0.8,
        _ => 1.0,
    }
}

fn breakdown(total: u64, gym_type: GymType) -> BudgetBreakdown {
    let (core, mobile, integrations, support) = match gym_type {
        GymType::PersonalTraining => (0.7, 0.15, 0.05, 0.1),
        _ => (0.6, 0.2, 0.1, 0.1),
    };
    let share = |fraction: f64| (total as f64 * fraction).floor() as u64;
    BudgetBreakdown {
        core_platform: share(core),
        mobile_app: share(mobile),
        integrations: share(integrations),
        support: share(support),
    }
}

fn contract(inputs: &BudgetInputs<'_>) -> ContractRecommendation {
    let franchise = inputs.franchise_chain.is_some_and(|c| !c.trim().is_empty());
    let mut key_terms = vec!["Data migration included", "Staff training sessions"];

    let (term, negotiation_leverage) = if franchise || inputs.size == SizeTier::Large {
        if franchise {
            key_terms.push("Multi-location discount");
            key_terms.push("Centralized reporting");
        }
        if inputs.size == SizeTier::Large {
            key_terms.push("Dedicated account manager");
            key_terms.push("Uptime SLA");
        }
        ("annual", "high")
    } else if inputs.verdict == Some(Verdict::Red) {
        key_terms.push("Fast-track onboarding");
        ("annual", "medium")
    } else {
        key_terms.push("No long-term commitment");
        key_terms.push("Trial period");
        ("month-to-month", "low")
    };

    ContractRecommendation {
        term,
        negotiation_leverage,
        key_terms,
    }
}

fn roi(total: u64, monthly_revenue: u64) -> RoiProjections {
    let monthly_efficiency_savings = (total as f64 * 2.5).floor() as u64;
    let member_retention_value = (monthly_revenue as f64 * 0.02).floor() as u64;
    let new_member_acquisition = (monthly_revenue as f64 * 0.05).floor() as u64;
    let monthly_benefit =
        monthly_efficiency_savings + member_retention_value + new_member_acquisition;

    let (roi_multiple, payback_period_months) = if total == 0 || monthly_benefit == 0 {
        (0.0, 0)
    } else {
        // Setup and first-year commitment recovered from monthly benefit
        let implementation_cost = total as f64 * 12.0;
        let months = (implementation_cost / monthly_benefit as f64).ceil() as u32;
        (monthly_benefit as f64 / total as f64, months.max(3))
    };

    RoiProjections {
        monthly_efficiency_savings,
        member_retention_value,
        new_member_acquisition,
        monthly_benefit,
        roi_multiple,
        payback_period_months,
    }
}

fn confidence(inputs: &BudgetInputs<'_>) -> BudgetConfidence {
    let present = [
        inputs.monthly_revenue > 0,
        inputs.member_count > 0,
        inputs.software_systems > 0,
        inputs.infrastructure_score > 0.0,
    ]
    .iter()
    .filter(|p| **p)
    .count();
    match present {
        n if n >= 3 => BudgetConfidence::High,
        2 => BudgetConfidence::Medium,
        _ => BudgetConfidence::Low,
    }
}

/// Estimate a monthly software budget and how to sell against it
pub fn estimate_budget(inputs: &BudgetInputs<'_>) -> BudgetEstimate {
    let mut factors = Vec::new();
    let mut budget = inputs.monthly_revenue as f64 * base_share(inputs.gym_type);

    let (maturity, maturity_note) = maturity_adjustment(inputs.infrastructure_score);
    budget *= maturity;
    factors.push(maturity_note.to_string());

    if let Some((footprint, note)) = footprint_adjustment(inputs.software_systems) {
        budget *= footprint;
        factors.push(note.to_string());
    }

    let total_budget = budget.round() as u64;
    let pricing_tier = PricingTier::from_members(inputs.member_count);
    factors.push(format!(
        "{} tier: {} members",
        pricing_tier.label(),
        inputs.member_count
    ));

    let roi = roi(total_budget, inputs.monthly_revenue);
    if roi.roi_multiple > 0.0 {
        factors.push(format!(
            "Projected ROI: {:.1}x monthly return, payback in {} months",
            roi.roi_multiple, roi.payback_period_months
        ));
    }

    BudgetEstimate {
        total_budget,
        pricing_tier,
        recommended_package: pricing_tier.package(),
        factors,
        breakdown: breakdown(total_budget, inputs.gym_type),
        contract: contract(inputs),
        competitor_spend: (total_budget as f64 * competitor_multiplier(inputs.gym_type)).floor()
            as u64,
        roi,
        confidence: confidence(inputs),
    }
}
