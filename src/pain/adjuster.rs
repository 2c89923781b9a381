//! Size and business-model adjustment of the pain score.
//!
//! Larger facilities and premium models suffer more from the same gap, so
//! the base score is scaled by a size multiplier and a model multiplier.
//! Size- and model-specific factors are only blended in weakly, and the
//! blend never lowers the base score.

use super::analyzer::{evaluate, Check, PainAnalysis};
use crate::config::AdjustmentConfig;
use crate::core::types::clamp_score;
use crate::core::{Factor, GymType, SizeTier, Urgency};
use crate::features::FeatureFlags;
use serde::Serialize;

pub fn size_multiplier(size: SizeTier) -> f64 {
    match size {
        SizeTier::Large => 1.2,
        SizeTier::Medium => 1.0,
        SizeTier::Small => 0.8,
        SizeTier::Unknown => 1.0,
    }
}

pub fn model_multiplier(gym_type: GymType) -> f64 {
    match gym_type {
        GymType::BoutiqueFitness => 1.3,
        GymType::Crossfit => 1.2,
        GymType::RecreationCenter => 1.15,
        GymType::YogaStudio => 1.1,
        GymType::TraditionalGym => 1.0,
        GymType::Boxing => 0.9,
        GymType::DanceStudio => 0.85,
        GymType::MartialArts => 0.8,
        GymType::PersonalTraining => 0.7,
        _ => 1.0,
    }
}

pub fn size_context(size: SizeTier) -> &'static str {
    match size {
        SizeTier::Large => "Large gym with high member expectations",
        SizeTier::Medium => "Medium gym balancing growth and operations",
        SizeTier::Small => "Small gym with focused member base",
        SizeTier::Unknown => "Size unknown; no size adjustment applied",
    }
}

pub fn model_context(gym_type: GymType) -> &'static str {
    match gym_type {
        GymType::BoutiqueFitness => "Boutique fitness with premium expectations",
        GymType::Crossfit => "CrossFit box with community focus",
        GymType::RecreationCenter => "Recreation center with diverse programming",
        GymType::YogaStudio => "Yoga studio with wellness focus",
        GymType::TraditionalGym => "Traditional gym with standard expectations",
        GymType::Boxing => "Boxing gym with coaching focus",
        GymType::DanceStudio => "Dance studio with class-based model",
        GymType::MartialArts => "Martial arts school with structured programs",
        GymType::PersonalTraining => "Personal training with one-on-one focus",
        _ => "General fitness business",
    }
}

/// Minimum digital standard for a facility of a given size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeThresholds {
    pub mobile_score: f64,
    pub digital_score: f64,
    pub required_features: &'static [&'static str],
}

pub fn size_thresholds(size: SizeTier) -> Option<SizeThresholds> {
    match size {
        SizeTier::Large => Some(SizeThresholds {
            mobile_score: 70.0,
            digital_score: 65.0,
            required_features: &["member_portal", "mobile_app"],
        }),
        SizeTier::Medium => Some(SizeThresholds {
            mobile_score: 60.0,
            digital_score: 50.0,
            required_features: &["online_booking"],
        }),
        SizeTier::Small => Some(SizeThresholds {
            mobile_score: 50.0,
            digital_score: 35.0,
            required_features: &[],
        }),
        SizeTier::Unknown => None,
    }
}

/// Everything the adjuster reads besides the base analysis
#[derive(Debug, Clone, Copy)]
pub struct AdjustmentInputs<'a> {
    pub size: SizeTier,
    pub gym_type: GymType,
    pub flags: &'a FeatureFlags,
    pub has_app: bool,
    pub mobile_score: Option<f64>,
    pub infrastructure_score: f64,
}

impl AdjustmentInputs<'_> {
    fn has_feature(&self, name: &str) -> bool {
        match name {
            "mobile_app" => self.has_app,
            "online_booking" => self.flags.online_booking,
            "member_portal" => self.flags.member_portal,
            "payment_processing" => self.flags.payment_processing,
            "class_scheduling" => self.flags.class_scheduling,
            _ => false,
        }
    }

    fn mobile_below(&self, threshold: f64) -> Option<bool> {
        self.mobile_score.map(|m| m < threshold)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustedPain {
    pub base_score: f64,
    /// Base after blending in size and model factors
    pub blended_score: f64,
    pub score: f64,
    pub urgency: Urgency,
    pub size_multiplier: f64,
    pub model_multiplier: f64,
    pub size_context: String,
    pub model_context: String,
    pub size_factors: Vec<Factor>,
    pub model_factors: Vec<Factor>,
    pub threshold_violations: Vec<String>,
    /// Urgency was raised because of threshold violations
    pub escalated: bool,
}

impl AdjustedPain {
    pub fn combined_multiplier(&self) -> f64 {
        self.size_multiplier * self.model_multiplier
    }
}

fn size_checks(inputs: &AdjustmentInputs<'_>) -> Vec<Check> {
    let flags = inputs.flags;
    match inputs.size {
        SizeTier::Large => vec![
            Check::when(
                !inputs.has_app,
                "No mobile app for large facility",
                "Hundreds of members without self-service",
                10,
            ),
            Check::when(
                !flags.member_portal,
                "No member portal for large member base",
                "Front desk overwhelmed by account requests",
                8,
            ),
            Check::when_known(
                inputs.mobile_below(70.0),
                "Mobile experience below large-gym expectations",
                "Members compare against national chains",
                8,
            ),
        ],
        SizeTier::Medium => vec![
            Check::when(
                !flags.online_booking,
                "No online booking for growing member base",
                "Booking bottleneck limits growth",
                8,
            ),
            Check::when(
                !inputs.has_app,
                "No mobile app for growing gym",
                "Harder to keep newer members engaged",
                7,
            ),
        ],
        SizeTier::Small => vec![
            Check::when(
                !flags.social_integration,
                "Missing community building tools",
                "Small gyms grow by word of mouth",
                6,
            ),
            Check::when(
                !flags.payment_processing,
                "Manual payments consume owner time",
                "Owner spends hours on billing",
                6,
            ),
        ],
        SizeTier::Unknown => Vec::new(),
    }
}

fn model_checks(inputs: &AdjustmentInputs<'_>) -> Vec<Check> {
    let flags = inputs.flags;
    match inputs.gym_type {
        GymType::BoutiqueFitness => vec![
            Check::when_known(
                inputs.mobile_below(80.0),
                "Subpar mobile experience for boutique",
                "Premium clients expect a polished mobile experience",
                9,
            ),
            Check::when(
                !flags.online_booking,
                "No online booking for boutique studio",
                "Class spots go unsold",
                9,
            ),
        ],
        GymType::Crossfit => vec![
            Check::when(
                !flags.social_integration,
                "No community features for CrossFit",
                "Community is the core of the CrossFit offer",
                7,
            ),
            Check::when(
                !flags.class_scheduling,
                "No WOD and class scheduling for CrossFit",
                "Athletes cannot plan training",
                7,
            ),
        ],
        GymType::YogaStudio => vec![
            Check::when(
                !flags.class_scheduling,
                "No online class scheduling for yoga",
                "Students cannot see or reserve sessions",
                8,
            ),
            Check::when(
                !flags.virtual_classes,
                "No virtual classes for yoga studio",
                "Home practice students go to streaming apps",
                6,
            ),
        ],
        GymType::RecreationCenter => vec![Check::when(
            !flags.online_booking,
            "No online facility booking for recreation center",
            "Courts and rooms managed by phone",
            8,
        )],
        GymType::PersonalTraining => vec![Check::when(
            !flags.online_booking,
            "No online appointment booking for personal training",
            "Sessions lost to scheduling back-and-forth",
            7,
        )],
        _ => Vec::new(),
    }
}

fn threshold_violations(inputs: &AdjustmentInputs<'_>) -> Vec<String> {
    let Some(thresholds) = size_thresholds(inputs.size) else {
        return Vec::new();
    };
    let size = inputs.size.as_str();
    let mut violations = Vec::new();

    if let Some(mobile) = inputs.mobile_score {
        if mobile < thresholds.mobile_score {
            violations.push(format!(
                "Mobile score {:.0} below {} gym threshold {:.0}",
                mobile, size, thresholds.mobile_score
            ));
        }
    }
    if inputs.infrastructure_score < thresholds.digital_score {
        violations.push(format!(
            "Digital infrastructure {:.0} below {} gym threshold {:.0}",
            inputs.infrastructure_score, size, thresholds.digital_score
        ));
    }
    for feature in thresholds.required_features {
        if !inputs.has_feature(feature) {
            violations.push(format!(
                "Missing required feature for {} gym: {}",
                size, feature
            ));
        }
    }
    violations
}

/// Scale the base pain score for the lead's size and business model
pub fn adjust_pain(
    base: &PainAnalysis,
    inputs: &AdjustmentInputs<'_>,
    config: &AdjustmentConfig,
) -> AdjustedPain {
    let (size_factors, _) = evaluate("size", &size_checks(inputs));
    let (model_factors, _) = evaluate("model", &model_checks(inputs));

    let mut checks = size_checks(inputs);
    checks.extend(model_checks(inputs));
    let (_, extra_average) = evaluate("adjustment", &checks);
    let extra_score = extra_average * 10.0;

    let base_score = base.score;
    let share = config.base_share(base_score);
    let blended_score = f64::max(base_score, share * base_score + (1.0 - share) * extra_score);

    let size_mult = size_multiplier(inputs.size);
    let model_mult = model_multiplier(inputs.gym_type);
    let mut score = clamp_score(blended_score * size_mult * model_mult);
    if size_mult * model_mult >= 1.0 {
        score = score.max(base_score.min(100.0));
    } else if size_mult < 1.0 && model_mult < 1.0 {
        score = score.min(base_score);
    }

    let threshold_violations = threshold_violations(inputs);
    let recomputed = Urgency::from_score(score);
    let escalated = !threshold_violations.is_empty() && recomputed < Urgency::High;
    let urgency = if escalated { Urgency::High } else { recomputed };

    log::debug!(
        "Pain {:.1} -> {:.1} (size x{}, model x{}, {} violations)",
        base_score,
        score,
        size_mult,
        model_mult,
        threshold_violations.len()
    );

    AdjustedPain {
        base_score,
        blended_score,
        score,
        urgency,
        size_multiplier: size_mult,
        model_multiplier: model_mult,
        size_context: size_context(inputs.size).to_string(),
        model_context: model_context(inputs.gym_type).to_string(),
        size_factors,
        model_factors,
        threshold_violations,
        escalated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::WebsiteFeature;

    fn inputs(size: SizeTier, gym_type: GymType, flags: &FeatureFlags) -> AdjustmentInputs<'_> {
        AdjustmentInputs {
            size,
            gym_type,
            flags,
            has_app: true,
            mobile_score: Some(95.0),
            infrastructure_score: 90.0,
        }
    }

    #[test]
    fn test_large_boutique_without_extra_factors() {
        let flags = FeatureFlags::all();
        let adjusted = adjust_pain(
            &PainAnalysis::from_score(50.0),
            &inputs(SizeTier::Large, GymType::BoutiqueFitness, &flags),
            &AdjustmentConfig::default(),
        );
        assert!(adjusted.size_factors.is_empty() && adjusted.model_factors.is_empty());
        assert!((adjusted.score - 78.0).abs() < 1e-9);
        assert_eq!(adjusted.urgency, Urgency::Critical);
        assert!(!adjusted.escalated);
    }

    #[test]
    fn test_small_personal_training_never_rises() {
        let flags = FeatureFlags::default();
        let mut lead = inputs(SizeTier::Small, GymType::PersonalTraining, &flags);
        lead.has_app = false;
        let adjusted = adjust_pain(
            &PainAnalysis::from_score(10.0),
            &lead,
            &AdjustmentConfig::default(),
        );
        assert!((adjusted.combined_multiplier() - 0.56).abs() < 1e-9);
        assert!(adjusted.score <= 10.0);
    }

    #[test]
    fn test_injected_factors_blend_weakly() {
        let flags = FeatureFlags::default();
        let mut lead = inputs(SizeTier::Large, GymType::TraditionalGym, &flags);
        lead.has_app = false;
        lead.mobile_score = Some(65.0);
        let adjusted = adjust_pain(
            &PainAnalysis::from_score(50.0),
            &lead,
            &AdjustmentConfig::default(),
        );
        // Size checks: 10 + 8 + 8 over three, so extra is 86.7
        assert!((adjusted.blended_score - (0.8 * 50.0 + 0.2 * 260.0 / 3.0)).abs() < 1e-9);
        assert!(adjusted.score > 50.0 * 1.2);
        assert!(adjusted
            .size_factors
            .iter()
            .any(|f| f.description == "No mobile app for large facility"));
        assert_eq!(adjusted.size_context, "Large gym with high member expectations");
    }

    #[test]
    fn test_violations_escalate_urgency() {
        let flags = FeatureFlags::default()
            .with(WebsiteFeature::OnlineBooking)
            .with(WebsiteFeature::PaymentProcessing);
        let mut lead = inputs(SizeTier::Large, GymType::TraditionalGym, &flags);
        lead.has_app = false;
        lead.mobile_score = Some(65.0);
        lead.infrastructure_score = 60.0;
        let adjusted = adjust_pain(
            &PainAnalysis::from_score(20.0),
            &lead,
            &AdjustmentConfig::default(),
        );
        assert_eq!(adjusted.threshold_violations.len(), 4);
        assert!(adjusted.threshold_violations[0].starts_with("Mobile score"));
        assert!(adjusted.threshold_violations[1].starts_with("Digital infrastructure"));
        assert!(adjusted.threshold_violations[2].ends_with("member_portal"));
        assert_eq!(adjusted.urgency, Urgency::High);
        assert!(adjusted.escalated);
    }

    #[test]
    fn test_unknown_size_has_no_thresholds() {
        let flags = FeatureFlags::default();
        let mut lead = inputs(SizeTier::Unknown, GymType::Unknown, &flags);
        lead.infrastructure_score = 0.0;
        let adjusted = adjust_pain(
            &PainAnalysis::from_score(0.0),
            &lead,
            &AdjustmentConfig::default(),
        );
        assert!(adjusted.threshold_violations.is_empty());
        assert_eq!(adjusted.score, 0.0);
        assert_eq!(adjusted.urgency, Urgency::Low);
    }

    #[test]
    fn test_model_specific_factors() {
        let flags = FeatureFlags::all();
        let mut lead = inputs(SizeTier::Medium, GymType::BoutiqueFitness, &flags);
        lead.mobile_score = Some(70.0);
        let adjusted = adjust_pain(
            &PainAnalysis::from_score(40.0),
            &lead,
            &AdjustmentConfig::default(),
        );
        assert_eq!(adjusted.model_factors.len(), 1);
        assert_eq!(
            adjusted.model_factors[0].description,
            "Subpar mobile experience for boutique"
        );
        assert_eq!(adjusted.model_context, "Boutique fitness with premium expectations");
    }
}
