//! The eight classification criteria.
//!
//! Each criterion looks at one upstream number and yields at most one
//! signal. Criteria never see each other's output.

use super::ClassificationInputs;
use crate::config::ClassificationThresholds;
use crate::core::{GymType, SizeTier, Urgency};
use crate::infrastructure::InfrastructureTier;
use serde::Serialize;
use std::fmt;

/// Member app quality below this is a moderate concern
pub const APP_QUALITY_FLOOR: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalColor {
    Red,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalWeight {
    Critical,
    Important,
    Moderate,
}

impl SignalWeight {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalWeight::Critical => "critical",
            SignalWeight::Important => "important",
            SignalWeight::Moderate => "moderate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    AdjustedPain,
    Urgency,
    InfrastructureTier,
    MobilePerformance,
    SoftwareQuality,
    ThresholdViolations,
    WebsiteFeatures,
    MobileApp,
}

impl Criterion {
    pub const ALL: [Criterion; 8] = [
        Criterion::AdjustedPain,
        Criterion::Urgency,
        Criterion::InfrastructureTier,
        Criterion::MobilePerformance,
        Criterion::SoftwareQuality,
        Criterion::ThresholdViolations,
        Criterion::WebsiteFeatures,
        Criterion::MobileApp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::AdjustedPain => "adjusted_pain",
            Criterion::Urgency => "urgency",
            Criterion::InfrastructureTier => "infrastructure_tier",
            Criterion::MobilePerformance => "mobile_performance",
            Criterion::SoftwareQuality => "software_quality",
            Criterion::ThresholdViolations => "threshold_violations",
            Criterion::WebsiteFeatures => "website_features",
            Criterion::MobileApp => "mobile_app",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signal {
    pub criterion: Criterion,
    pub color: SignalColor,
    pub weight: SignalWeight,
    pub detail: String,
}

impl Signal {
    fn red(criterion: Criterion, weight: SignalWeight, detail: String) -> Self {
        Self {
            criterion,
            color: SignalColor::Red,
            weight,
            detail,
        }
    }

    fn yellow(criterion: Criterion, weight: SignalWeight, detail: String) -> Self {
        Self {
            criterion,
            color: SignalColor::Yellow,
            weight,
            detail,
        }
    }

    pub fn is_critical_red(&self) -> bool {
        self.color == SignalColor::Red && self.weight == SignalWeight::Critical
    }
}

/// Whether members of this business would expect a dedicated app
pub fn expects_mobile_app(size: SizeTier, gym_type: GymType) -> bool {
    size == SizeTier::Large
        || matches!(gym_type, GymType::BoutiqueFitness | GymType::Crossfit)
}

fn adjusted_pain(inputs: &ClassificationInputs, t: &ClassificationThresholds) -> Option<Signal> {
    let score = inputs.adjusted_pain;
    if score >= t.pain_red {
        Some(Signal::red(
            Criterion::AdjustedPain,
            SignalWeight::Critical,
            format!(
                "Adjusted pain score of {:.1} indicates critical operational gaps",
                score
            ),
        ))
    } else if score >= t.pain_yellow {
        Some(Signal::yellow(
            Criterion::AdjustedPain,
            SignalWeight::Important,
            format!(
                "Adjusted pain score of {:.1} shows moderate operational gaps",
                score
            ),
        ))
    } else {
        None
    }
}

fn urgency(inputs: &ClassificationInputs) -> Option<Signal> {
    match inputs.urgency {
        Urgency::Critical => Some(Signal::red(
            Criterion::Urgency,
            SignalWeight::Critical,
            "Critical urgency: multiple critical pain points need immediate action".to_string(),
        )),
        Urgency::High => Some(Signal::yellow(
            Criterion::Urgency,
            SignalWeight::Important,
            "High urgency: several important pain points to address".to_string(),
        )),
        Urgency::Medium | Urgency::Low => None,
    }
}

fn infrastructure_tier(inputs: &ClassificationInputs) -> Option<Signal> {
    let score = inputs.infrastructure_score;
    match inputs.infrastructure_tier {
        InfrastructureTier::Critical => Some(Signal::red(
            Criterion::InfrastructureTier,
            SignalWeight::Critical,
            format!("Digital infrastructure {:.0}/100 in critical tier", score),
        )),
        InfrastructureTier::Poor => Some(Signal::red(
            Criterion::InfrastructureTier,
            SignalWeight::Important,
            format!("Poor digital infrastructure ({:.0}/100, poor tier)", score),
        )),
        InfrastructureTier::Average => Some(Signal::yellow(
            Criterion::InfrastructureTier,
            SignalWeight::Moderate,
            format!(
                "Digital infrastructure {:.0}/100 in average tier with clear gaps",
                score
            ),
        )),
        InfrastructureTier::Good | InfrastructureTier::Excellent => None,
    }
}

fn mobile_performance(
    inputs: &ClassificationInputs,
    t: &ClassificationThresholds,
) -> Option<Signal> {
    let mobile = inputs.mobile_score?;
    if mobile < t.mobile_red {
        Some(Signal::red(
            Criterion::MobilePerformance,
            SignalWeight::Critical,
            format!("Mobile score {:.0}/100 is critically low", mobile),
        ))
    } else if mobile < t.mobile_yellow {
        Some(Signal::yellow(
            Criterion::MobilePerformance,
            SignalWeight::Moderate,
            format!("Mobile score {:.0}/100 needs improvement", mobile),
        ))
    } else {
        None
    }
}

fn software_quality(
    inputs: &ClassificationInputs,
    t: &ClassificationThresholds,
) -> Option<Signal> {
    let quality = inputs.software_quality;
    if !inputs.has_software {
        Some(Signal::red(
            Criterion::SoftwareQuality,
            SignalWeight::Important,
            "No gym management software detected".to_string(),
        ))
    } else if quality < t.software_red {
        Some(Signal::red(
            Criterion::SoftwareQuality,
            SignalWeight::Important,
            format!("Software quality {:.0}/100 is inadequate", quality),
        ))
    } else if quality < t.software_yellow {
        Some(Signal::yellow(
            Criterion::SoftwareQuality,
            SignalWeight::Moderate,
            format!("Software quality {:.0}/100 is below modern standards", quality),
        ))
    } else {
        None
    }
}

fn threshold_violations(
    inputs: &ClassificationInputs,
    t: &ClassificationThresholds,
) -> Option<Signal> {
    let count = inputs.threshold_violations;
    if count >= t.violations_red && count > 0 {
        Some(Signal::red(
            Criterion::ThresholdViolations,
            SignalWeight::Critical,
            format!(
                "{} critical thresholds violated for a {} gym",
                count, inputs.size
            ),
        ))
    } else if count >= t.violations_yellow && count > 0 {
        Some(Signal::yellow(
            Criterion::ThresholdViolations,
            SignalWeight::Important,
            format!(
                "{} critical threshold{} violated",
                count,
                if count == 1 { "" } else { "s" }
            ),
        ))
    } else {
        None
    }
}

fn website_features(
    inputs: &ClassificationInputs,
    t: &ClassificationThresholds,
) -> Option<Signal> {
    let score = inputs.feature_score;
    if score < t.features_red {
        Some(Signal::red(
            Criterion::WebsiteFeatures,
            SignalWeight::Important,
            format!("Website feature score {:.0}/100 lacks core features", score),
        ))
    } else if score < t.features_yellow {
        Some(Signal::yellow(
            Criterion::WebsiteFeatures,
            SignalWeight::Moderate,
            format!("Website feature score {:.0}/100 has notable gaps", score),
        ))
    } else {
        None
    }
}

fn mobile_app(inputs: &ClassificationInputs) -> Option<Signal> {
    if !inputs.has_app {
        if expects_mobile_app(inputs.size, inputs.gym_type) {
            Some(Signal::red(
                Criterion::MobileApp,
                SignalWeight::Important,
                format!(
                    "No mobile app for a {} {} where members expect one",
                    inputs.size,
                    inputs.gym_type.display_name()
                ),
            ))
        } else {
            Some(Signal::yellow(
                Criterion::MobileApp,
                SignalWeight::Moderate,
                "No dedicated member mobile app".to_string(),
            ))
        }
    } else if inputs.app_quality < APP_QUALITY_FLOOR {
        Some(Signal::yellow(
            Criterion::MobileApp,
            SignalWeight::Moderate,
            format!(
                "Member app quality {:.0}/100 is below expectations",
                inputs.app_quality
            ),
        ))
    } else {
        None
    }
}

/// Evaluate one criterion
pub fn evaluate(
    criterion: Criterion,
    inputs: &ClassificationInputs,
    thresholds: &ClassificationThresholds,
) -> Option<Signal> {
    match criterion {
        Criterion::AdjustedPain => adjusted_pain(inputs, thresholds),
        Criterion::Urgency => urgency(inputs),
        Criterion::InfrastructureTier => infrastructure_tier(inputs),
        Criterion::MobilePerformance => mobile_performance(inputs, thresholds),
        Criterion::SoftwareQuality => software_quality(inputs, thresholds),
        Criterion::ThresholdViolations => threshold_violations(inputs, thresholds),
        Criterion::WebsiteFeatures => website_features(inputs, thresholds),
        Criterion::MobileApp => mobile_app(inputs),
    }
}

/// Signals from every criterion, in criterion order
pub fn evaluate_all(
    inputs: &ClassificationInputs,
    thresholds: &ClassificationThresholds,
) -> Vec<Signal> {
    Criterion::ALL
        .into_iter()
        .filter_map(|criterion| evaluate(criterion, inputs, thresholds))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PresetLevel;

    fn quiet() -> ClassificationInputs {
        ClassificationInputs {
            adjusted_pain: 20.0,
            urgency: Urgency::Low,
            infrastructure_score: 75.0,
            infrastructure_tier: InfrastructureTier::Good,
            mobile_score: Some(85.0),
            software_quality: 80.0,
            has_software: true,
            threshold_violations: 0,
            feature_score: 80.0,
            has_app: true,
            app_quality: 80.0,
            size: SizeTier::Medium,
            gym_type: GymType::TraditionalGym,
        }
    }

    #[test]
    fn test_quiet_inputs_raise_nothing() {
        assert!(evaluate_all(&quiet(), &ClassificationThresholds::default()).is_empty());
    }

    #[test]
    fn test_pain_bands() {
        let t = ClassificationThresholds::default();
        let mut inputs = quiet();
        inputs.adjusted_pain = 75.0;
        let signal = evaluate(Criterion::AdjustedPain, &inputs, &t).unwrap();
        assert!(signal.is_critical_red());
        assert!(signal.detail.starts_with("Adjusted pain score of 75.0"));

        inputs.adjusted_pain = 45.0;
        let signal = evaluate(Criterion::AdjustedPain, &inputs, &t).unwrap();
        assert_eq!(signal.color, SignalColor::Yellow);
        assert_eq!(signal.weight, SignalWeight::Important);
    }

    #[test]
    fn test_unknown_mobile_score_raises_nothing() {
        let mut inputs = quiet();
        inputs.mobile_score = None;
        assert_eq!(
            evaluate(
                Criterion::MobilePerformance,
                &inputs,
                &ClassificationThresholds::default()
            ),
            None
        );
    }

    #[test]
    fn test_missing_software_is_red() {
        let mut inputs = quiet();
        inputs.has_software = false;
        inputs.software_quality = 0.0;
        let signal = evaluate(
            Criterion::SoftwareQuality,
            &inputs,
            &ClassificationThresholds::default(),
        )
        .unwrap();
        assert_eq!(signal.color, SignalColor::Red);
        assert_eq!(signal.weight, SignalWeight::Important);
    }

    #[test]
    fn test_app_expectation_by_size_and_model() {
        let t = ClassificationThresholds::default();
        let mut inputs = quiet();
        inputs.has_app = false;
        let signal = evaluate(Criterion::MobileApp, &inputs, &t).unwrap();
        assert_eq!(signal.color, SignalColor::Yellow);

        inputs.gym_type = GymType::BoutiqueFitness;
        let signal = evaluate(Criterion::MobileApp, &inputs, &t).unwrap();
        assert_eq!(signal.color, SignalColor::Red);
        assert!(signal.detail.contains("Boutique Fitness"));

        inputs.has_app = true;
        inputs.app_quality = 55.0;
        let signal = evaluate(Criterion::MobileApp, &inputs, &t).unwrap();
        assert_eq!(signal.color, SignalColor::Yellow);
    }

    #[test]
    fn test_violation_count_bands_follow_preset() {
        let mut inputs = quiet();
        inputs.threshold_violations = 2;
        let balanced = evaluate(
            Criterion::ThresholdViolations,
            &inputs,
            &PresetLevel::Balanced.thresholds(),
        )
        .unwrap();
        assert_eq!(balanced.color, SignalColor::Yellow);
        assert_eq!(balanced.detail, "2 critical thresholds violated");

        let strict = evaluate(
            Criterion::ThresholdViolations,
            &inputs,
            &PresetLevel::Strict.thresholds(),
        )
        .unwrap();
        assert!(strict.is_critical_red());
    }
}
