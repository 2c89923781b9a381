//! Coarse baseline pain and status.
//!
//! Inverts mobile performance, technology freshness and software quality
//! into pain, adds a penalty for flagged technologies, and derives a coarse
//! RED / YELLOW / GREEN status. The classification engine may only escalate
//! this status.

use crate::config::BaselineConfig;
use crate::core::types::round1;
use crate::core::{CompositeScore, LeadStatus, ScoreComponent};
use crate::technology::TechnologyReport;
use serde::Serialize;
use std::collections::BTreeMap;

const HIGH_FLAG_PAIN: f64 = 30.0;
const MEDIUM_FLAG_PAIN: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PainLevel {
    Low,
    Medium,
    High,
}

impl PainLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PainLevel::Low => "low",
            PainLevel::Medium => "medium",
            PainLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaselinePain {
    pub score: f64,
    pub level: PainLevel,
    pub status: LeadStatus,
    /// Mobile performance alone was bad enough to force RED
    pub mobile_red_flag: bool,
    pub breakdown: BTreeMap<String, f64>,
    pub factors: Vec<String>,
}

pub fn technology_flag_pain(technology: &TechnologyReport) -> f64 {
    f64::min(
        100.0,
        technology.high_severity as f64 * HIGH_FLAG_PAIN
            + technology.medium_severity as f64 * MEDIUM_FLAG_PAIN,
    )
}

/// Coarse pain from mobile speed, technology age and software quality
pub fn baseline_pain(
    mobile_score: Option<f64>,
    technology: &TechnologyReport,
    software_quality: f64,
    config: &BaselineConfig,
) -> BaselinePain {
    let mut components = Vec::with_capacity(4);
    if let Some(mobile) = mobile_score {
        components.push(ScoreComponent::new("mobile", 100.0 - mobile, config.mobile));
    }
    components.push(ScoreComponent::new(
        "technology_age",
        100.0 - technology.age_score,
        config.technology_age,
    ));
    components.push(ScoreComponent::new(
        "technology_flags",
        technology_flag_pain(technology),
        config.technology_flags,
    ));
    components.push(ScoreComponent::new(
        "software",
        100.0 - software_quality,
        config.software,
    ));

    let composite = CompositeScore::compose(components);
    let score = round1(composite.total);

    let mobile_red_flag = mobile_score.is_some_and(|m| m < config.mobile_red_flag);
    let (level, status) = if mobile_red_flag || score >= config.red_threshold {
        (PainLevel::High, LeadStatus::Red)
    } else if score >= config.yellow_threshold {
        (PainLevel::Medium, LeadStatus::Yellow)
    } else {
        (PainLevel::Low, LeadStatus::Green)
    };

    let mut factors = Vec::new();
    if let Some(mobile) = mobile_score {
        if 100.0 - mobile > 40.0 {
            factors.push(format!("Poor mobile performance ({:.0}/100)", mobile));
        }
    }
    if 100.0 - technology.age_score > 50.0 {
        factors.push(format!(
            "Outdated technology stack (age score: {:.0})",
            technology.age_score
        ));
    }
    if technology_flag_pain(technology) > 20.0 {
        factors.push(format!(
            "Critical technology issues ({} outdated)",
            technology.outdated_count()
        ));
    }
    if software_quality < 40.0 {
        factors.push(format!("Weak gym software ({:.0}/100)", software_quality));
    }

    let breakdown = composite
        .components
        .iter()
        .map(|c| (c.name.clone(), round1(c.score)))
        .collect();

    BaselinePain {
        score,
        level,
        status,
        mobile_red_flag,
        breakdown,
        factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn technology(age_score: f64, high: usize, medium: usize) -> TechnologyReport {
        TechnologyReport {
            age_score,
            timestamped: 0,
            total: 0,
            outdated: Vec::new(),
            flags: Vec::new(),
            high_severity: high,
            medium_severity: medium,
        }
    }

    #[test]
    fn test_weighted_baseline() {
        let pain = baseline_pain(
            Some(80.0),
            &technology(70.0, 0, 1),
            90.0,
            &BaselineConfig::default(),
        );
        // 0.4*20 + 0.2*30 + 0.1*15 + 0.3*10
        assert_eq!(pain.score, 18.5);
        assert_eq!(pain.status, LeadStatus::Green);
        assert!(pain.factors.is_empty());
    }

    #[test]
    fn test_slow_mobile_forces_red() {
        let pain = baseline_pain(
            Some(55.0),
            &technology(100.0, 0, 0),
            100.0,
            &BaselineConfig::default(),
        );
        assert!(pain.score < 30.0);
        assert!(pain.mobile_red_flag);
        assert_eq!(pain.status, LeadStatus::Red);
        assert_eq!(pain.level, PainLevel::High);
        assert_eq!(pain.factors, vec!["Poor mobile performance (55/100)"]);
    }

    #[test]
    fn test_unknown_mobile_is_rescaled_away() {
        let pain = baseline_pain(
            None,
            &technology(50.0, 0, 0),
            0.0,
            &BaselineConfig::default(),
        );
        // (0.2*50 + 0.1*0 + 0.3*100) / 0.6
        assert!((pain.score - 66.7).abs() < 1e-9);
        assert_eq!(pain.status, LeadStatus::Red);
        assert!(!pain.mobile_red_flag);
        assert!(!pain.breakdown.contains_key("mobile"));
    }

    #[test]
    fn test_flag_pain_caps_at_100() {
        assert_eq!(technology_flag_pain(&technology(50.0, 3, 2)), 100.0);
        assert_eq!(technology_flag_pain(&technology(50.0, 1, 1)), 45.0);
    }
}
