//! Weight sets for every composite score.
//!
//! Each set is validated to lie in [0, 1] and sum to 1.0 (within 0.001).
//! `normalize` rescales a set whose sum drifted, so a file with
//! `0.35/0.25/0.2/0.2001` is accepted.

use crate::core::score::validate_weight_sum;
use serde::{Deserialize, Serialize};

fn normalize_weights(weights: &mut [&mut f64]) {
    let sum: f64 = weights.iter().map(|w| **w).sum();
    if sum > 0.0 && (sum - 1.0).abs() > f64::EPSILON {
        for weight in weights.iter_mut() {
            **weight /= sum;
        }
    }
}

/// Digital infrastructure composite weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfrastructureWeights {
    #[serde(default = "default_website_features_weight")]
    pub website_features: f64,

    #[serde(default = "default_mobile_app_weight")]
    pub mobile_app: f64,

    #[serde(default = "default_online_booking_weight")]
    pub online_booking: f64,

    #[serde(default = "default_member_experience_weight")]
    pub member_experience: f64,
}

impl Default for InfrastructureWeights {
    fn default() -> Self {
        Self {
            website_features: default_website_features_weight(),
            mobile_app: default_mobile_app_weight(),
            online_booking: default_online_booking_weight(),
            member_experience: default_member_experience_weight(),
        }
    }
}

impl InfrastructureWeights {
    pub fn validate(&self) -> Result<(), String> {
        validate_weight_sum(&[
            ("Website features", self.website_features),
            ("Mobile app", self.mobile_app),
            ("Online booking", self.online_booking),
            ("Member experience", self.member_experience),
        ])
    }

    pub fn normalize(&mut self) {
        normalize_weights(&mut [
            &mut self.website_features,
            &mut self.mobile_app,
            &mut self.online_booking,
            &mut self.member_experience,
        ]);
    }
}

fn default_website_features_weight() -> f64 {
    0.35
}
fn default_mobile_app_weight() -> f64 {
    0.25
}
fn default_online_booking_weight() -> f64 {
    0.20
}
fn default_member_experience_weight() -> f64 {
    0.20
}

/// Digital readiness weights. Mobile and booking dominate here, unlike the
/// infrastructure composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessWeights {
    #[serde(default = "default_readiness_mobile")]
    pub mobile: f64,

    #[serde(default = "default_readiness_booking")]
    pub booking: f64,

    #[serde(default = "default_readiness_experience")]
    pub experience: f64,

    #[serde(default = "default_readiness_website")]
    pub website: f64,
}

impl Default for ReadinessWeights {
    fn default() -> Self {
        Self {
            mobile: default_readiness_mobile(),
            booking: default_readiness_booking(),
            experience: default_readiness_experience(),
            website: default_readiness_website(),
        }
    }
}

impl ReadinessWeights {
    pub fn validate(&self) -> Result<(), String> {
        validate_weight_sum(&[
            ("Mobile", self.mobile),
            ("Booking", self.booking),
            ("Experience", self.experience),
            ("Website", self.website),
        ])
    }

    pub fn normalize(&mut self) {
        normalize_weights(&mut [
            &mut self.mobile,
            &mut self.booking,
            &mut self.experience,
            &mut self.website,
        ]);
    }
}

fn default_readiness_mobile() -> f64 {
    0.4
}
fn default_readiness_booking() -> f64 {
    0.3
}
fn default_readiness_experience() -> f64 {
    0.2
}
fn default_readiness_website() -> f64 {
    0.1
}

/// Pain category weights. Retention carries the most weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PainWeights {
    #[serde(default = "default_operational_weight")]
    pub operational: f64,

    #[serde(default = "default_retention_weight")]
    pub retention: f64,

    #[serde(default = "default_competitive_weight")]
    pub competitive: f64,

    #[serde(default = "default_revenue_loss_weight")]
    pub revenue_loss: f64,

    #[serde(default = "default_growth_weight")]
    pub growth: f64,
}

impl Default for PainWeights {
    fn default() -> Self {
        Self {
            operational: default_operational_weight(),
            retention: default_retention_weight(),
            competitive: default_competitive_weight(),
            revenue_loss: default_revenue_loss_weight(),
            growth: default_growth_weight(),
        }
    }
}

impl PainWeights {
    pub fn validate(&self) -> Result<(), String> {
        validate_weight_sum(&[
            ("Operational", self.operational),
            ("Retention", self.retention),
            ("Competitive", self.competitive),
            ("Revenue loss", self.revenue_loss),
            ("Growth", self.growth),
        ])
    }

    pub fn normalize(&mut self) {
        normalize_weights(&mut [
            &mut self.operational,
            &mut self.retention,
            &mut self.competitive,
            &mut self.revenue_loss,
            &mut self.growth,
        ]);
    }
}

fn default_operational_weight() -> f64 {
    0.25
}
fn default_retention_weight() -> f64 {
    0.30
}
fn default_competitive_weight() -> f64 {
    0.20
}
fn default_revenue_loss_weight() -> f64 {
    0.15
}
fn default_growth_weight() -> f64 {
    0.10
}

/// Baseline pain weights and the coarse status cut-offs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineConfig {
    #[serde(default = "default_baseline_mobile")]
    pub mobile: f64,

    #[serde(default = "default_baseline_technology_age")]
    pub technology_age: f64,

    #[serde(default = "default_baseline_technology_flags")]
    pub technology_flags: f64,

    #[serde(default = "default_baseline_software")]
    pub software: f64,

    /// Pain at or above this is a RED baseline
    #[serde(default = "default_baseline_red_threshold")]
    pub red_threshold: f64,

    /// Pain at or above this is a YELLOW baseline
    #[serde(default = "default_baseline_yellow_threshold")]
    pub yellow_threshold: f64,

    /// A known mobile score below this forces a RED baseline
    #[serde(default = "default_mobile_red_flag")]
    pub mobile_red_flag: f64,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            mobile: default_baseline_mobile(),
            technology_age: default_baseline_technology_age(),
            technology_flags: default_baseline_technology_flags(),
            software: default_baseline_software(),
            red_threshold: default_baseline_red_threshold(),
            yellow_threshold: default_baseline_yellow_threshold(),
            mobile_red_flag: default_mobile_red_flag(),
        }
    }
}

impl BaselineConfig {
    pub fn validate(&self) -> Result<(), String> {
        validate_weight_sum(&[
            ("Mobile", self.mobile),
            ("Technology age", self.technology_age),
            ("Technology flags", self.technology_flags),
            ("Software", self.software),
        ])?;
        if self.yellow_threshold > self.red_threshold {
            return Err(format!(
                "yellow_threshold ({}) must not exceed red_threshold ({})",
                self.yellow_threshold, self.red_threshold
            ));
        }
        Ok(())
    }

    pub fn normalize(&mut self) {
        normalize_weights(&mut [
            &mut self.mobile,
            &mut self.technology_age,
            &mut self.technology_flags,
            &mut self.software,
        ]);
    }
}

fn default_baseline_mobile() -> f64 {
    0.4
}
fn default_baseline_technology_age() -> f64 {
    0.2
}
fn default_baseline_technology_flags() -> f64 {
    0.1
}
fn default_baseline_software() -> f64 {
    0.3
}
fn default_baseline_red_threshold() -> f64 {
    40.0
}
fn default_baseline_yellow_threshold() -> f64 {
    30.0
}
fn default_mobile_red_flag() -> f64 {
    60.0
}
