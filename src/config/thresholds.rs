use serde::{Deserialize, Serialize};

/// Cut-offs for the classification criteria.
///
/// Scores are "RED below" / "YELLOW below" for quality-style metrics and
/// "RED at or above" / "YELLOW at or above" for pain and violation counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationThresholds {
    pub pain_red: f64,
    pub pain_yellow: f64,
    pub mobile_red: f64,
    pub mobile_yellow: f64,
    pub software_red: f64,
    pub software_yellow: f64,
    pub features_red: f64,
    pub features_yellow: f64,
    pub violations_red: usize,
    pub violations_yellow: usize,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            pain_red: 60.0,
            pain_yellow: 40.0,
            mobile_red: 50.0,
            mobile_yellow: 70.0,
            software_red: 40.0,
            software_yellow: 60.0,
            features_red: 30.0,
            features_yellow: 50.0,
            violations_red: 3,
            violations_yellow: 1,
        }
    }
}

impl ClassificationThresholds {
    pub fn validate(&self) -> Result<(), String> {
        let ordered = [
            ("pain", self.pain_yellow <= self.pain_red),
            ("mobile", self.mobile_red <= self.mobile_yellow),
            ("software", self.software_red <= self.software_yellow),
            ("features", self.features_red <= self.features_yellow),
            ("violations", self.violations_yellow <= self.violations_red),
        ];
        match ordered.iter().find(|(_, ok)| !ok) {
            Some((name, _)) => Err(format!(
                "{} thresholds are inverted: the RED bound must be stricter than the YELLOW bound",
                name
            )),
            None => Ok(()),
        }
    }
}

/// Partial threshold overrides read from `[classification]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdOverrides {
    pub pain_red: Option<f64>,
    pub pain_yellow: Option<f64>,
    pub mobile_red: Option<f64>,
    pub mobile_yellow: Option<f64>,
    pub software_red: Option<f64>,
    pub software_yellow: Option<f64>,
    pub features_red: Option<f64>,
    pub features_yellow: Option<f64>,
    pub violations_red: Option<usize>,
    pub violations_yellow: Option<usize>,
}

impl ThresholdOverrides {
    /// Values set here win over the preset
    pub fn apply(&self, base: ClassificationThresholds) -> ClassificationThresholds {
        ClassificationThresholds {
            pain_red: self.pain_red.unwrap_or(base.pain_red),
            pain_yellow: self.pain_yellow.unwrap_or(base.pain_yellow),
            mobile_red: self.mobile_red.unwrap_or(base.mobile_red),
            mobile_yellow: self.mobile_yellow.unwrap_or(base.mobile_yellow),
            software_red: self.software_red.unwrap_or(base.software_red),
            software_yellow: self.software_yellow.unwrap_or(base.software_yellow),
            features_red: self.features_red.unwrap_or(base.features_red),
            features_yellow: self.features_yellow.unwrap_or(base.features_yellow),
            violations_red: self.violations_red.unwrap_or(base.violations_red),
            violations_yellow: self.violations_yellow.unwrap_or(base.violations_yellow),
        }
    }
}

/// Size/model adjustment blend. When base pain is at or above
/// `blend_threshold` the base keeps `high_pain_base_share` of the blend,
/// otherwise `low_pain_base_share`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentConfig {
    #[serde(default = "default_blend_threshold")]
    pub blend_threshold: f64,

    #[serde(default = "default_high_pain_base_share")]
    pub high_pain_base_share: f64,

    #[serde(default = "default_low_pain_base_share")]
    pub low_pain_base_share: f64,
}

impl Default for AdjustmentConfig {
    fn default() -> Self {
        Self {
            blend_threshold: default_blend_threshold(),
            high_pain_base_share: default_high_pain_base_share(),
            low_pain_base_share: default_low_pain_base_share(),
        }
    }
}

impl AdjustmentConfig {
    pub fn validate(&self) -> Result<(), String> {
        for (name, share) in [
            ("high_pain_base_share", self.high_pain_base_share),
            ("low_pain_base_share", self.low_pain_base_share),
        ] {
            if !(0.0..=1.0).contains(&share) {
                return Err(format!("{} must be between 0.0 and 1.0", name));
            }
        }
        if !(0.0..=100.0).contains(&self.blend_threshold) {
            return Err("blend_threshold must be between 0 and 100".to_string());
        }
        Ok(())
    }

    pub fn base_share(&self, base_score: f64) -> f64 {
        if base_score >= self.blend_threshold {
            self.high_pain_base_share
        } else {
            self.low_pain_base_share
        }
    }
}

fn default_blend_threshold() -> f64 {
    30.0
}
fn default_high_pain_base_share() -> f64 {
    0.8
}
fn default_low_pain_base_share() -> f64 {
    0.9
}

/// Software staleness settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftwareConfig {
    /// Year against which "last updated" is measured
    #[serde(default = "default_reference_year")]
    pub reference_year: i32,

    /// Years without an update before the staleness penalty starts
    #[serde(default = "default_grace_years")]
    pub grace_years: i32,

    /// Products last updated before this year count as outdated in queries
    #[serde(default = "default_outdated_cutoff")]
    pub outdated_cutoff: i32,
}

impl Default for SoftwareConfig {
    fn default() -> Self {
        Self {
            reference_year: default_reference_year(),
            grace_years: default_grace_years(),
            outdated_cutoff: default_outdated_cutoff(),
        }
    }
}

fn default_reference_year() -> i32 {
    2024
}
fn default_grace_years() -> i32 {
    2
}
fn default_outdated_cutoff() -> i32 {
    2022
}

/// Technology age flag thresholds, in years since last detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnologyConfig {
    #[serde(default = "default_outdated_years")]
    pub outdated_years: f64,

    #[serde(default = "default_very_outdated_years")]
    pub very_outdated_years: f64,
}

impl Default for TechnologyConfig {
    fn default() -> Self {
        Self {
            outdated_years: default_outdated_years(),
            very_outdated_years: default_very_outdated_years(),
        }
    }
}

impl TechnologyConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.outdated_years <= 0.0 || self.very_outdated_years < self.outdated_years {
            Err(format!(
                "Technology thresholds must satisfy 0 < outdated_years ({}) <= very_outdated_years ({})",
                self.outdated_years, self.very_outdated_years
            ))
        } else {
            Ok(())
        }
    }
}

fn default_outdated_years() -> f64 {
    3.0
}
fn default_very_outdated_years() -> f64 {
    5.0
}
