//! Pain scoring: the coarse baseline, the five-category analysis and the
//! size/model adjustment applied on top of it.

pub mod adjuster;
pub mod analyzer;
pub mod baseline;

use serde::Serialize;
use std::fmt;

pub use adjuster::{
    adjust_pain, model_multiplier, size_multiplier, size_thresholds, AdjustedPain,
    AdjustmentInputs, SizeThresholds,
};
pub use analyzer::{analyze_pain, PainAnalysis, PainInputs};
pub use baseline::{baseline_pain, technology_flag_pain, BaselinePain, PainLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PainCategory {
    Operational,
    Retention,
    Competitive,
    RevenueLoss,
    Growth,
}

impl PainCategory {
    pub const ALL: [PainCategory; 5] = [
        PainCategory::Operational,
        PainCategory::Retention,
        PainCategory::Competitive,
        PainCategory::RevenueLoss,
        PainCategory::Growth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PainCategory::Operational => "operational",
            PainCategory::Retention => "retention",
            PainCategory::Competitive => "competitive",
            PainCategory::RevenueLoss => "revenue_loss",
            PainCategory::Growth => "growth",
        }
    }
}

impl fmt::Display for PainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
