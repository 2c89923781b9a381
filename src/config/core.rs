use serde::{Deserialize, Serialize};

use super::presets::PresetLevel;
use super::scoring::{BaselineConfig, InfrastructureWeights, PainWeights, ReadinessWeights};
use super::thresholds::{
    AdjustmentConfig, ClassificationThresholds, SoftwareConfig, TechnologyConfig,
    ThresholdOverrides,
};

/// Root configuration structure, read from `.leadscore.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LeadscoreConfig {
    /// Digital infrastructure composite weights
    #[serde(default)]
    pub infrastructure: Option<InfrastructureWeights>,

    /// Digital readiness weights
    #[serde(default)]
    pub readiness: Option<ReadinessWeights>,

    /// Pain category weights
    #[serde(default)]
    pub pain: Option<PainWeights>,

    /// Baseline pain weights and coarse status cut-offs
    #[serde(default)]
    pub baseline: Option<BaselineConfig>,

    /// Size/model adjustment blend constants
    #[serde(default)]
    pub adjustment: Option<AdjustmentConfig>,

    /// Classification preset and per-threshold overrides
    #[serde(default)]
    pub classification: Option<ClassificationConfig>,

    /// Software staleness settings
    #[serde(default)]
    pub software: Option<SoftwareConfig>,

    /// Technology age flag thresholds
    #[serde(default)]
    pub technology: Option<TechnologyConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationConfig {
    #[serde(default)]
    pub preset: PresetLevel,

    #[serde(default, flatten)]
    pub overrides: ThresholdOverrides,
}

impl LeadscoreConfig {
    pub fn infrastructure_weights(&self) -> InfrastructureWeights {
        self.infrastructure.clone().unwrap_or_default()
    }

    pub fn readiness_weights(&self) -> ReadinessWeights {
        self.readiness.clone().unwrap_or_default()
    }

    pub fn pain_weights(&self) -> PainWeights {
        self.pain.clone().unwrap_or_default()
    }

    pub fn baseline_config(&self) -> BaselineConfig {
        self.baseline.clone().unwrap_or_default()
    }

    pub fn adjustment_config(&self) -> AdjustmentConfig {
        self.adjustment.clone().unwrap_or_default()
    }

    pub fn software_config(&self) -> SoftwareConfig {
        self.software.clone().unwrap_or_default()
    }

    pub fn technology_config(&self) -> TechnologyConfig {
        self.technology.clone().unwrap_or_default()
    }

    pub fn preset(&self) -> PresetLevel {
        self.classification
            .as_ref()
            .map(|c| c.preset)
            .unwrap_or_default()
    }

    /// Preset thresholds with any file overrides applied
    pub fn classification_thresholds(&self) -> ClassificationThresholds {
        match &self.classification {
            Some(classification) => classification
                .overrides
                .apply(classification.preset.thresholds()),
            None => ClassificationThresholds::default(),
        }
    }

    /// Replace the preset, keeping explicit overrides
    pub fn with_preset(mut self, preset: PresetLevel) -> Self {
        let mut classification = self.classification.take().unwrap_or_default();
        classification.preset = preset;
        self.classification = Some(classification);
        self
    }
}
