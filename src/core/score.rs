//! Weighted score composition.
//!
//! Every composite in the pipeline (digital infrastructure, readiness, pain,
//! baseline pain) is built from named [0, 100] components. The composite is
//! always rescaled by the total weight actually applied, so a component that
//! is absent lowers neither the numerator nor the denominator.

use super::types::clamp_score;
use serde::{Deserialize, Serialize};

/// A single qualitative finding attached to a score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    pub description: String,
    pub impact: String,
    /// 1 (cosmetic) to 10 (business critical)
    pub severity: u8,
    pub category: String,
}

impl Factor {
    pub fn new(
        category: impl Into<String>,
        description: impl Into<String>,
        impact: impl Into<String>,
        severity: u8,
    ) -> Self {
        Self {
            description: description.into(),
            impact: impact.into(),
            severity: severity.clamp(1, 10),
            category: category.into(),
        }
    }

    pub fn is_critical(&self) -> bool {
        self.severity >= 8
    }
}

/// A named score in [0, 100] with the weight it carries in a composite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub name: String,
    pub score: f64,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub factors: Vec<Factor>,
}

impl ScoreComponent {
    pub fn new(name: impl Into<String>, score: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            score: clamp_score(score),
            weight: weight.max(0.0),
            factors: Vec::new(),
        }
    }

    pub fn with_factors(mut self, factors: Vec<Factor>) -> Self {
        self.factors = factors;
        self
    }

    /// Weighted contribution of this component to a composite of `total_weight`
    pub fn contribution(&self, total_weight: f64) -> f64 {
        if total_weight <= 0.0 {
            0.0
        } else {
            self.score * self.weight / total_weight
        }
    }
}

/// Weighted combination of components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeScore {
    pub components: Vec<ScoreComponent>,
    pub total: f64,
}

impl CompositeScore {
    pub fn compose(components: Vec<ScoreComponent>) -> Self {
        let total_weight = total_weight(&components);
        let total = if total_weight > 0.0 {
            clamp_score(components.iter().map(|c| c.contribution(total_weight)).sum())
        } else {
            0.0
        };
        Self { components, total }
    }

    pub fn component(&self, name: &str) -> Option<&ScoreComponent> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Per-component contributions, which sum to `total`
    pub fn contributions(&self) -> Vec<(String, f64)> {
        let total_weight = total_weight(&self.components);
        self.components
            .iter()
            .map(|c| (c.name.clone(), c.contribution(total_weight)))
            .collect()
    }
}

fn total_weight(components: &[ScoreComponent]) -> f64 {
    components.iter().map(|c| c.weight).sum()
}

/// Check that a weight set sums to 1.0 within tolerance
pub fn validate_weight_sum(weights: &[(&str, f64)]) -> Result<(), String> {
    for (name, weight) in weights {
        if !(0.0..=1.0).contains(weight) {
            return Err(format!("{} weight must be between 0.0 and 1.0", name));
        }
    }
    let sum: f64 = weights.iter().map(|(_, w)| w).sum();
    if (sum - 1.0).abs() > 0.001 {
        return Err(format!("Weights must sum to 1.0, but sum to {:.3}", sum));
    }
    Ok(())
}
