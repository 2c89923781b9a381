//! RED / YELLOW / GREEN sales classification.
//!
//! The engine reads a frozen snapshot of upstream scores, collects one
//! signal per triggered criterion and decides:
//!
//! - **RED** with two critical RED signals or three RED signals of any weight
//! - **YELLOW** with one RED signal or three YELLOW signals
//! - **GREEN** otherwise
//!
//! A prior coarse status can only be escalated: RED always wins, and YELLOW
//! replaces a prior GREEN but never a prior RED.

pub mod criteria;

use crate::config::ClassificationThresholds;
use crate::core::{GymType, LeadStatus, SizeTier, Urgency};
use crate::infrastructure::InfrastructureTier;
use serde::Serialize;
use std::fmt;

pub use criteria::{evaluate_all, expects_mobile_app, Criterion, Signal, SignalColor, SignalWeight};

pub const MAX_REASONS: usize = 5;

/// Source recorded on a lead whose status this engine decided
pub const STATUS_SOURCE: &str = "classification";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Red,
    Yellow,
    Green,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Red => "red",
            Verdict::Yellow => "yellow",
            Verdict::Green => "green",
        }
    }

    pub fn status(&self) -> LeadStatus {
        match self {
            Verdict::Red => LeadStatus::Red,
            Verdict::Yellow => LeadStatus::Yellow,
            Verdict::Green => LeadStatus::Green,
        }
    }

    pub fn from_status(status: LeadStatus) -> Option<Self> {
        match status {
            LeadStatus::Red => Some(Verdict::Red),
            LeadStatus::Yellow => Some(Verdict::Yellow),
            LeadStatus::Green => Some(Verdict::Green),
            LeadStatus::Pending | LeadStatus::Error => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    /// The verdict came from a prior status the criteria did not support
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
            Confidence::VeryHigh => "very_high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionPriority {
    Urgent,
    Medium,
    Low,
}

impl ActionPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionPriority::Urgent => "urgent",
            ActionPriority::Medium => "medium",
            ActionPriority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesReadiness {
    HotLead,
    WarmLead,
    NotReady,
}

impl SalesReadiness {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalesReadiness::HotLead => "hot_lead",
            SalesReadiness::WarmLead => "warm_lead",
            SalesReadiness::NotReady => "not_ready",
        }
    }
}

/// Frozen snapshot of the upstream scores the criteria read
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationInputs {
    pub adjusted_pain: f64,
    pub urgency: Urgency,
    pub infrastructure_score: f64,
    pub infrastructure_tier: InfrastructureTier,
    pub mobile_score: Option<f64>,
    pub software_quality: f64,
    pub has_software: bool,
    pub threshold_violations: usize,
    pub feature_score: f64,
    pub has_app: bool,
    pub app_quality: f64,
    pub size: SizeTier,
    pub gym_type: GymType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    /// Verdict after applying the prior status
    pub verdict: Verdict,
    /// Verdict from the criteria alone
    pub computed: Verdict,
    pub prior: Option<Verdict>,
    pub confidence: Confidence,
    pub reasons: Vec<String>,
    pub action_priority: ActionPriority,
    pub sales_readiness: SalesReadiness,
    pub summary: String,
    pub signals: Vec<Signal>,
    pub red_signals: usize,
    pub critical_red_signals: usize,
    pub yellow_signals: usize,
}

impl Classification {
    pub fn status(&self) -> LeadStatus {
        self.verdict.status()
    }

    /// The prior status was raised by this engine
    pub fn escalated(&self) -> bool {
        self.prior.is_some_and(|prior| self.verdict < prior)
    }

    /// Whether the final verdict is this engine's own decision
    pub fn decided_here(&self) -> bool {
        self.prior.map_or(true, |prior| self.verdict != prior || self.computed == prior)
    }
}

/// Decide a verdict from signal counts
pub fn decide(red: usize, critical_red: usize, yellow: usize) -> Verdict {
    if critical_red >= 2 || red >= 3 {
        Verdict::Red
    } else if red >= 1 || yellow >= 3 {
        Verdict::Yellow
    } else {
        Verdict::Green
    }
}

/// Escalation-only merge of a prior status with a computed verdict
pub fn escalate(prior: Option<Verdict>, computed: Verdict) -> Verdict {
    match prior {
        Some(prior) => prior.min(computed),
        None => computed,
    }
}

fn confidence(verdict: Verdict, red: usize, critical_red: usize) -> Confidence {
    match verdict {
        Verdict::Red if critical_red >= 3 => Confidence::VeryHigh,
        Verdict::Red if critical_red >= 2 => Confidence::High,
        Verdict::Red => Confidence::Medium,
        Verdict::Yellow if red >= 1 => Confidence::High,
        Verdict::Yellow => Confidence::Medium,
        Verdict::Green => Confidence::High,
    }
}

/// Triggering details, RED before YELLOW and heavier weights first
fn reasons(verdict: Verdict, signals: &[Signal]) -> Vec<String> {
    let mut ranked: Vec<&Signal> = signals.iter().collect();
    ranked.sort_by_key(|s| (s.color, s.weight));

    let mut reasons = Vec::with_capacity(MAX_REASONS);
    if verdict == Verdict::Green {
        reasons.push("Digital infrastructure meets current needs".to_string());
    }
    reasons.extend(ranked.into_iter().map(|s| s.detail.clone()));
    reasons.truncate(MAX_REASONS);
    reasons
}

fn summary(verdict: Verdict, inputs: &ClassificationInputs, critical_red: usize) -> String {
    let business = format!("{} ({} size)", inputs.gym_type.display_name(), inputs.size);
    match verdict {
        Verdict::Red => format!(
            "{} shows an urgent need for modern gym management solutions: pain {:.1}, \
             infrastructure {:.0}/100, {} critical signal{}",
            business,
            inputs.adjusted_pain,
            inputs.infrastructure_score,
            critical_red,
            if critical_red == 1 { "" } else { "s" }
        ),
        Verdict::Yellow => format!(
            "{} has moderate potential for improvement: pain {:.1}, infrastructure {:.0}/100",
            business, inputs.adjusted_pain, inputs.infrastructure_score
        ),
        Verdict::Green => format!(
            "{} has a modern digital setup; monitor for future expansion needs",
            business
        ),
    }
}

/// Classify a lead from its score snapshot, escalating any prior status
pub fn classify(
    inputs: &ClassificationInputs,
    thresholds: &ClassificationThresholds,
    prior: Option<LeadStatus>,
) -> Classification {
    let signals = evaluate_all(inputs, thresholds);
    let red = signals
        .iter()
        .filter(|s| s.color == SignalColor::Red)
        .count();
    let critical_red = signals.iter().filter(|s| s.is_critical_red()).count();
    let yellow = signals.len() - red;

    let computed = decide(red, critical_red, yellow);
    let prior = prior.and_then(Verdict::from_status);
    let verdict = escalate(prior, computed);

    let confidence = if verdict == computed {
        confidence(verdict, red, critical_red)
    } else {
        Confidence::Low
    };
    let (action_priority, sales_readiness) = match verdict {
        Verdict::Red => (ActionPriority::Urgent, SalesReadiness::HotLead),
        Verdict::Yellow => (ActionPriority::Medium, SalesReadiness::WarmLead),
        Verdict::Green => (ActionPriority::Low, SalesReadiness::NotReady),
    };

    Classification {
        verdict,
        computed,
        prior,
        confidence,
        reasons: reasons(verdict, &signals),
        action_priority,
        sales_readiness,
        summary: summary(verdict, inputs, critical_red),
        signals,
        red_signals: red,
        critical_red_signals: critical_red,
        yellow_signals: yellow,
    }
}
