//! Digital infrastructure scoring.
//!
//! Four [0, 100] components (website features, mobile app quality, online
//! booking, member experience) are combined with configurable weights into
//! one composite and a five-tier classification. The same components are
//! re-weighted into a readiness number that favours mobile and booking.

pub mod components;
pub mod recommendations;

use crate::config::{InfrastructureWeights, ReadinessWeights, SoftwareConfig};
use crate::core::types::round1;
use crate::core::{CompositeScore, ScoreComponent};
use crate::features::WebsiteFeatures;
use crate::mobile_app::MobileAppReport;
use crate::technology::SoftwareAnalysis;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub use components::{booking_score, freshness_adjustment, member_experience_score};
pub use recommendations::{competitive_position, critical_gaps, Improvement, Priority};

pub const WEBSITE_FEATURES: &str = "website_features";
pub const MOBILE_APP_QUALITY: &str = "mobile_app_quality";
pub const ONLINE_BOOKING: &str = "online_booking";
pub const MEMBER_EXPERIENCE: &str = "member_experience";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InfrastructureTier {
    Critical,
    Poor,
    Average,
    Good,
    Excellent,
}

impl InfrastructureTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            InfrastructureTier::Excellent
        } else if score >= 65.0 {
            InfrastructureTier::Good
        } else if score >= 45.0 {
            InfrastructureTier::Average
        } else if score >= 25.0 {
            InfrastructureTier::Poor
        } else {
            InfrastructureTier::Critical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InfrastructureTier::Critical => "critical",
            InfrastructureTier::Poor => "poor",
            InfrastructureTier::Average => "average",
            InfrastructureTier::Good => "good",
            InfrastructureTier::Excellent => "excellent",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            InfrastructureTier::Excellent => "Modern, fully digital member experience",
            InfrastructureTier::Good => "Solid digital foundation with minor gaps",
            InfrastructureTier::Average => "Basic digital presence with significant gaps",
            InfrastructureTier::Poor => "Limited digital capabilities; members are underserved",
            InfrastructureTier::Critical => "Little to no digital infrastructure",
        }
    }
}

impl fmt::Display for InfrastructureTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upstream results the scorer reads
#[derive(Debug, Clone, Copy)]
pub struct InfrastructureInputs<'a> {
    pub features: &'a WebsiteFeatures,
    pub mobile_app: &'a MobileAppReport,
    pub software: &'a SoftwareAnalysis,
    pub technology_age_score: f64,
    pub mobile_score: Option<f64>,
    pub software_config: &'a SoftwareConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfrastructureScore {
    pub score: f64,
    pub tier: InfrastructureTier,
    pub tier_description: String,
    pub component_scores: BTreeMap<String, f64>,
    pub weighted_contributions: BTreeMap<String, f64>,
    pub readiness: f64,
    pub recommendations: Vec<String>,
    pub critical_gaps: Vec<String>,
    pub competitive_position: String,
}

impl InfrastructureScore {
    pub fn component(&self, name: &str) -> f64 {
        self.component_scores.get(name).copied().unwrap_or(0.0)
    }
}

/// Score a lead's digital infrastructure
pub fn score_infrastructure(
    inputs: &InfrastructureInputs<'_>,
    weights: &InfrastructureWeights,
    readiness_weights: &ReadinessWeights,
) -> InfrastructureScore {
    let flags = &inputs.features.flags;
    let website = inputs.features.score;
    let mobile_app = inputs.mobile_app.quality_score;
    let booking = booking_score(flags, inputs.software, inputs.mobile_app.has_app);
    let experience = member_experience_score(flags, mobile_app, inputs.technology_age_score);

    let composite = CompositeScore::compose(vec![
        ScoreComponent::new(WEBSITE_FEATURES, website, weights.website_features),
        ScoreComponent::new(MOBILE_APP_QUALITY, mobile_app, weights.mobile_app),
        ScoreComponent::new(ONLINE_BOOKING, booking, weights.online_booking),
        ScoreComponent::new(MEMBER_EXPERIENCE, experience, weights.member_experience),
    ]);

    let readiness = CompositeScore::compose(vec![
        ScoreComponent::new("mobile", mobile_app, readiness_weights.mobile),
        ScoreComponent::new("booking", booking, readiness_weights.booking),
        ScoreComponent::new("experience", experience, readiness_weights.experience),
        ScoreComponent::new("website", website, readiness_weights.website),
    ])
    .total;

    let score = round1(composite.total);
    let tier = InfrastructureTier::from_score(score);

    let component_scores = composite
        .components
        .iter()
        .map(|c| (c.name.clone(), c.score))
        .collect();
    let weighted_contributions = composite.contributions().into_iter().collect();

    let recommendations =
        recommendations::improvements(inputs, website, mobile_app, booking, experience)
            .iter()
            .map(Improvement::to_string)
            .collect();

    log::debug!(
        "Infrastructure {:.1} ({}): website {:.0}, app {:.0}, booking {:.0}, experience {:.0}",
        score,
        tier,
        website,
        mobile_app,
        booking,
        experience
    );

    InfrastructureScore {
        score,
        tier,
        tier_description: tier.description().to_string(),
        component_scores,
        weighted_contributions,
        readiness: round1(readiness),
        recommendations,
        critical_gaps: critical_gaps(inputs),
        competitive_position: competitive_position(score).to_string(),
    }
}
