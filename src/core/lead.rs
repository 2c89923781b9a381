//! The lead record that flows through the pipeline.
//!
//! Identity and raw signal fields are set once by normalization. Each stage
//! owns exactly one `Option` field and fills it in; a stage that never ran
//! (because an earlier one failed) leaves its field `None` and the lead is
//! still emitted.

use super::types::{GymType, LeadStatus, SizeTier};
use crate::classification::Classification;
use crate::decision_maker::DecisionMakerProfile;
use crate::features::WebsiteFeatures;
use crate::infrastructure::InfrastructureScore;
use crate::mobile_app::MobileAppReport;
use crate::pain::{AdjustedPain, BaselinePain, PainAnalysis};
use crate::qualification::{BudgetEstimate, Qualification};
use crate::signals::GymProfile;
use crate::technology::{SoftwareAnalysis, TechnologyReport, TechnologySignal};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Lead {
    // Identity
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub coordinates: Option<Coordinates>,
    pub place_id: Option<String>,
    pub google_url: Option<String>,

    // Reputation
    pub rating: Option<f64>,
    pub review_count: u32,

    // Web presence
    pub website: Option<String>,
    pub domain: Option<String>,

    // Raw listing text and feeds
    pub description: Option<String>,
    pub category: Option<String>,
    pub mobile_score: Option<f64>,
    pub technologies: Vec<TechnologySignal>,
    pub review_texts: Vec<String>,
    pub photo_count: u32,
    pub has_professional_network: bool,

    // Stage outputs
    pub profile: Option<GymProfile>,
    pub technology: Option<TechnologyReport>,
    pub software: Option<SoftwareAnalysis>,
    pub features: Option<WebsiteFeatures>,
    pub mobile_app: Option<MobileAppReport>,
    pub infrastructure: Option<InfrastructureScore>,
    pub baseline: Option<BaselinePain>,
    pub pain: Option<PainAnalysis>,
    pub adjusted_pain: Option<AdjustedPain>,
    pub classification: Option<Classification>,
    pub qualification: Option<Qualification>,
    pub budget: Option<BudgetEstimate>,
    pub decision_makers: Option<DecisionMakerProfile>,

    // Lifecycle
    pub status: LeadStatus,
    pub status_source: Option<String>,
    pub error_notes: Vec<String>,
}

impl Lead {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Lowercased free text the keyword classifiers search:
    /// name, description, category and address
    pub fn listing_text(&self) -> String {
        [
            Some(self.name.as_str()),
            self.description.as_deref(),
            self.category.as_deref(),
            self.address.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
    }

    /// Lowercased "name category" text of every technology signal
    pub fn technology_text(&self) -> String {
        self.technologies
            .iter()
            .map(TechnologySignal::search_text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn has_website(&self) -> bool {
        self.website.as_deref().is_some_and(|w| !w.trim().is_empty())
    }

    pub fn has_phone(&self) -> bool {
        self.phone.as_deref().is_some_and(|p| !p.trim().is_empty())
    }

    pub fn gym_type(&self) -> GymType {
        self.profile
            .as_ref()
            .map(|p| p.gym_type)
            .unwrap_or(GymType::Unknown)
    }

    pub fn size_tier(&self) -> SizeTier {
        self.profile
            .as_ref()
            .map(|p| p.size.tier)
            .unwrap_or(SizeTier::Unknown)
    }

    pub fn franchise_chain(&self) -> Option<&str> {
        self.profile
            .as_ref()
            .and_then(|p| p.attributes.franchise_chain.as_deref())
    }

    pub fn note_error(&mut self, note: impl Into<String>) {
        self.error_notes.push(note.into());
    }

    pub fn extend_notes(&mut self, notes: impl IntoIterator<Item = String>) {
        self.error_notes.extend(notes);
    }

    pub fn is_error(&self) -> bool {
        self.status == LeadStatus::Error
    }
}
