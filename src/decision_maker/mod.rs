//! Decision-maker profiling.
//!
//! Infers who buys software at a business from its size, franchise
//! affiliation and review text, scores how reachable they are, and picks a
//! sales approach for that structure.

pub mod reviews;

use crate::core::{GymType, SizeTier};
use serde::Serialize;

pub use reviews::{count_mentions, ReviewMentions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Structure {
    Corporate,
    OwnerOperated,
    OwnerDirect,
    Unknown,
}

impl Structure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Structure::Corporate => "corporate",
            Structure::OwnerOperated => "owner_operated",
            Structure::OwnerDirect => "owner_direct",
            Structure::Unknown => "unknown",
        }
    }

    pub fn management_level(&self) -> ManagementLevel {
        match self {
            Structure::Corporate => ManagementLevel::MultiTier,
            Structure::OwnerOperated => ManagementLevel::SingleTier,
            Structure::OwnerDirect => ManagementLevel::OwnerOnly,
            Structure::Unknown => ManagementLevel::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ManagementLevel {
    MultiTier,
    SingleTier,
    OwnerOnly,
    Unknown,
}

impl ManagementLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ManagementLevel::MultiTier => "multi_tier",
            ManagementLevel::SingleTier => "single_tier",
            ManagementLevel::OwnerOnly => "owner_only",
            ManagementLevel::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactQuality {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl ContactQuality {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => ContactQuality::Excellent,
            s if s >= 60 => ContactQuality::Good,
            s if s >= 40 => ContactQuality::Fair,
            _ => ContactQuality::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactQuality::Poor => "poor",
            ContactQuality::Fair => "fair",
            ContactQuality::Good => "good",
            ContactQuality::Excellent => "excellent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    Low,
    Medium,
    High,
}

impl Accessibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Accessibility::Low => "low",
            Accessibility::Medium => "medium",
            Accessibility::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionMaker {
    pub title: &'static str,
    pub influence: &'static str,
    pub focus: &'static str,
}

const fn role(title: &'static str, influence: &'static str, focus: &'static str) -> DecisionMaker {
    DecisionMaker {
        title,
        influence,
        focus,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FranchiseConsiderations {
    pub is_franchise: bool,
    pub chain: Option<String>,
    pub approval_complexity: &'static str,
    pub decision_level: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesApproach {
    pub strategy: &'static str,
    pub key_points: Vec<&'static str>,
    pub estimated_sales_cycle: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct DecisionMakerInputs<'a> {
    pub size: SizeTier,
    pub gym_type: GymType,
    pub franchise_chain: Option<&'a str>,
    pub has_website: bool,
    pub has_phone: bool,
    pub has_professional_network: bool,
    pub reviews: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMakerProfile {
    pub structure: Structure,
    pub management_level: ManagementLevel,
    /// "high" when reviews confirm the structure, "low" when it is guessed
    pub structure_confidence: &'static str,
    pub owner_identified: bool,
    pub mentions: ReviewMentions,
    pub likely_decision_makers: Vec<DecisionMaker>,
    pub decision_factors: Vec<String>,
    pub contact_score: u32,
    pub contact_quality: ContactQuality,
    pub accessibility: Accessibility,
    pub franchise: FranchiseConsiderations,
    pub sales_approach: SalesApproach,
}

impl DecisionMakerProfile {
    pub fn primary_contact(&self) -> Option<&DecisionMaker> {
        self.likely_decision_makers.first()
    }
}

/// Business models that are usually run by the owner themselves
fn owner_led(gym_type: GymType) -> bool {
    matches!(
        gym_type,
        GymType::PersonalTraining
            | GymType::BoutiqueFitness
            | GymType::YogaStudio
            | GymType::MartialArts
            | GymType::DanceStudio
    )
}

fn base_structure(size: SizeTier, gym_type: GymType, franchise: bool) -> Structure {
    match size {
        _ if franchise => Structure::Corporate,
        SizeTier::Large => Structure::Corporate,
        SizeTier::Medium => Structure::OwnerOperated,
        SizeTier::Small => Structure::OwnerDirect,
        SizeTier::Unknown if owner_led(gym_type) => Structure::OwnerDirect,
        SizeTier::Unknown => Structure::Unknown,
    }
}

fn decision_makers(structure: Structure, franchise: bool) -> Vec<DecisionMaker> {
    match structure {
        Structure::Corporate if franchise => vec![
            role("Franchise Owner", "very_high", "roi"),
            role("General Manager", "high", "operations"),
            role("Franchise Support Contact", "medium", "compliance"),
        ],
        Structure::Corporate => vec![
            role("General Manager", "high", "operations"),
            role("Operations Director", "high", "efficiency"),
            role("Regional Manager", "medium", "standardization"),
        ],
        Structure::OwnerOperated => vec![
            role("Owner/Operator", "very_high", "growth"),
            role("General Manager", "medium", "operations"),
        ],
        Structure::OwnerDirect => vec![role("Owner", "exclusive", "member_experience")],
        Structure::Unknown => vec![role("Owner or General Manager", "unknown", "general")],
    }
}

fn sales_approach(structure: Structure) -> SalesApproach {
    let (strategy, key_points, estimated_sales_cycle) = match structure {
        Structure::Corporate => (
            "enterprise",
            vec![
                "Focus on scalability and standardization",
                "Prepare an ROI case for multiple stakeholders",
                "Expect procurement and IT review",
            ],
            "3-6 months",
        ),
        Structure::OwnerOperated => (
            "relationship",
            vec![
                "Build trust with owner/operator",
                "Demonstrate quick operational wins",
                "Offer hands-on onboarding",
            ],
            "1-3 months",
        ),
        Structure::OwnerDirect => (
            "consultative",
            vec![
                "Direct owner engagement",
                "Emphasize time savings and simplicity",
                "Show member experience improvements",
            ],
            "2-4 weeks",
        ),
        Structure::Unknown => (
            "discovery",
            vec![
                "Identify the decision maker first",
                "Qualify size and structure on the first call",
            ],
            "unknown",
        ),
    };
    SalesApproach {
        strategy,
        key_points,
        estimated_sales_cycle,
    }
}

fn accessibility(quality: ContactQuality, level: ManagementLevel) -> Accessibility {
    let flat = matches!(level, ManagementLevel::SingleTier | ManagementLevel::OwnerOnly);
    if quality >= ContactQuality::Good && flat {
        Accessibility::High
    } else if quality == ContactQuality::Poor || level == ManagementLevel::MultiTier {
        Accessibility::Low
    } else {
        Accessibility::Medium
    }
}

/// Profile who decides on software purchases and how to reach them
pub fn profile_decision_makers(inputs: &DecisionMakerInputs<'_>) -> DecisionMakerProfile {
    let chain = inputs
        .franchise_chain
        .map(str::trim)
        .filter(|c| !c.is_empty());
    let is_franchise = chain.is_some();
    let mentions = count_mentions(inputs.reviews);

    let mut structure = base_structure(inputs.size, inputs.gym_type, is_franchise);
    let mut structure_confidence = if structure == Structure::Unknown {
        "low"
    } else {
        "medium"
    };
    let mut decision_factors = Vec::new();

    if mentions.owner_involved() {
        decision_factors.push("Owner actively involved (mentioned in reviews)".to_string());
        match structure {
            Structure::Unknown => {
                structure = Structure::OwnerOperated;
                structure_confidence = "medium";
            }
            Structure::OwnerOperated | Structure::OwnerDirect => structure_confidence = "high",
            Structure::Corporate => {}
        }
    }
    if mentions.professional_management() {
        decision_factors.push("Professional management structure evident".to_string());
        if structure == Structure::Corporate {
            structure_confidence = "high";
        }
    }
    if is_franchise {
        decision_factors.push("Franchise location: purchases may need corporate approval".to_string());
    } else if structure == Structure::Corporate {
        decision_factors.push("Large facility with layered management".to_string());
    }

    let owner_identified = mentions.owner_involved() || structure == Structure::OwnerDirect;
    let management_level = structure.management_level();

    let mut contact_score = 0;
    if inputs.has_website {
        contact_score += 30;
    }
    if inputs.has_phone {
        contact_score += 20;
    }
    if owner_identified {
        contact_score += 25;
    }
    if matches!(inputs.size, SizeTier::Small | SizeTier::Medium) {
        contact_score += 15;
    }
    if inputs.has_professional_network {
        contact_score += 10;
    }
    let contact_quality = ContactQuality::from_score(contact_score);

    let franchise = FranchiseConsiderations {
        is_franchise,
        chain: chain.map(str::to_string),
        approval_complexity: if is_franchise { "high" } else { "low" },
        decision_level: if is_franchise {
            "may require corporate approval"
        } else {
            "local decision"
        },
    };

    log::debug!(
        "Decision makers: {} ({} confidence), contact {} ({})",
        structure.as_str(),
        structure_confidence,
        contact_quality.as_str(),
        contact_score
    );

    DecisionMakerProfile {
        structure,
        management_level,
        structure_confidence,
        owner_identified,
        mentions,
        likely_decision_makers: decision_makers(structure, is_franchise),
        decision_factors,
        contact_score,
        contact_quality,
        accessibility: accessibility(contact_quality, management_level),
        franchise,
        sales_approach: sales_approach(structure),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(size: SizeTier, gym_type: GymType) -> DecisionMakerInputs<'static> {
        DecisionMakerInputs {
            size,
            gym_type,
            franchise_chain: None,
            has_website: true,
            has_phone: true,
            has_professional_network: false,
            reviews: &[],
        }
    }

    fn titles(profile: &DecisionMakerProfile) -> Vec<&'static str> {
        profile.likely_decision_makers.iter().map(|d| d.title).collect()
    }

    #[test]
    fn test_large_gym_is_corporate() {
        let profile = profile_decision_makers(&inputs(SizeTier::Large, GymType::FitnessCenter));
        assert_eq!(profile.structure, Structure::Corporate);
        assert_eq!(profile.management_level, ManagementLevel::MultiTier);
        assert_eq!(
            titles(&profile),
            vec!["General Manager", "Operations Director", "Regional Manager"]
        );
        assert_eq!(profile.contact_quality, ContactQuality::Fair);
        assert_eq!(profile.accessibility, Accessibility::Low);
        assert_eq!(profile.sales_approach.strategy, "enterprise");
        assert_eq!(profile.sales_approach.estimated_sales_cycle, "3-6 months");
    }

    #[test]
    fn test_franchise_needs_corporate_approval() {
        let profile = profile_decision_makers(&DecisionMakerInputs {
            franchise_chain: Some("Anytime Fitness"),
            ..inputs(SizeTier::Large, GymType::FitnessCenter)
        });
        assert!(profile.franchise.is_franchise);
        assert_eq!(profile.franchise.approval_complexity, "high");
        assert_eq!(
            profile.franchise.decision_level,
            "may require corporate approval"
        );
        let owner = profile.primary_contact().unwrap();
        assert_eq!(owner.title, "Franchise Owner");
        assert_eq!(owner.influence, "very_high");
        assert_eq!(owner.focus, "roi");
    }

    #[test]
    fn test_owner_mentions_confirm_owner_operator() {
        let reviews = vec![
            "The owner John is always here and very helpful".to_string(),
            "Love this place, the owner really cares".to_string(),
            "John the owner fixed my billing issue immediately".to_string(),
        ];
        let profile = profile_decision_makers(&DecisionMakerInputs {
            reviews: &reviews,
            ..inputs(SizeTier::Medium, GymType::TraditionalGym)
        });
        assert_eq!(profile.structure, Structure::OwnerOperated);
        assert!(profile.owner_identified);
        assert_eq!(profile.structure_confidence, "high");
        assert_eq!(profile.contact_quality, ContactQuality::Excellent);
        assert_eq!(profile.accessibility, Accessibility::High);
        assert!(profile
            .decision_factors
            .contains(&"Owner actively involved (mentioned in reviews)".to_string()));
        assert_eq!(profile.sales_approach.estimated_sales_cycle, "1-3 months");
    }

    #[test]
    fn test_small_studio_is_owner_direct() {
        let profile = profile_decision_makers(&DecisionMakerInputs {
            has_website: false,
            ..inputs(SizeTier::Small, GymType::BoutiqueFitness)
        });
        assert_eq!(profile.structure, Structure::OwnerDirect);
        assert_eq!(profile.management_level, ManagementLevel::OwnerOnly);
        assert!(profile.owner_identified);
        assert_eq!(titles(&profile), vec!["Owner"]);
        assert_eq!(profile.contact_quality, ContactQuality::Good);
        assert_eq!(profile.accessibility, Accessibility::High);
        assert_eq!(profile.sales_approach.strategy, "consultative");
        assert!(profile
            .sales_approach
            .key_points
            .contains(&"Direct owner engagement"));
    }

    #[test]
    fn test_full_contact_scores_100() {
        let profile = profile_decision_makers(&DecisionMakerInputs {
            has_professional_network: true,
            ..inputs(SizeTier::Small, GymType::TraditionalGym)
        });
        assert_eq!(profile.contact_score, 100);
    }

    #[test]
    fn test_middle_accessibility() {
        let profile = profile_decision_makers(&DecisionMakerInputs {
            has_phone: false,
            ..inputs(SizeTier::Medium, GymType::TraditionalGym)
        });
        assert_eq!(profile.contact_quality, ContactQuality::Fair);
        assert_eq!(profile.accessibility, Accessibility::Medium);
    }

    #[test]
    fn test_unknown_everything() {
        let profile = profile_decision_makers(&DecisionMakerInputs {
            has_website: false,
            has_phone: false,
            ..inputs(SizeTier::Unknown, GymType::Unknown)
        });
        assert_eq!(profile.structure, Structure::Unknown);
        assert_eq!(profile.contact_quality, ContactQuality::Poor);
        assert_eq!(profile.accessibility, Accessibility::Low);
        assert_eq!(profile.sales_approach.strategy, "discovery");
    }
}
