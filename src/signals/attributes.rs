//! Extended listing attributes: services, location, membership model,
//! equipment, pricing, hours, demographic, chain, tenure and staffing.

use super::presence::{digital_presence_score, software_needs_score};
use super::size::SizeEstimate;
use super::{contains_any, first_label, franchise_match, matching_labels};
use crate::core::types::title_case;
use crate::core::{GymType, Lead, SizeTier};
use serde::Serialize;

const SERVICES: &[(&str, &[&str])] = &[
    ("yoga", &["yoga"]),
    ("pilates", &["pilates"]),
    ("personal_training", &["personal training", "personal trainer"]),
    ("group_classes", &["group class", "group fitness", "classes"]),
    ("swimming", &["pool", "swim", "aquatic"]),
    ("childcare", &["childcare", "child care", "kids club", "daycare"]),
    ("nutrition", &["nutrition", "meal plan", "dietitian"]),
    ("spin", &["spin", "cycling"]),
    ("crossfit", &["crossfit"]),
    (
        "martial_arts",
        &["martial arts", "karate", "jiu jitsu", "bjj", "mma", "taekwondo", "judo"],
    ),
    ("boxing", &["boxing", "kickboxing"]),
    ("sauna", &["sauna", "steam room"]),
    ("massage", &["massage"]),
    ("physical_therapy", &["physical therapy", "physiotherapy", "rehab"]),
];

const LOCATION_TYPES: &[(&str, &[&str])] = &[
    ("shopping_center", &["mall", "shopping center", "plaza"]),
    ("downtown", &["downtown", "main st"]),
    ("industrial", &["industrial", "warehouse", "business park"]),
    ("community", &["community", "recreation", "ymca"]),
    ("hotel", &["hotel", "resort"]),
    ("corporate", &["corporate", "office park"]),
];

/// First match wins; "no contract" must be seen before "contract"
const MEMBERSHIP_MODELS: &[(&str, &[&str])] = &[
    (
        "class_based",
        &["class pack", "drop-in", "drop in", "per class", "class pass", "classpass"],
    ),
    (
        "flexible",
        &["no contract", "month-to-month", "month to month", "no commitment"],
    ),
    ("session_based", &["per session", "session", "packages"]),
    ("contract", &["contract", "annual", "commitment"]),
];

const EQUIPMENT: &[(&str, &[&str])] = &[
    ("free_weights", &["free weights", "dumbbell", "barbell"]),
    ("cardio", &["cardio", "treadmill", "elliptical"]),
    ("machines", &["machines", "nautilus", "cable"]),
    ("functional", &["functional", "kettlebell", "turf", "rig"]),
    ("pool", &["pool"]),
    ("boxing", &["heavy bag", "boxing ring"]),
    ("climbing", &["climbing wall", "bouldering"]),
];

const PRICING_INDICATORS: &[(&str, &[&str])] = &[
    (
        "premium",
        &["luxury", "premium", "upscale", "exclusive", "boutique", "equinox", "life time"],
    ),
    (
        "budget_friendly",
        &[
            "$10",
            "affordable",
            "budget",
            "low cost",
            "cheap",
            "no frills",
            "planet fitness",
            "crunch fitness",
        ],
    ),
    ("high_price", &["$$$", "high-end", "high end"]),
];

const DEMOGRAPHICS: &[(&str, &[&str])] = &[
    ("women", &["women", "ladies", "female"]),
    ("seniors", &["senior", "silver sneakers", "55+"]),
    ("kids", &["kids", "children", "youth", "teen"]),
    ("athletes", &["athlete", "performance", "sports training"]),
];

/// Price positioning used for revenue estimation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceLevel {
    Budget,
    #[default]
    Mid,
    Premium,
}

impl PriceLevel {
    /// Premium indicators win over budget ones; no indicators means mid
    pub fn from_indicators(indicators: &[String]) -> Self {
        if indicators
            .iter()
            .any(|i| i == "premium" || i == "high_price")
        {
            PriceLevel::Premium
        } else if indicators.iter().any(|i| i == "budget_friendly") {
            PriceLevel::Budget
        } else {
            PriceLevel::Mid
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceLevel::Budget => "budget",
            PriceLevel::Mid => "mid",
            PriceLevel::Premium => "premium",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingAttributes {
    pub services: Vec<String>,
    pub location_type: String,
    pub membership_model: String,
    pub equipment_types: Vec<String>,
    pub pricing_indicators: Vec<String>,
    pub price_level: PriceLevel,
    pub hours: String,
    pub target_demographic: String,
    pub franchise_chain: Option<String>,
    pub years_in_business: String,
    pub staff_size: String,
    pub digital_presence_score: f64,
    pub software_needs_score: f64,
}

fn years_in_business(review_count: u32) -> &'static str {
    match review_count {
        n if n >= 1000 => "10+",
        n if n >= 300 => "5-10",
        n if n >= 100 => "2-5",
        n if n > 0 => "0-2",
        _ => "unknown",
    }
}

fn staff_size(tier: SizeTier) -> &'static str {
    match tier {
        SizeTier::Large => "20+",
        SizeTier::Medium => "10-20",
        SizeTier::Small => "1-10",
        SizeTier::Unknown => "unknown",
    }
}

/// `text` is the lead's lowercased listing text
pub fn extract_attributes(
    lead: &Lead,
    text: &str,
    gym_type: GymType,
    size: &SizeEstimate,
) -> ListingAttributes {
    let services = matching_labels(text, SERVICES);
    let pricing_indicators = matching_labels(text, PRICING_INDICATORS);
    let hours = if contains_any(text, &["24/7", "24 hour", "24-hour", "open 24"]) {
        "24/7"
    } else {
        "standard"
    };

    ListingAttributes {
        location_type: first_label(text, LOCATION_TYPES)
            .unwrap_or("standalone")
            .to_string(),
        membership_model: first_label(text, MEMBERSHIP_MODELS)
            .unwrap_or("membership")
            .to_string(),
        equipment_types: matching_labels(text, EQUIPMENT),
        price_level: PriceLevel::from_indicators(&pricing_indicators),
        pricing_indicators,
        hours: hours.to_string(),
        target_demographic: first_label(text, DEMOGRAPHICS)
            .unwrap_or("general")
            .to_string(),
        franchise_chain: franchise_match(text).map(|(chain, _)| title_case(chain)),
        years_in_business: years_in_business(lead.review_count).to_string(),
        staff_size: staff_size(size.tier).to_string(),
        digital_presence_score: digital_presence_score(lead),
        software_needs_score: software_needs_score(gym_type, size.tier, &services),
        services,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::size::{estimate_size, SizeInputs};

    fn attributes_for(lead: &Lead) -> ListingAttributes {
        let text = lead.listing_text();
        let size = estimate_size(&SizeInputs {
            text: &text,
            review_count: lead.review_count,
            rating: lead.rating,
            gym_type: GymType::TraditionalGym,
            franchise: None,
        });
        extract_attributes(lead, &text, GymType::TraditionalGym, &size)
    }

    #[test]
    fn test_services_and_equipment() {
        let mut lead = Lead::new("Valley Athletic Club");
        lead.description = Some(
            "Pool, sauna, group fitness classes and personal training. Free weights and cardio deck."
                .into(),
        );
        let attributes = attributes_for(&lead);
        assert_eq!(
            attributes.services,
            vec!["personal_training", "group_classes", "swimming", "sauna"]
        );
        assert_eq!(attributes.equipment_types, vec!["free_weights", "cardio", "pool"]);
    }

    #[test]
    fn test_no_contract_is_flexible_not_contract() {
        let mut lead = Lead::new("Flex Gym");
        lead.description = Some("No contract memberships".into());
        assert_eq!(attributes_for(&lead).membership_model, "flexible");
    }

    #[test]
    fn test_defaults_for_bare_listing() {
        let attributes = attributes_for(&Lead::new("Summit"));
        assert_eq!(attributes.location_type, "standalone");
        assert_eq!(attributes.membership_model, "membership");
        assert_eq!(attributes.hours, "standard");
        assert_eq!(attributes.target_demographic, "general");
        assert_eq!(attributes.years_in_business, "unknown");
        assert_eq!(attributes.price_level, PriceLevel::Mid);
        assert_eq!(attributes.franchise_chain, None);
    }

    #[test]
    fn test_chain_names_are_title_cased() {
        let mut lead = Lead::new("24 Hour Fitness - Ming Ave");
        lead.review_count = 640;
        let attributes = attributes_for(&lead);
        assert_eq!(attributes.franchise_chain.as_deref(), Some("24 Hour Fitness"));
        assert_eq!(attributes.hours, "24/7");
        assert_eq!(attributes.years_in_business, "5-10");
    }

    #[test]
    fn test_price_level_from_indicators() {
        let mut lead = Lead::new("Planet Fitness");
        lead.description = Some("Affordable, no frills".into());
        let attributes = attributes_for(&lead);
        assert_eq!(attributes.pricing_indicators, vec!["budget_friendly"]);
        assert_eq!(attributes.price_level, PriceLevel::Budget);
    }
}
