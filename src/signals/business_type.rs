//! Business type classification.
//!
//! An ordered dispatch table: the first row with a matching keyword wins.
//! Keyword sets overlap ("gym" appears inside many listings that are
//! really something narrower), so the generic rows come last.

use super::contains_any;
use crate::core::GymType;

pub const BUSINESS_TYPE_RULES: &[(GymType, &[&str])] = &[
    (GymType::Crossfit, &["crossfit", "cross fit", "wod", "box gym"]),
    (
        GymType::MartialArts,
        &[
            "martial arts",
            "karate",
            "taekwondo",
            "jiu jitsu",
            "jiu-jitsu",
            "bjj",
            "judo",
            "kung fu",
            "mma",
            "dojo",
            "kickboxing",
            "muay thai",
        ],
    ),
    (
        GymType::DanceStudio,
        &["dance", "ballet", "salsa", "zumba", "hip hop", "ballroom"],
    ),
    (
        GymType::PersonalTraining,
        &[
            "personal training",
            "personal trainer",
            "1-on-1",
            "one-on-one",
            "private training",
        ],
    ),
    (
        GymType::RecreationCenter,
        &["recreation", "ymca", "community center", "rec center", "aquatic"],
    ),
    (
        GymType::BoutiqueFitness,
        &[
            "yoga",
            "pilates",
            "barre",
            "spin class",
            "spin studio",
            "indoor cycling",
            "boutique",
            "hiit studio",
            "orangetheory",
        ],
    ),
    (
        GymType::Specialty,
        &[
            "climbing",
            "bouldering",
            "rowing studio",
            "swim school",
            "bootcamp",
            "boot camp",
            "physical therapy",
            "rehab",
        ],
    ),
    (
        GymType::TraditionalGym,
        &[
            "gym",
            "fitness center",
            "fitness centre",
            "health club",
            "athletic club",
            "24 hour",
            "24/7",
        ],
    ),
];

/// Labels an upstream feed may already have assigned
const PRELABELLED: &[GymType] = &[
    GymType::YogaStudio,
    GymType::HealthClub,
    GymType::FitnessCenter,
    GymType::Boxing,
];

/// Classify lowercased listing text. A category label that names one of the
/// pre-labelled types exactly is taken as given.
pub fn classify_business_type(text: &str, category: Option<&str>) -> GymType {
    if let Some(label) = category {
        let labelled = GymType::from_label(label);
        if PRELABELLED.contains(&labelled) {
            return labelled;
        }
    }

    BUSINESS_TYPE_RULES
        .iter()
        .find(|(_, keywords)| contains_any(text, keywords))
        .map(|(gym_type, _)| *gym_type)
        .unwrap_or(GymType::GeneralFitness)
}
