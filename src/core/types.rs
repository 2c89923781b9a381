//! Categorical types shared by every pipeline stage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Business model of a fitness lead.
///
/// Signal extraction only ever produces the variants on its priority list;
/// the remaining labels (`yoga_studio`, `health_club`, `fitness_center`,
/// `boxing`) are accepted when an upstream feed already categorized the
/// business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum GymType {
    Crossfit,
    MartialArts,
    DanceStudio,
    PersonalTraining,
    RecreationCenter,
    BoutiqueFitness,
    YogaStudio,
    Boxing,
    Specialty,
    TraditionalGym,
    HealthClub,
    FitnessCenter,
    GeneralFitness,
    Unknown,
}

impl GymType {
    pub const ALL: [GymType; 14] = [
        GymType::Crossfit,
        GymType::MartialArts,
        GymType::DanceStudio,
        GymType::PersonalTraining,
        GymType::RecreationCenter,
        GymType::BoutiqueFitness,
        GymType::YogaStudio,
        GymType::Boxing,
        GymType::Specialty,
        GymType::TraditionalGym,
        GymType::HealthClub,
        GymType::FitnessCenter,
        GymType::GeneralFitness,
        GymType::Unknown,
    ];

    /// Snake-case label used in output records
    pub fn as_str(&self) -> &'static str {
        match self {
            GymType::Crossfit => "crossfit",
            GymType::MartialArts => "martial_arts",
            GymType::DanceStudio => "dance_studio",
            GymType::PersonalTraining => "personal_training",
            GymType::RecreationCenter => "recreation_center",
            GymType::BoutiqueFitness => "boutique_fitness",
            GymType::YogaStudio => "yoga_studio",
            GymType::Boxing => "boxing",
            GymType::Specialty => "specialty",
            GymType::TraditionalGym => "traditional_gym",
            GymType::HealthClub => "health_club",
            GymType::FitnessCenter => "fitness_center",
            GymType::GeneralFitness => "general_fitness",
            GymType::Unknown => "unknown",
        }
    }

    /// Title-cased label for summaries ("boutique_fitness" -> "Boutique Fitness")
    pub fn display_name(&self) -> String {
        title_case(&self.as_str().replace('_', " "))
    }

    /// Parse a label, falling back to `Unknown` for anything unrecognized
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .unwrap_or(GymType::Unknown)
    }
}

impl From<String> for GymType {
    fn from(label: String) -> Self {
        GymType::from_label(&label)
    }
}

impl FromStr for GymType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(GymType::from_label(s))
    }
}

impl fmt::Display for GymType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical size estimate of a facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum SizeTier {
    Small,
    Medium,
    Large,
    Unknown,
}

impl SizeTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeTier::Small => "small",
            SizeTier::Medium => "medium",
            SizeTier::Large => "large",
            SizeTier::Unknown => "unknown",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "small" => SizeTier::Small,
            "medium" => SizeTier::Medium,
            "large" => SizeTier::Large,
            _ => SizeTier::Unknown,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SizeTier::Unknown)
    }
}

impl From<String> for SizeTier {
    fn from(label: String) -> Self {
        SizeTier::from_label(&label)
    }
}

impl fmt::Display for SizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How soon a lead needs attention, derived from a 0-100 pain score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl Urgency {
    /// Shared urgency thresholds: >=70 critical, >=50 high, >=30 medium
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            Urgency::Critical
        } else if score >= 50.0 {
            Urgency::High
        } else if score >= 30.0 {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Critical => "critical",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a lead record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadStatus {
    #[default]
    Pending,
    Red,
    Yellow,
    Green,
    Error,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::Pending => "pending",
            LeadStatus::Red => "red",
            LeadStatus::Yellow => "yellow",
            LeadStatus::Green => "green",
            LeadStatus::Error => "error",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "pending" => Some(LeadStatus::Pending),
            "red" => Some(LeadStatus::Red),
            "yellow" => Some(LeadStatus::Yellow),
            "green" => Some(LeadStatus::Green),
            "error" => Some(LeadStatus::Error),
            _ => None,
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uppercase the first letter of every whitespace-separated word and
/// lowercase the rest.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Round to one decimal place for reporting
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Clamp a score into the closed [0, 100] range, mapping NaN to 0
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gym_type_labels_round_trip_through_parser() {
        for gym_type in GymType::ALL {
            assert_eq!(GymType::from_label(gym_type.as_str()), gym_type);
        }
    }

    #[test]
    fn test_gym_type_accepts_spaced_labels() {
        assert_eq!(GymType::from_label("Boutique Fitness"), GymType::BoutiqueFitness);
        assert_eq!(GymType::from_label("yoga-studio"), GymType::YogaStudio);
        assert_eq!(GymType::from_label("spin palace"), GymType::Unknown);
    }

    #[test]
    fn test_display_name_title_cases() {
        assert_eq!(GymType::BoutiqueFitness.display_name(), "Boutique Fitness");
        assert_eq!(GymType::Crossfit.display_name(), "Crossfit");
    }

    #[test]
    fn test_urgency_thresholds() {
        assert_eq!(Urgency::from_score(70.0), Urgency::Critical);
        assert_eq!(Urgency::from_score(69.9), Urgency::High);
        assert_eq!(Urgency::from_score(50.0), Urgency::High);
        assert_eq!(Urgency::from_score(30.0), Urgency::Medium);
        assert_eq!(Urgency::from_score(29.9), Urgency::Low);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("planet fitness"), "Planet Fitness");
        assert_eq!(title_case("24 hour fitness"), "24 Hour Fitness");
        assert_eq!(title_case("YMCA"), "Ymca");
    }

    #[test]
    fn test_clamp_score_handles_nan() {
        assert_eq!(clamp_score(f64::NAN), 0.0);
        assert_eq!(clamp_score(130.0), 100.0);
        assert_eq!(clamp_score(-4.0), 0.0);
    }

    #[test]
    fn test_deserialize_unknown_gym_type() {
        let parsed: GymType = serde_json::from_str("\"aqua_zumba\"").unwrap();
        assert_eq!(parsed, GymType::Unknown);
    }
}
