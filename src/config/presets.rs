//! Classification presets.
//!
//! - **Strict**: flags more leads RED, for aggressive prospecting
//! - **Balanced**: the default cut-offs
//! - **Lenient**: only clear-cut gaps turn a lead RED

use super::thresholds::ClassificationThresholds;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PresetLevel {
    Strict,
    #[default]
    Balanced,
    Lenient,
}

impl PresetLevel {
    pub fn thresholds(self) -> ClassificationThresholds {
        match self {
            PresetLevel::Strict => ClassificationThresholds {
                pain_red: 50.0,
                pain_yellow: 30.0,
                mobile_red: 60.0,
                mobile_yellow: 80.0,
                software_red: 50.0,
                software_yellow: 70.0,
                features_red: 40.0,
                features_yellow: 60.0,
                violations_red: 2,
                violations_yellow: 1,
            },
            PresetLevel::Balanced => ClassificationThresholds::default(),
            PresetLevel::Lenient => ClassificationThresholds {
                pain_red: 70.0,
                pain_yellow: 50.0,
                mobile_red: 40.0,
                mobile_yellow: 60.0,
                software_red: 30.0,
                software_yellow: 50.0,
                features_red: 20.0,
                features_yellow: 40.0,
                violations_red: 4,
                violations_yellow: 2,
            },
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Some(PresetLevel::Strict),
            "balanced" => Some(PresetLevel::Balanced),
            "lenient" | "permissive" => Some(PresetLevel::Lenient),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PresetLevel::Strict => "strict",
            PresetLevel::Balanced => "balanced",
            PresetLevel::Lenient => "lenient",
        }
    }
}

impl std::fmt::Display for PresetLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PresetLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetLevel::parse(s).ok_or_else(|| {
            format!(
                "Invalid preset level: '{}'. Valid options: strict, balanced, lenient",
                s
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_is_internally_ordered() {
        for preset in [PresetLevel::Strict, PresetLevel::Balanced, PresetLevel::Lenient] {
            assert!(preset.thresholds().validate().is_ok(), "{}", preset);
        }
    }

    #[test]
    fn test_strict_is_stricter_than_lenient() {
        let strict = PresetLevel::Strict.thresholds();
        let lenient = PresetLevel::Lenient.thresholds();
        assert!(strict.pain_red < lenient.pain_red);
        assert!(strict.mobile_red > lenient.mobile_red);
    }

    #[test]
    fn test_parse_accepts_permissive_alias() {
        assert_eq!(PresetLevel::parse("Permissive"), Some(PresetLevel::Lenient));
        assert!("extreme".parse::<PresetLevel>().is_err());
    }
}
