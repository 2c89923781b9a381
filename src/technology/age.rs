//! Technology freshness scoring.

use super::signal::TechnologySignal;
use crate::config::TechnologyConfig;
use crate::signals::contains_keyword;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Flagged regardless of when they were last seen
pub const PROBLEMATIC_TECHNOLOGIES: &[&str] = &[
    "flash",
    "silverlight",
    "activex",
    "java applet",
    "internet explorer",
    "ie6",
    "ie7",
    "ie8",
    "ie9",
    "jquery 1.",
    "php 5.",
    "python 2.",
    "angular.js",
    "angularjs",
    "backbone.js",
    "prototype.js",
];

/// Score when no technology carries a timestamp
pub const NEUTRAL_AGE_SCORE: f64 = 50.0;

const DAYS_PER_YEAR: f64 = 365.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagSeverity {
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutdatedTechnology {
    pub name: String,
    pub category: String,
    pub years_since_seen: Option<f64>,
    pub severity: FlagSeverity,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnologyReport {
    /// Mean freshness of timestamped technologies, or neutral 50
    pub age_score: f64,
    pub timestamped: usize,
    pub total: usize,
    pub outdated: Vec<OutdatedTechnology>,
    pub flags: Vec<String>,
    pub high_severity: usize,
    pub medium_severity: usize,
}

impl TechnologyReport {
    pub fn outdated_count(&self) -> usize {
        self.high_severity + self.medium_severity
    }
}

/// Freshness of one technology by years since last detection
pub fn freshness_score(age_years: f64) -> f64 {
    if age_years <= 1.0 {
        100.0
    } else if age_years <= 2.0 {
        80.0
    } else if age_years <= 3.0 {
        60.0
    } else if age_years <= 5.0 {
        30.0
    } else {
        10.0
    }
}

pub fn is_problematic(name: &str) -> bool {
    let name = name.to_lowercase();
    PROBLEMATIC_TECHNOLOGIES
        .iter()
        .any(|p| contains_keyword(&name, p))
}

fn age_in_years(last_detected: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let seconds = (now - last_detected).num_seconds().max(0) as f64;
    seconds / 86_400.0 / DAYS_PER_YEAR
}

fn classify(
    signal: &TechnologySignal,
    age: Option<f64>,
    config: &TechnologyConfig,
) -> Option<(FlagSeverity, String)> {
    if is_problematic(&signal.name) {
        return Some((
            FlagSeverity::High,
            format!("Problematic technology: {}", signal.name),
        ));
    }
    let age = age?;
    if age > config.very_outdated_years {
        Some((
            FlagSeverity::High,
            format!("Very outdated: {} (last seen {:.1} years ago)", signal.name, age),
        ))
    } else if age > config.outdated_years {
        Some((
            FlagSeverity::Medium,
            format!("Outdated: {} (last seen {:.1} years ago)", signal.name, age),
        ))
    } else {
        None
    }
}

/// Score technology freshness against an injected clock
pub fn analyze_technology_age(
    signals: &[TechnologySignal],
    now: DateTime<Utc>,
    config: &TechnologyConfig,
) -> TechnologyReport {
    let mut scores = Vec::new();
    let mut outdated = Vec::new();

    for signal in signals {
        let age = signal.last_detected.map(|at| age_in_years(at, now));
        if let Some(age) = age {
            scores.push(freshness_score(age));
        }
        if let Some((severity, reason)) = classify(signal, age, config) {
            outdated.push(OutdatedTechnology {
                name: signal.name.clone(),
                category: signal.category.clone(),
                years_since_seen: age,
                severity,
                reason,
            });
        }
    }

    let age_score = if scores.is_empty() {
        NEUTRAL_AGE_SCORE
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };

    let high_severity = outdated
        .iter()
        .filter(|o| o.severity == FlagSeverity::High)
        .count();
    let medium_severity = outdated.len() - high_severity;

    let mut flags: Vec<String> = outdated.iter().map(|o| o.reason.clone()).collect();
    if high_severity > 0 {
        flags.push(format!(
            "{} severely outdated or problematic technologies",
            high_severity
        ));
    }
    if medium_severity > 0 {
        flags.push(format!("{} outdated technologies", medium_severity));
    }

    TechnologyReport {
        age_score,
        timestamped: scores.len(),
        total: signals.len(),
        outdated,
        flags,
        high_severity,
        medium_severity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    fn seen_days_ago(name: &str, days: i64) -> TechnologySignal {
        TechnologySignal::new(name, "Widgets").last_seen(now() - Duration::days(days))
    }

    #[test]
    fn test_freshness_breakpoints() {
        assert_eq!(freshness_score(0.5), 100.0);
        assert_eq!(freshness_score(1.0), 100.0);
        assert_eq!(freshness_score(1.5), 80.0);
        assert_eq!(freshness_score(3.0), 60.0);
        assert_eq!(freshness_score(4.0), 30.0);
        assert_eq!(freshness_score(5.5), 10.0);
    }

    #[test]
    fn test_no_timestamps_is_neutral() {
        let report = analyze_technology_age(
            &[TechnologySignal::new("React", "JavaScript Frameworks")],
            now(),
            &TechnologyConfig::default(),
        );
        assert_eq!(report.age_score, NEUTRAL_AGE_SCORE);
        assert_eq!(report.timestamped, 0);
        assert!(report.flags.is_empty());
    }

    #[test]
    fn test_mean_of_timestamped_scores() {
        let report = analyze_technology_age(
            &[
                seen_days_ago("React", 30),
                seen_days_ago("Moment", 4 * 365),
                TechnologySignal::new("Mystery", "Unknown Category"),
            ],
            now(),
            &TechnologyConfig::default(),
        );
        assert_eq!(report.age_score, 65.0);
        assert_eq!(report.timestamped, 2);
        assert_eq!(report.medium_severity, 1);
        assert_eq!(report.flags[0], "Outdated: Moment (last seen 4.0 years ago)");
        assert_eq!(report.flags[1], "1 outdated technologies");
    }

    #[test]
    fn test_problematic_flagged_without_timestamp() {
        let report = analyze_technology_age(
            &[
                TechnologySignal::new("Adobe Flash", "Plugins"),
                seen_days_ago("jQuery 1.11.3", 10),
            ],
            now(),
            &TechnologyConfig::default(),
        );
        assert_eq!(report.high_severity, 2);
        assert_eq!(report.flags[0], "Problematic technology: Adobe Flash");
        assert_eq!(report.flags[1], "Problematic technology: jQuery 1.11.3");
        assert_eq!(report.flags[2], "2 severely outdated or problematic technologies");
    }

    #[test]
    fn test_very_outdated_is_high_severity() {
        let report = analyze_technology_age(
            &[seen_days_ago("Modernizr", 6 * 365)],
            now(),
            &TechnologyConfig::default(),
        );
        assert_eq!(report.age_score, 10.0);
        assert_eq!(report.outdated[0].severity, FlagSeverity::High);
        assert!(report.outdated[0].reason.starts_with("Very outdated: Modernizr"));
    }

    #[test]
    fn test_problematic_matching_is_word_anchored() {
        assert!(is_problematic("AngularJS"));
        assert!(!is_problematic("Splash Screen Builder"));
    }
}
