//! Gym software detection and assessment.

use super::signal::TechnologySignal;
use crate::config::SoftwareConfig;
use crate::registry::{CapabilityEntry, CapabilityRegistry, SoftwareReport};
use serde::Serialize;

pub const SUGGESTED_PLATFORMS: &str = "MindBody, Zen Planner, or Glofox";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SoftwareAnalysis {
    /// Detected products in first-detection order
    pub detected: Vec<SoftwareReport>,
    /// Mean quality of detected products, 0 when none
    pub overall_quality: f64,
    pub red_flags: Vec<String>,
    pub recommendations: Vec<String>,
}

impl SoftwareAnalysis {
    pub fn is_empty(&self) -> bool {
        self.detected.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.detected.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn has_gym_software(&self) -> bool {
        self.detected.iter().any(|r| r.gym_specific)
    }

    pub fn has_outdated(&self, config: &SoftwareConfig) -> bool {
        self.detected
            .iter()
            .any(|r| is_outdated_report(r, config))
    }
}

fn is_outdated_report(report: &SoftwareReport, config: &SoftwareConfig) -> bool {
    report.quality_tier == "outdated" || report.years_since_update > config.grace_years
}

/// Products matched in the technology feed and then the URL
pub fn detect_software<'r>(
    registry: &'r CapabilityRegistry,
    signals: &[TechnologySignal],
    url: Option<&str>,
) -> Vec<&'r CapabilityEntry> {
    let texts = signals
        .iter()
        .map(TechnologySignal::search_text)
        .chain(url.map(str::to_lowercase));
    registry.detect(texts)
}

fn recommendations(reports: &[SoftwareReport], config: &SoftwareConfig) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !reports.iter().any(|r| r.gym_specific) {
        recommendations.push("No specialized gym management software detected".to_string());
        recommendations.push(format!(
            "Consider implementing a specialized platform such as {}",
            SUGGESTED_PLATFORMS
        ));
    }

    for report in reports {
        if is_outdated_report(report, config) {
            recommendations.push(format!(
                "Upgrade from {}: platform is outdated (last updated {})",
                report.name, report.last_updated
            ));
        } else if report.quality_score < 50.0 {
            recommendations.push(format!(
                "{} scores {:.0}/100; consider a more capable gym platform",
                report.name, report.quality_score
            ));
        }
    }

    recommendations
}

/// Detect and assess every registry product the business runs
pub fn analyze_software(
    registry: &CapabilityRegistry,
    signals: &[TechnologySignal],
    url: Option<&str>,
    config: &SoftwareConfig,
) -> SoftwareAnalysis {
    let detected: Vec<SoftwareReport> = detect_software(registry, signals, url)
        .into_iter()
        .map(|entry| SoftwareReport::assess(entry, config))
        .collect();

    let overall_quality = if detected.is_empty() {
        0.0
    } else {
        detected.iter().map(|r| r.quality_score).sum::<f64>() / detected.len() as f64
    };

    let red_flags = detected
        .iter()
        .flat_map(|r| r.red_flags.iter().cloned())
        .collect();

    SoftwareAnalysis {
        overall_quality,
        red_flags,
        recommendations: recommendations(&detected, config),
        detected,
    }
}
