//! Member mobile app inference.
//!
//! Gyms rarely publish their own app; members use the white-label app of
//! the management platform. A lead has an app when a detected gym platform
//! ships one with a known app-store quality rating.

use crate::features::WebsiteFeatures;
use crate::registry::SoftwareReport;
use crate::technology::SoftwareAnalysis;
use serde::Serialize;

const APP_PLATFORMS: [&str; 2] = ["iOS", "Android"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    /// A detected platform provides the member app
    SoftwareDetection,
    /// No app, but the website works on phones
    ResponsiveWebsite,
    None,
}

impl DetectionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionMethod::SoftwareDetection => "software_detection",
            DetectionMethod::ResponsiveWebsite => "responsive_website",
            DetectionMethod::None => "none",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MobileAppReport {
    pub has_app: bool,
    pub platforms: Vec<String>,
    /// Mean app rating of the providing platforms, 0 without an app
    pub quality_score: f64,
    pub providers: Vec<String>,
    pub detection_method: DetectionMethod,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

impl MobileAppReport {
    /// No app and nothing known about the website
    pub fn absent() -> Self {
        analyze_mobile_app(&SoftwareAnalysis::default(), None)
    }
}

fn app_rating(report: &SoftwareReport) -> Option<f64> {
    if report.gym_specific && report.mobile_app {
        report.member_app_rating
    } else {
        None
    }
}

fn quality_recommendation(quality: f64, providers: &[String]) -> String {
    if quality >= 80.0 {
        format!("Excellent mobile app solution in use ({})", providers.join(", "))
    } else if quality >= 70.0 {
        "Good mobile app solution in use; promote app adoption among members".to_string()
    } else if quality >= 60.0 {
        "Adequate mobile app; review member feedback on booking and check-in flows".to_string()
    } else {
        "Member app quality is below expectations; consider a platform with a stronger app"
            .to_string()
    }
}

/// Infer the member app situation from detected software and website features
pub fn analyze_mobile_app(
    software: &SoftwareAnalysis,
    features: Option<&WebsiteFeatures>,
) -> MobileAppReport {
    let rated: Vec<(&SoftwareReport, f64)> = software
        .detected
        .iter()
        .filter_map(|r| app_rating(r).map(|rating| (r, rating)))
        .collect();

    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    if !rated.is_empty() {
        let quality = rated.iter().map(|(_, rating)| rating).sum::<f64>() / rated.len() as f64;
        let providers: Vec<String> = rated.iter().map(|(r, _)| r.name.clone()).collect();

        recommendations.push(quality_recommendation(quality, &providers));
        if quality < 60.0 {
            issues.push("Member app rated below industry expectations".to_string());
        }

        return MobileAppReport {
            has_app: true,
            platforms: APP_PLATFORMS.iter().map(|p| p.to_string()).collect(),
            quality_score: quality,
            providers,
            detection_method: DetectionMethod::SoftwareDetection,
            issues,
            recommendations,
        };
    }

    issues.push("No dedicated gym mobile app detected".to_string());
    issues.push("Members likely cannot book classes via mobile app".to_string());
    issues.push("Missing mobile-first member experience".to_string());
    recommendations.push("CRITICAL: Implement dedicated gym mobile app".to_string());

    if software.detected.iter().any(|r| r.quality_tier == "outdated") {
        issues.push("Outdated software platform with poor mobile support".to_string());
        issues.push("Mobile app likely has limited functionality".to_string());
        recommendations.push("Upgrade to modern platform for better mobile experience".to_string());
    }

    let responsive = features.is_some_and(|f| f.flags.mobile_responsive);
    let detection_method = if responsive {
        recommendations.push(
            "Mobile-responsive website detected; a dedicated app would deepen member engagement"
                .to_string(),
        );
        DetectionMethod::ResponsiveWebsite
    } else {
        issues.push("Neither mobile app nor mobile-responsive website detected".to_string());
        recommendations
            .push("URGENT: Implement mobile-responsive website as minimum requirement".to_string());
        DetectionMethod::None
    };

    MobileAppReport {
        has_app: false,
        platforms: Vec::new(),
        quality_score: 0.0,
        providers: Vec::new(),
        detection_method,
        issues,
        recommendations,
    }
}
