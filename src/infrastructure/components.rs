//! Online booking and member experience sub-scores.

use crate::core::types::clamp_score;
use crate::features::FeatureFlags;
use crate::technology::SoftwareAnalysis;

/// Booking-capable software always scores at least this much
const BOOKING_SOFTWARE_FLOOR: f64 = 60.0;
const PREMIUM_BOOKING_BONUS: f64 = 20.0;
const NO_APP_PENALTY: f64 = 15.0;

/// Online booking maturity, 0-100
pub fn booking_score(flags: &FeatureFlags, software: &SoftwareAnalysis, has_app: bool) -> f64 {
    let booking_software: Vec<_> = software
        .detected
        .iter()
        .filter(|r| r.supports_booking)
        .collect();

    let mut score: f64 = 0.0;
    if flags.online_booking || !booking_software.is_empty() {
        score = 50.0;
        if flags.class_scheduling {
            score += 20.0;
        }
        if flags.membership_management {
            score += 15.0;
        }
        if flags.payment_processing {
            score += 15.0;
        }
    }

    if !booking_software.is_empty() {
        score = score.max(BOOKING_SOFTWARE_FLOOR);
        if booking_software
            .iter()
            .any(|r| r.gym_specific && r.quality_tier == "premium")
        {
            score += PREMIUM_BOOKING_BONUS;
        }
    }

    if !has_app {
        score -= NO_APP_PENALTY;
    }

    clamp_score(score)
}

/// Adjustment for how current the website's technology is
pub fn freshness_adjustment(technology_age_score: f64) -> f64 {
    if technology_age_score >= 80.0 {
        10.0
    } else if technology_age_score >= 60.0 {
        5.0
    } else if technology_age_score < 30.0 {
        -15.0
    } else if technology_age_score < 50.0 {
        -5.0
    } else {
        0.0
    }
}

/// Member-facing digital experience, 0-100
pub fn member_experience_score(
    flags: &FeatureFlags,
    app_quality: f64,
    technology_age_score: f64,
) -> f64 {
    let contributions = [
        (flags.mobile_responsive, 20.0),
        (flags.member_portal, 20.0),
        (flags.live_chat, 10.0),
        (flags.social_integration, 10.0),
        (flags.virtual_classes, 15.0),
        (flags.ecommerce, 10.0),
    ];
    let feature_points: f64 = contributions
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, points)| points)
        .sum();
    let app_points = (app_quality * 0.2).min(20.0);

    clamp_score(feature_points + app_points + freshness_adjustment(technology_age_score))
}
