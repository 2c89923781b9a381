//! Property-based tests for the scoring pipeline
//!
//! These tests verify invariants that should hold for all inputs:
//! - Every score stays within 0..=100
//! - Implementing a website feature never raises pain or lowers infrastructure
//! - Classification is deterministic
//! - A prior status is only ever escalated
//! - Size/model adjustment moves pain in the direction of its multipliers

use chrono::{TimeZone, Utc};
use leadscore::classification::{classify, ClassificationInputs, Verdict};
use leadscore::config::{
    AdjustmentConfig, ClassificationThresholds, InfrastructureWeights, LeadscoreConfig,
    PainWeights, ReadinessWeights, SoftwareConfig,
};
use leadscore::core::{GymType, LeadStatus, SizeTier, Urgency};
use leadscore::features::{FeatureFlags, WebsiteFeature, WebsiteFeatures};
use leadscore::infrastructure::{score_infrastructure, InfrastructureInputs, InfrastructureTier};
use leadscore::io::parse_listings;
use leadscore::mobile_app::MobileAppReport;
use leadscore::pain::{
    adjust_pain, analyze_pain, model_multiplier, size_multiplier, AdjustmentInputs, PainAnalysis,
    PainInputs,
};
use leadscore::pipeline::{process_listing, ScoringContext};
use leadscore::technology::SoftwareAnalysis;
use proptest::prelude::*;
use serde_json::json;

const TECHNOLOGY_POOL: &[(&str, &str)] = &[
    ("MindBody Online", "Fitness Management"),
    ("Zen Planner", "Fitness Management"),
    ("Calendly", "Scheduling"),
    ("Stripe", "Payment Processing"),
    ("Bootstrap", "CSS Framework"),
    ("WordPress", "CMS"),
    ("jQuery", "JavaScript libraries"),
    ("Adobe Flash", "Multimedia"),
    ("Zoom", "Video"),
    ("Intercom", "Live Chat"),
    ("Shopify", "Ecommerce"),
    ("Instagram Feed", "Widgets"),
];

const DETECTION_DATES: &[&str] = &["2024-05-01", "2023-01-15", "2021-06-01", "2017-03-01"];

fn flags_strategy() -> impl Strategy<Value = FeatureFlags> {
    any::<[bool; 10]>().prop_map(|bits| {
        let mut flags = FeatureFlags::default();
        for (feature, on) in WebsiteFeature::ALL.into_iter().zip(bits) {
            flags.set(feature, on);
        }
        flags
    })
}

fn size_strategy() -> impl Strategy<Value = SizeTier> {
    prop_oneof![
        Just(SizeTier::Small),
        Just(SizeTier::Medium),
        Just(SizeTier::Large),
        Just(SizeTier::Unknown),
    ]
}

fn gym_type_strategy() -> impl Strategy<Value = GymType> {
    proptest::sample::select(GymType::ALL.to_vec())
}

fn prior_strategy() -> impl Strategy<Value = Option<LeadStatus>> {
    prop_oneof![
        Just(None),
        Just(Some(LeadStatus::Red)),
        Just(Some(LeadStatus::Yellow)),
        Just(Some(LeadStatus::Green)),
    ]
}

fn classification_inputs() -> impl Strategy<Value = ClassificationInputs> {
    (
        (
            0.0..=100.0f64,
            0.0..=100.0f64,
            proptest::option::of(0.0..=100.0f64),
            0.0..=100.0f64,
            any::<bool>(),
            0usize..6,
        ),
        (
            0.0..=100.0f64,
            any::<bool>(),
            0.0..=100.0f64,
            size_strategy(),
            gym_type_strategy(),
        ),
    )
        .prop_map(
            |(
                (pain, infrastructure, mobile, software, has_software, violations),
                (features, has_app, app_quality, size, gym_type),
            )| ClassificationInputs {
                adjusted_pain: pain,
                urgency: Urgency::from_score(pain),
                infrastructure_score: infrastructure,
                infrastructure_tier: InfrastructureTier::from_score(infrastructure),
                mobile_score: mobile,
                software_quality: if has_software { software } else { 0.0 },
                has_software,
                threshold_violations: violations,
                feature_score: features,
                has_app,
                app_quality: if has_app { app_quality } else { 0.0 },
                size,
                gym_type,
            },
        )
}

fn listing_strategy() -> impl Strategy<Value = serde_json::Value> {
    (
        proptest::option::of(0.0..=100.0f64),
        0u32..5000,
        proptest::option::of(0.0..=5.0f64),
        any::<bool>(),
        proptest::collection::vec(
            (
                0..TECHNOLOGY_POOL.len(),
                proptest::sample::select(DETECTION_DATES.to_vec()),
            ),
            0..6,
        ),
        proptest::sample::select(vec![
            "Iron Works Gym",
            "CrossFit Delano",
            "Planet Fitness",
            "Flow Yoga Studio",
            "Tiger Martial Arts Academy",
            "Elite Personal Training",
        ]),
    )
        .prop_map(|(mobile, reviews, rating, has_website, techs, name)| {
            let technologies: Vec<serde_json::Value> = techs
                .into_iter()
                .map(|(index, date)| {
                    let (tech, category) = TECHNOLOGY_POOL[index];
                    json!({"name": tech, "category": category, "last_detected": date})
                })
                .collect();
            json!({
                "title": name,
                "website": if has_website { Some("https://gym.example.com") } else { None },
                "mobile_score": mobile,
                "reviews": reviews,
                "rating": rating,
                "technologies": technologies,
            })
        })
}

fn context() -> ScoringContext<'static> {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    ScoringContext::from_config(&LeadscoreConfig::default(), now)
}

fn infrastructure_score_for(flags: FeatureFlags, mobile: Option<f64>, age: f64) -> f64 {
    let config = SoftwareConfig::default();
    let features = WebsiteFeatures::from_flags(flags);
    let software = SoftwareAnalysis::default();
    let app = MobileAppReport::absent();
    score_infrastructure(
        &InfrastructureInputs {
            features: &features,
            mobile_app: &app,
            software: &software,
            technology_age_score: age,
            mobile_score: mobile,
            software_config: &config,
        },
        &InfrastructureWeights::default(),
        &ReadinessWeights::default(),
    )
    .score
}

proptest! {
    /// Property: every score a scored lead carries is within 0..=100
    #[test]
    fn prop_scores_are_bounded(listing in listing_strategy()) {
        let listings = parse_listings(&json!([listing]).to_string()).unwrap();
        let lead = process_listing(&listings[0], &context()).unwrap();
        prop_assert!(!lead.is_error(), "notes: {:?}", lead.error_notes);

        let scores = [
            lead.pain.as_ref().map(|p| p.score),
            lead.adjusted_pain.as_ref().map(|p| p.score),
            lead.baseline.as_ref().map(|b| b.score),
            lead.infrastructure.as_ref().map(|i| i.score),
            lead.features.as_ref().map(|f| f.score),
            lead.technology.as_ref().map(|t| t.age_score),
            lead.software.as_ref().map(|s| s.overall_quality),
            lead.qualification.as_ref().map(|q| q.viability_score),
        ];
        for score in scores {
            let score = score.expect("every stage ran");
            prop_assert!((0.0..=100.0).contains(&score), "score {} out of range", score);
        }
    }

    /// Property: implementing one more feature never raises the pain score
    /// and never lowers the infrastructure score
    #[test]
    fn prop_feature_flags_are_monotonic(
        flags in flags_strategy(),
        feature in proptest::sample::select(WebsiteFeature::ALL.to_vec()),
        mobile in proptest::option::of(0.0..=100.0f64),
        age in 0.0..=100.0f64,
        has_app in any::<bool>(),
    ) {
        let more = flags.with(feature);

        let infra_before = infrastructure_score_for(flags, mobile, age);
        let infra_after = infrastructure_score_for(more, mobile, age);
        prop_assert!(infra_after >= infra_before);

        let pain_of = |flags: &FeatureFlags| {
            analyze_pain(
                &PainInputs {
                    flags,
                    has_app,
                    app_quality: 50.0,
                    has_gym_software: false,
                    infrastructure_score: 40.0,
                    technology_age_score: age,
                    mobile_score: mobile,
                },
                &PainWeights::default(),
            )
            .score
        };
        prop_assert!(pain_of(&more) <= pain_of(&flags));
    }

    /// Property: classifying the same snapshot twice gives the same result
    #[test]
    fn prop_classification_is_deterministic(
        inputs in classification_inputs(),
        prior in prior_strategy(),
    ) {
        let thresholds = ClassificationThresholds::default();
        let first = classify(&inputs, &thresholds, prior);
        let second = classify(&inputs, &thresholds, prior);
        prop_assert_eq!(first, second);
    }

    /// Property: RED priors stay RED and YELLOW priors never become GREEN
    #[test]
    fn prop_prior_status_is_only_escalated(
        inputs in classification_inputs(),
        prior in prior_strategy(),
    ) {
        let result = classify(&inputs, &ClassificationThresholds::default(), prior);
        match prior {
            Some(LeadStatus::Red) => prop_assert_eq!(result.verdict, Verdict::Red),
            Some(LeadStatus::Yellow) => prop_assert_ne!(result.verdict, Verdict::Green),
            _ => prop_assert_eq!(result.verdict, result.computed),
        }
    }

    /// Property: amplifying multipliers never lower pain; shrinking ones
    /// never raise it
    #[test]
    fn prop_adjustment_follows_multipliers(
        base in 0.0..=100.0f64,
        size in size_strategy(),
        gym_type in gym_type_strategy(),
        flags in flags_strategy(),
        has_app in any::<bool>(),
        mobile in proptest::option::of(0.0..=100.0f64),
        infrastructure in 0.0..=100.0f64,
    ) {
        let adjusted = adjust_pain(
            &PainAnalysis::from_score(base),
            &AdjustmentInputs {
                size,
                gym_type,
                flags: &flags,
                has_app,
                mobile_score: mobile,
                infrastructure_score: infrastructure,
            },
            &AdjustmentConfig::default(),
        );

        let size_mult = size_multiplier(size);
        let model_mult = model_multiplier(gym_type);
        prop_assert!((0.0..=100.0).contains(&adjusted.score));
        if size_mult * model_mult >= 1.0 {
            prop_assert!(adjusted.score >= base);
        }
        if size_mult < 1.0 && model_mult < 1.0 {
            prop_assert!(adjusted.score <= base);
        }
    }
}
