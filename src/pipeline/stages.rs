//! The per-lead stage functions.
//!
//! Each stage reads earlier stage outputs from the lead and fills in its own
//! field. A missing prerequisite or a non-finite score is a stage failure.

use super::ScoringContext;
use crate::classification::{classify, ClassificationInputs, STATUS_SOURCE};
use crate::core::{Error, Lead, Result};
use crate::decision_maker::{profile_decision_makers, DecisionMakerInputs};
use crate::features::detect_features;
use crate::infrastructure::{score_infrastructure, InfrastructureInputs};
use crate::mobile_app::analyze_mobile_app;
use crate::observability::Stage;
use crate::pain::{adjust_pain, analyze_pain, baseline_pain, AdjustmentInputs, PainInputs};
use crate::qualification::{estimate_budget, qualify, BudgetInputs, QualificationInputs};
use crate::signals::profile_lead;
use crate::technology::{analyze_software, analyze_technology_age};

pub const BASELINE_SOURCE: &str = "baseline";

fn require<'a, T>(value: Option<&'a T>, stage: Stage, what: &str) -> Result<&'a T> {
    value.ok_or_else(|| Error::stage(stage.as_str(), format!("{} is not available", what)))
}

fn ensure_finite(value: f64, stage: Stage, what: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::stage(
            stage.as_str(),
            format!("{} is not a finite number", what),
        ))
    }
}

pub fn extract_signals(lead: &mut Lead, _ctx: &ScoringContext<'_>) -> Result<()> {
    lead.profile = Some(profile_lead(lead));
    Ok(())
}

pub fn analyze_technology(lead: &mut Lead, ctx: &ScoringContext<'_>) -> Result<()> {
    let technology = analyze_technology_age(&lead.technologies, ctx.now, &ctx.technology);
    ensure_finite(
        technology.age_score,
        Stage::TechnologyAnalysis,
        "technology age score",
    )?;
    let software = analyze_software(
        ctx.registry,
        &lead.technologies,
        lead.website.as_deref(),
        &ctx.software,
    );
    log::debug!(
        "{}: technology age {:.1}, software [{}]",
        lead.name,
        technology.age_score,
        software.names().join(", ")
    );
    lead.technology = Some(technology);
    lead.software = Some(software);
    Ok(())
}

pub fn detect_website_features(lead: &mut Lead, _ctx: &ScoringContext<'_>) -> Result<()> {
    lead.features = Some(detect_features(lead.has_website(), &lead.technologies));
    Ok(())
}

pub fn analyze_app(lead: &mut Lead, _ctx: &ScoringContext<'_>) -> Result<()> {
    let software = require(lead.software.as_ref(), Stage::MobileAppAnalysis, "software")?;
    let report = analyze_mobile_app(software, lead.features.as_ref());
    lead.mobile_app = Some(report);
    Ok(())
}

pub fn score_digital_infrastructure(lead: &mut Lead, ctx: &ScoringContext<'_>) -> Result<()> {
    let stage = Stage::InfrastructureScoring;
    let inputs = InfrastructureInputs {
        features: require(lead.features.as_ref(), stage, "website features")?,
        mobile_app: require(lead.mobile_app.as_ref(), stage, "mobile app report")?,
        software: require(lead.software.as_ref(), stage, "software")?,
        technology_age_score: require(lead.technology.as_ref(), stage, "technology report")?
            .age_score,
        mobile_score: lead.mobile_score,
        software_config: &ctx.software,
    };
    let score = score_infrastructure(&inputs, &ctx.infrastructure_weights, &ctx.readiness_weights);
    ensure_finite(score.score, stage, "infrastructure score")?;
    lead.infrastructure = Some(score);
    Ok(())
}

pub fn score_baseline(lead: &mut Lead, ctx: &ScoringContext<'_>) -> Result<()> {
    let stage = Stage::BaselinePain;
    let technology = require(lead.technology.as_ref(), stage, "technology report")?;
    let software = require(lead.software.as_ref(), stage, "software")?;
    let baseline = baseline_pain(
        lead.mobile_score,
        technology,
        software.overall_quality,
        &ctx.baseline,
    );
    ensure_finite(baseline.score, stage, "baseline pain score")?;

    lead.status = baseline.status;
    lead.status_source = Some(BASELINE_SOURCE.to_string());
    lead.baseline = Some(baseline);
    Ok(())
}

pub fn analyze_pain_factors(lead: &mut Lead, ctx: &ScoringContext<'_>) -> Result<()> {
    let stage = Stage::PainAnalysis;
    let features = require(lead.features.as_ref(), stage, "website features")?;
    let app = require(lead.mobile_app.as_ref(), stage, "mobile app report")?;
    let software = require(lead.software.as_ref(), stage, "software")?;
    let inputs = PainInputs {
        flags: &features.flags,
        has_app: app.has_app,
        app_quality: app.quality_score,
        has_gym_software: software.has_gym_software(),
        infrastructure_score: require(lead.infrastructure.as_ref(), stage, "infrastructure")?
            .score,
        technology_age_score: require(lead.technology.as_ref(), stage, "technology report")?
            .age_score,
        mobile_score: lead.mobile_score,
    };
    let analysis = analyze_pain(&inputs, &ctx.pain_weights);
    ensure_finite(analysis.score, stage, "pain score")?;
    lead.pain = Some(analysis);
    Ok(())
}

pub fn adjust_for_size_and_model(lead: &mut Lead, ctx: &ScoringContext<'_>) -> Result<()> {
    let stage = Stage::SizeModelAdjustment;
    let base = require(lead.pain.as_ref(), stage, "pain analysis")?;
    let inputs = AdjustmentInputs {
        size: lead.size_tier(),
        gym_type: lead.gym_type(),
        flags: &require(lead.features.as_ref(), stage, "website features")?.flags,
        has_app: require(lead.mobile_app.as_ref(), stage, "mobile app report")?.has_app,
        mobile_score: lead.mobile_score,
        infrastructure_score: require(lead.infrastructure.as_ref(), stage, "infrastructure")?
            .score,
    };
    let adjusted = adjust_pain(base, &inputs, &ctx.adjustment);
    ensure_finite(adjusted.score, stage, "adjusted pain score")?;
    lead.adjusted_pain = Some(adjusted);
    Ok(())
}

pub fn classify_lead(lead: &mut Lead, ctx: &ScoringContext<'_>) -> Result<()> {
    let stage = Stage::Classification;
    let adjusted = require(lead.adjusted_pain.as_ref(), stage, "adjusted pain")?;
    let infrastructure = require(lead.infrastructure.as_ref(), stage, "infrastructure")?;
    let software = require(lead.software.as_ref(), stage, "software")?;
    let features = require(lead.features.as_ref(), stage, "website features")?;
    let app = require(lead.mobile_app.as_ref(), stage, "mobile app report")?;
    let prior = lead.baseline.as_ref().map(|b| b.status);

    let inputs = ClassificationInputs {
        adjusted_pain: adjusted.score,
        urgency: adjusted.urgency,
        infrastructure_score: infrastructure.score,
        infrastructure_tier: infrastructure.tier,
        mobile_score: lead.mobile_score,
        software_quality: software.overall_quality,
        has_software: software.has_gym_software(),
        threshold_violations: adjusted.threshold_violations.len(),
        feature_score: features.score,
        has_app: app.has_app,
        app_quality: app.quality_score,
        size: lead.size_tier(),
        gym_type: lead.gym_type(),
    };
    let classification = classify(&inputs, &ctx.thresholds, prior);

    lead.status = classification.status();
    let source = if classification.decided_here() {
        STATUS_SOURCE
    } else {
        BASELINE_SOURCE
    };
    lead.status_source = Some(source.to_string());
    log::debug!(
        "{}: {} ({} confidence){}",
        lead.name,
        classification.verdict.as_str(),
        classification.confidence.as_str(),
        if classification.escalated() {
            ", escalated"
        } else {
            ""
        }
    );
    lead.classification = Some(classification);
    Ok(())
}

pub fn qualify_revenue(lead: &mut Lead, _ctx: &ScoringContext<'_>) -> Result<()> {
    let profile = require(lead.profile.as_ref(), Stage::RevenueQualification, "profile")?;
    let qualification = qualify(&QualificationInputs {
        size: profile.size.tier,
        gym_type: profile.gym_type,
        price: profile.attributes.price_level,
        review_count: lead.review_count,
        rating: lead.rating,
    });
    ensure_finite(
        qualification.viability_score,
        Stage::RevenueQualification,
        "viability score",
    )?;
    lead.qualification = Some(qualification);
    Ok(())
}

pub fn estimate_software_budget(lead: &mut Lead, _ctx: &ScoringContext<'_>) -> Result<()> {
    let qualification = require(
        lead.qualification.as_ref(),
        Stage::BudgetEstimation,
        "qualification",
    )?;
    let budget = estimate_budget(&BudgetInputs {
        monthly_revenue: qualification.monthly_revenue,
        member_count: qualification.member_count,
        gym_type: lead.gym_type(),
        size: lead.size_tier(),
        software_systems: lead.software.as_ref().map_or(0, |s| s.detected.len()),
        infrastructure_score: lead.infrastructure.as_ref().map_or(0.0, |i| i.score),
        verdict: lead.classification.as_ref().map(|c| c.verdict),
        franchise_chain: lead.franchise_chain(),
    });
    lead.budget = Some(budget);
    Ok(())
}

pub fn identify_decision_makers(lead: &mut Lead, _ctx: &ScoringContext<'_>) -> Result<()> {
    require(lead.profile.as_ref(), Stage::DecisionMakers, "profile")?;
    let profile = profile_decision_makers(&DecisionMakerInputs {
        size: lead.size_tier(),
        gym_type: lead.gym_type(),
        franchise_chain: lead.franchise_chain(),
        has_website: lead.has_website(),
        has_phone: lead.has_phone(),
        has_professional_network: lead.has_professional_network,
        reviews: &lead.review_texts,
    });
    lead.decision_makers = Some(profile);
    Ok(())
}
