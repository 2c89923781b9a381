//! Lead scoring pipeline.
//!
//! A lead passes through an ordered table of scoring stages, followed by
//! the enrichment stages (qualification, budget, decision makers). Stages
//! run inside `catch_unwind`: a failure or panic marks the lead `error`,
//! keeps every field produced so far and records the cause in the lead's
//! notes. The remaining scoring stages are skipped. Enrichment stages still
//! run when their own prerequisites exist. One lead never aborts a batch.
//!
//! Batches fan out over rayon; results keep input order.

pub mod stages;
pub mod summary;

pub use summary::{headline_pain, BatchSummary, TopLead};

use crate::config::{
    AdjustmentConfig, BaselineConfig, ClassificationThresholds, InfrastructureWeights,
    LeadscoreConfig, PainWeights, ReadinessWeights, SoftwareConfig, TechnologyConfig,
};
use crate::core::{Error, Lead, LeadStatus, Result};
use crate::io::input::{normalize, RawListing};
use crate::observability::{
    increment_processed, panic_message, set_current_lead, set_progress, set_stage, Stage,
};
use crate::progress::ProgressConfig;
use crate::registry::{registry, CapabilityRegistry};
use chrono::{DateTime, Utc};
use indicatif::ParallelProgressIterator;
use rayon::prelude::*;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Everything a stage reads besides the lead itself, resolved once per run
#[derive(Debug, Clone)]
pub struct ScoringContext<'a> {
    pub registry: &'a CapabilityRegistry,
    /// Clock for technology age; injected so runs are reproducible
    pub now: DateTime<Utc>,
    pub infrastructure_weights: InfrastructureWeights,
    pub readiness_weights: ReadinessWeights,
    pub pain_weights: PainWeights,
    pub baseline: BaselineConfig,
    pub adjustment: AdjustmentConfig,
    pub software: SoftwareConfig,
    pub technology: TechnologyConfig,
    pub thresholds: ClassificationThresholds,
}

impl<'a> ScoringContext<'a> {
    pub fn new(
        config: &LeadscoreConfig,
        registry: &'a CapabilityRegistry,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            registry,
            now,
            infrastructure_weights: config.infrastructure_weights(),
            readiness_weights: config.readiness_weights(),
            pain_weights: config.pain_weights(),
            baseline: config.baseline_config(),
            adjustment: config.adjustment_config(),
            software: config.software_config(),
            technology: config.technology_config(),
            thresholds: config.classification_thresholds(),
        }
    }
}

impl ScoringContext<'static> {
    /// Context over the built-in registry
    pub fn from_config(config: &LeadscoreConfig, now: DateTime<Utc>) -> Self {
        Self::new(config, registry(), now)
    }
}

type StageFn = fn(&mut Lead, &ScoringContext<'_>) -> Result<()>;

pub struct PipelineStage {
    pub stage: Stage,
    run: StageFn,
    /// Whether the stage's inputs exist; unready enrichment stages are skipped
    ready: fn(&Lead) -> bool,
}

fn always(_: &Lead) -> bool {
    true
}

fn has_profile(lead: &Lead) -> bool {
    lead.profile.is_some()
}

fn has_qualification(lead: &Lead) -> bool {
    lead.qualification.is_some()
}

const fn scoring(stage: Stage, run: StageFn) -> PipelineStage {
    PipelineStage {
        stage,
        run,
        ready: always,
    }
}

pub const SCORING_STAGES: &[PipelineStage] = &[
    scoring(Stage::SignalExtraction, stages::extract_signals),
    scoring(Stage::TechnologyAnalysis, stages::analyze_technology),
    scoring(Stage::FeatureDetection, stages::detect_website_features),
    scoring(Stage::MobileAppAnalysis, stages::analyze_app),
    scoring(
        Stage::InfrastructureScoring,
        stages::score_digital_infrastructure,
    ),
    scoring(Stage::BaselinePain, stages::score_baseline),
    scoring(Stage::PainAnalysis, stages::analyze_pain_factors),
    scoring(Stage::SizeModelAdjustment, stages::adjust_for_size_and_model),
    scoring(Stage::Classification, stages::classify_lead),
];

pub const ENRICHMENT_STAGES: &[PipelineStage] = &[
    PipelineStage {
        stage: Stage::RevenueQualification,
        run: stages::qualify_revenue,
        ready: has_profile,
    },
    PipelineStage {
        stage: Stage::BudgetEstimation,
        run: stages::estimate_software_budget,
        ready: has_qualification,
    },
    PipelineStage {
        stage: Stage::DecisionMakers,
        run: stages::identify_decision_makers,
        ready: has_profile,
    },
];

/// Run one stage, turning a panic into a stage error
fn run_stage(lead: &mut Lead, step: &PipelineStage, ctx: &ScoringContext<'_>) -> Result<()> {
    let _stage = set_stage(step.stage);
    log::debug!("{}: {}", lead.name, step.stage);

    match catch_unwind(AssertUnwindSafe(|| (step.run)(lead, ctx))) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(error @ Error::Stage { .. })) => Err(error),
        Ok(Err(other)) => Err(Error::stage(step.stage.as_str(), other.to_string())),
        Err(payload) => Err(Error::stage(
            step.stage.as_str(),
            format!("panicked: {}", panic_message(payload.as_ref())),
        )),
    }
}

fn record_failure(lead: &mut Lead, stage: Stage, error: &Error) {
    log::warn!("{}: {}", lead.name, error);
    lead.status = LeadStatus::Error;
    lead.status_source = Some(stage.as_str().to_string());
    lead.note_error(error.to_string());
}

/// Run every stage over a normalized lead
pub fn score_lead(mut lead: Lead, ctx: &ScoringContext<'_>) -> Lead {
    let _lead = set_current_lead(lead.name.clone());

    for step in SCORING_STAGES {
        if let Err(error) = run_stage(&mut lead, step, ctx) {
            record_failure(&mut lead, step.stage, &error);
            break;
        }
    }

    for step in ENRICHMENT_STAGES {
        if !(step.ready)(&lead) {
            log::debug!("{}: skipping {}", lead.name, step.stage);
            continue;
        }
        if let Err(error) = run_stage(&mut lead, step, ctx) {
            record_failure(&mut lead, step.stage, &error);
        }
    }

    log::info!(
        "Scored {}: {}{}",
        lead.name,
        lead.status,
        headline_pain(&lead)
            .map(|pain| format!(" (pain {:.1})", pain))
            .unwrap_or_default()
    );
    lead
}

/// Normalize a raw record and score it. Fails only when the record cannot
/// become a lead.
pub fn process_listing(raw: &RawListing, ctx: &ScoringContext<'_>) -> Result<Lead> {
    let (mut lead, notes) = {
        let _stage = set_stage(Stage::Normalization);
        normalize(raw)?.into_parts()
    };
    lead.extend_notes(notes);
    Ok(score_lead(lead, ctx))
}

/// Scored leads in input order, plus records that were rejected
#[derive(Debug)]
pub struct BatchOutcome {
    pub leads: Vec<Lead>,
    pub rejected: Vec<String>,
    pub summary: BatchSummary,
}

/// Score a batch in parallel on the current rayon pool
pub fn score_batch(
    listings: &[RawListing],
    ctx: &ScoringContext<'_>,
    progress: &ProgressConfig,
) -> BatchOutcome {
    set_progress(0, listings.len());
    let bar = progress.lead_bar(listings.len());

    let results: Vec<Result<Lead>> = listings
        .par_iter()
        .progress_with(bar.clone())
        .map(|raw| {
            let result = process_listing(raw, ctx);
            increment_processed();
            result
        })
        .collect();
    bar.finish_and_clear();

    let mut leads = Vec::with_capacity(results.len());
    let mut rejected = Vec::new();
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(lead) => leads.push(lead),
            Err(error) => {
                log::warn!("Skipping record {}: {}", index, error);
                rejected.push(format!("record {}: {}", index, error));
            }
        }
    }

    let summary = BatchSummary::from_leads(&leads, rejected.len());
    BatchOutcome {
        leads,
        rejected,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn context() -> ScoringContext<'static> {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        ScoringContext::from_config(&LeadscoreConfig::default(), now)
    }

    fn failing_stage(_: &mut Lead, _: &ScoringContext<'_>) -> Result<()> {
        Err(Error::Validation("bad input".into()))
    }

    fn panicking_stage(_: &mut Lead, _: &ScoringContext<'_>) -> Result<()> {
        panic!("stage blew up")
    }

    #[test]
    fn test_stage_errors_are_wrapped_with_stage_name() {
        let step = PipelineStage {
            stage: Stage::PainAnalysis,
            run: failing_stage,
            ready: always,
        };
        let mut lead = Lead::new("Iron Temple");
        let err = run_stage(&mut lead, &step, &context()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Stage pain_analysis failed: Validation error: bad input"
        );
    }

    #[test]
    fn test_stage_panics_become_errors() {
        let step = PipelineStage {
            stage: Stage::Classification,
            run: panicking_stage,
            ready: always,
        };
        let mut lead = Lead::new("Iron Temple");
        let err = run_stage(&mut lead, &step, &context()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Stage classification failed: panicked: stage blew up"
        );
    }

    #[test]
    fn test_missing_prerequisite_fails_stage() {
        let mut lead = Lead::new("Iron Temple");
        let err = stages::classify_lead(&mut lead, &context()).unwrap_err();
        assert!(matches!(err, Error::Stage { .. }));
        assert!(err.to_string().contains("adjusted pain is not available"));
    }

    #[test]
    fn test_record_failure_marks_lead() {
        let mut lead = Lead::new("Iron Temple");
        lead.status = LeadStatus::Yellow;
        record_failure(
            &mut lead,
            Stage::BudgetEstimation,
            &Error::stage("budget_estimation", "boom"),
        );
        assert_eq!(lead.status, LeadStatus::Error);
        assert_eq!(lead.status_source.as_deref(), Some("budget_estimation"));
        assert_eq!(
            lead.error_notes,
            vec!["Stage budget_estimation failed: boom".to_string()]
        );
    }

    #[test]
    fn test_minimal_lead_runs_every_stage() {
        let lead = score_lead(Lead::new("Corner Gym"), &context());
        assert!(!lead.is_error(), "notes: {:?}", lead.error_notes);
        assert!(lead.classification.is_some());
        assert!(lead.qualification.is_some());
        assert!(lead.budget.is_some());
        assert!(lead.decision_makers.is_some());
    }

    #[test]
    fn test_stage_tables_follow_pipeline_order() {
        let order: Vec<Stage> = SCORING_STAGES
            .iter()
            .chain(ENRICHMENT_STAGES)
            .map(|s| s.stage)
            .collect();
        assert_eq!(order.first(), Some(&Stage::SignalExtraction));
        assert_eq!(order[8], Stage::Classification);
        assert_eq!(order.last(), Some(&Stage::DecisionMakers));
    }
}
