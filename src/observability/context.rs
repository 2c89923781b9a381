//! Thread-local context tracking for crash reports.
//!
//! Records the pipeline stage and lead being processed on the current
//! thread. Leads are scored on rayon workers, so every worker keeps its own
//! context; batch progress lives in global atomic counters.
//!
//! ## Thread Safety
//!
//! - Thread-local context: Each thread has its own context (via `thread_local!`)
//! - Global progress: Atomic counters for leads processed/total
//! - Context guards use RAII for automatic cleanup on drop

use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};

static LEADS_PROCESSED: AtomicUsize = AtomicUsize::new(0);
static LEADS_TOTAL: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<PipelineContext> = const { RefCell::new(PipelineContext::new()) };
}

/// What the current thread was doing when an error occurred
#[derive(Debug, Clone, Default)]
pub struct PipelineContext {
    pub stage: Option<Stage>,
    /// Business name of the lead being scored
    pub current_lead: Option<String>,
}

impl PipelineContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stage: None,
            current_lead: None,
        }
    }
}

/// Pipeline stages, in the order a lead passes through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Reading and normalizing raw listing records
    Normalization,
    SignalExtraction,
    TechnologyAnalysis,
    FeatureDetection,
    MobileAppAnalysis,
    InfrastructureScoring,
    BaselinePain,
    PainAnalysis,
    SizeModelAdjustment,
    Classification,
    RevenueQualification,
    BudgetEstimation,
    DecisionMakers,
    /// Writing reports
    OutputGeneration,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normalization => "normalization",
            Self::SignalExtraction => "signal_extraction",
            Self::TechnologyAnalysis => "technology_analysis",
            Self::FeatureDetection => "feature_detection",
            Self::MobileAppAnalysis => "mobile_app_analysis",
            Self::InfrastructureScoring => "infrastructure_scoring",
            Self::BaselinePain => "baseline_pain",
            Self::PainAnalysis => "pain_analysis",
            Self::SizeModelAdjustment => "size_model_adjustment",
            Self::Classification => "classification",
            Self::RevenueQualification => "revenue_qualification",
            Self::BudgetEstimation => "budget_estimation",
            Self::DecisionMakers => "decision_makers",
            Self::OutputGeneration => "output_generation",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// RAII guard for restoring pipeline context on drop.
///
/// When the guard is dropped, it restores the previous context,
/// enabling nested context tracking (stage within lead).
pub struct ContextGuard {
    previous: PipelineContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

/// Set the current stage; the previous one is restored when the guard drops
#[must_use]
pub fn set_stage(stage: Stage) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().stage = Some(stage);
        ContextGuard { previous }
    })
}

/// Set the lead being scored; the previous one is restored when the guard drops
#[must_use]
pub fn set_current_lead(name: impl Into<String>) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().current_lead = Some(name.into());
        ContextGuard { previous }
    })
}

/// Set the progress counters (processed and total leads).
///
/// Thread-safe; can be called from any thread.
pub fn set_progress(processed: usize, total: usize) {
    LEADS_PROCESSED.store(processed, Ordering::Relaxed);
    LEADS_TOTAL.store(total, Ordering::Relaxed);
}

/// Increment the processed lead count.
///
/// Thread-safe; can be called from parallel iterators.
pub fn increment_processed() {
    LEADS_PROCESSED.fetch_add(1, Ordering::Relaxed);
}

/// Get the current context snapshot.
///
/// Called by the panic hook to include context in crash reports.
#[must_use]
pub fn get_current_context() -> PipelineContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Get the current progress (processed, total).
#[must_use]
pub fn get_progress() -> (usize, usize) {
    (
        LEADS_PROCESSED.load(Ordering::Relaxed),
        LEADS_TOTAL.load(Ordering::Relaxed),
    )
}

/// Reset the current thread's context to empty.
pub fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = PipelineContext::new();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_guard_restores_previous() {
        reset_context();

        let _stage1 = set_stage(Stage::SignalExtraction);
        assert_eq!(get_current_context().stage, Some(Stage::SignalExtraction));

        {
            let _stage2 = set_stage(Stage::Classification);
            assert_eq!(get_current_context().stage, Some(Stage::Classification));
        }

        assert_eq!(get_current_context().stage, Some(Stage::SignalExtraction));
    }

    #[test]
    fn test_nested_lead_and_stage() {
        reset_context();

        let _lead = set_current_lead("Iron Temple");
        let _stage = set_stage(Stage::PainAnalysis);

        let ctx = get_current_context();
        assert_eq!(ctx.stage, Some(Stage::PainAnalysis));
        assert_eq!(ctx.current_lead.as_deref(), Some("Iron Temple"));
    }

    #[test]
    fn test_lead_guard_clears_on_drop() {
        reset_context();
        {
            let _lead = set_current_lead("Temporary");
        }
        assert!(get_current_context().current_lead.is_none());
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::SizeModelAdjustment.to_string(), "size_model_adjustment");
        assert_eq!(Stage::DecisionMakers.to_string(), "decision_makers");
    }
}
