//! Observability infrastructure for crash reports and debugging.
//!
//! ## Features
//!
//! - **Panic Hook**: Produces structured crash reports with context
//! - **Context Tracking**: Thread-local pipeline stage and lead tracking
//! - **Progress Tracking**: Atomic counters for overall batch progress
//!
//! ## Usage
//!
//! ```ignore
//! use leadscore::observability::{set_current_lead, set_stage, Stage};
//!
//! let _lead = set_current_lead(&lead.name);
//! let _stage = set_stage(Stage::PainAnalysis);
//! // A panic here reports the lead and stage
//! ```

pub mod context;
pub mod panic_hook;

pub use context::{
    get_current_context, get_progress, increment_processed, reset_context, set_current_lead,
    set_progress, set_stage, ContextGuard, PipelineContext, Stage,
};
pub use panic_hook::{install_panic_hook, panic_message};
