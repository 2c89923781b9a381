//! Lead scoring for fitness businesses.
//!
//! Listings from a maps feed, enriched with website performance and
//! technology fingerprints, are normalized into [`Lead`]s and run through a
//! staged pipeline: signal extraction, technology and software analysis,
//! website feature detection, digital infrastructure scoring, pain analysis,
//! size/model adjustment and RED/YELLOW/GREEN classification. Qualification,
//! budget and decision-maker enrichment follow.

pub mod classification;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod decision_maker;
pub mod features;
pub mod infrastructure;
pub mod io;
pub mod mobile_app;
pub mod observability;
pub mod pain;
pub mod pipeline;
pub mod progress;
pub mod qualification;
pub mod registry;
pub mod signals;
pub mod technology;

pub use crate::core::{Assessed, Error, Lead, LeadStatus, Result};

pub use crate::classification::{classify, Classification, ClassificationInputs, Verdict};

pub use crate::config::{LeadscoreConfig, PresetLevel};

pub use crate::io::{create_writer, normalize, parse_listings, LeadReport, OutputFormat, RawListing};

pub use crate::pipeline::{
    process_listing, score_batch, score_lead, BatchOutcome, BatchSummary, ScoringContext,
};

pub use crate::registry::{registry, CapabilityRegistry};
