use crate::cli::configure_thread_pool;
use crate::config::{
    install_config, load_config, load_config_from_path, LeadscoreConfig, PresetLevel,
};
use crate::core::{Lead, LeadStatus};
use crate::io::{self, create_writer, read_listings, LeadReport, OutputFormat};
use crate::pipeline::{headline_pain, score_batch, ScoringContext};
use crate::progress::ProgressConfig;
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub jobs: usize,
    pub config: Option<PathBuf>,
    pub preset: Option<PresetLevel>,
    pub as_of: Option<NaiveDate>,
    pub statuses: Vec<LeadStatus>,
    pub top: Option<usize>,
    pub verbosity: u8,
    pub plain: bool,
    pub quiet: bool,
}

pub fn handle_score(config: ScoreConfig) -> Result<()> {
    configure_thread_pool(config.jobs);

    let settings = resolve_config(config.config.as_ref(), config.preset)?;
    if !install_config(settings.clone()) {
        log::debug!("Configuration already initialized; using the loaded copy for scoring");
    }

    let now = reference_time(config.as_of);
    let listings = read_listings(&config.input)
        .with_context(|| format!("Failed to read listings from {}", config.input.display()))?;
    log::info!(
        "Scoring {} listing(s) from {} with the {} preset",
        listings.len(),
        config.input.display(),
        settings.preset()
    );

    let ctx = ScoringContext::from_config(&settings, now);
    let progress = ProgressConfig::from_env(config.quiet, config.verbosity);
    let outcome = score_batch(&listings, &ctx, &progress);
    outcome.summary.log();

    let leads = select_leads(outcome.leads, &config.statuses, config.top);
    let report = LeadReport::new(&leads, outcome.summary, Utc::now());

    let out: Box<dyn Write> = match &config.output {
        Some(path) => {
            io::ensure_parent_dir(path)?;
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout()),
    };

    // Files never get escape codes
    let plain = config.plain || config.output.is_some();
    if plain {
        colored::control::set_override(false);
    }
    let mut writer = create_writer(config.format, out, plain);
    writer.write_report(&report)?;

    if let Some(path) = &config.output {
        log::info!("Report written to {}", path.display());
    }
    Ok(())
}

/// An explicit `--config` must load; otherwise discover one or use defaults
pub fn resolve_config(
    path: Option<&PathBuf>,
    preset: Option<PresetLevel>,
) -> Result<LeadscoreConfig> {
    let config = match path {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("Invalid configuration {}", path.display()))?,
        None => load_config(),
    };
    Ok(match preset {
        Some(preset) => config.with_preset(preset),
        None => config,
    })
}

/// Midnight UTC of the `--as-of` date, or the current time
pub fn reference_time(as_of: Option<NaiveDate>) -> DateTime<Utc> {
    as_of
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .unwrap_or_else(Utc::now)
}

/// Apply the status filter, then keep the `top` leads by pain. Without
/// `top` the input order is kept.
pub fn select_leads(leads: Vec<Lead>, statuses: &[LeadStatus], top: Option<usize>) -> Vec<Lead> {
    let mut selected: Vec<Lead> = leads
        .into_iter()
        .filter(|lead| statuses.is_empty() || statuses.contains(&lead.status))
        .collect();

    if let Some(limit) = top {
        selected.sort_by(|a, b| {
            let pain_a = headline_pain(a).unwrap_or(f64::NEG_INFINITY);
            let pain_b = headline_pain(b).unwrap_or(f64::NEG_INFINITY);
            pain_b.total_cmp(&pain_a)
        });
        selected.truncate(limit);
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lead(name: &str, status: LeadStatus) -> Lead {
        let mut lead = Lead::new(name);
        lead.status = status;
        lead
    }

    #[test]
    fn test_status_filter_keeps_order() {
        let leads = vec![
            lead("A", LeadStatus::Red),
            lead("B", LeadStatus::Green),
            lead("C", LeadStatus::Red),
        ];
        let names: Vec<String> = select_leads(leads, &[LeadStatus::Red], None)
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let leads = vec![lead("A", LeadStatus::Red), lead("B", LeadStatus::Error)];
        assert_eq!(select_leads(leads, &[], None).len(), 2);
    }

    #[test]
    fn test_reference_time_is_midnight_utc() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1);
        assert_eq!(
            reference_time(date).to_rfc3339(),
            "2024-06-01T00:00:00+00:00"
        );
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let missing = PathBuf::from("/nonexistent/.leadscore.toml");
        assert!(resolve_config(Some(&missing), None).is_err());
    }

    #[test]
    fn test_top_orders_by_pain() {
        let ctx = ScoringContext::from_config(
            &LeadscoreConfig::default(),
            reference_time(NaiveDate::from_ymd_opt(2024, 6, 1)),
        );
        let scored: Vec<Lead> = [("Fast Gym", 95.0), ("Slow Gym", 20.0)]
            .into_iter()
            .map(|(name, mobile)| {
                let mut lead = Lead::new(name);
                lead.mobile_score = Some(mobile);
                crate::pipeline::score_lead(lead, &ctx)
            })
            .collect();

        let top = select_leads(scored, &[], Some(1));
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "Slow Gym");
    }
}
