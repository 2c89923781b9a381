use crate::config::PresetLevel;
use crate::core::LeadStatus;
use crate::io::OutputFormat;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "leadscore")]
#[command(about = "Fitness business lead scoring and classification", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a batch of gym listings and classify each lead
    Score {
        /// JSON file of listing records
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of parallel jobs (0 = one per core)
        #[arg(short = 'j', long = "jobs", default_value = "0", env = "LEADSCORE_JOBS")]
        jobs: usize,

        /// Configuration file (defaults to the nearest .leadscore.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Classification preset, overriding the config file
        #[arg(long, value_enum)]
        preset: Option<PresetLevel>,

        /// Reference date for technology age (YYYY-MM-DD, defaults to today)
        #[arg(long = "as-of", value_parser = parse_date)]
        as_of: Option<NaiveDate>,

        /// Only report leads with these statuses
        #[arg(long, value_enum, value_delimiter = ',')]
        status: Vec<StatusFilter>,

        /// Show only the N leads with the highest pain
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,

        /// Disable colors in terminal output
        #[arg(long)]
        plain: bool,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Query the built-in software capability registry
    Registry {
        /// Only products in this category (e.g. all_in_one, crossfit)
        #[arg(long)]
        category: Option<String>,

        /// Only products of this quality tier (premium, good, average, basic, outdated)
        #[arg(long)]
        quality: Option<String>,

        /// Only products last updated in or before this year
        #[arg(long = "outdated-before")]
        outdated_before: Option<i32>,

        /// Output format (json or terminal)
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Initialize a leadscore configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Check a configuration file and report every problem
    Validate {
        /// Configuration file (defaults to the nearest .leadscore.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Statuses a report can be filtered to
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    Red,
    Yellow,
    Green,
    Error,
}

impl StatusFilter {
    pub fn status(self) -> LeadStatus {
        match self {
            StatusFilter::Red => LeadStatus::Red,
            StatusFilter::Yellow => LeadStatus::Yellow,
            StatusFilter::Green => LeadStatus::Green,
            StatusFilter::Error => LeadStatus::Error,
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{}': {}", s, e))
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
