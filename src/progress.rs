//! Progress feedback for batch scoring.
//!
//! A single `indicatif` bar tracks leads as rayon workers finish them.
//! Bars are hidden in quiet mode (`--quiet` or `LEADSCORE_QUIET`) and when
//! stderr is not a terminal, so piped output and CI logs stay clean.

use indicatif::{ProgressBar, ProgressStyle};

pub const TEMPLATE_LEAD_SCORING: &str =
    "🏋️  {msg} {pos}/{len} leads ({percent}%) - {per_sec} - {eta}";

/// Configuration for progress display behavior
#[derive(Debug, Clone, Default)]
pub struct ProgressConfig {
    /// Whether to suppress all progress output
    pub quiet_mode: bool,
    /// Verbosity level (0 = basic, 1 = detailed, 2 = very detailed)
    pub verbosity: u8,
}

impl ProgressConfig {
    /// Create progress configuration from environment and CLI arguments
    pub fn from_env(quiet: bool, verbosity: u8) -> Self {
        let env_quiet = std::env::var("LEADSCORE_QUIET").is_ok();
        Self {
            quiet_mode: quiet || env_quiet,
            verbosity,
        }
    }

    /// Progress bars need a terminal on stderr and no quiet flag
    pub fn should_show_progress(&self) -> bool {
        if self.quiet_mode {
            return false;
        }

        use std::io::IsTerminal;
        std::io::stderr().is_terminal()
    }

    /// Create the lead-scoring bar, hidden when progress should not be shown
    pub fn lead_bar(&self, total: usize) -> ProgressBar {
        if !self.should_show_progress() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE_LEAD_SCORING) {
            pb.set_style(style.progress_chars("█▓▒░  "));
        }
        pb.set_message("Scoring");
        pb
    }
}
