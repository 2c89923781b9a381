//! CLI module for leadscore
//!
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod setup;

pub use args::{Cli, Commands, StatusFilter};
pub use setup::{configure_thread_pool, get_worker_count, init_logging, log_level};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
