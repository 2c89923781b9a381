//! CLI command implementations.
//!
//! - **score**: score and classify a batch of listings
//! - **registry**: query the software capability registry
//! - **init**: write a default `.leadscore.toml`
//! - **validate**: check a configuration file

pub mod init;
pub mod registry;
pub mod score;
pub mod validate;

pub use init::init_config;
pub use registry::{handle_registry, query_registry, RegistryQuery};
pub use score::{handle_score, ScoreConfig};
pub use validate::{check_config_file, validate_config, ConfigCheck};
