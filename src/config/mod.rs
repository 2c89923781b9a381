pub mod presets;
mod scoring;
mod thresholds;

mod accessors;
mod core;
mod loader;

pub use scoring::{BaselineConfig, InfrastructureWeights, PainWeights, ReadinessWeights};

pub use thresholds::{
    AdjustmentConfig, ClassificationThresholds, SoftwareConfig, TechnologyConfig,
    ThresholdOverrides,
};

pub use core::{ClassificationConfig, LeadscoreConfig};

pub use loader::{
    collect_config_problems, directory_ancestors, find_config_file, load_config,
    load_config_from_path, parse_and_validate_config, CONFIG_FILE_NAME,
};

pub use accessors::*;

pub use presets::PresetLevel;
