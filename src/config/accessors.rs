use std::sync::OnceLock;

use super::core::LeadscoreConfig;
use super::loader::load_config;
use super::presets::PresetLevel;
use super::thresholds::ClassificationThresholds;

/// Cache the configuration
static CONFIG: OnceLock<LeadscoreConfig> = OnceLock::new();

/// Get the cached configuration, discovering `.leadscore.toml` on first use
pub fn get_config() -> &'static LeadscoreConfig {
    CONFIG.get_or_init(load_config)
}

/// Install an explicitly loaded configuration before anything reads it.
/// Returns false when the configuration was already initialized.
pub fn install_config(config: LeadscoreConfig) -> bool {
    CONFIG.set(config).is_ok()
}

/// Get the active classification preset (default: balanced)
pub fn get_preset() -> PresetLevel {
    get_config().preset()
}

/// Get the classification thresholds after preset and overrides
pub fn get_classification_thresholds() -> ClassificationThresholds {
    get_config().classification_thresholds()
}

/// Get the software staleness reference year (default: 2024)
pub fn get_reference_year() -> i32 {
    get_config().software_config().reference_year
}
