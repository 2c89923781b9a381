use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// The file `leadscore init` writes: every section at its default value
pub const DEFAULT_CONFIG: &str = r#"# leadscore configuration
#
# Every section is optional. Weight sets must sum to 1.0 (small drift is
# normalized); an invalid section falls back to its defaults.

# Digital infrastructure composite
[infrastructure]
website_features = 0.35
mobile_app = 0.25
online_booking = 0.20
member_experience = 0.20

# Digital readiness
[readiness]
mobile = 0.4
booking = 0.3
experience = 0.2
website = 0.1

# Pain categories
[pain]
operational = 0.25
retention = 0.30
competitive = 0.20
revenue_loss = 0.15
growth = 0.10

# Baseline pain and its coarse status cut-offs
[baseline]
mobile = 0.4
technology_age = 0.2
technology_flags = 0.1
software = 0.3
red_threshold = 40.0
yellow_threshold = 30.0
mobile_red_flag = 60.0

# Size/model adjustment: base pain keeps the larger share below the threshold
[adjustment]
blend_threshold = 30.0
high_pain_base_share = 0.8
low_pain_base_share = 0.9

# Classification preset (strict, balanced, lenient). Individual thresholds
# such as pain_red or mobile_yellow may be set here to override the preset.
[classification]
preset = "balanced"

# Software staleness
[software]
reference_year = 2024
grace_years = 2
outdated_cutoff = 2022

# Technology age flags, in years since last detection
[technology]
outdated_years = 3.0
very_outdated_years = 5.0
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }
    io::write_file(path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_and_validate_config, LeadscoreConfig, PresetLevel};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_matches_built_in_defaults() {
        let parsed = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        let defaults = LeadscoreConfig::default();
        // Weight sets may be renormalized by a rounding step
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        let infra = parsed.infrastructure_weights();
        assert!(close(infra.website_features, 0.35));
        assert!(close(infra.member_experience, 0.20));
        let readiness = parsed.readiness_weights();
        assert!(close(readiness.mobile, 0.4));
        let pain = parsed.pain_weights();
        assert!(close(pain.retention, 0.30));
        assert!(close(pain.growth, 0.10));
        let baseline = parsed.baseline_config();
        assert!(close(baseline.software, 0.3));
        assert_eq!(baseline.red_threshold, defaults.baseline_config().red_threshold);
        assert_eq!(parsed.adjustment_config(), defaults.adjustment_config());
        assert_eq!(parsed.software_config(), defaults.software_config());
        assert_eq!(parsed.technology_config(), defaults.technology_config());
        assert_eq!(
            parsed.classification_thresholds(),
            defaults.classification_thresholds()
        );
        assert_eq!(parsed.preset(), PresetLevel::Balanced);
    }

    #[test]
    fn test_existing_file_needs_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "# mine\n").unwrap();

        let err = write_default_config(&path, false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        write_default_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
