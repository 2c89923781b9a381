//! Config discovery and loading against real files.

use indoc::indoc;
use leadscore::config::{
    find_config_file, load_config_from_path, PainWeights, PresetLevel, CONFIG_FILE_NAME,
};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_found_in_parent_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("leads/2024/june");
    fs::create_dir_all(&nested).unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();

    let found = find_config_file(nested).unwrap();
    assert_eq!(found, dir.path().join(CONFIG_FILE_NAME));
}

#[test]
fn test_nearest_config_wins() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("team");
    fs::create_dir_all(&nested).unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();
    fs::write(nested.join(CONFIG_FILE_NAME), "").unwrap();

    assert_eq!(
        find_config_file(nested.clone()),
        Some(nested.join(CONFIG_FILE_NAME))
    );
}

#[test]
fn test_loaded_config_is_repaired() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        indoc! {r#"
            # Drifted weights are normalized
            [infrastructure]
            website_features = 0.3505
            mobile_app = 0.25
            online_booking = 0.20
            member_experience = 0.20

            # Invalid weights fall back to defaults
            [pain]
            operational = 0.9
            retention = 0.9

            [classification]
            preset = "lenient"
            mobile_red = 45.0

            [software]
            reference_year = 2025
        "#},
    )
    .unwrap();

    let config = load_config_from_path(&path).unwrap();

    let infra = config.infrastructure_weights();
    let total = infra.website_features + infra.mobile_app + infra.online_booking
        + infra.member_experience;
    assert!((total - 1.0).abs() < 1e-9);
    assert!(infra.website_features > infra.mobile_app);

    assert_eq!(config.pain_weights(), PainWeights::default());
    assert_eq!(config.preset(), PresetLevel::Lenient);
    assert_eq!(config.classification_thresholds().mobile_red, 45.0);
    assert_eq!(config.classification_thresholds().pain_red, 70.0);
    assert_eq!(config.software_config().reference_year, 2025);
    assert_eq!(config.software_config().grace_years, 2);
}

#[test]
fn test_unparseable_explicit_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "[classification\npreset = 1").unwrap();

    let err = load_config_from_path(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse"));
}
