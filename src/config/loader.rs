use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::LeadscoreConfig;
use crate::core::errors::Error;

pub const CONFIG_FILE_NAME: &str = ".leadscore.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Every problem in a parsed config, one message per invalid section
pub fn collect_config_problems(config: &LeadscoreConfig) -> Vec<String> {
    let checks: [(&str, Option<Result<(), String>>); 7] = [
        ("infrastructure", config.infrastructure.as_ref().map(|w| w.validate())),
        ("readiness", config.readiness.as_ref().map(|w| w.validate())),
        ("pain", config.pain.as_ref().map(|w| w.validate())),
        ("baseline", config.baseline.as_ref().map(|w| w.validate())),
        ("adjustment", config.adjustment.as_ref().map(|a| a.validate())),
        (
            "classification",
            config
                .classification
                .as_ref()
                .map(|_| config.classification_thresholds().validate()),
        ),
        ("technology", config.technology.as_ref().map(|t| t.validate())),
    ];

    checks
        .into_iter()
        .filter_map(|(section, result)| match result {
            Some(Err(e)) => Some(format!("[{}] {}", section, e)),
            _ => None,
        })
        .collect()
}

/// Parse config from a TOML string. Invalid sections fall back to their
/// defaults with a warning; drifted weight sets are normalized.
pub fn parse_and_validate_config(contents: &str) -> Result<LeadscoreConfig, String> {
    let mut config = toml::from_str::<LeadscoreConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Some(ref mut weights) = config.infrastructure {
        match weights.validate() {
            Ok(()) => weights.normalize(),
            Err(e) => {
                log::warn!("Invalid infrastructure weights: {}. Using defaults.", e);
                config.infrastructure = Some(Default::default());
            }
        }
    }

    if let Some(ref mut weights) = config.readiness {
        match weights.validate() {
            Ok(()) => weights.normalize(),
            Err(e) => {
                log::warn!("Invalid readiness weights: {}. Using defaults.", e);
                config.readiness = Some(Default::default());
            }
        }
    }

    if let Some(ref mut weights) = config.pain {
        match weights.validate() {
            Ok(()) => weights.normalize(),
            Err(e) => {
                log::warn!("Invalid pain weights: {}. Using defaults.", e);
                config.pain = Some(Default::default());
            }
        }
    }

    if let Some(ref mut baseline) = config.baseline {
        match baseline.validate() {
            Ok(()) => baseline.normalize(),
            Err(e) => {
                log::warn!("Invalid baseline settings: {}. Using defaults.", e);
                config.baseline = Some(Default::default());
            }
        }
    }

    if let Some(Err(e)) = config.adjustment.as_ref().map(|a| a.validate()) {
        log::warn!("Invalid adjustment settings: {}. Using defaults.", e);
        config.adjustment = Some(Default::default());
    }

    if let Some(Err(e)) = config.technology.as_ref().map(|t| t.validate()) {
        log::warn!("Invalid technology thresholds: {}. Using defaults.", e);
        config.technology = Some(Default::default());
    }

    if config.classification.is_some() {
        if let Err(e) = config.classification_thresholds().validate() {
            log::warn!("Invalid classification thresholds: {}. Using preset only.", e);
            if let Some(ref mut classification) = config.classification {
                classification.overrides = Default::default();
            }
        }
    }

    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<LeadscoreConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // A missing file is the normal case while walking up the tree
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// The directory itself followed by its parents, at most `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest `.leadscore.toml` at or above `start`
pub fn find_config_file(start: PathBuf) -> Option<PathBuf> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

/// Load an explicitly named config file. Unlike discovery, a missing or
/// unparseable file is an error here.
pub fn load_config_from_path(path: &Path) -> crate::core::Result<LeadscoreConfig> {
    let contents = read_config_file(path).map_err(|e| Error::FileSystem {
        message: format!("Cannot read config file: {}", e),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })?;
    parse_and_validate_config(&contents).map_err(Error::Configuration)
}

/// Discover config from the current directory upward, or use defaults
pub fn load_config() -> LeadscoreConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return LeadscoreConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            LeadscoreConfig::default()
        })
}
