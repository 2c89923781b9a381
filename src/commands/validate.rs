use crate::config::{collect_config_problems, find_config_file, LeadscoreConfig};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Outcome of checking one config file
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigCheck {
    pub path: PathBuf,
    pub problems: Vec<String>,
}

pub fn validate_config(config: Option<PathBuf>) -> Result<()> {
    let path = match config {
        Some(path) => path,
        None => {
            let current = std::env::current_dir()?;
            match find_config_file(current) {
                Some(path) => path,
                None => {
                    println!("No configuration file found; built-in defaults apply.");
                    return Ok(());
                }
            }
        }
    };

    let check = check_config_file(&path)?;
    if check.problems.is_empty() {
        println!("✓ {} is valid", check.path.display());
        return Ok(());
    }

    eprintln!("✗ {}:", check.path.display());
    for problem in &check.problems {
        eprintln!("  - {}", problem);
    }
    bail!(
        "{} problem(s) in {}",
        check.problems.len(),
        check.path.display()
    )
}

/// Parse a config file without repairing it and list its problems. A file
/// that is not valid TOML is an error rather than a problem list.
pub fn check_config_file(path: &Path) -> Result<ConfigCheck> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    let config: LeadscoreConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(ConfigCheck {
        path: path.to_path_buf(),
        problems: collect_config_problems(&config),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init::DEFAULT_CONFIG;
    use indoc::indoc;
    use tempfile::TempDir;

    fn write(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join(".leadscore.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_config_has_no_problems() {
        let dir = TempDir::new().unwrap();
        let check = check_config_file(&write(&dir, DEFAULT_CONFIG)).unwrap();
        assert!(check.problems.is_empty(), "{:?}", check.problems);
    }

    #[test]
    fn test_problems_are_reported_not_repaired() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            indoc! {r#"
                [pain]
                operational = 0.9
                retention = 0.9
                competitive = 0.0
                revenue_loss = 0.0
                growth = 0.0
            "#},
        );
        let check = check_config_file(&path).unwrap();
        assert_eq!(check.problems.len(), 1);
        assert!(check.problems[0].starts_with("[pain]"));
        assert!(validate_config(Some(path)).is_err());
    }

    #[test]
    fn test_unparseable_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "[pain\n");
        assert!(check_config_file(&path).is_err());
    }
}
