//! YAML configuration I/O
//!
//! Loading never fails: a missing or unreadable file yields `T::default()`
//! and a log line. Saving reports errors so callers can surface them.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Load configuration from a YAML file, falling back to defaults
///
/// # Example
///
/// ```ignore
/// let config: DriftConfig = load_config(Path::new("config.yaml"));
/// ```
pub fn load_config<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    log::info!("load_config: Loading from {:?}", path);

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("load_config: {:?} doesn't exist, using defaults", path);
            return T::default();
        }
        Err(e) => {
            log::warn!("load_config: Failed to read {:?}: {}, using defaults", path, e);
            return T::default();
        }
    };

    // An empty file is a valid "nothing customised yet"
    if contents.trim().is_empty() {
        return T::default();
    }

    serde_yaml::from_str::<T>(&contents).unwrap_or_else(|e| {
        log::warn!("load_config: Failed to parse {:?}: {}, using defaults", path, e);
        T::default()
    })
}

/// Save configuration to a YAML file
///
/// Creates parent directories if needed. The file is written next to its
/// destination first and renamed over it, so a crash never leaves a
/// half-written config behind.
pub fn save_config<T>(config: &T, path: &Path) -> Result<()>
where
    T: Serialize,
{
    log::info!("save_config: Saving to {:?}", path);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    let staging = path.with_extension("yaml.tmp");
    std::fs::write(&staging, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", staging))?;
    std::fs::rename(&staging, path)
        .with_context(|| format!("Failed to replace config file: {:?}", path))?;

    log::debug!("save_config: Saved {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        value: i32,
        name: String,
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        let config: TestConfig = load_config(Path::new("/nonexistent/path/config.yaml"));
        assert_eq!(config, TestConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = TestConfig {
            value: 42,
            name: "drawer".to_string(),
        };
        save_config(&config, &path).unwrap();

        let loaded: TestConfig = load_config(&path);
        assert_eq!(loaded, config);
        assert!(!path.with_extension("yaml.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "value: [not, a, number").unwrap();

        let loaded: TestConfig = load_config(&path);
        assert_eq!(loaded, TestConfig::default());
    }

    #[test]
    fn test_empty_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "\n").unwrap();

        let loaded: TestConfig = load_config(&path);
        assert_eq!(loaded, TestConfig::default());
    }
}
