//! Path utilities for drift configuration files

use std::path::PathBuf;

/// Get the drift configuration directory
///
/// Returns: `~/.config/drift` (platform config dir), falling back to the home
/// directory and finally the working directory.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("drift")
}

/// Get the default config file path for a given file name
///
/// # Arguments
/// * `filename` - Config file name (e.g., "config.yaml", "theme.yaml")
///
/// Returns: `~/.config/drift/{filename}`
pub fn default_config_path(filename: &str) -> PathBuf {
    default_config_dir().join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_ends_with_drift() {
        assert!(default_config_dir().ends_with("drift"));
    }

    #[test]
    fn test_config_path_includes_filename() {
        let path = default_config_path("test.yaml");
        assert!(path.ends_with("test.yaml"));
        assert!(path.parent().unwrap().ends_with("drift"));
    }
}
