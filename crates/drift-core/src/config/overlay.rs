//! Application configuration for drift UIs
//!
//! Default location: ~/.config/drift/config.yaml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::paths::default_config_path;
use crate::types::Position;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    /// Drawer defaults
    pub overlay: OverlayConfig,
    /// Where the theme preference is persisted
    pub theme_file: PathBuf,
    /// Answer for `(prefers-color-scheme: dark)` when the host cannot ask the OS
    pub system_prefers_dark: bool,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            overlay: OverlayConfig::default(),
            theme_file: default_config_path("theme.yaml"),
            system_prefers_dark: true,
        }
    }
}

/// Drawer configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Slide/fade duration, also the delay before a closed drawer unmounts
    pub unmount_delay_ms: u64,
    /// Side drawers open from unless the caller says otherwise
    pub default_position: Position,
    /// Unmount closed drawers (false keeps them rendered but inert)
    pub remove_when_closed: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            unmount_delay_ms: 300,
            default_position: Position::Right,
            remove_when_closed: true,
        }
    }
}

impl OverlayConfig {
    /// Unmount delay as a `Duration`
    pub fn unmount_delay(&self) -> Duration {
        Duration::from_millis(self.unmount_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DriftConfig::default();
        assert_eq!(config.overlay.unmount_delay(), Duration::from_millis(300));
        assert_eq!(config.overlay.default_position, Position::Right);
        assert!(config.overlay.remove_when_closed);
        assert!(config.theme_file.ends_with("theme.yaml"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "overlay:\n  default_position: left\n";
        let parsed: DriftConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed.overlay.default_position, Position::Left);
        assert_eq!(parsed.overlay.unmount_delay_ms, 300);
        assert!(parsed.system_prefers_dark);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = DriftConfig {
            overlay: OverlayConfig {
                unmount_delay_ms: 150,
                default_position: Position::Bottom,
                remove_when_closed: false,
            },
            theme_file: PathBuf::from("/tmp/drift-theme.yaml"),
            system_prefers_dark: false,
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: DriftConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
