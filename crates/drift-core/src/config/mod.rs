//! Shared configuration utilities for drift applications
//!
//! - Generic YAML config loading/saving
//! - Standard config paths
//! - Overlay defaults (`OverlayConfig`)
//!
//! # Usage
//!
//! ```ignore
//! use drift_core::config::{load_config, save_config, default_config_path, DriftConfig};
//!
//! let path = default_config_path("config.yaml");
//! let config: DriftConfig = load_config(&path);
//! save_config(&config, &path)?;
//! ```

mod io;
mod overlay;
mod paths;

pub use io::{load_config, save_config};
pub use overlay::{DriftConfig, OverlayConfig};
pub use paths::{default_config_dir, default_config_path};
