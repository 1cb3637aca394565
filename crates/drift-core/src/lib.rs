//! Drift Core - Overlay lifecycle and theme preference logic shared by drift UIs
//!
//! Nothing in this crate depends on a GUI toolkit. Rendering layers (see
//! `drift-widgets`) feed the controller with requests and draw whatever the
//! returned snapshot says.
//!
//! - [`document`]: host document seam (`HostBackend`), the shared [`Document`]
//!   façade and the in-memory [`VirtualDocument`] backend
//! - [`lifecycle`]: the overlay lifecycle controller and its four sub-parts
//! - [`theme`]: persisted light/dark/system preference with subscribers
//! - [`config`]: YAML config loading/saving

pub mod config;
pub mod document;
pub mod lifecycle;
pub mod theme;
pub mod types;

pub use document::{Document, HostBackend, VirtualDocument};
pub use lifecycle::{
    OverlayLifecycleController, OverlayRequest, OverlaySnapshot, Phase, DEFAULT_UNMOUNT_DELAY,
};
pub use theme::{ResolvedTheme, ThemePreference, ThemePreferenceStore};
pub use types::*;
