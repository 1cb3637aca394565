//! Shared iced widgets for drift applications
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State** lives in `drift-core` (`OverlayLifecycleController`,
//!   `ThemePreferenceStore`); this crate never mutates it
//! - **View functions** take a snapshot plus messages and return `Element`
//! - **Subscriptions** turn clock ticks and key releases into messages the
//!   application forwards to the core
//!
//! ## View Functions
//!
//! - `drawer::view`: backdrop + sliding panel for one overlay snapshot
//! - `drawer::with_drawer`: stacks a drawer layer over the page, shielding the
//!   page from scrolling while the document is scroll-locked

pub mod drawer;
pub mod subscription;
pub mod theme;

pub use drawer::{with_drawer, DrawerStyle};
pub use subscription::{convert_key, key_released, tick};
pub use theme::{iced_theme, muted_text};
