//! Theme preference
//!
//! The preference is tri-state (light, dark, system). The store persists it,
//! writes the resolved value onto the document root and notifies
//! subscribers. Nothing in the overlay lifecycle depends on it.

mod preference;
mod store;

pub use preference::{ResolvedTheme, ThemeParseError, ThemePreference};
pub use store::{SubscriptionId, ThemeListener, ThemePreferenceStore};
