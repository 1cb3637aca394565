//! Theme mapping and shared colors

use drift_core::ResolvedTheme;
use iced::{Color, Theme};

/// Accent used for the active selection in both themes
pub const ACCENT: Color = Color::from_rgb(0.0, 0.6, 0.8);

/// Muted text for status lines
pub const MUTED_DARK: Color = Color::from_rgb(0.6, 0.6, 0.65);
pub const MUTED_LIGHT: Color = Color::from_rgb(0.4, 0.4, 0.45);

/// iced theme for a resolved drift theme
pub fn iced_theme(theme: ResolvedTheme) -> Theme {
    match theme {
        ResolvedTheme::Light => Theme::Light,
        ResolvedTheme::Dark => Theme::Dark,
    }
}

/// Muted text color readable on the given theme
pub fn muted_text(theme: ResolvedTheme) -> Color {
    match theme {
        ResolvedTheme::Light => MUTED_LIGHT,
        ResolvedTheme::Dark => MUTED_DARK,
    }
}
