//! Drawer visual constants

use drift_core::ResolvedTheme;
use iced::Color;

/// Panel and backdrop styling for a drawer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerStyle {
    /// Panel width (left/right) or height (top/bottom) when fully shown
    pub size: f32,
    /// Inner padding of the panel
    pub padding: f32,
    /// Backdrop opacity when fully shown
    pub backdrop_alpha: f32,
    /// Panel background
    pub background: Color,
    /// Panel edge color
    pub border: Color,
}

impl DrawerStyle {
    /// Style matching a resolved theme
    pub fn for_theme(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Dark => Self {
                background: Color::from_rgba(0.1, 0.1, 0.15, 0.97),
                border: Color::from_rgb(0.3, 0.3, 0.4),
                ..Self::default()
            },
            ResolvedTheme::Light => Self {
                background: Color::from_rgb(0.97, 0.97, 0.98),
                border: Color::from_rgb(0.8, 0.8, 0.85),
                backdrop_alpha: 0.35,
                ..Self::default()
            },
        }
    }
}

impl Default for DrawerStyle {
    fn default() -> Self {
        Self {
            size: 320.0,
            padding: 16.0,
            backdrop_alpha: 0.6,
            background: Color::from_rgba(0.1, 0.1, 0.15, 0.97),
            border: Color::from_rgb(0.3, 0.3, 0.4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_backdrop_is_lighter() {
        let light = DrawerStyle::for_theme(ResolvedTheme::Light);
        let dark = DrawerStyle::for_theme(ResolvedTheme::Dark);
        assert!(light.backdrop_alpha < dark.backdrop_alpha);
        assert_eq!(light.size, dark.size);
    }
}
