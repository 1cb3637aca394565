//! Application messages for drift-gallery

use std::time::Instant;

use drift_core::{Key, Position, ThemePreference};

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Animation frame while a drawer is opening or closing
    Tick(Instant),
    /// A key was released anywhere in the window
    KeyReleased(Key),

    // Drawer
    /// Open the drawer on a side (moves it if already open)
    OpenDrawer(Position),
    /// Close button inside the drawer
    CloseDrawer,
    /// Click on the backdrop outside the panel
    BackdropClicked,
    /// Keep closed drawers rendered (false) or unmount them (true)
    SetRemoveWhenClosed(bool),

    // Theme
    SetTheme(ThemePreference),
    /// Light → Dark → System
    CycleTheme,
    /// Flip what is shown between light and dark
    ToggleTheme,
}
