//! Subscriptions that feed the overlay controller
//!
//! ```ignore
//! fn subscription(&self) -> Subscription<Message> {
//!     Subscription::batch([
//!         drift_widgets::tick(self.controller.needs_tick()).map(Message::Tick),
//!         drift_widgets::key_released().map(Message::KeyReleased),
//!     ])
//! }
//! ```

use std::time::{Duration, Instant};

use iced::keyboard::{self, key::Named};
use iced::{event, time, Event, Subscription};

use drift_core::Key;

/// Frame interval while an overlay is animating (~60 fps)
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Animation clock, only running while `active`
///
/// Pass `controller.needs_tick()` so idle overlays cost nothing.
pub fn tick(active: bool) -> Subscription<Instant> {
    if active {
        time::every(TICK_INTERVAL)
    } else {
        Subscription::none()
    }
}

/// Every key release in the window, translated for the document
///
/// Captured events are forwarded too: a key-up listener on a document sees
/// releases regardless of which element had focus.
pub fn key_released() -> Subscription<Key> {
    event::listen_with(|event, _status, _window| match event {
        Event::Keyboard(keyboard::Event::KeyReleased { key, .. }) => {
            log::trace!("key_released: {:?}", key);
            Some(convert_key(&key))
        }
        _ => None,
    })
}

/// Translate an iced key into the document's key vocabulary
pub fn convert_key(key: &keyboard::Key) -> Key {
    match key {
        keyboard::Key::Named(Named::Escape) => Key::Escape,
        keyboard::Key::Named(Named::Enter) => Key::Enter,
        keyboard::Key::Named(Named::Tab) => Key::Tab,
        keyboard::Key::Character(c) => Key::Character(c.to_string()),
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_named_keys() {
        assert_eq!(convert_key(&keyboard::Key::Named(Named::Escape)), Key::Escape);
        assert_eq!(convert_key(&keyboard::Key::Named(Named::Enter)), Key::Enter);
        assert_eq!(convert_key(&keyboard::Key::Named(Named::Tab)), Key::Tab);
        assert_eq!(convert_key(&keyboard::Key::Named(Named::F5)), Key::Other);
        assert_eq!(convert_key(&keyboard::Key::Unidentified), Key::Other);
    }

    #[test]
    fn test_convert_character() {
        let key = keyboard::Key::Character("q".into());
        assert_eq!(convert_key(&key), Key::Character("q".to_string()));
    }
}
