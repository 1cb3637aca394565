//! Persisted theme preference with change notification
//!
//! Default location: ~/.config/drift/theme.yaml

use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::preference::{ResolvedTheme, ThemePreference};
use crate::config::{load_config, save_config};
use crate::document::Document;
use crate::types::{MediaQuery, THEME_ATTRIBUTE};

/// Change listener, receives the new preference and what it resolves to
pub type ThemeListener = Rc<dyn Fn(ThemePreference, ResolvedTheme)>;

/// Handle returned by [`ThemePreferenceStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// On-disk representation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct ThemeFile {
    preference: ThemePreference,
}

/// Theme preference store
///
/// Every change is persisted (best effort), written to the document root as
/// `data-theme="light|dark"` and broadcast to subscribers.
pub struct ThemePreferenceStore {
    path: Option<PathBuf>,
    document: Option<Rc<Document>>,
    preference: ThemePreference,
    listeners: Vec<(SubscriptionId, ThemeListener)>,
    next_id: u64,
}

impl std::fmt::Debug for ThemePreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemePreferenceStore")
            .field("path", &self.path)
            .field("preference", &self.preference)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl ThemePreferenceStore {
    /// Open the store persisted at `path`
    ///
    /// A missing or invalid file yields the default preference (`System`).
    pub fn open(path: &Path, document: Option<Rc<Document>>) -> Self {
        let file: ThemeFile = load_config(path);
        log::info!("ThemePreferenceStore: loaded preference '{}'", file.preference);
        let store = Self {
            path: Some(path.to_path_buf()),
            document,
            preference: file.preference,
            listeners: Vec::new(),
            next_id: 0,
        };
        store.write_attribute();
        store
    }

    /// Store that never touches the filesystem
    pub fn in_memory(preference: ThemePreference, document: Option<Rc<Document>>) -> Self {
        let store = Self {
            path: None,
            document,
            preference,
            listeners: Vec::new(),
            next_id: 0,
        };
        store.write_attribute();
        store
    }

    /// Current preference
    pub fn get(&self) -> ThemePreference {
        self.preference
    }

    /// Current preference resolved to light or dark
    ///
    /// `System` asks the document; without one it resolves to dark.
    pub fn resolved(&self) -> ResolvedTheme {
        let prefers_dark = self
            .document
            .as_ref()
            .map_or(true, |doc| doc.media_matches(MediaQuery::PrefersDarkScheme));
        self.preference.resolve(prefers_dark)
    }

    /// Change the preference
    ///
    /// Setting the current value does nothing (no write, no notification).
    pub fn set(&mut self, preference: ThemePreference) {
        if preference == self.preference {
            return;
        }
        log::info!(
            "ThemePreferenceStore: '{}' -> '{}'",
            self.preference,
            preference
        );
        self.preference = preference;
        self.persist();
        self.write_attribute();
        self.notify();
    }

    /// Two-state toggle: flip what is currently shown between light and dark
    ///
    /// From `System` this pins the opposite of what the system resolves to.
    pub fn toggle(&mut self) {
        let next = self.resolved().inverse();
        self.set(next.into());
    }

    /// Tri-state cycle: Light → Dark → System → Light
    pub fn cycle(&mut self) {
        self.set(self.preference.next());
    }

    /// Register a change listener
    pub fn subscribe(&mut self, listener: ThemeListener) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.listeners.push((id, listener));
        id
    }

    /// Remove a change listener, returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn persist(&self) {
        let Some(path) = self.path.as_ref() else {
            return;
        };
        let file = ThemeFile {
            preference: self.preference,
        };
        if let Err(e) = save_config(&file, path) {
            // Cosmetic state: keep running with the in-memory value
            log::warn!("ThemePreferenceStore: failed to persist preference: {:#}", e);
        }
    }

    fn write_attribute(&self) {
        if let Some(document) = self.document.as_ref() {
            document.set_root_attribute(THEME_ATTRIBUTE, self.resolved().name());
        }
    }

    fn notify(&self) {
        let resolved = self.resolved();
        let listeners: Vec<ThemeListener> =
            self.listeners.iter().map(|(_, l)| Rc::clone(l)).collect();
        for listener in listeners {
            listener(self.preference, resolved);
        }
    }
}
