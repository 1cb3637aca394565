//! Gallery application state and update loop
//!
//! The gallery owns one document, one drawer controller and the theme store.
//! Every message that can change the drawer ends in [`GalleryApp::evaluate`],
//! which hands a fresh request to the controller; close requests coming back
//! through `on_close` are collected in a flag and applied right after.

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

use iced::{Element, Subscription, Task, Theme};

use drift_core::config::{save_config, DriftConfig};
use drift_core::{
    Document, MediaQuery, OverlayLifecycleController, OverlayRequest, Position, ResolvedTheme,
    ThemePreference, ThemePreferenceStore, VirtualDocument,
};

use super::message::Message;
use super::view;

/// Main application state
pub struct GalleryApp {
    pub(crate) document: Rc<Document>,
    pub(crate) controller: OverlayLifecycleController,
    pub(crate) store: ThemePreferenceStore,
    pub(crate) config: DriftConfig,
    config_path: PathBuf,

    /// What the page currently asks for
    pub(crate) drawer_open: bool,
    pub(crate) position: Position,

    /// Set by the controller's `on_close`, consumed by the update loop
    close_requested: Rc<Cell<bool>>,
    /// Last message worth showing in the status bar
    pub(crate) status: String,
}

impl GalleryApp {
    /// Build the app from loaded configuration
    ///
    /// `open_at` opens a drawer on that side right away (`--open <side>`).
    pub fn new(config: DriftConfig, config_path: PathBuf, open_at: Option<Position>) -> Self {
        let document = Document::new(
            VirtualDocument::new()
                .with_media(MediaQuery::PrefersDarkScheme, config.system_prefers_dark),
        );

        let controller = OverlayLifecycleController::new(
            Some(Rc::clone(&document)),
            config.overlay.unmount_delay(),
        );

        let mut store = ThemePreferenceStore::open(&config.theme_file, Some(Rc::clone(&document)));
        store.subscribe(Rc::new(|preference: ThemePreference, resolved: ResolvedTheme| {
            log::info!("theme: now '{}' (showing {})", preference, resolved);
        }));

        let mut app = Self {
            document,
            controller,
            store,
            position: open_at.unwrap_or(config.overlay.default_position),
            config,
            config_path,
            drawer_open: open_at.is_some(),
            close_requested: Rc::new(Cell::new(false)),
            status: String::new(),
        };
        app.evaluate(Instant::now());
        app
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => {
                self.controller.tick(now);
            }
            Message::KeyReleased(key) => {
                let delivered = self.document.dispatch_key_up(&key);
                log::trace!("update: {:?} delivered to {} listener(s)", key, delivered);
                self.apply_close_request();
            }
            Message::OpenDrawer(position) => {
                self.position = position;
                self.drawer_open = true;
                self.status = format!("Opened {} drawer", position);
                self.evaluate(Instant::now());
            }
            Message::CloseDrawer => {
                self.close("Closed from drawer");
            }
            Message::BackdropClicked => {
                if self.controller.backdrop_clicked() {
                    self.apply_close_request();
                }
            }
            Message::SetRemoveWhenClosed(remove) => {
                self.config.overlay.remove_when_closed = remove;
                self.save_settings();
                self.evaluate(Instant::now());
            }
            Message::SetTheme(preference) => self.store.set(preference),
            Message::CycleTheme => self.store.cycle(),
            Message::ToggleTheme => self.store.toggle(),
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            drift_widgets::tick(self.controller.needs_tick()).map(Message::Tick),
            drift_widgets::key_released().map(Message::KeyReleased),
        ])
    }

    pub fn theme(&self) -> Theme {
        drift_widgets::iced_theme(self.store.resolved())
    }

    /// Hand the current request to the controller
    fn evaluate(&mut self, now: Instant) {
        let flag = Rc::clone(&self.close_requested);
        let request = OverlayRequest::new(self.drawer_open)
            .remove_when_closed(self.config.overlay.remove_when_closed)
            .position(self.position)
            .on_close(Rc::new(move || flag.set(true)));
        self.controller.evaluate(&request, now);
    }

    /// Close the drawer if `on_close` fired since the last check
    fn apply_close_request(&mut self) {
        if self.close_requested.replace(false) {
            self.close("Dismissed");
        }
    }

    fn close(&mut self, reason: &str) {
        if !self.drawer_open {
            return;
        }
        self.drawer_open = false;
        self.status = reason.to_string();
        self.evaluate(Instant::now());
    }

    fn save_settings(&mut self) {
        match save_config(&self.config, &self.config_path) {
            Ok(()) => self.status = "Settings saved".to_string(),
            Err(e) => {
                log::error!("save_settings: {:#}", e);
                self.status = format!("Failed to save settings: {}", e);
            }
        }
    }
}
