//! UI module for the drift gallery
//!
//! Built with iced. State lives in [`GalleryApp`]; views only read it.

pub mod app;
pub mod message;
mod view;

pub use app::GalleryApp;
pub use message::Message;
