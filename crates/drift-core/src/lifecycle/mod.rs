//! Overlay lifecycle
//!
//! The controller decides when an overlay is rendered, attached, animated and
//! detached, and keeps its side effects consistent with that lifecycle:
//!
//! - [`TransitionTimer`]: "present" vs "open", single delayed-unmount deadline
//! - [`ScrollLockManager`]: body scroll lock while open
//! - [`DismissalListener`]: escape key-up listener while open
//! - [`PortalHost`]: attach/detach of the shared portal node while rendered
//! - [`OverlayLifecycleController`]: composes the four
//!
//! ## Data flow
//!
//! One direction only: the caller feeds an [`OverlayRequest`] (and clock ticks),
//! the controller returns an [`OverlaySnapshot`]. Requests to close come back
//! through the `on_close` callback; the controller never flips `open` itself.
//!
//! ```ignore
//! let mut overlay = OverlayLifecycleController::new(Some(doc), DEFAULT_UNMOUNT_DELAY);
//! let snapshot = overlay.evaluate(&OverlayRequest::new(true).on_close(close), Instant::now());
//! // ...every frame while overlay.needs_tick():
//! let snapshot = overlay.tick(Instant::now());
//! ```

mod controller;
mod dismissal;
mod portal;
mod scroll_lock;
mod transition;

use std::rc::Rc;

pub use controller::{
    Aria, AriaState, OverlayLifecycleController, OverlayRequest, OverlaySnapshot, Phase,
    DEFAULT_UNMOUNT_DELAY,
};
pub use dismissal::DismissalListener;
pub use portal::{get_or_create_node, PortalHost};
pub use scroll_lock::ScrollLockManager;
pub use transition::TransitionTimer;

/// Close-request callback
pub type Callback = Rc<dyn Fn()>;
