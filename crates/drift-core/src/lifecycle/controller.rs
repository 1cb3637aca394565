//! Overlay lifecycle controller
//!
//! ## Phases
//!
//! ```text
//!                 open=true                        visibility reaches 1
//! ClosedUnmounted ─────────► Opening ─────────────────────────────► Open
//!  ▲  (or ClosedRetained)      ▲  │ open=false                       │ open=false
//!  │                           │  ▼                                  ▼
//!  └──── unmount delay ────── Closing ◄──────────────────────────────┘
//!        elapsed                 open=true goes back to Opening
//! ```
//!
//! With `remove_when_closed = false` the closed phase is `ClosedRetained`:
//! still rendered, but inert.

use std::rc::Rc;
use std::time::{Duration, Instant};

use super::{Callback, DismissalListener, PortalHost, ScrollLockManager, TransitionTimer};
use crate::document::Document;
use crate::types::{NodeId, Position, PORTAL_ROOT_ID};

/// Default unmount delay (matches the slide/fade duration)
pub const DEFAULT_UNMOUNT_DELAY: Duration = Duration::from_millis(300);

/// Caller input, supplied anew on every evaluation
#[derive(Clone)]
pub struct OverlayRequest {
    pub open: bool,
    pub remove_when_closed: bool,
    pub position: Position,
    pub on_close: Option<Callback>,
}

impl OverlayRequest {
    /// Request with defaults (`remove_when_closed`, right side, no callback)
    pub fn new(open: bool) -> Self {
        Self {
            open,
            ..Self::default()
        }
    }

    pub fn remove_when_closed(mut self, remove: bool) -> Self {
        self.remove_when_closed = remove;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn on_close(mut self, on_close: Callback) -> Self {
        self.on_close = Some(on_close);
        self
    }
}

impl Default for OverlayRequest {
    fn default() -> Self {
        Self {
            open: false,
            remove_when_closed: true,
            position: Position::default(),
            on_close: None,
        }
    }
}

impl std::fmt::Debug for OverlayRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayRequest")
            .field("open", &self.open)
            .field("remove_when_closed", &self.remove_when_closed)
            .field("position", &self.position)
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

/// Lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing rendered, no side effects
    #[default]
    ClosedUnmounted,
    /// Open requested, animating in
    Opening,
    /// Fully shown
    Open,
    /// Close requested, animating out, still rendered
    Closing,
    /// Closed but kept rendered (inert) because `remove_when_closed` is false
    ClosedRetained,
}

/// Open/closed semantic flag exposed to assistive technology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaState {
    Open,
    Closed,
}

/// Accessibility markings of the overlay surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aria {
    pub state: AriaState,
    /// `role="dialog"`
    pub role_dialog: bool,
    /// `aria-modal="true"`
    pub modal: bool,
}

/// Read-only result of an evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySnapshot {
    pub phase: Phase,
    pub open: bool,
    /// Whether the content must be rendered at all
    pub rendered: bool,
    /// Rendered content must not take pointer input nor be reachable
    pub inert: bool,
    pub is_transitioning: bool,
    pub position: Position,
    /// Animation progress, 0.0 hidden to 1.0 shown
    pub visibility: f32,
    pub aria: Aria,
    /// Portal node while attached
    pub portal_node: Option<NodeId>,
}

impl OverlaySnapshot {
    fn unmounted(position: Position) -> Self {
        Self {
            phase: Phase::ClosedUnmounted,
            open: false,
            rendered: false,
            inert: true,
            is_transitioning: false,
            position,
            visibility: 0.0,
            aria: Aria {
                state: AriaState::Closed,
                role_dialog: false,
                modal: false,
            },
            portal_node: None,
        }
    }
}

/// Orchestrates one overlay instance
pub struct OverlayLifecycleController {
    timer: TransitionTimer,
    scroll_lock: ScrollLockManager,
    dismissal: DismissalListener,
    portal: PortalHost,

    open: bool,
    remove_when_closed: bool,
    position: Position,
    on_close: Option<Callback>,

    /// Visibility when the current animation started
    anim_from: f32,
    /// Start of the current animation (None before the first open)
    anim_started: Option<Instant>,

    destroyed: bool,
    snapshot: OverlaySnapshot,
}

impl std::fmt::Debug for OverlayLifecycleController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayLifecycleController")
            .field("snapshot", &self.snapshot)
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}

impl OverlayLifecycleController {
    /// Create a controller bound to `document`
    ///
    /// With `None` (no renderable environment) the controller still computes
    /// phases and snapshots but every side effect is skipped.
    pub fn new(document: Option<Rc<Document>>, unmount_delay: Duration) -> Self {
        if document.is_none() {
            log::debug!("OverlayLifecycleController: no document, side effects disabled");
        }
        Self {
            timer: TransitionTimer::new(unmount_delay),
            scroll_lock: ScrollLockManager::new(document.clone()),
            dismissal: DismissalListener::new(document.clone()),
            portal: PortalHost::new(document, PORTAL_ROOT_ID),
            open: false,
            remove_when_closed: true,
            position: Position::default(),
            on_close: None,
            anim_from: 0.0,
            anim_started: None,
            destroyed: false,
            snapshot: OverlaySnapshot::unmounted(Position::default()),
        }
    }

    /// Apply a request
    ///
    /// Scroll lock, dismissal listener and portal attachment are updated
    /// before this returns.
    pub fn evaluate(&mut self, request: &OverlayRequest, now: Instant) -> OverlaySnapshot {
        if self.destroyed {
            log::debug!("OverlayLifecycleController: evaluate after destroy ignored");
            return self.snapshot.clone();
        }

        if request.open != self.open {
            // Reverse from wherever the running animation currently is
            self.anim_from = self.visibility_at(now);
            self.anim_started = Some(now);
            log::debug!(
                "OverlayLifecycleController: open {} -> {} ({})",
                self.open,
                request.open,
                request.position
            );
        }

        self.open = request.open;
        self.remove_when_closed = request.remove_when_closed;
        self.position = request.position;
        self.on_close = request.on_close.clone();

        self.timer.poll(now);
        self.timer.evaluate(self.open, now);
        self.scroll_lock.apply(self.open);
        if self.open {
            self.dismissal.arm(self.on_close.clone());
        } else {
            self.dismissal.disarm();
        }

        self.refresh(now)
    }

    /// Advance the clock; fires the delayed unmount once it is due
    pub fn tick(&mut self, now: Instant) -> OverlaySnapshot {
        if self.destroyed {
            return self.snapshot.clone();
        }
        if self.timer.poll(now) {
            log::debug!("OverlayLifecycleController: transition finished");
        }
        self.refresh(now)
    }

    /// Backdrop click: forwards to `on_close` while open
    ///
    /// Returns true if the callback was invoked. Inert overlays ignore it.
    pub fn backdrop_clicked(&self) -> bool {
        if self.destroyed || !self.open {
            return false;
        }
        match self.on_close.clone() {
            Some(on_close) => {
                on_close();
                true
            }
            None => false,
        }
    }

    /// Latest snapshot
    pub fn snapshot(&self) -> &OverlaySnapshot {
        &self.snapshot
    }

    /// Whether the host should keep calling [`tick`](Self::tick)
    pub fn needs_tick(&self) -> bool {
        matches!(self.snapshot.phase, Phase::Opening | Phase::Closing)
    }

    /// Next instant at which the snapshot changes without new input
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.destroyed {
            return None;
        }
        if let Some(deadline) = self.timer.deadline() {
            return Some(deadline);
        }
        match (self.snapshot.phase, self.anim_started) {
            (Phase::Opening, Some(started)) => {
                let remaining = f64::from((1.0 - self.anim_from).clamp(0.0, 1.0));
                let nanos = self.timer.unmount_delay().as_nanos() as f64 * remaining;
                Some(started + Duration::from_nanos(nanos.round() as u64))
            }
            _ => None,
        }
    }

    /// Tear down: detach the portal, release the scroll lock, disarm the
    /// listener and cancel the timer, whatever `open` currently is
    ///
    /// Runs once; later calls (and `Drop`) are no-ops.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;

        self.portal.detach();
        self.scroll_lock.release();
        self.dismissal.disarm();
        self.timer.cancel();
        self.on_close = None;

        self.snapshot = OverlaySnapshot::unmounted(self.position);
        log::debug!("OverlayLifecycleController: destroyed");
    }

    /// Whether [`destroy`](Self::destroy) has run
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn visibility_at(&self, now: Instant) -> f32 {
        let Some(started) = self.anim_started else {
            return if self.open { 1.0 } else { 0.0 };
        };
        let delay = self.timer.unmount_delay();
        let step = if delay.is_zero() {
            1.0
        } else {
            now.saturating_duration_since(started).as_secs_f32() / delay.as_secs_f32()
        };
        if self.open {
            (self.anim_from + step).min(1.0)
        } else {
            (self.anim_from - step).max(0.0)
        }
    }

    fn refresh(&mut self, now: Instant) -> OverlaySnapshot {
        let is_transitioning = self.timer.is_transitioning();
        let rendered = is_transitioning || !self.remove_when_closed || self.open;

        // The portal node is attached exactly while something is rendered
        if rendered {
            self.portal.attach();
        } else {
            self.portal.detach();
        }

        let visibility = self.visibility_at(now);
        let phase = if self.open {
            if visibility >= 1.0 {
                Phase::Open
            } else {
                Phase::Opening
            }
        } else if is_transitioning {
            Phase::Closing
        } else if self.remove_when_closed {
            Phase::ClosedUnmounted
        } else {
            Phase::ClosedRetained
        };

        self.snapshot = OverlaySnapshot {
            phase,
            open: self.open,
            rendered,
            inert: !self.open,
            is_transitioning,
            position: self.position,
            visibility,
            aria: Aria {
                state: if self.open {
                    AriaState::Open
                } else {
                    AriaState::Closed
                },
                role_dialog: self.open,
                modal: self.open,
            },
            portal_node: if self.portal.is_attached() {
                self.portal.node()
            } else {
                None
            },
        };
        self.snapshot.clone()
    }
}

impl Drop for OverlayLifecycleController {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::VirtualDocument;
    use crate::types::Key;
    use std::cell::Cell;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    struct Fixture {
        doc: Rc<Document>,
        controller: OverlayLifecycleController,
        closes: Rc<Cell<u32>>,
        on_close: Callback,
        t0: Instant,
    }

    impl Fixture {
        fn new() -> Self {
            let doc = Document::new(VirtualDocument::new());
            let controller =
                OverlayLifecycleController::new(Some(Rc::clone(&doc)), DEFAULT_UNMOUNT_DELAY);
            let closes = Rc::new(Cell::new(0));
            let counter = Rc::clone(&closes);
            Self {
                doc,
                controller,
                closes,
                on_close: Rc::new(move || counter.set(counter.get() + 1)),
                t0: Instant::now(),
            }
        }

        fn request(&self, open: bool) -> OverlayRequest {
            OverlayRequest::new(open).on_close(Rc::clone(&self.on_close))
        }

        fn set_open(&mut self, open: bool, at_ms: u64) -> OverlaySnapshot {
            let request = self.request(open);
            self.controller.evaluate(&request, self.t0 + ms(at_ms))
        }

        fn tick(&mut self, at_ms: u64) -> OverlaySnapshot {
            self.controller.tick(self.t0 + ms(at_ms))
        }

        fn portal_count(&self) -> usize {
            self.doc.attached_count(PORTAL_ROOT_ID)
        }
    }

    #[test]
    fn test_open_close_scenario() {
        let mut f = Fixture::new();

        let snap = f.set_open(false, 0);
        assert_eq!(snap.phase, Phase::ClosedUnmounted);
        assert!(!snap.rendered);
        assert_eq!(f.portal_count(), 0);

        let snap = f.set_open(true, 0);
        assert_eq!(snap.phase, Phase::Opening);
        assert!(snap.rendered && snap.is_transitioning);
        assert!(f.doc.scroll_locked());
        assert_eq!(f.doc.key_up_listener_count(), 1);
        assert_eq!(f.portal_count(), 1);
        assert!(snap.portal_node.is_some());

        let snap = f.tick(400);
        assert_eq!(snap.phase, Phase::Open);
        assert_eq!(snap.visibility, 1.0);

        let snap = f.set_open(false, 1000);
        assert_eq!(snap.phase, Phase::Closing);
        assert!(!f.doc.scroll_locked());
        assert_eq!(f.doc.key_up_listener_count(), 0);
        assert!(snap.rendered);

        let snap = f.tick(1299);
        assert!(snap.rendered);
        assert_eq!(f.portal_count(), 1);

        let snap = f.tick(1301);
        assert!(!snap.rendered);
        assert_eq!(snap.phase, Phase::ClosedUnmounted);
        assert_eq!(f.portal_count(), 0);
        assert!(snap.portal_node.is_none());
    }

    #[test]
    fn test_reopen_during_close_never_unmounts() {
        let mut f = Fixture::new();
        f.set_open(true, 0);
        f.set_open(false, 500);

        let snap = f.set_open(true, 650);
        assert!(snap.is_transitioning);
        assert_eq!(snap.phase, Phase::Opening);

        for at in [700, 800, 900, 1000, 2000] {
            let snap = f.tick(at);
            assert!(snap.rendered, "unmounted at {at}ms");
            assert!(snap.is_transitioning);
        }
        assert_eq!(f.portal_count(), 1);
    }

    #[test]
    fn test_retained_when_not_removed() {
        let mut f = Fixture::new();
        let request = f.request(false).remove_when_closed(false);
        let snap = f.controller.evaluate(&request, f.t0);
        assert_eq!(snap.phase, Phase::ClosedRetained);
        assert!(snap.rendered);
        assert!(snap.inert);
        assert_eq!(snap.aria.state, AriaState::Closed);
        assert!(!snap.aria.role_dialog);

        let request = f.request(true).remove_when_closed(false);
        f.controller.evaluate(&request, f.t0 + ms(10));
        let request = f.request(false).remove_when_closed(false);
        f.controller.evaluate(&request, f.t0 + ms(500));

        let snap = f.tick(60_000);
        assert_eq!(snap.phase, Phase::ClosedRetained);
        assert!(snap.rendered && snap.inert);
        assert_eq!(f.portal_count(), 1);
    }

    #[test]
    fn test_aria_when_open() {
        let mut f = Fixture::new();
        let snap = f.set_open(true, 0);
        assert_eq!(snap.aria.state, AriaState::Open);
        assert!(snap.aria.role_dialog);
        assert!(snap.aria.modal);
        assert!(!snap.inert);
    }

    #[test]
    fn test_escape_only_while_open() {
        let mut f = Fixture::new();
        f.doc.dispatch_key_up(&Key::Escape);
        assert_eq!(f.closes.get(), 0);

        f.set_open(true, 0);
        f.doc.dispatch_key_up(&Key::Escape);
        assert_eq!(f.closes.get(), 1);

        // The controller does not close itself
        assert!(f.controller.snapshot().open);

        f.set_open(false, 100);
        f.doc.dispatch_key_up(&Key::Escape);
        assert_eq!(f.closes.get(), 1);
    }

    #[test]
    fn test_backdrop_click() {
        let mut f = Fixture::new();
        assert!(!f.controller.backdrop_clicked());

        f.set_open(true, 0);
        assert!(f.controller.backdrop_clicked());
        assert_eq!(f.closes.get(), 1);

        f.set_open(false, 100);
        assert!(!f.controller.backdrop_clicked());
        assert_eq!(f.closes.get(), 1);
    }

    #[test]
    fn test_destroy_while_open_releases_everything() {
        let mut f = Fixture::new();
        f.set_open(true, 0);

        f.controller.destroy();
        assert!(!f.doc.scroll_locked());
        assert_eq!(f.doc.key_up_listener_count(), 0);
        assert_eq!(f.portal_count(), 0);
        assert!(f.controller.next_deadline().is_none());

        // Second destroy and late input are no-ops
        f.controller.destroy();
        let snap = f.set_open(true, 50);
        assert!(!snap.rendered);
        assert!(!f.doc.scroll_locked());
        assert_eq!(f.portal_count(), 0);
    }

    #[test]
    fn test_destroy_while_closing_cancels_timer() {
        let mut f = Fixture::new();
        f.set_open(true, 0);
        f.set_open(false, 100);
        assert!(f.controller.next_deadline().is_some());

        f.controller.destroy();
        assert!(f.controller.next_deadline().is_none());
        assert!(!f.controller.needs_tick());
        let snap = f.tick(10_000);
        assert_eq!(snap.phase, Phase::ClosedUnmounted);
    }

    #[test]
    fn test_drop_tears_down() {
        let doc = Document::new(VirtualDocument::new());
        {
            let mut controller =
                OverlayLifecycleController::new(Some(Rc::clone(&doc)), DEFAULT_UNMOUNT_DELAY);
            controller.evaluate(&OverlayRequest::new(true), Instant::now());
            assert!(doc.scroll_locked());
        }
        assert!(!doc.scroll_locked());
        assert_eq!(doc.key_up_listener_count(), 0);
        assert_eq!(doc.attached_count(PORTAL_ROOT_ID), 0);
    }

    #[test]
    fn test_without_document() {
        let mut controller = OverlayLifecycleController::new(None, DEFAULT_UNMOUNT_DELAY);
        let t0 = Instant::now();
        let snap = controller.evaluate(&OverlayRequest::new(true), t0);
        assert!(snap.rendered);
        assert!(snap.portal_node.is_none());

        controller.evaluate(&OverlayRequest::new(false), t0 + ms(10));
        let snap = controller.tick(t0 + ms(400));
        assert!(!snap.rendered);
        controller.destroy();
    }

    #[test]
    fn test_two_controllers_share_one_portal_node() {
        let doc = Document::new(VirtualDocument::new());
        let t0 = Instant::now();
        let mut a = OverlayLifecycleController::new(Some(Rc::clone(&doc)), DEFAULT_UNMOUNT_DELAY);
        let mut b = OverlayLifecycleController::new(Some(Rc::clone(&doc)), DEFAULT_UNMOUNT_DELAY);

        a.evaluate(&OverlayRequest::new(true), t0);
        b.evaluate(&OverlayRequest::new(true), t0 + ms(5));
        assert_eq!(doc.attached_count(PORTAL_ROOT_ID), 1);
        assert_eq!(a.snapshot().portal_node, b.snapshot().portal_node);

        a.destroy();
        assert_eq!(doc.attached_count(PORTAL_ROOT_ID), 1);
        assert!(doc.scroll_locked());

        let mut c = OverlayLifecycleController::new(Some(Rc::clone(&doc)), DEFAULT_UNMOUNT_DELAY);
        c.evaluate(&OverlayRequest::new(true), t0 + ms(10));
        assert_eq!(doc.attached_count(PORTAL_ROOT_ID), 1);

        b.destroy();
        c.destroy();
        assert_eq!(doc.attached_count(PORTAL_ROOT_ID), 0);
        assert!(!doc.scroll_locked());
    }

    #[test]
    fn test_visibility_reverses_midway() {
        let mut f = Fixture::new();
        f.set_open(true, 0);
        let snap = f.tick(150);
        assert!((snap.visibility - 0.5).abs() < 0.01);

        let snap = f.set_open(false, 150);
        assert!((snap.visibility - 0.5).abs() < 0.01);
        let snap = f.tick(225);
        assert!((snap.visibility - 0.25).abs() < 0.01);
    }

    #[test]
    fn test_next_deadline_and_needs_tick() {
        let mut f = Fixture::new();
        assert!(!f.controller.needs_tick());

        f.set_open(true, 0);
        assert!(f.controller.needs_tick());
        assert_eq!(f.controller.next_deadline(), Some(f.t0 + ms(300)));

        f.tick(300);
        assert!(!f.controller.needs_tick());
        assert!(f.controller.next_deadline().is_none());

        f.set_open(false, 1000);
        assert_eq!(f.controller.next_deadline(), Some(f.t0 + ms(1300)));
    }

    #[test]
    fn test_side_effects_follow_every_toggle_sequence() {
        // All 2^8 open/closed sequences, 50ms apart
        for bits in 0u32..256 {
            let mut f = Fixture::new();
            let mut at = 0;
            for step in 0..8 {
                let open = bits & (1 << step) != 0;
                f.set_open(open, at);

                assert_eq!(f.doc.key_up_listener_count(), usize::from(open));
                assert_eq!(f.doc.scroll_locked(), open);
                assert!(f.portal_count() <= 1);
                at += 50;
            }
            f.controller.destroy();
            assert_eq!(f.doc.key_up_listener_count(), 0);
            assert!(!f.doc.scroll_locked());
            assert_eq!(f.portal_count(), 0);
        }
    }
}
