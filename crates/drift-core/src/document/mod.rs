//! Host document seam
//!
//! [`HostBackend`] is the raw DOM-like surface a host provides. [`Document`]
//! wraps one backend and adds what several overlay instances need to share
//! it safely:
//!
//! - a reference count for the body scroll lock
//! - a reference count per attached node (portal attach/detach)
//! - key-up dispatch that does not hold the backend borrow while listeners run
//!
//! Documents are shared as `Rc<Document>`; everything runs on the UI thread.
//!
//! # Usage
//!
//! ```ignore
//! use drift_core::document::{Document, VirtualDocument};
//!
//! let doc = Document::new(VirtualDocument::new());
//! let node = doc.get_or_create_element("drift-portal-root");
//! ```

mod backend;
mod virtual_doc;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

pub use backend::{HostBackend, KeyListener};
pub use virtual_doc::VirtualDocument;

use crate::types::{BodyFlag, Key, ListenerId, MediaQuery, NodeId};

/// Shared façade over a host backend
pub struct Document {
    backend: RefCell<Box<dyn HostBackend>>,
    /// Number of holders of the body scroll lock
    scroll_lock_holders: Cell<usize>,
    /// Number of holders per attached node
    node_holders: RefCell<HashMap<NodeId, usize>>,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("scroll_lock_holders", &self.scroll_lock_holders.get())
            .field("node_holders", &self.node_holders.borrow().len())
            .finish_non_exhaustive()
    }
}

impl Document {
    /// Wrap a backend into a shareable document
    pub fn new(backend: impl HostBackend + 'static) -> Rc<Self> {
        Rc::new(Self {
            backend: RefCell::new(Box::new(backend)),
            scroll_lock_holders: Cell::new(0),
            node_holders: RefCell::new(HashMap::new()),
        })
    }

    /// Run `f` with mutable access to the backend
    ///
    /// Returns `None` (and logs) if the backend is already borrowed, which
    /// only happens when a key-up listener re-enters the document while the
    /// backend is busy. Side effects are best-effort, so the caller skips them.
    fn write<R>(&self, f: impl FnOnce(&mut dyn HostBackend) -> R) -> Option<R> {
        match self.backend.try_borrow_mut() {
            Ok(mut backend) => Some(f(backend.as_mut())),
            Err(_) => {
                log::warn!("Document: backend busy, skipping side effect");
                None
            }
        }
    }

    /// Run `f` with shared access to the backend
    fn read<R>(&self, f: impl FnOnce(&dyn HostBackend) -> R) -> Option<R> {
        match self.backend.try_borrow() {
            Ok(backend) => Some(f(backend.as_ref())),
            Err(_) => {
                log::warn!("Document: backend busy, skipping query");
                None
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Elements
    // ─────────────────────────────────────────────────────────────────────

    /// Return the element tagged with `id`, creating it (detached) if absent
    ///
    /// A document never holds two elements with the same id created through
    /// this method.
    pub fn get_or_create_element(&self, id: &str) -> Option<NodeId> {
        self.write(|backend| {
            backend.element_by_id(id).unwrap_or_else(|| {
                log::debug!("get_or_create_element: creating #{}", id);
                backend.create_element(id)
            })
        })
    }

    /// Find an element by id
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.read(|backend| backend.element_by_id(id)).flatten()
    }

    /// Take a hold on a node's body attachment, appending it on the first hold
    pub fn retain_attached(&self, node: NodeId) {
        let first = {
            let mut holders = self.node_holders.borrow_mut();
            let count = holders.entry(node).or_insert(0);
            *count += 1;
            *count == 1
        };
        if first {
            self.write(|backend| {
                if !backend.is_attached(node) {
                    backend.append_to_body(node);
                }
            });
        }
    }

    /// Drop a hold on a node's body attachment, removing it on the last release
    ///
    /// Releasing a node nobody holds is a no-op.
    pub fn release_attached(&self, node: NodeId) {
        let last = {
            let mut holders = self.node_holders.borrow_mut();
            match holders.get_mut(&node) {
                Some(count) if *count > 1 => {
                    *count -= 1;
                    false
                }
                Some(_) => {
                    holders.remove(&node);
                    true
                }
                None => false,
            }
        };
        if last {
            self.write(|backend| backend.remove_from_body(node));
        }
    }

    /// Whether a node is a child of the body
    pub fn is_attached(&self, node: NodeId) -> bool {
        self.read(|backend| backend.is_attached(node)).unwrap_or(false)
    }

    /// Number of body children tagged with `id`
    pub fn attached_count(&self, id: &str) -> usize {
        self.read(|backend| backend.attached_count(id)).unwrap_or(0)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Scroll lock
    // ─────────────────────────────────────────────────────────────────────

    /// Add a scroll-lock holder; the body flag is set on the first one
    pub fn acquire_scroll_lock(&self) {
        let holders = self.scroll_lock_holders.get() + 1;
        self.scroll_lock_holders.set(holders);
        if holders == 1 {
            self.write(|backend| backend.set_body_flag(BodyFlag::ScrollLock, true));
        }
    }

    /// Remove a scroll-lock holder; the body flag is cleared with the last one
    pub fn release_scroll_lock(&self) {
        let holders = self.scroll_lock_holders.get();
        if holders == 0 {
            return;
        }
        self.scroll_lock_holders.set(holders - 1);
        if holders == 1 {
            self.write(|backend| backend.set_body_flag(BodyFlag::ScrollLock, false));
        }
    }

    /// Whether background scrolling is currently suppressed
    pub fn scroll_locked(&self) -> bool {
        self.read(|backend| backend.body_flag(BodyFlag::ScrollLock))
            .unwrap_or(false)
    }

    /// Current number of scroll-lock holders
    pub fn scroll_lock_holders(&self) -> usize {
        self.scroll_lock_holders.get()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Key-up listeners
    // ─────────────────────────────────────────────────────────────────────

    /// Register a key-up listener
    pub fn add_key_up_listener(&self, listener: KeyListener) -> Option<ListenerId> {
        self.write(|backend| backend.add_key_up_listener(listener))
    }

    /// Unregister a key-up listener
    pub fn remove_key_up_listener(&self, id: ListenerId) -> bool {
        self.write(|backend| backend.remove_key_up_listener(id))
            .unwrap_or(false)
    }

    /// Number of registered key-up listeners
    pub fn key_up_listener_count(&self) -> usize {
        self.read(|backend| backend.key_up_listeners().len())
            .unwrap_or(0)
    }

    /// Deliver a key-up event to every registered listener
    ///
    /// The listener list is snapshotted first, so listeners may add or remove
    /// listeners (or touch the document in any other way) while running.
    /// Returns the number of listeners invoked.
    pub fn dispatch_key_up(&self, key: &Key) -> usize {
        let listeners = self
            .read(|backend| backend.key_up_listeners())
            .unwrap_or_default();
        for listener in &listeners {
            listener(key);
        }
        listeners.len()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Root attributes and media
    // ─────────────────────────────────────────────────────────────────────

    /// Set an attribute on the root element
    pub fn set_root_attribute(&self, name: &str, value: &str) {
        self.write(|backend| backend.set_root_attribute(name, value));
    }

    /// Read an attribute of the root element
    pub fn root_attribute(&self, name: &str) -> Option<String> {
        self.read(|backend| backend.root_attribute(name)).flatten()
    }

    /// Evaluate a media query
    pub fn media_matches(&self, query: MediaQuery) -> bool {
        self.read(|backend| backend.media_matches(query))
            .unwrap_or(false)
    }
}
