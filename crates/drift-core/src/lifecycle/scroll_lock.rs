//! Background scroll lock tied to overlay openness

use std::rc::Rc;

use crate::document::Document;

/// One hold on the document scroll lock, released on drop
#[derive(Debug)]
struct ScrollLockGuard {
    document: Rc<Document>,
}

impl ScrollLockGuard {
    fn acquire(document: &Rc<Document>) -> Self {
        document.acquire_scroll_lock();
        Self {
            document: Rc::clone(document),
        }
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.document.release_scroll_lock();
    }
}

/// Holds the scroll lock while the overlay is open
///
/// Without a document every call is a no-op.
#[derive(Debug)]
pub struct ScrollLockManager {
    document: Option<Rc<Document>>,
    guard: Option<ScrollLockGuard>,
}

impl ScrollLockManager {
    pub fn new(document: Option<Rc<Document>>) -> Self {
        Self {
            document,
            guard: None,
        }
    }

    /// Hold the lock when `open`, release it otherwise
    pub fn apply(&mut self, open: bool) {
        if open {
            if self.guard.is_none() {
                self.guard = self.document.as_ref().map(ScrollLockGuard::acquire);
            }
        } else {
            self.guard = None;
        }
    }

    /// Release unconditionally (teardown path)
    pub fn release(&mut self) {
        self.guard = None;
    }

    /// Whether this manager currently holds the lock
    pub fn is_held(&self) -> bool {
        self.guard.is_some()
    }
}
