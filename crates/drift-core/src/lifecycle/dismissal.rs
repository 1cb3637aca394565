//! Escape-key dismissal listener

use std::cell::RefCell;
use std::rc::Rc;

use super::Callback;
use crate::document::Document;
use crate::types::{Key, ListenerId};

/// A registered key-up listener, unregistered on drop
#[derive(Debug)]
struct DismissalBinding {
    document: Rc<Document>,
    id: ListenerId,
}

impl Drop for DismissalBinding {
    fn drop(&mut self) {
        self.document.remove_key_up_listener(self.id);
    }
}

/// Binds an escape key-up listener while the overlay is open
///
/// At most one binding exists per listener. The dismissal callback lives in a
/// slot the bound closure reads on every key-up, so re-arming with a new
/// callback swaps it in place instead of binding twice.
pub struct DismissalListener {
    document: Option<Rc<Document>>,
    on_dismiss: Rc<RefCell<Option<Callback>>>,
    binding: Option<DismissalBinding>,
}

impl std::fmt::Debug for DismissalListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DismissalListener")
            .field("binding", &self.binding)
            .finish_non_exhaustive()
    }
}

impl DismissalListener {
    pub fn new(document: Option<Rc<Document>>) -> Self {
        Self {
            document,
            on_dismiss: Rc::new(RefCell::new(None)),
            binding: None,
        }
    }

    /// Start listening for escape; a no-op binding-wise if already armed
    pub fn arm(&mut self, on_dismiss: Option<Callback>) {
        *self.on_dismiss.borrow_mut() = on_dismiss;

        if self.binding.is_some() {
            return;
        }
        let Some(document) = self.document.as_ref() else {
            return;
        };

        let slot = Rc::clone(&self.on_dismiss);
        let listener = Rc::new(move |key: &Key| {
            if *key != Key::Escape {
                return;
            }
            // Clone out of the slot so the callback may re-arm or disarm
            let callback = slot.borrow().clone();
            if let Some(callback) = callback {
                callback();
            }
        });

        if let Some(id) = document.add_key_up_listener(listener) {
            log::debug!("DismissalListener: armed ({:?})", id);
            self.binding = Some(DismissalBinding {
                document: Rc::clone(document),
                id,
            });
        }
    }

    /// Stop listening; safe to call repeatedly
    pub fn disarm(&mut self) {
        if let Some(binding) = self.binding.take() {
            log::debug!("DismissalListener: disarmed ({:?})", binding.id);
        }
        *self.on_dismiss.borrow_mut() = None;
    }

    /// Whether a listener is currently bound
    pub fn is_armed(&self) -> bool {
        self.binding.is_some()
    }
}
