//! Host document backend trait
//!
//! The minimal set of DOM-like operations the lifecycle controller and the
//! theme store need from whatever is hosting them.

use std::rc::Rc;

use crate::types::{BodyFlag, Key, ListenerId, MediaQuery, NodeId};

/// Callback registered for key-up events
pub type KeyListener = Rc<dyn Fn(&Key)>;

/// Raw host document operations
///
/// Implementations only store state; reference counting, idempotence and
/// listener dispatch live in [`super::Document`]. Every method must be cheap
/// and must never call back into listeners.
pub trait HostBackend {
    /// Create a detached element tagged with `id`
    fn create_element(&mut self, id: &str) -> NodeId;

    /// Find an element owned by this document (attached or not) by its id
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// Append a node as the last child of the body
    ///
    /// Returns false if the node is unknown or already attached.
    fn append_to_body(&mut self, node: NodeId) -> bool;

    /// Remove a node from the body
    ///
    /// Returns false if the node was not attached.
    fn remove_from_body(&mut self, node: NodeId) -> bool;

    /// Whether a node is currently a child of the body
    fn is_attached(&self, node: NodeId) -> bool;

    /// Number of body children carrying `id`
    fn attached_count(&self, id: &str) -> usize;

    /// Set or clear a body-level style flag
    fn set_body_flag(&mut self, flag: BodyFlag, on: bool);

    /// Whether a body-level style flag is set
    fn body_flag(&self, flag: BodyFlag) -> bool;

    /// Register a global key-up listener
    fn add_key_up_listener(&mut self, listener: KeyListener) -> ListenerId;

    /// Unregister a key-up listener, returns false if it was not registered
    fn remove_key_up_listener(&mut self, id: ListenerId) -> bool;

    /// Snapshot of the registered key-up listeners in registration order
    fn key_up_listeners(&self) -> Vec<KeyListener>;

    /// Set an attribute on the document root element
    fn set_root_attribute(&mut self, name: &str, value: &str);

    /// Read an attribute of the document root element
    fn root_attribute(&self, name: &str) -> Option<String>;

    /// Evaluate a media query against the host environment
    fn media_matches(&self, query: MediaQuery) -> bool;
}
