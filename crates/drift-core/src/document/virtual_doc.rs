//! In-memory host document
//!
//! Used by the test suite and by the iced gallery, whose view reads the
//! body children and flags to decide what to draw.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::backend::{HostBackend, KeyListener};
use crate::types::{BodyFlag, ListenerId, MediaQuery, NodeId};

/// Element record (only the id attribute is tracked)
#[derive(Debug, Clone)]
struct Element {
    id: String,
}

/// In-memory document with a flat body
#[derive(Default)]
pub struct VirtualDocument {
    /// Every element ever created in this document
    elements: BTreeMap<NodeId, Element>,
    /// Body children in append order
    body: Vec<NodeId>,
    flags: HashSet<BodyFlag>,
    listeners: BTreeMap<ListenerId, KeyListener>,
    root_attributes: HashMap<String, String>,
    media: HashSet<MediaQuery>,
    next_node: u64,
    next_listener: u64,
}

impl VirtualDocument {
    /// Create an empty document where no media query matches
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: make a media query match (or not)
    pub fn with_media(mut self, query: MediaQuery, matches: bool) -> Self {
        if matches {
            self.media.insert(query);
        } else {
            self.media.remove(&query);
        }
        self
    }

    /// Number of body children
    pub fn body_len(&self) -> usize {
        self.body.len()
    }
}

impl std::fmt::Debug for VirtualDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VirtualDocument")
            .field("elements", &self.elements.len())
            .field("body", &self.body)
            .field("flags", &self.flags)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl HostBackend for VirtualDocument {
    fn create_element(&mut self, id: &str) -> NodeId {
        self.next_node += 1;
        let node = NodeId(self.next_node);
        self.elements.insert(node, Element { id: id.to_string() });
        node
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements
            .iter()
            .find(|(_, element)| element.id == id)
            .map(|(node, _)| *node)
    }

    fn append_to_body(&mut self, node: NodeId) -> bool {
        if !self.elements.contains_key(&node) || self.body.contains(&node) {
            return false;
        }
        self.body.push(node);
        true
    }

    fn remove_from_body(&mut self, node: NodeId) -> bool {
        let before = self.body.len();
        self.body.retain(|n| *n != node);
        self.body.len() != before
    }

    fn is_attached(&self, node: NodeId) -> bool {
        self.body.contains(&node)
    }

    fn attached_count(&self, id: &str) -> usize {
        self.body
            .iter()
            .filter(|node| self.elements.get(*node).is_some_and(|e| e.id == id))
            .count()
    }

    fn set_body_flag(&mut self, flag: BodyFlag, on: bool) {
        if on {
            self.flags.insert(flag);
        } else {
            self.flags.remove(&flag);
        }
    }

    fn body_flag(&self, flag: BodyFlag) -> bool {
        self.flags.contains(&flag)
    }

    fn add_key_up_listener(&mut self, listener: KeyListener) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.insert(id, listener);
        id
    }

    fn remove_key_up_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    fn key_up_listeners(&self) -> Vec<KeyListener> {
        self.listeners.values().cloned().collect()
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.root_attributes
            .insert(name.to_string(), value.to_string());
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root_attributes.get(name).cloned()
    }

    fn media_matches(&self, query: MediaQuery) -> bool {
        self.media.contains(&query)
    }
}
