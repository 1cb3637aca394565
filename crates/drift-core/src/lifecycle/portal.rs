//! Portal mounting node
//!
//! Overlay content renders into one well-known node directly under the body.
//! The node is created lazily, once per document, and reused by every
//! controller living in that document. Attachment is reference counted on the
//! [`Document`], so two controllers overlapping during a mount/unmount race
//! neither append the node twice nor pull it out from under each other.

use std::rc::Rc;

use crate::document::Document;
use crate::types::NodeId;

/// Return the node tagged with `id`, creating it (detached) if absent
pub fn get_or_create_node(document: &Document, id: &str) -> Option<NodeId> {
    document.get_or_create_element(id)
}

/// One controller's attachment of the portal node
#[derive(Debug)]
pub struct PortalHost {
    document: Option<Rc<Document>>,
    id: String,
    node: Option<NodeId>,
    attached: bool,
}

impl PortalHost {
    pub fn new(document: Option<Rc<Document>>, id: impl Into<String>) -> Self {
        Self {
            document,
            id: id.into(),
            node: None,
            attached: false,
        }
    }

    /// Resolve (creating on first use) the shared node
    pub fn node(&mut self) -> Option<NodeId> {
        if self.node.is_none() {
            self.node = self
                .document
                .as_ref()
                .and_then(|doc| get_or_create_node(doc, &self.id));
        }
        self.node
    }

    /// Append the node under the body; no-op if this host already attached it
    pub fn attach(&mut self) {
        if self.attached {
            return;
        }
        let Some(node) = self.node() else {
            return;
        };
        if let Some(document) = self.document.as_ref() {
            document.retain_attached(node);
            self.attached = true;
            log::debug!("PortalHost: attached #{} ({:?})", self.id, node);
        }
    }

    /// Remove the node from the body
    ///
    /// Safe to call repeatedly and when never attached.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        if let (Some(document), Some(node)) = (self.document.as_ref(), self.node) {
            document.release_attached(node);
            log::debug!("PortalHost: detached #{} ({:?})", self.id, node);
        }
    }

    /// Whether this host holds an attachment
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl Drop for PortalHost {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::VirtualDocument;
    use crate::types::PORTAL_ROOT_ID;

    #[test]
    fn test_node_is_created_once() {
        let doc = Document::new(VirtualDocument::new());
        let first = get_or_create_node(&doc, PORTAL_ROOT_ID);
        let second = get_or_create_node(&doc, PORTAL_ROOT_ID);
        assert!(first.is_some());
        assert_eq!(first, second);
        // Created but not attached yet
        assert_eq!(doc.attached_count(PORTAL_ROOT_ID), 0);
    }

    #[test]
    fn test_detach_without_attach_is_noop() {
        let doc = Document::new(VirtualDocument::new());
        let mut host = PortalHost::new(Some(Rc::clone(&doc)), PORTAL_ROOT_ID);
        host.detach();
        host.detach();
        assert_eq!(doc.attached_count(PORTAL_ROOT_ID), 0);
    }

    #[test]
    fn test_attach_detach_cycle() {
        let doc = Document::new(VirtualDocument::new());
        let mut host = PortalHost::new(Some(Rc::clone(&doc)), PORTAL_ROOT_ID);

        host.attach();
        host.attach();
        assert_eq!(doc.attached_count(PORTAL_ROOT_ID), 1);

        host.detach();
        host.detach();
        assert_eq!(doc.attached_count(PORTAL_ROOT_ID), 0);
    }

    #[test]
    fn test_overlapping_hosts_share_one_node() {
        let doc = Document::new(VirtualDocument::new());
        let mut a = PortalHost::new(Some(Rc::clone(&doc)), PORTAL_ROOT_ID);
        let mut b = PortalHost::new(Some(Rc::clone(&doc)), PORTAL_ROOT_ID);

        a.attach();
        b.attach();
        assert_eq!(a.node(), b.node());
        assert_eq!(doc.attached_count(PORTAL_ROOT_ID), 1);

        // a unmounts while b is still mounted
        drop(a);
        assert_eq!(doc.attached_count(PORTAL_ROOT_ID), 1);

        b.detach();
        assert_eq!(doc.attached_count(PORTAL_ROOT_ID), 0);
    }

    #[test]
    fn test_without_document_is_noop() {
        let mut host = PortalHost::new(None, PORTAL_ROOT_ID);
        host.attach();
        assert!(!host.is_attached());
        assert!(host.node().is_none());
        host.detach();
    }
}
