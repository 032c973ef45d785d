//! Observable registry of logical nodes.
//!
//! The registry is the single source of truth for which nodes currently
//! exist. Application code adds and removes nodes; the lifecycle manager
//! listens and tears down the visual representation of anything removed.
//! Additions are observed but never auto-opened; opening is always
//! caller-initiated.

use dockhand_core::{ObservableList, Signal};

use crate::node::{NodeHandle, NodeId};

/// An observable collection of [`NodeHandle`]s.
///
/// Cheap cloneable handle; all clones share one underlying registry.
/// Notifications fire synchronously, in registration order.
#[derive(Clone, Default)]
pub struct NodeRegistry {
    nodes: ObservableList<NodeHandle>,
}

impl NodeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            nodes: ObservableList::new(),
        }
    }

    /// Register a node and notify listeners.
    pub fn add(&self, node: NodeHandle) {
        tracing::debug!(
            target: "dockhand::registry",
            id = node.id().as_raw(),
            title = %node.title(),
            "node registered"
        );
        self.nodes.push(node);
    }

    /// Deregister a node and notify listeners.
    ///
    /// Removing a node that is not registered is a silent no-op.
    pub fn remove(&self, node: &NodeHandle) {
        self.nodes.remove(node);
    }

    /// Snapshot of all registered nodes, in registration order.
    pub fn nodes(&self) -> Vec<NodeHandle> {
        self.nodes.items()
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check whether a node is currently registered.
    pub fn contains(&self, node: &NodeHandle) -> bool {
        self.nodes.contains(node)
    }

    /// Look up a registered node by id.
    pub fn find(&self, id: NodeId) -> Option<NodeHandle> {
        self.nodes.items().into_iter().find(|node| node.id() == id)
    }

    /// Signal emitted after a node has been registered.
    pub fn node_added(&self) -> &Signal<NodeHandle> {
        self.nodes.item_added()
    }

    /// Signal emitted after a node has been deregistered.
    pub fn node_removed(&self) -> &Signal<NodeHandle> {
        self.nodes.item_removed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use parking_lot::Mutex;

    use crate::node::{ContentId, NodeKind, PanelNode};

    struct Probe;

    impl PanelNode for Probe {
        fn title(&self) -> String {
            "Probe".to_string()
        }

        fn kind(&self) -> NodeKind {
            NodeKind::StandardPanel
        }

        fn content(&self) -> ContentId {
            ContentId::from_raw(1)
        }
    }

    #[test]
    fn test_add_remove_notifies() {
        let registry = NodeRegistry::new();
        let events = Arc::new(Mutex::new(Vec::new()));

        let events_clone = events.clone();
        registry.node_added().connect(move |node| {
            events_clone.lock().push(("added", node.id()));
        });
        let events_clone = events.clone();
        registry.node_removed().connect(move |node| {
            events_clone.lock().push(("removed", node.id()));
        });

        let node = NodeHandle::new(Probe);
        registry.add(node.clone());
        registry.remove(&node);

        let events = events.lock();
        assert_eq!(*events, vec![("added", node.id()), ("removed", node.id())]);
    }

    #[test]
    fn test_remove_unknown_is_silent() {
        let registry = NodeRegistry::new();
        let node = NodeHandle::new(Probe);
        registry.remove(&node); // nothing registered, nothing happens
        assert!(registry.is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let registry = NodeRegistry::new();
        let node = NodeHandle::new(Probe);
        registry.add(node.clone());

        assert_eq!(registry.find(node.id()), Some(node.clone()));
        registry.remove(&node);
        assert_eq!(registry.find(node.id()), None);
    }

    #[test]
    fn test_registration_order_preserved() {
        let registry = NodeRegistry::new();
        let a = NodeHandle::new(Probe);
        let b = NodeHandle::new(Probe);
        registry.add(a.clone());
        registry.add(b.clone());

        assert_eq!(registry.nodes(), vec![a, b]);
    }
}
