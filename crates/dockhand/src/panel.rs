//! Node-to-unit pairing.
//!
//! A [`NodePanel`] ties one logical node to the dock unit that currently
//! represents it. The lifecycle manager keeps at most one panel per node;
//! the pairing exists from the first open until the node is closed or
//! deregistered.

use crate::node::{NodeHandle, NodeId};
use crate::unit::DockUnit;

/// One logical node paired with its visual dock unit.
///
/// Cheap cloneable; both halves are shared handles.
#[derive(Debug, Clone)]
pub struct NodePanel {
    node: NodeHandle,
    unit: DockUnit,
}

impl NodePanel {
    /// Pair a node with a freshly built unit carrying the node's title and
    /// content.
    pub fn new(node: NodeHandle) -> Self {
        let unit = DockUnit::new(node.title()).with_content(node.content());
        Self { node, unit }
    }

    /// The logical node.
    pub fn node(&self) -> &NodeHandle {
        &self.node
    }

    /// The node's stable identity.
    pub fn node_id(&self) -> NodeId {
        self.node.id()
    }

    /// The visual dock unit.
    pub fn unit(&self) -> &DockUnit {
        &self.unit
    }
}
