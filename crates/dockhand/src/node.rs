//! Logical node model.
//!
//! A node is the application's handle to one controllable panel: a device
//! view, a tool panel, an externally hosted control surface. Nodes are
//! constructed and owned by application code; Dockhand never creates them.
//! It only reacts to their registration and drives their visual
//! representation through the lifecycle manager.
//!
//! Behavior differences between node kinds are captured once, at handle
//! creation, as [`NodeCaps`]; nothing downstream ever re-tests the concrete
//! node type.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// The behavioral kind of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Participates fully in docking; receives a panel wrapper on open.
    StandardPanel,
    /// Manages its own visibility flag; never docked, never wrapped.
    NonDockablePanel,
    /// Hosted by an external process; always shown/hidden directly, never
    /// docked, never force-closed.
    ExternalProcessPanel,
}

/// Capability flags derived from [`NodeKind`].
///
/// Resolved once when a [`NodeHandle`] is created; the lifecycle manager
/// dispatches on these instead of on the node's concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeCaps {
    /// Whether the node participates in the docking layout.
    pub dockable: bool,
    /// Whether the node's panel is owned by an external process.
    pub externally_owned: bool,
}

impl NodeCaps {
    /// Derive capability flags from a node kind.
    pub fn from_kind(kind: NodeKind) -> Self {
        match kind {
            NodeKind::StandardPanel => Self {
                dockable: true,
                externally_owned: false,
            },
            NodeKind::NonDockablePanel => Self {
                dockable: false,
                externally_owned: false,
            },
            NodeKind::ExternalProcessPanel => Self {
                dockable: false,
                externally_owned: true,
            },
        }
    }
}

/// Opaque token identifying a node's renderable content.
///
/// Dockhand never interprets the token. It is handed through unchanged to
/// the docking layout and the window host, which resolve it to an actual
/// widget tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentId(u64);

impl ContentId {
    /// Create a content token from a raw value.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Convert the token to its raw value.
    #[inline]
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

/// Stable identity of a logical node.
///
/// Allocated from a process-wide monotonic counter; ids are never reused
/// within a process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Convert the id to its raw value.
    #[inline]
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

/// A logical panel node, implemented by application code.
///
/// Only [`title`](PanelNode::title), [`kind`](PanelNode::kind) and
/// [`content`](PanelNode::content) are required. The visibility methods
/// are meaningful for kinds that manage their own panel
/// (`NonDockablePanel`, `ExternalProcessPanel`) and default to no-ops;
/// standard panels are shown and hidden through the docking layout
/// instead.
pub trait PanelNode: Send + Sync {
    /// Display name used for tabs, menu entries, and window titles.
    fn title(&self) -> String;

    /// The behavioral kind of this node.
    fn kind(&self) -> NodeKind;

    /// The renderable content this node presents.
    fn content(&self) -> ContentId;

    /// Show or hide the node's own panel directly.
    fn set_visible(&self, _visible: bool) {}

    /// Close the node's own panel natively.
    ///
    /// Never invoked for externally owned panels; see the lifecycle
    /// manager's close handling.
    fn close(&self) {}
}

/// A cloneable identity handle to a [`PanelNode`].
///
/// Equality and hashing use the stable [`NodeId`], not the underlying
/// allocation, so clones of one handle always compare equal.
#[derive(Clone)]
pub struct NodeHandle {
    id: NodeId,
    caps: NodeCaps,
    node: Arc<dyn PanelNode>,
}

impl NodeHandle {
    /// Wrap a node, resolving its capability flags once.
    pub fn new(node: impl PanelNode + 'static) -> Self {
        Self::from_arc(Arc::new(node))
    }

    /// Wrap an already-shared node.
    pub fn from_arc(node: Arc<dyn PanelNode>) -> Self {
        let caps = NodeCaps::from_kind(node.kind());
        Self {
            id: NodeId::next(),
            caps,
            node,
        }
    }

    /// The node's stable identity.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Capability flags resolved at handle creation.
    pub fn caps(&self) -> NodeCaps {
        self.caps
    }

    /// The node's behavioral kind.
    pub fn kind(&self) -> NodeKind {
        self.node.kind()
    }

    /// The node's display name.
    pub fn title(&self) -> String {
        self.node.title()
    }

    /// The node's renderable content token.
    pub fn content(&self) -> ContentId {
        self.node.content()
    }

    /// Show or hide the node's own panel (self-visible kinds).
    pub fn set_visible(&self, visible: bool) {
        self.node.set_visible(visible);
    }

    /// Close the node's own panel natively (in-process kinds only).
    pub fn close(&self) {
        self.node.close();
    }
}

impl PartialEq for NodeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NodeHandle {}

impl std::hash::Hash for NodeHandle {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeHandle")
            .field("id", &self.id)
            .field("title", &self.node.title())
            .field("kind", &self.node.kind())
            .finish()
    }
}
