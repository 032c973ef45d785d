//! Dockhand: panel lifecycle management for docking desktop UIs.
//!
//! Dockhand sits between an application's logical panels (device views,
//! consoles, toolbars) and the host toolkit that actually renders them. It
//! tracks which panel is docked, hidden, closed, or floating in its own
//! top-level window, keeps a checkable view menu in sync, and tears down
//! representations when panels are deregistered.
//!
//! The host toolkit is reached through two narrow traits:
//! [`DockLayout`](layout::DockLayout) for the docking container and
//! [`WindowHost`](window::WindowHost) for top-level windows. Everything
//! else (the state machine, the at-most-one-representation invariant, the
//! menu mirroring) lives here and is fully testable with fakes.
//!
//! # Architecture
//!
//! - [`node`]: logical panel model ([`PanelNode`], [`NodeHandle`],
//!   capability flags)
//! - [`registry`]: observable set of registered nodes
//! - [`unit`]: per-panel dock state machine ([`DockUnit`])
//! - [`menu`]: checkable view-menu mirror ([`ViewMenu`], [`MenuEntry`])
//! - [`manager`]: the lifecycle driver ([`PanelManager`])
//!
//! All operations are synchronous; callers drive Dockhand from the
//! UI-owning thread and signals fire inline.

pub mod error;
pub mod layout;
pub mod manager;
pub mod menu;
pub mod node;
pub mod panel;
pub mod registry;
pub mod unit;
pub mod window;

pub use dockhand_core::{ConnectionId, ObservableList, Signal};

pub use error::{DockhandError, Result};
pub use layout::{DockLayout, DockPos};
pub use manager::{CONSOLE_GROUP, PanelManager, TOOLBAR_GROUP};
pub use menu::{MenuEntry, ViewMenu};
pub use node::{ContentId, NodeCaps, NodeHandle, NodeId, NodeKind, PanelNode};
pub use panel::NodePanel;
pub use registry::NodeRegistry;
pub use unit::{DockUnit, UnitId};
pub use window::{HostWindowId, Point, WindowHost};
