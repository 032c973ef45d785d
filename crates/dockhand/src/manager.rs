//! Panel lifecycle management.
//!
//! [`PanelManager`] is the sole mutator of the docking layout, the view
//! menu, and the floating-window map. It owns the invariant the rest of
//! the crate leans on: a node has at most one live representation at any
//! time: a docked unit, a floating window, or nothing.
//!
//! All operations are synchronous and idempotent; "nothing to do" is a
//! silent no-op, not an error. Internal locks are released before any call
//! that can emit signals, so slots may re-enter the manager.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use dockhand_core::ObservableList;

use crate::error::Result;
use crate::layout::{DockLayout, DockPos};
use crate::menu::ViewMenu;
use crate::node::{NodeHandle, NodeId};
use crate::panel::NodePanel;
use crate::registry::NodeRegistry;
use crate::unit::DockUnit;
use crate::window::{HostWindowId, WindowHost};

/// Menu group holding console entries.
pub const CONSOLE_GROUP: &str = "Console";
/// Menu group holding toolbar entries.
pub const TOOLBAR_GROUP: &str = "Toolbar";

struct ManagerInner {
    layout: Arc<dyn DockLayout>,
    windows: Arc<dyn WindowHost>,
    registry: NodeRegistry,
    menu: ViewMenu,
    /// Non-closable console unit; anchor sibling for panels docked while
    /// nothing else is docked yet.
    console: DockUnit,
    panels: Mutex<Vec<NodePanel>>,
    floating: Mutex<HashMap<NodeId, HostWindowId>>,
}

/// Drives panel lifecycles against a docking layout and a window host.
///
/// Cheap cloneable handle; all clones share one underlying manager.
///
/// # Example
///
/// ```ignore
/// let manager = PanelManager::new(
///     layout, windows, tree, registry, consoles, toolbars, menu,
/// );
/// manager.open(&camera);
/// manager.promote(&camera)?;
/// ```
#[derive(Clone)]
pub struct PanelManager {
    inner: Arc<ManagerInner>,
}

impl PanelManager {
    /// Build the manager and seed the initial layout.
    ///
    /// The tree unit is made non-closable and docked to the left edge. A
    /// non-closable "Console" unit is created, appended to `consoles`, and
    /// docked right of the tree; further consoles tab-group onto the
    /// first. Toolbars dock above the tree, tab-grouping likewise. Every
    /// seeded unit gets a menu entry under its group.
    ///
    /// Consoles and toolbars added to the lists afterwards get menu
    /// entries but are not docked; opening them is up to the caller.
    /// Deregistering a node from `registry` closes its representation.
    pub fn new(
        layout: Arc<dyn DockLayout>,
        windows: Arc<dyn WindowHost>,
        tree: DockUnit,
        registry: NodeRegistry,
        consoles: ObservableList<DockUnit>,
        toolbars: ObservableList<DockUnit>,
        menu: ViewMenu,
    ) -> Self {
        tree.set_closable(false);
        tree.dock(&layout, DockPos::Left, None);

        menu.register_group(CONSOLE_GROUP);
        menu.register_group(TOOLBAR_GROUP);

        let console = DockUnit::new("Console").with_closable(false);
        consoles.push(console.clone());

        let mut first_console = None;
        for unit in consoles.items() {
            match first_console {
                None => {
                    unit.dock(&layout, DockPos::Right, Some(tree.id()));
                    first_console = Some(unit.id());
                }
                Some(anchor) => unit.dock(&layout, DockPos::Center, Some(anchor)),
            }
            menu.add_entry(CONSOLE_GROUP, unit);
        }

        let mut first_toolbar = None;
        for unit in toolbars.items() {
            match first_toolbar {
                None => {
                    unit.dock(&layout, DockPos::Top, Some(tree.id()));
                    first_toolbar = Some(unit.id());
                }
                Some(anchor) => unit.dock(&layout, DockPos::Center, Some(anchor)),
            }
            menu.add_entry(TOOLBAR_GROUP, unit);
        }

        // late additions are offered in the menu but never auto-docked
        let menu_clone = menu.clone();
        consoles.item_added().connect(move |unit: &DockUnit| {
            menu_clone.add_entry(CONSOLE_GROUP, unit.clone());
        });
        let menu_clone = menu.clone();
        toolbars.item_added().connect(move |unit: &DockUnit| {
            menu_clone.add_entry(TOOLBAR_GROUP, unit.clone());
        });

        let inner = Arc::new(ManagerInner {
            layout,
            windows,
            registry: registry.clone(),
            menu,
            console,
            panels: Mutex::new(Vec::new()),
            floating: Mutex::new(HashMap::new()),
        });

        let weak: Weak<ManagerInner> = Arc::downgrade(&inner);
        registry.node_removed().connect(move |node: &NodeHandle| {
            if let Some(inner) = weak.upgrade() {
                PanelManager { inner }.close(node);
            }
        });
        registry.node_added().connect(|node: &NodeHandle| {
            tracing::debug!(
                target: "dockhand::manager",
                id = node.id().as_raw(),
                title = %node.title(),
                "node available, not opened"
            );
        });

        Self { inner }
    }

    /// Show a node.
    ///
    /// A floating node is focused; a non-dockable node is shown through
    /// its own visibility hook; a node with a live docked unit is
    /// re-shown and focused. Only a node with no representation gets a
    /// new unit, tab-grouped with whatever panel is already docked or
    /// placed above the console otherwise.
    pub fn open(&self, node: &NodeHandle) {
        let floating = self.inner.floating.lock().get(&node.id()).copied();
        if let Some(window) = floating {
            self.inner.windows.focus_window(window);
            return;
        }

        if !node.caps().dockable {
            node.set_visible(true);
            return;
        }

        let existing = self.find_panel(node.id());
        if let Some(panel) = existing {
            panel.unit().set_visible(true);
            panel.unit().focus();
            return;
        }

        let panel = NodePanel::new(node.clone());
        let sibling = self
            .inner
            .panels
            .lock()
            .iter()
            .find(|p| p.unit().is_docked())
            .map(|p| p.unit().id());

        tracing::debug!(
            target: "dockhand::manager",
            id = node.id().as_raw(),
            title = %node.title(),
            tabbed = sibling.is_some(),
            "opening panel"
        );

        match sibling {
            Some(anchor) => panel.unit().dock(&self.inner.layout, DockPos::Center, Some(anchor)),
            None => panel
                .unit()
                .dock(&self.inner.layout, DockPos::Top, Some(self.inner.console.id())),
        }
        self.inner.panels.lock().push(panel);
    }

    /// Hide a node without discarding its representation.
    ///
    /// The unit stays docked (and keeps its position) so a later
    /// [`open`](PanelManager::open) shows it in place.
    pub fn hide(&self, node: &NodeHandle) {
        if !node.caps().dockable {
            node.set_visible(false);
            return;
        }
        for panel in self.matching_panels(node.id()) {
            panel.unit().set_visible(false);
        }
    }

    /// Close a node's representation. Idempotent.
    ///
    /// Externally owned panels are hidden instead of closed; forcing a
    /// native close on a panel the host process owns can hang it, so the
    /// substitution is unconditional. Other non-dockable nodes get their
    /// native close hook. A floating window is closed programmatically; a
    /// docked unit is closed and its pairing discarded.
    pub fn close(&self, node: &NodeHandle) {
        let caps = node.caps();
        if !caps.dockable {
            if caps.externally_owned {
                node.set_visible(false);
            } else {
                node.close();
            }
            return;
        }

        if let Some(window) = self.inner.floating.lock().remove(&node.id()) {
            tracing::debug!(
                target: "dockhand::manager",
                id = node.id().as_raw(),
                "closing floating window"
            );
            self.inner.windows.close_window(window);
            return;
        }

        for panel in self.take_panels(node.id()) {
            tracing::debug!(
                target: "dockhand::manager",
                id = node.id().as_raw(),
                title = %node.title(),
                "closing panel"
            );
            panel.unit().close();
        }
    }

    /// Move a node out of the dock into its own top-level window.
    ///
    /// The new window carries the node's title and content and is placed
    /// at the main window's current origin; once it exists, any live
    /// docked unit is closed and discarded. A window creation failure
    /// leaves the docked representation untouched. Returns `Ok(None)`
    /// when no new window was created: the node is externally owned
    /// (degraded to [`open`](PanelManager::open)) or already floating.
    ///
    /// When the user later closes the window, the node simply stops being
    /// floating; its content is never force-closed.
    pub fn promote(&self, node: &NodeHandle) -> Result<Option<HostWindowId>> {
        if node.caps().externally_owned {
            self.open(node);
            return Ok(None);
        }

        if self.inner.floating.lock().contains_key(&node.id()) {
            return Ok(None);
        }

        let origin = self.inner.windows.main_window_origin();
        let window = self
            .inner
            .windows
            .open_window(&node.title(), Some(node.content()), origin)?;

        for panel in self.take_panels(node.id()) {
            panel.unit().close();
        }

        tracing::info!(
            target: "dockhand::manager",
            id = node.id().as_raw(),
            title = %node.title(),
            window = window.as_raw(),
            "panel promoted to window"
        );

        self.inner.floating.lock().insert(node.id(), window);

        let weak: Weak<ManagerInner> = Arc::downgrade(&self.inner);
        let node_id = node.id();
        self.inner.windows.set_close_handler(
            window,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.floating.lock().remove(&node_id);
                }
            }),
        );

        Ok(Some(window))
    }

    /// Whether the docking container itself is currently shown.
    pub fn is_visible(&self) -> bool {
        self.inner.layout.is_shown()
    }

    /// The node registry this manager watches.
    pub fn registry(&self) -> &NodeRegistry {
        &self.inner.registry
    }

    /// The view menu this manager maintains.
    pub fn menu(&self) -> &ViewMenu {
        &self.inner.menu
    }

    fn find_panel(&self, id: NodeId) -> Option<NodePanel> {
        self.inner
            .panels
            .lock()
            .iter()
            .find(|p| p.node_id() == id)
            .cloned()
    }

    fn matching_panels(&self, id: NodeId) -> Vec<NodePanel> {
        self.inner
            .panels
            .lock()
            .iter()
            .filter(|p| p.node_id() == id)
            .cloned()
            .collect()
    }

    /// Remove and return the panels paired with `id`.
    fn take_panels(&self, id: NodeId) -> Vec<NodePanel> {
        let mut panels = self.inner.panels.lock();
        let mut taken = Vec::new();
        panels.retain(|p| {
            if p.node_id() == id {
                taken.push(p.clone());
                false
            } else {
                true
            }
        });
        taken
    }
}
