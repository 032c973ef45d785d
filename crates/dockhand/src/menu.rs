//! View menu mirror.
//!
//! Each [`MenuEntry`] is a checkable menu item bound to one [`DockUnit`]:
//! checked means "not closed". The binding is one-directional: the unit
//! drives the check state, and activating the entry goes through the unit
//! rather than toggling the flag locally. A unit that refuses to close
//! therefore snaps its entry straight back to checked.
//!
//! The host toolkit renders the entries; Dockhand only keeps their state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};

use dockhand_core::{ConnectionId, Signal};

use crate::unit::DockUnit;

/// A checkable menu item mirroring one dock unit's open/closed state.
///
/// # Signals
///
/// - [`checked_changed`](MenuEntry::checked_changed): emitted when the
///   check mark should change, and re-emitted with `true` when an
///   activation could not close the unit (so a toolkit checkbox that
///   already flipped itself can snap back)
pub struct MenuEntry {
    unit: DockUnit,
    checked: AtomicBool,
    checked_changed: Signal<bool>,
    mirror: Mutex<Option<ConnectionId>>,
}

impl MenuEntry {
    /// Build an entry for `unit` and bind it to the unit's closed state.
    ///
    /// The binding holds only a `Weak` reference to the entry and is
    /// disconnected when the last `Arc` drops.
    pub fn bind(unit: DockUnit) -> Arc<Self> {
        let entry = Arc::new(Self {
            checked: AtomicBool::new(!unit.is_closed()),
            checked_changed: Signal::new(),
            unit: unit.clone(),
            mirror: Mutex::new(None),
        });

        let weak: Weak<Self> = Arc::downgrade(&entry);
        let mirror = unit.closed_changed().connect(move |&closed| {
            if let Some(entry) = weak.upgrade() {
                entry.set_checked(!closed);
            }
        });
        *entry.mirror.lock() = Some(mirror);

        entry
    }

    /// The bound unit's display title.
    pub fn title(&self) -> String {
        self.unit.title()
    }

    /// The unit this entry mirrors.
    pub fn unit(&self) -> &DockUnit {
        &self.unit
    }

    /// Whether the entry is currently checked (unit not closed).
    pub fn is_checked(&self) -> bool {
        self.checked.load(Ordering::Acquire)
    }

    /// Signal emitted when the check mark should change.
    pub fn checked_changed(&self) -> &Signal<bool> {
        &self.checked_changed
    }

    /// Handle a user activation of the menu item.
    ///
    /// A closed unit is re-opened at its last dock position; for an open
    /// unit the check mark is re-asserted, because the menu cannot close
    /// units.
    pub fn activate(&self) {
        if self.unit.is_closed() {
            self.unit.restore();
        } else {
            // the toolkit checkbox may have unticked itself on click
            self.checked_changed.emit(true);
        }
    }

    fn set_checked(&self, checked: bool) {
        if self.checked.swap(checked, Ordering::AcqRel) != checked {
            self.checked_changed.emit(checked);
        }
    }
}

impl Drop for MenuEntry {
    fn drop(&mut self) {
        if let Some(mirror) = self.mirror.get_mut().take() {
            self.unit.closed_changed().disconnect(mirror);
        }
    }
}

struct MenuGroup {
    name: String,
    entries: Vec<Arc<MenuEntry>>,
}

struct MenuInner {
    groups: RwLock<Vec<MenuGroup>>,
}

/// Named groups of [`MenuEntry`]s, in registration order.
///
/// Cheap cloneable handle; all clones share one underlying menu.
#[derive(Clone)]
pub struct ViewMenu {
    inner: Arc<MenuInner>,
}

impl Default for ViewMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewMenu {
    /// Create a new empty menu.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MenuInner {
                groups: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Append a named group.
    ///
    /// Duplicate names are allowed; entry lookup always targets the first
    /// group with a matching name.
    pub fn register_group(&self, name: impl Into<String>) {
        self.inner.groups.write().push(MenuGroup {
            name: name.into(),
            entries: Vec::new(),
        });
    }

    /// Create an entry for `unit` under the named group.
    ///
    /// Returns `None` without creating anything when no group matches.
    pub fn add_entry(&self, group: &str, unit: DockUnit) -> Option<Arc<MenuEntry>> {
        let mut groups = self.inner.groups.write();
        let Some(target) = groups.iter_mut().find(|g| g.name == group) else {
            tracing::debug!(
                target: "dockhand::menu",
                group,
                unit = unit.id().as_raw(),
                "menu group not found, entry dropped"
            );
            return None;
        };
        let entry = MenuEntry::bind(unit);
        target.entries.push(entry.clone());
        Some(entry)
    }

    /// Names of all registered groups, in registration order.
    pub fn group_names(&self) -> Vec<String> {
        self.inner.groups.read().iter().map(|g| g.name.clone()).collect()
    }

    /// Entries of the first group with a matching name.
    pub fn entries(&self, group: &str) -> Vec<Arc<MenuEntry>> {
        self.inner
            .groups
            .read()
            .iter()
            .find(|g| g.name == group)
            .map(|g| g.entries.clone())
            .unwrap_or_default()
    }
}
