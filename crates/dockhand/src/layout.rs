//! Docking layout boundary.
//!
//! The real docking container (drag/drop, splitter geometry, tab strips,
//! position persistence) lives in the host toolkit. Dockhand drives it
//! through this narrow contract and keeps all lifecycle state on its own
//! side, in [`DockUnit`](crate::unit::DockUnit).

use crate::unit::{DockUnit, UnitId};

/// Position of a unit relative to a sibling (or to the layout root when no
/// sibling is given).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DockPos {
    /// Above the sibling.
    Top,
    /// Below the sibling.
    Bottom,
    /// Left of the sibling.
    Left,
    /// Right of the sibling.
    Right,
    /// Tab-grouped with the sibling.
    Center,
}

/// The contract Dockhand consumes from the host docking container.
///
/// Implementations must apply each call synchronously on the UI-owning
/// thread. Dockhand is the sole mutator of the container for the units it
/// owns; no other component may attach or detach them.
pub trait DockLayout: Send + Sync {
    /// Attach a unit's content at `pos` relative to `sibling` (or to the
    /// layout root when `sibling` is `None`). [`DockPos::Center`] on a
    /// sibling groups the two as tabs.
    fn attach(&self, unit: &DockUnit, pos: DockPos, sibling: Option<UnitId>);

    /// Detach a unit's content from the layout.
    ///
    /// Detaching a unit that is not attached must be a no-op.
    fn detach(&self, unit: UnitId);

    /// Show or hide an attached unit without detaching it.
    fn set_unit_visible(&self, unit: UnitId, visible: bool);

    /// Bring an attached unit's tab/pane to the front.
    fn focus(&self, unit: UnitId);

    /// Whether the layout container itself is currently shown.
    fn is_shown(&self) -> bool;
}
