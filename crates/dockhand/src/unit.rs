//! Dockable unit state tracking.
//!
//! [`DockUnit`] is the adapter between one visual unit (a console, a
//! toolbar, a device panel) and the host docking container. The container
//! does the geometry; the unit owns the lifecycle state the rest of
//! Dockhand reasons about: closed, visible, docked, and the last dock
//! position used for re-opening a closed unit in place.
//!
//! # Signals
//!
//! - [`closed_changed`](DockUnit::closed_changed): emitted when the closed
//!   flag flips; this is what the view menu mirrors
//! - [`visibility_changed`](DockUnit::visibility_changed): emitted when
//!   visibility flips
//!
//! State is mutated inside a short lock scope and signals are emitted after
//! the lock has been released, so a slot may freely read the unit it was
//! notified about.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use dockhand_core::Signal;

use crate::layout::{DockLayout, DockPos};
use crate::node::ContentId;

/// Stable identity of a dock unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(u64);

impl UnitId {
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

/// Internal mutable state for a dock unit.
struct UnitState {
    closed: bool,
    visible: bool,
    docked: bool,
    closable: bool,
    last_dock: Option<(DockPos, Option<UnitId>)>,
    /// Layout the unit was last attached through; kept so `close` and
    /// `restore` can reach the container without threading it through
    /// every caller.
    layout: Option<Arc<dyn DockLayout>>,
}

struct UnitInner {
    id: UnitId,
    title: RwLock<String>,
    content: RwLock<Option<ContentId>>,
    state: RwLock<UnitState>,
    closed_changed: Signal<bool>,
    visibility_changed: Signal<bool>,
}

/// One dockable visual unit.
///
/// Cheap cloneable handle; all clones share one underlying unit. A fresh
/// unit starts closed and invisible, and enters the layout on the first
/// [`dock`](DockUnit::dock) call.
#[derive(Clone)]
pub struct DockUnit {
    inner: Arc<UnitInner>,
}

impl DockUnit {
    /// Create a new unit with the given display title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(UnitInner {
                id: UnitId::next(),
                title: RwLock::new(title.into()),
                content: RwLock::new(None),
                state: RwLock::new(UnitState {
                    closed: true,
                    visible: false,
                    docked: false,
                    closable: true,
                    last_dock: None,
                    layout: None,
                }),
                closed_changed: Signal::new(),
                visibility_changed: Signal::new(),
            }),
        }
    }

    /// Set the renderable content token using builder pattern.
    pub fn with_content(self, content: ContentId) -> Self {
        *self.inner.content.write() = Some(content);
        self
    }

    /// Set closability using builder pattern.
    pub fn with_closable(self, closable: bool) -> Self {
        self.set_closable(closable);
        self
    }

    /// The unit's stable identity.
    pub fn id(&self) -> UnitId {
        self.inner.id
    }

    /// The display title.
    pub fn title(&self) -> String {
        self.inner.title.read().clone()
    }

    /// Set the display title.
    pub fn set_title(&self, title: impl Into<String>) {
        *self.inner.title.write() = title.into();
    }

    /// The renderable content token, if any.
    pub fn content(&self) -> Option<ContentId> {
        *self.inner.content.read()
    }

    /// Whether the unit is currently closed.
    pub fn is_closed(&self) -> bool {
        self.inner.state.read().closed
    }

    /// Whether the unit is currently visible.
    pub fn is_visible(&self) -> bool {
        self.inner.state.read().visible
    }

    /// Whether the unit is currently attached to the docking layout.
    pub fn is_docked(&self) -> bool {
        self.inner.state.read().docked
    }

    /// Whether the unit can be closed.
    pub fn is_closable(&self) -> bool {
        self.inner.state.read().closable
    }

    /// Set whether the unit can be closed.
    ///
    /// A non-closable unit ignores [`close`](DockUnit::close) entirely;
    /// this is how the always-open console is kept open.
    pub fn set_closable(&self, closable: bool) {
        self.inner.state.write().closable = closable;
    }

    /// The position of the most recent dock, if the unit has ever docked.
    pub fn last_dock_pos(&self) -> Option<DockPos> {
        self.inner.state.read().last_dock.map(|(pos, _)| pos)
    }

    /// The sibling of the most recent dock, if any.
    pub fn last_dock_sibling(&self) -> Option<UnitId> {
        self.inner.state.read().last_dock.and_then(|(_, sibling)| sibling)
    }

    /// Signal emitted when the closed flag flips.
    pub fn closed_changed(&self) -> &Signal<bool> {
        &self.inner.closed_changed
    }

    /// Signal emitted when visibility flips.
    pub fn visibility_changed(&self) -> &Signal<bool> {
        &self.inner.visibility_changed
    }

    /// Attach the unit to the layout at `pos` relative to `sibling`.
    ///
    /// Marks the unit open, visible, and docked, and records the position
    /// and sibling as the "last dock" used by [`restore`](DockUnit::restore).
    pub fn dock(&self, layout: &Arc<dyn DockLayout>, pos: DockPos, sibling: Option<UnitId>) {
        layout.attach(self, pos, sibling);

        let (was_closed, was_visible);
        {
            let mut state = self.inner.state.write();
            was_closed = state.closed;
            was_visible = state.visible;
            state.closed = false;
            state.visible = true;
            state.docked = true;
            state.last_dock = Some((pos, sibling));
            state.layout = Some(Arc::clone(layout));
        }

        tracing::debug!(
            target: "dockhand::unit",
            id = self.id().as_raw(),
            title = %self.title(),
            ?pos,
            sibling = sibling.map(UnitId::as_raw),
            "unit docked"
        );

        if was_closed {
            self.inner.closed_changed.emit(false);
        }
        if !was_visible {
            self.inner.visibility_changed.emit(true);
        }
    }

    /// Close the unit: detach it from the layout and mark it closed.
    ///
    /// Idempotent. The last dock position is kept so the unit can be
    /// re-opened in place. A non-closable unit ignores this call.
    pub fn close(&self) {
        let (layout, was_visible);
        {
            let mut state = self.inner.state.write();
            if state.closed || !state.closable {
                return;
            }
            was_visible = state.visible;
            state.closed = true;
            state.docked = false;
            state.visible = false;
            layout = state.layout.clone();
        }

        if let Some(layout) = layout {
            layout.detach(self.id());
        }

        tracing::debug!(
            target: "dockhand::unit",
            id = self.id().as_raw(),
            title = %self.title(),
            "unit closed"
        );

        self.inner.closed_changed.emit(true);
        if was_visible {
            self.inner.visibility_changed.emit(false);
        }
    }

    /// Show or hide the unit without detaching it.
    ///
    /// The docked flag and the last dock position survive, so a hidden
    /// unit can be re-shown without re-docking.
    pub fn set_visible(&self, visible: bool) {
        let layout;
        {
            let mut state = self.inner.state.write();
            if state.visible == visible {
                return;
            }
            state.visible = visible;
            layout = if state.docked { state.layout.clone() } else { None };
        }

        if let Some(layout) = layout {
            layout.set_unit_visible(self.id(), visible);
        }

        self.inner.visibility_changed.emit(visible);
    }

    /// Bring the unit's tab/pane to the front if it is docked.
    ///
    /// No-op otherwise.
    pub fn focus(&self) {
        let layout = {
            let state = self.inner.state.read();
            if !state.docked {
                return;
            }
            state.layout.clone()
        };
        if let Some(layout) = layout {
            layout.focus(self.id());
        }
    }

    /// Re-open a closed unit at its last dock position.
    ///
    /// An open unit is focused instead; a unit that has never been docked
    /// is left untouched.
    pub fn restore(&self) {
        let (layout, last_dock, closed) = {
            let state = self.inner.state.read();
            (state.layout.clone(), state.last_dock, state.closed)
        };
        if !closed {
            self.focus();
            return;
        }
        let (Some(layout), Some((pos, sibling))) = (layout, last_dock) else {
            return;
        };
        self.dock(&layout, pos, sibling);
    }
}

impl PartialEq for DockUnit {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for DockUnit {}

impl std::fmt::Debug for DockUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.read();
        f.debug_struct("DockUnit")
            .field("id", &self.inner.id)
            .field("title", &*self.inner.title.read())
            .field("closed", &state.closed)
            .field("visible", &state.visible)
            .field("docked", &state.docked)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use parking_lot::Mutex;
    use static_assertions::assert_impl_all;

    assert_impl_all!(DockUnit: Send, Sync);

    /// Layout double that records every call.
    #[derive(Default)]
    struct RecordingLayout {
        attached: Mutex<Vec<(UnitId, DockPos, Option<UnitId>)>>,
        detached: Mutex<Vec<UnitId>>,
        visibility: Mutex<Vec<(UnitId, bool)>>,
        focused: Mutex<Vec<UnitId>>,
    }

    impl DockLayout for RecordingLayout {
        fn attach(&self, unit: &DockUnit, pos: DockPos, sibling: Option<UnitId>) {
            self.attached.lock().push((unit.id(), pos, sibling));
        }

        fn detach(&self, unit: UnitId) {
            self.detached.lock().push(unit);
        }

        fn set_unit_visible(&self, unit: UnitId, visible: bool) {
            self.visibility.lock().push((unit, visible));
        }

        fn focus(&self, unit: UnitId) {
            self.focused.lock().push(unit);
        }

        fn is_shown(&self) -> bool {
            true
        }
    }

    fn layout() -> (Arc<RecordingLayout>, Arc<dyn DockLayout>) {
        let recording = Arc::new(RecordingLayout::default());
        let dyn_layout: Arc<dyn DockLayout> = recording.clone();
        (recording, dyn_layout)
    }

    #[test]
    fn test_fresh_unit_is_closed() {
        let unit = DockUnit::new("Camera");
        assert!(unit.is_closed());
        assert!(!unit.is_visible());
        assert!(!unit.is_docked());
        assert_eq!(unit.last_dock_pos(), None);
    }

    #[test]
    fn test_dock_opens_and_records_position() {
        let (recording, dyn_layout) = layout();
        let unit = DockUnit::new("Camera");
        let sibling = UnitId::next();

        unit.dock(&dyn_layout, DockPos::Center, Some(sibling));

        assert!(!unit.is_closed());
        assert!(unit.is_visible());
        assert!(unit.is_docked());
        assert_eq!(unit.last_dock_pos(), Some(DockPos::Center));
        assert_eq!(unit.last_dock_sibling(), Some(sibling));
        assert_eq!(*recording.attached.lock(), vec![(unit.id(), DockPos::Center, Some(sibling))]);
    }

    #[test]
    fn test_close_is_idempotent() {
        let (recording, dyn_layout) = layout();
        let unit = DockUnit::new("Camera");
        unit.dock(&dyn_layout, DockPos::Top, None);

        let transitions = Arc::new(Mutex::new(Vec::new()));
        let transitions_clone = transitions.clone();
        unit.closed_changed().connect(move |&closed| {
            transitions_clone.lock().push(closed);
        });

        unit.close();
        unit.close();

        assert!(unit.is_closed());
        assert_eq!(*transitions.lock(), vec![true]);
        assert_eq!(recording.detached.lock().len(), 1);
        // position memory survives close for re-open
        assert_eq!(unit.last_dock_pos(), Some(DockPos::Top));
    }

    #[test]
    fn test_non_closable_unit_ignores_close() {
        let (recording, dyn_layout) = layout();
        let unit = DockUnit::new("Console").with_closable(false);
        unit.dock(&dyn_layout, DockPos::Right, None);

        unit.close();

        assert!(!unit.is_closed());
        assert!(recording.detached.lock().is_empty());
    }

    #[test]
    fn test_hide_keeps_docked_flag() {
        let (recording, dyn_layout) = layout();
        let unit = DockUnit::new("Camera");
        unit.dock(&dyn_layout, DockPos::Top, None);

        unit.set_visible(false);

        assert!(unit.is_docked());
        assert!(!unit.is_visible());
        assert!(!unit.is_closed());
        assert_eq!(*recording.visibility.lock(), vec![(unit.id(), false)]);

        unit.set_visible(true);
        assert!(unit.is_visible());
        // no second attach happened
        assert_eq!(recording.attached.lock().len(), 1);
    }

    #[test]
    fn test_set_visible_same_value_is_silent() {
        let (_, dyn_layout) = layout();
        let unit = DockUnit::new("Camera");
        unit.dock(&dyn_layout, DockPos::Top, None);

        let count = Arc::new(Mutex::new(0));
        let count_clone = count.clone();
        unit.visibility_changed().connect(move |_| {
            *count_clone.lock() += 1;
        });

        unit.set_visible(true); // already visible
        assert_eq!(*count.lock(), 0);
    }

    #[test]
    fn test_focus_requires_dock() {
        let (recording, dyn_layout) = layout();
        let unit = DockUnit::new("Camera");

        unit.focus(); // not docked, no-op
        assert!(recording.focused.lock().is_empty());

        unit.dock(&dyn_layout, DockPos::Top, None);
        unit.focus();
        assert_eq!(*recording.focused.lock(), vec![unit.id()]);
    }

    #[test]
    fn test_restore_redocks_at_last_position() {
        let (recording, dyn_layout) = layout();
        let unit = DockUnit::new("Camera");
        let sibling = UnitId::next();

        unit.dock(&dyn_layout, DockPos::Center, Some(sibling));
        unit.close();
        unit.restore();

        assert!(!unit.is_closed());
        assert!(unit.is_docked());
        let attached = recording.attached.lock();
        assert_eq!(attached.len(), 2);
        assert_eq!(attached[1], (unit.id(), DockPos::Center, Some(sibling)));
    }

    #[test]
    fn test_restore_of_open_unit_focuses() {
        let (recording, dyn_layout) = layout();
        let unit = DockUnit::new("Camera");
        unit.dock(&dyn_layout, DockPos::Top, None);

        unit.restore();

        assert_eq!(recording.attached.lock().len(), 1);
        assert_eq!(*recording.focused.lock(), vec![unit.id()]);
    }

    #[test]
    fn test_restore_of_never_docked_unit_is_silent() {
        let unit = DockUnit::new("Camera");
        unit.restore();
        assert!(unit.is_closed());
    }
}
