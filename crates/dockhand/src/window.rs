//! Top-level window boundary.
//!
//! Floating a node puts its content into a real top-level window owned by
//! the host toolkit. Dockhand only asks for the window, remembers its id,
//! and reacts to user-initiated close requests through the registered
//! close handler.

use crate::error::Result;
use crate::node::ContentId;

/// A position in host screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Opaque id of a host-owned top-level window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostWindowId(u64);

impl HostWindowId {
    /// Create a window id from a raw value.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Convert the id to its raw value.
    #[inline]
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

/// The contract Dockhand consumes from the host windowing layer.
///
/// Implementations must apply each call synchronously on the UI-owning
/// thread.
pub trait WindowHost: Send + Sync {
    /// The current origin of the application's main window.
    fn main_window_origin(&self) -> Point;

    /// Open a top-level window at `origin` showing `content`.
    fn open_window(
        &self,
        title: &str,
        content: Option<ContentId>,
        origin: Point,
    ) -> Result<HostWindowId>;

    /// Bring a window to the front.
    fn focus_window(&self, id: HostWindowId);

    /// Close a window programmatically.
    ///
    /// Must NOT fire the window's close handler; the handler is reserved
    /// for user-initiated close requests.
    fn close_window(&self, id: HostWindowId);

    /// Register the callback fired when the user asks to close the window.
    fn set_close_handler(&self, id: HostWindowId, handler: Box<dyn Fn() + Send + Sync>);
}
