//! Logging facilities for Dockhand.
//!
//! Dockhand uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! Every subsystem logs under its own target so traces can be filtered with
//! standard `tracing` directives, e.g. `RUST_LOG=dockhand::manager=debug`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "dockhand_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "dockhand_core::signal";
    /// Observable collection target.
    pub const COLLECTION: &str = "dockhand_core::collection";
    /// Node registry target.
    pub const REGISTRY: &str = "dockhand::registry";
    /// Dock unit state target.
    pub const UNIT: &str = "dockhand::unit";
    /// View menu mirror target.
    pub const MENU: &str = "dockhand::menu";
    /// Lifecycle manager target.
    pub const MANAGER: &str = "dockhand::manager";
}
