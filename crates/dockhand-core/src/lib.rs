//! Core systems for Dockhand.
//!
//! This crate provides the foundational pieces of the Dockhand panel
//! lifecycle manager:
//!
//! - **Signal/Slot System**: Type-safe, synchronous inter-component
//!   notification ([`Signal`])
//! - **Observable Collections**: Ordered sequences with add/remove
//!   notification ([`ObservableList`])
//! - **Logging**: `tracing` target constants for per-subsystem filtering
//!
//! Everything here assumes Dockhand's single-threaded cooperative model:
//! emission and notification are synchronous and complete before the
//! triggering call returns.
//!
//! # Signal/Slot Example
//!
//! ```
//! use dockhand_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Observable Collection Example
//!
//! ```
//! use dockhand_core::ObservableList;
//!
//! let list = ObservableList::<String>::new();
//! list.item_added().connect(|item| {
//!     println!("added: {}", item);
//! });
//! list.push("console".to_string());
//! assert_eq!(list.len(), 1);
//! ```

pub mod collection;
pub mod logging;
pub mod signal;

pub use collection::ObservableList;
pub use signal::{ConnectionId, Signal};
