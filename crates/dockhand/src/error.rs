//! Error types for Dockhand.

use thiserror::Error;

/// The main error type for Dockhand operations.
///
/// The failure taxonomy is deliberately narrow: "no matching entity"
/// conditions (closing a node with no live representation, adding a menu
/// entry to a group that does not exist, ...) are silent no-ops rather
/// than errors. The one fallible surface is top-level window creation at
/// the [`WindowHost`](crate::window::WindowHost) boundary.
#[derive(Debug, Error)]
pub enum DockhandError {
    /// The window host failed to create a top-level window.
    #[error("failed to create window: {0}")]
    WindowCreation(String),
}

/// A specialized Result type for Dockhand operations.
pub type Result<T> = std::result::Result<T, DockhandError>;
