//! Bridge lifecycle error types

use thiserror::Error;

/// Lifecycle misuse errors
///
/// The bridge has no recoverable-error taxonomy beyond these:
/// configuration fields are present or absent, and invalid placements or
/// modes are unrepresentable. What remains is calling into a panel that
/// has no element yet (or mounting twice), which fails loudly to surface
/// integration bugs early.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelError {
    /// Operation requires a mounted element
    #[error("panel is not mounted")]
    NotMounted,

    /// The panel already owns an element
    #[error("panel is already mounted")]
    AlreadyMounted,
}

/// Result type for panel lifecycle operations
pub type Result<T> = std::result::Result<T, PanelError>;
