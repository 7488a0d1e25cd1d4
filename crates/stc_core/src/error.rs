//! Error types for stc_core

use thiserror::Error;

/// Errors raised by the core runtime
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Instance id prefixes must be non-empty and free of whitespace
    #[error("invalid instance id prefix: {0:?}")]
    InvalidIdPrefix(String),

    /// The document a listener was registered on no longer exists
    #[error("listener registry has been dropped")]
    RegistryClosed,

    /// The listener was already removed from its document
    #[error("listener {0} is not registered")]
    UnknownListener(String),
}

/// Result type for stc_core operations
pub type Result<T> = std::result::Result<T, CoreError>;
