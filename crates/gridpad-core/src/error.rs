//! Error types for gridpad-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridpad-core
#[derive(Debug, Error)]
pub enum Error {
    /// Row index out of bounds
    #[error("Invalid row index: {index} (row count: {len})")]
    RowOutOfBounds { index: usize, len: usize },

    /// Column key does not match any declared column
    #[error("Invalid column key: {0}")]
    UnknownColumnKey(String),

    /// Column key already exists on add
    #[error("Column key already exists: {0}")]
    DuplicateColumnKey(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// True when the error was caused by the caller's input rather than an
    /// internal fault. Lets a transport layer pick a client- or
    /// server-error response class without inspecting messages.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::RowOutOfBounds { .. }
                | Error::UnknownColumnKey(_)
                | Error::DuplicateColumnKey(_)
        )
    }
}
