//! Error types for the tareas-board crate.
//!
//! Board operations themselves never fail: missing targets and malformed
//! indices are no-ops or get clamped. Errors only arise when text coming
//! from a form or a configuration file is parsed into board types.

use thiserror::Error;

/// Errors that can occur when parsing board input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The edit form named a field that cannot be edited.
    #[error("unknown task field: {0}")]
    UnknownField(String),

    /// A priority name was not recognised.
    #[error("invalid priority: {0}")]
    InvalidPriority(String),

    /// A status (column) name was not recognised.
    #[error("invalid status: {0}")]
    InvalidStatus(String),
}

/// A specialized Result type for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = BoardError::UnknownField("status".to_string());
        assert_eq!(err.to_string(), "unknown task field: status");

        let err = BoardError::InvalidPriority("urgent".to_string());
        assert_eq!(err.to_string(), "invalid priority: urgent");

        let err = BoardError::InvalidStatus("archived".to_string());
        assert!(err.to_string().contains("archived"));
    }
}
