//! Error types for the todo domain model.
//!
//! # Design
//! `InvalidTitle` and `IndexOutOfRange` are ordinary, recoverable outcomes the
//! caller turns into a user-facing response. `Integrity` means a session
//! record did not have the expected shape; callers treat it as an internal
//! failure for the request rather than something the user can fix.

use thiserror::Error;

pub type Result<T, E = TodoError> = std::result::Result<T, E>;

/// Errors returned by entity constructors, mutators and rehydration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Title was empty or longer than `MAX_TITLE_CHARS`.
    #[error("title must be between 1 and {max} characters, got {len}")]
    InvalidTitle { len: usize, max: usize },

    /// `remove_at` was called with a position past the end of the list.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A persisted session record could not be turned back into entities.
    #[error("malformed session record: {0}")]
    Integrity(String),
}

impl From<serde_json::Error> for TodoError {
    fn from(e: serde_json::Error) -> Self {
        TodoError::Integrity(e.to_string())
    }
}
