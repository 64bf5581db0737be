//! Error types for Tally operations.

use tally_types::UserId;

/// Errors returned by the fallible Tally operations.
///
/// Extremum search has no error of its own: empty input is `None`, and a
/// failing key function's error is handed back unchanged.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Writing an output line failed.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// A user failed save validation because a required field is empty.
    #[error("Cannot save user {id}: empty {field}")]
    EmptyField { id: UserId, field: &'static str },
}

/// Result type for Tally operations.
pub type Result<T> = std::result::Result<T, Error>;
