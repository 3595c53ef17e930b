//! Error types for the inspection adapters.
//!
//! The flattening engine itself does not produce recoverable errors: handing
//! it a non-record value is API misuse and panics (see
//! [`Flattener::flatten`](crate::Flattener::flatten)). Errors here come from
//! the thin adapter layer (JSON encoding, file I/O for snapshots, and the
//! serde bridge), and the public adapter entry points swallow them by
//! design. The internal fallible functions return [`Result`] so the
//! swallowed-error path stays testable.

use std::fmt;
use thiserror::Error;

/// Errors produced by the adapter layer and the serde bridge.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during snapshot or table writing
    #[error("IO error: {0}")]
    Io(String),

    /// JSON encoding failure
    #[error("JSON error: {0}")]
    Json(String),

    /// Value cannot be represented in the dynamic value model
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a JSON encoding error.
    pub fn json<T: fmt::Display>(msg: T) -> Self {
        Error::Json(msg.to_string())
    }

    /// Creates an unsupported type error for values the dynamic model cannot hold.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_inspect::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
