//! Error types shared across the workspace.
//!
//! The `BoardError` enum covers every way a render cycle can fail: the data source
//! being unreachable, answering with a non-success status, or sending a body that is
//! not a list of quotes; plus the local failures of writing the table itself.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type for fetching, decoding and rendering quotes.
#[derive(Error, Debug)]
pub enum BoardError {
    /// I/O error originating from files or sockets.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Response body was not valid JSON or did not match the quote shape.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The HTTP request could not be completed (connection refused, timeout, ...).
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The endpoint answered with a non-success status.
    #[error("{url} answered with status {status}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// Unknown locale name for digit grouping.
    #[error("Unknown locale: {0}")]
    Locale(String),

    /// The output target the table body lives in does not exist.
    #[error("Table target not found: {0}")]
    MissingTable(String),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Error indicating a poisoned mutex was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),

    /// Installing the interrupt handler failed.
    #[error("Signal handler error: {0}")]
    Signal(String),
}

impl<T> From<PoisonError<T>> for BoardError {
    fn from(err: PoisonError<T>) -> Self {
        BoardError::MutexLock(err.to_string())
    }
}
