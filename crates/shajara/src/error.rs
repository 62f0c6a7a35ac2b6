//! Error types for Shajara operations.
//!
//! Layout itself never fails; [`ShajaraError`] covers the edges around it:
//! reading member data, loading configuration and writing results.

use std::io;

use thiserror::Error;

/// The main error type for Shajara operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the offending source text next to the
/// [`serde_json::Error`], whose line and column locate the problem for rich
/// error reporting.
#[derive(Debug, Error)]
pub enum ShajaraError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid member data: {err}")]
    Parse { err: serde_json::Error, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[source] serde_json::Error),
}

impl ShajaraError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
