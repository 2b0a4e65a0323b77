//! Error types for the rif-core library.
//!
//! The extraction engine itself has no fatal error class: every narrative,
//! however malformed, yields a well-formed record. Errors exist only at the
//! edges, where configuration files and serialized output touch the
//! filesystem.

use thiserror::Error;

/// Main error type for the rif library.
#[derive(Error, Debug)]
pub enum RifError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the rif library.
pub type Result<T> = std::result::Result<T, RifError>;
