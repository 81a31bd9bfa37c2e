//! Error types for PIRCS
//!
//! Provides a unified error type for all codec operations.

use thiserror::Error;

/// Result type alias using PircsError
pub type Result<T> = std::result::Result<T, PircsError>;

/// Unified error type for PIRCS codec operations
#[derive(Debug, Error)]
pub enum PircsError {
    // -------------------------------------------------------------------------
    // Binary Codec Errors
    // -------------------------------------------------------------------------
    #[error("Buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },

    // -------------------------------------------------------------------------
    // Text Codec Errors
    // -------------------------------------------------------------------------
    #[error("Truncated input: expected {expected_pairs} key/value pairs, found {found_tokens} tokens")]
    TruncatedInput {
        expected_pairs: usize,
        found_tokens: usize,
    },

    #[error("Unrecognized field key: {0}")]
    UnrecognizedKey(String),

    #[error("Invalid integer for {key}: {value:?}")]
    InvalidInteger { key: String, value: String },

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Hex decode error: {0}")]
    Hex(String),

    #[error("Status character does not fit in a byte: {0:?}")]
    InvalidStatus(char),
}

impl From<hex::FromHexError> for PircsError {
    fn from(err: hex::FromHexError) -> Self {
        PircsError::Hex(err.to_string())
    }
}
