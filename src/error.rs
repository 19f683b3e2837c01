//! Error types for jtd-infer
//!
//! This module defines the error hierarchy for the whole crate.
//! All fallible public APIs return `Result<T, Error>` where Error is defined
//! here. The inference core itself never fails: a shape conflict widens the
//! inferred schema instead of producing an error, so everything below exists
//! for the boundary (decoding input rows, loading hint files, I/O).

use thiserror::Error;

/// The main error type for jtd-infer
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Input Decoding Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to decode row at line {line}: {message}")]
    RowDecode { line: usize, message: String },

    // ============================================================================
    // Hint Configuration Errors
    // ============================================================================
    #[error("Failed to parse hints file: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Unknown number type: {value}")]
    UnknownNumType { value: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a row decode error
    pub fn row_decode(line: usize, message: impl Into<String>) -> Self {
        Self::RowDecode {
            line,
            message: message.into(),
        }
    }

    /// Create an unknown number type error
    pub fn unknown_num_type(value: impl Into<String>) -> Self {
        Self::UnknownNumType {
            value: value.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a generic error from a message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

/// Result type alias for jtd-infer
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
