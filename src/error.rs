//! Custom error types for trial-balance
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for trial-balance operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Ledger data that breaks the contract with the engine
    #[error("Validation error: {0}")]
    Validation(String),

    /// CSV import errors
    #[error("Import error on line {line}: {message}")]
    Import { line: u64, message: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal consistency failure inside the balance engine
    #[error("Internal consistency failure: {0}")]
    Integrity(String),

    /// A debit, credit or balance total that does not fit in the amount type
    #[error("Amount overflow: {0}")]
    Overflow(String),
}

impl LedgerError {
    /// Create an import error for a given line
    pub fn import(line: u64, message: impl Into<String>) -> Self {
        Self::Import {
            line,
            message: message.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an internal consistency failure
    pub fn is_integrity(&self) -> bool {
        matches!(self, Self::Integrity(_))
    }

    /// Check if this is an amount overflow
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        Self::Import {
            line,
            message: err.to_string(),
        }
    }
}

/// Result type alias for trial-balance operations
pub type LedgerResult<T> = Result<T, LedgerError>;
