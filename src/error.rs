//! Custom error types for spendview
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! Note that a malformed CSV row is *not* an error at this level: row failures
//! are recovered by skipping the row and are carried as diagnostics in the
//! ingest outcome (see [`crate::ingest::MalformedRow`]). Only conditions that
//! abort an operation outright live here.

use thiserror::Error;

/// The main error type for spendview operations
#[derive(Error, Debug)]
pub enum SpendviewError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A required CSV header column is absent; the whole upload is rejected
    #[error("Missing required column: {column}")]
    MissingColumn { column: &'static str },

    /// CSV-level read errors (broken quoting, unreadable input)
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for user-supplied arguments
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SpendviewError {
    /// Create a missing-column error for a required header
    pub fn missing_column(column: &'static str) -> Self {
        Self::MissingColumn { column }
    }

    /// Check if this is a missing-column error
    pub fn is_missing_column(&self) -> bool {
        matches!(self, Self::MissingColumn { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SpendviewError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SpendviewError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for SpendviewError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for spendview operations
pub type SpendviewResult<T> = Result<T, SpendviewError>;
