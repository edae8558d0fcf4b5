//! Error types for Chronoscope.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Chronoscope operations.
pub type Result<T> = std::result::Result<T, ChronoscopeError>;

/// Errors that can occur in Chronoscope.
#[derive(Debug, Error)]
pub enum ChronoscopeError {
    /// Generator was configured with an inverted year range.
    #[error("Invalid year bounds: {min}..={max}")]
    InvalidYearBounds { min: i32, max: i32 },

    /// A year outside the timeline bounds was requested.
    #[error("Year {year} outside {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    /// A playback speed outside the allowed range was requested.
    #[error("Speed {speed} outside {min}..={max}")]
    SpeedOutOfRange { speed: f64, min: f64, max: f64 },

    /// An imported dataset failed structural validation.
    #[error("Invalid dataset: {}", reasons.join("; "))]
    Validation { reasons: Vec<String> },

    /// Unsupported file format.
    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat { extension: String },

    /// Failed to open a file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChronoscopeError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create an UnsupportedFormat error.
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Create a Validation error from collected reasons.
    pub fn validation(reasons: Vec<String>) -> Self {
        Self::Validation { reasons }
    }
}
