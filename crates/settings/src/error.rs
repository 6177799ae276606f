//! Error types for loading stored settings.

use thiserror::Error;

/// Errors that can occur while reading a settings object
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Settings file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Text is not a JSON object of the expected shape
    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A required field is absent. Stored settings are never defaulted.
    #[error("Missing settings field: {field}")]
    MissingField { field: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SettingsError>;
