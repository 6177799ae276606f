//! Error types for the metadata crate.
//!
//! None of these escape [`crate::extract`]: a bad payload is logged and the
//! extractor falls back to visible markup. They are public so callers that
//! decode element ids or parse payloads directly can react to them.

use thiserror::Error;

/// Errors that can occur while decoding page metadata.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// The embedded payload is not valid JSON of the expected shape
    #[error("Malformed description payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// A payload key or element id did not decode to a submission id
    ///
    /// Stores the raw text so the caller can report which element was bad
    #[error("Invalid submission identifier: {raw}")]
    InvalidIdentifier { raw: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, MetadataError>;
