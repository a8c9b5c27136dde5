//! Extraction error types

use thiserror::Error;

/// Errors raised by the PDF text extraction flow.
///
/// Exactly two kinds exist: input that was rejected before any parsing
/// happened, and a downstream failure wrapped with the cause's message.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Missing file or wrong declared media type
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Byte reading, document parsing, or page/text retrieval failed
    #[error("error reading PDF file: {0}")]
    ExtractionFailure(String),
}

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

impl From<lopdf::Error> for ExtractError {
    fn from(err: lopdf::Error) -> Self {
        ExtractError::ExtractionFailure(err.to_string())
    }
}
