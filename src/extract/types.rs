//! Upload types for text extraction

use mime_guess::mime;
use serde::{Deserialize, Serialize};

/// A user-supplied file: raw bytes plus the declared media type.
///
/// The file has no identity beyond the single extraction call; nothing is
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    /// Original file name
    pub file_name: String,

    /// Declared media type (e.g. `application/pdf`)
    pub media_type: String,

    /// Raw file bytes
    pub data: Vec<u8>,
}

impl UploadedFile {
    /// Create an uploaded file from its parts
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            data,
        }
    }

    /// Whether the declared media type is `application/pdf`.
    ///
    /// Compared by mime essence, so parameters and case differences are
    /// tolerated. An unparseable media type is not a PDF.
    pub fn is_pdf(&self) -> bool {
        self.media_type
            .parse::<mime::Mime>()
            .map(|m| m.type_() == mime::APPLICATION && m.subtype() == mime::PDF)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_with_type(media_type: &str) -> UploadedFile {
        UploadedFile::new("sample.pdf", media_type, b"%PDF-".to_vec())
    }

    #[test]
    fn test_pdf_media_type_accepted() {
        assert!(file_with_type("application/pdf").is_pdf());
    }

    #[test]
    fn test_media_type_parameters_and_case_tolerated() {
        assert!(file_with_type("application/pdf; charset=binary").is_pdf());
        assert!(file_with_type("Application/PDF").is_pdf());
    }

    #[test]
    fn test_non_pdf_media_types_rejected() {
        assert!(!file_with_type("text/plain").is_pdf());
        assert!(!file_with_type("application/epub+zip").is_pdf());
        assert!(!file_with_type("").is_pdf());
        assert!(!file_with_type("not a mime type").is_pdf());
    }
}
