//! Parser seam for PDF text extraction
//!
//! The extractor never touches a PDF library directly; it goes through
//! these traits so the parsing engine stays an external collaborator and
//! the extraction flow is testable without real documents.

use async_trait::async_trait;

use super::error::Result;

/// Opens raw PDF bytes into a readable document handle.
#[async_trait]
pub trait PdfBackend: Send + Sync {
    /// Parse the byte stream and return a document handle.
    ///
    /// Any parse failure surfaces as `ExtractError::ExtractionFailure`.
    async fn open(&self, data: Vec<u8>) -> Result<Box<dyn PdfDocument>>;
}

/// A parsed, externally-owned document. Read-only.
#[async_trait]
pub trait PdfDocument: Send + Sync {
    /// Total number of pages
    fn page_count(&self) -> usize;

    /// Text fragments of one page, in reading order.
    ///
    /// `page_number` is 1-indexed, matching PDF page numbering. A page with
    /// no text yields an empty list, not an error.
    async fn page_fragments(&self, page_number: usize) -> Result<Vec<String>>;
}
