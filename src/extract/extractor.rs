//! PDF text extraction flow
//!
//! Validates an uploaded file, opens it through the configured backend and
//! walks the pages strictly in order, concatenating their text.

use std::sync::Arc;

use super::backend::{PdfBackend, PdfDocument};
use super::error::{ExtractError, Result};
use super::pdf::LopdfBackend;
use super::types::UploadedFile;

/// Extracts the full text content of uploaded PDF files.
///
/// The parsing engine is injected as a [`PdfBackend`]; the extractor only
/// validates input and drives the sequential page loop.
pub struct PdfTextExtractor {
    backend: Arc<dyn PdfBackend>,
}

impl Default for PdfTextExtractor {
    fn default() -> Self {
        Self::new(Arc::new(LopdfBackend))
    }
}

impl PdfTextExtractor {
    /// Create an extractor over the given parsing backend
    pub fn new(backend: Arc<dyn PdfBackend>) -> Self {
        Self { backend }
    }

    /// Extract the full text of an uploaded PDF.
    ///
    /// Pages appear in original order, the fragments of each page joined by
    /// single spaces and the page terminated by a newline. Fails with
    /// [`ExtractError::InvalidInput`] before any parsing when the file is
    /// absent or not declared as `application/pdf`, and with
    /// [`ExtractError::ExtractionFailure`] on any downstream failure; no
    /// partial result is ever returned.
    pub async fn extract(&self, file: Option<&UploadedFile>) -> Result<String> {
        let pages = self.extract_pages(file).await?;

        let mut full_text = String::new();
        for page_text in pages {
            full_text.push_str(&page_text);
            full_text.push('\n');
        }
        Ok(full_text)
    }

    /// Extract per-page text, one string per page in original order.
    ///
    /// Same validation and error policy as [`extract`](Self::extract); the
    /// page strings carry no trailing newline.
    pub async fn extract_pages(&self, file: Option<&UploadedFile>) -> Result<Vec<String>> {
        let file = Self::validate(file)?;

        let doc = self.open(file).await?;
        let page_count = doc.page_count();

        let mut pages = Vec::with_capacity(page_count);
        // Page n+1 is not touched until page n has been appended
        for page_number in 1..=page_count {
            let fragments = doc.page_fragments(page_number).await.map_err(|e| {
                tracing::error!(page = page_number, error = %e, "page text retrieval failed");
                e
            })?;
            pages.push(fragments.join(" "));
        }
        Ok(pages)
    }

    /// Page count of an uploaded PDF, under the same validation rules
    pub async fn page_count(&self, file: Option<&UploadedFile>) -> Result<usize> {
        let file = Self::validate(file)?;
        Ok(self.open(file).await?.page_count())
    }

    fn validate(file: Option<&UploadedFile>) -> Result<&UploadedFile> {
        let file = file.ok_or_else(|| ExtractError::InvalidInput("no file provided".to_string()))?;

        if !file.is_pdf() {
            tracing::error!(media_type = %file.media_type, "invalid file type");
            return Err(ExtractError::InvalidInput(
                "please upload a PDF file".to_string(),
            ));
        }
        Ok(file)
    }

    async fn open(&self, file: &UploadedFile) -> Result<Box<dyn PdfDocument>> {
        self.backend.open(file.data.clone()).await.map_err(|e| {
            tracing::error!(file_name = %file.file_name, error = %e, "failed to parse PDF");
            e
        })
    }
}
