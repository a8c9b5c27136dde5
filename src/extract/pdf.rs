//! PDF backend over lopdf
//!
//! Pure-Rust parsing; CPU-bound load and text calls are offloaded to
//! blocking tasks so the sequential page loop never stalls the runtime.

use std::sync::Arc;

use async_trait::async_trait;
use lopdf::Document;

use super::backend::{PdfBackend, PdfDocument};
use super::error::{ExtractError, Result};

/// Backend that parses documents with the `lopdf` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfBackend;

#[async_trait]
impl PdfBackend for LopdfBackend {
    async fn open(&self, data: Vec<u8>) -> Result<Box<dyn PdfDocument>> {
        let doc = tokio::task::spawn_blocking(move || Document::load_mem(&data))
            .await
            .map_err(|e| ExtractError::ExtractionFailure(format!("task join error: {}", e)))??;

        Ok(Box::new(LoadedDocument {
            doc: Arc::new(doc),
        }))
    }
}

/// Document handle holding the parsed lopdf object model
struct LoadedDocument {
    doc: Arc<Document>,
}

#[async_trait]
impl PdfDocument for LoadedDocument {
    fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    async fn page_fragments(&self, page_number: usize) -> Result<Vec<String>> {
        let doc = self.doc.clone();
        let page = page_number as u32;

        let text = tokio::task::spawn_blocking(move || doc.extract_text(&[page]))
            .await
            .map_err(|e| ExtractError::ExtractionFailure(format!("task join error: {}", e)))??;

        // lopdf emits one line per text run; each non-empty line is a fragment
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }
}
