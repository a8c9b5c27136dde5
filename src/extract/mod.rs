//! PDF text extraction
//!
//! Validates an uploaded file and produces its full text content: pages in
//! original order, fragments within a page joined by single spaces, one
//! newline per page. The parsing engine sits behind the [`PdfBackend`]
//! seam; [`LopdfBackend`] is the stock implementation.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dictado::extract::{PdfTextExtractor, UploadedFile};
//!
//! let extractor = PdfTextExtractor::default();
//! let file = UploadedFile::new("paper.pdf", "application/pdf", bytes);
//! let text = extractor.extract(Some(&file)).await?;
//! ```

mod backend;
mod error;
mod extractor;
mod pdf;
mod types;

pub use backend::{PdfBackend, PdfDocument};
pub use error::{ExtractError, Result};
pub use extractor::PdfTextExtractor;
pub use pdf::LopdfBackend;
pub use types::UploadedFile;
