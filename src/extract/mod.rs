//! Text extraction collaborator
//!
//! The server treats the PDF text extractor as a black box behind the
//! [`TextExtractor`] trait: bytes in, an ordered sequence of text units out.
//! The production implementation is [`PdfTextExtractor`]; tests substitute
//! scripted fakes.

mod pdf;

pub use pdf::PdfTextExtractor;

use thiserror::Error;

/// One detected text block, tagged with the source page it came from.
///
/// Ephemeral: produced by the extractor, consumed by the filter and
/// paginator, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextUnit {
    pub content: String,
    /// 1-based index of the source PDF page this block was found on.
    pub source_page: usize,
}

/// Result of extracting one document.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    /// Number of pages in the source PDF.
    pub source_page_count: usize,
    /// Text units in document order.
    pub units: Vec<TextUnit>,
}

/// Extraction failures
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to parse PDF: {0}")]
    Parse(String),
}

/// Contract for the text-extraction collaborator.
pub trait TextExtractor: Send + Sync {
    /// Extract the ordered text units of a document.
    ///
    /// An empty or image-only document yields zero units, not an error.
    fn extract(&self, data: &[u8]) -> Result<ExtractedDocument, ExtractError>;
}
