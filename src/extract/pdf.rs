//! PDF text extraction backed by the `pdf-extract` crate.
//!
//! Uses the per-page extraction API so page boundaries survive: one string
//! per source page, each split into text blocks on blank lines. The
//! whole-document API is unsuitable here because it concatenates pages
//! without a separator.

use super::{ExtractError, ExtractedDocument, TextExtractor, TextUnit};

/// Production extractor for PDF uploads.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, data: &[u8]) -> Result<ExtractedDocument, ExtractError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(data)
            .map_err(|e| ExtractError::Parse(e.to_string()))?;

        let source_page_count = pages.len();

        let mut units = Vec::new();
        for (page_idx, page) in pages.iter().enumerate() {
            for block in page.split("\n\n") {
                if block.trim().is_empty() {
                    continue;
                }
                units.push(TextUnit {
                    content: block.to_string(),
                    source_page: page_idx + 1,
                });
            }
        }

        Ok(ExtractedDocument {
            source_page_count,
            units,
        })
    }
}
