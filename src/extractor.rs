//! Plain-text extraction from PDF using lopdf
//!
//! The table pipeline works on page-ordered plain text; positions, fonts,
//! and encodings stay inside lopdf. This module wraps that boundary: load a
//! document, pull each page's text, hand back cleaned lines per page.

use crate::normalize::normalize;
use crate::TableError;
use lopdf::Document;
use std::path::Path;

/// One page of extracted text, split into normalized lines.
///
/// Page numbers are 1-based. Pages whose raw extracted text is empty are
/// skipped entirely and never appear in the output sequence.
#[derive(Debug, Clone)]
pub struct RawPage {
    /// Page number (1-indexed)
    pub number: u32,
    /// Normalized text lines in reading order; may contain empty lines
    pub lines: Vec<String>,
}

/// Extract per-page text from a PDF file.
pub fn extract_pages<P: AsRef<Path>>(path: P) -> Result<Vec<RawPage>, TableError> {
    let doc = Document::load(path)?;
    pages_from_doc(&doc)
}

/// Extract per-page text from a PDF held in memory.
pub fn extract_pages_mem(buffer: &[u8]) -> Result<Vec<RawPage>, TableError> {
    let doc = Document::load_mem(buffer)?;
    pages_from_doc(&doc)
}

/// Pull text from each page of a loaded document.
///
/// A page that fails to extract is logged and treated as empty rather than
/// failing the whole document; only a document that cannot be loaded at all
/// surfaces as an error to the caller.
fn pages_from_doc(doc: &Document) -> Result<Vec<RawPage>, TableError> {
    let mut pages = Vec::new();
    let page_ids = doc.get_pages();

    for (&page_num, _) in page_ids.iter() {
        let text = match doc.extract_text(&[page_num]) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("page {}: text extraction failed: {}", page_num, e);
                continue;
            }
        };

        if text.trim().is_empty() {
            continue;
        }

        let lines: Vec<String> = text.lines().map(normalize).collect();
        pages.push(RawPage {
            number: page_num,
            lines,
        });
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_pdf_is_extraction_error() {
        let err = extract_pages_mem(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, TableError::Extraction(_)));
    }

    #[test]
    fn test_empty_buffer_is_extraction_error() {
        assert!(extract_pages_mem(&[]).is_err());
    }
}
