//! Line structuring: from page text to candidate column values
//!
//! PDFs carry no table markup, but text extracted from a layout-preserving
//! source keeps column alignment as runs of spaces. Splitting each line on
//! runs of 2+ whitespace characters recovers the candidate column values
//! ("parts") that the boundary detector works with.

use crate::extractor::RawPage;
use crate::normalize::normalize;

/// One line of page text in parsed form.
#[derive(Debug, Clone)]
pub struct StructuredLine {
    /// The normalized line text
    pub text: String,
    /// Candidate column values, split on 2+-whitespace runs
    pub parts: Vec<String>,
    /// Owning page number (1-indexed)
    pub page: u32,
}

impl StructuredLine {
    /// Number of candidate column values on this line.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }
}

/// All structured lines of one page, in reading order.
#[derive(Debug, Clone)]
pub struct StructuredPage {
    /// Page number (1-indexed)
    pub number: u32,
    /// Lines with at least some extracted text; empty lines are dropped
    pub lines: Vec<StructuredLine>,
}

/// Structure every page's lines, preserving page order and line order.
///
/// Lines that normalize to the empty string are skipped entirely; a line
/// with no 2+-whitespace run yields exactly one part.
pub fn structure_pages(pages: &[RawPage]) -> Vec<StructuredPage> {
    pages
        .iter()
        .map(|page| StructuredPage {
            number: page.number,
            lines: page
                .lines
                .iter()
                .filter_map(|line| structure_line(line, page.number))
                .collect(),
        })
        .collect()
}

/// Parse a single line, or None if it holds no text.
fn structure_line(line: &str, page: u32) -> Option<StructuredLine> {
    let text = normalize(line);
    if text.is_empty() {
        return None;
    }
    let parts = split_parts(&text);
    Some(StructuredLine { text, parts, page })
}

/// Split a normalized line on runs of 2 or more whitespace characters.
fn split_parts(text: &str) -> Vec<String> {
    use once_cell::sync::Lazy;
    use regex::Regex;

    static COLUMN_GAP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

    COLUMN_GAP_RE
        .split(text)
        .map(|part| part.to_string())
        .collect()
}
