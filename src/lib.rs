//! Heuristic table extraction from text-based PDFs using lopdf
//!
//! This crate provides:
//! - Plain-text extraction from text-based PDFs, page by page
//! - Table detection from whitespace alignment (no grid lines needed)
//! - Refinement and validation of detected tables
//! - XLSX export, one sheet per table

pub mod batch;
pub mod boundary;
pub mod export;
pub mod extractor;
pub mod normalize;
pub mod refine;
pub mod structure;

pub use batch::{process_directory, BatchSummary};
pub use boundary::{detect_tables, CandidateTable, DetectOptions};
pub use export::{export_workbook, sanitize_sheet_name, ExportSummary};
pub use extractor::{extract_pages, extract_pages_mem, RawPage};
pub use normalize::normalize;
pub use refine::{refine_tables, RefineError, RefinedTable};
pub use structure::{structure_pages, StructuredLine, StructuredPage};

use std::path::Path;

/// Result of a full per-document run
#[derive(Debug)]
pub struct ProcessSummary {
    /// Refined tables found in the document
    pub tables_found: usize,
    /// Sheets actually written to the workbook
    pub sheets_written: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Run the detection pipeline over one PDF file.
///
/// Extract, structure, detect, refine: each stage consumes the previous
/// stage's output, so there is no per-document state object to manage. An
/// unreadable document is `TableError::Extraction`; a readable document
/// with no tables is an empty `Vec`, not an error.
pub fn extract_tables<P: AsRef<Path>>(path: P) -> Result<Vec<RefinedTable>, TableError> {
    let pages = extractor::extract_pages(path)?;
    refine_structured(&pages)
}

/// Run the detection pipeline over a PDF held in memory.
pub fn extract_tables_mem(buffer: &[u8]) -> Result<Vec<RefinedTable>, TableError> {
    let pages = extractor::extract_pages_mem(buffer)?;
    refine_structured(&pages)
}

fn refine_structured(pages: &[RawPage]) -> Result<Vec<RefinedTable>, TableError> {
    let structured = structure::structure_pages(pages);
    let candidates = boundary::detect_tables(&structured);
    Ok(refine::refine_tables(candidates))
}

/// Process one PDF end to end: extract tables and save them as a workbook.
///
/// A document with no refined tables is `TableError::NoTablesFound` and no
/// output file is created.
pub fn process_pdf<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<ProcessSummary, TableError> {
    let start = std::time::Instant::now();

    let tables = extract_tables(input)?;
    if tables.is_empty() {
        return Err(TableError::NoTablesFound);
    }

    let exported = export::export_workbook(&tables, output.as_ref())?;

    Ok(ProcessSummary {
        tables_found: tables.len(),
        sheets_written: exported.sheets_written,
        processing_time_ms: start.elapsed().as_millis() as u64,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF extraction error: {0}")]
    Extraction(String),
    #[error("no tables found")]
    NoTablesFound,
    #[error("workbook save error: {0}")]
    WorkbookSave(String),
}

impl From<lopdf::Error> for TableError {
    fn from(e: lopdf::Error) -> Self {
        TableError::Extraction(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for TableError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        TableError::WorkbookSave(e.to_string())
    }
}
