//! Batch processing of PDF directories
//!
//! Walks an input directory, runs the table pipeline on every PDF, and
//! writes one workbook per document into the output directory. Documents
//! are independent, so the fan-out runs in parallel; a failure in one
//! document never touches its siblings.

use crate::{boundary, export, extractor, refine, structure, TableError};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// PDF files found in the input directory
    pub files_seen: usize,
    /// Documents whose workbook was actually saved
    pub processed: usize,
}

/// Process every PDF in `input`, writing workbooks into `output`.
///
/// The output directory is created if absent. Files are matched on a
/// case-insensitive `.pdf` extension and processed in name order. Only
/// documents whose workbook reached disk count as processed; everything
/// else is reported through the log and skipped.
pub fn process_directory(input: &Path, output: &Path) -> Result<BatchSummary, TableError> {
    fs::create_dir_all(output)?;

    let mut files: Vec<PathBuf> = fs::read_dir(input)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_pdf(path))
        .collect();
    files.sort();

    let processed = files
        .par_iter()
        .filter(|path| process_file(path.as_path(), output))
        .count();

    Ok(BatchSummary {
        files_seen: files.len(),
        processed,
    })
}

/// Run the full pipeline for one document. Returns true only if a workbook
/// was saved.
fn process_file(path: &Path, output_dir: &Path) -> bool {
    let name = path.display();

    let pages = match extractor::extract_pages(path) {
        Ok(pages) => pages,
        Err(e) => {
            log::warn!("{}: {}", name, e);
            return false;
        }
    };
    if pages.is_empty() {
        log::warn!("{}: no text extracted", name);
        return false;
    }

    let structured = structure::structure_pages(&pages);
    let candidates = boundary::detect_tables(&structured);
    let tables = refine::refine_tables(candidates);
    if tables.is_empty() {
        log::info!("{}: no tables found", name);
        return false;
    }

    let out = output_path(output_dir, path);
    match export::export_workbook(&tables, &out) {
        Ok(summary) => {
            log::info!(
                "{}: {} tables -> {}",
                name,
                summary.sheets_written,
                out.display()
            );
            true
        }
        Err(e) => {
            log::warn!("{}: {}", name, e);
            false
        }
    }
}

/// Workbook path for an input document: `{stem}_tables.xlsx` in the output
/// directory.
fn output_path(output_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    output_dir.join(format!("{}_tables.xlsx", stem))
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
