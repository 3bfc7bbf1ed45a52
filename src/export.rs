//! Workbook export: one sheet per refined table
//!
//! Serializes refined tables to an xlsx workbook. Sheet names are derived
//! from page number and table index and sanitized against spreadsheet
//! naming rules; column widths are sized from the cell grid.

use crate::normalize::normalize;
use crate::refine::RefinedTable;
use crate::TableError;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use std::path::Path;

/// Characters spreadsheet sheet names must not contain.
const FORBIDDEN_SHEET_CHARS: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

/// Longest sheet name spreadsheet applications accept.
const MAX_SHEET_NAME_LEN: usize = 31;

/// Extra characters added to the widest cell before scaling.
const WIDTH_PADDING: usize = 2;

/// Visual scale factor applied to character counts.
const WIDTH_SCALE: f64 = 1.2;

/// Outcome of a workbook export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// Sheets successfully written
    pub sheets_written: usize,
    /// Sheets skipped because of per-sheet serialization faults
    pub sheets_skipped: usize,
}

/// Write one sheet per table and save the workbook at `path`.
///
/// An empty table set is `TableError::NoTablesFound` and produces no file.
/// A fault in a single sheet is logged and skipped; the save only happens
/// when at least one sheet was written, so a failed run never leaves a
/// partial workbook behind.
pub fn export_workbook(tables: &[RefinedTable], path: &Path) -> Result<ExportSummary, TableError> {
    if tables.is_empty() {
        return Err(TableError::NoTablesFound);
    }

    let mut workbook = Workbook::new();
    let mut summary = ExportSummary {
        sheets_written: 0,
        sheets_skipped: 0,
    };

    for (i, table) in tables.iter().enumerate() {
        let index = i + 1;
        let name = sheet_name(table.page, index);
        let worksheet = workbook.add_worksheet();

        match write_sheet(worksheet, table, &name) {
            Ok(()) => summary.sheets_written += 1,
            Err(e) => {
                log::warn!("sheet {}: export failed: {}", name, e);
                summary.sheets_skipped += 1;
            }
        }
    }

    if summary.sheets_written == 0 {
        return Err(TableError::NoTablesFound);
    }

    // Serialize fully in memory first so a failed save cannot leave a
    // truncated workbook behind.
    let buffer = workbook.save_to_buffer()?;
    std::fs::write(path, buffer).map_err(|e| TableError::WorkbookSave(e.to_string()))?;
    Ok(summary)
}

/// Serialize one table into a worksheet.
fn write_sheet(
    worksheet: &mut Worksheet,
    table: &RefinedTable,
    name: &str,
) -> Result<(), XlsxError> {
    worksheet.set_name(name)?;

    for (col, column) in table.columns.iter().enumerate() {
        worksheet.write_string(0, col as u16, normalize(column))?;
    }
    for (r, row) in table.rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            if let Some(value) = cell {
                worksheet.write_string((r + 1) as u32, col as u16, normalize(value))?;
            }
        }
    }

    for (col, width) in column_widths(table).iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    Ok(())
}

/// Build the sheet name for table `index` (1-based across the document).
fn sheet_name(page: u32, index: usize) -> String {
    let name = sanitize_sheet_name(&format!("Page_{}_Table_{}", page, index));
    if name.trim().is_empty() {
        format!("Table_{}", index)
    } else {
        name
    }
}

/// Strip characters disallowed in sheet names and truncate to 31 characters.
pub fn sanitize_sheet_name(name: &str) -> String {
    name.chars()
        .filter(|c| !FORBIDDEN_SHEET_CHARS.contains(c))
        .take(MAX_SHEET_NAME_LEN)
        .collect()
}

/// Display width per column: widest cell (header included) plus padding,
/// scaled. Pure over the cell grid; missing cells count as width zero.
pub fn column_widths(table: &RefinedTable) -> Vec<f64> {
    (0..table.width())
        .map(|col| {
            let mut longest = table.columns[col].chars().count();
            for row in &table.rows {
                if let Some(value) = &row[col] {
                    longest = longest.max(value.chars().count());
                }
            }
            (longest + WIDTH_PADDING) as f64 * WIDTH_SCALE
        })
        .collect()
}
