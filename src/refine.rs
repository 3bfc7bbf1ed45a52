//! Table refinement: from candidate to validated table
//!
//! Cleans each candidate table and rejects degenerate ones. Empty cells
//! become an explicit missing marker (`None`), all-missing rows and columns
//! are pruned, and anything left with fewer than two columns or no rows is
//! dropped.

use crate::boundary::CandidateTable;
use crate::normalize::normalize;

/// Why a candidate table did not survive refinement
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RefineError {
    /// A row's width disagrees with the header. The boundary detector never
    /// produces this; it guards against hand-built candidates.
    #[error("row {row} has {found} values, header has {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Too little survived pruning to call the result a table
    #[error("degenerate table: {columns} columns, {rows} rows after pruning")]
    Degenerate { columns: usize, rows: usize },
}

/// A validated, cleaned table ready for export.
///
/// `None` cells mark values that were empty in the source. Invariants: at
/// least 2 columns, at least 1 row, and no row or column entirely `None`.
#[derive(Debug, Clone)]
pub struct RefinedTable {
    /// Page the table was detected on (1-indexed)
    pub page: u32,
    /// Surviving column names
    pub columns: Vec<String>,
    /// Data rows, each exactly `columns.len()` cells wide
    pub rows: Vec<Vec<Option<String>>>,
}

impl RefinedTable {
    /// Number of surviving columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }
}

/// Refine every candidate, logging and skipping the ones that fail.
///
/// Faults are isolated per table: a shape fault or degenerate shape in one
/// candidate never affects its siblings.
pub fn refine_tables(candidates: Vec<CandidateTable>) -> Vec<RefinedTable> {
    candidates
        .iter()
        .filter_map(|candidate| match refine_table(candidate) {
            Ok(table) => Some(table),
            Err(e @ RefineError::ShapeMismatch { .. }) => {
                log::warn!("page {}: dropping table: {}", candidate.page, e);
                None
            }
            Err(e @ RefineError::Degenerate { .. }) => {
                log::debug!("page {}: discarding candidate: {}", candidate.page, e);
                None
            }
        })
        .collect()
}

/// Refine a single candidate table.
pub fn refine_table(candidate: &CandidateTable) -> Result<RefinedTable, RefineError> {
    let width = candidate.header.len();
    for (i, row) in candidate.rows.iter().enumerate() {
        if row.len() != width {
            return Err(RefineError::ShapeMismatch {
                row: i,
                expected: width,
                found: row.len(),
            });
        }
    }

    // Normalize cells, mapping empties to the missing marker.
    let mut rows: Vec<Vec<Option<String>>> = candidate
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| clean_cell(cell)).collect())
        .collect();

    rows.retain(|row| row.iter().any(Option::is_some));

    // Drop columns whose every surviving cell is missing; the column's
    // header goes with it.
    let keep: Vec<usize> = (0..width)
        .filter(|&col| rows.iter().any(|row| row[col].is_some()))
        .collect();

    let columns: Vec<String> = keep
        .iter()
        .map(|&col| normalize(&candidate.header[col]))
        .collect();
    let rows: Vec<Vec<Option<String>>> = rows
        .iter()
        .map(|row| keep.iter().map(|&col| row[col].clone()).collect())
        .collect();

    if columns.len() < 2 || rows.is_empty() {
        return Err(RefineError::Degenerate {
            columns: columns.len(),
            rows: rows.len(),
        });
    }

    Ok(RefinedTable {
        page: candidate.page,
        columns,
        rows,
    })
}

fn clean_cell(cell: &str) -> Option<String> {
    let cleaned = normalize(cell);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(header: &[&str], rows: &[&[&str]]) -> CandidateTable {
        CandidateTable {
            page: 1,
            header: header.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn test_clean_table_survives() {
        let table = refine_table(&candidate(
            &["Name", "Age", "City"],
            &[&["Alice", "30", "NYC"], &["Bob", "25", "LA"]],
        ))
        .unwrap();
        assert_eq!(table.columns, vec!["Name", "Age", "City"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][0].as_deref(), Some("Alice"));
    }

    #[test]
    fn test_all_empty_row_dropped() {
        let table = refine_table(&candidate(
            &["A", "B"],
            &[&["1", "2"], &["", ""], &["3", "4"]],
        ))
        .unwrap();
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn test_all_empty_column_dropped() {
        let table = refine_table(&candidate(
            &["A", "B", "C"],
            &[&["1", "", "3"], &["4", "", "6"]],
        ))
        .unwrap();
        assert_eq!(table.columns, vec!["A", "C"]);
        assert!(table.rows.iter().all(|row| row.len() == 2));
    }

    #[test]
    fn test_single_surviving_column_rejected() {
        let err = refine_table(&candidate(&["A", "B"], &[&["1", ""], &["2", ""]])).unwrap_err();
        assert_eq!(err, RefineError::Degenerate { columns: 1, rows: 2 });
    }

    #[test]
    fn test_no_surviving_rows_rejected() {
        let err = refine_table(&candidate(&["A", "B"], &[&["", ""]])).unwrap_err();
        assert!(matches!(err, RefineError::Degenerate { .. }));
    }

    #[test]
    fn test_shape_mismatch_detected() {
        let mut bad = candidate(&["A", "B"], &[&["1", "2"]]);
        bad.rows.push(vec!["only-one".to_string()]);
        let err = refine_table(&bad).unwrap_err();
        assert_eq!(
            err,
            RefineError::ShapeMismatch {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_junk_only_cells_become_missing() {
        let table = refine_table(&candidate(
            &["A", "B", "C"],
            &[&["1", "\u{fffd}\u{fffd}", "3"], &["4", "\u{fffd}", "6"]],
        ))
        .unwrap();
        // The junk column normalizes to empty everywhere and is pruned.
        assert_eq!(table.columns, vec!["A", "C"]);
    }

    #[test]
    fn test_no_refined_row_or_column_all_missing() {
        let table = refine_table(&candidate(
            &["A", "B", "C"],
            &[&["1", "", ""], &["", "", "2"], &["", "", ""]],
        ))
        .unwrap();
        for row in &table.rows {
            assert!(row.iter().any(Option::is_some));
        }
        for col in 0..table.width() {
            assert!(table.rows.iter().any(|row| row[col].is_some()));
        }
    }

    #[test]
    fn test_refine_tables_isolates_faults() {
        let good = candidate(&["A", "B"], &[&["1", "2"]]);
        let mut bad = candidate(&["A", "B"], &[&["1", "2"]]);
        bad.rows.push(vec!["stray".to_string()]);
        let degenerate = candidate(&["A", "B"], &[&["", ""]]);

        let refined = refine_tables(vec![bad, good, degenerate]);
        assert_eq!(refined.len(), 1);
        assert_eq!(refined[0].rows, vec![vec![
            Some("1".to_string()),
            Some("2".to_string())
        ]]);
    }
}
