//! Table boundary detection over structured lines
//!
//! Groups consecutive multi-column lines into candidate tables, using
//! column-count stability as the continuation signal. The first qualifying
//! line of a group becomes the header; following lines join as rows only
//! while their part count matches the header width.

use crate::normalize::normalize;
use crate::structure::StructuredPage;

/// Thresholds for table detection
#[derive(Debug, Clone)]
pub struct DetectOptions {
    /// Minimum parts on a line for it to start or extend a table (default: 2)
    pub min_parts: usize,
    /// Minimum accumulated rows for a closed table to be emitted (default: 1)
    pub min_rows: usize,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            min_parts: 2,
            min_rows: 1,
        }
    }
}

/// A provisional table detected within one page.
///
/// Invariant: every row in `rows` has the same length as `header`.
#[derive(Debug, Clone)]
pub struct CandidateTable {
    /// Page the table started on (1-indexed)
    pub page: u32,
    /// Column names, taken from the first qualifying line
    pub header: Vec<String>,
    /// Data rows, each exactly `header.len()` values wide
    pub rows: Vec<Vec<String>>,
}

impl CandidateTable {
    /// Number of columns, as fixed by the header line.
    pub fn width(&self) -> usize {
        self.header.len()
    }
}

/// Detect candidate tables with default thresholds.
pub fn detect_tables(pages: &[StructuredPage]) -> Vec<CandidateTable> {
    detect_tables_with_options(pages, &DetectOptions::default())
}

/// Detect candidate tables across all pages, in page order then line order.
///
/// State machine per line: no active table + multi-column line starts one;
/// matching-width line appends a row; any other line closes the current
/// table. A multi-column line whose width differs from the header closes the
/// table without seeding a new one. Page end and document end also close.
/// Tables closed with fewer than `min_rows` rows are discarded.
pub fn detect_tables_with_options(
    pages: &[StructuredPage],
    options: &DetectOptions,
) -> Vec<CandidateTable> {
    let mut tables = Vec::new();
    let mut current: Option<CandidateTable> = None;

    for page in pages {
        for line in &page.lines {
            if line.part_count() >= options.min_parts {
                match current.take() {
                    None => {
                        current = Some(CandidateTable {
                            page: line.page,
                            header: normalized_parts(&line.parts),
                            rows: Vec::new(),
                        });
                    }
                    Some(mut table) if line.part_count() == table.width() => {
                        table.rows.push(normalized_parts(&line.parts));
                        current = Some(table);
                    }
                    Some(table) => {
                        // Width mismatch closes the table; the closing line
                        // itself does not start a new one.
                        emit(table, &mut tables, options.min_rows);
                    }
                }
            } else {
                close(&mut current, &mut tables, options.min_rows);
            }
        }

        // A table never spans a page boundary.
        close(&mut current, &mut tables, options.min_rows);
    }

    close(&mut current, &mut tables, options.min_rows);
    tables
}

/// Close the active table, if any.
fn close(current: &mut Option<CandidateTable>, tables: &mut Vec<CandidateTable>, min_rows: usize) {
    if let Some(table) = current.take() {
        emit(table, tables, min_rows);
    }
}

/// Emit a closed table if it gathered enough rows; discard it otherwise.
fn emit(table: CandidateTable, tables: &mut Vec<CandidateTable>, min_rows: usize) {
    if table.rows.len() >= min_rows {
        tables.push(table);
    }
}

fn normalized_parts(parts: &[String]) -> Vec<String> {
    parts.iter().map(|part| normalize(part)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::RawPage;
    use crate::structure::structure_pages;

    fn pages_from(text_pages: &[&str]) -> Vec<StructuredPage> {
        let raw: Vec<RawPage> = text_pages
            .iter()
            .enumerate()
            .map(|(i, text)| RawPage {
                number: (i + 1) as u32,
                lines: text.lines().map(|l| l.to_string()).collect(),
            })
            .collect();
        structure_pages(&raw)
    }

    #[test]
    fn test_basic_table_detected() {
        let pages = pages_from(&["Name  Age  City\nAlice  30  NYC\nBob  25  LA\n"]);
        let tables = detect_tables(&pages);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].page, 1);
        assert_eq!(tables[0].header, vec!["Name", "Age", "City"]);
        assert_eq!(tables[0].rows.len(), 2);
        assert_eq!(tables[0].rows[0], vec!["Alice", "30", "NYC"]);
        assert_eq!(tables[0].rows[1], vec!["Bob", "25", "LA"]);
    }

    #[test]
    fn test_prose_only_page_yields_nothing() {
        let pages = pages_from(&["This is a paragraph.\nIt keeps going on one column.\n"]);
        assert!(detect_tables(&pages).is_empty());
    }

    #[test]
    fn test_header_without_rows_discarded() {
        let pages = pages_from(&["Col1  Col2\nplain prose after\n"]);
        assert!(detect_tables(&pages).is_empty());
    }

    #[test]
    fn test_width_mismatch_closes_without_restart() {
        // The 4-part line closes the 3-column table and is consumed doing
        // so; the following 2-part lines form a fresh table.
        let pages =
            pages_from(&["A  B  C\n1  2  3\nw  x  y  z\nP  Q\n7  8\n"]);
        let tables = detect_tables(&pages);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].header, vec!["A", "B", "C"]);
        assert_eq!(tables[0].rows.len(), 1);
        assert_eq!(tables[1].header, vec!["P", "Q"]);
        assert_eq!(tables[1].rows, vec![vec!["7", "8"]]);
    }

    #[test]
    fn test_single_column_line_closes_table() {
        let pages = pages_from(&["A  B\n1  2\nfootnote text\n3  4\n"]);
        let tables = detect_tables(&pages);
        // "3  4" starts a new table but gathers no rows before page end.
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows, vec![vec!["1", "2"]]);
    }

    #[test]
    fn test_page_boundary_forces_closure() {
        let pages = pages_from(&["A  B\n1  2\n", "3  4\n5  6\n"]);
        let tables = detect_tables(&pages);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].page, 1);
        assert_eq!(tables[0].rows, vec![vec!["1", "2"]]);
        // Page 2's first line becomes a header, not a row of page 1's table.
        assert_eq!(tables[1].page, 2);
        assert_eq!(tables[1].header, vec!["3", "4"]);
        assert_eq!(tables[1].rows, vec![vec!["5", "6"]]);
    }

    #[test]
    fn test_blank_lines_do_not_close_tables() {
        // Blank lines never become structured lines, so a same-width run
        // continues straight through them.
        let pages = pages_from(&["A  B\n1  2\n\n3  4\n"]);
        let tables = detect_tables(&pages);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows.len(), 2);
    }

    #[test]
    fn test_document_end_closes_open_table() {
        let pages = pages_from(&["H1  H2\nr1  r2\nr3  r4"]);
        let tables = detect_tables(&pages);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows.len(), 2);
    }

    #[test]
    fn test_every_row_matches_header_width() {
        let pages = pages_from(&[
            "A  B  C\n1  2  3\nx  y\np  q  r\n",
            "M  N\n5  6\n7  8  9\n0  1\n",
        ]);
        for table in detect_tables(&pages) {
            for row in &table.rows {
                assert_eq!(row.len(), table.width());
            }
        }
    }

    #[test]
    fn test_custom_min_rows() {
        let pages = pages_from(&["A  B\n1  2\n"]);
        let options = DetectOptions {
            min_parts: 2,
            min_rows: 2,
        };
        assert!(detect_tables_with_options(&pages, &options).is_empty());
    }
}
