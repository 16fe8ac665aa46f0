// ==========================================
// Course Schedule Core - Header Detection
// ==========================================
// Locates the header row in a sheet and binds columns to semantic
// fields via the injected alias table. The resulting ColumnMapping is
// the only column knowledge the rest of the pipeline ever sees.
// ==========================================

use crate::config::ScheduleConfig;
use crate::domain::format_info::{ColumnMapping, ALL_FIELDS};

/// Header rows are expected near the top of a sheet.
pub const MAX_HEADER_SCAN_ROWS: usize = 5;

/// A candidate row qualifies as a header once this many fields bind.
pub const MIN_BOUND_FIELDS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderDetection {
    /// Index of the accepted header row within the sheet.
    pub header_row_index: usize,
    pub mapping: ColumnMapping,
}

/// Scan the first rows of a sheet for a header.
///
/// For each candidate row, every cell (lowercased, trimmed) is compared
/// against the alias table: a field binds to the first column whose text
/// equals, or contains as a substring, one of its aliases. First match
/// wins; bound fields are not rebound, and a column binds at most one
/// field. The first row (in sheet order) binding at least
/// `MIN_BOUND_FIELDS` fields is accepted.
pub fn detect_header(rows: &[Vec<String>], config: &ScheduleConfig) -> Option<HeaderDetection> {
    for (row_index, row) in rows.iter().take(MAX_HEADER_SCAN_ROWS).enumerate() {
        let mapping = bind_columns(row, config);
        if mapping.bound_count() >= MIN_BOUND_FIELDS {
            return Some(HeaderDetection {
                header_row_index: row_index,
                mapping,
            });
        }
    }
    None
}

/// Build the column -> field binding for one candidate header row.
pub fn bind_columns(row: &[String], config: &ScheduleConfig) -> ColumnMapping {
    let mut mapping = ColumnMapping::new();
    for (column, cell) in row.iter().enumerate() {
        let cell = cell.trim().to_lowercase();
        if cell.is_empty() {
            continue;
        }
        for field in ALL_FIELDS {
            if mapping.is_bound(field) {
                continue;
            }
            let matched = config
                .aliases_for(field)
                .iter()
                .any(|alias| cell == *alias || cell.contains(alias));
            if matched {
                mapping.bind(field, column);
                break; // one field per column
            }
        }
    }
    mapping
}
