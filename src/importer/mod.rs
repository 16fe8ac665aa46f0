// ==========================================
// Course Schedule Core - Ingestion Layer
// ==========================================
// Tabular file -> normalized semester rows + format metadata.
// Pipeline: file parsing -> header detection -> row normalization ->
// semester partitioning. Column knowledge lives exclusively in the
// ColumnMapping produced here.
// ==========================================

pub mod error;
pub mod file_parser;
pub mod header_detector;
pub mod row_normalizer;
pub mod semester_splitter;

pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, ParsedSheet, ParsedWorkbook, UniversalFileParser};
pub use header_detector::{detect_header, HeaderDetection, MAX_HEADER_SCAN_ROWS, MIN_BOUND_FIELDS};
pub use row_normalizer::{normalize_sheet, NormalizedRow, DEFAULT_FTE, TBA_FACULTY};
pub use semester_splitter::{
    partition_workbook, slug, PartitionOutcome, SemesterRows, SheetReport,
};
