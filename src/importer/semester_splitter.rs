// ==========================================
// Course Schedule Core - Semester Partitioning
// ==========================================
// Splits normalized rows into semester buckets. Three strategies, tried
// in order, first success wins:
//   a. sheet-name classification (one semester per matching sheet)
//   b. single sheet with a term column (split by term code)
//   c. fallback: every data sheet is its own bucket
// Strategy b is the lossless round-trip layout; its header, column
// mapping, and original term-code spellings are captured as FormatInfo.
// ==========================================

use crate::config::ScheduleConfig;
use crate::domain::format_info::{FormatInfo, ScheduleField};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::ParsedWorkbook;
use crate::importer::header_detector::{detect_header, HeaderDetection};
use crate::importer::row_normalizer::{normalize_sheet, NormalizedRow};
use std::collections::BTreeMap;
use tracing::{debug, warn};

// ==========================================
// Outcome types
// ==========================================

/// Per-sheet ingestion findings, carried up into the load summary.
#[derive(Debug, Clone)]
pub struct SheetReport {
    pub sheet: String,
    pub header_found: bool,
    pub data_rows: usize,
    pub rows_dropped: usize,
}

/// One semester's worth of normalized rows, in sheet order.
#[derive(Debug, Clone)]
pub struct SemesterRows {
    pub name: String,
    pub rows: Vec<NormalizedRow>,
}

#[derive(Debug, Clone)]
pub struct PartitionOutcome {
    pub semesters: Vec<SemesterRows>,
    pub format: FormatInfo,
    pub sheet_reports: Vec<SheetReport>,
}

// ==========================================
// Partitioning
// ==========================================

pub fn partition_workbook(
    workbook: &ParsedWorkbook,
    config: &ScheduleConfig,
) -> ImportResult<PartitionOutcome> {
    // Stage 1: header detection + normalization per sheet.
    let mut prepared: Vec<(String, HeaderDetection, Vec<NormalizedRow>)> = Vec::new();
    let mut sheet_reports = Vec::new();

    for sheet in &workbook.sheets {
        match detect_header(&sheet.rows, config) {
            Some(detection) => {
                let (rows, dropped) = normalize_sheet(&sheet.name, &sheet.rows, &detection);
                sheet_reports.push(SheetReport {
                    sheet: sheet.name.clone(),
                    header_found: true,
                    data_rows: rows.len(),
                    rows_dropped: dropped,
                });
                prepared.push((sheet.name.clone(), detection, rows));
            }
            None => {
                warn!(sheet = %sheet.name, "no header row found; sheet contributes no data");
                sheet_reports.push(SheetReport {
                    sheet: sheet.name.clone(),
                    header_found: false,
                    data_rows: 0,
                    rows_dropped: 0,
                });
            }
        }
    }

    // Stage 2a: sheet-name based semesters.
    let mut semesters: Vec<SemesterRows> = Vec::new();
    for (sheet_name, _, rows) in &prepared {
        if let Some(kind) = config.classify_semester(sheet_name) {
            push_rows(&mut semesters, kind.name(), rows.clone());
        }
    }
    if !semesters.is_empty() {
        debug!(buckets = semesters.len(), "partitioned by sheet names");
        return Ok(PartitionOutcome {
            semesters,
            format: FormatInfo::SeparateSheets,
            sheet_reports,
        });
    }

    // Stage 2b: first sheet carrying a term column.
    for (sheet_name, detection, rows) in &prepared {
        if !detection.mapping.is_bound(ScheduleField::Term) || rows.is_empty() {
            continue;
        }
        let mut term_codes: BTreeMap<String, String> = BTreeMap::new();
        for row in rows {
            let name = semester_name_for_code(&row.term, config);
            if !row.term.is_empty() {
                term_codes.entry(name.clone()).or_insert(row.term.clone());
            }
            push_rows(&mut semesters, &name, vec![row.clone()]);
        }
        let sheet = workbook
            .sheets
            .iter()
            .find(|s| s.name == *sheet_name)
            .ok_or_else(|| ImportError::InternalError("prepared sheet vanished".into()))?;
        let header = sheet.rows[detection.header_row_index].clone();
        debug!(sheet = %sheet_name, buckets = semesters.len(), "partitioned by term column");
        return Ok(PartitionOutcome {
            semesters,
            format: FormatInfo::SingleSheetTerm {
                header,
                mapping: detection.mapping.clone(),
                term_codes,
            },
            sheet_reports,
        });
    }

    // Stage 2c: every data sheet is its own bucket.
    let data_sheets = prepared.iter().filter(|(_, _, rows)| !rows.is_empty()).count();
    for (index, (sheet_name, _, rows)) in prepared.iter().enumerate() {
        if rows.is_empty() {
            continue;
        }
        let name = fallback_bucket_name(&workbook.file_name, sheet_name, index, data_sheets, config);
        push_rows(&mut semesters, &name, rows.clone());
    }
    if semesters.is_empty() {
        return Err(ImportError::NoUsableSheet);
    }
    debug!(buckets = semesters.len(), "partitioned by fallback");
    Ok(PartitionOutcome {
        semesters,
        format: FormatInfo::SeparateSheets,
        sheet_reports,
    })
}

fn push_rows(semesters: &mut Vec<SemesterRows>, name: &str, mut rows: Vec<NormalizedRow>) {
    if let Some(existing) = semesters.iter_mut().find(|s| s.name == name) {
        existing.rows.append(&mut rows);
    } else {
        semesters.push(SemesterRows {
            name: name.to_string(),
            rows,
        });
    }
}

/// Bucket name for a raw term code: recognized kind, else its slug.
fn semester_name_for_code(code: &str, config: &ScheduleConfig) -> String {
    if let Some(kind) = config.classify_term_code(code) {
        return kind.name().to_string();
    }
    let slugged = slug(code);
    if slugged.is_empty() {
        "unknown".to_string()
    } else {
        slugged
    }
}

/// Fallback bucket naming: semester pattern on the file name, else the
/// sheet-name slug, else "schedule" when the file has a single sheet.
fn fallback_bucket_name(
    file_name: &str,
    sheet_name: &str,
    sheet_index: usize,
    data_sheets: usize,
    config: &ScheduleConfig,
) -> String {
    if let Some(kind) = config.classify_semester(file_name) {
        return kind.name().to_string();
    }
    let slugged = slug(sheet_name);
    if !slugged.is_empty() {
        return slugged;
    }
    if data_sheets == 1 {
        "schedule".to_string()
    } else {
        format!("sheet-{}", sheet_index + 1)
    }
}

/// Lowercased, dash-separated slug of arbitrary text.
pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}
