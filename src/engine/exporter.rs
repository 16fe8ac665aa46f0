// ==========================================
// Course Schedule Core - Format-Preserving Exporter
// ==========================================
// Re-serializes the document into its original tabular shape.
// Separate-sheet mode emits a fixed header per semester; single-sheet
// term mode restores the captured original header and passes every
// untracked original column through byte-for-byte.
// ==========================================

use crate::domain::course::Course;
use crate::domain::format_info::{ColumnMapping, FormatInfo, ScheduleField};
use crate::domain::semester::{ScheduleDocument, SemesterKind};
use crate::temporal::format_minutes;
use chrono::Datelike;
use csv::{QuoteStyle, WriterBuilder};
use regex::Regex;
use std::collections::BTreeMap;

/// Header emitted in separate-sheet mode.
pub const FIXED_EXPORT_HEADER: [&str; 8] = [
    "Class", "Description", "Faculty", "Days", "Start", "End", "FTE", "Room",
];

// ==========================================
// ExportTable
// ==========================================
// One table of string cells, ready for an external tabular writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    pub name: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Export the document: one table per semester in separate-sheet mode,
/// one combined table in single-sheet-term mode.
pub fn export_semesters(document: &ScheduleDocument) -> Vec<ExportTable> {
    match &document.format {
        FormatInfo::SeparateSheets => export_separate_sheets(document),
        FormatInfo::SingleSheetTerm {
            header,
            mapping,
            term_codes,
        } => vec![export_single_sheet(document, header, mapping, term_codes)],
    }
}

// ==========================================
// Separate-sheet mode
// ==========================================
fn export_separate_sheets(document: &ScheduleDocument) -> Vec<ExportTable> {
    document
        .semesters
        .iter()
        .map(|bucket| {
            let mut courses: Vec<&Course> = bucket.courses.iter().collect();
            courses.sort_by(|a, b| {
                a.start_minute
                    .cmp(&b.start_minute)
                    .then_with(|| a.course_num.cmp(&b.course_num))
            });
            ExportTable {
                name: bucket.name.clone(),
                header: FIXED_EXPORT_HEADER.iter().map(|h| h.to_string()).collect(),
                rows: courses
                    .iter()
                    .map(|c| {
                        vec![
                            c.course_num.clone(),
                            c.course_name.clone(),
                            c.faculty_full.clone(),
                            display_days(c),
                            format_minutes(c.start_minute),
                            format_minutes(c.end_minute),
                            format_fte(c.fte),
                            c.room.clone().unwrap_or_default(),
                        ]
                    })
                    .collect(),
            }
        })
        .collect()
}

// ==========================================
// Single-sheet-term mode
// ==========================================
fn export_single_sheet(
    document: &ScheduleDocument,
    header: &[String],
    mapping: &ColumnMapping,
    term_codes: &BTreeMap<String, String>,
) -> ExportTable {
    let inferred_year = infer_academic_year(term_codes);

    // Courses across all semesters, tagged with their term code, in
    // document order; a stable sort then restores original row order
    // and appends post-load additions in insertion order.
    let mut tagged: Vec<(&Course, String)> = Vec::new();
    for bucket in &document.semesters {
        let code = term_code_for(&bucket.name, term_codes, inferred_year);
        for course in &bucket.courses {
            tagged.push((course, code.clone()));
        }
    }
    tagged.sort_by_key(|(course, _)| course.source_row_index.unwrap_or(usize::MAX));

    let rows = tagged
        .iter()
        .map(|(course, code)| materialize_row(course, code, header, mapping))
        .collect();

    ExportTable {
        name: "schedule".to_string(),
        header: header.to_vec(),
        rows,
    }
}

/// Build one output row: the retained original row with only the bound
/// columns overwritten, or a blank row of header width for courses
/// added after load.
fn materialize_row(
    course: &Course,
    term_code: &str,
    header: &[String],
    mapping: &ColumnMapping,
) -> Vec<String> {
    let mut row = match &course.source_row_raw {
        Some(raw) => {
            let mut row = raw.clone();
            if row.len() < header.len() {
                row.resize(header.len(), String::new());
            }
            row
        }
        None => vec![String::new(); header.len()],
    };
    for (field, column) in mapping.iter_bound() {
        if column >= row.len() {
            row.resize(column + 1, String::new());
        }
        row[column] = tracked_value(course, term_code, field);
    }
    row
}

fn tracked_value(course: &Course, term_code: &str, field: ScheduleField) -> String {
    match field {
        ScheduleField::CourseNum => course.course_num.clone(),
        ScheduleField::CourseName => course.course_name.clone(),
        ScheduleField::Faculty => course.faculty_full.clone(),
        ScheduleField::Days => display_days(course),
        ScheduleField::StartTime => format_minutes(course.start_minute),
        ScheduleField::EndTime => format_minutes(course.end_minute),
        ScheduleField::Fte => format_fte(course.fte),
        ScheduleField::Term => term_code.to_string(),
        ScheduleField::Room => course.room.clone().unwrap_or_default(),
    }
}

/// Originally observed code when present; otherwise synthesized from
/// the semester->code table and the inferred academic year. A preserved
/// code is never overridden.
fn term_code_for(
    semester: &str,
    term_codes: &BTreeMap<String, String>,
    inferred_year: i32,
) -> String {
    if let Some(code) = term_codes.get(semester) {
        return code.clone();
    }
    match SemesterKind::from_name(semester) {
        Some(kind) => format!("{}{}", inferred_year, kind.synthesized_code_suffix()),
        None => semester.to_uppercase(),
    }
}

/// Academic year carried by the preserved codes, else the current year.
fn infer_academic_year(term_codes: &BTreeMap<String, String>) -> i32 {
    let year_re = Regex::new(r"\b(19|20)\d{2}").expect("built-in pattern");
    term_codes
        .values()
        .filter_map(|code| year_re.find(code))
        .filter_map(|m| m.as_str().parse().ok())
        .max()
        .unwrap_or_else(|| chrono::Local::now().year())
}

// ==========================================
// Cell formatting
// ==========================================

fn display_days(course: &Course) -> String {
    course.days.canonical_string().to_uppercase()
}

fn format_fte(fte: f64) -> String {
    format!("{}", fte)
}

// ==========================================
// CSV materialization
// ==========================================

/// Render a table as CSV: comma-delimited, fields quoted only when they
/// contain a comma, quote, or newline, quotes doubled inside.
pub fn write_csv(table: &ExportTable) -> anyhow::Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());
    writer.write_record(&table.header)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("csv writer flush failed: {e}"))?;
    Ok(String::from_utf8(bytes)?)
}
