// ==========================================
// Course Schedule Core - Row Normalization
// ==========================================
// Raw sheet rows -> NormalizedRow records via the bound column indices.
// Missing cells become empty strings; faculty and FTE get their
// defaults here so downstream stages never special-case absence.
// ==========================================

use crate::domain::format_info::ScheduleField;
use crate::importer::header_detector::HeaderDetection;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Placeholder instructor for rows that name none.
pub const TBA_FACULTY: &str = "TBA";

/// Default workload when the FTE cell is blank.
pub const DEFAULT_FTE: &str = "1";

// ==========================================
// NormalizedRow
// ==========================================
// String-level record; temporal parsing happens in the course builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NormalizedRow {
    pub course_num: String,
    pub course_name: String,
    pub faculty: String,
    pub days: String,
    pub start_time: String,
    pub end_time: String,
    pub fte: String,
    pub term: String,
    pub room: String,
    /// Original row index within the sheet, kept only when the sheet
    /// binds a term column (lossless round-trip layout).
    pub source_row_index: Option<usize>,
    /// Original raw cells, kept under the same condition.
    pub source_row_raw: Option<Vec<String>>,
}

impl NormalizedRow {
    fn field(&self, field: ScheduleField) -> &str {
        match field {
            ScheduleField::CourseNum => &self.course_num,
            ScheduleField::CourseName => &self.course_name,
            ScheduleField::Faculty => &self.faculty,
            ScheduleField::Days => &self.days,
            ScheduleField::StartTime => &self.start_time,
            ScheduleField::EndTime => &self.end_time,
            ScheduleField::Fte => &self.fte,
            ScheduleField::Term => &self.term,
            ScheduleField::Room => &self.room,
        }
    }

    fn field_mut(&mut self, field: ScheduleField) -> &mut String {
        match field {
            ScheduleField::CourseNum => &mut self.course_num,
            ScheduleField::CourseName => &mut self.course_name,
            ScheduleField::Faculty => &mut self.faculty,
            ScheduleField::Days => &mut self.days,
            ScheduleField::StartTime => &mut self.start_time,
            ScheduleField::EndTime => &mut self.end_time,
            ScheduleField::Fte => &mut self.fte,
            ScheduleField::Term => &mut self.term,
            ScheduleField::Room => &mut self.room,
        }
    }

    pub fn get(&self, field: ScheduleField) -> &str {
        self.field(field)
    }
}

// ==========================================
// Normalization
// ==========================================

/// Convert every row after the header into a NormalizedRow.
///
/// Rows missing both `courseNum` and `days` after normalization are
/// discarded (returned as the dropped count). When the mapping binds a
/// term column, the raw row and its sheet index are retained on each
/// record for lossless export.
pub fn normalize_sheet(
    sheet_name: &str,
    rows: &[Vec<String>],
    detection: &HeaderDetection,
) -> (Vec<NormalizedRow>, usize) {
    let retain_raw = detection.mapping.is_bound(ScheduleField::Term);
    let mut normalized = Vec::new();
    let mut dropped = 0usize;

    for (row_index, raw) in rows.iter().enumerate() {
        if row_index <= detection.header_row_index {
            continue;
        }

        let mut record = NormalizedRow::default();
        for (field, column) in detection.mapping.iter_bound() {
            let cell = raw.get(column).map(|c| c.trim()).unwrap_or("");
            *record.field_mut(field) = cell.to_string();
        }
        if record.faculty.is_empty() {
            record.faculty = TBA_FACULTY.to_string();
        }
        if record.fte.is_empty() {
            record.fte = DEFAULT_FTE.to_string();
        }

        if record.course_num.is_empty() && record.days.is_empty() {
            debug!(sheet = sheet_name, row = row_index, "row dropped: no course number and no days");
            dropped += 1;
            continue;
        }

        if retain_raw {
            record.source_row_index = Some(row_index);
            record.source_row_raw = Some(raw.clone());
        }
        normalized.push(record);
    }

    (normalized, dropped)
}
