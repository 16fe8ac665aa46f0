// ==========================================
// Course Schedule Core - Format Metadata
// ==========================================
// Captures, once per loaded file, everything needed to reconstruct the
// original tabular shape on export: which layout the file used, the
// original header, the detected column bindings, and the original
// term-code spellings.
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ==========================================
// ScheduleField
// ==========================================
// The semantic fields column detection can bind. Order is the binding
// priority during header detection and the overwrite set on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScheduleField {
    CourseNum,
    CourseName,
    Faculty,
    Days,
    StartTime,
    EndTime,
    Fte,
    Term,
    Room,
}

pub const ALL_FIELDS: [ScheduleField; 9] = [
    ScheduleField::CourseNum,
    ScheduleField::CourseName,
    ScheduleField::Faculty,
    ScheduleField::Days,
    ScheduleField::StartTime,
    ScheduleField::EndTime,
    ScheduleField::Fte,
    ScheduleField::Term,
    ScheduleField::Room,
];

impl ScheduleField {
    pub fn name(self) -> &'static str {
        match self {
            ScheduleField::CourseNum => "courseNum",
            ScheduleField::CourseName => "courseName",
            ScheduleField::Faculty => "faculty",
            ScheduleField::Days => "days",
            ScheduleField::StartTime => "startTime",
            ScheduleField::EndTime => "endTime",
            ScheduleField::Fte => "fte",
            ScheduleField::Term => "term",
            ScheduleField::Room => "room",
        }
    }

    fn index(self) -> usize {
        ALL_FIELDS.iter().position(|f| *f == self).unwrap_or(0)
    }
}

impl fmt::Display for ScheduleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ==========================================
// ColumnMapping
// ==========================================
// field -> optional column index, produced once per sheet by header
// detection and passed explicitly; never re-inferred downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    columns: [Option<usize>; 9],
}

impl ColumnMapping {
    pub fn new() -> ColumnMapping {
        ColumnMapping::default()
    }

    pub fn get(&self, field: ScheduleField) -> Option<usize> {
        self.columns[field.index()]
    }

    pub fn is_bound(&self, field: ScheduleField) -> bool {
        self.get(field).is_some()
    }

    /// True when `column` is already bound to some field.
    pub fn column_in_use(&self, column: usize) -> bool {
        self.columns.contains(&Some(column))
    }

    pub fn bind(&mut self, field: ScheduleField, column: usize) {
        self.columns[field.index()] = Some(column);
    }

    pub fn bound_count(&self) -> usize {
        self.columns.iter().filter(|c| c.is_some()).count()
    }

    pub fn iter_bound(&self) -> impl Iterator<Item = (ScheduleField, usize)> + '_ {
        ALL_FIELDS
            .into_iter()
            .filter_map(|f| self.get(f).map(|col| (f, col)))
    }
}

// ==========================================
// FormatInfo
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum FormatInfo {
    /// One sheet per semester; export emits the fixed header.
    SeparateSheets,
    /// One sheet carrying a term column; export must restore the
    /// original header and the original term-code spellings.
    SingleSheetTerm {
        /// The original header row, byte-for-byte.
        header: Vec<String>,
        /// Column bindings detected in that header.
        mapping: ColumnMapping,
        /// semester bucket name -> originally observed term-code string
        /// (e.g. "2024SEM1"), kept so export never invents new codes.
        term_codes: BTreeMap<String, String>,
    },
}

impl FormatInfo {
    pub fn is_single_sheet_term(&self) -> bool {
        matches!(self, FormatInfo::SingleSheetTerm { .. })
    }
}
