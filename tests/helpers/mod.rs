// ==========================================
// Integration Test Helpers
// ==========================================
// Builders for parsed workbooks and sessions shared across the
// integration suites.
// ==========================================
#![allow(dead_code)]

use course_scheduler::{ParsedSheet, ParsedWorkbook};

pub fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}

pub fn sheet(name: &str, data: &[&[&str]]) -> ParsedSheet {
    ParsedSheet {
        name: name.to_string(),
        rows: rows(data),
    }
}

pub fn workbook(file_name: &str, sheets: Vec<ParsedSheet>) -> ParsedWorkbook {
    ParsedWorkbook {
        file_name: file_name.to_string(),
        sheets,
    }
}

/// Standard separate-sheet header.
pub const HEADER: &[&str] = &[
    "Class", "Description", "Faculty", "Days", "Start", "End", "FTE", "Room",
];
