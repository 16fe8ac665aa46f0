// ==========================================
// Course Schedule Core - Course Model Builder
// ==========================================
// NormalizedRow -> canonical Course. Temporal parsing happens here;
// rows that fail it are rejected (logged, never fatal to the load).
// ==========================================

use crate::domain::course::{normalize_faculty_key, Course, CourseId};
use crate::importer::row_normalizer::NormalizedRow;
use crate::temporal::{parse_day_set, parse_time_of_day};
use std::collections::BTreeSet;
use tracing::warn;

/// Build a Course from a normalized row.
///
/// Returns `None` (logged as a warning) when the day set is empty, a
/// time fails to parse, or the window is not strictly increasing. An
/// unparseable or negative FTE falls back to 1.0 rather than rejecting
/// the row.
pub fn build_course(row: &NormalizedRow) -> Option<Course> {
    let days = parse_day_set(&row.days);
    if days.is_empty() {
        warn!(course = %row.course_num, days = %row.days, "row rejected: unparseable days");
        return None;
    }

    let start_minute = match parse_time_of_day(&row.start_time) {
        Ok(minute) => minute,
        Err(err) => {
            warn!(course = %row.course_num, %err, "row rejected: bad start time");
            return None;
        }
    };
    let end_minute = match parse_time_of_day(&row.end_time) {
        Ok(minute) => minute,
        Err(err) => {
            warn!(course = %row.course_num, %err, "row rejected: bad end time");
            return None;
        }
    };
    if start_minute >= end_minute {
        warn!(
            course = %row.course_num,
            start = start_minute,
            end = end_minute,
            "row rejected: start not before end"
        );
        return None;
    }

    let fte = match row.fte.trim().parse::<f64>() {
        Ok(value) if value >= 0.0 => value,
        _ => 1.0,
    };

    let room = if row.room.trim().is_empty() {
        None
    } else {
        Some(row.room.trim().to_string())
    };

    Some(Course {
        id: CourseId::next(),
        course_num: row.course_num.clone(),
        course_name: row.course_name.clone(),
        faculty_key: normalize_faculty_key(&row.faculty),
        faculty_full: row.faculty.clone(),
        days,
        start_minute,
        end_minute,
        fte,
        room,
        has_faculty_overlap: false,
        has_room_overlap: false,
        overlap_peers: BTreeSet::new(),
        source_row_index: row.source_row_index,
        source_row_raw: row.source_row_raw.clone(),
    })
}
