// ==========================================
// Course Schedule Core - Course Entity
// ==========================================
// One scheduled meeting pattern: identity, meeting window,
// instructor keys, conflict annotations, round-trip metadata.
// ==========================================

use crate::domain::day::DaySet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

// ==========================================
// CourseId
// ==========================================
// Process-unique, monotonically increasing, never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CourseId(u64);

static NEXT_COURSE_ID: AtomicU64 = AtomicU64::new(1);

impl CourseId {
    /// Allocate a fresh identifier.
    pub fn next() -> CourseId {
        CourseId(NEXT_COURSE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

// ==========================================
// Course
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,

    // Free-text identifiers
    pub course_num: String,
    pub course_name: String,

    // Instructor: normalized grouping key + original display text
    pub faculty_key: String,
    pub faculty_full: String,

    // Meeting pattern. Invariant: days non-empty, start < end.
    pub days: DaySet,
    pub start_minute: u32,
    pub end_minute: u32,

    // Workload units, defaults to 1.0 when absent/unparseable
    pub fte: f64,

    pub room: Option<String>,

    // Conflict annotations, recomputed on every detection pass
    pub has_faculty_overlap: bool,
    pub has_room_overlap: bool,
    pub overlap_peers: BTreeSet<CourseId>,

    // Round-trip metadata, retained only for the single-sheet-term layout
    pub source_row_index: Option<usize>,
    pub source_row_raw: Option<Vec<String>>,
}

impl Course {
    /// Meeting length in minutes. Well-formed input keeps this a positive
    /// multiple of 10; slot matching assumes roughly that granularity.
    pub fn duration_minutes(&self) -> u32 {
        self.end_minute - self.start_minute
    }

    /// Reset conflict annotations ahead of a detection pass.
    pub fn clear_conflicts(&mut self) {
        self.has_faculty_overlap = false;
        self.has_room_overlap = false;
        self.overlap_peers.clear();
    }
}

// ==========================================
// Faculty key normalization
// ==========================================

/// Derive the grouping key from instructor text.
///
/// "Last, First" takes the part before the comma; "First Last" takes the
/// last whitespace token; anything else passes through verbatim.
pub fn normalize_faculty_key(faculty: &str) -> String {
    let trimmed = faculty.trim();
    if let Some((last, _)) = trimmed.split_once(',') {
        let last = last.trim();
        if !last.is_empty() {
            return last.to_string();
        }
    }
    if let Some(last) = trimmed.split_whitespace().last() {
        return last.to_string();
    }
    trimmed.to_string()
}
