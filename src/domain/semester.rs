// ==========================================
// Course Schedule Core - Semester Aggregates
// ==========================================
// Semester buckets and the top-level document that owns them.
// The document is replaced atomically on load; nothing else holds
// its own copy of the buckets or the format metadata.
// ==========================================

use crate::domain::course::{Course, CourseId};
use crate::domain::format_info::FormatInfo;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ==========================================
// SemesterKind
// ==========================================
// The recognized academic terms; anything else becomes a custom bucket
// named by slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemesterKind {
    Fall,
    Spring,
    Winter,
    Summer,
}

impl SemesterKind {
    pub fn name(self) -> &'static str {
        match self {
            SemesterKind::Fall => "fall",
            SemesterKind::Spring => "spring",
            SemesterKind::Winter => "winter",
            SemesterKind::Summer => "summer",
        }
    }

    /// Term-code suffix used when no original code was observed.
    pub fn synthesized_code_suffix(self) -> &'static str {
        match self {
            SemesterKind::Fall => "SEM1",
            SemesterKind::Spring => "SEM2",
            SemesterKind::Winter => "WIN",
            SemesterKind::Summer => "SUM",
        }
    }

    pub fn from_name(name: &str) -> Option<SemesterKind> {
        match name {
            "fall" => Some(SemesterKind::Fall),
            "spring" => Some(SemesterKind::Spring),
            "winter" => Some(SemesterKind::Winter),
            "summer" => Some(SemesterKind::Summer),
            _ => None,
        }
    }
}

// ==========================================
// SemesterBucket
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterBucket {
    pub name: String,
    pub courses: Vec<Course>,
    /// Distinct faculty keys observed in this bucket.
    pub faculty_keys: BTreeSet<String>,
}

impl SemesterBucket {
    pub fn new(name: impl Into<String>) -> SemesterBucket {
        SemesterBucket {
            name: name.into(),
            courses: Vec::new(),
            faculty_keys: BTreeSet::new(),
        }
    }

    pub fn push(&mut self, course: Course) {
        if !course.faculty_key.is_empty() {
            self.faculty_keys.insert(course.faculty_key.clone());
        }
        self.courses.push(course);
    }

    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn course_mut(&mut self, id: CourseId) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.id == id)
    }

    /// Remove a course by id; true when something was removed.
    /// Faculty keys are rebuilt since the removed course may have been
    /// the last one for its instructor.
    pub fn remove(&mut self, id: CourseId) -> bool {
        let before = self.courses.len();
        self.courses.retain(|c| c.id != id);
        let removed = self.courses.len() != before;
        if removed {
            self.rebuild_faculty_keys();
        }
        removed
    }

    pub fn rebuild_faculty_keys(&mut self) {
        self.faculty_keys = self
            .courses
            .iter()
            .filter(|c| !c.faculty_key.is_empty())
            .map(|c| c.faculty_key.clone())
            .collect();
    }
}

// ==========================================
// ScheduleDocument
// ==========================================
// The loaded dataset: ordered semester buckets plus the format metadata
// needed to re-serialize the original tabular shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDocument {
    pub file_name: String,
    pub semesters: Vec<SemesterBucket>,
    pub format: FormatInfo,
}

impl ScheduleDocument {
    pub fn semester(&self, name: &str) -> Option<&SemesterBucket> {
        self.semesters.iter().find(|s| s.name == name)
    }

    pub fn semester_mut(&mut self, name: &str) -> Option<&mut SemesterBucket> {
        self.semesters.iter_mut().find(|s| s.name == name)
    }

    /// Locate a course anywhere in the document.
    pub fn find_course(&self, id: CourseId) -> Option<(&SemesterBucket, &Course)> {
        for bucket in &self.semesters {
            if let Some(course) = bucket.course(id) {
                return Some((bucket, course));
            }
        }
        None
    }

    pub fn semester_of(&self, id: CourseId) -> Option<&str> {
        self.semesters
            .iter()
            .find(|s| s.course(id).is_some())
            .map(|s| s.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::CourseId;
    use crate::domain::day::{Day, DaySet};

    fn course(num: &str, key: &str) -> Course {
        Course {
            id: CourseId::next(),
            course_num: num.into(),
            course_name: String::new(),
            faculty_key: key.into(),
            faculty_full: key.into(),
            days: DaySet::single(Day::Monday),
            start_minute: 480,
            end_minute: 530,
            fte: 1.0,
            room: None,
            has_faculty_overlap: false,
            has_room_overlap: false,
            overlap_peers: BTreeSet::new(),
            source_row_index: None,
            source_row_raw: None,
        }
    }

    #[test]
    fn test_bucket_tracks_faculty_keys() {
        let mut bucket = SemesterBucket::new("fall");
        bucket.push(course("CS101", "Smith"));
        bucket.push(course("CS102", "Smith"));
        bucket.push(course("CS103", "Lee"));
        assert_eq!(bucket.faculty_keys.len(), 2);
    }

    #[test]
    fn test_remove_rebuilds_faculty_keys() {
        let mut bucket = SemesterBucket::new("fall");
        let lone = course("CS103", "Lee");
        let lone_id = lone.id;
        bucket.push(course("CS101", "Smith"));
        bucket.push(lone);
        assert!(bucket.remove(lone_id));
        assert!(!bucket.faculty_keys.contains("Lee"));
        assert!(!bucket.remove(lone_id));
    }

    #[test]
    fn test_semester_kind_names() {
        assert_eq!(SemesterKind::Fall.name(), "fall");
        assert_eq!(SemesterKind::from_name("spring"), Some(SemesterKind::Spring));
        assert_eq!(SemesterKind::from_name("monsoon"), None);
    }
}
