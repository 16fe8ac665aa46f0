// ==========================================
// Course Schedule Core - Schedule Session
// ==========================================
// The top-level document owner. Holds the active semester map and
// format metadata exclusively; UI-originated mutation requests (add,
// edit, move, delete) are processed one at a time to completion, and
// conflict annotations are recomputed after every mutation. A load
// either fully replaces the document or leaves the previous one
// intact.
// ==========================================

use crate::api::error::{ApiError, ApiResult, FieldViolation};
use crate::config::ScheduleConfig;
use crate::domain::course::{normalize_faculty_key, Course, CourseId};
use crate::domain::day::{Day, DaySet};
use crate::domain::format_info::ScheduleField;
use crate::domain::semester::{ScheduleDocument, SemesterBucket};
use crate::domain::timeslot::{slots_for_class, TimeSlot, MWF_SLOTS, TR_SLOTS};
use crate::engine::conflict::detect_conflicts;
use crate::engine::course_builder::build_course;
use crate::engine::exporter::{export_semesters, ExportTable};
use crate::engine::fte::aggregate_fte;
use crate::engine::move_validator::{can_move, move_class, MoveClass};
use crate::engine::slot_mapper::map_to_slot;
use crate::importer::file_parser::{ParsedWorkbook, UniversalFileParser};
use crate::importer::semester_splitter::{partition_workbook, SheetReport};
use crate::temporal::{parse_day_set, parse_time_of_day};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::info;

// ==========================================
// Request / response types
// ==========================================

/// Raw fields from an add-course dialog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseDraft {
    pub course_num: String,
    pub course_name: String,
    pub faculty: String,
    pub days: String,
    pub start_time: String,
    pub end_time: String,
    pub fte: String,
    pub room: String,
}

/// Partial edit; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoursePatch {
    pub course_num: Option<String>,
    pub course_name: Option<String>,
    pub faculty: Option<String>,
    pub days: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub fte: Option<String>,
    pub room: Option<String>,
}

/// What a load did, for the status bar and diagnostics.
#[derive(Debug, Clone)]
pub struct LoadSummary {
    pub file_name: String,
    pub semesters: Vec<String>,
    pub course_count: usize,
    pub rows_rejected: usize,
    pub single_sheet_term: bool,
    pub sheet_reports: Vec<SheetReport>,
}

// ==========================================
// ScheduleSession
// ==========================================
pub struct ScheduleSession {
    config: ScheduleConfig,
    document: Option<ScheduleDocument>,
}

impl Default for ScheduleSession {
    fn default() -> ScheduleSession {
        ScheduleSession::new(ScheduleConfig::default())
    }
}

impl ScheduleSession {
    pub fn new(config: ScheduleConfig) -> ScheduleSession {
        ScheduleSession {
            config,
            document: None,
        }
    }

    pub fn document(&self) -> Option<&ScheduleDocument> {
        self.document.as_ref()
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// The fixed display grid, for the renderer.
    pub fn slot_tables(&self) -> (&'static [TimeSlot], &'static [TimeSlot]) {
        (MWF_SLOTS, TR_SLOTS)
    }

    // ==========================================
    // Load
    // ==========================================

    /// Read and load a tabular file from disk.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> ApiResult<LoadSummary> {
        let workbook = UniversalFileParser.parse(path)?;
        self.load_workbook(&workbook)
    }

    /// Replace the document with the contents of a parsed workbook.
    ///
    /// The new document is fully built and annotated before the swap;
    /// on any failure the previous document stays untouched.
    pub fn load_workbook(&mut self, workbook: &ParsedWorkbook) -> ApiResult<LoadSummary> {
        let outcome = partition_workbook(workbook, &self.config)?;

        let mut semesters = Vec::new();
        let mut course_count = 0usize;
        let mut rows_rejected: usize = outcome
            .sheet_reports
            .iter()
            .map(|r| r.rows_dropped)
            .sum();
        for semester_rows in &outcome.semesters {
            let mut bucket = SemesterBucket::new(&semester_rows.name);
            for row in &semester_rows.rows {
                match build_course(row) {
                    Some(course) => {
                        course_count += 1;
                        bucket.push(course);
                    }
                    None => rows_rejected += 1,
                }
            }
            semesters.push(bucket);
        }

        let mut document = ScheduleDocument {
            file_name: workbook.file_name.clone(),
            semesters,
            format: outcome.format,
        };
        for bucket in &mut document.semesters {
            detect_conflicts(&mut bucket.courses, self.config.include_tba_conflicts);
        }

        let summary = LoadSummary {
            file_name: document.file_name.clone(),
            semesters: document.semesters.iter().map(|s| s.name.clone()).collect(),
            course_count,
            rows_rejected,
            single_sheet_term: document.format.is_single_sheet_term(),
            sheet_reports: outcome.sheet_reports,
        };
        info!(
            file = %summary.file_name,
            semesters = summary.semesters.len(),
            courses = summary.course_count,
            rejected = summary.rows_rejected,
            "schedule loaded"
        );
        self.document = Some(document);
        Ok(summary)
    }

    // ==========================================
    // Mutations
    // ==========================================

    /// Validate and add a course to a semester.
    pub fn add_course(&mut self, semester: &str, draft: &CourseDraft) -> ApiResult<CourseId> {
        let parsed = validate_draft(draft)?;
        let document = self.document.as_mut().ok_or(ApiError::NoDocument)?;
        let bucket = document
            .semester_mut(semester)
            .ok_or_else(|| ApiError::SemesterNotFound(semester.to_string()))?;

        let course = Course {
            id: CourseId::next(),
            course_num: draft.course_num.trim().to_string(),
            course_name: draft.course_name.trim().to_string(),
            faculty_key: normalize_faculty_key(&parsed.faculty),
            faculty_full: parsed.faculty,
            days: parsed.days,
            start_minute: parsed.start_minute,
            end_minute: parsed.end_minute,
            fte: parsed.fte,
            room: parsed.room,
            has_faculty_overlap: false,
            has_room_overlap: false,
            overlap_peers: BTreeSet::new(),
            source_row_index: None,
            source_row_raw: None,
        };
        let id = course.id;
        bucket.push(course);
        detect_conflicts(&mut bucket.courses, self.config.include_tba_conflicts);
        Ok(id)
    }

    /// Validate and apply a partial edit. Nothing mutates unless every
    /// supplied field validates.
    pub fn update_course(&mut self, id: CourseId, patch: &CoursePatch) -> ApiResult<()> {
        let parsed = validate_patch(patch)?;
        let document = self.document.as_mut().ok_or(ApiError::NoDocument)?;
        let semester = document
            .semester_of(id)
            .ok_or(ApiError::CourseNotFound(id.as_u64()))?
            .to_string();
        let bucket = document
            .semester_mut(&semester)
            .ok_or_else(|| ApiError::SemesterNotFound(semester.clone()))?;
        {
            let course = bucket
                .course_mut(id)
                .ok_or(ApiError::CourseNotFound(id.as_u64()))?;

            // Check the prospective window before touching any field, so a
            // rejection leaves the course exactly as it was.
            let start_minute = parsed.start_minute.unwrap_or(course.start_minute);
            let end_minute = parsed.end_minute.unwrap_or(course.end_minute);
            if start_minute >= end_minute {
                return Err(ApiError::ValidationRejected {
                    violations: vec![FieldViolation::new(
                        ScheduleField::EndTime,
                        "end must be after start",
                    )],
                });
            }

            if let Some(num) = &patch.course_num {
                course.course_num = num.trim().to_string();
            }
            if let Some(name) = &patch.course_name {
                course.course_name = name.trim().to_string();
            }
            if let Some(faculty) = parsed.faculty {
                course.faculty_key = normalize_faculty_key(&faculty);
                course.faculty_full = faculty;
            }
            if let Some(days) = parsed.days {
                course.days = days;
            }
            course.start_minute = start_minute;
            course.end_minute = end_minute;
            if let Some(fte) = parsed.fte {
                course.fte = fte;
            }
            if let Some(room) = parsed.room {
                course.room = room;
            }
        }
        bucket.rebuild_faculty_keys();
        detect_conflicts(&mut bucket.courses, self.config.include_tba_conflicts);
        Ok(())
    }

    /// Relocate a course to a day/slot, subject to its move class.
    pub fn move_course(
        &mut self,
        id: CourseId,
        target_day: Day,
        target_slot_label: &str,
    ) -> ApiResult<()> {
        let document = self.document.as_mut().ok_or(ApiError::NoDocument)?;
        let semester = document
            .semester_of(id)
            .ok_or(ApiError::CourseNotFound(id.as_u64()))?
            .to_string();
        let bucket = document
            .semester_mut(&semester)
            .ok_or_else(|| ApiError::SemesterNotFound(semester.clone()))?;
        {
            let course = bucket
                .course_mut(id)
                .ok_or(ApiError::CourseNotFound(id.as_u64()))?;

            if !can_move(course, target_day) {
                return Err(ApiError::InvalidMoveRequest(move_denied_message(
                    course, target_day,
                )));
            }
            let slot = slots_for_class(target_day.class())
                .iter()
                .find(|s| s.label == target_slot_label)
                .ok_or_else(|| ApiError::UnknownSlot {
                    label: target_slot_label.to_string(),
                    day: target_day.letter(),
                })?;

            // Single-day courses adopt the target day; locked patterns
            // keep their day set and only re-time. Duration is
            // preserved; the slot end is display geometry.
            let duration = course.duration_minutes();
            if slot.start_minute + duration > 24 * 60 {
                return Err(ApiError::InvalidMoveRequest(format!(
                    "{} is {} minutes long and would run past midnight from the {} slot",
                    course.course_num, duration, slot.label
                )));
            }
            if move_class(&course.days) == MoveClass::SingleDay {
                course.days = DaySet::single(target_day);
            }
            course.start_minute = slot.start_minute;
            course.end_minute = slot.start_minute + duration;
        }
        detect_conflicts(&mut bucket.courses, self.config.include_tba_conflicts);
        Ok(())
    }

    /// Delete a course.
    pub fn remove_course(&mut self, id: CourseId) -> ApiResult<()> {
        let document = self.document.as_mut().ok_or(ApiError::NoDocument)?;
        let semester = document
            .semester_of(id)
            .ok_or(ApiError::CourseNotFound(id.as_u64()))?
            .to_string();
        let bucket = document
            .semester_mut(&semester)
            .ok_or_else(|| ApiError::SemesterNotFound(semester.clone()))?;
        bucket.remove(id);
        detect_conflicts(&mut bucket.courses, self.config.include_tba_conflicts);
        Ok(())
    }

    // ==========================================
    // Read-only outputs
    // ==========================================

    /// Slot assignment for one of a course's days, for the renderer.
    pub fn slot_for(&self, id: CourseId, day: Day) -> ApiResult<Option<&'static TimeSlot>> {
        let document = self.document.as_ref().ok_or(ApiError::NoDocument)?;
        let (_, course) = document
            .find_course(id)
            .ok_or(ApiError::CourseNotFound(id.as_u64()))?;
        Ok(map_to_slot(course, day))
    }

    /// faculty key -> FTE total for one semester.
    pub fn fte_report(&self, semester: &str) -> ApiResult<BTreeMap<String, f64>> {
        let document = self.document.as_ref().ok_or(ApiError::NoDocument)?;
        let bucket = document
            .semester(semester)
            .ok_or_else(|| ApiError::SemesterNotFound(semester.to_string()))?;
        Ok(aggregate_fte(&bucket.courses))
    }

    /// Export the whole document in its original tabular shape.
    pub fn export(&self) -> ApiResult<Vec<ExportTable>> {
        let document = self.document.as_ref().ok_or(ApiError::NoDocument)?;
        Ok(export_semesters(document))
    }
}

fn move_denied_message(course: &Course, target_day: Day) -> String {
    match move_class(&course.days) {
        MoveClass::MwfLocked => format!(
            "{} meets MWF and can only move to Monday, Wednesday, or Friday (got {})",
            course.course_num, target_day
        ),
        MoveClass::TrLocked => format!(
            "{} meets TR and can only move to Tuesday or Thursday (got {})",
            course.course_num, target_day
        ),
        _ => format!(
            "{} has a non-standard day pattern ({}); edit its fields instead of moving it",
            course.course_num, course.days
        ),
    }
}

// ==========================================
// Draft / patch validation
// ==========================================
// Field-by-field, collected into one rejection; nothing is created or
// mutated unless every supplied field validates.

struct ParsedDraft {
    faculty: String,
    days: DaySet,
    start_minute: u32,
    end_minute: u32,
    fte: f64,
    room: Option<String>,
}

fn validate_draft(draft: &CourseDraft) -> Result<ParsedDraft, ApiError> {
    let mut violations = Vec::new();

    if draft.course_num.trim().is_empty() {
        violations.push(FieldViolation::new(ScheduleField::CourseNum, "required"));
    }

    let days = parse_day_set(&draft.days);
    if days.is_empty() {
        violations.push(FieldViolation::new(
            ScheduleField::Days,
            format!("unrecognized day string {:?}", draft.days),
        ));
    }

    let start_minute = match parse_time_of_day(&draft.start_time) {
        Ok(minute) => Some(minute),
        Err(err) => {
            violations.push(FieldViolation::new(ScheduleField::StartTime, err.to_string()));
            None
        }
    };
    let end_minute = match parse_time_of_day(&draft.end_time) {
        Ok(minute) => Some(minute),
        Err(err) => {
            violations.push(FieldViolation::new(ScheduleField::EndTime, err.to_string()));
            None
        }
    };
    if let (Some(start), Some(end)) = (start_minute, end_minute) {
        if start >= end {
            violations.push(FieldViolation::new(
                ScheduleField::EndTime,
                "end must be after start",
            ));
        }
    }

    let fte = if draft.fte.trim().is_empty() {
        1.0
    } else {
        match draft.fte.trim().parse::<f64>() {
            Ok(value) if value >= 0.0 => value,
            _ => {
                violations.push(FieldViolation::new(
                    ScheduleField::Fte,
                    format!("not a non-negative number: {:?}", draft.fte),
                ));
                1.0
            }
        }
    };

    if !violations.is_empty() {
        return Err(ApiError::ValidationRejected { violations });
    }

    let faculty = if draft.faculty.trim().is_empty() {
        "TBA".to_string()
    } else {
        draft.faculty.trim().to_string()
    };
    let room = if draft.room.trim().is_empty() {
        None
    } else {
        Some(draft.room.trim().to_string())
    };

    Ok(ParsedDraft {
        faculty,
        days,
        // Both are Some when violations is empty.
        start_minute: start_minute.unwrap_or(0),
        end_minute: end_minute.unwrap_or(0),
        fte,
        room,
    })
}

struct ParsedPatch {
    faculty: Option<String>,
    days: Option<DaySet>,
    start_minute: Option<u32>,
    end_minute: Option<u32>,
    fte: Option<f64>,
    room: Option<Option<String>>,
}

fn validate_patch(patch: &CoursePatch) -> Result<ParsedPatch, ApiError> {
    let mut violations = Vec::new();

    let days = match &patch.days {
        Some(text) => {
            let set = parse_day_set(text);
            if set.is_empty() {
                violations.push(FieldViolation::new(
                    ScheduleField::Days,
                    format!("unrecognized day string {:?}", text),
                ));
                None
            } else {
                Some(set)
            }
        }
        None => None,
    };

    let mut parse_minute = |field: ScheduleField, text: &Option<String>| match text {
        Some(text) => match parse_time_of_day(text) {
            Ok(minute) => Some(minute),
            Err(err) => {
                violations.push(FieldViolation::new(field, err.to_string()));
                None
            }
        },
        None => None,
    };
    let start_minute = parse_minute(ScheduleField::StartTime, &patch.start_time);
    let end_minute = parse_minute(ScheduleField::EndTime, &patch.end_time);

    let fte = match &patch.fte {
        Some(text) => match text.trim().parse::<f64>() {
            Ok(value) if value >= 0.0 => Some(value),
            _ => {
                violations.push(FieldViolation::new(
                    ScheduleField::Fte,
                    format!("not a non-negative number: {:?}", text),
                ));
                None
            }
        },
        None => None,
    };

    if let Some(num) = &patch.course_num {
        if num.trim().is_empty() {
            violations.push(FieldViolation::new(ScheduleField::CourseNum, "required"));
        }
    }

    if !violations.is_empty() {
        return Err(ApiError::ValidationRejected { violations });
    }

    let faculty = patch
        .faculty
        .as_ref()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .map(|f| f.to_string());
    let room = patch.room.as_ref().map(|r| {
        let trimmed = r.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    });

    Ok(ParsedPatch {
        faculty,
        days,
        start_minute,
        end_minute,
        fte,
        room,
    })
}
