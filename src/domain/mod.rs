// ==========================================
// Course Schedule Core - Domain Layer
// ==========================================
// Entities and value types: the canonical course model, weekday sets,
// semester aggregates, display slot tables, format metadata.
// ==========================================

pub mod course;
pub mod day;
pub mod format_info;
pub mod semester;
pub mod timeslot;

pub use course::{normalize_faculty_key, Course, CourseId};
pub use day::{Day, DayClass, DaySet};
pub use format_info::{ColumnMapping, FormatInfo, ScheduleField, ALL_FIELDS};
pub use semester::{ScheduleDocument, SemesterBucket, SemesterKind};
pub use timeslot::{slots_for_class, TimeSlot, MWF_SLOTS, TR_SLOTS};
