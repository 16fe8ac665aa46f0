// ==========================================
// Course Schedule Core
// ==========================================
// Ingests loosely-structured tabular academic-schedule data, normalizes
// it into a canonical course model, detects scheduling conflicts, maps
// courses onto fixed display time-slots, validates relocation moves,
// and re-serializes back into the original tabular shape. Rendering,
// drag interaction, and dialogs are external consumers of this crate.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and value types
pub mod domain;

// Temporal parsing - time-of-day and day-set text
pub mod temporal;

// Ingestion layer - files, headers, normalization, partitioning
pub mod importer;

// Engine layer - pure computations over the course model
pub mod engine;

// API layer - session, mutations, export
pub mod api;

// Configuration layer - injected lookup tables
pub mod config;

// Logging
pub mod logging;

// ==========================================
// Re-exports
// ==========================================

// Domain types
pub use domain::{
    Course, CourseId, Day, DayClass, DaySet, FormatInfo, ScheduleDocument, ScheduleField,
    SemesterBucket, SemesterKind, TimeSlot,
};

// Engines
pub use engine::{
    aggregate_fte, build_course, can_move, detect_conflicts, export_semesters, map_to_slot,
    move_class, write_csv, ExportTable, MoveClass,
};

// Ingestion
pub use importer::{ImportError, ParsedSheet, ParsedWorkbook, UniversalFileParser};

// API
pub use api::{ApiError, ApiResult, CourseDraft, CoursePatch, LoadSummary, ScheduleSession};

// Configuration
pub use config::ScheduleConfig;

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Course Schedule Core";
