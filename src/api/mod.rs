// ==========================================
// Course Schedule Core - API Layer
// ==========================================
// The surface the surrounding UI talks to: session ownership of the
// document, mutation requests, read-only render outputs, export.
// ==========================================

pub mod error;
pub mod schedule_api;

pub use error::{ApiError, ApiResult, FieldViolation};
pub use schedule_api::{CourseDraft, CoursePatch, LoadSummary, ScheduleSession};
