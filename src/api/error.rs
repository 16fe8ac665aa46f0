// ==========================================
// Course Schedule Core - API Error Types
// ==========================================
// User-facing failures for the mutation/export surface. Validation
// failures carry field-by-field detail so the edit dialog can mark
// individual inputs.
// ==========================================

use crate::domain::format_info::ScheduleField;
use crate::importer::error::ImportError;
use serde::Serialize;
use thiserror::Error;

// ==========================================
// FieldViolation
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    pub field: ScheduleField,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: ScheduleField, message: impl Into<String>) -> FieldViolation {
        FieldViolation {
            field,
            message: message.into(),
        }
    }
}

// ==========================================
// ApiError
// ==========================================
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== Load errors =====
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("no schedule loaded")]
    NoDocument,

    // ===== Lookup errors =====
    #[error("semester not found: {0}")]
    SemesterNotFound(String),

    #[error("course not found: id={0}")]
    CourseNotFound(u64),

    // ===== Mutation errors =====
    #[error("validation rejected ({} field(s)): {}", violations.len(), summarize(violations))]
    ValidationRejected { violations: Vec<FieldViolation> },

    #[error("move not allowed: {0}")]
    InvalidMoveRequest(String),

    #[error("unknown slot {label:?} for day {day}")]
    UnknownSlot { label: String, day: char },

    // ===== General =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias for the API surface.
pub type ApiResult<T> = Result<T, ApiError>;
