// ==========================================
// Course Schedule Core - Engine Layer
// ==========================================
// Pure computations over the course model: building, conflict
// detection, slot mapping, move gating, FTE aggregation, export.
// Everything here operates on references passed in; no engine keeps
// its own copy of the document.
// ==========================================

pub mod conflict;
pub mod course_builder;
pub mod exporter;
pub mod fte;
pub mod move_validator;
pub mod slot_mapper;

pub use conflict::detect_conflicts;
pub use course_builder::build_course;
pub use exporter::{export_semesters, write_csv, ExportTable, FIXED_EXPORT_HEADER};
pub use fte::aggregate_fte;
pub use move_validator::{can_move, move_class, MoveClass};
pub use slot_mapper::{map_to_slot, SLOT_SNAP_TOLERANCE_MIN};
