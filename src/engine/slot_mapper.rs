// ==========================================
// Course Schedule Core - Time-Block Mapper
// ==========================================
// Snaps a course-day onto the fixed display slot grid. Containment
// first, then nearest slot start within tolerance; outside tolerance
// the course-day is homeless and callers must handle it explicitly.
// ==========================================

use crate::domain::course::Course;
use crate::domain::day::{Day, DayClass};
use crate::domain::timeslot::{slots_for_class, TimeSlot};

/// Maximum distance between a course start and a slot start for the
/// nearest-match fallback.
pub const SLOT_SNAP_TOLERANCE_MIN: u32 = 30;

/// Map one of a course's assigned days onto a display slot.
///
/// The day's class selects the slot table; a course whose day set spans
/// both classes searches the MWF table first, then the TR table. The
/// first slot whose `[start,end)` contains the course start wins;
/// otherwise the slot with the closest start is taken when within
/// tolerance. `None` means the course-day is homeless.
pub fn map_to_slot(course: &Course, day: Day) -> Option<&'static TimeSlot> {
    let tables: &[&[TimeSlot]] = if course.days.spans_both_classes() {
        &[
            slots_for_class(DayClass::Mwf),
            slots_for_class(DayClass::Tr),
        ]
    } else {
        match day.class() {
            DayClass::Mwf => &[slots_for_class(DayClass::Mwf)],
            DayClass::Tr => &[slots_for_class(DayClass::Tr)],
        }
    };

    let start = course.start_minute;
    for table in tables {
        for slot in *table {
            if slot.start_minute <= start && start < slot.end_minute {
                return Some(slot);
            }
        }
    }

    let mut best: Option<(&'static TimeSlot, u32)> = None;
    for table in tables {
        for slot in *table {
            let distance = slot.start_minute.abs_diff(start);
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((slot, distance));
            }
        }
    }
    match best {
        Some((slot, distance)) if distance <= SLOT_SNAP_TOLERANCE_MIN => Some(slot),
        _ => None,
    }
}
