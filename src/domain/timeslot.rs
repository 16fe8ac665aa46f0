// ==========================================
// Course Schedule Core - Display Slot Tables
// ==========================================
// Fixed, immutable enumeration of named display slots, one table per
// day-class. Not user-editable; defines the discrete grid courses are
// snapped into.
// ==========================================

use crate::domain::day::DayClass;
use serde::Serialize;

// ==========================================
// TimeSlot
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub label: &'static str,
    pub start_minute: u32,
    pub end_minute: u32,
}

const fn slot(label: &'static str, start_minute: u32, end_minute: u32) -> TimeSlot {
    TimeSlot {
        label,
        start_minute,
        end_minute,
    }
}

/// MWF day-class: hourly 50-minute blocks.
pub const MWF_SLOTS: &[TimeSlot] = &[
    slot("8:00 AM", 480, 530),
    slot("9:00 AM", 540, 590),
    slot("10:00 AM", 600, 650),
    slot("11:00 AM", 660, 710),
    slot("12:00 PM", 720, 770),
    slot("1:00 PM", 780, 830),
    slot("2:00 PM", 840, 890),
    slot("3:00 PM", 900, 950),
    slot("4:00 PM", 960, 1010),
];

/// TR day-class: 80-minute blocks on the half-semester grid.
pub const TR_SLOTS: &[TimeSlot] = &[
    slot("8:00 AM", 480, 560),
    slot("9:30 AM", 570, 650),
    slot("11:00 AM", 660, 740),
    slot("12:30 PM", 750, 830),
    slot("2:00 PM", 840, 920),
    slot("3:30 PM", 930, 1010),
];

/// Slot table for a day-class.
pub fn slots_for_class(class: DayClass) -> &'static [TimeSlot] {
    match class {
        DayClass::Mwf => MWF_SLOTS,
        DayClass::Tr => TR_SLOTS,
    }
}
