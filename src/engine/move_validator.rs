// ==========================================
// Course Schedule Core - Move Validator
// ==========================================
// Relocation gating. A course's day set determines its relocation
// class; the class is recomputed per check, never stored, and there
// are no transitions between classes.
// ==========================================

use crate::domain::course::Course;
use crate::domain::day::{Day, DayClass, DaySet};
use serde::Serialize;

// ==========================================
// MoveClass
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveClass {
    /// Exactly one meeting day: free to move anywhere.
    SingleDay,
    /// Exactly {m,w,f}: target must stay within the MWF class.
    MwfLocked,
    /// Exactly {t,r}: target must stay within the TR class.
    TrLocked,
    /// Any other multi-day pattern: never relocatable; edit fields
    /// directly instead.
    NonStandard,
}

/// Classify a day set for relocation purposes.
pub fn move_class(days: &DaySet) -> MoveClass {
    if days.len() == 1 {
        return MoveClass::SingleDay;
    }
    let mwf: DaySet = [Day::Monday, Day::Wednesday, Day::Friday]
        .into_iter()
        .collect();
    let tr: DaySet = [Day::Tuesday, Day::Thursday].into_iter().collect();
    if *days == mwf {
        MoveClass::MwfLocked
    } else if *days == tr {
        MoveClass::TrLocked
    } else {
        MoveClass::NonStandard
    }
}

/// Whether a course may be relocated to the target day. Pure; failure
/// carries no reason here, callers surface the user-facing message.
pub fn can_move(course: &Course, target_day: Day) -> bool {
    match move_class(&course.days) {
        MoveClass::SingleDay => true,
        MoveClass::MwfLocked => target_day.class() == DayClass::Mwf,
        MoveClass::TrLocked => target_day.class() == DayClass::Tr,
        MoveClass::NonStandard => false,
    }
}
