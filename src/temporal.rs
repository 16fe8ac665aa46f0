// ==========================================
// Course Schedule Core - Temporal Parser
// ==========================================
// Free-form time-of-day and day-of-week text -> canonical values.
// Input variance is the point: sheets mix "8:30 AM", "830", "14.30",
// "Tuesday Thursday", "TR", "M W F" freely.
// ==========================================

use crate::domain::day::{Day, DaySet};
use thiserror::Error;

// ==========================================
// Errors
// ==========================================
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("unrecognized time of day: {0:?}")]
    InvalidFormat(String),

    #[error("hour out of range in {0:?}")]
    HourOutOfRange(String),

    #[error("minute out of range in {0:?}")]
    MinuteOutOfRange(String),
}

// ==========================================
// Time of day
// ==========================================

#[derive(Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Parse a time-of-day string into minutes since midnight.
///
/// Accepted shapes: `H:MM`, `HH:MM`, `HMM`/`HHMM`, `H.MM`, bare `H`/`HH`,
/// each with an optional `AM`/`PM`/`A`/`P`/`A.M.`/`P.M.` suffix
/// (case-insensitive, whitespace ignored). 12-hour values convert to
/// 24-hour (`12 AM` -> 0, `12 PM` -> 720). Without a suffix the input is
/// taken as already 24-hour.
pub fn parse_time_of_day(text: &str) -> Result<u32, TimeParseError> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_uppercase();
    if compact.is_empty() {
        return Err(TimeParseError::InvalidFormat(text.to_string()));
    }

    let (digits, meridiem) = strip_meridiem(&compact);
    if digits.is_empty() {
        return Err(TimeParseError::InvalidFormat(text.to_string()));
    }

    let (hour, minute) = split_hour_minute(digits)
        .ok_or_else(|| TimeParseError::InvalidFormat(text.to_string()))?;

    if minute > 59 {
        return Err(TimeParseError::MinuteOutOfRange(text.to_string()));
    }

    let hour24 = match meridiem {
        Some(m) => {
            if !(1..=12).contains(&hour) {
                return Err(TimeParseError::HourOutOfRange(text.to_string()));
            }
            match (m, hour) {
                (Meridiem::Am, 12) => 0,
                (Meridiem::Am, h) => h,
                (Meridiem::Pm, 12) => 12,
                (Meridiem::Pm, h) => h + 12,
            }
        }
        None => {
            if hour > 23 {
                return Err(TimeParseError::HourOutOfRange(text.to_string()));
            }
            hour
        }
    };

    Ok(hour24 * 60 + minute)
}

/// Peel a meridiem suffix off an uppercased, whitespace-free string.
fn strip_meridiem(compact: &str) -> (&str, Option<Meridiem>) {
    for (suffix, meridiem) in [
        ("A.M.", Meridiem::Am),
        ("P.M.", Meridiem::Pm),
        ("AM", Meridiem::Am),
        ("PM", Meridiem::Pm),
        ("A", Meridiem::Am),
        ("P", Meridiem::Pm),
    ] {
        if let Some(rest) = compact.strip_suffix(suffix) {
            return (rest, Some(meridiem));
        }
    }
    (compact, None)
}

/// Split the numeric part into (hour, minute). Handles `H:MM`, `H.MM`,
/// `HMM`/`HHMM`, and bare `H`/`HH` (minute 0).
fn split_hour_minute(digits: &str) -> Option<(u32, u32)> {
    if let Some((h, m)) = digits.split_once([':', '.']) {
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return None;
        }
        return Some((h.parse().ok()?, m.parse().ok()?));
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    match digits.len() {
        1 | 2 => Some((digits.parse().ok()?, 0)),
        3 | 4 => {
            let (h, m) = digits.split_at(digits.len() - 2);
            Some((h.parse().ok()?, m.parse().ok()?))
        }
        _ => None,
    }
}

// ==========================================
// Day sets
// ==========================================

// Whole-word day vocabulary. "th" is the registrar shorthand for the
// Tuesday+Thursday pattern, not Thursday alone.
const WORD_TABLE: &[(&str, &[Day])] = &[
    ("m", &[Day::Monday]),
    ("mon", &[Day::Monday]),
    ("monday", &[Day::Monday]),
    ("t", &[Day::Tuesday]),
    ("tu", &[Day::Tuesday]),
    ("tue", &[Day::Tuesday]),
    ("tues", &[Day::Tuesday]),
    ("tuesday", &[Day::Tuesday]),
    ("w", &[Day::Wednesday]),
    ("wed", &[Day::Wednesday]),
    ("weds", &[Day::Wednesday]),
    ("wednesday", &[Day::Wednesday]),
    ("r", &[Day::Thursday]),
    ("th", &[Day::Tuesday, Day::Thursday]),
    ("thu", &[Day::Thursday]),
    ("thur", &[Day::Thursday]),
    ("thurs", &[Day::Thursday]),
    ("thursday", &[Day::Thursday]),
    ("f", &[Day::Friday]),
    ("fri", &[Day::Friday]),
    ("friday", &[Day::Friday]),
];

/// Parse day-of-week text into a canonical day set.
///
/// Whole-word and abbreviation matches are tried first ("Tuesday
/// Thursday", "Mon Wed", "M W F"); when no token matches, the input is
/// scanned character by character for the registrar letters m,t,w,r,f
/// ("MWF", "TR"). Output is deduplicated and canonically ordered.
/// Unparseable text yields the empty set; callers treat that as a
/// validation failure for the owning row.
pub fn parse_day_set(text: &str) -> DaySet {
    let lowered = text.to_ascii_lowercase();

    let mut set = DaySet::empty();
    for token in lowered.split(|c: char| !c.is_ascii_alphabetic()) {
        if token.is_empty() {
            continue;
        }
        if let Some((_, days)) = WORD_TABLE.iter().find(|(word, _)| *word == token) {
            for day in *days {
                set.insert(*day);
            }
        }
    }
    if !set.is_empty() {
        return set;
    }

    // Letter-sequence fallback: "mwf", "tr", "mtwrf"
    lowered.chars().filter_map(Day::from_letter).collect()
}

// ==========================================
// Formatting
// ==========================================

/// Render minutes since midnight as 12-hour text ("8:30 AM").
/// Inverse of `parse_time_of_day` for in-range values.
pub fn format_minutes(minute_of_day: u32) -> String {
    let hour24 = minute_of_day / 60;
    let minute = minute_of_day % 60;
    let (hour12, suffix) = match hour24 {
        0 => (12, "AM"),
        1..=11 => (hour24, "AM"),
        12 => (12, "PM"),
        _ => (hour24 - 12, "PM"),
    };
    format!("{}:{:02} {}", hour12, minute, suffix)
}
