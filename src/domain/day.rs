// ==========================================
// Course Schedule Core - Weekday Types
// ==========================================
// Canonical five-day teaching week: m, t, w, r, f
// (r = Thursday, the single-letter registrar convention)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Day
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

/// Canonical ordering of the teaching week. Every `DaySet` iterates in
/// this order regardless of input order.
pub const CANONICAL_ORDER: [Day; 5] = [
    Day::Monday,
    Day::Tuesday,
    Day::Wednesday,
    Day::Thursday,
    Day::Friday,
];

/// The two day-classes the display grid is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayClass {
    Mwf,
    Tr,
}

impl Day {
    /// Single-letter registrar code.
    pub fn letter(self) -> char {
        match self {
            Day::Monday => 'm',
            Day::Tuesday => 't',
            Day::Wednesday => 'w',
            Day::Thursday => 'r',
            Day::Friday => 'f',
        }
    }

    /// Parse a single registrar letter (case-insensitive).
    pub fn from_letter(letter: char) -> Option<Day> {
        match letter.to_ascii_lowercase() {
            'm' => Some(Day::Monday),
            't' => Some(Day::Tuesday),
            'w' => Some(Day::Wednesday),
            'r' => Some(Day::Thursday),
            'f' => Some(Day::Friday),
            _ => None,
        }
    }

    pub fn class(self) -> DayClass {
        match self {
            Day::Monday | Day::Wednesday | Day::Friday => DayClass::Mwf,
            Day::Tuesday | Day::Thursday => DayClass::Tr,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Day::Monday => 1 << 0,
            Day::Tuesday => 1 << 1,
            Day::Wednesday => 1 << 2,
            Day::Thursday => 1 << 3,
            Day::Friday => 1 << 4,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

// ==========================================
// DaySet
// ==========================================
// Deduplicated, canonically ordered subset of the teaching week.
// Serialized as the registrar string ("mwf", "tr", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DaySet(u8);

impl DaySet {
    pub fn empty() -> DaySet {
        DaySet(0)
    }

    pub fn single(day: Day) -> DaySet {
        DaySet(day.bit())
    }

    pub fn insert(&mut self, day: Day) {
        self.0 |= day.bit();
    }

    pub fn contains(&self, day: Day) -> bool {
        self.0 & day.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Shared days of two sets.
    pub fn intersection(&self, other: &DaySet) -> DaySet {
        DaySet(self.0 & other.0)
    }

    /// Days in canonical m,t,w,r,f order.
    pub fn iter(&self) -> impl Iterator<Item = Day> + '_ {
        CANONICAL_ORDER.into_iter().filter(|d| self.contains(*d))
    }

    /// True when the set touches both the MWF and the TR day-class.
    pub fn spans_both_classes(&self) -> bool {
        let mut mwf = false;
        let mut tr = false;
        for day in self.iter() {
            match day.class() {
                DayClass::Mwf => mwf = true,
                DayClass::Tr => tr = true,
            }
        }
        mwf && tr
    }

    /// Registrar string in canonical order ("mwf").
    pub fn canonical_string(&self) -> String {
        self.iter().map(Day::letter).collect()
    }
}

impl FromIterator<Day> for DaySet {
    fn from_iter<I: IntoIterator<Item = Day>>(iter: I) -> DaySet {
        let mut set = DaySet::empty();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_string())
    }
}

impl Serialize for DaySet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical_string())
    }
}

impl<'de> Deserialize<'de> for DaySet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<DaySet, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(text.chars().filter_map(Day::from_letter).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_ordering() {
        let set: DaySet = [Day::Friday, Day::Monday, Day::Wednesday]
            .into_iter()
            .collect();
        assert_eq!(set.canonical_string(), "mwf");
    }

    #[test]
    fn test_dedup() {
        let set: DaySet = [Day::Tuesday, Day::Tuesday, Day::Thursday]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_string(), "tr");
    }

    #[test]
    fn test_intersection() {
        let mwf: DaySet = "mwf".chars().filter_map(Day::from_letter).collect();
        let mw: DaySet = "mw".chars().filter_map(Day::from_letter).collect();
        let tr: DaySet = "tr".chars().filter_map(Day::from_letter).collect();
        assert_eq!(mwf.intersection(&mw).canonical_string(), "mw");
        assert!(mwf.intersection(&tr).is_empty());
    }

    #[test]
    fn test_spans_both_classes() {
        let mtwf: DaySet = "mtwf".chars().filter_map(Day::from_letter).collect();
        let mwf: DaySet = "mwf".chars().filter_map(Day::from_letter).collect();
        assert!(mtwf.spans_both_classes());
        assert!(!mwf.spans_both_classes());
    }

    #[test]
    fn test_serde_as_registrar_string() {
        let set: DaySet = "mwf".chars().filter_map(Day::from_letter).collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), "\"mwf\"");
        let back: DaySet = serde_json::from_str("\"tr\"").unwrap();
        assert_eq!(back.to_string(), "tr");
    }

    #[test]
    fn test_day_class() {
        assert_eq!(Day::Wednesday.class(), DayClass::Mwf);
        assert_eq!(Day::Thursday.class(), DayClass::Tr);
    }
}
