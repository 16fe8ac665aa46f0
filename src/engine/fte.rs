// ==========================================
// Course Schedule Core - FTE Aggregator
// ==========================================
// Workload totals per instructor key, rounded to 2 decimal places.
// ==========================================

use crate::domain::course::Course;
use std::collections::BTreeMap;

/// Sum FTE per faculty key. Totals round half-away-from-zero to two
/// decimal places; courses with an empty key produce no entry.
pub fn aggregate_fte(courses: &[Course]) -> BTreeMap<String, f64> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for course in courses {
        if course.faculty_key.is_empty() {
            continue;
        }
        *totals.entry(course.faculty_key.clone()).or_insert(0.0) += course.fte;
    }
    for total in totals.values_mut() {
        *total = round2(*total);
    }
    totals
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::CourseId;
    use crate::temporal::parse_day_set;
    use std::collections::BTreeSet;

    fn course(key: &str, fte: f64) -> Course {
        Course {
            id: CourseId::next(),
            course_num: "CS101".into(),
            course_name: String::new(),
            faculty_key: key.into(),
            faculty_full: key.into(),
            days: parse_day_set("mwf"),
            start_minute: 480,
            end_minute: 530,
            fte,
            room: None,
            has_faculty_overlap: false,
            has_room_overlap: false,
            overlap_peers: BTreeSet::new(),
            source_row_index: None,
            source_row_raw: None,
        }
    }

    #[test]
    fn test_sums_per_faculty() {
        let courses = vec![
            course("Smith", 1.0),
            course("Smith", 0.5),
            course("Lee", 0.25),
        ];
        let totals = aggregate_fte(&courses);
        assert_eq!(totals.get("Smith"), Some(&1.5));
        assert_eq!(totals.get("Lee"), Some(&0.25));
    }

    #[test]
    fn test_rounds_to_two_places() {
        // 0.1 + 0.2 accumulates binary noise; the total must come out 0.3.
        let courses = vec![course("Smith", 0.1), course("Smith", 0.2)];
        assert_eq!(aggregate_fte(&courses).get("Smith"), Some(&0.3));

        let courses = vec![course("Lee", 0.125)];
        assert_eq!(aggregate_fte(&courses).get("Lee"), Some(&0.13));
    }

    #[test]
    fn test_empty_key_skipped() {
        let totals = aggregate_fte(&[course("", 1.0)]);
        assert!(totals.is_empty());
    }
}
