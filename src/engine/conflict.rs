// ==========================================
// Course Schedule Core - Conflict Detector
// ==========================================
// Pairwise overlap analysis within one semester bucket. Annotates
// courses in place; every run clears prior annotations first, so the
// pass is idempotent. O(n^2) by design; n is tens to low hundreds.
// ==========================================

use crate::domain::course::Course;

/// Faculty placeholders excluded from conflicts unless opted in.
const PLACEHOLDER_KEYS: &[&str] = &["tba", "tbd"];

/// Recompute conflict annotations for one semester's course list.
///
/// A pair is tested when the faculty keys match exactly (subject to the
/// TBA/TBD exclusion when `include_tba` is false) or when both rooms
/// are present and equal. A tested pair conflicts when the day sets
/// intersect and the half-open meeting windows overlap. Marking is
/// symmetric: both flags and both peer sets are updated.
pub fn detect_conflicts(courses: &mut [Course], include_tba: bool) {
    for course in courses.iter_mut() {
        course.clear_conflicts();
    }

    for i in 0..courses.len() {
        for j in (i + 1)..courses.len() {
            let (head, tail) = courses.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            let faculty_pair = same_faculty(a, b, include_tba);
            let room_pair = same_room(a, b);
            if !faculty_pair && !room_pair {
                continue;
            }
            if a.days.intersection(&b.days).is_empty() {
                continue;
            }
            if !windows_overlap(a, b) {
                continue;
            }

            if faculty_pair {
                a.has_faculty_overlap = true;
                b.has_faculty_overlap = true;
            }
            if room_pair {
                a.has_room_overlap = true;
                b.has_room_overlap = true;
            }
            a.overlap_peers.insert(b.id);
            b.overlap_peers.insert(a.id);
        }
    }
}

fn same_faculty(a: &Course, b: &Course, include_tba: bool) -> bool {
    if a.faculty_key != b.faculty_key {
        return false;
    }
    if include_tba {
        return true;
    }
    let key = a.faculty_key.to_lowercase();
    !PLACEHOLDER_KEYS.contains(&key.as_str())
}

fn same_room(a: &Course, b: &Course) -> bool {
    match (&a.room, &b.room) {
        (Some(ra), Some(rb)) => !ra.is_empty() && ra == rb,
        _ => false,
    }
}

/// Half-open interval overlap: [s1,e1) and [s2,e2).
fn windows_overlap(a: &Course, b: &Course) -> bool {
    a.start_minute < b.end_minute && a.end_minute > b.start_minute
}
