// ==========================================
// Engine Integration Tests
// ==========================================
// Conflict annotation, slot mapping, move gating, and FTE totals over
// a document loaded through the full ingestion pipeline.
// ==========================================

mod helpers;

use course_scheduler::{map_to_slot, ApiError, Day, ScheduleSession};
use helpers::{sheet, workbook, HEADER};

fn loaded_session() -> ScheduleSession {
    let wb = workbook(
        "plan.xlsx",
        vec![sheet(
            "Fall",
            &[
                HEADER,
                // Same instructor under two spellings, overlapping Mon/Wed.
                &["CS101", "Intro", "Smith, J.", "MWF", "8:30 AM", "9:30 AM", "1", "SCI 204"],
                &["CS102", "Data Structures", "J. Smith", "MW", "9:00 AM", "10:00 AM", "1", "SCI 204"],
                // Different instructor and room, overlapping window: clean.
                &["CS103", "Discrete Math", "Lee, A.", "MWF", "9:30 AM", "10:30 AM", "1", "ENG 12"],
                // Same instructor again but on disjoint days: clean.
                &["CS104", "Algorithms", "Smith, J.", "TR", "9:30 AM", "10:50 AM", "0.5", "SCI 204"],
                // Two unstaffed sections sharing a window: not a conflict.
                &["CS105", "Lab A", "TBA", "F", "1:00 PM", "2:00 PM", "0.25", ""],
                &["CS106", "Lab B", "TBA", "F", "1:00 PM", "2:00 PM", "0.25", ""],
                // Early single-day section, off the display grid.
                &["CS107", "Seminar", "Kim", "F", "6:00 AM", "6:50 AM", "0.25", ""],
            ],
        )],
    );
    let mut session = ScheduleSession::default();
    session.load_workbook(&wb).unwrap();
    session
}

fn course_id(session: &ScheduleSession, num: &str) -> course_scheduler::CourseId {
    session
        .document()
        .unwrap()
        .semester("fall")
        .unwrap()
        .courses
        .iter()
        .find(|c| c.course_num == num)
        .unwrap()
        .id
}

#[test]
fn test_conflicts_across_faculty_spellings() {
    let session = loaded_session();
    let doc = session.document().unwrap();
    let bucket = doc.semester("fall").unwrap();
    let find = |num: &str| bucket.courses.iter().find(|c| c.course_num == num).unwrap();

    let cs101 = find("CS101");
    let cs102 = find("CS102");
    assert_eq!(cs101.faculty_key, "Smith");
    assert_eq!(cs102.faculty_key, "Smith");
    assert!(cs101.has_faculty_overlap);
    assert!(cs102.has_faculty_overlap);
    // Same room, overlapping window.
    assert!(cs101.has_room_overlap);
    assert!(cs102.has_room_overlap);
    // Peer links are symmetric.
    assert!(cs101.overlap_peers.contains(&cs102.id));
    assert!(cs102.overlap_peers.contains(&cs101.id));

    // Overlapping window, different instructor and room.
    let cs103 = find("CS103");
    assert!(!cs103.has_faculty_overlap);
    assert!(!cs103.has_room_overlap);

    // Same instructor, disjoint days.
    let cs104 = find("CS104");
    assert!(!cs104.has_faculty_overlap);

    // TBA placeholder never conflicts with itself.
    assert!(!find("CS105").has_faculty_overlap);
    assert!(!find("CS106").has_faculty_overlap);
}

#[test]
fn test_slot_mapping_over_loaded_courses() {
    let session = loaded_session();
    let doc = session.document().unwrap();
    let bucket = doc.semester("fall").unwrap();
    let find = |num: &str| bucket.courses.iter().find(|c| c.course_num == num).unwrap();

    // 8:30 sits inside the 8:00 MWF block.
    let slot = map_to_slot(find("CS101"), Day::Monday).unwrap();
    assert_eq!(slot.label, "8:00 AM");

    // TR day uses the TR table.
    let slot = map_to_slot(find("CS104"), Day::Tuesday).unwrap();
    assert_eq!(slot.label, "9:30 AM");
    assert_eq!(slot.end_minute, 650);

    // 6:00 AM is beyond snap tolerance of every slot.
    assert!(map_to_slot(find("CS107"), Day::Friday).is_none());

    // Same answers through the session surface.
    let id = course_id(&session, "CS101");
    assert_eq!(session.slot_for(id, Day::Friday).unwrap().unwrap().label, "8:00 AM");
    let id = course_id(&session, "CS107");
    assert!(session.slot_for(id, Day::Friday).unwrap().is_none());
}

#[test]
fn test_move_gating_by_day_pattern() {
    let mut session = loaded_session();

    // MWF-locked: Tuesday denied, Friday allowed.
    let mwf = course_id(&session, "CS101");
    assert!(matches!(
        session.move_course(mwf, Day::Tuesday, "9:30 AM"),
        Err(ApiError::InvalidMoveRequest(_))
    ));
    session.move_course(mwf, Day::Friday, "10:00 AM").unwrap();
    let course = session.document().unwrap().find_course(mwf).unwrap().1;
    assert_eq!(course.days.to_string(), "mwf"); // locked set unchanged
    assert_eq!(course.start_minute, 600);
    assert_eq!(course.end_minute, 660); // 60-minute duration preserved

    // Non-standard MW pattern: never relocatable.
    let mw = course_id(&session, "CS102");
    assert!(matches!(
        session.move_course(mw, Day::Monday, "8:00 AM"),
        Err(ApiError::InvalidMoveRequest(_))
    ));

    // Single-day: crosses day-class and adopts the target day.
    let single = course_id(&session, "CS107");
    session.move_course(single, Day::Tuesday, "9:30 AM").unwrap();
    let course = session.document().unwrap().find_course(single).unwrap().1;
    assert_eq!(course.days.to_string(), "t");
    assert_eq!(course.start_minute, 570);
    assert_eq!(course.end_minute, 620);
}

#[test]
fn test_fte_report_totals() {
    let session = loaded_session();
    let totals = session.fte_report("fall").unwrap();
    assert_eq!(totals.get("Smith"), Some(&2.5)); // 1 + 1 + 0.5
    assert_eq!(totals.get("Lee"), Some(&1.0));
    assert_eq!(totals.get("TBA"), Some(&0.5));
    assert_eq!(totals.get("Kim"), Some(&0.25));
}

#[test]
fn test_slot_tables_exposed_for_rendering() {
    let session = ScheduleSession::default();
    let (mwf, tr) = session.slot_tables();
    assert_eq!(mwf.len(), 9);
    assert_eq!(tr.len(), 6);
    assert_eq!(mwf[0].label, "8:00 AM");
    assert_eq!(tr[1].label, "9:30 AM");
}
