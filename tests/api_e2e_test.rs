// ==========================================
// Session End-to-End Tests
// ==========================================
// Full lifecycle over the public surface: load, inspect annotations,
// mutate, re-check, export, and re-import the export.
// ==========================================

mod helpers;

use course_scheduler::{CourseDraft, CoursePatch, Day, ScheduleSession};
use helpers::{sheet, workbook, HEADER};

fn two_smiths() -> course_scheduler::ParsedWorkbook {
    workbook(
        "plan.xlsx",
        vec![sheet(
            "Fall",
            &[
                HEADER,
                &["CS101", "Intro to CS", "Smith, J.", "MWF", "8:30 AM", "9:30 AM", "1", ""],
                &["CS102", "Data Structures", "J. Smith", "MW", "9:00 AM", "10:00 AM", "1", ""],
            ],
        )],
    )
}

#[test]
fn test_same_instructor_under_two_spellings_is_flagged() {
    let mut session = ScheduleSession::default();
    session.load_workbook(&two_smiths()).unwrap();

    let doc = session.document().unwrap();
    let bucket = doc.semester("fall").unwrap();
    let cs101 = bucket.courses.iter().find(|c| c.course_num == "CS101").unwrap();
    let cs102 = bucket.courses.iter().find(|c| c.course_num == "CS102").unwrap();

    // "Smith, J." and "J. Smith" reduce to the same key.
    assert_eq!(cs101.faculty_key, "Smith");
    assert_eq!(cs102.faculty_key, "Smith");
    // They share Mon/Wed and the 9:00-9:30 window.
    assert!(cs101.has_faculty_overlap);
    assert!(cs102.has_faculty_overlap);
    assert!(cs101.overlap_peers.contains(&cs102.id));
    assert!(cs102.overlap_peers.contains(&cs101.id));
}

#[test]
fn test_rescheduling_clears_the_flag() {
    let mut session = ScheduleSession::default();
    session.load_workbook(&two_smiths()).unwrap();
    let id = session
        .document()
        .unwrap()
        .semester("fall")
        .unwrap()
        .courses
        .iter()
        .find(|c| c.course_num == "CS102")
        .unwrap()
        .id;

    // Push CS102 to start exactly when CS101 ends; half-open windows
    // make back-to-back classes conflict-free.
    let patch = CoursePatch {
        start_time: Some("9:30 AM".into()),
        end_time: Some("10:30 AM".into()),
        ..Default::default()
    };
    session.update_course(id, &patch).unwrap();

    let doc = session.document().unwrap();
    let bucket = doc.semester("fall").unwrap();
    assert!(bucket.courses.iter().all(|c| !c.has_faculty_overlap));
    assert!(bucket.courses.iter().all(|c| c.overlap_peers.is_empty()));
}

#[test]
fn test_add_then_remove_returns_to_clean_state() {
    let mut session = ScheduleSession::default();
    session.load_workbook(&two_smiths()).unwrap();

    let draft = CourseDraft {
        course_num: "CS103".into(),
        course_name: "Algorithms".into(),
        faculty: "Smith".into(),
        days: "TR".into(),
        start_time: "9:30 AM".into(),
        end_time: "10:50 AM".into(),
        fte: "1".into(),
        room: String::new(),
    };
    let id = session.add_course("fall", &draft).unwrap();
    assert_eq!(session.fte_report("fall").unwrap().get("Smith"), Some(&3.0));

    session.remove_course(id).unwrap();
    assert!(session.document().unwrap().find_course(id).is_none());
    assert_eq!(session.fte_report("fall").unwrap().get("Smith"), Some(&2.0));
}

#[test]
fn test_move_denial_names_the_day_pattern() {
    let mut session = ScheduleSession::default();
    session.load_workbook(&two_smiths()).unwrap();
    let id = session
        .document()
        .unwrap()
        .semester("fall")
        .unwrap()
        .courses
        .iter()
        .find(|c| c.course_num == "CS102")
        .unwrap()
        .id;

    // MW is a non-standard pattern; the denial says to edit instead.
    match session.move_course(id, Day::Monday, "8:00 AM") {
        Err(course_scheduler::ApiError::InvalidMoveRequest(message)) => {
            assert!(message.contains("CS102"), "{message}");
            assert!(message.contains("non-standard"), "{message}");
        }
        other => panic!("expected move denial, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_export_separate_sheets_reimports_cleanly() {
    let mut session = ScheduleSession::default();
    session.load_workbook(&two_smiths()).unwrap();

    let tables = session.export().unwrap();
    assert_eq!(tables.len(), 1);
    let table = &tables[0];
    assert_eq!(table.name, "fall");
    assert_eq!(table.header[0], "Class");
    // Sorted by start time.
    assert_eq!(table.rows[0][0], "CS101");
    assert_eq!(table.rows[1][0], "CS102");

    // The fixed header is itself a recognized layout: feed the export
    // back through ingestion and the same schedule comes out.
    let reimport = workbook(
        "fall-export.xlsx",
        vec![course_scheduler::ParsedSheet {
            name: "Fall".into(),
            rows: std::iter::once(table.header.clone())
                .chain(table.rows.iter().cloned())
                .collect(),
        }],
    );
    let mut second = ScheduleSession::default();
    let summary = second.load_workbook(&reimport).unwrap();
    assert_eq!(summary.course_count, 2);

    let bucket = second.document().unwrap().semester("fall").unwrap();
    let cs101 = bucket.courses.iter().find(|c| c.course_num == "CS101").unwrap();
    assert_eq!(cs101.course_name, "Intro to CS");
    assert_eq!(cs101.faculty_full, "Smith, J.");
    assert_eq!(cs101.days.to_string(), "mwf");
    assert_eq!(cs101.start_minute, 510);
    assert!(cs101.has_faculty_overlap); // the conflict survives the trip
}
