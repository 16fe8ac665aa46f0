// ==========================================
// Ingestion Integration Tests
// ==========================================
// Disk file -> loaded document, across layouts: preamble rows above the
// header, alias-named columns, messy day/time spellings, footer junk.
// ==========================================

mod helpers;

use course_scheduler::{ApiError, ImportError, ScheduleSession};
use helpers::{sheet, workbook, HEADER};
use std::io::Write;

#[test]
fn test_load_csv_file_end_to_end() {
    let mut file = tempfile::Builder::new()
        .prefix("fall-roster-")
        .suffix(".csv")
        .tempfile()
        .unwrap();
    writeln!(file, "Engineering Division,,,,,,,").unwrap();
    writeln!(
        file,
        "Course #,Course Title,Instructor,Meets,Begin,Finish,Load,Location"
    )
    .unwrap();
    writeln!(
        file,
        "CS101,Intro to Computing,\"Smith, J.\",mon wed fri,830,930,1,SCI 204"
    )
    .unwrap();
    writeln!(file, "CS201,Circuits,Lee,TH,9:30 AM,10:50 AM,0.5,ENG 12").unwrap();
    writeln!(file, "TOTAL,,,,,,,").unwrap();

    let mut session = ScheduleSession::default();
    let summary = session.load_file(file.path()).unwrap();

    // The file name carries "fall"; the single data sheet buckets there.
    assert_eq!(summary.semesters, vec!["fall"]);
    assert_eq!(summary.course_count, 2);
    assert_eq!(summary.rows_rejected, 1); // the TOTAL footer has no days
    assert!(!summary.single_sheet_term);

    let doc = session.document().unwrap();
    let bucket = doc.semester("fall").unwrap();

    let cs101 = bucket
        .courses
        .iter()
        .find(|c| c.course_num == "CS101")
        .unwrap();
    assert_eq!(cs101.days.to_string(), "mwf");
    assert_eq!(cs101.start_minute, 510); // "830"
    assert_eq!(cs101.end_minute, 570);
    assert_eq!(cs101.faculty_key, "Smith");
    assert_eq!(cs101.room.as_deref(), Some("SCI 204"));

    let cs201 = bucket
        .courses
        .iter()
        .find(|c| c.course_num == "CS201")
        .unwrap();
    assert_eq!(cs201.days.to_string(), "tr"); // "TH" is Tuesday+Thursday
    assert_eq!(cs201.fte, 0.5);
}

#[test]
fn test_unknown_extension_rejected() {
    let mut session = ScheduleSession::default();
    let result = session.load_file("schedule.pdf");
    assert!(matches!(
        result,
        Err(ApiError::Import(ImportError::UnsupportedFormat(_)))
    ));
}

#[test]
fn test_missing_file_rejected() {
    let mut session = ScheduleSession::default();
    let result = session.load_file("no_such_schedule.csv");
    assert!(matches!(
        result,
        Err(ApiError::Import(ImportError::FileNotFound(_)))
    ));
}

#[test]
fn test_failed_load_keeps_previous_document() {
    let good = workbook(
        "plan.xlsx",
        vec![sheet(
            "Fall",
            &[HEADER, &["CS101", "Intro", "Smith", "MWF", "8:30 AM", "9:30 AM", "1", ""]],
        )],
    );
    let mut session = ScheduleSession::default();
    session.load_workbook(&good).unwrap();

    let bad = workbook(
        "notes.xlsx",
        vec![sheet("Notes", &[&["meeting minutes"], &["action items"]])],
    );
    let result = session.load_workbook(&bad);
    assert!(matches!(
        result,
        Err(ApiError::Import(ImportError::NoUsableSheet))
    ));

    // Previous document untouched.
    let doc = session.document().unwrap();
    assert_eq!(doc.file_name, "plan.xlsx");
    assert_eq!(doc.semester("fall").unwrap().courses.len(), 1);
}

#[test]
fn test_header_too_deep_is_not_found() {
    let rows: Vec<Vec<String>> = (0..6)
        .map(|i| vec![format!("preamble line {i}")])
        .chain([HEADER.iter().map(|h| h.to_string()).collect::<Vec<_>>()])
        .chain([vec![
            "CS101".into(),
            "Intro".into(),
            "Smith".into(),
            "MWF".into(),
            "8:30 AM".into(),
            "9:30 AM".into(),
            "1".into(),
            "".into(),
        ]])
        .collect();
    let wb = course_scheduler::ParsedWorkbook {
        file_name: "deep.xlsx".into(),
        sheets: vec![course_scheduler::ParsedSheet {
            name: "Fall".into(),
            rows,
        }],
    };
    let mut session = ScheduleSession::default();
    assert!(matches!(
        session.load_workbook(&wb),
        Err(ApiError::Import(ImportError::NoUsableSheet))
    ));
}

#[test]
fn test_multi_sheet_load_reports_per_sheet() {
    let wb = workbook(
        "plan.xlsx",
        vec![
            sheet("Notes", &[&["just some prose"]]),
            sheet(
                "Fall 2025",
                &[HEADER, &["CS101", "Intro", "Smith", "MWF", "8:30 AM", "9:30 AM", "1", ""]],
            ),
            sheet(
                "Spring 2026",
                &[HEADER, &["CS201", "Circuits", "Lee", "TR", "9:30 AM", "10:50 AM", "1", ""]],
            ),
        ],
    );
    let mut session = ScheduleSession::default();
    let summary = session.load_workbook(&wb).unwrap();

    assert_eq!(summary.semesters, vec!["fall", "spring"]);
    assert_eq!(summary.course_count, 2);
    assert_eq!(summary.sheet_reports.len(), 3);
    assert!(!summary.sheet_reports[0].header_found);
    assert!(summary.sheet_reports[1].header_found);
    assert_eq!(summary.sheet_reports[1].data_rows, 1);
}
