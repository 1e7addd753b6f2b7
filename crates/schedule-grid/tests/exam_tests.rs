//! Tests for the exam table.

use schedule_grid::{exam_table, ExamInput, GridError};

const EXAMS: &str = r#"{
    "classrooms": [
        {"id": 1, "building": "A", "code": "101"},
        {"id": 2, "building": "A", "code": "102"},
        {"id": 3, "building": "B", "code": "001"}
    ],
    "exams": {
        "Physics":   {"date": "2026-06-12", "time_start": "12:00", "time_end": "15:00", "area_id": [3]},
        "Algebra":   {"date": "2026-06-10", "time_start": "09:00", "time_end": "12:00", "area_id": [2, "1"]},
        "Chemistry": {"date": "2026-06-10", "time_start": "09:00", "time_end": "11:00", "area_id": []},
        "Biology":   {"date": "2026-06-10", "time_start": "15:00", "time_end": "17:00", "area_id": [1]}
    }
}"#;

#[test]
fn exam_map_keeps_source_order() {
    let input = ExamInput::from_json(EXAMS).unwrap();
    let names: Vec<&str> = input.exams.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["Physics", "Algebra", "Chemistry", "Biology"]);
}

#[test]
fn rows_sorted_by_date_then_time() {
    let input = ExamInput::from_json(EXAMS).unwrap();
    let table = exam_table(&input, &[]);
    let courses: Vec<&str> = table.rows.iter().map(|r| r.course.as_str()).collect();

    // Algebra and Chemistry share date and start; "09:00 - 11:00" sorts first.
    assert_eq!(courses, vec!["Chemistry", "Algebra", "Biology", "Physics"]);
}

#[test]
fn row_fields_formatted() {
    let input = ExamInput::from_json(EXAMS).unwrap();
    let table = exam_table(&input, &["Algebra"]);

    assert_eq!(table.rows.len(), 1);
    let row = &table.rows[0];
    assert_eq!(row.date, "2026-06-10");
    assert_eq!(row.time, "09:00 - 12:00");
    assert_eq!(row.rooms, "A.102, A.101");
}

#[test]
fn used_classrooms_follow_selection() {
    let input = ExamInput::from_json(EXAMS).unwrap();
    let table = exam_table(&input, &["Physics", "Biology"]);
    let rooms: Vec<String> = table.classrooms.iter().map(|c| c.room_name()).collect();

    assert_eq!(rooms, vec!["A.101", "B.001"]);
}

#[test]
fn unknown_course_skipped() {
    let input = ExamInput::from_json(EXAMS).unwrap();
    let table = exam_table(&input, &["Astronomy", "Physics"]);

    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].course, "Physics");
}

#[test]
fn malformed_sitting_skipped_rest_listed() {
    let json = r#"{
        "classrooms": [{"id": 1, "building": "A", "code": "101"}],
        "exams": {
            "Physics": {"date": "2026-06-12", "area_id": "x"},
            "Algebra": {"date": "2026-06-10", "time_start": "09:00", "time_end": "12:00", "area_id": [1]},
            "Chemistry": "TBA"
        }
    }"#;
    let input = ExamInput::from_json(json).unwrap();
    let table = exam_table(&input, &[]);

    assert_eq!(input.exams.len(), 1);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].course, "Algebra");
    assert_eq!(table.rows[0].rooms, "A.101");
}

#[test]
fn null_room_ids_and_fields_tolerated() {
    let json = r#"{
        "classrooms": [{"id": 1, "building": "A", "code": "101"}],
        "exams": {
            "Algebra": {"date": "2026-06-10", "time_start": null, "time_end": "12:00", "area_id": [null, 1]},
            "Physics": {"date": 20260611, "time_start": "09:00", "time_end": "11:00", "area_id": null}
        }
    }"#;
    let table = exam_table(&ExamInput::from_json(json).unwrap(), &[]);

    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0].time, " - 12:00");
    assert_eq!(table.rows[0].rooms, "A.101");
    assert_eq!(table.rows[1].date, "20260611");
    assert_eq!(table.rows[1].rooms, "");
}

#[test]
fn malformed_json_is_an_input_error() {
    assert!(matches!(ExamInput::from_json("{\"exams\": "), Err(GridError::Input(_))));
}
