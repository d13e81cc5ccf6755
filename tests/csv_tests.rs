//! Integration tests for CSV import/export, the data store, and backups

use campus_records::engine::EnrollmentEngine;
use campus_records::error::RecordsError;
use campus_records::io::{backup, csv, store};
use campus_records::models::{Course, Semester, Student};
use std::fs;

fn sample_engine() -> EnrollmentEngine {
    let mut engine = EnrollmentEngine::new(18);
    engine.register_student(Student::new(
        "S001".to_string(),
        "2024CS001".to_string(),
        "Ada Lovelace".to_string(),
        "ada@campus.edu".to_string(),
    ));
    engine.register_student(Student::new(
        "S002".to_string(),
        "2024CS002".to_string(),
        "Grace Hopper".to_string(),
        "grace@campus.edu".to_string(),
    ));
    engine.register_course(
        Course::builder()
            .code("CS101")
            .title("Intro to Programming")
            .credits(4)
            .instructor_id("I001")
            .semester(Semester::Fall)
            .department("Computer Science")
            .build()
            .expect("valid course"),
    );
    engine.register_course(
        Course::builder()
            .code("MA201")
            .title("Linear Algebra")
            .credits(3)
            .instructor_id("I002")
            .semester(Semester::Spring)
            .department("Math")
            .build()
            .expect("valid course"),
    );
    engine
}

#[test]
fn students_csv_uses_the_pinned_field_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("students.csv");
    let engine = sample_engine();

    csv::export_students(&path, &engine.registry().all_students()).expect("export");
    let content = fs::read_to_string(&path).expect("read back");
    let mut lines = content.lines();

    assert_eq!(lines.next(), Some("id,regno,fullname,email,active,gpa"));
    assert_eq!(
        lines.next(),
        Some("S001,2024CS001,Ada Lovelace,ada@campus.edu,true,0.00")
    );
}

#[test]
fn courses_csv_uses_the_pinned_field_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("courses.csv");
    let engine = sample_engine();

    csv::export_courses(&path, &engine.registry().all_courses()).expect("export");
    let content = fs::read_to_string(&path).expect("read back");
    let mut lines = content.lines();

    assert_eq!(
        lines.next(),
        Some("code,title,credits,instructorid,semester,department,active")
    );
    assert_eq!(
        lines.next(),
        Some("CS101,Intro to Programming,4,I001,Fall,Computer Science,true")
    );
}

#[test]
fn export_import_round_trip_preserves_registries() {
    let dir = tempfile::tempdir().expect("temp dir");
    let students_path = dir.path().join("students.csv");
    let courses_path = dir.path().join("courses.csv");
    let engine = sample_engine();

    csv::export_students(&students_path, &engine.registry().all_students()).expect("export");
    csv::export_courses(&courses_path, &engine.registry().all_courses()).expect("export");

    let students = csv::import_students(&students_path).expect("import students");
    let courses = csv::import_courses(&courses_path).expect("import courses");

    assert_eq!(students.len(), 2);
    assert_eq!(students[0].id(), "S001");
    assert_eq!(students[1].info.full_name, "Grace Hopper");

    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].code, "CS101");
    assert_eq!(courses[1].semester, Semester::Spring);
}

#[test]
fn import_reports_the_failing_line_number() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("students.csv");
    fs::write(
        &path,
        "id,regno,fullname,email,active,gpa\nS001,R1,Ada,ada@campus.edu,true,0.00\nS002,broken\n",
    )
    .expect("write");

    match csv::import_students(&path) {
        Err(RecordsError::Csv { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected a CSV error, got {other:?}"),
    }
}

#[test]
fn store_round_trip_covers_grades_and_history() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut engine = sample_engine();
    engine.enroll("S001", "CS101").expect("enroll");
    engine.enroll("S001", "MA201").expect("enroll");
    engine.record_grade("S001", "CS101", 92.0);
    engine.unenroll("S001", "MA201");

    store::save_engine(&engine, dir.path()).expect("save");
    let reloaded = store::load_engine(dir.path(), 18).expect("load");

    let student = reloaded.registry().student("S001").expect("student");
    assert_eq!(student.enrolled_courses, vec!["CS101"]);
    assert!((student.gpa - 10.0).abs() < 1e-9);

    let history = reloaded.enrollment_history("S001");
    assert_eq!(history.len(), 2);
    assert_eq!(reloaded.active_credits("S001"), 4);

    // The reloaded engine keeps enforcing the same rules.
    assert!(matches!(
        reloaded_enroll_duplicate(reloaded),
        Err(RecordsError::DuplicateEnrollment { .. })
    ));
}

fn reloaded_enroll_duplicate(mut engine: EnrollmentEngine) -> Result<(), RecordsError> {
    engine.enroll("S001", "CS101")
}

#[test]
fn backup_creates_a_timestamped_copy_of_the_exports() {
    let dir = tempfile::tempdir().expect("temp dir");
    let backup_root = dir.path().join("backups");
    let engine = sample_engine();

    let backup_dir = backup::create_backup(&engine, &backup_root).expect("backup");

    assert!(backup_dir
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with("backup_")));
    let students = csv::import_students(backup_dir.join("students.csv")).expect("import");
    assert_eq!(students.len(), 2);

    let listed = backup::list_backup_files(&backup_root, 2).expect("list");
    assert_eq!(listed.len(), 3);
    assert!(backup::backup_size(&backup_root).expect("size") > 0);
}
