//! Persistent store for the engine between CLI invocations
//!
//! The engine itself never touches the filesystem; the CLI loads its state
//! from the configured data directory before each command and saves it back
//! after a mutation. Missing files mean an empty starting state, not an
//! error.

use crate::core::engine::EnrollmentEngine;
use crate::core::error::RecordsError;
use crate::core::io::csv;
use std::path::Path;

/// File name for the students table inside the data directory
pub const STUDENTS_FILE: &str = "students.csv";
/// File name for the courses table inside the data directory
pub const COURSES_FILE: &str = "courses.csv";
/// File name for the enrollments table inside the data directory
pub const ENROLLMENTS_FILE: &str = "enrollments.csv";

/// Build an engine from the CSV files in `data_dir`.
///
/// Courses and students are registered first so that restored enrollments
/// can rebuild cached course lists and GPAs against a complete catalog.
///
/// # Errors
///
/// Returns [`RecordsError::Csv`] or [`RecordsError::InvalidCourse`] for
/// unusable file contents, and [`RecordsError::Io`] for read failures other
/// than a missing file.
pub fn load_engine(data_dir: &Path, max_credits: u32) -> Result<EnrollmentEngine, RecordsError> {
    let mut engine = EnrollmentEngine::new(max_credits);

    let students_path = data_dir.join(STUDENTS_FILE);
    if students_path.exists() {
        for student in csv::import_students(&students_path)? {
            engine.register_student(student);
        }
    }

    let courses_path = data_dir.join(COURSES_FILE);
    if courses_path.exists() {
        for course in csv::import_courses(&courses_path)? {
            engine.register_course(course);
        }
    }

    let enrollments_path = data_dir.join(ENROLLMENTS_FILE);
    if enrollments_path.exists() {
        for enrollment in csv::import_enrollments(&enrollments_path)? {
            engine.restore_enrollment(enrollment);
        }
    }

    crate::debug!(
        "Loaded {} students, {} courses from {}",
        engine.registry().student_count(),
        engine.registry().course_count(),
        data_dir.display()
    );
    Ok(engine)
}

/// Write the engine's full state to the CSV files in `data_dir`,
/// creating the directory when needed.
///
/// # Errors
///
/// Returns [`RecordsError::Io`] when the directory or any file cannot be
/// written.
pub fn save_engine(engine: &EnrollmentEngine, data_dir: &Path) -> Result<(), RecordsError> {
    std::fs::create_dir_all(data_dir)?;

    csv::export_students(
        data_dir.join(STUDENTS_FILE),
        &engine.registry().all_students(),
    )?;
    csv::export_courses(
        data_dir.join(COURSES_FILE),
        &engine.registry().all_courses(),
    )?;
    csv::export_enrollments(data_dir.join(ENROLLMENTS_FILE), &engine.all_enrollments())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, Semester, Student};

    fn sample_engine() -> EnrollmentEngine {
        let mut engine = EnrollmentEngine::new(18);
        engine.register_student(Student::new(
            "S1".to_string(),
            "R1".to_string(),
            "Ada Lovelace".to_string(),
            "ada@example.edu".to_string(),
        ));
        engine.register_course(
            Course::builder()
                .code("CS101")
                .title("Intro to Programming")
                .credits(4)
                .instructor_id("I1")
                .semester(Semester::Fall)
                .department("Computer Science")
                .build()
                .expect("valid course"),
        );
        engine
    }

    #[test]
    fn load_from_empty_directory_gives_an_empty_engine() {
        let dir = tempfile::tempdir().expect("temp dir");

        let engine = load_engine(dir.path(), 18).expect("load");

        assert_eq!(engine.registry().student_count(), 0);
        assert_eq!(engine.registry().course_count(), 0);
        assert_eq!(engine.max_credits_per_semester(), 18);
    }

    #[test]
    fn save_then_load_round_trips_engine_state() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut engine = sample_engine();
        engine.enroll("S1", "CS101").expect("enroll");
        engine.record_grade("S1", "CS101", 92.0);

        save_engine(&engine, dir.path()).expect("save");
        let reloaded = load_engine(dir.path(), 18).expect("load");

        let student = reloaded.registry().student("S1").expect("student");
        assert_eq!(student.enrolled_courses, vec!["CS101"]);
        assert!((student.gpa - 10.0).abs() < 1e-9);

        let history = reloaded.enrollment_history("S1");
        assert_eq!(history.len(), 1);
        assert!(history[0].active);
        assert_eq!(history[0].marks, Some(92.0));
    }

    #[test]
    fn historical_enrollments_survive_the_round_trip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut engine = sample_engine();
        engine.enroll("S1", "CS101").expect("enroll");
        engine.record_grade("S1", "CS101", 75.0);
        engine.unenroll("S1", "CS101");
        engine.enroll("S1", "CS101").expect("re-enroll");

        save_engine(&engine, dir.path()).expect("save");
        let reloaded = load_engine(dir.path(), 18).expect("load");

        let history = reloaded.enrollment_history("S1");
        assert_eq!(history.len(), 2);
        assert!(!history[0].active);
        assert!(history[1].active);
        // Only the ungraded re-enrollment is active, so GPA is back to 0.
        assert!((reloaded.registry().student("S1").unwrap().gpa).abs() < f64::EPSILON);
    }
}
