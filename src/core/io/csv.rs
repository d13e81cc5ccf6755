//! CSV readers and writers for registry data
//!
//! Plain comma-separated files with a header row. Field values must not
//! contain commas; the formats are:
//!
//! - students: `id,regno,fullname,email,active,gpa`
//! - courses: `code,title,credits,instructorid,semester,department,active`
//! - enrollments: `studentid,coursecode,date,marks,grade,active`
//!
//! The enrollment grade column is written for readability only; on import
//! the grade is re-derived from the marks so it can never disagree.

use crate::core::error::RecordsError;
use crate::core::models::{Course, Enrollment, Semester, Student};
use chrono::NaiveDate;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const STUDENTS_HEADER: &str = "id,regno,fullname,email,active,gpa";
const COURSES_HEADER: &str = "code,title,credits,instructorid,semester,department,active";
const ENROLLMENTS_HEADER: &str = "studentid,coursecode,date,marks,grade,active";

fn csv_err(line: usize, reason: impl Into<String>) -> RecordsError {
    RecordsError::Csv {
        line,
        reason: reason.into(),
    }
}

/// Lines of a CSV body, skipping the header and blank lines, with their
/// 1-based line numbers
fn data_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .skip(1)
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

/// Import students from a CSV file
///
/// # Errors
///
/// Returns [`RecordsError::Io`] when the file cannot be read and
/// [`RecordsError::Csv`] for an unusable line.
pub fn import_students<P: AsRef<Path>>(path: P) -> Result<Vec<Student>, RecordsError> {
    let content = fs::read_to_string(path)?;
    let mut students = Vec::new();
    for (line_no, line) in data_lines(&content) {
        students.push(parse_student_line(line_no, line)?);
    }
    Ok(students)
}

fn parse_student_line(line_no: usize, line: &str) -> Result<Student, RecordsError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 4 {
        return Err(csv_err(
            line_no,
            format!("expected at least 4 fields, found {}", fields.len()),
        ));
    }

    let mut student = Student::new(
        fields[0].to_string(),
        fields[1].to_string(),
        fields[2].to_string(),
        fields[3].to_string(),
    );
    if let Some(active) = fields.get(4) {
        student.info.active = active
            .parse::<bool>()
            .map_err(|_| csv_err(line_no, format!("invalid active flag: {active}")))?;
    }
    if let Some(gpa) = fields.get(5) {
        student.gpa = gpa
            .parse::<f64>()
            .map_err(|_| csv_err(line_no, format!("invalid gpa: {gpa}")))?;
    }
    Ok(student)
}

/// Export students to a CSV file, sorted by id for stable output
///
/// # Errors
///
/// Returns [`RecordsError::Io`] when the file cannot be written.
pub fn export_students<P: AsRef<Path>>(path: P, students: &[Student]) -> Result<(), RecordsError> {
    let mut sorted: Vec<&Student> = students.iter().collect();
    sorted.sort_by(|a, b| a.id().cmp(b.id()));

    let mut out = String::from(STUDENTS_HEADER);
    out.push('\n');
    for student in sorted {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{:.2}",
            student.id(),
            student.reg_no,
            student.info.full_name,
            student.info.email,
            student.info.active,
            student.gpa
        );
    }
    fs::write(path, out)?;
    Ok(())
}

/// Import courses from a CSV file
///
/// # Errors
///
/// Returns [`RecordsError::Io`] when the file cannot be read,
/// [`RecordsError::Csv`] for an unusable line, and
/// [`RecordsError::InvalidCourse`] when a line fails course validation.
pub fn import_courses<P: AsRef<Path>>(path: P) -> Result<Vec<Course>, RecordsError> {
    let content = fs::read_to_string(path)?;
    let mut courses = Vec::new();
    for (line_no, line) in data_lines(&content) {
        courses.push(parse_course_line(line_no, line)?);
    }
    Ok(courses)
}

fn parse_course_line(line_no: usize, line: &str) -> Result<Course, RecordsError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 7 {
        return Err(csv_err(
            line_no,
            format!("expected 7 fields, found {}", fields.len()),
        ));
    }

    let credits = fields[2]
        .parse::<u32>()
        .map_err(|_| csv_err(line_no, format!("invalid credits: {}", fields[2])))?;
    let semester = Semester::from_str(fields[4]).map_err(|e| csv_err(line_no, e))?;
    let active = fields[6]
        .parse::<bool>()
        .map_err(|_| csv_err(line_no, format!("invalid active flag: {}", fields[6])))?;

    Course::builder()
        .code(fields[0])
        .title(fields[1])
        .credits(credits)
        .instructor_id(fields[3])
        .semester(semester)
        .department(fields[5])
        .active(active)
        .build()
}

/// Export courses to a CSV file, sorted by code for stable output
///
/// # Errors
///
/// Returns [`RecordsError::Io`] when the file cannot be written.
pub fn export_courses<P: AsRef<Path>>(path: P, courses: &[Course]) -> Result<(), RecordsError> {
    let mut sorted: Vec<&Course> = courses.iter().collect();
    sorted.sort_by(|a, b| a.code.cmp(&b.code));

    let mut out = String::from(COURSES_HEADER);
    out.push('\n');
    for course in sorted {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{}",
            course.code,
            course.title,
            course.credits,
            course.instructor_id,
            course.semester,
            course.department,
            course.active
        );
    }
    fs::write(path, out)?;
    Ok(())
}

/// Import enrollments from a CSV file
///
/// # Errors
///
/// Returns [`RecordsError::Io`] when the file cannot be read and
/// [`RecordsError::Csv`] for an unusable line.
pub fn import_enrollments<P: AsRef<Path>>(path: P) -> Result<Vec<Enrollment>, RecordsError> {
    let content = fs::read_to_string(path)?;
    let mut enrollments = Vec::new();
    for (line_no, line) in data_lines(&content) {
        enrollments.push(parse_enrollment_line(line_no, line)?);
    }
    Ok(enrollments)
}

fn parse_enrollment_line(line_no: usize, line: &str) -> Result<Enrollment, RecordsError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 6 {
        return Err(csv_err(
            line_no,
            format!("expected 6 fields, found {}", fields.len()),
        ));
    }

    let mut enrollment = Enrollment::new(fields[0].to_string(), fields[1].to_string());
    enrollment.enrollment_date = NaiveDate::parse_from_str(fields[2], "%Y-%m-%d")
        .map_err(|_| csv_err(line_no, format!("invalid date: {}", fields[2])))?;
    if !fields[3].is_empty() {
        let marks = fields[3]
            .parse::<f64>()
            .map_err(|_| csv_err(line_no, format!("invalid marks: {}", fields[3])))?;
        // The grade column (field 4) is ignored; deriving from marks keeps
        // the pair consistent even if the file was edited by hand.
        enrollment.record_marks(marks);
    }
    enrollment.active = fields[5]
        .parse::<bool>()
        .map_err(|_| csv_err(line_no, format!("invalid active flag: {}", fields[5])))?;
    Ok(enrollment)
}

/// Export enrollments to a CSV file in the order given
///
/// # Errors
///
/// Returns [`RecordsError::Io`] when the file cannot be written.
pub fn export_enrollments<P: AsRef<Path>>(
    path: P,
    enrollments: &[Enrollment],
) -> Result<(), RecordsError> {
    let mut out = String::from(ENROLLMENTS_HEADER);
    out.push('\n');
    for enrollment in enrollments {
        let marks = enrollment
            .marks
            .map(|m| format!("{m:.1}"))
            .unwrap_or_default();
        let grade = enrollment.grade.map(|g| g.letter()).unwrap_or_default();
        let _ = writeln!(
            out,
            "{},{},{},{},{},{}",
            enrollment.student_id,
            enrollment.course_code,
            enrollment.enrollment_date.format("%Y-%m-%d"),
            marks,
            grade,
            enrollment.active
        );
    }
    fs::write(path, out)?;
    Ok(())
}
