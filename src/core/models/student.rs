//! Student model

use super::person::{DisplaySummary, PersonInfo};
use serde::{Deserialize, Serialize};

/// Represents a registered student
///
/// The enrolled-course list is a cached, insertion-ordered view maintained
/// by the enrollment engine; the authoritative enrollment records live in
/// the engine's per-student history. GPA is derived and recomputed whenever
/// the set of active graded enrollments changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Shared identity fields (id, name, email, active flag)
    pub info: PersonInfo,

    /// Institutional registration number
    pub reg_no: String,

    /// Codes of currently-enrolled courses, in enrollment order
    pub enrolled_courses: Vec<String>,

    /// Credit-weighted GPA over active graded enrollments; 0 when none
    pub gpa: f64,
}

impl Student {
    /// Create a new active student with no enrollments
    #[must_use]
    pub fn new(id: String, reg_no: String, full_name: String, email: String) -> Self {
        Self {
            info: PersonInfo::new(id, full_name, email),
            reg_no,
            enrolled_courses: Vec::new(),
            gpa: 0.0,
        }
    }

    /// The student's unique identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.info.id
    }

    /// Add a course code to the cached enrolled list (no duplicates)
    pub fn enroll_in(&mut self, course_code: &str) {
        if !self.enrolled_courses.iter().any(|c| c == course_code) {
            self.enrolled_courses.push(course_code.to_string());
        }
    }

    /// Remove a course code from the cached enrolled list
    pub fn unenroll_from(&mut self, course_code: &str) {
        self.enrolled_courses.retain(|c| c != course_code);
    }

    /// Whether the cached list contains the course code
    #[must_use]
    pub fn is_enrolled_in(&self, course_code: &str) -> bool {
        self.enrolled_courses.iter().any(|c| c == course_code)
    }

    /// Mark the student inactive; records are never physically deleted
    pub fn deactivate(&mut self) {
        self.info.active = false;
    }
}

impl DisplaySummary for Student {
    fn display_summary(&self) -> String {
        format!(
            "Student: {} ({}) - {}",
            self.info.full_name, self.reg_no, self.info.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Student {
        Student::new(
            "S001".to_string(),
            "2024CS001".to_string(),
            "Ada Lovelace".to_string(),
            "ada@example.edu".to_string(),
        )
    }

    #[test]
    fn new_student_has_no_enrollments_and_zero_gpa() {
        let student = sample();

        assert!(student.enrolled_courses.is_empty());
        assert!((student.gpa - 0.0).abs() < f64::EPSILON);
        assert!(student.info.active);
    }

    #[test]
    fn enroll_in_ignores_duplicates() {
        let mut student = sample();

        student.enroll_in("CS101");
        student.enroll_in("CS101");

        assert_eq!(student.enrolled_courses, vec!["CS101".to_string()]);
    }

    #[test]
    fn unenroll_removes_only_the_named_course() {
        let mut student = sample();
        student.enroll_in("CS101");
        student.enroll_in("MA201");

        student.unenroll_from("CS101");

        assert!(!student.is_enrolled_in("CS101"));
        assert!(student.is_enrolled_in("MA201"));
    }

    #[test]
    fn deactivate_keeps_the_record() {
        let mut student = sample();
        student.deactivate();

        assert!(!student.info.active);
        assert_eq!(student.id(), "S001");
    }

    #[test]
    fn display_summary_names_the_student() {
        let summary = sample().display_summary();
        assert!(summary.contains("Ada Lovelace"));
        assert!(summary.contains("2024CS001"));
    }
}
