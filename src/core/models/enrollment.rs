//! Enrollment model
//!
//! An enrollment ties one student to one course. At most one ACTIVE
//! enrollment exists per (student, course) pair; unenrolling deactivates
//! the record rather than deleting it, so a student can re-enroll and
//! leave multiple historical entries behind.

use super::grade::Grade;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A student's enrollment in a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Enrolled student's identifier
    pub student_id: String,

    /// Enrolled course's code
    pub course_code: String,

    /// Date the enrollment was created
    pub enrollment_date: NaiveDate,

    /// Recorded marks; unset until a grade is recorded
    pub marks: Option<f64>,

    /// Letter grade derived from marks; never stale relative to `marks`
    pub grade: Option<Grade>,

    /// Whether this enrollment counts toward credits and GPA
    pub active: bool,
}

impl Enrollment {
    /// Create a new active enrollment dated today, with no marks or grade
    #[must_use]
    pub fn new(student_id: String, course_code: String) -> Self {
        Self {
            student_id,
            course_code,
            enrollment_date: chrono::Local::now().date_naive(),
            marks: None,
            grade: None,
            active: true,
        }
    }

    /// Record marks and derive the letter grade in one step
    pub fn record_marks(&mut self, marks: f64) {
        self.marks = Some(marks);
        self.grade = Some(Grade::from_marks(marks));
    }

    /// Deactivate the enrollment, keeping marks and grade for history
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
