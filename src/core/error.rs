//! Error types surfaced by the records core
//!
//! These are logical/business errors reported straight to the caller; the
//! CLI renders them and continues. Nothing here is retried internally.

use thiserror::Error;

/// Errors produced by the registry, engine, and io collaborators
#[derive(Debug, Error)]
pub enum RecordsError {
    /// Referenced student id does not exist in the registry
    #[error("Student not found: {0}")]
    StudentNotFound(String),

    /// Referenced course code does not exist in the registry
    #[error("Course not found: {0}")]
    CourseNotFound(String),

    /// The student already holds an active enrollment in the course
    #[error("Student {student_id} is already enrolled in course {course_code}")]
    DuplicateEnrollment {
        /// Student holding the existing active enrollment
        student_id: String,
        /// Course code of the existing active enrollment
        course_code: String,
    },

    /// Enrolling would push the active-credit sum past the configured cap
    #[error("Credit limit exceeded. Current: {current}, Adding: {adding}, Max: {max}")]
    CreditLimitExceeded {
        /// Sum of credits over the student's active enrollments
        current: u32,
        /// Credits of the course being added
        adding: u32,
        /// Configured per-semester maximum
        max: u32,
    },

    /// Course construction rejected before the course entered the registry
    #[error("Invalid course: {0}")]
    InvalidCourse(String),

    /// A CSV line could not be parsed during import
    #[error("CSV parse error at line {line}: {reason}")]
    Csv {
        /// 1-based line number within the file, header included
        line: usize,
        /// What made the line unusable
        reason: String,
    },

    /// Underlying filesystem failure during import/export or backup
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_diagnostics() {
        let err = RecordsError::CreditLimitExceeded {
            current: 7,
            adding: 12,
            max: 18,
        };
        let rendered = err.to_string();
        assert!(rendered.contains('7'));
        assert!(rendered.contains("12"));
        assert!(rendered.contains("18"));

        let err = RecordsError::DuplicateEnrollment {
            student_id: "S001".to_string(),
            course_code: "CS101".to_string(),
        };
        assert!(err.to_string().contains("S001"));
        assert!(err.to_string().contains("CS101"));
    }
}
