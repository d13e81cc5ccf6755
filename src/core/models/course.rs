//! Course model
//!
//! Courses are constructed through [`CourseBuilder`], which rejects
//! non-positive credits and missing required fields before a course can
//! ever reach the registry.

use super::semester::Semester;
use crate::core::error::RecordsError;
use serde::{Deserialize, Serialize};

/// Represents a course offering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course code (e.g., "CS101"), unique and immutable
    pub code: String,

    /// Course title
    pub title: String,

    /// Credit count; always positive
    pub credits: u32,

    /// Identifier of the assigned instructor
    pub instructor_id: String,

    /// Semester the course runs in
    pub semester: Semester,

    /// Owning department
    pub department: String,

    /// Whether the course is open for enrollment
    pub active: bool,
}

impl Course {
    /// Start building a course
    #[must_use]
    pub fn builder() -> CourseBuilder {
        CourseBuilder::default()
    }
}

/// Builder for [`Course`] with construction-time validation
#[derive(Debug, Default)]
pub struct CourseBuilder {
    code: Option<String>,
    title: Option<String>,
    credits: u32,
    instructor_id: Option<String>,
    semester: Option<Semester>,
    department: Option<String>,
    active: Option<bool>,
}

impl CourseBuilder {
    /// Set the course code
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the course title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the credit count
    #[must_use]
    pub const fn credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Set the instructor identifier
    #[must_use]
    pub fn instructor_id(mut self, instructor_id: impl Into<String>) -> Self {
        self.instructor_id = Some(instructor_id.into());
        self
    }

    /// Set the semester
    #[must_use]
    pub const fn semester(mut self, semester: Semester) -> Self {
        self.semester = Some(semester);
        self
    }

    /// Set the department
    #[must_use]
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Set the active flag (defaults to true)
    #[must_use]
    pub const fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// Validate and construct the course
    ///
    /// # Errors
    ///
    /// Returns [`RecordsError::InvalidCourse`] when the code, title,
    /// semester, or department is missing/empty, or when credits are zero.
    pub fn build(self) -> Result<Course, RecordsError> {
        let code = self
            .code
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| RecordsError::InvalidCourse("course code is required".to_string()))?;
        let title = self
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| RecordsError::InvalidCourse("course title is required".to_string()))?;
        let semester = self
            .semester
            .ok_or_else(|| RecordsError::InvalidCourse("semester is required".to_string()))?;
        let department = self
            .department
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| RecordsError::InvalidCourse("department is required".to_string()))?;

        if self.credits == 0 {
            return Err(RecordsError::InvalidCourse(
                "credits must be positive".to_string(),
            ));
        }

        Ok(Course {
            code,
            title,
            credits: self.credits,
            instructor_id: self.instructor_id.unwrap_or_default(),
            semester,
            department,
            active: self.active.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_builder() -> CourseBuilder {
        Course::builder()
            .code("CS101")
            .title("Introduction to Programming")
            .credits(4)
            .instructor_id("I001")
            .semester(Semester::Fall)
            .department("Computer Science")
    }

    #[test]
    fn builds_a_valid_course() {
        let course = base_builder().build().expect("valid course");

        assert_eq!(course.code, "CS101");
        assert_eq!(course.credits, 4);
        assert_eq!(course.semester, Semester::Fall);
        assert!(course.active);
    }

    #[test]
    fn rejects_zero_credits() {
        let result = base_builder().credits(0).build();
        assert!(matches!(result, Err(RecordsError::InvalidCourse(_))));
    }

    #[test]
    fn rejects_missing_code() {
        let result = Course::builder()
            .title("Untitled")
            .credits(3)
            .semester(Semester::Spring)
            .department("Math")
            .build();
        assert!(matches!(result, Err(RecordsError::InvalidCourse(_))));
    }

    #[test]
    fn rejects_blank_title() {
        let result = base_builder().title("   ").build();
        assert!(matches!(result, Err(RecordsError::InvalidCourse(_))));
    }

    #[test]
    fn rejects_missing_semester() {
        let result = Course::builder()
            .code("MA201")
            .title("Linear Algebra")
            .credits(3)
            .department("Math")
            .build();
        assert!(matches!(result, Err(RecordsError::InvalidCourse(_))));
    }

    #[test]
    fn active_flag_can_be_overridden() {
        let course = base_builder().active(false).build().expect("valid course");
        assert!(!course.active);
    }
}
