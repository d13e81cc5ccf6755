//! Record registry
//!
//! Owns the canonical student and course collections, keyed by identifier.
//! Identity management only; enrollment rules live in the engine. Every
//! listing returns owned snapshots so callers can never mutate the backing
//! maps through a borrowed reference.

use crate::core::models::{Course, Semester, Student};
use std::collections::HashMap;

/// Course search criteria accepted by [`RecordRegistry::search_courses`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseQuery {
    /// Exact match on the assigned instructor id
    Instructor(String),
    /// Case-insensitive match on the department name
    Department(String),
    /// Exact match on the semester
    Semester(Semester),
}

/// Canonical owner of student and course records
#[derive(Debug, Default)]
pub struct RecordRegistry {
    students: HashMap<String, Student>,
    courses: HashMap<String, Course>,
}

impl RecordRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a student, replacing any existing record with the same id.
    ///
    /// Last write wins; a replacement is logged so silent overwrites stay
    /// visible to the operator.
    pub fn insert_student(&mut self, student: Student) {
        let id = student.id().to_string();
        if self.students.insert(id.clone(), student).is_some() {
            crate::warn!("Replacing existing student record: {id}");
        }
    }

    /// Insert a course, replacing any existing record with the same code.
    pub fn insert_course(&mut self, course: Course) {
        let code = course.code.clone();
        if self.courses.insert(code.clone(), course).is_some() {
            crate::warn!("Replacing existing course record: {code}");
        }
    }

    /// Look up a student by id
    #[must_use]
    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    /// Mutable lookup, used only by the engine
    pub(crate) fn student_mut(&mut self, id: &str) -> Option<&mut Student> {
        self.students.get_mut(id)
    }

    /// Look up a course by code
    #[must_use]
    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    /// Snapshot of every student record
    #[must_use]
    pub fn all_students(&self) -> Vec<Student> {
        self.students.values().cloned().collect()
    }

    /// Snapshot of every student whose active flag is set
    #[must_use]
    pub fn active_students(&self) -> Vec<Student> {
        self.students
            .values()
            .filter(|s| s.info.active)
            .cloned()
            .collect()
    }

    /// Snapshot of every course record
    #[must_use]
    pub fn all_courses(&self) -> Vec<Course> {
        self.courses.values().cloned().collect()
    }

    /// Filter courses by instructor, department, or semester.
    ///
    /// Returns an empty vector when nothing matches; never an error.
    #[must_use]
    pub fn search_courses(&self, query: &CourseQuery) -> Vec<Course> {
        self.courses
            .values()
            .filter(|course| match query {
                CourseQuery::Instructor(id) => course.instructor_id == *id,
                CourseQuery::Department(dept) => course.department.eq_ignore_ascii_case(dept),
                CourseQuery::Semester(semester) => course.semester == *semester,
            })
            .cloned()
            .collect()
    }

    /// Number of registered students
    #[must_use]
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Number of registered courses
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(id: &str, name: &str) -> Student {
        Student::new(
            id.to_string(),
            format!("R-{id}"),
            name.to_string(),
            format!("{id}@example.edu"),
        )
    }

    fn course(code: &str, instructor: &str, dept: &str, semester: Semester) -> Course {
        Course::builder()
            .code(code)
            .title(format!("Title {code}"))
            .credits(3)
            .instructor_id(instructor)
            .semester(semester)
            .department(dept)
            .build()
            .expect("valid course")
    }

    #[test]
    fn insert_and_lookup_student() {
        let mut registry = RecordRegistry::new();
        registry.insert_student(student("S001", "Ada"));

        assert!(registry.student("S001").is_some());
        assert!(registry.student("S999").is_none());
    }

    #[test]
    fn re_registration_overwrites_by_id() {
        let mut registry = RecordRegistry::new();
        registry.insert_student(student("S001", "Ada"));
        registry.insert_student(student("S001", "Ada L."));

        assert_eq!(registry.student_count(), 1);
        assert_eq!(registry.student("S001").unwrap().info.full_name, "Ada L.");
    }

    #[test]
    fn active_students_excludes_deactivated() {
        let mut registry = RecordRegistry::new();
        registry.insert_student(student("S001", "Ada"));
        let mut inactive = student("S002", "Bob");
        inactive.deactivate();
        registry.insert_student(inactive);

        let active = registry.active_students();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id(), "S001");

        assert_eq!(registry.all_students().len(), 2);
    }

    #[test]
    fn listings_are_snapshots() {
        let mut registry = RecordRegistry::new();
        registry.insert_student(student("S001", "Ada"));

        let mut snapshot = registry.all_students();
        snapshot[0].info.full_name = "Mutated".to_string();
        snapshot.clear();

        assert_eq!(registry.student("S001").unwrap().info.full_name, "Ada");
    }

    #[test]
    fn search_by_instructor_is_exact() {
        let mut registry = RecordRegistry::new();
        registry.insert_course(course("CS101", "I001", "CS", Semester::Fall));
        registry.insert_course(course("CS201", "I002", "CS", Semester::Fall));

        let found = registry.search_courses(&CourseQuery::Instructor("I001".to_string()));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "CS101");
    }

    #[test]
    fn search_by_department_ignores_case() {
        let mut registry = RecordRegistry::new();
        registry.insert_course(course("CS101", "I001", "Computer Science", Semester::Fall));

        let found =
            registry.search_courses(&CourseQuery::Department("computer science".to_string()));
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn search_by_semester() {
        let mut registry = RecordRegistry::new();
        registry.insert_course(course("CS101", "I001", "CS", Semester::Fall));
        registry.insert_course(course("MA100", "I002", "Math", Semester::Spring));

        let found = registry.search_courses(&CourseQuery::Semester(Semester::Spring));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "MA100");
    }

    #[test]
    fn search_with_no_matches_returns_empty() {
        let registry = RecordRegistry::new();
        let found = registry.search_courses(&CourseQuery::Department("History".to_string()));
        assert!(found.is_empty());
    }
}
