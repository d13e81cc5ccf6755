//! Enrollment and grading engine
//!
//! Coordinates the record registry with per-student enrollment histories
//! under the duplicate-enrollment and credit-limit rules, records grades,
//! and keeps each student's GPA consistent with their active graded
//! enrollments after every operation.

use crate::core::error::RecordsError;
use crate::core::models::{Course, Enrollment, Grade, Student};
use crate::core::registry::RecordRegistry;
use std::collections::HashMap;

/// Transcript header plus one row per active enrollment
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    /// Student's full name
    pub student_name: String,
    /// Student's registration number
    pub reg_no: String,
    /// Credit-weighted GPA at generation time
    pub gpa: f64,
    /// One row per active enrollment, in enrollment order
    pub rows: Vec<TranscriptRow>,
}

/// A single course line on a transcript
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptRow {
    /// Course code
    pub course_code: String,
    /// Course title
    pub title: String,
    /// Course credit count
    pub credits: u32,
    /// Letter grade, absent while the enrollment is ungraded
    pub grade: Option<Grade>,
    /// Recorded marks, absent while the enrollment is ungraded
    pub marks: Option<f64>,
}

/// Enrollment engine owning the registry and all enrollment histories
///
/// The per-semester credit cap is fixed at construction. All mutation goes
/// through `&mut self`, and every query hands back owned data, so callers
/// cannot alias or corrupt internal state.
#[derive(Debug)]
pub struct EnrollmentEngine {
    registry: RecordRegistry,
    enrollments: HashMap<String, Vec<Enrollment>>,
    max_credits_per_semester: u32,
}

impl EnrollmentEngine {
    /// Create an engine with the given per-semester credit cap
    #[must_use]
    pub fn new(max_credits_per_semester: u32) -> Self {
        Self {
            registry: RecordRegistry::new(),
            enrollments: HashMap::new(),
            max_credits_per_semester,
        }
    }

    /// The configured per-semester credit cap
    #[must_use]
    pub const fn max_credits_per_semester(&self) -> u32 {
        self.max_credits_per_semester
    }

    /// Read access to the underlying registry
    #[must_use]
    pub const fn registry(&self) -> &RecordRegistry {
        &self.registry
    }

    /// Register a student, provisioning an empty enrollment history
    pub fn register_student(&mut self, student: Student) {
        self.enrollments
            .entry(student.id().to_string())
            .or_default();
        self.registry.insert_student(student);
    }

    /// Register a course
    pub fn register_course(&mut self, course: Course) {
        self.registry.insert_course(course);
    }

    /// Update a student's profile fields in place.
    ///
    /// `None` keeps the current value. Returns `false` when the student
    /// does not exist.
    pub fn update_student_profile(
        &mut self,
        student_id: &str,
        full_name: Option<String>,
        email: Option<String>,
    ) -> bool {
        let Some(student) = self.registry.student_mut(student_id) else {
            return false;
        };
        if let Some(full_name) = full_name {
            student.info.full_name = full_name;
        }
        if let Some(email) = email {
            student.info.email = email;
        }
        true
    }

    /// Mark a student inactive; the record and history are kept.
    ///
    /// Returns `false` when the student does not exist.
    pub fn deactivate_student(&mut self, student_id: &str) -> bool {
        let Some(student) = self.registry.student_mut(student_id) else {
            return false;
        };
        student.deactivate();
        true
    }

    /// Snapshot of a student's full enrollment history, active and historical
    #[must_use]
    pub fn enrollment_history(&self, student_id: &str) -> Vec<Enrollment> {
        self.enrollments
            .get(student_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Snapshot of every enrollment across all students, grouped by student
    /// id in sorted order with each history in insertion order
    #[must_use]
    pub fn all_enrollments(&self) -> Vec<Enrollment> {
        let mut student_ids: Vec<&String> = self.enrollments.keys().collect();
        student_ids.sort();
        student_ids
            .into_iter()
            .flat_map(|id| self.enrollments[id].iter().cloned())
            .collect()
    }

    /// Sum of credits over the student's currently-active enrollments
    #[must_use]
    pub fn active_credits(&self, student_id: &str) -> u32 {
        self.enrollments
            .get(student_id)
            .map(|history| {
                history
                    .iter()
                    .filter(|e| e.active)
                    .filter_map(|e| self.registry.course(&e.course_code))
                    .map(|course| course.credits)
                    .sum()
            })
            .unwrap_or(0)
    }

    /// Enroll a student into a course.
    ///
    /// Appends a new active enrollment and updates the student's cached
    /// course list; on any failure no state is mutated.
    ///
    /// # Errors
    ///
    /// - [`RecordsError::StudentNotFound`] / [`RecordsError::CourseNotFound`]
    ///   when either party is missing from the registry.
    /// - [`RecordsError::DuplicateEnrollment`] when the student already has
    ///   an active enrollment in the course.
    /// - [`RecordsError::CreditLimitExceeded`] when the course's credits
    ///   would push the active-credit sum past the configured cap.
    pub fn enroll(&mut self, student_id: &str, course_code: &str) -> Result<(), RecordsError> {
        if self.registry.student(student_id).is_none() {
            return Err(RecordsError::StudentNotFound(student_id.to_string()));
        }
        let course = self
            .registry
            .course(course_code)
            .ok_or_else(|| RecordsError::CourseNotFound(course_code.to_string()))?;
        let adding = course.credits;

        let already_enrolled = self
            .enrollments
            .get(student_id)
            .is_some_and(|history| history.iter().any(|e| e.active && e.course_code == course_code));
        if already_enrolled {
            return Err(RecordsError::DuplicateEnrollment {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
            });
        }

        let current = self.active_credits(student_id);
        if current + adding > self.max_credits_per_semester {
            return Err(RecordsError::CreditLimitExceeded {
                current,
                adding,
                max: self.max_credits_per_semester,
            });
        }

        self.enrollments
            .entry(student_id.to_string())
            .or_default()
            .push(Enrollment::new(
                student_id.to_string(),
                course_code.to_string(),
            ));
        if let Some(student) = self.registry.student_mut(student_id) {
            student.enroll_in(course_code);
        }
        crate::debug!("Enrolled {student_id} in {course_code}");
        Ok(())
    }

    /// Deactivate the student's active enrollment in a course.
    ///
    /// A no-op returning `false` when no active enrollment exists; this
    /// mirrors the permissive unenroll semantics and never errors. Recorded
    /// marks stay on the historical record but stop counting toward GPA.
    pub fn unenroll(&mut self, student_id: &str, course_code: &str) -> bool {
        let Some(history) = self.enrollments.get_mut(student_id) else {
            return false;
        };
        let Some(enrollment) = history
            .iter_mut()
            .find(|e| e.active && e.course_code == course_code)
        else {
            return false;
        };

        enrollment.deactivate();
        if let Some(student) = self.registry.student_mut(student_id) {
            student.unenroll_from(course_code);
        }
        self.refresh_gpa(student_id);
        crate::debug!("Unenrolled {student_id} from {course_code}");
        true
    }

    /// Record marks against the student's active enrollment in a course.
    ///
    /// Sets the marks, derives the letter grade, and refreshes the GPA in
    /// one indivisible step. A no-op returning `false` when no active
    /// enrollment exists.
    pub fn record_grade(&mut self, student_id: &str, course_code: &str, marks: f64) -> bool {
        let Some(history) = self.enrollments.get_mut(student_id) else {
            return false;
        };
        let Some(enrollment) = history
            .iter_mut()
            .find(|e| e.active && e.course_code == course_code)
        else {
            return false;
        };

        enrollment.record_marks(marks);
        self.refresh_gpa(student_id);
        crate::debug!("Recorded {marks} marks for {student_id} in {course_code}");
        true
    }

    /// Generate a transcript projection for a student.
    ///
    /// Rows cover active enrollments only, in history insertion order.
    /// Pure read; formatting belongs to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`RecordsError::StudentNotFound`] when the student does not
    /// exist.
    pub fn transcript(&self, student_id: &str) -> Result<Transcript, RecordsError> {
        let student = self
            .registry
            .student(student_id)
            .ok_or_else(|| RecordsError::StudentNotFound(student_id.to_string()))?;

        let rows = self
            .enrollments
            .get(student_id)
            .map(|history| {
                history
                    .iter()
                    .filter(|e| e.active)
                    .map(|e| {
                        let (title, credits) = self
                            .registry
                            .course(&e.course_code)
                            .map_or((String::new(), 0), |c| (c.title.clone(), c.credits));
                        TranscriptRow {
                            course_code: e.course_code.clone(),
                            title,
                            credits,
                            grade: e.grade,
                            marks: e.marks,
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Transcript {
            student_name: student.info.full_name.clone(),
            reg_no: student.reg_no.clone(),
            gpa: student.gpa,
            rows,
        })
    }

    /// Reinsert a persisted enrollment during data import.
    ///
    /// Bypasses the duplicate and credit checks (the imported history was
    /// valid when exported) but keeps the cached course list and GPA
    /// consistent with the restored state.
    pub fn restore_enrollment(&mut self, enrollment: Enrollment) {
        let student_id = enrollment.student_id.clone();
        if enrollment.active {
            if let Some(student) = self.registry.student_mut(&student_id) {
                student.enroll_in(&enrollment.course_code);
            }
        }
        self.enrollments
            .entry(student_id.clone())
            .or_default()
            .push(enrollment);
        self.refresh_gpa(&student_id);
    }

    /// Recompute the student's GPA from scratch.
    ///
    /// Contributing set: active enrollments carrying a grade. GPA is the
    /// credit-weighted mean of grade points, 0 when the set is empty. Runs
    /// after every operation that can change the contributing set, so an
    /// incremental running sum is deliberately not kept.
    fn refresh_gpa(&mut self, student_id: &str) {
        let Some(history) = self.enrollments.get(student_id) else {
            return;
        };

        let mut total_points = 0.0;
        let mut total_credits = 0u32;
        for enrollment in history.iter().filter(|e| e.active) {
            let Some(grade) = enrollment.grade else {
                continue;
            };
            let Some(course) = self.registry.course(&enrollment.course_code) else {
                continue;
            };
            total_points += grade.points() * f64::from(course.credits);
            total_credits += course.credits;
        }

        let gpa = if total_credits == 0 {
            0.0
        } else {
            total_points / f64::from(total_credits)
        };

        if let Some(student) = self.registry.student_mut(student_id) {
            student.gpa = gpa;
        }
    }
}
