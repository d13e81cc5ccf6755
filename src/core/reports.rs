//! Aggregate reports over the registry and engine query surface
//!
//! Read-only statistics for the CLI's report subcommands. Everything here
//! works from snapshots; nothing mutates engine state.

use crate::core::engine::EnrollmentEngine;
use crate::core::models::Student;
use std::collections::HashMap;

/// GPA band used by the distribution report
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GpaBand {
    /// GPA below 5.0
    Poor,
    /// GPA in [5.0, 6.0)
    BelowAverage,
    /// GPA in [6.0, 7.0)
    Average,
    /// GPA in [7.0, 8.0)
    Good,
    /// GPA in [8.0, 9.0)
    VeryGood,
    /// GPA in [9.0, 10.0]
    Excellent,
}

impl GpaBand {
    /// Classify a GPA value into its band
    #[must_use]
    pub fn from_gpa(gpa: f64) -> Self {
        if gpa >= 9.0 {
            Self::Excellent
        } else if gpa >= 8.0 {
            Self::VeryGood
        } else if gpa >= 7.0 {
            Self::Good
        } else if gpa >= 6.0 {
            Self::Average
        } else if gpa >= 5.0 {
            Self::BelowAverage
        } else {
            Self::Poor
        }
    }

    /// Range label shown in the distribution report
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "9.0-10.0 (Excellent)",
            Self::VeryGood => "8.0-8.9 (Very Good)",
            Self::Good => "7.0-7.9 (Good)",
            Self::Average => "6.0-6.9 (Average)",
            Self::BelowAverage => "5.0-5.9 (Below Average)",
            Self::Poor => "0.0-4.9 (Poor)",
        }
    }

    /// All bands from highest to lowest, for stable report ordering
    #[must_use]
    pub const fn descending() -> [Self; 6] {
        [
            Self::Excellent,
            Self::VeryGood,
            Self::Good,
            Self::Average,
            Self::BelowAverage,
            Self::Poor,
        ]
    }
}

/// Headline enrollment numbers across active students
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentStats {
    /// Number of active students
    pub total_students: usize,
    /// Sum of enrolled-course counts over active students
    pub total_enrollments: usize,
    /// Mean enrollments per active student; 0 when there are none
    pub avg_enrollments: f64,
}

/// Active students with a recorded GPA, best first, capped at `limit`
#[must_use]
pub fn top_students_by_gpa(engine: &EnrollmentEngine, limit: usize) -> Vec<Student> {
    let mut students: Vec<Student> = engine
        .registry()
        .active_students()
        .into_iter()
        .filter(|s| s.gpa > 0.0)
        .collect();
    students.sort_by(|a, b| b.gpa.total_cmp(&a.gpa));
    students.truncate(limit);
    students
}

/// Count of active students with a recorded GPA in each band
#[must_use]
pub fn gpa_distribution(engine: &EnrollmentEngine) -> HashMap<GpaBand, usize> {
    let mut distribution = HashMap::new();
    for student in engine.registry().active_students() {
        if student.gpa > 0.0 {
            *distribution.entry(GpaBand::from_gpa(student.gpa)).or_insert(0) += 1;
        }
    }
    distribution
}

/// Totals and averages over active students' enrollments
#[must_use]
pub fn enrollment_stats(engine: &EnrollmentEngine) -> EnrollmentStats {
    let students = engine.registry().active_students();
    let total_enrollments: usize = students.iter().map(|s| s.enrolled_courses.len()).sum();
    let avg_enrollments = if students.is_empty() {
        0.0
    } else {
        total_enrollments as f64 / students.len() as f64
    };

    EnrollmentStats {
        total_students: students.len(),
        total_enrollments,
        avg_enrollments,
    }
}

/// Course counts per department, most courses first
#[must_use]
pub fn department_course_counts(engine: &EnrollmentEngine) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for course in engine.registry().all_courses() {
        *counts.entry(course.department).or_insert(0) += 1;
    }

    let mut sorted: Vec<(String, usize)> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}
