//! Instructor model

use super::person::{DisplaySummary, PersonInfo};
use serde::{Deserialize, Serialize};

/// Represents a course instructor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    /// Shared identity fields (id, name, email, active flag)
    pub info: PersonInfo,

    /// Institutional employee identifier
    pub employee_id: String,

    /// Department the instructor belongs to
    pub department: String,
}

impl Instructor {
    /// Create a new active instructor
    #[must_use]
    pub fn new(
        id: String,
        employee_id: String,
        full_name: String,
        email: String,
        department: String,
    ) -> Self {
        Self {
            info: PersonInfo::new(id, full_name, email),
            employee_id,
            department,
        }
    }

    /// The instructor's unique identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.info.id
    }
}

impl DisplaySummary for Instructor {
    fn display_summary(&self) -> String {
        format!(
            "Instructor: {} ({}) - {}, {}",
            self.info.full_name, self.employee_id, self.info.email, self.department
        )
    }
}
