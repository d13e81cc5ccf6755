//! Shared identity fields for people in the registry
//!
//! Students and instructors share the same identity shape. The shared
//! fields live in `PersonInfo` held by composition, and each concrete
//! entity implements [`DisplaySummary`] for its own one-line rendering.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identity fields common to every person-like record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInfo {
    /// Unique identifier, immutable after creation
    pub id: String,

    /// Full display name
    pub full_name: String,

    /// Contact email
    pub email: String,

    /// Date the record was created
    pub date_created: NaiveDate,

    /// Whether the record is active; deactivation is the deletion surrogate
    pub active: bool,
}

impl PersonInfo {
    /// Create identity fields with today's date and the active flag set
    #[must_use]
    pub fn new(id: String, full_name: String, email: String) -> Self {
        Self {
            id,
            full_name,
            email,
            date_created: chrono::Local::now().date_naive(),
            active: true,
        }
    }
}

/// One-line summary rendering, implemented per concrete entity kind
pub trait DisplaySummary {
    /// Render a short human-readable summary of the record
    fn display_summary(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_person_is_active() {
        let info = PersonInfo::new(
            "S001".to_string(),
            "Ada Lovelace".to_string(),
            "ada@example.edu".to_string(),
        );

        assert_eq!(info.id, "S001");
        assert!(info.active);
    }
}
