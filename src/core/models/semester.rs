//! Semester enumeration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Academic semester
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Semester {
    /// Spring term (first in the academic ordering)
    Spring,
    /// Summer term
    Summer,
    /// Fall term
    Fall,
}

impl Semester {
    /// Display name (e.g., "Spring")
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
        }
    }

    /// Position in the academic year, starting at 1
    #[must_use]
    pub const fn order(self) -> u8 {
        match self {
            Self::Spring => 1,
            Self::Summer => 2,
            Self::Fall => 3,
        }
    }
}

impl FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "fall" => Ok(Self::Fall),
            _ => Err(format!("Unknown semester: {s}")),
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("fall".parse::<Semester>(), Ok(Semester::Fall));
        assert_eq!("SPRING".parse::<Semester>(), Ok(Semester::Spring));
        assert_eq!(" Summer ".parse::<Semester>(), Ok(Semester::Summer));
        assert!("winter".parse::<Semester>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for semester in [Semester::Spring, Semester::Summer, Semester::Fall] {
            assert_eq!(semester.to_string().parse::<Semester>(), Ok(semester));
        }
    }

    #[test]
    fn ordering_follows_the_academic_year() {
        assert!(Semester::Spring.order() < Semester::Summer.order());
        assert!(Semester::Summer.order() < Semester::Fall.order());
    }
}
