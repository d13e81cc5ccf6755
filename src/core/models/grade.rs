//! Grade scale
//!
//! Fixed six-level letter scale with grade points, plus the marks-to-grade
//! classification used everywhere a grade is derived.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter grade with an associated grade-point value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Excellent (10 points)
    S,
    /// Very Good (9 points)
    A,
    /// Good (8 points)
    B,
    /// Average (7 points)
    C,
    /// Below Average (6 points)
    D,
    /// Fail (0 points)
    F,
}

impl Grade {
    /// Classify numeric marks into a letter grade.
    ///
    /// Marks are conventionally 0-100 but are not range-checked here.
    /// Boundary values belong to the higher band: exactly 90.0 is `S`.
    #[must_use]
    pub fn from_marks(marks: f64) -> Self {
        if marks >= 90.0 {
            Self::S
        } else if marks >= 80.0 {
            Self::A
        } else if marks >= 70.0 {
            Self::B
        } else if marks >= 60.0 {
            Self::C
        } else if marks >= 50.0 {
            Self::D
        } else {
            Self::F
        }
    }

    /// Grade-point value used in GPA computation
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::S => 10.0,
            Self::A => 9.0,
            Self::B => 8.0,
            Self::C => 7.0,
            Self::D => 6.0,
            Self::F => 0.0,
        }
    }

    /// Single-letter form used in transcripts and CSV exports
    #[must_use]
    pub const fn letter(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Human-readable descriptor for the grade level
    #[must_use]
    pub const fn descriptor(self) -> &'static str {
        match self {
            Self::S => "Excellent",
            Self::A => "Very Good",
            Self::B => "Good",
            Self::C => "Average",
            Self::D => "Below Average",
            Self::F => "Fail",
        }
    }
}

impl PartialOrd for Grade {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Grade {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.points().total_cmp(&other.points())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" => Ok(Self::S),
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "F" => Ok(Self::F),
            _ => Err(format!("Unknown grade letter: {s}")),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.1} points) - {}",
            self.letter(),
            self.points(),
            self.descriptor()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_band_interiors() {
        assert_eq!(Grade::from_marks(95.0), Grade::S);
        assert_eq!(Grade::from_marks(85.0), Grade::A);
        assert_eq!(Grade::from_marks(75.0), Grade::B);
        assert_eq!(Grade::from_marks(65.0), Grade::C);
        assert_eq!(Grade::from_marks(55.0), Grade::D);
        assert_eq!(Grade::from_marks(20.0), Grade::F);
    }

    #[test]
    fn boundary_values_take_the_higher_band() {
        assert_eq!(Grade::from_marks(90.0), Grade::S);
        assert_eq!(Grade::from_marks(80.0), Grade::A);
        assert_eq!(Grade::from_marks(70.0), Grade::B);
        assert_eq!(Grade::from_marks(60.0), Grade::C);
        assert_eq!(Grade::from_marks(50.0), Grade::D);
    }

    #[test]
    fn just_below_a_boundary_takes_the_lower_band() {
        assert_eq!(Grade::from_marks(89.9), Grade::A);
        assert_eq!(Grade::from_marks(49.9), Grade::F);
    }

    #[test]
    fn classification_is_monotone_in_marks() {
        let marks = [100.0, 92.0, 90.0, 84.0, 71.0, 69.0, 60.0, 51.0, 49.0, 0.0];
        for pair in marks.windows(2) {
            assert!(
                Grade::from_marks(pair[0]) >= Grade::from_marks(pair[1]),
                "grade for {} should not be below grade for {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn ordering_follows_points() {
        assert!(Grade::S > Grade::A);
        assert!(Grade::A > Grade::B);
        assert!(Grade::D > Grade::F);
    }

    #[test]
    fn parses_letters_case_insensitively() {
        assert_eq!("s".parse::<Grade>(), Ok(Grade::S));
        assert_eq!(" F ".parse::<Grade>(), Ok(Grade::F));
        assert!("X".parse::<Grade>().is_err());
    }

    #[test]
    fn display_includes_points_and_descriptor() {
        assert_eq!(Grade::S.to_string(), "S (10.0 points) - Excellent");
        assert_eq!(Grade::F.to_string(), "F (0.0 points) - Fail");
    }
}
