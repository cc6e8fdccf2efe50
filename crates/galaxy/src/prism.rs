//! Prism quality grading

use serde::{Deserialize, Serialize};

/// Quality of the prisms a galaxy shapes
///
/// Ordered by rank: `Low < Good < VeryGood`. Determined solely by the
/// number of quasiball levels destroyed while prisms form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrismGrade {
    Low,
    Good,
    VeryGood,
}

impl PrismGrade {
    /// Grade for a given destruction depth
    ///
    /// | Destruction depth | Grade    |
    /// |-------------------|----------|
    /// | ≤ 1               | Low      |
    /// | 2                 | Good     |
    /// | ≥ 3               | VeryGood |
    pub fn from_destruction_depth(destruction_depth: i32) -> Self {
        match destruction_depth {
            d if d <= 1 => Self::Low,
            2 => Self::Good,
            _ => Self::VeryGood,
        }
    }

    /// Grades below `Good` make for an unstable galaxy
    pub fn is_stable(&self) -> bool {
        *self >= Self::Good
    }

    /// Numeric rank (low=1, good=2, very_good=3)
    pub fn rank(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Good => 2,
            Self::VeryGood => 3,
        }
    }
}

impl std::fmt::Display for PrismGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Good => write!(f, "Good"),
            Self::VeryGood => write!(f, "Very good"),
        }
    }
}
