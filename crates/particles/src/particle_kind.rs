//! Size classification of fundamental particles

use serde::{Deserialize, Serialize};

/// Size class of a fundamental particle
///
/// The taxonomy is closed: every fundamental particle is either `Large` or
/// `Small`. `Unclassified` carries a raw tag that falls outside the taxonomy
/// so that lookups keyed on the particle kind can reject it explicitly
/// instead of silently picking a default.
///
/// | Kind   | Code |
/// |--------|------|
/// | Large  | 1    |
/// | Small  | 2    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleKind {
    /// Large fundamental particle
    Large,

    /// Small fundamental particle
    Small,

    /// Raw tag that does not belong to the taxonomy
    Unclassified(UnclassifiedCode),
}

impl ParticleKind {
    /// Tag code of the large fundamental particle
    pub const LARGE_CODE: u8 = 1;

    /// Tag code of the small fundamental particle
    pub const SMALL_CODE: u8 = 2;

    /// The classified kinds, large first
    pub const ALL: [ParticleKind; 2] = [ParticleKind::Large, ParticleKind::Small];

    /// Decode a raw tag
    ///
    /// Never fails: codes outside the taxonomy become `Unclassified` and are
    /// rejected by whichever lookup consumes them.
    ///
    /// # Example
    /// ```
    /// use particles::ParticleKind;
    ///
    /// assert_eq!(ParticleKind::from_code(1), ParticleKind::Large);
    /// assert!(!ParticleKind::from_code(9).is_classified());
    /// ```
    pub fn from_code(code: u8) -> Self {
        match code {
            Self::LARGE_CODE => Self::Large,
            Self::SMALL_CODE => Self::Small,
            other => Self::Unclassified(UnclassifiedCode(other)),
        }
    }

    /// Raw tag for this kind, the inverse of [`ParticleKind::from_code`]
    pub fn code(&self) -> u8 {
        match self {
            Self::Large => Self::LARGE_CODE,
            Self::Small => Self::SMALL_CODE,
            Self::Unclassified(code) => code.get(),
        }
    }

    /// Whether this kind belongs to the taxonomy
    pub fn is_classified(&self) -> bool {
        !matches!(self, Self::Unclassified(_))
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Large => "Large",
            Self::Small => "Small",
            Self::Unclassified(_) => "Unclassified",
        }
    }
}

impl std::fmt::Display for ParticleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unclassified(code) => write!(f, "Unclassified({})", code),
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// A particle tag outside the taxonomy
///
/// Never holds the code of `Large` or `Small`, so every `ParticleKind` has a
/// distinct code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct UnclassifiedCode(u8);

impl UnclassifiedCode {
    /// `None` if `code` belongs to a classified kind
    pub fn new(code: u8) -> Option<Self> {
        match ParticleKind::from_code(code) {
            ParticleKind::Unclassified(code) => Some(code),
            _ => None,
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for UnclassifiedCode {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::new(code).ok_or_else(|| format!("particle code {} is classified", code))
    }
}

impl From<UnclassifiedCode> for u8 {
    fn from(code: UnclassifiedCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for UnclassifiedCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
