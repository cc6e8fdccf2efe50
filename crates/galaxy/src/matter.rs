//! Matter type of a galaxy and the quasiball twisting it implies
//!
//! A quasiball (QB) must carry an internal twisting for geometric reasons.
//! Which way it twists depends on the size of the fundamental particle it is
//! built around and on whether the galaxy crystallized as matter or
//! antimatter.

use particles::ParticleKind;
use serde::{Deserialize, Serialize};

use crate::error::{GalaxyError, Result};

/// Twisting direction of a quasiball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Twisting {
    Left,
    Right,
}

impl Twisting {
    /// The opposite direction
    pub fn reversed(&self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl std::fmt::Display for Twisting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
        }
    }
}

/// Whether a galaxy crystallized as matter or antimatter
///
/// | Matter     | Large FP | Small FP |
/// |------------|----------|----------|
/// | Matter     | Right    | Left     |
/// | Antimatter | Left     | Right    |
///
/// It is not settled whether left and right are assigned to the right
/// particle sizes; matter and antimatter could be exchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatterKind {
    #[default]
    Matter,
    Antimatter,
}

impl MatterKind {
    pub const MATTER_CODE: u8 = 1;
    pub const ANTIMATTER_CODE: u8 = 2;

    /// Decode a raw matter code
    ///
    /// # Errors
    /// `GalaxyError::UnknownMatterKind` for any code other than 1 or 2.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            Self::MATTER_CODE => Ok(Self::Matter),
            Self::ANTIMATTER_CODE => Ok(Self::Antimatter),
            other => Err(GalaxyError::UnknownMatterKind(other)),
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Self::Matter => Self::MATTER_CODE,
            Self::Antimatter => Self::ANTIMATTER_CODE,
        }
    }

    /// Twisting of a quasiball built around a fundamental particle of `kind`
    ///
    /// # Errors
    /// `GalaxyError::UnknownParticleKind` if `kind` is not Large or Small.
    ///
    /// # Example
    /// ```
    /// use galaxy::{MatterKind, ParticleKind, Twisting};
    ///
    /// let twisting = MatterKind::Matter.twisting_for(ParticleKind::Large).unwrap();
    /// assert_eq!(twisting, Twisting::Right);
    /// ```
    pub fn twisting_for(&self, kind: ParticleKind) -> Result<Twisting> {
        match (self, kind) {
            (Self::Matter, ParticleKind::Large) => Ok(Twisting::Right),
            (Self::Matter, ParticleKind::Small) => Ok(Twisting::Left),
            (Self::Antimatter, ParticleKind::Large) => Ok(Twisting::Left),
            (Self::Antimatter, ParticleKind::Small) => Ok(Twisting::Right),
            (_, unknown @ ParticleKind::Unclassified(_)) => {
                Err(GalaxyError::UnknownParticleKind(unknown))
            }
        }
    }

    /// The mirror-image matter type
    pub fn opposite(&self) -> Self {
        match self {
            Self::Matter => Self::Antimatter,
            Self::Antimatter => Self::Matter,
        }
    }
}

impl std::fmt::Display for MatterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Matter => write!(f, "Matter"),
            Self::Antimatter => write!(f, "Antimatter"),
        }
    }
}
