//! Error types for galaxy construction and lookups

use particles::ParticleKind;
use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, GalaxyError>;

/// How seriously a failure should be taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Parameters are computable but the result is unlikely or unstable
    Warning,
    /// Parameters or inputs are impossible
    Fatal,
}

/// Errors raised while building or querying a galaxy
#[derive(Debug, Error)]
pub enum GalaxyError {
    /// The crystal/destruction depth relationship cannot yield a galaxy.
    #[error("impossible configuration: {0}")]
    ImpossibleConfiguration(String),

    /// The galaxy can be built but its prisms would be of poor quality.
    #[error("unstable configuration: {0}")]
    UnstableConfiguration(String),

    /// A particle tag outside the Large/Small taxonomy reached a lookup.
    #[error("unknown fundamental particle kind: {0}")]
    UnknownParticleKind(ParticleKind),

    /// A matter code outside the Matter/Antimatter taxonomy.
    #[error("unknown matter kind code: {0}")]
    UnknownMatterKind(u8),

    /// A configuration document could not be parsed.
    #[error("invalid galaxy configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

impl GalaxyError {
    /// Only an unstable configuration is warning-class; everything else is fatal.
    pub fn severity(&self) -> Severity {
        match self {
            Self::UnstableConfiguration(_) => Severity::Warning,
            _ => Severity::Fatal,
        }
    }

    /// Shorthand for `severity() == Severity::Warning`
    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}
