//! The galaxy model
//!
//! Each `Galaxy` describes one galaxy with its own parameters, fixed by the
//! energies and particle masses of the galactic nucleus during the hidden
//! crystallization phase. A galaxy is immutable once built; everything else
//! is derived from the construction parameters on demand.

use particles::ParticleKind;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::GalaxyConfig;
use crate::error::{GalaxyError, Result};
use crate::matter::{MatterKind, Twisting};
use crate::prism::PrismGrade;
use crate::tetrahedron;

/// A crystallized galaxy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Galaxy {
    config: GalaxyConfig,
}

impl Galaxy {
    /// Build a galaxy from its parameters
    ///
    /// When `config.validate_on_create` is set the galaxy is validated
    /// immediately and any finding, including an unstable one, is returned
    /// as an error.
    ///
    /// # Example
    /// ```
    /// use galaxy::{Galaxy, GalaxyConfig, GalaxyError};
    ///
    /// let galaxy = Galaxy::new(GalaxyConfig::default().with_depths(6, 3)).unwrap();
    /// assert_eq!(galaxy.crystal_depth(), 6);
    ///
    /// let err = Galaxy::new(GalaxyConfig::default().with_depths(3, 3)).unwrap_err();
    /// assert!(matches!(err, GalaxyError::ImpossibleConfiguration(_)));
    /// ```
    pub fn new(config: GalaxyConfig) -> Result<Self> {
        debug!(
            edge_length = config.edge_length,
            matter = %config.matter,
            crystal_depth = config.crystal_depth,
            destruction_depth = config.destruction_depth,
            prism_quasiball_count = config.prism_quasiball_count,
            validate = config.validate_on_create,
            "creating galaxy"
        );
        let galaxy = Self { config };
        if galaxy.config.validate_on_create {
            galaxy.validate()?;
        }
        Ok(galaxy)
    }

    /// Parse a JSON configuration document and build the galaxy it describes
    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(GalaxyConfig::from_json(json)?)
    }

    /// Check that the parameters describe a plausible galaxy
    ///
    /// Checks run in order and the first failing one is reported:
    /// 1. `crystal_depth - destruction_depth <= 0` is impossible
    /// 2. `crystal_depth - destruction_depth <= 1` is impossible
    /// 3. `destruction_depth < 1` is impossible
    /// 4. a prism grade below `Good` is unstable (warning-class)
    ///
    /// Pure; calling it repeatedly always gives the same answer.
    pub fn validate(&self) -> Result<()> {
        let margin = self.depth_margin();
        // Check 2 also covers margin <= 0; check 1 stays first for its message.
        if margin <= 0 {
            return Err(self.impossible("destructionDepth can't be larger than crystalDepth + 1"));
        }
        if margin <= 1 {
            return Err(self.impossible("crystalDepth - destructionDepth must be larger than 1"));
        }
        if self.config.destruction_depth < 1 {
            return Err(self.impossible("destructionDepth needs to be at least 1"));
        }
        let grade = self.prism_grade();
        if !grade.is_stable() {
            warn!(
                destruction_depth = self.config.destruction_depth,
                prism_grade = %grade,
                "unstable galaxy configuration"
            );
            return Err(GalaxyError::UnstableConfiguration("Bad prism grade".to_string()));
        }
        Ok(())
    }

    fn impossible(&self, message: &str) -> GalaxyError {
        debug!(
            crystal_depth = self.config.crystal_depth,
            destruction_depth = self.config.destruction_depth,
            reason = message,
            "impossible galaxy configuration"
        );
        GalaxyError::ImpossibleConfiguration(message.to_string())
    }

    /// Quality of prism formation
    pub fn prism_grade(&self) -> PrismGrade {
        PrismGrade::from_destruction_depth(self.config.destruction_depth)
    }

    /// Number of particles in one tetrahedron of this galaxy's edge length
    pub fn particles_per_tetrahedron(&self) -> u128 {
        tetrahedron::particles_per_tetrahedron(self.config.edge_length)
    }

    /// Twisting of a quasiball built around a fundamental particle of `kind`
    ///
    /// # Errors
    /// `GalaxyError::UnknownParticleKind` for a kind outside the taxonomy.
    pub fn twisting_for_kind(&self, kind: ParticleKind) -> Result<Twisting> {
        self.config.matter.twisting_for(kind)
    }

    /// Crystal depth minus destruction depth
    ///
    /// Widened to `i64` so any pair of `i32` depths has an exact margin.
    pub fn depth_margin(&self) -> i64 {
        i64::from(self.config.crystal_depth) - i64::from(self.config.destruction_depth)
    }

    pub fn edge_length(&self) -> u32 {
        self.config.edge_length
    }

    pub fn matter(&self) -> MatterKind {
        self.config.matter
    }

    pub fn crystal_depth(&self) -> i32 {
        self.config.crystal_depth
    }

    pub fn destruction_depth(&self) -> i32 {
        self.config.destruction_depth
    }

    /// Quasiballs per prism; stored but not yet used by any derived quantity
    pub fn prism_quasiball_count(&self) -> u32 {
        self.config.prism_quasiball_count
    }

    /// Parameters this galaxy was built from
    pub fn config(&self) -> &GalaxyConfig {
        &self.config
    }
}

/// Our own galaxy: edge length 13, matter, default depths, validated
///
/// # Example
/// ```
/// use galaxy::{milky_way, MatterKind};
///
/// let galaxy = milky_way().unwrap();
/// assert_eq!(galaxy.edge_length(), 13);
/// assert_eq!(galaxy.matter(), MatterKind::Matter);
/// assert_eq!(galaxy.particles_per_tetrahedron(), 455);
/// ```
pub fn milky_way() -> Result<Galaxy> {
    Galaxy::new(GalaxyConfig::milky_way())
}
