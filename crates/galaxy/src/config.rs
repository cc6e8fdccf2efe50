//! Construction parameters for a galaxy

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::matter::MatterKind;

/// Parameters a galaxy crystallized with
///
/// Every field is optional in a configuration document and falls back to the
/// Milky Way-like defaults below.
///
/// | Field                 | Default |
/// |-----------------------|---------|
/// | `edgeLength`          | 13      |
/// | `matter`              | matter  |
/// | `crystalDepth`        | 5       |
/// | `destructionDepth`    | 2       |
/// | `prismQuasiballCount` | 12      |
/// | `validateOnCreate`    | true    |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalaxyConfig {
    /// Edge length of the particle tetrahedron
    #[serde(default = "default_edge_length")]
    pub edge_length: u32,

    /// Matter or antimatter
    #[serde(default)]
    pub matter: MatterKind,

    /// Height of the quasiball crystallization level
    #[serde(default = "default_crystal_depth")]
    pub crystal_depth: i32,

    /// Number of quasiball levels destroyed while prisms form
    #[serde(default = "default_destruction_depth")]
    pub destruction_depth: i32,

    /// Number of quasiballs (of the last size) per prism
    #[serde(default = "default_prism_quasiball_count")]
    pub prism_quasiball_count: u32,

    /// Run validation when a galaxy is built from this configuration
    #[serde(default = "default_validate_on_create")]
    pub validate_on_create: bool,
}

fn default_edge_length() -> u32 {
    13
}

fn default_crystal_depth() -> i32 {
    5
}

fn default_destruction_depth() -> i32 {
    2
}

fn default_prism_quasiball_count() -> u32 {
    12
}

fn default_validate_on_create() -> bool {
    true
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            edge_length: default_edge_length(),
            matter: MatterKind::default(),
            crystal_depth: default_crystal_depth(),
            destruction_depth: default_destruction_depth(),
            prism_quasiball_count: default_prism_quasiball_count(),
            validate_on_create: default_validate_on_create(),
        }
    }
}

impl GalaxyConfig {
    /// Parameters of our own galaxy
    pub fn milky_way() -> Self {
        Self::default()
            .with_edge_length(13)
            .with_matter(MatterKind::Matter)
    }

    /// Parse a JSON configuration document
    ///
    /// # Errors
    /// `GalaxyError::InvalidConfig` if the document is malformed or a field
    /// has the wrong type.
    ///
    /// # Example
    /// ```
    /// use galaxy::{GalaxyConfig, MatterKind};
    ///
    /// let config = GalaxyConfig::from_json(r#"{ "matter": "antimatter", "destructionDepth": 3 }"#).unwrap();
    /// assert_eq!(config.matter, MatterKind::Antimatter);
    /// assert_eq!(config.destruction_depth, 3);
    /// assert_eq!(config.crystal_depth, 5);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_edge_length(mut self, edge_length: u32) -> Self {
        self.edge_length = edge_length;
        self
    }

    pub fn with_matter(mut self, matter: MatterKind) -> Self {
        self.matter = matter;
        self
    }

    /// Set crystal and destruction depth together
    pub fn with_depths(mut self, crystal_depth: i32, destruction_depth: i32) -> Self {
        self.crystal_depth = crystal_depth;
        self.destruction_depth = destruction_depth;
        self
    }

    pub fn with_prism_quasiball_count(mut self, count: u32) -> Self {
        self.prism_quasiball_count = count;
        self
    }

    /// Skip validation at construction; `Galaxy::validate` can still be called later
    pub fn without_validation(mut self) -> Self {
        self.validate_on_create = false;
        self
    }
}
