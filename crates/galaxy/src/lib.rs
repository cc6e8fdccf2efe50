//! Galaxy crystallization parameters
//!
//! This crate derives the structural parameters of a galaxy (particles per
//! tetrahedron, prism grade, quasiball twisting) from the handful of values it
//! crystallized with, and checks whether those values describe a plausible
//! galaxy.

pub mod config;
pub mod error;
pub mod galaxy;
pub mod matter;
pub mod prism;
pub mod tetrahedron;

// Re-export main types at crate root
pub use config::GalaxyConfig;
pub use error::{GalaxyError, Result, Severity};
pub use galaxy::{Galaxy, milky_way};
pub use matter::{MatterKind, Twisting};
pub use prism::PrismGrade;

// Re-export the particle taxonomy for convenience
pub use particles::ParticleKind;

/// Package version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package version as (major, minor, patch)
pub const RELEASE: (u32, u32, u32) = (
    parse_version_component(env!("CARGO_PKG_VERSION_MAJOR")),
    parse_version_component(env!("CARGO_PKG_VERSION_MINOR")),
    parse_version_component(env!("CARGO_PKG_VERSION_PATCH")),
);

const fn parse_version_component(digits: &str) -> u32 {
    let bytes = digits.as_bytes();
    let mut value = 0;
    let mut i = 0;
    while i < bytes.len() {
        value = value * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }
    value
}

#[cfg(test)]
mod config_test;
#[cfg(test)]
mod matter_test;
#[cfg(test)]
mod tetrahedron_test;
