//! Fundamental particle taxonomy
//!
//! Fundamental particles (FP) are the most basic unit of matter organization:
//! simple, indestructible balls that come in two sizes. Higher-order
//! structures (quasiballs) take their twisting from the size of the FP they
//! are built around.

pub mod particle_kind;

pub use particle_kind::{ParticleKind, UnclassifiedCode};
