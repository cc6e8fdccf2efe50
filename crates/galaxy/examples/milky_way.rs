//! Print the derived parameters of the Milky Way and a few other galaxies
//!
//! Usage: cargo run -p galaxy --example milky_way
//!
//! Set RUST_LOG=galaxy=debug to see construction and validation logs.

use galaxy::{milky_way, Galaxy, GalaxyConfig, MatterKind, ParticleKind};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn describe(name: &str, galaxy: &Galaxy) {
    println!("{}", name);
    println!("  matter:                     {}", galaxy.matter());
    println!("  edge length:                {}", galaxy.edge_length());
    println!(
        "  crystal/destruction depth:  {}/{}",
        galaxy.crystal_depth(),
        galaxy.destruction_depth()
    );
    println!("  particles per tetrahedron:  {}", galaxy.particles_per_tetrahedron());
    println!("  prism grade:                {}", galaxy.prism_grade());
    for kind in ParticleKind::ALL {
        match galaxy.twisting_for_kind(kind) {
            Ok(twisting) => println!("  {:<5} FP quasiball twist:  {}", kind, twisting),
            Err(e) => println!("  {:<5} FP quasiball twist:  {}", kind, e),
        }
    }
}

fn main() -> galaxy::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    describe("Milky Way", &milky_way()?);

    let mirror = Galaxy::new(GalaxyConfig::milky_way().with_matter(MatterKind::Antimatter))?;
    describe("Antimatter Milky Way", &mirror);

    let candidates = [(3, 4), (4, 3), (3, 1), (4, 2), (6, 3)];
    println!("Depth candidates (crystal, destruction)");
    for (crystal, destruction) in candidates {
        let config = GalaxyConfig::default().with_depths(crystal, destruction);
        match Galaxy::new(config) {
            Ok(galaxy) => println!("  ({}, {}): ok, prism grade {}", crystal, destruction, galaxy.prism_grade()),
            Err(e) => println!("  ({}, {}): {:?} {}", crystal, destruction, e.severity(), e),
        }
    }

    Ok(())
}
