use crate::{GalaxyError, MatterKind, ParticleKind, Twisting};

#[test]
fn test_truth_table() {
    let table = [
        (MatterKind::Matter, ParticleKind::Large, Twisting::Right),
        (MatterKind::Matter, ParticleKind::Small, Twisting::Left),
        (MatterKind::Antimatter, ParticleKind::Large, Twisting::Left),
        (MatterKind::Antimatter, ParticleKind::Small, Twisting::Right),
    ];
    for (matter, kind, expected) in table {
        assert_eq!(matter.twisting_for(kind).unwrap(), expected, "{} + {}", matter, kind);
    }
}

#[test]
fn test_antimatter_mirrors_matter() {
    for kind in ParticleKind::ALL {
        let matter = MatterKind::Matter.twisting_for(kind).unwrap();
        let antimatter = MatterKind::Matter.opposite().twisting_for(kind).unwrap();
        assert_eq!(antimatter, matter.reversed());
    }
}

#[test]
fn test_unclassified_particle_rejected() {
    for matter in [MatterKind::Matter, MatterKind::Antimatter] {
        let err = matter.twisting_for(ParticleKind::from_code(42)).unwrap_err();
        assert!(matches!(
            err,
            GalaxyError::UnknownParticleKind(kind) if kind.code() == 42
        ));
    }
}

#[test]
fn test_matter_codes() {
    assert_eq!(MatterKind::from_code(1).unwrap(), MatterKind::Matter);
    assert_eq!(MatterKind::from_code(2).unwrap(), MatterKind::Antimatter);
    assert_eq!(MatterKind::Antimatter.code(), 2);
    assert!(matches!(
        MatterKind::from_code(3),
        Err(GalaxyError::UnknownMatterKind(3))
    ));
    assert!(matches!(
        MatterKind::from_code(0),
        Err(GalaxyError::UnknownMatterKind(0))
    ));
}

#[test]
fn test_default_is_matter() {
    assert_eq!(MatterKind::default(), MatterKind::Matter);
}

#[test]
fn test_serde_names_are_snake_case() {
    assert_eq!(serde_json::to_string(&MatterKind::Antimatter).unwrap(), "\"antimatter\"");
    assert_eq!(serde_json::to_string(&Twisting::Left).unwrap(), "\"left\"");
    assert_eq!(serde_json::to_string(&ParticleKind::Small).unwrap(), "\"small\"");
    assert_eq!(
        serde_json::to_string(&crate::PrismGrade::VeryGood).unwrap(),
        "\"very_good\""
    );
}
