use crate::{GalaxyConfig, GalaxyError, MatterKind};

#[test]
fn test_defaults() {
    let config = GalaxyConfig::default();
    assert_eq!(config.edge_length, 13);
    assert_eq!(config.matter, MatterKind::Matter);
    assert_eq!(config.crystal_depth, 5);
    assert_eq!(config.destruction_depth, 2);
    assert_eq!(config.prism_quasiball_count, 12);
    assert!(config.validate_on_create);
}

#[test]
fn test_empty_document_uses_defaults() {
    let config = GalaxyConfig::from_json("{}").unwrap();
    assert_eq!(config, GalaxyConfig::default());
}

#[test]
fn test_document_overrides_fields() {
    let config = GalaxyConfig::from_json(
        r#"{
            "edgeLength": 5,
            "matter": "antimatter",
            "crystalDepth": 7,
            "destructionDepth": 3,
            "prismQuasiballCount": 20,
            "validateOnCreate": false
        }"#,
    )
    .unwrap();
    assert_eq!(
        config,
        GalaxyConfig::default()
            .with_edge_length(5)
            .with_matter(MatterKind::Antimatter)
            .with_depths(7, 3)
            .with_prism_quasiball_count(20)
            .without_validation()
    );
}

#[test]
fn test_malformed_document_rejected() {
    let err = GalaxyConfig::from_json(r#"{ "matter": "dark" }"#).unwrap_err();
    assert!(matches!(err, GalaxyError::InvalidConfig(_)));

    let err = GalaxyConfig::from_json(r#"{ "edgeLength": -3 }"#).unwrap_err();
    assert!(matches!(err, GalaxyError::InvalidConfig(_)));

    assert!(GalaxyConfig::from_json("not json").is_err());
}

#[test]
fn test_milky_way_config() {
    let config = GalaxyConfig::milky_way();
    assert_eq!(config.edge_length, 13);
    assert_eq!(config.matter, MatterKind::Matter);
    assert!(config.validate_on_create);
}
