use crate::tetrahedron::{particles_per_tetrahedron, triangular_number};

/// Apex plus one triangular layer per height, summed term by term
fn stacked_layers(edge_length: u32) -> u128 {
    let mut count = 1;
    for height in (2..=edge_length).rev() {
        count += (1..=u128::from(height)).sum::<u128>();
    }
    count
}

#[test]
fn test_triangular_numbers() {
    assert_eq!(triangular_number(0), 0);
    assert_eq!(triangular_number(1), 1);
    assert_eq!(triangular_number(4), 10);
    assert_eq!(triangular_number(13), 91);
    assert_eq!(triangular_number(u32::MAX), 9_223_372_034_707_292_160);
}

#[test]
fn test_reference_counts() {
    assert_eq!(particles_per_tetrahedron(1), 1);
    assert_eq!(particles_per_tetrahedron(2), 4);
    assert_eq!(particles_per_tetrahedron(3), 10);
    assert_eq!(particles_per_tetrahedron(5), 35);
    assert_eq!(particles_per_tetrahedron(13), 455);
}

#[test]
fn test_matches_stacked_layers() {
    for edge in 0..=300 {
        assert_eq!(particles_per_tetrahedron(edge), stacked_layers(edge), "edge {}", edge);
    }
}

#[test]
fn test_zero_edge_is_apex_only() {
    assert_eq!(particles_per_tetrahedron(0), 1);
}

#[test]
fn test_large_edges_are_exact() {
    // Beyond ~4.8 million the count no longer fits in a u64
    let count = particles_per_tetrahedron(5_000_000);
    assert_eq!(count, 20_833_345_833_335_000_000);
    assert!(count > u128::from(u64::MAX));

    let n = u128::from(u32::MAX);
    assert_eq!(particles_per_tetrahedron(u32::MAX), n * (n + 1) * (n + 2) / 6);
    assert_eq!(
        particles_per_tetrahedron(u32::MAX),
        13_204_693_752_377_389_598_208_163_840
    );
}
