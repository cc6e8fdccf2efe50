//! Particle counts for tetrahedral stacks
//!
//! Counts are `u128`: C(n + 2, 3) for any `u32` edge length stays below
//! 2^97, so every count is exact.

/// Triangular number T(h) = 1 + 2 + ... + h = h * (h + 1) / 2
pub fn triangular_number(height: u32) -> u128 {
    let h = u128::from(height);
    h * (h + 1) / 2
}

/// Number of particles in one tetrahedron of edge length `edge_length`
///
/// One apex particle plus a triangular layer for every height from
/// `edge_length` down to 2. For `n >= 1` this is the tetrahedral number
/// C(n + 2, 3) = n (n + 1) (n + 2) / 6; an edge length of 0 yields the apex
/// alone.
///
/// # Example
/// ```
/// use galaxy::tetrahedron::particles_per_tetrahedron;
///
/// assert_eq!(particles_per_tetrahedron(5), 35);
/// assert_eq!(particles_per_tetrahedron(13), 455);
/// ```
pub fn particles_per_tetrahedron(edge_length: u32) -> u128 {
    if edge_length == 0 {
        return 1;
    }
    let n = u128::from(edge_length);
    n * (n + 1) * (n + 2) / 6
}
