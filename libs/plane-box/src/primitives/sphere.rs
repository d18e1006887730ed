//! # Sphere Primitive
//!
//! Generates the marker sphere using latitude/longitude tessellation with
//! poles on the y axis.

use crate::error::{BoxError, BoxResult};
use crate::mesh::Mesh;
use config::constants::{MAX_SEGMENTS, MIN_SEGMENTS};
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a sphere mesh centered at `center`.
///
/// # Algorithm
///
/// - `num_rings = (segments + 1) / 2`
/// - Ring `i` sits at polar angle `phi = PI * (i + 0.5) / num_rings`
/// - No pole vertices; the first and last rings are closed with fans
///
/// # Example
///
/// ```rust
/// use plane_box::primitives::create_sphere;
/// use glam::DVec3;
///
/// let mesh = create_sphere(DVec3::new(0.0, 0.1, 0.0), 0.05, 16).unwrap();
/// assert_eq!(mesh.vertex_count(), 8 * 16);
/// ```
pub fn create_sphere(center: DVec3, radius: f64, segments: u32) -> BoxResult<Mesh> {
    if !(radius > 0.0 && radius.is_finite()) {
        return Err(BoxError::degenerate(format!(
            "sphere radius must be positive: {radius}"
        )));
    }
    if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&segments) {
        return Err(BoxError::degenerate(format!(
            "sphere segments must lie in [{MIN_SEGMENTS}, {MAX_SEGMENTS}]: {segments}"
        )));
    }

    let num_rings = (segments + 1) / 2;
    let vertex_count = (num_rings as usize)
        .checked_mul(segments as usize)
        .ok_or_else(|| BoxError::degenerate(format!("sphere too large: {segments} segments")))?;
    let triangle_count = vertex_count
        .checked_mul(2)
        .ok_or_else(|| BoxError::degenerate(format!("sphere too large: {segments} segments")))?;
    let mut mesh = Mesh::with_capacity(vertex_count, triangle_count);

    let rings: Vec<Vec<u32>> = (0..num_rings)
        .map(|i| {
            let phi = PI * (i as f64 + 0.5) / num_rings as f64;
            let ring_radius = radius * phi.sin();
            let y = radius * phi.cos();

            (0..segments)
                .map(|j| {
                    let theta = 2.0 * PI * j as f64 / segments as f64;
                    let offset = DVec3::new(ring_radius * theta.cos(), y, -ring_radius * theta.sin());
                    mesh.add_vertex(center + offset)
                })
                .collect()
        })
        .collect();

    // Top cap
    let first_ring = &rings[0];
    for j in 1..segments as usize - 1 {
        mesh.add_triangle(first_ring[0], first_ring[j], first_ring[j + 1]);
    }

    // Bands between adjacent rings
    for pair in rings.windows(2) {
        let (ring_a, ring_b) = (&pair[0], &pair[1]);
        for j in 0..segments as usize {
            let j_next = (j + 1) % segments as usize;
            mesh.add_triangle(ring_a[j], ring_b[j], ring_b[j_next]);
            mesh.add_triangle(ring_a[j], ring_b[j_next], ring_a[j_next]);
        }
    }

    // Bottom cap, reversed
    let last_ring = &rings[rings.len() - 1];
    for j in 1..segments as usize - 1 {
        mesh.add_triangle(last_ring[0], last_ring[j + 1], last_ring[j]);
    }

    Ok(mesh)
}
