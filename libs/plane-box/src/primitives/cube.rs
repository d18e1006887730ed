//! # Box Primitive
//!
//! Generates the closed rectangular volume used as an invisible hit target.

use crate::error::{BoxError, BoxResult};
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates an axis-aligned box mesh spanning `min` to `max`.
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face), wound so that
/// every face normal points outward in a y-up frame.
///
/// # Example
///
/// ```rust
/// use plane_box::primitives::create_box;
/// use glam::DVec3;
///
/// let mesh = create_box(DVec3::new(-0.5, 0.0, -0.5), DVec3::new(0.5, 0.2, 0.5)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_box(min: DVec3, max: DVec3) -> BoxResult<Mesh> {
    let size = max - min;
    if !(size.x > 0.0 && size.y > 0.0 && size.z > 0.0) {
        return Err(BoxError::degenerate(format!(
            "box size must be positive: {size:?}"
        )));
    }

    let mut mesh = Mesh::with_capacity(8, 12);

    // Bottom ring (y = min.y)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z)); // left-front
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z)); // right-front
    let v2 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z)); // right-back
    let v3 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z)); // left-back

    // Top ring (y = max.y)
    let v4 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z));
    let v5 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z));
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z));
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z));

    // Bottom (-y)
    mesh.add_triangle(v0, v1, v2);
    mesh.add_triangle(v0, v2, v3);

    // Top (+y)
    mesh.add_triangle(v4, v6, v5);
    mesh.add_triangle(v4, v7, v6);

    // Front (-z)
    mesh.add_triangle(v0, v5, v1);
    mesh.add_triangle(v0, v4, v5);

    // Back (+z)
    mesh.add_triangle(v3, v2, v6);
    mesh.add_triangle(v3, v6, v7);

    // Left (-x)
    mesh.add_triangle(v0, v3, v7);
    mesh.add_triangle(v0, v7, v4);

    // Right (+x)
    mesh.add_triangle(v1, v6, v2);
    mesh.add_triangle(v1, v5, v6);

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn resting_box() -> Mesh {
        create_box(DVec3::new(-0.5, 0.0, -1.0), DVec3::new(0.5, 0.2, 1.0)).unwrap()
    }

    #[test]
    fn test_box_counts() {
        let mesh = resting_box();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_box_bounds() {
        let (min, max) = resting_box().bounding_box();
        assert_eq!(min, DVec3::new(-0.5, 0.0, -1.0));
        assert_eq!(max, DVec3::new(0.5, 0.2, 1.0));
    }

    #[test]
    fn test_box_validates() {
        assert!(resting_box().validate());
    }

    /// Outward winding gives a positive enclosed volume equal to w * h * l.
    #[test]
    fn test_box_winding_outward() {
        assert_relative_eq!(resting_box().signed_volume(), 1.0 * 0.2 * 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_box_zero_size() {
        let result = create_box(DVec3::ZERO, DVec3::new(1.0, 0.0, 1.0));
        assert!(matches!(result, Err(BoxError::Degenerate { .. })));
    }

    #[test]
    fn test_box_inverted_corners() {
        assert!(create_box(DVec3::ONE, DVec3::ZERO).is_err());
    }

    #[test]
    fn test_box_nan_size() {
        assert!(create_box(DVec3::ZERO, DVec3::new(f64::NAN, 1.0, 1.0)).is_err());
    }
}
