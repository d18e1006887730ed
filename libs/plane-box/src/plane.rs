//! # Plane Description
//!
//! The input handed over by the spatial-tracking collaborator for every newly
//! detected horizontal surface.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A detected horizontal plane.
///
/// `center` is in the anchor's local frame. `extent` holds the plane's width
/// on `x` and length on `z`; its `y` component is ignored because the plane
/// is horizontal.
///
/// # Example
///
/// ```rust
/// use plane_box::PlaneDescription;
/// use glam::DVec3;
///
/// let plane = PlaneDescription::new(DVec3::new(0.1, 0.0, -0.2), 1.0, 0.5);
/// assert_eq!(plane.extent, DVec3::new(1.0, 0.0, 0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneDescription {
    /// Plane center, surface-local.
    pub center: DVec3,
    /// Horizontal extent: `x` is width, `z` is length.
    pub extent: DVec3,
}

impl PlaneDescription {
    /// Creates a plane from its center and horizontal extents.
    pub fn new(center: DVec3, width: f64, length: f64) -> Self {
        Self {
            center,
            extent: DVec3::new(width, 0.0, length),
        }
    }

    /// Creates a plane centered at the anchor origin.
    pub fn centered(width: f64, length: f64) -> Self {
        Self::new(DVec3::ZERO, width, length)
    }
}
