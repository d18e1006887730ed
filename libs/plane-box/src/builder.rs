//! # Box Mesh Builder
//!
//! Turns an accepted [`BoundingSize`] into the geometry a renderer attaches
//! under the plane's anchor node:
//!
//! - an invisible, double-sided solid volume for hit-testing
//! - the six-segment [`BoxOutline`]
//! - a small opaque marker sphere at the center of the volume
//!
//! All coordinates are box-local: centered on x/z and resting on `y = 0`.

use config::constants::{marker_radius, PipelineConfig};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::BoxResult;
use crate::mesh::Mesh;
use crate::outline::{BoxOutline, LineStyle};
use crate::plane::PlaneDescription;
use crate::primitives::{create_box, create_sphere};
use crate::size::BoundingSize;

/// Flat surface material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMaterial {
    /// RGBA in `[0, 1]`.
    pub color: [f32; 4],
    /// Render and hit-test both faces of every triangle.
    pub double_sided: bool,
}

impl SurfaceMaterial {
    /// True when alpha is zero.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.color[3] == 0.0
    }
}

/// The invisible box used as a collision/anchor target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidVolume {
    /// Box dimensions.
    pub size: BoundingSize,
    /// Closed mesh spanning `[-w/2, w/2] x [0, h] x [-l/2, l/2]`.
    pub mesh: Mesh,
    /// Transparent, double-sided material applied to all six faces.
    pub material: SurfaceMaterial,
}

/// Where the marker sphere sits and how it looks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerPlacement {
    /// Sphere center, box-local.
    pub position: DVec3,
    /// Sphere radius, `height / 4` under the default policy.
    pub radius: f64,
    /// Opaque accent material.
    pub material: SurfaceMaterial,
    /// Tessellated sphere, already centered at `position`.
    pub mesh: Mesh,
}

/// Everything generated for one accepted box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxGeometry {
    /// Invisible hit volume.
    pub volume: SolidVolume,
    /// Visible wireframe.
    pub outline: BoxOutline,
    /// Marker inside the volume.
    pub marker: MarkerPlacement,
}

/// Builds box geometry from accepted sizes.
///
/// # Example
///
/// ```rust
/// use plane_box::{BoundingSize, BoxMeshBuilder};
/// use glam::DVec3;
///
/// let builder = BoxMeshBuilder::default();
/// let geometry = builder.build(&BoundingSize::new(1.0, 0.2, 1.0)).unwrap();
/// assert_eq!(geometry.outline.len(), 6);
/// assert_eq!(geometry.marker.position, DVec3::new(0.0, 0.1, 0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoxMeshBuilder {
    line_style: LineStyle,
    volume_color: [f32; 4],
    marker_color: [f32; 4],
    marker_segments: u32,
}

impl BoxMeshBuilder {
    /// Creates a builder using the style in `config`.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self {
            line_style: LineStyle {
                color: config.edge_color,
                thickness: config.edge_thickness,
            },
            volume_color: config.volume_color,
            marker_color: config.marker_color,
            marker_segments: config.marker_segments,
        }
    }

    /// Builds volume, outline and marker for `size`.
    ///
    /// Fails only when `size` has a zero or non-finite dimension, which the
    /// range check upstream rules out.
    pub fn build(&self, size: &BoundingSize) -> BoxResult<BoxGeometry> {
        Ok(BoxGeometry {
            volume: self.volume(size)?,
            outline: self.outline(size),
            marker: self.marker(size)?,
        })
    }

    /// Builds the invisible solid volume.
    pub fn volume(&self, size: &BoundingSize) -> BoxResult<SolidVolume> {
        let half = DVec3::new(size.width / 2.0, 0.0, size.length / 2.0);
        let mesh = create_box(-half, half + DVec3::Y * size.height)?;
        Ok(SolidVolume {
            size: *size,
            mesh,
            material: SurfaceMaterial {
                color: self.volume_color,
                double_sided: true,
            },
        })
    }

    /// Builds the six-segment wireframe.
    pub fn outline(&self, size: &BoundingSize) -> BoxOutline {
        BoxOutline::new(size, self.line_style)
    }

    /// Places the marker sphere at the center of the volume.
    pub fn marker(&self, size: &BoundingSize) -> BoxResult<MarkerPlacement> {
        let position = marker_position(size);
        let radius = marker_radius(size.height);
        let mesh = create_sphere(position, radius, self.marker_segments)?;
        Ok(MarkerPlacement {
            position,
            radius,
            material: SurfaceMaterial {
                color: self.marker_color,
                double_sided: false,
            },
            mesh,
        })
    }
}

impl Default for BoxMeshBuilder {
    fn default() -> Self {
        Self::from_config(&PipelineConfig::default())
    }
}

/// Marker center, box-local: horizontally centered at half height.
#[inline]
pub fn marker_position(size: &BoundingSize) -> DVec3 {
    DVec3::new(0.0, size.height / 2.0, 0.0)
}

/// Position of the box anchor in the plane's frame.
///
/// The box is lifted by half its height and moved to the plane's horizontal
/// center.
///
/// # Example
///
/// ```rust
/// use plane_box::{anchor_position, BoundingSize, PlaneDescription};
/// use glam::DVec3;
///
/// let plane = PlaneDescription::new(DVec3::new(0.4, 0.7, -0.3), 1.0, 1.0);
/// let anchor = anchor_position(&plane, &BoundingSize::new(1.0, 0.2, 1.0));
/// assert_eq!(anchor, DVec3::new(0.4, 0.1, -0.3));
/// ```
#[inline]
pub fn anchor_position(plane: &PlaneDescription, size: &BoundingSize) -> DVec3 {
    DVec3::new(plane.center.x, size.height / 2.0, plane.center.z)
}
