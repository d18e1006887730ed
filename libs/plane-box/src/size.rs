//! # Size Estimation
//!
//! Converts a detected plane into the box that should sit on it. Width and
//! length copy the plane's horizontal extent; height is a policy constant.

use config::constants::PipelineConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::plane::PlaneDescription;

/// Width, height and length of the box placed on a plane, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingSize {
    /// Extent along `x`.
    pub width: f64,
    /// Extent along `y`.
    pub height: f64,
    /// Extent along `z`.
    pub length: f64,
}

impl BoundingSize {
    /// Creates a size from its three dimensions.
    pub fn new(width: f64, height: f64, length: f64) -> Self {
        Self {
            width,
            height,
            length,
        }
    }

    /// True when every dimension is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.length.is_finite()
    }
}

/// Derives a [`BoundingSize`] from a [`PlaneDescription`].
///
/// # Example
///
/// ```rust
/// use plane_box::{PlaneDescription, SizeEstimator};
///
/// let estimator = SizeEstimator::default();
/// let size = estimator.estimate(&PlaneDescription::centered(1.0, 0.5));
/// assert_eq!((size.width, size.height, size.length), (1.0, 0.2, 0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeEstimator {
    box_height: f64,
}

impl SizeEstimator {
    /// Creates an estimator that assigns `box_height` to every box.
    pub fn new(box_height: f64) -> Self {
        Self { box_height }
    }

    /// Creates an estimator from the pipeline policy.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.box_height)
    }

    /// Estimates the box for `plane`.
    ///
    /// Never fails. Zero extents pass through unchanged and are left for the
    /// range check to reject. Negative extents are taken by magnitude.
    pub fn estimate(&self, plane: &PlaneDescription) -> BoundingSize {
        let size = BoundingSize::new(plane.extent.x.abs(), self.box_height, plane.extent.z.abs());
        debug!(
            width = size.width,
            height = size.height,
            length = size.length,
            "Estimated box size"
        );
        size
    }
}

impl Default for SizeEstimator {
    fn default() -> Self {
        Self::from_config(&PipelineConfig::default())
    }
}
