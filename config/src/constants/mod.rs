//! Policy values shared by every stage of the plane-to-box pipeline.
//!
//! Each public constant documents its default so downstream crates can stay
//! declarative and avoid scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// SIZING CONSTANTS
// =============================================================================

/// Height assigned to every estimated box, in meters.
///
/// Detected planes carry no height, so the box height is a fixed policy value
/// rather than a measurement.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_BOX_HEIGHT;
/// assert_eq!(DEFAULT_BOX_HEIGHT, 0.2);
/// ```
pub const DEFAULT_BOX_HEIGHT: f64 = 0.2;

// =============================================================================
// RANGE CONSTANTS
// =============================================================================

/// Smallest usable plane extent along either horizontal axis, in meters.
///
/// A plane narrower than this means the camera is too close.
pub const MIN_DISTANCE: f64 = 0.3;

/// Largest usable plane extent along either horizontal axis, in meters.
///
/// A plane wider than this means the camera is too far away.
pub const MAX_DISTANCE: f64 = 2.0;

/// Text delivered to the user when a plane fails the range check.
pub const ADVISORY_MESSAGE: &str = "Move back slightly to detect correctly.";

// =============================================================================
// STYLE CONSTANTS
// =============================================================================

/// Outline edge color (yellow), RGBA in `[0.0, 1.0]`.
pub const EDGE_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

/// Outline stroke width in meters.
pub const EDGE_THICKNESS: f64 = 0.005;

/// Marker sphere color (red), fully opaque.
pub const MARKER_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Solid volume color. Fully transparent: the volume is a hit-test target only.
pub const VOLUME_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.0];

/// The marker radius is `box_height / MARKER_RADIUS_DIVISOR`.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_BOX_HEIGHT, MARKER_RADIUS_DIVISOR};
/// let radius = DEFAULT_BOX_HEIGHT / MARKER_RADIUS_DIVISOR;
/// assert!((radius - 0.05).abs() < 1e-12);
/// ```
pub const MARKER_RADIUS_DIVISOR: f64 = 4.0;

/// Segment count used to tessellate the marker sphere.
pub const MARKER_SEGMENTS: u32 = 16;

/// Fewest segments a sphere tessellation can use and still enclose volume.
pub const MIN_SEGMENTS: u32 = 3;

/// Most segments a sphere tessellation may use. Bounds mesh size for a
/// marker that is only a few centimeters across.
pub const MAX_SEGMENTS: u32 = 256;

// =============================================================================
// PIPELINE CONFIG
// =============================================================================

/// Immutable snapshot of the policy one pipeline runs with.
///
/// # Examples
/// ```
/// use config::constants::PipelineConfig;
/// let config = PipelineConfig::default();
/// assert!(config.box_height > 0.0);
/// assert!(config.min_distance < config.max_distance);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Fixed height of every estimated box.
    pub box_height: f64,
    /// Minimum accepted extent on each horizontal axis (inclusive).
    pub min_distance: f64,
    /// Maximum accepted extent on each horizontal axis (inclusive).
    pub max_distance: f64,
    /// Outline color.
    pub edge_color: [f32; 4],
    /// Outline stroke width.
    pub edge_thickness: f64,
    /// Marker sphere color.
    pub marker_color: [f32; 4],
    /// Solid volume color.
    pub volume_color: [f32; 4],
    /// Marker sphere tessellation.
    pub marker_segments: u32,
    /// Advisory text sent on rejection.
    pub advisory_message: String,
}

impl PipelineConfig {
    /// Builds a configuration with the default style, validating the sizing
    /// and range values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, PipelineConfig};
    /// assert!(PipelineConfig::new(0.2, 0.3, 2.0).is_ok());
    /// assert_eq!(
    ///     PipelineConfig::new(0.2, 2.0, 0.3).unwrap_err(),
    ///     ConfigError::InvalidRange { min: 2.0, max: 0.3 }
    /// );
    /// ```
    pub fn new(box_height: f64, min_distance: f64, max_distance: f64) -> Result<Self, ConfigError> {
        let config = Self {
            box_height,
            min_distance,
            max_distance,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the outline style.
    pub fn with_edge_style(mut self, color: [f32; 4], thickness: f64) -> Self {
        self.edge_color = color;
        self.edge_thickness = thickness;
        self
    }

    /// Replaces the marker color.
    pub fn with_marker_color(mut self, color: [f32; 4]) -> Self {
        self.marker_color = color;
        self
    }

    /// Replaces the marker sphere tessellation.
    pub fn with_marker_segments(mut self, segments: u32) -> Self {
        self.marker_segments = segments;
        self
    }

    /// Replaces the advisory text.
    pub fn with_advisory_message(mut self, message: impl Into<String>) -> Self {
        self.advisory_message = message.into();
        self
    }

    /// Checks every field. Setters do not validate, so call this after a
    /// chain of `with_*` calls.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.box_height.is_finite() || self.box_height <= 0.0 {
            return Err(ConfigError::InvalidHeight(self.box_height));
        }
        if !self.min_distance.is_finite()
            || !self.max_distance.is_finite()
            || self.min_distance <= 0.0
            || self.min_distance >= self.max_distance
        {
            return Err(ConfigError::InvalidRange {
                min: self.min_distance,
                max: self.max_distance,
            });
        }
        if !self.edge_thickness.is_finite() || self.edge_thickness <= 0.0 {
            return Err(ConfigError::InvalidThickness(self.edge_thickness));
        }
        for color in [self.edge_color, self.marker_color, self.volume_color] {
            if color.iter().any(|c| !(0.0..=1.0).contains(c)) {
                return Err(ConfigError::InvalidColor(color));
            }
        }
        if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&self.marker_segments) {
            return Err(ConfigError::InvalidSegments(self.marker_segments));
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            box_height: DEFAULT_BOX_HEIGHT,
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
            edge_color: EDGE_COLOR,
            edge_thickness: EDGE_THICKNESS,
            marker_color: MARKER_COLOR,
            volume_color: VOLUME_COLOR,
            marker_segments: MARKER_SEGMENTS,
            advisory_message: ADVISORY_MESSAGE.to_string(),
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Box height is zero, negative or not finite.
    InvalidHeight(f64),
    /// Range bounds are non-positive, not finite, or not strictly ordered.
    InvalidRange {
        /// Rejected lower bound.
        min: f64,
        /// Rejected upper bound.
        max: f64,
    },
    /// Stroke width is zero, negative or not finite.
    InvalidThickness(f64),
    /// A color channel lies outside `[0, 1]`.
    InvalidColor([f32; 4]),
    /// Too few or too many segments to tessellate a sphere.
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidHeight(value) => {
                write!(f, "box_height must be positive and finite: {value}")
            }
            ConfigError::InvalidRange { min, max } => {
                write!(f, "distance range must satisfy 0 < min < max: [{min}, {max}]")
            }
            ConfigError::InvalidThickness(value) => {
                write!(f, "edge_thickness must be positive and finite: {value}")
            }
            ConfigError::InvalidColor(color) => {
                write!(f, "color channels must lie in [0, 1]: {color:?}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(
                    f,
                    "marker_segments must lie in [{MIN_SEGMENTS}, {MAX_SEGMENTS}]: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Radius of the marker sphere inside a box of height `box_height`.
///
/// # Example
///
/// ```rust
/// use config::constants::marker_radius;
/// assert!((marker_radius(0.2) - 0.05).abs() < 1e-12);
/// ```
#[inline]
pub fn marker_radius(box_height: f64) -> f64 {
    box_height / MARKER_RADIUS_DIVISOR
}
