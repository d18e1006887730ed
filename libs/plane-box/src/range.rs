//! # Range Validation
//!
//! Decides whether a box derived from a plane is usable. The plane's apparent
//! extent stands in for camera distance: a plane narrower than the minimum
//! means the camera is too close, one wider than the maximum means it is too
//! far. Width and length are checked independently; height is never checked.

use config::constants::PipelineConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::size::BoundingSize;

/// Why a size was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// Width or length is below the minimum distance.
    TooClose,
    /// Width or length is above the maximum distance.
    TooFar,
    /// A dimension is NaN or infinite.
    NonFinite,
}

/// Outcome of the range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The size is within range; geometry may be built.
    Accepted,
    /// The size is out of range; the caller should advise the user.
    Rejected(RejectReason),
}

impl Verdict {
    /// True for [`Verdict::Accepted`].
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Classifies bounding sizes against the usable distance range.
///
/// Both bounds are inclusive: a dimension exactly equal to either bound is
/// accepted.
///
/// # Example
///
/// ```rust
/// use plane_box::{BoundingSize, RangeValidator, RejectReason, Verdict};
///
/// let validator = RangeValidator::default();
/// assert!(!validator.is_out_of_bounds(&BoundingSize::new(0.3, 0.2, 2.0)));
/// assert_eq!(
///     validator.classify(&BoundingSize::new(3.0, 0.2, 1.0)),
///     Verdict::Rejected(RejectReason::TooFar)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeValidator {
    min_distance: f64,
    max_distance: f64,
}

impl RangeValidator {
    /// Creates a validator for the range `[min_distance, max_distance]`.
    pub fn new(min_distance: f64, max_distance: f64) -> Self {
        Self {
            min_distance,
            max_distance,
        }
    }

    /// Creates a validator from the pipeline policy.
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.min_distance, config.max_distance)
    }

    /// True when `size` should be rejected.
    #[inline]
    pub fn is_out_of_bounds(&self, size: &BoundingSize) -> bool {
        !self.classify(size).is_accepted()
    }

    /// Classifies `size`. When one dimension is too small and the other too
    /// large, the size is reported as [`RejectReason::TooClose`].
    pub fn classify(&self, size: &BoundingSize) -> Verdict {
        let verdict = if !size.width.is_finite() || !size.length.is_finite() {
            Verdict::Rejected(RejectReason::NonFinite)
        } else if size.width < self.min_distance || size.length < self.min_distance {
            Verdict::Rejected(RejectReason::TooClose)
        } else if size.width > self.max_distance || size.length > self.max_distance {
            Verdict::Rejected(RejectReason::TooFar)
        } else {
            Verdict::Accepted
        };

        match verdict {
            Verdict::Accepted => debug!(width = size.width, length = size.length, "Size in range"),
            Verdict::Rejected(reason) => debug!(
                width = size.width,
                length = size.length,
                min = self.min_distance,
                max = self.max_distance,
                ?reason,
                "Size out of range"
            ),
        }
        verdict
    }
}

impl Default for RangeValidator {
    fn default() -> Self {
        Self::from_config(&PipelineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(width: f64, length: f64) -> BoundingSize {
        BoundingSize::new(width, 0.2, length)
    }

    /// Collects formatted log output for the duration of `f`.
    fn capture_logs(level: tracing::Level, f: impl FnOnce()) -> String {
        use std::io::Write;
        use std::sync::{Arc, Mutex};

        #[derive(Clone)]
        struct Buffer(Arc<Mutex<Vec<u8>>>);

        impl Write for Buffer {
            fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(bytes);
                Ok(bytes.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let buffer = Buffer(Arc::new(Mutex::new(Vec::new())));
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    /// Rejection is an expected outcome; it must stay quiet at warn level.
    #[test]
    fn test_rejection_not_logged_at_warn() {
        let v = RangeValidator::default();
        let logs = capture_logs(tracing::Level::WARN, || {
            assert!(v.is_out_of_bounds(&size(0.1, 0.1)));
            assert!(v.is_out_of_bounds(&size(3.0, 1.0)));
        });
        assert!(logs.is_empty(), "unexpected output: {logs}");

        let logs = capture_logs(tracing::Level::DEBUG, || {
            v.is_out_of_bounds(&size(0.1, 0.1));
        });
        assert!(logs.contains("Size out of range"));
    }

    #[test]
    fn test_inside_range_accepted() {
        let v = RangeValidator::default();
        assert_eq!(v.classify(&size(1.0, 1.0)), Verdict::Accepted);
        assert_eq!(v.classify(&size(0.31, 1.99)), Verdict::Accepted);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let v = RangeValidator::default();
        assert!(!v.is_out_of_bounds(&size(0.3, 1.0)));
        assert!(!v.is_out_of_bounds(&size(2.0, 1.0)));
        assert!(!v.is_out_of_bounds(&size(1.0, 0.3)));
        assert!(!v.is_out_of_bounds(&size(1.0, 2.0)));
        assert!(!v.is_out_of_bounds(&size(0.3, 2.0)));
    }

    #[test]
    fn test_too_close_on_either_axis() {
        let v = RangeValidator::default();
        assert_eq!(v.classify(&size(0.29, 1.0)), Verdict::Rejected(RejectReason::TooClose));
        assert_eq!(v.classify(&size(1.0, 0.1)), Verdict::Rejected(RejectReason::TooClose));
        assert_eq!(v.classify(&size(0.0, 0.0)), Verdict::Rejected(RejectReason::TooClose));
    }

    #[test]
    fn test_too_far_on_either_axis() {
        let v = RangeValidator::default();
        assert_eq!(v.classify(&size(2.01, 1.0)), Verdict::Rejected(RejectReason::TooFar));
        assert_eq!(v.classify(&size(1.0, 5.0)), Verdict::Rejected(RejectReason::TooFar));
    }

    #[test]
    fn test_too_close_wins_over_too_far() {
        let v = RangeValidator::default();
        assert_eq!(v.classify(&size(0.1, 3.0)), Verdict::Rejected(RejectReason::TooClose));
    }

    #[test]
    fn test_height_is_not_checked() {
        let v = RangeValidator::default();
        assert!(!v.is_out_of_bounds(&BoundingSize::new(1.0, 100.0, 1.0)));
        assert!(!v.is_out_of_bounds(&BoundingSize::new(1.0, 0.0, 1.0)));
    }

    #[test]
    fn test_non_finite_rejected() {
        let v = RangeValidator::default();
        assert_eq!(v.classify(&size(f64::NAN, 1.0)), Verdict::Rejected(RejectReason::NonFinite));
        assert_eq!(
            v.classify(&size(1.0, f64::INFINITY)),
            Verdict::Rejected(RejectReason::NonFinite)
        );
    }

    #[test]
    fn test_custom_range() {
        let v = RangeValidator::new(0.05, 0.5);
        assert!(!v.is_out_of_bounds(&size(0.1, 0.1)));
        assert!(v.is_out_of_bounds(&size(1.0, 0.1)));
    }
}
