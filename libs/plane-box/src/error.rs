//! # Error Types
//!
//! Error types for box generation. A plane that fails the range check is
//! not an error: it is reported as [`crate::Verdict::Rejected`]. The variants
//! here cover configuration mistakes, primitive contract violations, and
//! export failures.

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or exporting box geometry.
///
/// ## Example
///
/// ```rust
/// use plane_box::primitives::create_box;
/// use plane_box::BoxError;
/// use glam::DVec3;
///
/// match create_box(DVec3::ZERO, DVec3::ZERO) {
///     Err(BoxError::Degenerate { message }) => assert!(message.contains("positive")),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Error, Debug)]
pub enum BoxError {
    /// Pipeline configuration failed validation.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A primitive was asked for zero or negative extent.
    #[error("Degenerate geometry: {message}")]
    Degenerate {
        /// What was degenerate
        message: String,
    },

    /// The geometry bundle could not be serialized.
    #[error("Export failed: {0}")]
    Export(#[from] serde_json::Error),
}

impl BoxError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::Degenerate {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for box operations.
pub type BoxResult<T> = Result<T, BoxError>;
