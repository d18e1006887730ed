//! # Config Crate
//!
//! Centralized policy for the plane-to-box pipeline. Every tunable value the
//! size estimator, range validator and box builder consult lives here, so an
//! alternate policy is a different [`constants::PipelineConfig`] rather than
//! a code edit.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{PipelineConfig, MIN_DISTANCE, MAX_DISTANCE};
//!
//! let cfg = PipelineConfig::default();
//! assert_eq!(cfg.min_distance, MIN_DISTANCE);
//! assert_eq!(cfg.max_distance, MAX_DISTANCE);
//!
//! // A stricter policy for a table-top scanner
//! let strict = PipelineConfig::new(0.1, 0.5, 1.2).unwrap();
//! assert_eq!(strict.box_height, 0.1);
//! ```
//!
//! ## Categories
//!
//! - **Sizing**: fixed box height
//! - **Range**: usable minimum/maximum plane extent
//! - **Style**: colors and stroke widths handed to the renderer
//! - **Precision**: floating-point comparison tolerance

pub mod constants;

#[cfg(test)]
mod tests;
