//! # Plane Box
//!
//! Sizes a bounding box to a detected horizontal plane, checks that the plane
//! was seen from a usable distance, and generates the renderable geometry for
//! accepted planes.
//!
//! ## Architecture
//!
//! ```text
//! PlaneDescription → SizeEstimator → RangeValidator → BoxMeshBuilder → GeometryBundle
//!                                          ↓ rejected
//!                                     AdvisorySink
//! ```
//!
//! Camera tracking, rendering and UI stay outside this crate. The caller
//! feeds plane descriptions in and attaches the returned [`GeometryBundle`]
//! to its own scene graph.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::PipelineConfig;
//! use plane_box::{ChannelSink, Pipeline, PlaneDescription, PlaneOutcome};
//!
//! let (sink, mut advisories) = ChannelSink::new();
//! let pipeline = Pipeline::new(PipelineConfig::default(), sink).unwrap();
//!
//! match pipeline.process(&PlaneDescription::centered(1.0, 1.0)).unwrap() {
//!     PlaneOutcome::Placed(bundle) => assert_eq!(bundle.geometry.outline.len(), 6),
//!     PlaneOutcome::Rejected { .. } => unreachable!(),
//! }
//!
//! pipeline.process(&PlaneDescription::centered(0.1, 0.1)).unwrap();
//! assert!(advisories.try_recv().is_ok());
//! ```

pub mod advisory;
pub mod builder;
pub mod error;
pub mod mesh;
pub mod outline;
pub mod pipeline;
pub mod plane;
pub mod primitives;
pub mod range;
pub mod size;

pub use advisory::{Advisory, AdvisorySink, ChannelSink, NullSink};
pub use builder::{
    anchor_position, marker_position, BoxGeometry, BoxMeshBuilder, MarkerPlacement, SolidVolume,
    SurfaceMaterial,
};
pub use error::{BoxError, BoxResult};
pub use mesh::Mesh;
pub use outline::{BoxOutline, Edge, LineSegment, LineStyle, OUTLINE_SEGMENT_COUNT};
pub use pipeline::{GeometryBundle, Pipeline, PlaneOutcome};
pub use plane::PlaneDescription;
pub use range::{RangeValidator, RejectReason, Verdict};
pub use size::{BoundingSize, SizeEstimator};
