//! # Pipeline
//!
//! Runs one plane-detection event through the three stages:
//!
//! ```text
//! PlaneDescription → SizeEstimator → RangeValidator ─┬─ accepted → BoxMeshBuilder → Placed
//!                                                    └─ rejected → AdvisorySink   → Rejected
//! ```
//!
//! The pipeline holds no per-plane state. Every call is independent, so
//! batches of events can be processed in parallel.

use config::constants::PipelineConfig;
use glam::DVec3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span};

use crate::advisory::{Advisory, AdvisorySink};
use crate::builder::{anchor_position, BoxGeometry, BoxMeshBuilder};
use crate::error::BoxResult;
use crate::plane::PlaneDescription;
use crate::range::{RangeValidator, RejectReason, Verdict};
use crate::size::{BoundingSize, SizeEstimator};

/// Geometry for one accepted plane, ready to attach under the plane's node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryBundle {
    /// Where the box anchor sits in the plane's frame.
    pub anchor_position: DVec3,
    /// Box-local geometry hung off the anchor.
    pub geometry: BoxGeometry,
}

impl GeometryBundle {
    /// Serializes the bundle to JSON for an external renderer.
    pub fn to_json(&self) -> BoxResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Result of processing one plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaneOutcome {
    /// The plane was usable and geometry was produced.
    Placed(GeometryBundle),
    /// The plane was out of range; an advisory was sent instead.
    Rejected {
        /// Size that failed the check.
        size: BoundingSize,
        /// Why it failed.
        reason: RejectReason,
    },
}

impl PlaneOutcome {
    /// Returns the bundle for a placed plane.
    pub fn bundle(&self) -> Option<&GeometryBundle> {
        match self {
            PlaneOutcome::Placed(bundle) => Some(bundle),
            PlaneOutcome::Rejected { .. } => None,
        }
    }

    /// True when geometry was produced.
    #[inline]
    pub fn is_placed(&self) -> bool {
        matches!(self, PlaneOutcome::Placed(_))
    }
}

/// Plane-to-box pipeline with an injected advisory sink.
///
/// # Example
///
/// ```rust
/// use config::constants::PipelineConfig;
/// use plane_box::{NullSink, Pipeline, PlaneDescription};
///
/// let pipeline = Pipeline::new(PipelineConfig::default(), NullSink).unwrap();
/// let outcome = pipeline.process(&PlaneDescription::centered(1.0, 1.0)).unwrap();
/// assert!(outcome.is_placed());
/// ```
#[derive(Debug)]
pub struct Pipeline<S: AdvisorySink> {
    config: PipelineConfig,
    estimator: SizeEstimator,
    validator: RangeValidator,
    builder: BoxMeshBuilder,
    sink: S,
}

impl<S: AdvisorySink> Pipeline<S> {
    /// Creates a pipeline after validating `config`.
    pub fn new(config: PipelineConfig, sink: S) -> BoxResult<Self> {
        config.validate()?;
        Ok(Self {
            estimator: SizeEstimator::from_config(&config),
            validator: RangeValidator::from_config(&config),
            builder: BoxMeshBuilder::from_config(&config),
            config,
            sink,
        })
    }

    /// Policy this pipeline runs with.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The injected advisory sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Processes one plane-detection event.
    ///
    /// On rejection the sink is notified exactly once and no geometry is
    /// built. Errors only arise from geometry generation, which a validated
    /// configuration rules out for accepted sizes.
    pub fn process(&self, plane: &PlaneDescription) -> BoxResult<PlaneOutcome> {
        let _span = info_span!("process_plane", center = ?plane.center).entered();

        let size = self.estimator.estimate(plane);
        match self.validator.classify(&size) {
            Verdict::Rejected(reason) => {
                self.sink
                    .notify(Advisory::new(self.config.advisory_message.clone(), reason));
                Ok(PlaneOutcome::Rejected { size, reason })
            }
            Verdict::Accepted => {
                let geometry = self.builder.build(&size)?;
                let anchor = anchor_position(plane, &size);
                info!(
                    width = size.width,
                    height = size.height,
                    length = size.length,
                    anchor = ?anchor,
                    "Box placed"
                );
                Ok(PlaneOutcome::Placed(GeometryBundle {
                    anchor_position: anchor,
                    geometry,
                }))
            }
        }
    }

    /// Processes independent plane events in parallel, preserving input order.
    pub fn process_batch(&self, planes: &[PlaneDescription]) -> Vec<BoxResult<PlaneOutcome>> {
        planes.par_iter().map(|plane| self.process(plane)).collect()
    }
}
