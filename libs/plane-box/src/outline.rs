//! # Box Outline
//!
//! The wireframe drawn around an accepted box: six two-point line primitives
//! sharing one flat color and stroke width.
//!
//! Only six of the box's twelve edges are emitted. The two back verticals and
//! the left/right rungs of the top and bottom rectangles are absent; renderers
//! depend on exactly this edge set, so it is kept as is.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::size::BoundingSize;

/// Number of segments in every outline.
pub const OUTLINE_SEGMENT_COUNT: usize = 6;

/// Which box edge a segment traces. Front is `-z`, back is `+z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    /// Bottom edge along `x` at `z = -l/2`.
    BottomFront,
    /// Bottom edge along `x` at `z = +l/2`.
    BottomBack,
    /// Vertical edge at `x = -w/2, z = -l/2`.
    FrontLeft,
    /// Vertical edge at `x = +w/2, z = -l/2`.
    FrontRight,
    /// Top edge along `x` at `z = -l/2`.
    TopFront,
    /// Top edge along `x` at `z = +l/2`.
    TopBack,
}

impl Edge {
    /// Every emitted edge, in output order.
    pub const ALL: [Edge; OUTLINE_SEGMENT_COUNT] = [
        Edge::BottomFront,
        Edge::BottomBack,
        Edge::FrontLeft,
        Edge::FrontRight,
        Edge::TopFront,
        Edge::TopBack,
    ];

    /// Endpoints of this edge for a box resting on `y = 0`, centered on x/z.
    pub fn endpoints(self, size: &BoundingSize) -> (DVec3, DVec3) {
        let hw = size.width / 2.0;
        let hl = size.length / 2.0;
        let h = size.height;
        match self {
            Edge::BottomFront => (DVec3::new(-hw, 0.0, -hl), DVec3::new(hw, 0.0, -hl)),
            Edge::BottomBack => (DVec3::new(-hw, 0.0, hl), DVec3::new(hw, 0.0, hl)),
            Edge::FrontLeft => (DVec3::new(-hw, 0.0, -hl), DVec3::new(-hw, h, -hl)),
            Edge::FrontRight => (DVec3::new(hw, 0.0, -hl), DVec3::new(hw, h, -hl)),
            Edge::TopFront => (DVec3::new(-hw, h, -hl), DVec3::new(hw, h, -hl)),
            Edge::TopBack => (DVec3::new(-hw, h, hl), DVec3::new(hw, h, hl)),
        }
    }
}

/// A two-point line primitive in box-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    /// Edge this segment traces.
    pub edge: Edge,
    /// First endpoint.
    pub start: DVec3,
    /// Second endpoint.
    pub end: DVec3,
}

impl LineSegment {
    /// Length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// Flat color and stroke width shared by every outline segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// RGBA in `[0, 1]`.
    pub color: [f32; 4],
    /// Stroke width in meters.
    pub thickness: f64,
}

/// The wireframe of one box.
///
/// # Example
///
/// ```rust
/// use plane_box::{BoundingSize, BoxOutline, LineStyle};
///
/// let style = LineStyle { color: [1.0, 1.0, 0.0, 1.0], thickness: 0.005 };
/// let outline = BoxOutline::new(&BoundingSize::new(1.0, 0.2, 1.0), style);
/// assert_eq!(outline.len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxOutline {
    segments: Vec<LineSegment>,
    style: LineStyle,
}

impl BoxOutline {
    /// Builds the outline for `size`.
    pub fn new(size: &BoundingSize, style: LineStyle) -> Self {
        let segments = Edge::ALL
            .iter()
            .map(|&edge| {
                let (start, end) = edge.endpoints(size);
                LineSegment { edge, start, end }
            })
            .collect();
        Self { segments, style }
    }

    /// Segments in output order.
    #[inline]
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Number of segments. Always [`OUTLINE_SEGMENT_COUNT`].
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True when the outline holds no segments. Built outlines never do.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Shared line style.
    #[inline]
    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    /// Returns the segment tracing `edge`.
    pub fn segment(&self, edge: Edge) -> Option<&LineSegment> {
        self.segments.iter().find(|s| s.edge == edge)
    }

    /// Exports endpoints as a flattened f32 array, two points per segment.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.segments
            .iter()
            .flat_map(|s| [s.start, s.end])
            .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }

    /// Exports line-list indices matching [`Self::vertices_f32`].
    pub fn indices_u32(&self) -> Vec<u32> {
        (0..self.segments.len() as u32 * 2).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn style() -> LineStyle {
        LineStyle {
            color: [1.0, 1.0, 0.0, 1.0],
            thickness: 0.005,
        }
    }

    #[test]
    fn test_outline_has_six_segments_in_order() {
        let outline = BoxOutline::new(&BoundingSize::new(1.0, 0.2, 1.0), style());
        assert_eq!(outline.len(), OUTLINE_SEGMENT_COUNT);
        let edges: Vec<Edge> = outline.segments().iter().map(|s| s.edge).collect();
        assert_eq!(edges, Edge::ALL.to_vec());
    }

    #[test]
    fn test_outline_endpoints() {
        let outline = BoxOutline::new(&BoundingSize::new(2.0, 0.2, 1.0), style());

        let bottom_front = outline.segment(Edge::BottomFront).unwrap();
        assert_eq!(bottom_front.start, DVec3::new(-1.0, 0.0, -0.5));
        assert_eq!(bottom_front.end, DVec3::new(1.0, 0.0, -0.5));

        let front_right = outline.segment(Edge::FrontRight).unwrap();
        assert_eq!(front_right.start, DVec3::new(1.0, 0.0, -0.5));
        assert_eq!(front_right.end, DVec3::new(1.0, 0.2, -0.5));

        let top_back = outline.segment(Edge::TopBack).unwrap();
        assert_eq!(top_back.start, DVec3::new(-1.0, 0.2, 0.5));
        assert_eq!(top_back.end, DVec3::new(1.0, 0.2, 0.5));
    }

    #[test]
    fn test_segment_lengths_match_size() {
        let size = BoundingSize::new(0.8, 0.2, 1.6);
        let outline = BoxOutline::new(&size, style());
        for segment in outline.segments() {
            let expected = match segment.edge {
                Edge::FrontLeft | Edge::FrontRight => size.height,
                _ => size.width,
            };
            assert_relative_eq!(segment.length(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_back_verticals_absent() {
        let outline = BoxOutline::new(&BoundingSize::new(1.0, 0.2, 1.0), style());
        let back_verticals = outline
            .segments()
            .iter()
            .filter(|s| s.start.z > 0.0 && s.start.x == s.end.x)
            .count();
        assert_eq!(back_verticals, 0);
    }

    #[test]
    fn test_style_shared() {
        let outline = BoxOutline::new(&BoundingSize::new(1.0, 0.2, 1.0), style());
        assert_eq!(outline.style().thickness, 0.005);
        assert_eq!(outline.style().color, [1.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_outline_export() {
        let outline = BoxOutline::new(&BoundingSize::new(1.0, 0.2, 1.0), style());
        let vertices = outline.vertices_f32();
        assert_eq!(vertices.len(), 6 * 2 * 3);
        assert_eq!(&vertices[..6], &[-0.5f32, 0.0, -0.5, 0.5, 0.0, -0.5]);
        assert_eq!(outline.indices_u32(), (0..12).collect::<Vec<u32>>());
    }
}
