//! The preprocessed figure: one deduplicated set of segments.
//!
//! Minimal vs. non-minimal is a derived classification (does any registered
//! point lie strictly inside?), not a second storage structure.

use std::collections::HashSet;

use crate::geom::{Point, Segment};
use crate::registry::PointRegistry;

#[derive(Clone, Debug)]
pub struct SegmentMap {
    segments: HashSet<Segment>,
    points: PointRegistry,
    implicit: Vec<Point>,
}

impl SegmentMap {
    pub(crate) fn new<I>(segments: I, points: PointRegistry, implicit: Vec<Point>) -> Self
    where
        I: IntoIterator<Item = Segment>,
    {
        Self {
            segments: segments.into_iter().collect(),
            points,
            implicit,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn contains(&self, s: &Segment) -> bool {
        self.segments.contains(s)
    }

    /// Stored (canonical) segment equal to `s`, endpoints in either order.
    pub fn get(&self, s: &Segment) -> Option<&Segment> {
        self.segments.get(s)
    }

    /// Segment between the points with the given names.
    pub fn between_named(&self, a: &str, b: &str) -> Option<&Segment> {
        let pa = self.points.point_named(a)?;
        let pb = self.points.point_named(b)?;
        if pa == pb {
            return None;
        }
        self.get(&Segment::new(pa.clone(), pb.clone()))
    }

    /// Unordered iteration over all segments.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// All segments in lexicographic order.
    pub fn sorted(&self) -> Vec<Segment> {
        let mut out: Vec<Segment> = self.segments.iter().cloned().collect();
        out.sort();
        out
    }

    /// No registered point lies strictly between the endpoints.
    pub fn is_minimal(&self, s: &Segment) -> bool {
        !self.points.iter().any(|p| s.point_lies_between(p))
    }

    pub fn minimal_segments(&self) -> Vec<Segment> {
        self.sorted().into_iter().filter(|s| self.is_minimal(s)).collect()
    }

    pub fn non_minimal_segments(&self) -> Vec<Segment> {
        self.sorted().into_iter().filter(|s| !self.is_minimal(s)).collect()
    }

    /// Registry after implicit points were added.
    #[inline]
    pub fn points(&self) -> &PointRegistry {
        &self.points
    }

    /// Points discovered at crossings, in discovery order.
    #[inline]
    pub fn implicit_points(&self) -> &[Point] {
        &self.implicit
    }
}
