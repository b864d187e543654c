//! Finite-segment relations: containment, shared vertices, collinearity,
//! non-overlapping coincidence and point projection.

use super::cfg::EPS;
use super::point::Point;
use super::predicates::{approx_eq, between};
use super::segment::Segment;

impl Segment {
    /// `p` lies on this segment, endpoints included.
    #[inline]
    pub fn point_lies_on(&self, p: &Point) -> bool {
        between(p, self.p1(), self.p2())
    }

    /// `p` lies on this segment strictly between the endpoints.
    #[inline]
    pub fn point_lies_between(&self, p: &Point) -> bool {
        !self.has(p) && between(p, self.p1(), self.p2())
    }

    /// `p` lies on the infinite line through this segment.
    pub fn point_lies_on_line(&self, p: &Point) -> bool {
        let d = self.p2().pos() - self.p1().pos();
        let w = p.pos() - self.p1().pos();
        let cross = d.x * w.y - d.y * w.x;
        cross.abs() / d.norm() < EPS
    }

    /// Both endpoints of `inner` lie on this segment:
    ///
    /// ```text
    /// A-------B-------C------D   sub-segments: AB, AC, AD, BC, BD, CD
    /// ```
    #[inline]
    pub fn has_sub_segment(&self, inner: &Segment) -> bool {
        self.point_lies_on(inner.p1()) && self.point_lies_on(inner.p2())
    }

    /// The one endpoint common to both; `None` if equal or disjoint.
    pub fn shared_vertex(&self, that: &Segment) -> Option<&Point> {
        if self == that {
            return None;
        }
        self.endpoints().into_iter().find(|p| that.has(p))
    }

    /// Same direction (both vertical, both horizontal, or equal slopes).
    pub fn is_parallel_to(&self, that: &Segment) -> bool {
        match (self.is_vertical(), that.is_vertical()) {
            (true, true) => true,
            (false, false) => {
                (self.is_horizontal() && that.is_horizontal())
                    || approx_eq(self.slope(), that.slope())
            }
            _ => false,
        }
    }

    /// Both segments lie on the same infinite line.
    ///
    /// Both endpoints of `that` must lie on the line through `self`: a shared
    /// endpoint always lies on both lines, and slopes within `EPS` of each
    /// other still diverge over a long segment.
    pub fn is_collinear_with(&self, that: &Segment) -> bool {
        let touches_line =
            self.point_lies_on_line(that.p1()) && self.point_lies_on_line(that.p2());
        if self.is_vertical() && that.is_vertical() {
            return approx_eq(self.p1().x(), that.p1().x()) && touches_line;
        }
        if self.is_horizontal() && that.is_horizontal() {
            return approx_eq(self.p1().y(), that.p1().y()) && touches_line;
        }
        self.is_parallel_to(that) && touches_line
    }

    /// Collinear, distinct, and no endpoint of one strictly inside the other.
    /// They may touch at a shared endpoint:
    ///
    /// ```text
    ///        this                that
    /// ----------------     ---------
    /// ```
    pub fn coincide_without_overlap(&self, that: &Segment) -> bool {
        if !self.is_collinear_with(that) || self == that {
            return false;
        }
        let overlaps = that.endpoints().into_iter().any(|p| self.point_lies_between(p))
            || self.endpoints().into_iter().any(|p| that.point_lies_between(p));
        !overlaps
    }

    /// Points of `candidates` on this segment plus both endpoints, ordered
    /// from `p1` to `p2` and without duplicates.
    ///
    /// Sorted by the projection parameter along the segment rather than by
    /// coordinates, so a steep segment whose x-extent is within a few `EPS`
    /// still comes out in walking order.
    pub fn ordered_points_on<'a, I>(&self, candidates: I) -> Vec<Point>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let d = self.p2().pos() - self.p1().pos();
        let along = |p: &Point| (p.pos() - self.p1().pos()).dot(&d);
        let mut inner: Vec<(f64, Point)> = candidates
            .into_iter()
            .filter(|p| self.point_lies_between(p))
            .map(|p| (along(p), p.clone()))
            .collect();
        inner.sort_by(|a, b| a.0.total_cmp(&b.0));
        inner.dedup_by(|later, earlier| later.1 == earlier.1);

        let mut on = Vec::with_capacity(inner.len() + 2);
        on.push(self.p1().clone());
        on.extend(inner.into_iter().map(|(_, p)| p));
        on.push(self.p2().clone());
        on
    }
}
