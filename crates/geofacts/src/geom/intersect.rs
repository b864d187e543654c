//! Line and segment intersection.
//!
//! `line_intersection` treats both segments as infinite lines through their
//! endpoints; `segment_intersection` restricts the result to the finite extent
//! of both. Callers working with finite segments use the latter.

use nalgebra::Matrix2;

use super::cfg::EPS;
use super::point::Point;
use super::segment::Segment;
use crate::error::{DegenerateGeometry, Result};

/// Line `a·x + b·y = c` through a non-vertical segment, normalized to `b = 1`.
#[derive(Clone, Copy, Debug)]
struct Line {
    a: f64,
    b: f64,
    c: f64,
}

impl Line {
    fn through(s: &Segment) -> Self {
        let m = s.slope();
        let (x2, y2) = (s.p2().x(), s.p2().y());
        Line {
            a: -m,
            b: 1.0,
            c: y2 - m * x2,
        }
    }

    #[inline]
    fn y_at(&self, x: f64) -> f64 {
        (self.c - self.a * x) / self.b
    }

    #[inline]
    fn x_at(&self, y: f64) -> f64 {
        (self.c - self.b * y) / self.a
    }
}

/// Intersection of the infinite lines through `s1` and `s2`.
///
/// Returns `Ok(None)` for collinear-but-disjoint, coincident and parallel pairs.
/// Case order: disjoint coincidence, shared endpoint, vertical × horizontal,
/// parallel axis-aligned pairs, axis-aligned × sloped, then the general 2×2
/// solve (Cramer) behind a slope-parallel guard. Axis-aligned cases come
/// before the slope comparison, which would otherwise swallow shallow
/// crossings of a horizontal segment.
pub fn line_intersection(s1: &Segment, s2: &Segment) -> Result<Option<Point>> {
    if s1.coincide_without_overlap(s2) {
        return Ok(None);
    }
    if let Some(v) = s1.shared_vertex(s2) {
        return Ok(Some(v.clone()));
    }

    if s1.is_vertical() && s2.is_horizontal() {
        return Ok(Some(Point::new(s1.p1().x(), s2.p1().y())));
    }
    if s2.is_vertical() && s1.is_horizontal() {
        return Ok(Some(Point::new(s2.p1().x(), s1.p1().y())));
    }
    if (s1.is_vertical() && s2.is_vertical()) || (s1.is_horizontal() && s2.is_horizontal()) {
        return Ok(None);
    }
    if s1.is_vertical() {
        let x = s1.p1().x();
        return Ok(Some(Point::new(x, Line::through(s2).y_at(x))));
    }
    if s2.is_vertical() {
        let x = s2.p1().x();
        return Ok(Some(Point::new(x, Line::through(s1).y_at(x))));
    }
    if s1.is_horizontal() {
        let y = s1.p1().y();
        return Ok(Some(Point::new(Line::through(s2).x_at(y), y)));
    }
    if s2.is_horizontal() {
        let y = s2.p1().y();
        return Ok(Some(Point::new(Line::through(s1).x_at(y), y)));
    }
    if s1.is_parallel_to(s2) {
        return Ok(None);
    }

    // a x + b y = e
    // c x + d y = f
    let l1 = Line::through(s1);
    let l2 = Line::through(s2);
    let det = Matrix2::new(l1.a, l1.b, l2.a, l2.b).determinant();
    if det.abs() < EPS {
        return Err(DegenerateGeometry::SingularSystem(s1.clone(), s2.clone()));
    }
    let x = Matrix2::new(l1.c, l1.b, l2.c, l2.b).determinant() / det;
    let y = Matrix2::new(l1.a, l1.c, l2.a, l2.c).determinant() / det;
    if !(x.is_finite() && y.is_finite()) {
        return Err(DegenerateGeometry::SingularSystem(s1.clone(), s2.clone()));
    }
    Ok(Some(Point::new(x, y)))
}

/// Intersection of the finite segments, endpoints included.
pub fn segment_intersection(s1: &Segment, s2: &Segment) -> Result<Option<Point>> {
    let hit = line_intersection(s1, s2)?;
    Ok(hit.filter(|p| s1.point_lies_on(p) && s2.point_lies_on(p)))
}

impl Segment {
    /// The segments cross strictly inside both:
    ///
    /// ```text
    ///   \  /
    ///    \/
    ///    /\
    /// ```
    pub fn middle_crosses(&self, that: &Segment) -> Result<bool> {
        Ok(segment_intersection(self, that)?
            .is_some_and(|p| self.point_lies_between(&p) && that.point_lies_between(&p)))
    }

    /// One segment ends strictly inside the other:
    ///
    /// ```text
    ///      |
    ///      |
    /// ---------
    /// ```
    pub fn standing_on(&self, that: &Segment) -> Result<bool> {
        let Some(p) = segment_intersection(self, that)? else {
            return Ok(false);
        };
        Ok((self.has(&p) && that.point_lies_between(&p))
            || (that.has(&p) && self.point_lies_between(&p)))
    }
}
