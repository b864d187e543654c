//! Pure numeric primitives over points. No state.

use super::cfg::EPS;
use super::point::Point;
use crate::error::DegenerateGeometry;

/// `|a - b| < EPS`.
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

/// Euclidean distance.
#[inline]
pub fn distance(a: &Point, b: &Point) -> f64 {
    (b.pos() - a.pos()).norm()
}

/// Slope `(ay - by) / (ax - bx)`.
///
/// Errors with `VerticalSlope` when `ax ≈ bx`; branch on verticality first.
pub fn slope(a: &Point, b: &Point) -> Result<f64, DegenerateGeometry> {
    if approx_eq(a.x(), b.x()) {
        return Err(DegenerateGeometry::VerticalSlope(a.clone(), b.clone()));
    }
    Ok((a.y() - b.y()) / (a.x() - b.x()))
}

/// `m` lies on the closed segment `a b`: `|am| + |mb| ≈ |ab|`.
///
/// Inclusive: true when `m` is one of the endpoints.
#[inline]
pub fn between(m: &Point, a: &Point, b: &Point) -> bool {
    approx_eq(distance(a, m) + distance(m, b), distance(a, b))
}

#[inline]
pub fn is_vertical_pair(a: &Point, b: &Point) -> bool {
    approx_eq(a.x(), b.x())
}

#[inline]
pub fn is_horizontal_pair(a: &Point, b: &Point) -> bool {
    approx_eq(a.y(), b.y())
}
