//! Plane geometry primitives for figure preprocessing.
//!
//! Purpose
//! - Points with tolerance identity, unordered segments, the numeric
//!   predicates they are built on, and line/segment intersection.
//! - Every approximate comparison goes through `approx_eq` and the single
//!   tolerance in `cfg::EPS`.
//!
//! Code cross-refs: `registry::PointRegistry` (canonical points),
//! `preprocess` (consumer of intersections and relations).

pub mod cfg;
mod intersect;
mod point;
mod predicates;
mod relations;
mod segment;

pub use cfg::EPS;
pub use intersect::{line_intersection, segment_intersection};
pub use point::{Label, Point};
pub use predicates::{approx_eq, between, distance, is_horizontal_pair, is_vertical_pair, slope};
pub use segment::Segment;

#[cfg(test)]
mod tests;
