//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI and
//!   other in-repo callers. Breaking changes are allowed and expected.
//! - Prefer these re-exports over deep module paths.

// Primitives and predicates
pub use crate::geom::{
    approx_eq, between, distance, is_horizontal_pair, is_vertical_pair, line_intersection,
    segment_intersection, slope, Label, Point, Segment, EPS,
};
// Point identity
pub use crate::registry::{NameSequence, PointRegistry};
// Figure ingestion and random figures
pub use crate::figure::rand::{
    draw_connected_polygon, PolygonCfg, ReplayToken as FigureReplay,
};
pub use crate::figure::{Figure, FigureInput, NamedPoint};
// Pipeline
pub use crate::preprocess::{
    close, minimal_segments, non_minimal_segments, preprocess, reconcile_given,
    resolve_implicit_points, Preprocessor, SegmentMap,
};
pub use crate::error::{DegenerateGeometry, ValidationError};
