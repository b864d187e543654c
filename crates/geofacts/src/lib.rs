//! Geometry figure preprocessing.
//!
//! Given the named points and drawn segments of a plane figure, derive every
//! fact a geometry reasoner needs about it: points where segments cross,
//! the minimal pieces each drawn segment splits into, and every longer
//! segment formed by joining collinear pieces end to end.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - `api` is the curated surface for callers; module paths may move.

pub mod api;
pub mod error;
pub mod figure;
pub mod geom;
pub mod preprocess;
pub mod registry;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{DegenerateGeometry, ValidationError};
pub use geom::{Label, Point, Segment, EPS};
pub use preprocess::{preprocess, Preprocessor, SegmentMap};
pub use registry::PointRegistry;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{DegenerateGeometry, ValidationError};
    pub use crate::figure::rand::{draw_connected_polygon, PolygonCfg, ReplayToken};
    pub use crate::figure::{Figure, FigureInput, NamedPoint};
    pub use crate::geom::{line_intersection, segment_intersection, Label, Point, Segment, EPS};
    pub use crate::preprocess::{preprocess, Preprocessor, SegmentMap};
    pub use crate::registry::PointRegistry;
    pub use nalgebra::Vector2 as Vec2;
}
