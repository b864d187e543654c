//! Error types for the geometry core and the figure ingestion boundary.

use thiserror::Error;

use crate::geom::{Point, Segment};

/// Numeric dead end reached through a path that case dispatch should have
/// excluded. Aborts preprocessing of the whole figure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DegenerateGeometry {
    #[error("slope of vertical pair {0} -> {1} is undefined")]
    VerticalSlope(Point, Point),

    #[error("intersection of {0} and {1} has a singular system")]
    SingularSystem(Segment, Segment),
}

/// Figure rejected before the core runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("point `{name}` defined at ({x0}, {y0}) and again at ({x1}, {y1})")]
    DuplicateName {
        name: String,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
    },

    #[error("point `{name}` has non-finite coordinates")]
    NonFinite { name: String },

    #[error("connection references unknown point `{0}`")]
    UnknownPoint(String),

    #[error("connection {0}-{1} has zero length")]
    ZeroLength(String, String),
}

pub type Result<T> = std::result::Result<T, DegenerateGeometry>;
