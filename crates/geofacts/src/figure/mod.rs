//! Figure ingestion boundary: named points plus named connections.
//!
//! The textual format a figure comes from is somebody else's concern; this
//! module only takes the reduced shape (points with coordinates, two-point
//! connections), rejects invalid figures, and hands the core a seeded
//! `PointRegistry` and a deduplicated segment list.

pub mod rand;

use std::collections::{HashMap, HashSet};

use crate::error::ValidationError;
use crate::geom::{Point, Segment};
use crate::registry::PointRegistry;

/// Point as it appears in a figure description.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedPoint {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl NamedPoint {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }
}

/// Unvalidated figure: points and connections by point name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FigureInput {
    pub description: String,
    pub points: Vec<NamedPoint>,
    pub connections: Vec<(String, String)>,
}

/// Validated figure, ready for `preprocess`.
#[derive(Clone, Debug)]
pub struct Figure {
    pub description: String,
    pub points: PointRegistry,
    pub segments: Vec<Segment>,
}

impl FigureInput {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn point(mut self, name: impl Into<String>, x: f64, y: f64) -> Self {
        self.points.push(NamedPoint::new(name, x, y));
        self
    }

    pub fn connect(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.connections.push((a.into(), b.into()));
        self
    }

    /// Connect `from` to each of `to` (one adjacency-list row).
    pub fn adjacency(mut self, from: &str, to: &[&str]) -> Self {
        for b in to {
            self.connections.push((from.to_string(), b.to_string()));
        }
        self
    }

    /// Reject duplicate names at different coordinates, non-finite
    /// coordinates, unknown endpoints, and zero-length connections.
    ///
    /// Connections listed in both directions (adjacency lists) collapse to
    /// one segment; first occurrence wins the position.
    pub fn validate(&self) -> Result<Figure, ValidationError> {
        let mut by_name: HashMap<&str, Point> = HashMap::new();
        let mut registry = PointRegistry::new();
        for np in &self.points {
            if !(np.x.is_finite() && np.y.is_finite()) {
                return Err(ValidationError::NonFinite {
                    name: np.name.clone(),
                });
            }
            let candidate = Point::named(&np.name, np.x, np.y);
            if let Some(prev) = by_name.get(np.name.as_str()) {
                if *prev != candidate {
                    return Err(ValidationError::DuplicateName {
                        name: np.name.clone(),
                        x0: prev.x(),
                        y0: prev.y(),
                        x1: np.x,
                        y1: np.y,
                    });
                }
                continue;
            }
            let canonical = registry.insert(&candidate);
            by_name.insert(np.name.as_str(), canonical);
        }

        let mut seen: HashSet<Segment> = HashSet::new();
        let mut segments = Vec::new();
        for (a, b) in &self.connections {
            let pa = lookup(&by_name, &registry, a)?;
            let pb = lookup(&by_name, &registry, b)?;
            if pa == pb {
                return Err(ValidationError::ZeroLength(a.clone(), b.clone()));
            }
            let s = Segment::new(pa, pb);
            if seen.insert(s.clone()) {
                segments.push(s);
            }
        }

        Ok(Figure {
            description: self.description.clone(),
            points: registry,
            segments,
        })
    }
}

fn lookup(
    by_name: &HashMap<&str, Point>,
    registry: &PointRegistry,
    name: &str,
) -> Result<Point, ValidationError> {
    let p = by_name
        .get(name)
        .ok_or_else(|| ValidationError::UnknownPoint(name.to_string()))?;
    // Two names at one location share the registry entry.
    Ok(registry.canonical(p).cloned().unwrap_or_else(|| p.clone()))
}
