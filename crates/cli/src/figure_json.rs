//! JSON figure files.
//!
//! ```json
//! {
//!   "description": "crossed square",
//!   "points": [{"name": "A", "x": 0, "y": 0}, ...],
//!   "connections": [["A", "B"], ...],
//!   "adjacency": {"A": ["B", "C"], ...}
//! }
//! ```
//!
//! `connections` and `adjacency` are both optional and merge; an undirected
//! edge may appear in both directions.

use anyhow::{Context, Result};
use geofacts::api::{Figure, FigureInput, NamedPoint};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FigureFile {
    #[serde(default)]
    pub description: String,
    pub points: Vec<PointRow>,
    #[serde(default)]
    pub connections: Vec<(String, String)>,
    #[serde(default)]
    pub adjacency: BTreeMap<String, Vec<String>>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PointRow {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl FigureFile {
    pub fn into_input(self) -> FigureInput {
        let mut connections = self.connections;
        for (from, to) in self.adjacency {
            connections.extend(to.into_iter().map(|b| (from.clone(), b)));
        }
        FigureInput {
            description: self.description,
            points: self
                .points
                .into_iter()
                .map(|p| NamedPoint::new(p.name, p.x, p.y))
                .collect(),
            connections,
        }
    }
}

/// Read and validate a figure file.
pub fn load(path: &Path) -> Result<Figure> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let file: FigureFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing figure {}", path.display()))?;
    let fig = file
        .into_input()
        .validate()
        .with_context(|| format!("validating figure {}", path.display()))?;
    Ok(fig)
}
