//! Point registry: one canonical point per tolerance class of coordinates.
//!
//! Purpose
//! - Canonicalize coordinates so every segment in a run shares the same point
//!   instances, and give unnamed points deterministic names.
//!
//! Invariants
//! - At most one entry per tolerance-equivalence class of `(x, y)`.
//! - A generated name may be replaced by a given name that no other entry
//!   holds; a given name is never overwritten.
//! - The name sequence is instance state; separate registries never interfere.
//!
//! Lookup is a hash on `EPS`-wide buckets; a query probes its bucket and the
//! eight neighbours, so tolerance-equal points are found even across a bucket
//! edge.

mod naming;

use std::collections::HashMap;

use crate::geom::{Label, Point};

pub use naming::NameSequence;

#[derive(Clone, Debug, Default)]
pub struct PointRegistry {
    entries: Vec<Point>,
    buckets: HashMap<(i64, i64), Vec<usize>>,
    by_label: HashMap<Label, usize>,
    names: NameSequence,
}

impl PointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from points, named or not, in iteration order.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        let mut reg = Self::new();
        for p in points {
            reg.insert(&p);
        }
        reg
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical point at `(x, y)`, registering it if absent.
    ///
    /// An empty `name` means anonymous. See the module docs for the naming rules.
    ///
    /// A generated entry takes a given name only while that name is unused: if
    /// another location already holds it, the entry keeps its generated name so
    /// that `point_named` stays unambiguous.
    pub fn resolve(&mut self, name: &str, x: f64, y: f64) -> Point {
        self.resolve_label(Label::from_name(name), x, y)
    }

    /// `resolve` with the name taken from `p`. Generated labels from elsewhere
    /// count as anonymous.
    pub fn insert(&mut self, p: &Point) -> Point {
        let label = match p.label() {
            Label::Given(_) => p.label().clone(),
            _ => Label::Anonymous,
        };
        self.resolve_label(label, p.x(), p.y())
    }

    fn resolve_label(&mut self, label: Label, x: f64, y: f64) -> Point {
        let Some(idx) = self.index_of(x, y) else {
            let label = match label {
                Label::Anonymous => Label::Generated(self.names.next_name()),
                l => l,
            };
            return self.push(Point::with_label(label, x, y));
        };
        let existing = &self.entries[idx];
        if existing.is_generated() && label.is_given() && !self.by_label.contains_key(&label) {
            let renamed = existing.relabel(label.clone());
            let old = existing.label().clone();
            self.by_label.remove(&old);
            self.by_label.insert(label, idx);
            self.entries[idx] = renamed;
        }
        self.entries[idx].clone()
    }

    fn push(&mut self, p: Point) -> Point {
        let idx = self.entries.len();
        self.buckets.entry(p.quantized()).or_default().push(idx);
        self.by_label.entry(p.label().clone()).or_insert(idx);
        self.entries.push(p.clone());
        p
    }

    fn index_of(&self, x: f64, y: f64) -> Option<usize> {
        let probe = Point::new(x, y);
        let (qx, qy) = probe.quantized();
        for dx in -1..=1 {
            for dy in -1..=1 {
                let key = (qx.saturating_add(dx), qy.saturating_add(dy));
                let Some(bucket) = self.buckets.get(&key) else {
                    continue;
                };
                if let Some(&idx) = bucket.iter().find(|&&i| self.entries[i] == probe) {
                    return Some(idx);
                }
            }
        }
        None
    }

    /// Stored point at `(x, y)`, no update.
    pub fn get(&self, x: f64, y: f64) -> Option<&Point> {
        self.index_of(x, y).map(|i| &self.entries[i])
    }

    /// Stored point tolerance-equal to `p`.
    pub fn canonical(&self, p: &Point) -> Option<&Point> {
        self.get(p.x(), p.y())
    }

    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.index_of(p.x(), p.y()).is_some()
    }

    /// Point carrying the given (user-supplied) name.
    pub fn point_named(&self, name: &str) -> Option<&Point> {
        self.point_labeled(&Label::Given(name.to_string()))
    }

    pub fn point_labeled(&self, label: &Label) -> Option<&Point> {
        self.by_label.get(label).map(|&i| &self.entries[i])
    }

    /// Label of the point at `(x, y)`.
    pub fn name_of(&self, x: f64, y: f64) -> Option<&Label> {
        self.get(x, y).map(Point::label)
    }

    /// Points in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.entries.iter()
    }

    /// Points in lexicographic order.
    pub fn points(&self) -> Vec<Point> {
        let mut out = self.entries.clone();
        out.sort();
        out
    }
}
