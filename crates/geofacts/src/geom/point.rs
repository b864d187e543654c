//! Named 2D points with tolerance-based identity.
//!
//! Invariants:
//! - Equality, ordering and hashing look at coordinates only; the label never
//!   participates.
//! - Ordering is exact and lexicographic (`x` first, then `y`), so it is a
//!   total order. Only equality uses `EPS`; tolerance-equal points may still
//!   compare `Less`/`Greater`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use nalgebra::Vector2;

use super::cfg::EPS;
use super::predicates::approx_eq;

/// How a point got its name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Label {
    /// Not yet registered; the registry assigns a generated name on insert.
    #[default]
    Anonymous,
    /// Name supplied by the figure. Never overwritten.
    Given(String),
    /// Name drawn from a registry's sequence (`A`, `B`, ..., `AA`, ...).
    Generated(String),
}

impl Label {
    /// `Given` for a non-empty name, `Anonymous` otherwise.
    pub fn from_name(name: &str) -> Self {
        if name.is_empty() {
            Label::Anonymous
        } else {
            Label::Given(name.to_string())
        }
    }

    #[inline]
    pub fn is_given(&self) -> bool {
        matches!(self, Label::Given(_))
    }

    #[inline]
    pub fn is_generated(&self) -> bool {
        matches!(self, Label::Generated(_))
    }

    /// Bare name without the generated marker; `None` for anonymous points.
    pub fn name(&self) -> Option<&str> {
        match self {
            Label::Anonymous => None,
            Label::Given(s) | Label::Generated(s) => Some(s),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Anonymous => f.write_str("__UNNAMED"),
            Label::Given(s) => f.write_str(s),
            Label::Generated(s) => write!(f, "*_{s}"),
        }
    }
}

/// Immutable 2D point `(x, y)` with a label.
#[derive(Clone, Debug)]
pub struct Point {
    pos: Vector2<f64>,
    label: Label,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self::with_label(Label::Anonymous, x, y)
    }

    #[inline]
    pub fn named(name: &str, x: f64, y: f64) -> Self {
        Self::with_label(Label::from_name(name), x, y)
    }

    #[inline]
    pub fn with_label(label: Label, x: f64, y: f64) -> Self {
        Self {
            pos: Vector2::new(x, y),
            label,
        }
    }

    pub fn origin() -> Self {
        Self::named("origin", 0.0, 0.0)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.pos.y
    }

    #[inline]
    pub fn pos(&self) -> Vector2<f64> {
        self.pos
    }

    #[inline]
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Bare name, if any (generated names without their marker).
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.label.name()
    }

    #[inline]
    pub fn is_generated(&self) -> bool {
        self.label.is_generated()
    }

    /// Same coordinates, new label.
    pub fn relabel(&self, label: Label) -> Self {
        Self {
            pos: self.pos,
            label,
        }
    }

    /// Exact lexicographic order: `x` first, `y` second.
    pub fn lex_cmp(&self, other: &Point) -> Ordering {
        self.pos
            .x
            .total_cmp(&other.pos.x)
            .then_with(|| self.pos.y.total_cmp(&other.pos.y))
    }

    /// Integer bucket of the coordinates; width `EPS`.
    #[inline]
    pub(crate) fn quantized(&self) -> (i64, i64) {
        let s = 1.0 / EPS;
        ((self.pos.x * s).round() as i64, (self.pos.y * s).round() as i64)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.pos.x, other.pos.x) && approx_eq(self.pos.y, other.pos.y)
    }
}
impl Eq for Point {}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lex_cmp(other)
    }
}

// Consistent with `eq` for coordinates that do not straddle a bucket edge;
// registry-issued points always share the stored coordinates.
impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.quantized().hash(state);
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:.2}, {:.2})", self.label, self.pos.x, self.pos.y)
    }
}
