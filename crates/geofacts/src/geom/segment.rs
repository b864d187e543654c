//! Finite segments as unordered point pairs.
//!
//! Invariants:
//! - Endpoints are distinct (the ingestion boundary rejects zero length).
//! - Stored lexicographically (`p1 <= p2`), so `Segment::new(a, b) == Segment::new(b, a)`
//!   and hashing is order-independent.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::point::Point;
use super::predicates::{distance, is_horizontal_pair, is_vertical_pair, slope};

#[derive(Clone, Debug)]
pub struct Segment {
    p1: Point,
    p2: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        debug_assert!(a != b, "zero-length segment at {a}");
        if a <= b {
            Self { p1: a, p2: b }
        } else {
            Self { p1: b, p2: a }
        }
    }

    /// Lexicographically smaller endpoint.
    #[inline]
    pub fn p1(&self) -> &Point {
        &self.p1
    }

    /// Lexicographically larger endpoint.
    #[inline]
    pub fn p2(&self) -> &Point {
        &self.p2
    }

    #[inline]
    pub fn endpoints(&self) -> [&Point; 2] {
        [&self.p1, &self.p2]
    }

    #[inline]
    pub fn length(&self) -> f64 {
        distance(&self.p1, &self.p2)
    }

    /// Slope, `f64::INFINITY` for vertical segments.
    pub fn slope(&self) -> f64 {
        slope(&self.p1, &self.p2).unwrap_or(f64::INFINITY)
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        is_vertical_pair(&self.p1, &self.p2)
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        is_horizontal_pair(&self.p1, &self.p2)
    }

    /// `p` is one of the endpoints.
    #[inline]
    pub fn has(&self, p: &Point) -> bool {
        self.p1 == *p || self.p2 == *p
    }

    /// The endpoint opposite `p`; `None` if `p` is not an endpoint.
    pub fn other(&self, p: &Point) -> Option<&Point> {
        if self.p1 == *p {
            Some(&self.p2)
        } else if self.p2 == *p {
            Some(&self.p1)
        } else {
            None
        }
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.has(&other.p1) && self.has(&other.p2)
    }
}
impl Eq for Segment {}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.p1.cmp(&other.p1).then_with(|| self.p2.cmp(&other.p2))
    }
}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let a = self.p1.quantized();
        let b = self.p2.quantized();
        a.min(b).hash(state);
        a.max(b).hash(state);
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.p1, self.p2)
    }
}
