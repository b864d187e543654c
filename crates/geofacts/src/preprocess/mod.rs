//! Figure preprocessing: implicit points, minimal segments, and closure.
//!
//! Purpose
//! - Turn the points and drawn segments of a figure into the complete set of
//!   segments the figure implies: crossings become points, drawn segments are
//!   split at every point they pass through, and collinear chains of pieces
//!   are joined back into every longer segment they form.
//!
//! Stages (run once, in order, no branching back)
//! 1. `resolve_implicit_points`: pairwise crossings not yet registered.
//! 2. `minimal_segments`: split given segments at all registered points.
//! 3. `reconcile_given`: given segments without interior points stay as is.
//! 4. `close`: contiguous collinear runs of minimal segments.
//!
//! Any `DegenerateGeometry` aborts the run; a partial segment set is never
//! returned.
//!
//! Code cross-refs: `geom::{segment_intersection, Segment::ordered_points_on,
//! Segment::coincide_without_overlap}`, `registry::PointRegistry`.

mod closure;
mod implicit;
mod minimal;
mod segment_map;

pub use closure::{close, non_minimal_segments};
pub use implicit::resolve_implicit_points;
pub use minimal::{minimal_segments, reconcile_given};
pub use segment_map::SegmentMap;

use tracing::{debug, info};

use crate::error::Result;
use crate::geom::Segment;
use crate::registry::PointRegistry;

/// Preprocess a figure: `points` seeded from the figure, `given` its drawn segments.
pub fn preprocess(points: PointRegistry, given: &[Segment]) -> Result<SegmentMap> {
    Preprocessor::new(points, given).run()
}

/// Owns the registry for one run; the only mutable state of the pipeline.
#[derive(Clone, Debug)]
pub struct Preprocessor {
    points: PointRegistry,
    given: Vec<Segment>,
}

impl Preprocessor {
    /// Endpoints of `given` are replaced by their registry entries (registering
    /// any the seed lacked), so all stages share one instance per location.
    pub fn new(mut points: PointRegistry, given: &[Segment]) -> Self {
        let mut canonical: Vec<Segment> = Vec::with_capacity(given.len());
        for s in given {
            let a = points.insert(s.p1());
            let b = points.insert(s.p2());
            if a == b {
                debug!(segment = %s, "endpoints collapse to one registry point; skipped");
                continue;
            }
            let s = Segment::new(a, b);
            if !canonical.contains(&s) {
                canonical.push(s);
            }
        }
        Self {
            points,
            given: canonical,
        }
    }

    #[inline]
    pub fn points(&self) -> &PointRegistry {
        &self.points
    }

    #[inline]
    pub fn given(&self) -> &[Segment] {
        &self.given
    }

    pub fn run(mut self) -> Result<SegmentMap> {
        let implicit = resolve_implicit_points(&mut self.points, &self.given)?;
        let all_points = self.points.points();
        let minimal = minimal_segments(&all_points, &self.given);
        let non_minimal = non_minimal_segments(&minimal);
        info!(
            points = all_points.len(),
            implicit = implicit.len(),
            given = self.given.len(),
            minimal = minimal.len(),
            non_minimal = non_minimal.len(),
            "preprocessed figure"
        );
        Ok(SegmentMap::new(
            minimal.into_iter().chain(non_minimal),
            self.points,
            implicit,
        ))
    }
}
