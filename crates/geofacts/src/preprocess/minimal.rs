//! Stages 2 and 3: split given segments at every registered point.

use crate::geom::{Point, Segment};

/// Consecutive pieces of each given segment after projecting `points` onto it.
///
/// ```text
/// A---------(X)---------E   ->   AX, XE
/// ```
///
/// A segment with no interior point contributes itself. Output is sorted and
/// deduplicated.
pub fn minimal_segments(points: &[Point], given: &[Segment]) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::new();
    for s in given {
        let on = s.ordered_points_on(points);
        out.extend(
            on.windows(2)
                .map(|w| Segment::new(w[0].clone(), w[1].clone())),
        );
    }
    reconcile_given(points, given, &mut out);
    out.sort();
    out.dedup();
    out
}

/// Add the given segments that hold no registered point strictly inside.
/// Idempotent with the splitting above, which already yields those unchanged.
pub fn reconcile_given(points: &[Point], given: &[Segment], minimal: &mut Vec<Segment>) {
    for s in given {
        let interior = points.iter().any(|p| s.point_lies_between(p));
        if !interior && !minimal.contains(s) {
            minimal.push(s.clone());
        }
    }
}
