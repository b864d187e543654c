//! Stage 1: implicit points where given segments cross.

use tracing::debug;

use crate::error::Result;
use crate::geom::{segment_intersection, Point, Segment};
use crate::registry::PointRegistry;

/// Register every finite crossing of two given segments that the registry
/// does not already hold. Returns the new points in discovery order.
///
/// Pairs are visited in lexicographic segment order (`i <= j`), so generated
/// names do not depend on the order segments were supplied in.
///
/// Complexity: O(n²) in the number of segments.
pub fn resolve_implicit_points(
    registry: &mut PointRegistry,
    given: &[Segment],
) -> Result<Vec<Point>> {
    let mut order: Vec<&Segment> = given.iter().collect();
    order.sort();

    let mut implicit = Vec::new();
    for (i, s1) in order.iter().enumerate() {
        for s2 in &order[i..] {
            let Some(p) = segment_intersection(s1, s2)? else {
                continue;
            };
            if registry.contains(&p) {
                continue;
            }
            let p = registry.insert(&p);
            debug!(point = %p, s1 = %s1, s2 = %s2, "implicit point");
            implicit.push(p);
        }
    }
    Ok(implicit)
}
