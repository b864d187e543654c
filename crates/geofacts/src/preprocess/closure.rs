//! Stage 4: transitive closure over collinear chains of segments.
//!
//! 1 seg + 1 seg = 2 seg, 2 seg + 1 seg = 3 seg, ...: every segment built in
//! a pass is extended by each base segment it meets end to end on the same
//! line, until a pass produces nothing new. The universe is the finite set of
//! point pairs, so this terminates.

use std::collections::HashSet;

use tracing::debug;

use crate::geom::Segment;

/// All segments that are a contiguous collinear run of one or more `base`
/// segments, `base` included. Sorted.
pub fn close(base: &[Segment]) -> Vec<Segment> {
    let mut known: HashSet<Segment> = base.iter().cloned().collect();
    let mut all: Vec<Segment> = known.iter().cloned().collect();
    let mut frontier: Vec<Segment> = all.clone();
    frontier.sort();

    let mut pass = 0usize;
    while !frontier.is_empty() {
        pass += 1;
        let mut fresh = Vec::new();
        for s in &frontier {
            for b in base {
                let Some(v) = s.shared_vertex(b) else {
                    continue;
                };
                if !s.coincide_without_overlap(b) {
                    continue;
                }
                let (Some(p), Some(q)) = (s.other(v), b.other(v)) else {
                    continue;
                };
                if p == q {
                    continue;
                }
                let joined = Segment::new(p.clone(), q.clone());
                if known.insert(joined.clone()) {
                    fresh.push(joined);
                }
            }
        }
        debug!(pass, new = fresh.len(), "closure pass");
        fresh.sort();
        all.extend(fresh.iter().cloned());
        frontier = fresh;
    }
    all.sort();
    all
}

/// Segments derivable from `minimal` by closure that are not minimal themselves.
pub fn non_minimal_segments(minimal: &[Segment]) -> Vec<Segment> {
    let base: HashSet<&Segment> = minimal.iter().collect();
    close(minimal)
        .into_iter()
        .filter(|s| !base.contains(s))
        .collect()
}
