// Pairwise crossing detection over the current embedding.
//
// Recomputed from scratch on every call: positions mutate externally at
// per-pixel drag granularity, so incremental bookkeeping buys nothing at
// these sizes. O(E^2) with E at most a few dozen for every family.

use crate::geometry::intersect::{intersection_point, segments_intersect};
use crate::model::{Crossing, Graph, Point};

/// All unordered pairs of non-adjacent edges whose segments properly cross.
/// Edges meeting at a shared vertex are never counted, even when coincident
/// at that point.
pub fn detect_crossings(graph: &Graph) -> Vec<Crossing> {
    let mut out = Vec::new();
    for i in 0..graph.edges.len() {
        for j in (i + 1)..graph.edges.len() {
            if graph.edges[i].shares_endpoint(&graph.edges[j]) {
                continue;
            }
            let (p1, p2) = match graph.edge_segment(i) {
                Some(seg) => seg,
                None => continue,
            };
            let (p3, p4) = match graph.edge_segment(j) {
                Some(seg) => seg,
                None => continue,
            };
            if segments_intersect(p1, p2, p3, p4) {
                out.push(Crossing { a: i, b: j });
            }
        }
    }
    out
}

/// Marker position for a detected crossing. None for out-of-range indices or
/// near-parallel segments.
pub fn crossing_point(graph: &Graph, crossing: &Crossing) -> Option<Point> {
    let (p1, p2) = graph.edge_segment(crossing.a)?;
    let (p3, p4) = graph.edge_segment(crossing.b)?;
    intersection_point(p1, p2, p3, p4)
}
