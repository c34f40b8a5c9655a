// Segment-segment intersection in f64 with a denominator guard.
// Only proper interior crossings count: endpoint touches are not crossings.

use crate::geometry::tolerance::EPS_DENOM;
use crate::model::Point;

/// True iff segments (p1,p2) and (p3,p4) cross in their open interiors.
///
/// Solves the standard 2x2 parametric system; `|denom| < EPS_DENOM` means
/// parallel/collinear and returns false. The interval test is strict
/// (`0 < t < 1 && 0 < u < 1`), so two segments that merely touch at an
/// endpoint do not intersect.
pub fn segments_intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    match solve(p1, p2, p3, p4) {
        Some((t, u)) => t > 0.0 && t < 1.0 && u > 0.0 && u < 1.0,
        None => false,
    }
}

/// Intersection point of the two carrier lines, or None when near-parallel.
/// Used for crossing-marker placement only, never for decision logic.
pub fn intersection_point(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Point> {
    let (t, _u) = solve(p1, p2, p3, p4)?;
    let x1 = p1.x as f64;
    let y1 = p1.y as f64;
    Some(Point {
        x: (x1 + t * (p2.x as f64 - x1)) as f32,
        y: (y1 + t * (p2.y as f64 - y1)) as f32,
    })
}

fn solve(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<(f64, f64)> {
    let x1 = p1.x as f64;
    let y1 = p1.y as f64;
    let x2 = p2.x as f64;
    let y2 = p2.y as f64;
    let x3 = p3.x as f64;
    let y3 = p3.y as f64;
    let x4 = p4.x as f64;
    let y4 = p4.y as f64;

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom.abs() < EPS_DENOM {
        return None;
    }
    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / denom;
    Some((t, u))
}
