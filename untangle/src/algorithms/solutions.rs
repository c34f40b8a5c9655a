// Hand-authored solution tables for the catalog-planar families (K4, cube).
//
// Steps are narrative data, not derived from the canonical layout: there is
// no general planar-embedding-to-steps algorithm here, only these two
// families. Positions are parameterized by canvas extents so the tables land
// wherever the generator placed the graph.

use crate::algorithms::generate;
use crate::model::{Point, Solution, Step};
use crate::Extents;

pub fn k4_solution(extents: Extents) -> Solution {
    let (cx, cy) = extents.center();
    let radius = cx.min(cy) * 0.6;

    // Outer triangle with the fourth vertex inside: the planar embedding.
    let triangle = [
        Point {
            x: cx,
            y: cy - radius,
        },
        Point {
            x: cx - radius * 0.866,
            y: cy + radius * 0.5,
        },
        Point {
            x: cx + radius * 0.866,
            y: cy + radius * 0.5,
        },
    ];
    let inside = Point {
        x: cx,
        y: cy + radius * 0.2,
    };

    let steps = vec![
        Step {
            ordinal: 1,
            title: "Initial Layout",
            description: "K4 (complete graph with 4 vertices) starts with vertices arranged in a square pattern.",
            positions: generate::circle_positions(4, extents),
            message: "This initial layout shows all 6 edges of K4, but some may cross.",
        },
        Step {
            ordinal: 2,
            title: "Arrange Outer Triangle",
            description: "Move 3 vertices to form an outer triangle.",
            positions: vec![
                triangle[0],
                triangle[1],
                triangle[2],
                Point { x: cx, y: cy },
            ],
            message: "Three vertices form an outer triangle. This creates the outer face of our planar embedding.",
        },
        Step {
            ordinal: 3,
            title: "Position Center Vertex",
            description: "Place the 4th vertex inside the triangle.",
            positions: vec![triangle[0], triangle[1], triangle[2], inside],
            message: "The 4th vertex is placed inside the triangle. All edges can now be drawn without crossings!",
        },
    ];

    Solution {
        target: vec![triangle[0], triangle[1], triangle[2], inside],
        steps,
    }
}

pub fn cube_solution(extents: Extents) -> Solution {
    let (cx, cy) = extents.center();
    let size = extents.width.min(extents.height) * 0.2;

    let ring = |k: f32| -> [Point; 4] {
        [
            Point {
                x: cx - size * k,
                y: cy - size * k,
            },
            Point {
                x: cx + size * k,
                y: cy - size * k,
            },
            Point {
                x: cx + size * k,
                y: cy + size * k,
            },
            Point {
                x: cx - size * k,
                y: cy + size * k,
            },
        ]
    };
    let outer = ring(1.0);
    let inner = ring(0.3);
    let final_layout: Vec<Point> = outer.iter().chain(inner.iter()).copied().collect();

    let steps = vec![
        Step {
            ordinal: 1,
            title: "Initial 3D Projection",
            description: "The cube graph starts as a 3D projection which may have crossing edges.",
            positions: generate::cube_projection_positions(extents),
            message: "This 3D projection of a cube often has edge crossings. A cube has 8 vertices and 12 edges.",
        },
        Step {
            ordinal: 2,
            title: "Create Outer 4-Cycle",
            description: "Arrange 4 vertices to form the outer boundary (one face of the cube).",
            positions: outer.iter().chain(ring(0.5).iter()).copied().collect(),
            message: "Four vertices (A,B,C,D) form the outer square. The remaining 4 vertices will be positioned inside.",
        },
        Step {
            ordinal: 3,
            title: "Position Inner 4-Cycle",
            description: "Place the remaining 4 vertices inside to form the second face of the cube.",
            positions: final_layout.clone(),
            message: "Inner vertices (E,F,G,H) form a smaller square inside. Each connects to its corresponding outer vertex, creating a planar layout of the cube graph!",
        },
    ];

    Solution {
        target: final_layout,
        steps,
    }
}
