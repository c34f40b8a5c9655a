// Generators for the fixed graph families. Pure functions of the canvas
// extents (plus count/density and an RNG for the random family); each returns
// a fresh Graph and, for the catalog-planar families, its guided Solution.

use std::collections::HashSet;
use std::f32::consts::PI;

use rand::Rng;

use crate::algorithms::solutions;
use crate::model::{Edge, Graph, GraphFamily, Point, Solution, Vertex};
use crate::{Extents, VERTEX_RADIUS};

/// Random-family knobs. `vertex_count >= 1`, `edge_density` in [0,1]; both
/// are clamped by the Session setters before they reach here.
#[derive(Clone, Copy, Debug)]
pub struct GenConfig {
    pub vertex_count: usize,
    pub edge_density: f32,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            vertex_count: 6,
            edge_density: 0.5,
        }
    }
}

pub fn generate<R: Rng>(
    family: GraphFamily,
    extents: Extents,
    cfg: &GenConfig,
    rng: &mut R,
) -> (Graph, Option<Solution>) {
    match family {
        GraphFamily::CompleteK4 => {
            let g = complete(4, extents);
            let sol = solutions::k4_solution(extents);
            (g, Some(sol))
        }
        GraphFamily::CompleteK5 => (complete(5, extents), None),
        GraphFamily::CompleteBipartite33 => (bipartite33(extents), None),
        GraphFamily::Cube => {
            let g = cube(extents);
            let sol = solutions::cube_solution(extents);
            (g, Some(sol))
        }
        GraphFamily::Random => (random(extents, cfg, rng), None),
    }
}

/// Label rule shared by every generator: A..Z, then letter + number suffix
/// (index 26 -> "A1", 27 -> "B1", 52 -> "A2", ...).
pub fn label_for(i: usize) -> String {
    let letter = (b'A' + (i % 26) as u8) as char;
    if i < 26 {
        letter.to_string()
    } else {
        format!("{}{}", letter, i / 26)
    }
}

fn push_vertex(graph: &mut Graph, x: f32, y: f32) {
    let id = graph.vertices.len() as u32;
    graph.vertices.push(Vertex {
        id,
        label: label_for(id as usize),
        x,
        y,
    });
}

/// Initial layout for the complete families: n vertices evenly on a circle.
/// K4 starts phase-shifted to a square, K5 to a point-up pentagon.
pub(crate) fn circle_positions(n: usize, extents: Extents) -> Vec<Point> {
    let (cx, cy) = extents.center();
    let radius = cx.min(cy) * 0.6;
    let phase = if n == 4 { -PI / 4.0 } else { -PI / 2.0 };
    (0..n)
        .map(|i| {
            let angle = 2.0 * PI * i as f32 / n as f32 + phase;
            Point {
                x: cx + radius * angle.cos(),
                y: cy + radius * angle.sin(),
            }
        })
        .collect()
}

fn complete(n: usize, extents: Extents) -> Graph {
    let family = if n == 4 {
        GraphFamily::CompleteK4
    } else {
        GraphFamily::CompleteK5
    };
    let mut g = Graph::new(family);
    for p in circle_positions(n, extents) {
        push_vertex(&mut g, p.x, p.y);
    }
    for i in 0..n as u32 {
        for j in (i + 1)..n as u32 {
            g.edges.push(Edge { a: i, b: j });
        }
    }
    g
}

fn bipartite33(extents: Extents) -> Graph {
    let (cx, cy) = extents.center();
    let spacing = extents.width.min(extents.height) * 0.2;
    let mut g = Graph::new(GraphFamily::CompleteBipartite33);
    // Left group, then right group, on parallel vertical lines.
    for i in 0..3 {
        push_vertex(&mut g, cx - spacing, cy + (i as f32 - 1.0) * spacing * 0.8);
    }
    for i in 0..3 {
        push_vertex(&mut g, cx + spacing, cy + (i as f32 - 1.0) * spacing * 0.8);
    }
    for i in 0..3u32 {
        for j in 3..6u32 {
            g.edges.push(Edge { a: i, b: j });
        }
    }
    g
}

/// Oblique 3D-to-2D projection of the unit cube. Deliberately produces edge
/// crossings; the guided solution untangles them into nested squares.
pub(crate) fn cube_projection_positions(extents: Extents) -> Vec<Point> {
    let (cx, cy) = extents.center();
    let size = extents.width.min(extents.height) * 0.25;
    const CORNERS: [[f32; 3]; 8] = [
        [-1.0, -1.0, -1.0],
        [1.0, -1.0, -1.0],
        [1.0, 1.0, -1.0],
        [-1.0, 1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, 1.0],
        [-1.0, 1.0, 1.0],
    ];
    CORNERS
        .iter()
        .map(|&[x, y, z]| Point {
            x: cx + (x + z * 0.3) * size,
            y: cy + (y - z * 0.3) * size,
        })
        .collect()
}

fn cube(extents: Extents) -> Graph {
    let mut g = Graph::new(GraphFamily::Cube);
    for p in cube_projection_positions(extents) {
        push_vertex(&mut g, p.x, p.y);
    }
    // Two 4-cycles joined by a perfect matching.
    const EDGES: [(u32, u32); 12] = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];
    for (a, b) in EDGES {
        g.edges.push(Edge { a, b });
    }
    g
}

fn random<R: Rng>(extents: Extents, cfg: &GenConfig, rng: &mut R) -> Graph {
    let n = cfg.vertex_count.max(1);
    let (cx, cy) = extents.center();
    let radius = cx.min(cy) * 0.7;
    let margin = VERTEX_RADIUS + 10.0;
    let mut g = Graph::new(GraphFamily::Random);

    for i in 0..n {
        let angle = 2.0 * PI * i as f32 / n as f32;
        let r = radius * (0.7 + rng.gen::<f32>() * 0.3);
        let a = angle + (rng.gen::<f32>() - 0.5) * (2.0 * PI / n as f32 * 0.5);
        let x = (cx + r * a.cos()).clamp(margin, extents.width - margin);
        let y = (cy + r * a.sin()).clamp(margin, extents.height - margin);
        push_vertex(&mut g, x, y);
    }

    let max_edges = n * (n - 1) / 2;
    let target = (n.saturating_sub(1)).max((max_edges as f32 * cfg.edge_density) as usize);

    // Phase 1: random spanning tree. Each new vertex attaches to a uniformly
    // random already-connected one, so the graph is connected by construction.
    let mut connected: Vec<u32> = vec![0];
    for i in 1..n as u32 {
        let attach = connected[rng.gen_range(0..connected.len())];
        g.edges.push(Edge { a: attach, b: i });
        connected.push(i);
    }

    // Phase 2: extra random edges toward the density target. The attempt cap
    // guarantees termination when the requested density is unreachable; a
    // short edge set is returned rather than an error.
    let mut seen: HashSet<(u32, u32)> = g
        .edges
        .iter()
        .map(|e| (e.a.min(e.b), e.a.max(e.b)))
        .collect();
    let mut attempts = 0usize;
    while g.edges.len() < target && attempts < target * 3 {
        let a = rng.gen_range(0..n as u32);
        let b = rng.gen_range(0..n as u32);
        if a != b && seen.insert((a.min(b), a.max(b))) {
            g.edges.push(Edge { a, b });
        }
        attempts += 1;
    }
    g
}
