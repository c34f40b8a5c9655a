use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Vertex {
    pub id: u32,
    pub label: String,
    pub x: f32,
    pub y: f32,
}

impl Vertex {
    pub fn position(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }
}

/// Unordered vertex pair. `a != b`; duplicates (in either orientation) are
/// rejected at generation time and never appear in a generated edge set.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Edge {
    pub a: u32,
    pub b: u32,
}

impl Edge {
    pub fn touches(&self, v: u32) -> bool {
        self.a == v || self.b == v
    }

    pub fn shares_endpoint(&self, other: &Edge) -> bool {
        self.touches(other.a) || self.touches(other.b)
    }
}

/// A pair of edge indices whose segments properly cross under the current
/// embedding. Always `a < b`. Derived wholesale from positions, never stored
/// incrementally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Crossing {
    pub a: usize,
    pub b: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphFamily {
    CompleteK4,
    CompleteK5,
    CompleteBipartite33,
    Cube,
    Random,
}

impl GraphFamily {
    pub fn from_code(code: &str) -> Option<GraphFamily> {
        match code {
            "k4" => Some(GraphFamily::CompleteK4),
            "k5" => Some(GraphFamily::CompleteK5),
            "k33" => Some(GraphFamily::CompleteBipartite33),
            "cube" => Some(GraphFamily::Cube),
            "random" => Some(GraphFamily::Random),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            GraphFamily::CompleteK4 => "k4",
            GraphFamily::CompleteK5 => "k5",
            GraphFamily::CompleteBipartite33 => "k33",
            GraphFamily::Cube => "cube",
            GraphFamily::Random => "random",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GraphFamily::CompleteK4 => "Complete Graph K4",
            GraphFamily::CompleteK5 => "Complete Graph K5",
            GraphFamily::CompleteBipartite33 => "Complete Bipartite K3,3",
            GraphFamily::Cube => "Cube Graph",
            GraphFamily::Random => "Random Graph",
        }
    }

    /// Closed catalog: the families that ship a guided Solution. This is a
    /// catalog fact, not a computed property.
    pub fn is_known_planar(&self) -> bool {
        matches!(self, GraphFamily::CompleteK4 | GraphFamily::Cube)
    }

    /// Closed catalog: families non-planar by theorem (K5 via E <= 3V-6,
    /// K3,3 via the bipartite bound). Random graphs are never classified.
    pub fn is_proven_non_planar(&self) -> bool {
        matches!(
            self,
            GraphFamily::CompleteK5 | GraphFamily::CompleteBipartite33
        )
    }
}

/// Vertex/edge containers for the current graph. Topology is fixed after
/// generation; only vertex positions mutate (drag input or step playback).
#[derive(Clone, Debug, Serialize)]
pub struct Graph {
    pub family: GraphFamily,
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(family: GraphFamily) -> Graph {
        Graph {
            family,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn position(&self, id: u32) -> Option<Point> {
        self.vertices.get(id as usize).map(|v| v.position())
    }

    pub fn set_position(&mut self, id: u32, x: f32, y: f32) -> bool {
        match self.vertices.get_mut(id as usize) {
            Some(v) => {
                v.x = x;
                v.y = y;
                true
            }
            None => false,
        }
    }

    pub fn has_edge(&self, a: u32, b: u32) -> bool {
        self.edges
            .iter()
            .any(|e| (e.a == a && e.b == b) || (e.a == b && e.b == a))
    }

    /// Endpoint positions of edge `index`, or None if out of range.
    pub fn edge_segment(&self, index: usize) -> Option<(Point, Point)> {
        let e = self.edges.get(index)?;
        Some((self.position(e.a)?, self.position(e.b)?))
    }
}

/// One stage of a guided solution: a short narrative plus target positions
/// for a prefix of the vertex sequence (later steps refine earlier ones).
#[derive(Clone, Debug, Serialize)]
pub struct Step {
    pub ordinal: usize,
    pub title: &'static str,
    pub description: &'static str,
    pub positions: Vec<Point>,
    pub message: &'static str,
}

/// Hand-authored guidance attached only to catalog-planar graphs. Absence of
/// a Solution is the sole "treat as non-planar for guidance" signal.
#[derive(Clone, Debug, Serialize)]
pub struct Solution {
    pub target: Vec<Point>,
    pub steps: Vec<Step>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceCategory {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, Serialize)]
pub struct TraceEntry {
    pub message: String,
    pub category: TraceCategory,
    pub timestamp_ms: f64,
}
