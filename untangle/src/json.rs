use serde::Serialize;
use serde_json::Value;

use crate::model::{Crossing, Edge, Vertex};
use crate::{Session, SessionState, StepInfo};

pub fn to_json_impl(s: &Session) -> Value {
    #[derive(Serialize)]
    struct CrossingSer {
        a: usize,
        b: usize,
        point: Option<[f32; 2]>,
    }
    #[derive(Serialize)]
    struct Doc<'a> {
        state: SessionState,
        family: Option<&'static str>,
        vertices: &'a [Vertex],
        edges: &'a [Edge],
        crossings: Vec<CrossingSer>,
        crossing_count: usize,
        step: Option<StepInfo>,
        guided: bool,
    }

    let crossings: Vec<CrossingSer> = s
        .crossings()
        .iter()
        .map(|c: &Crossing| CrossingSer {
            a: c.a,
            b: c.b,
            point: s.crossing_point(c).map(|p| [p.x, p.y]),
        })
        .collect();

    let doc = Doc {
        state: s.state(),
        family: s.graph().map(|g| g.family.code()),
        vertices: s.graph().map(|g| g.vertices.as_slice()).unwrap_or(&[]),
        edges: s.graph().map(|g| g.edges.as_slice()).unwrap_or(&[]),
        crossing_count: crossings.len(),
        crossings,
        step: if s.state() == SessionState::Guided {
            s.current_step()
        } else {
            None
        },
        guided: s.state() == SessionState::Guided,
    };
    serde_json::to_value(&doc).unwrap_or(Value::Null)
}
