use crate::error;
use crate::Session;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Debounce the embedder should apply between `end_drag` returning true and
/// calling `confirm_settle`.
#[wasm_bindgen]
pub fn settle_delay_ms() -> f64 {
    untangle::SETTLE_DELAY_MS
}

#[wasm_bindgen]
pub fn vertex_radius() -> f32 {
    untangle::VERTEX_RADIUS
}

#[wasm_bindgen]
impl Session {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Session {
        Session::rs_new(width, height)
    }

    pub fn state(&self) -> String {
        match self.inner.state() {
            untangle::SessionState::Idle => "idle",
            untangle::SessionState::Explore => "explore",
            untangle::SessionState::Guided => "guided",
        }
        .to_string()
    }

    // Graph lifecycle
    pub fn load_graph(&mut self, family: &str) -> bool {
        if !self.inner.load_graph_code(family) {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "untangle: unknown graph family '{}'",
                family
            )));
            return false;
        }
        self.pending = None;
        true
    }
    pub fn load_graph_res(&mut self, family: &str) -> JsValue {
        if self.load_graph(family) {
            error::ok(JsValue::from_bool(true))
        } else {
            error::unknown_family(family)
        }
    }
    pub fn set_vertex_count(&mut self, count: u32) {
        self.inner.set_vertex_count(count as usize);
    }
    pub fn set_vertex_count_res(&mut self, count: u32) -> JsValue {
        if count == 0 {
            return error::out_of_range("count", 1.0, f32::INFINITY, 0.0);
        }
        self.inner.set_vertex_count(count as usize);
        error::ok(JsValue::from_bool(true))
    }
    pub fn set_edge_density(&mut self, density: f32) {
        self.inner.set_edge_density(density);
    }
    pub fn set_edge_density_res(&mut self, density: f32) -> JsValue {
        if !density.is_finite() {
            return error::non_finite("density");
        }
        if !(0.0..=1.0).contains(&density) {
            return error::out_of_range("density", 0.0, 1.0, density);
        }
        self.inner.set_edge_density(density);
        error::ok(JsValue::from_bool(true))
    }

    // Counts
    pub fn vertex_count(&self) -> u32 {
        self.inner.graph().map(|g| g.vertex_count() as u32).unwrap_or(0)
    }
    pub fn edge_count(&self) -> u32 {
        self.inner.graph().map(|g| g.edge_count() as u32).unwrap_or(0)
    }
    pub fn crossing_count(&self) -> u32 {
        self.inner.crossings().len() as u32
    }

    // Typed-array getters for the rendering surface
    pub fn get_vertex_data(&self) -> JsValue {
        let mut ids = Vec::new();
        let mut pos = Vec::new();
        let mut labels: Vec<String> = Vec::new();
        if let Some(g) = self.inner.graph() {
            for v in &g.vertices {
                ids.push(v.id);
                pos.push(v.x);
                pos.push(v.y);
                labels.push(v.label.clone());
            }
        }
        let obj = crate::interop::new_obj();
        crate::interop::set_kv(&obj, "ids", &crate::interop::arr_u32(&ids).into());
        crate::interop::set_kv(&obj, "positions", &crate::interop::arr_f32(&pos).into());
        crate::interop::set_kv(&obj, "labels", &crate::interop::arr_str(&labels).into());
        obj.into()
    }
    pub fn get_edge_data(&self) -> JsValue {
        let mut endpoints = Vec::new();
        if let Some(g) = self.inner.graph() {
            for e in &g.edges {
                endpoints.push(e.a);
                endpoints.push(e.b);
            }
        }
        let obj = crate::interop::new_obj();
        crate::interop::set_kv(
            &obj,
            "endpoints",
            &crate::interop::arr_u32(&endpoints).into(),
        );
        obj.into()
    }
    pub fn get_crossing_data(&self) -> JsValue {
        let mut edges_a = Vec::new();
        let mut edges_b = Vec::new();
        let mut points = Vec::new();
        for c in self.inner.crossings() {
            edges_a.push(c.a as u32);
            edges_b.push(c.b as u32);
            match self.inner.crossing_point(c) {
                Some(p) => {
                    points.push(p.x);
                    points.push(p.y);
                }
                None => {
                    points.push(f32::NAN);
                    points.push(f32::NAN);
                }
            }
        }
        let obj = crate::interop::new_obj();
        crate::interop::set_kv(&obj, "edges_a", &crate::interop::arr_u32(&edges_a).into());
        crate::interop::set_kv(&obj, "edges_b", &crate::interop::arr_u32(&edges_b).into());
        crate::interop::set_kv(&obj, "points", &crate::interop::arr_f32(&points).into());
        obj.into()
    }

    // Dragging
    pub fn move_vertex(&mut self, id: u32, x: f32, y: f32) -> bool {
        self.inner.move_vertex(id, x, y)
    }
    pub fn move_vertex_res(&mut self, id: u32, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        if self.inner.graph().is_none() {
            return error::no_graph();
        }
        if self.inner.graph().and_then(|g| g.position(id)).is_none() {
            return error::invalid_id("vertex", id);
        }
        error::ok(JsValue::from_bool(self.inner.move_vertex(id, x, y)))
    }

    /// Drag-end planarity-improvement check. True means a settle ticket is
    /// pending: call `confirm_settle` after `settle_delay_ms()`.
    pub fn end_drag(&mut self) -> bool {
        self.pending = self.inner.end_drag();
        self.pending.is_some()
    }

    /// Fires the deferred zero-crossing confirmation against live state.
    /// Returns "known_planar", "random_layout", or null when suppressed
    /// (crossings reappeared or the graph was reloaded meanwhile).
    pub fn confirm_settle(&mut self) -> JsValue {
        let ticket = match self.pending.take() {
            Some(t) => t,
            None => return JsValue::NULL,
        };
        match self.inner.confirm_settle(ticket) {
            Some(untangle::Celebration::KnownPlanar) => JsValue::from_str("known_planar"),
            Some(untangle::Celebration::RandomLayout) => JsValue::from_str("random_layout"),
            None => JsValue::NULL,
        }
    }

    // Explicit check
    pub fn check_planarity(&mut self) -> JsValue {
        match self.inner.check_planarity() {
            Some(report) => serde_wasm_bindgen::to_value(&report).unwrap(),
            None => JsValue::NULL,
        }
    }
    pub fn check_planarity_res(&mut self) -> JsValue {
        if self.inner.graph().is_none() {
            return error::no_graph();
        }
        error::ok(self.check_planarity())
    }

    // Guided solution playback
    pub fn start_guided(&mut self) -> JsValue {
        step_value(self.inner.start_guided())
    }
    pub fn start_guided_res(&mut self) -> JsValue {
        if self.inner.graph().is_none() {
            return error::no_graph();
        }
        if self.inner.solution().is_none() {
            return error::no_solution();
        }
        error::ok(step_value(self.inner.start_guided()))
    }
    pub fn next_step(&mut self) -> JsValue {
        step_value(self.inner.next_step())
    }
    pub fn previous_step(&mut self) -> JsValue {
        step_value(self.inner.previous_step())
    }
    pub fn current_step(&self) -> JsValue {
        step_value(self.inner.current_step())
    }
    pub fn exit_guided(&mut self) {
        self.inner.exit_guided();
    }
    pub fn has_solution(&self) -> bool {
        self.inner.solution().is_some()
    }

    // Learning trace
    pub fn get_trace(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.learning_trace()).unwrap()
    }
    pub fn clear_trace(&mut self) {
        self.inner.clear_learning_trace();
    }

    // Snapshot
    pub fn to_json(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.to_json_value()).unwrap()
    }
}

fn step_value(step: Option<untangle::StepInfo>) -> JsValue {
    match step {
        Some(info) => serde_wasm_bindgen::to_value(&info).unwrap(),
        None => JsValue::NULL,
    }
}
