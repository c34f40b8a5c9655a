pub mod model;
pub mod geometry {
    pub mod intersect;
    pub mod tolerance;
}
pub mod algorithms {
    pub mod crossings;
    pub mod generate;
    pub mod solutions;
}
mod json;

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use algorithms::crossings::{crossing_point, detect_crossings};
use algorithms::generate::{self, GenConfig};
use geometry::tolerance::clamp;
use model::{Crossing, Graph, GraphFamily, Point, Solution, TraceCategory, TraceEntry};

/// Display radius of a vertex; doubles as the drag clamping margin so a
/// vertex can never be dropped with its disc outside the canvas.
pub const VERTEX_RADIUS: f32 = 25.0;

/// Debounce before celebratory feedback after a drag reaches zero crossings.
/// Cosmetic only; `confirm_settle` re-reads live state at fire time.
pub const SETTLE_DELAY_MS: f64 = 500.0;

/// Canvas-surface extents all generated layouts are scaled to.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Extents {
    pub width: f32,
    pub height: f32,
}

impl Default for Extents {
    fn default() -> Self {
        Extents {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Extents {
    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// No graph loaded.
    Idle,
    /// Graph loaded, free dragging.
    Explore,
    /// Stepping through a Solution.
    Guided,
}

/// Metadata of the currently shown solution step.
#[derive(Clone, Debug, Serialize)]
pub struct StepInfo {
    pub ordinal: usize,
    pub total: usize,
    pub title: String,
    pub description: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct PlanarityReport {
    pub crossing_count: usize,
    pub is_known_planar: bool,
    pub is_proven_non_planar: bool,
}

/// Handle returned by `end_drag` when crossings hit zero. The embedder
/// schedules `confirm_settle(ticket)` after `SETTLE_DELAY_MS`; a graph
/// reload in the meantime invalidates the ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleTicket {
    generation: u64,
}

/// Which celebratory message the presentation layer should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Celebration {
    /// A catalog-planar family (K4, cube) drawn without crossings.
    KnownPlanar,
    /// A random graph that happens to admit the found planar layout.
    RandomLayout,
}

type Clock = Box<dyn Fn() -> f64>;

fn system_clock() -> Clock {
    Box::new(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as f64)
            .unwrap_or(0.0)
    })
}

/// Owned, single-threaded session state: the current graph, optional guided
/// solution, crossing cache, and the learning trace. Every public operation
/// runs to completion; there is no background computation.
pub struct Session {
    graph: Option<Graph>,
    solution: Option<Solution>,
    step: usize,
    guided: bool,
    crossings: Vec<Crossing>,
    trace: Vec<TraceEntry>,
    extents: Extents,
    gen_cfg: GenConfig,
    rng: StdRng,
    // Bumped on every (re)generation; stale settle tickets compare unequal.
    load_generation: u64,
    clock: Clock,
}

impl Session {
    pub fn new() -> Session {
        Session::with_extents(Extents::default())
    }

    pub fn with_extents(extents: Extents) -> Session {
        Session {
            graph: None,
            solution: None,
            step: 0,
            guided: false,
            crossings: Vec::new(),
            trace: Vec::new(),
            extents,
            gen_cfg: GenConfig::default(),
            rng: StdRng::from_entropy(),
            load_generation: 0,
            clock: system_clock(),
        }
    }

    /// Deterministic random-family generation for tests and replays.
    pub fn with_seed(extents: Extents, seed: u64) -> Session {
        let mut s = Session::with_extents(extents);
        s.rng = StdRng::seed_from_u64(seed);
        s
    }

    /// Replace the timestamp source for trace entries. The core never
    /// assumes a particular host environment; wasm embedders install
    /// `Date.now` here.
    pub fn set_clock(&mut self, clock: impl Fn() -> f64 + 'static) {
        self.clock = Box::new(clock);
    }

    pub fn state(&self) -> SessionState {
        if self.graph.is_none() {
            SessionState::Idle
        } else if self.guided {
            SessionState::Guided
        } else {
            SessionState::Explore
        }
    }

    pub fn extents(&self) -> Extents {
        self.extents
    }

    pub fn graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }

    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    pub fn crossings(&self) -> &[Crossing] {
        &self.crossings
    }

    pub fn crossing_point(&self, crossing: &Crossing) -> Option<Point> {
        crossing_point(self.graph.as_ref()?, crossing)
    }

    // -- Graph lifecycle ----------------------------------------------------

    /// Load a graph family, fully resetting the session: trace cleared,
    /// guided mode off, step index zeroed, graph and solution regenerated.
    pub fn load_graph(&mut self, family: GraphFamily) {
        self.guided = false;
        self.step = 0;
        self.trace.clear();
        let (graph, solution) =
            generate::generate(family, self.extents, &self.gen_cfg, &mut self.rng);
        self.graph = Some(graph);
        self.solution = solution;
        self.load_generation += 1;
        self.recompute();
        self.push_trace(
            format!("Loaded {}", family.display_name()),
            TraceCategory::Info,
        );
    }

    /// Load by string code ("k4", "k5", "k33", "cube", "random"). Unknown
    /// codes leave the session untouched.
    pub fn load_graph_code(&mut self, code: &str) -> bool {
        match GraphFamily::from_code(code) {
            Some(family) => {
                self.load_graph(family);
                true
            }
            None => false,
        }
    }

    /// Set the random-family vertex count (min 1). Regenerates in place when
    /// a random graph is current, as the original slider does.
    pub fn set_vertex_count(&mut self, count: usize) {
        self.gen_cfg.vertex_count = count.max(1);
        self.regenerate_if_random();
    }

    /// Set the random-family edge density, clamped to [0, 1].
    pub fn set_edge_density(&mut self, density: f32) {
        self.gen_cfg.edge_density = clamp(density, 0.0, 1.0);
        self.regenerate_if_random();
    }

    pub fn vertex_count_setting(&self) -> usize {
        self.gen_cfg.vertex_count
    }

    pub fn edge_density_setting(&self) -> f32 {
        self.gen_cfg.edge_density
    }

    fn regenerate_if_random(&mut self) {
        if self
            .graph
            .as_ref()
            .map(|g| g.family == GraphFamily::Random)
            .unwrap_or(false)
        {
            let (graph, _) = generate::generate(
                GraphFamily::Random,
                self.extents,
                &self.gen_cfg,
                &mut self.rng,
            );
            self.graph = Some(graph);
            self.load_generation += 1;
            self.recompute();
        }
    }

    // -- Dragging -----------------------------------------------------------

    /// Apply a drag/move to one vertex. Valid in any state with a loaded
    /// graph; coordinates are clamped so the vertex disc stays on canvas,
    /// then crossings are recomputed.
    pub fn move_vertex(&mut self, id: u32, x: f32, y: f32) -> bool {
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        let cx = clamp(x, VERTEX_RADIUS, self.extents.width - VERTEX_RADIUS);
        let cy = clamp(y, VERTEX_RADIUS, self.extents.height - VERTEX_RADIUS);
        let moved = match self.graph.as_mut() {
            Some(g) => g.set_position(id, cx, cy),
            None => false,
        };
        if moved {
            self.recompute();
        }
        moved
    }

    /// Planarity-improvement check run when a drag ends. Records a trace
    /// event either way; on zero crossings returns a ticket the embedder
    /// should confirm after `SETTLE_DELAY_MS`.
    pub fn end_drag(&mut self) -> Option<SettleTicket> {
        self.graph.as_ref()?;
        let count = self.crossings.len();
        if count == 0 {
            self.push_trace(
                "Excellent! No edge crossings detected!".to_string(),
                TraceCategory::Success,
            );
            Some(SettleTicket {
                generation: self.load_generation,
            })
        } else {
            let plural = if count > 1 { "s" } else { "" };
            self.push_trace(
                format!(
                    "{count} edge crossing{plural} detected. Try repositioning vertices."
                ),
                TraceCategory::Warning,
            );
            None
        }
    }

    /// Second zero-crossing confirmation, taken when the settle delay fires.
    /// Reads live state: a stale ticket (graph reloaded) or reappeared
    /// crossings suppress the celebration. Proven non-planar families never
    /// celebrate.
    pub fn confirm_settle(&self, ticket: SettleTicket) -> Option<Celebration> {
        if ticket.generation != self.load_generation || !self.crossings.is_empty() {
            return None;
        }
        let family = self.graph.as_ref()?.family;
        if family.is_known_planar() {
            Some(Celebration::KnownPlanar)
        } else if family == GraphFamily::Random {
            Some(Celebration::RandomLayout)
        } else {
            None
        }
    }

    // -- Explicit planarity check -------------------------------------------

    /// User-triggered check, decoupled from dragging (no settle delay).
    pub fn check_planarity(&mut self) -> Option<PlanarityReport> {
        let family = self.graph.as_ref()?.family;
        self.recompute();
        let count = self.crossings.len();
        let report = PlanarityReport {
            crossing_count: count,
            is_known_planar: family.is_known_planar(),
            is_proven_non_planar: family.is_proven_non_planar(),
        };
        let name = family.display_name();
        if count == 0 {
            if report.is_known_planar {
                self.push_trace(
                    format!("Successfully drew {name} without crossings!"),
                    TraceCategory::Success,
                );
            } else {
                self.push_trace(
                    "Found layout without crossings".to_string(),
                    TraceCategory::Success,
                );
            }
        } else if report.is_proven_non_planar {
            self.push_trace(
                format!("{name} is proven non-planar"),
                TraceCategory::Info,
            );
        } else {
            self.push_trace(
                format!("{count} crossings detected - keep trying!"),
                TraceCategory::Warning,
            );
        }
        Some(report)
    }

    // -- Guided solution playback -------------------------------------------

    /// Enter guided mode and apply step 0. None (and no state change) when
    /// the current graph carries no Solution.
    pub fn start_guided(&mut self) -> Option<StepInfo> {
        self.graph.as_ref()?;
        if self.solution.as_ref().map_or(true, |s| s.steps.is_empty()) {
            return None;
        }
        self.guided = true;
        self.step = 0;
        self.apply_step();
        let name = self.graph.as_ref().map(|g| g.family.display_name());
        if let Some(name) = name {
            self.push_trace(
                format!("Starting step-by-step solution for {name}"),
                TraceCategory::Info,
            );
        }
        self.current_step()
    }

    /// Advance playback; clamps at the last step (no wraparound). The target
    /// step's positions are re-applied and crossings recomputed.
    pub fn next_step(&mut self) -> Option<StepInfo> {
        if !self.guided {
            return None;
        }
        let total = self.solution.as_ref()?.steps.len();
        if self.step + 1 < total {
            self.step += 1;
        }
        self.apply_step();
        self.current_step()
    }

    /// Retreat playback; clamps at step 0.
    pub fn previous_step(&mut self) -> Option<StepInfo> {
        if !self.guided {
            return None;
        }
        self.solution.as_ref()?;
        self.step = self.step.saturating_sub(1);
        self.apply_step();
        self.current_step()
    }

    /// Leave guided mode. Last-applied step positions remain.
    pub fn exit_guided(&mut self) {
        if !self.guided {
            return;
        }
        self.guided = false;
        self.push_trace(
            "Exited step-by-step solution mode".to_string(),
            TraceCategory::Info,
        );
    }

    pub fn current_step(&self) -> Option<StepInfo> {
        let solution = self.solution.as_ref()?;
        let step = solution.steps.get(self.step)?;
        Some(StepInfo {
            ordinal: step.ordinal,
            total: solution.steps.len(),
            title: step.title.to_string(),
            description: step.description.to_string(),
            message: step.message.to_string(),
        })
    }

    fn apply_step(&mut self) {
        let positions = match self
            .solution
            .as_ref()
            .and_then(|s| s.steps.get(self.step))
        {
            Some(step) => step.positions.clone(),
            None => return,
        };
        if let Some(g) = self.graph.as_mut() {
            // A step may cover only a prefix; the rest keep their positions.
            for (i, p) in positions.iter().enumerate().take(g.vertices.len()) {
                g.vertices[i].x = p.x;
                g.vertices[i].y = p.y;
            }
        }
        self.recompute();
    }

    // -- Learning trace -----------------------------------------------------

    /// Append-only narrative log, oldest first.
    pub fn learning_trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    /// Clears the trace without touching the loaded graph.
    pub fn clear_learning_trace(&mut self) {
        self.trace.clear();
    }

    fn push_trace(&mut self, message: String, category: TraceCategory) {
        let timestamp_ms = (self.clock)();
        self.trace.push(TraceEntry {
            message,
            category,
            timestamp_ms,
        });
    }

    // -- Snapshot -----------------------------------------------------------

    /// Full state snapshot for the presentation layer to poll.
    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self)
    }

    fn recompute(&mut self) {
        self.crossings = match self.graph.as_ref() {
            Some(g) => detect_crossings(g),
            None => Vec::new(),
        };
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
