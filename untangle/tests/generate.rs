// Family generators: counts, structure, labels, and the random family's
// connectivity guarantees.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use untangle::algorithms::crossings::detect_crossings;
use untangle::algorithms::generate::{generate, label_for, GenConfig};
use untangle::model::{Graph, GraphFamily, Solution};
use untangle::Extents;

fn gen(family: GraphFamily, cfg: &GenConfig, seed: u64) -> (Graph, Option<Solution>) {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(family, Extents::default(), cfg, &mut rng)
}

fn degree(g: &Graph, v: u32) -> usize {
    g.edges.iter().filter(|e| e.touches(v)).count()
}

#[test]
fn k4_is_complete_with_solution() {
    let (g, sol) = gen(GraphFamily::CompleteK4, &GenConfig::default(), 0);
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.edge_count(), 6);
    for i in 0..4 {
        for j in (i + 1)..4 {
            assert!(g.has_edge(i, j));
        }
    }
    let sol = sol.unwrap();
    assert_eq!(sol.steps.len(), 3);
    assert_eq!(sol.target.len(), 4);
}

#[test]
fn k5_is_complete_without_solution() {
    let (g, sol) = gen(GraphFamily::CompleteK5, &GenConfig::default(), 0);
    assert_eq!(g.vertex_count(), 5);
    assert_eq!(g.edge_count(), 10);
    assert!(sol.is_none());
    // Pentagon with all chords: crossings from the start.
    assert!(!detect_crossings(&g).is_empty());
}

#[test]
fn k33_is_bipartite() {
    let (g, sol) = gen(GraphFamily::CompleteBipartite33, &GenConfig::default(), 0);
    assert_eq!(g.vertex_count(), 6);
    assert_eq!(g.edge_count(), 9);
    assert!(sol.is_none());
    for i in 0..3u32 {
        for j in 3..6u32 {
            assert!(g.has_edge(i, j));
        }
    }
    for e in &g.edges {
        // Never within a group.
        assert!((e.a < 3) != (e.b < 3));
    }
    assert!(!detect_crossings(&g).is_empty());
}

#[test]
fn cube_is_three_regular_with_solution() {
    let (g, sol) = gen(GraphFamily::Cube, &GenConfig::default(), 0);
    assert_eq!(g.vertex_count(), 8);
    assert_eq!(g.edge_count(), 12);
    for v in 0..8u32 {
        assert_eq!(degree(&g, v), 3);
    }
    let sol = sol.unwrap();
    assert_eq!(sol.steps.len(), 3);
    // The oblique projection it starts from is tangled.
    assert!(!detect_crossings(&g).is_empty());
}

#[test]
fn solution_targets_are_planar_layouts() {
    for family in [GraphFamily::CompleteK4, GraphFamily::Cube] {
        let (mut g, sol) = gen(family, &GenConfig::default(), 0);
        let sol = sol.unwrap();
        for (i, p) in sol.target.iter().enumerate() {
            g.set_position(i as u32, p.x, p.y);
        }
        assert!(
            detect_crossings(&g).is_empty(),
            "{:?} target layout should be crossing-free",
            family
        );
    }
}

#[test]
fn labels_wrap_after_z() {
    assert_eq!(label_for(0), "A");
    assert_eq!(label_for(25), "Z");
    assert_eq!(label_for(26), "A1");
    assert_eq!(label_for(27), "B1");
    assert_eq!(label_for(52), "A2");
}

fn assert_connected(g: &Graph) {
    let n = g.vertex_count();
    if n == 0 {
        return;
    }
    let mut seen = vec![false; n];
    let mut stack = vec![0u32];
    seen[0] = true;
    while let Some(v) = stack.pop() {
        for e in &g.edges {
            let other = if e.a == v {
                e.b
            } else if e.b == v {
                e.a
            } else {
                continue;
            };
            if !seen[other as usize] {
                seen[other as usize] = true;
                stack.push(other);
            }
        }
    }
    assert!(seen.iter().all(|&s| s), "random graph must be connected");
}

#[test]
fn random_graphs_are_connected_and_simple() {
    let extents = Extents::default();
    let margin = untangle::VERTEX_RADIUS + 10.0;
    for seed in 0..20 {
        let cfg = GenConfig {
            vertex_count: 7,
            edge_density: 0.5,
        };
        let (g, sol) = gen(GraphFamily::Random, &cfg, seed);
        assert!(sol.is_none());
        assert_eq!(g.vertex_count(), 7);
        assert!(g.edge_count() >= 6);
        assert_connected(&g);

        let mut seen = HashSet::new();
        for e in &g.edges {
            assert_ne!(e.a, e.b);
            assert!(seen.insert((e.a.min(e.b), e.a.max(e.b))), "duplicate edge");
        }
        for v in &g.vertices {
            assert!(v.x >= margin && v.x <= extents.width - margin);
            assert!(v.y >= margin && v.y <= extents.height - margin);
        }
    }
}

#[test]
fn random_density_zero_yields_spanning_tree() {
    let cfg = GenConfig {
        vertex_count: 8,
        edge_density: 0.0,
    };
    let (g, _) = gen(GraphFamily::Random, &cfg, 3);
    assert_eq!(g.edge_count(), 7);
    assert_connected(&g);
}

#[test]
fn random_single_vertex() {
    let cfg = GenConfig {
        vertex_count: 1,
        edge_density: 1.0,
    };
    let (g, _) = gen(GraphFamily::Random, &cfg, 0);
    assert_eq!(g.vertex_count(), 1);
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn same_seed_same_random_graph() {
    let cfg = GenConfig {
        vertex_count: 6,
        edge_density: 0.6,
    };
    let (a, _) = gen(GraphFamily::Random, &cfg, 42);
    let (b, _) = gen(GraphFamily::Random, &cfg, 42);
    assert_eq!(a.edge_count(), b.edge_count());
    for (ea, eb) in a.edges.iter().zip(&b.edges) {
        assert_eq!((ea.a, ea.b), (eb.a, eb.b));
    }
    for (va, vb) in a.vertices.iter().zip(&b.vertices) {
        assert_eq!(va.position(), vb.position());
    }
}
