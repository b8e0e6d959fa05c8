use crate::graph::{Graph, MutableGraph, WeightedGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Vertex key used by the generators for the `index`-th vertex
pub fn vertex_name(index: usize) -> String {
    format!("v{}", index)
}

/// The six-vertex graph `a..f` used throughout the documentation and tests.
/// The shortest `a` to `e` path is `a, c, d, f, e` with distance 6.
pub fn sample_graph() -> WeightedGraph<f64> {
    let mut graph = WeightedGraph::with_capacity(6);
    for vertex in ["a", "b", "c", "d", "e", "f"] {
        graph.add_vertex(vertex);
    }

    let edges = [
        ("a", "b", 4.0),
        ("a", "c", 2.0),
        ("b", "e", 3.0),
        ("c", "d", 2.0),
        ("c", "f", 4.0),
        ("d", "e", 3.0),
        ("d", "f", 1.0),
        ("e", "f", 1.0),
    ];
    for (from, to, weight) in edges {
        // Both endpoints were registered above
        let _ = graph.add_edge(from, to, weight);
    }

    graph
}

/// Generates a connected random graph with `n` vertices named `v0..v{n-1}`.
///
/// A random spanning tree guarantees connectivity, then roughly
/// `extra_edges` additional edges are sprinkled on top. Weights are drawn
/// from `[1, max_weight]`. The same seed always yields the same graph.
pub fn generate_connected(
    n: usize,
    extra_edges: usize,
    max_weight: f64,
    seed: u64,
) -> WeightedGraph<OrderedFloat<f64>> {
    assert!(max_weight >= 1.0, "max_weight must be at least 1");

    let mut graph = WeightedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    let names: Vec<String> = (0..n).map(vertex_name).collect();
    for name in &names {
        graph.add_vertex(name);
    }

    // Spanning tree: attach every vertex to a random earlier one
    for i in 1..n {
        let j = rng.gen_range(0..i);
        let weight = OrderedFloat(rng.gen_range(1.0..=max_weight));
        let _ = graph.add_edge(&names[i], &names[j], weight);
    }

    if n > 1 {
        for _ in 0..extra_edges {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            // Avoid self-loops and duplicate edges
            if u != v && !graph.has_edge(&names[u], &names[v]) {
                let weight = OrderedFloat(rng.gen_range(1.0..=max_weight));
                let _ = graph.add_edge(&names[u], &names[v], weight);
            }
        }
    }

    graph
}

/// Generates a random graph that may be disconnected: each of the
/// `n * (n - 1) / 2` vertex pairs is joined with probability `density`.
/// Weights are drawn from `[1, max_weight]`.
pub fn generate_sparse(
    n: usize,
    density: f64,
    max_weight: f64,
    seed: u64,
) -> WeightedGraph<OrderedFloat<f64>> {
    assert!(max_weight >= 1.0, "max_weight must be at least 1");

    let mut graph = WeightedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    let names: Vec<String> = (0..n).map(vertex_name).collect();
    for name in &names {
        graph.add_vertex(name);
    }

    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen_bool(density.clamp(0.0, 1.0)) {
                let weight = OrderedFloat(rng.gen_range(1.0..=max_weight));
                let _ = graph.add_edge(&names[u], &names[v], weight);
            }
        }
    }

    graph
}

/// Generates a `width` x `height` grid with unit-weight horizontal and
/// vertical edges. Vertex `(x, y)` is named `"x,y"`.
pub fn generate_grid(width: usize, height: usize) -> WeightedGraph<f64> {
    let mut graph = WeightedGraph::with_capacity(width * height);
    let name = |x: usize, y: usize| format!("{},{}", x, y);

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex(&name(x, y));
        }
    }

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                let _ = graph.add_edge(&name(x, y), &name(x + 1, y), 1.0);
            }
            if y + 1 < height {
                let _ = graph.add_edge(&name(x, y), &name(x, y + 1), 1.0);
            }
        }
    }

    graph
}
