use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use log::warn;
use num_traits::{Float, Zero};
use crate::graph::Graph;
use crate::Result;

/// A shortest path between two vertices
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<W> {
    /// Vertex keys from source to target, both included
    pub path: Vec<String>,

    /// Total weight of the path
    pub distance: W,
}

impl<W: Copy> ShortestPath<W> {
    /// First vertex on the path, `None` for an empty path
    pub fn source(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    /// Last vertex on the path, `None` for an empty path
    pub fn target(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Distances and predecessors from one source to every vertex of a graph
#[derive(Debug, Clone)]
pub struct ShortestPathTree<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Source vertex key
    pub source: String,

    /// Best distance per vertex; unreachable vertices stay at infinity
    pub distances: HashMap<String, W>,

    /// Previous vertex on the best path; `None` for the source and for
    /// unreachable vertices
    pub predecessors: HashMap<String, Option<String>>,
}

impl<W> ShortestPathTree<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distance to `vertex`: `None` if the key is not in the graph,
    /// infinity if it is unreachable
    pub fn distance(&self, vertex: &str) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    pub fn is_reachable(&self, vertex: &str) -> bool {
        self.distance(vertex).map_or(false, |d| d.is_finite())
    }

    pub fn predecessor(&self, vertex: &str) -> Option<&str> {
        self.predecessors.get(vertex)?.as_deref()
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }

    /// Rebuilds the path from the source to `target` by walking predecessors
    pub fn path_to(&self, target: &str) -> Option<ShortestPath<W>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        let mut visited = HashSet::new();

        // Build path in reverse order
        while current != self.source {
            if !visited.insert(current) {
                warn!("cycle detected in predecessor map at vertex {}", current);
                return None;
            }

            path.push(current.to_string());
            current = self.predecessor(current)?;
        }

        path.push(self.source.clone());
        path.reverse();

        Some(ShortestPath {
            path,
            distance: self.distances[target],
        })
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Shortest path from `source` to `target`.
    ///
    /// Fails with `UnknownVertex` if either key is missing from the graph;
    /// returns `Ok(None)` when the target is unreachable.
    fn shortest_path(&self, graph: &G, source: &str, target: &str)
        -> Result<Option<ShortestPath<W>>>;

    /// Shortest distances from `source` to every vertex of the graph
    fn shortest_path_tree(&self, graph: &G, source: &str) -> Result<ShortestPathTree<W>>;
}
