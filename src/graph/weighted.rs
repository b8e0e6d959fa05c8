use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use log::trace;
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

/// An undirected weighted graph using adjacency lists
///
/// Every undirected edge is stored as two directed entries, one in each
/// endpoint's list. Duplicate edges and self-loops are stored as given.
#[derive(Debug, Clone)]
pub struct WeightedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Vertex keys in registration order
    order: Vec<String>,

    /// Adjacency lists: vertex -> [(neighbor, weight)]
    adjacency: HashMap<String, Vec<(String, W)>>,

    /// Number of successful `add_edge` calls
    edge_count: usize,
}

impl<W> WeightedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        WeightedGraph {
            order: Vec::new(),
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates an empty graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        WeightedGraph {
            order: Vec::with_capacity(vertices),
            adjacency: HashMap::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Builds a graph from vertex keys and `(from, to, weight)` triples
    pub fn from_edges<'a, V, E>(vertices: V, edges: E) -> Result<Self>
    where
        V: IntoIterator<Item = &'a str>,
        E: IntoIterator<Item = (&'a str, &'a str, W)>,
    {
        let mut graph = WeightedGraph::new();
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Number of adjacency entries of a vertex, `None` if it is unknown
    pub fn degree(&self, vertex: &str) -> Option<usize> {
        self.adjacency.get(vertex).map(Vec::len)
    }

    /// Returns true if any stored edge has a negative weight.
    /// Shortest paths over such a graph are undefined.
    pub fn has_negative_weight(&self) -> bool {
        self.adjacency
            .values()
            .flatten()
            .any(|(_, weight)| *weight < W::zero())
    }
}

impl<W> Default for WeightedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for WeightedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.order.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.order.iter().map(String::as_str))
    }

    fn neighbors(&self, vertex: &str) -> Box<dyn Iterator<Item = (&str, W)> + '_> {
        if let Some(edges) = self.adjacency.get(vertex) {
            Box::new(edges.iter().map(|(neighbor, weight)| (neighbor.as_str(), *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &str) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn has_edge(&self, from: &str, to: &str) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    fn get_edge_weight(&self, from: &str, to: &str) -> Option<W> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|(neighbor, _)| neighbor == to)
            .map(|(_, weight)| *weight)
    }
}

impl<W> MutableGraph<W> for WeightedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self, vertex: &str) -> bool {
        if self.adjacency.contains_key(vertex) {
            return false;
        }

        self.adjacency.insert(vertex.to_string(), Vec::new());
        self.order.push(vertex.to_string());
        true
    }

    fn add_edge(&mut self, from: &str, to: &str, weight: W) -> Result<()> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::EdgeRegistrationFailed {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        trace!("adding edge {} -- {} ({:?})", from, to, weight);
        if let Some(edges) = self.adjacency.get_mut(from) {
            edges.push((to.to_string(), weight));
        }
        if let Some(edges) = self.adjacency.get_mut(to) {
            edges.push((from.to_string(), weight));
        }
        self.edge_count += 1;

        Ok(())
    }
}
