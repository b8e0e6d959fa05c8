//! JSON representation of an undirected weighted graph.
//!
//! ```json
//! {
//!   "vertices": ["a", "b"],
//!   "edges": [{ "from": "a", "to": "b", "weight": 4.0 }]
//! }
//! ```

use log::debug;
use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::fs;
use std::path::Path;

use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::weighted::WeightedGraph;
use crate::Result;

/// An edge as written in a graph document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Serializable form of a [`WeightedGraph`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a document from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading graph document from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds the graph. Edges must only name vertices listed in `vertices`.
    pub fn into_graph(self) -> Result<WeightedGraph<f64>> {
        let mut graph = WeightedGraph::with_capacity(self.vertices.len());
        for vertex in &self.vertices {
            graph.add_vertex(vertex);
        }
        for edge in &self.edges {
            graph.add_edge(&edge.from, &edge.to, edge.weight)?;
        }

        debug!(
            "built graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl<W> WeightedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Converts the graph into its document form, writing each undirected
    /// edge once
    pub fn to_document(&self) -> GraphDocument {
        let vertices: Vec<String> = self.vertices().map(str::to_string).collect();
        let mut edges = Vec::with_capacity(self.edge_count());

        // Each edge appears in both endpoint lists; keep the copy owned by the
        // endpoint registered first. Self-loops appear twice in one list.
        let position: std::collections::HashMap<&str, usize> = self
            .vertices()
            .enumerate()
            .map(|(index, vertex)| (vertex, index))
            .collect();
        for from in self.vertices() {
            let mut self_loops = 0usize;
            for (to, weight) in self.neighbors(from) {
                let keep = match position[from].cmp(&position[to]) {
                    std::cmp::Ordering::Less => true,
                    std::cmp::Ordering::Greater => false,
                    std::cmp::Ordering::Equal => {
                        self_loops += 1;
                        self_loops % 2 == 1
                    }
                };
                if keep {
                    edges.push(EdgeRecord {
                        from: from.to_string(),
                        to: to.to_string(),
                        weight: weight.to_f64().unwrap_or(f64::NAN),
                    });
                }
            }
        }

        GraphDocument { vertices, edges }
    }
}
