//! Heap SSSP - Dijkstra shortest paths on undirected weighted graphs
//!
//! The frontier is a hand-rolled, array-backed binary min-heap. Two invariants
//! hold throughout a search: heap order inside the queue (a parent's priority
//! never exceeds its children's) and finality of a vertex's distance once it is
//! dequeued with a current priority.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    brute_force::BruteForce, dijkstra::Dijkstra, FrontierStrategy, SearchStats, ShortestPath,
    ShortestPathAlgorithm, ShortestPathTree,
};
/// Re-export main types for convenient use
pub use data_structures::{HeapEntry, IndexedMinPriorityQueue, MinPriorityQueue};
pub use graph::weighted::WeightedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Cannot add edge from {from} to {to}: both vertices must be registered first")]
    EdgeRegistrationFailed { from: String, to: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid graph document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
