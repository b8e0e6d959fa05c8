//! Parallel evaluation of many independent queries against one graph.
//!
//! The graph is only borrowed, never mutated. Every query builds its own
//! distance table, predecessor map, and frontier, so no state is shared
//! between worker threads.

use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};
use rayon::prelude::*;

use crate::algorithm::{ShortestPath, ShortestPathAlgorithm, ShortestPathTree};
use crate::graph::Graph;
use crate::Result;

/// Solves `(source, target)` queries in parallel. Results are returned in
/// query order.
pub fn solve_batch<W, G, A, Q>(
    algorithm: &A,
    graph: &G,
    queries: &[(Q, Q)],
) -> Vec<Result<Option<ShortestPath<W>>>>
where
    W: Float + Zero + Debug + Copy + Send,
    G: Graph<W> + Sync,
    A: ShortestPathAlgorithm<W, G> + Sync,
    Q: AsRef<str> + Sync,
{
    debug!("{}: solving {} queries in parallel", algorithm.name(), queries.len());

    queries
        .par_iter()
        .map(|(source, target)| algorithm.shortest_path(graph, source.as_ref(), target.as_ref()))
        .collect()
}

/// Builds one shortest-path tree per source in parallel, in source order
pub fn solve_trees<W, G, A, Q>(
    algorithm: &A,
    graph: &G,
    sources: &[Q],
) -> Vec<Result<ShortestPathTree<W>>>
where
    W: Float + Zero + Debug + Copy + Send,
    G: Graph<W> + Sync,
    A: ShortestPathAlgorithm<W, G> + Sync,
    Q: AsRef<str> + Sync,
{
    debug!("{}: building {} trees in parallel", algorithm.name(), sources.len());

    sources
        .par_iter()
        .map(|source| algorithm.shortest_path_tree(graph, source.as_ref()))
        .collect()
}
