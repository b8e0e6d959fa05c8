use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use log::{debug, warn};
use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;

use crate::graph::Graph;
use crate::algorithm::{ShortestPath, ShortestPathAlgorithm, ShortestPathTree};
use crate::{Error, Result};

/// Above this many vertices the enumeration gets slow enough to warn about
const LARGE_GRAPH_WARNING: usize = 16;

/// Exhaustive shortest paths: enumerates every simple path between two
/// vertices and keeps the cheapest.
///
/// Runs in exponential time. It exists to cross-check [`Dijkstra`] on small
/// graphs.
///
/// [`Dijkstra`]: crate::algorithm::dijkstra::Dijkstra
#[derive(Debug, Default, Clone, Copy)]
pub struct BruteForce;

/// Cheapest path found so far
type Best<'g, W> = Option<(Vec<&'g str>, W)>;

impl BruteForce {
    pub fn new() -> Self {
        BruteForce
    }

    fn search<'g, W, G>(&self, graph: &'g G, source: &str, target: &str) -> Result<Best<'g, W>>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        let source = graph
            .vertices()
            .find(|vertex| *vertex == source)
            .ok_or_else(|| Error::UnknownVertex(source.to_string()))?;
        if !graph.has_vertex(target) {
            return Err(Error::UnknownVertex(target.to_string()));
        }
        if graph.vertex_count() > LARGE_GRAPH_WARNING {
            warn!(
                "brute force search over {} vertices may take a long time",
                graph.vertex_count()
            );
        }

        let mut best = None;
        let mut path = vec![source];
        let mut on_path = HashSet::from([source]);
        Self::extend(graph, target, W::zero(), &mut path, &mut on_path, &mut best);

        Ok(best)
    }

    fn extend<'g, W, G>(
        graph: &'g G,
        target: &str,
        cost: W,
        path: &mut Vec<&'g str>,
        on_path: &mut HashSet<&'g str>,
        best: &mut Best<'g, W>,
    ) where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        let current = path[path.len() - 1];
        if current == target {
            let improves = match best {
                Some((_, best_cost)) => OrderedFloat(cost) < OrderedFloat(*best_cost),
                None => true,
            };
            if improves {
                *best = Some((path.clone(), cost));
            }
            return;
        }

        for (neighbor, weight) in graph.neighbors(current) {
            if on_path.insert(neighbor) {
                path.push(neighbor);
                Self::extend(graph, target, cost + weight, path, on_path, best);
                path.pop();
                on_path.remove(neighbor);
            }
        }
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BruteForce
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "BruteForce"
    }

    fn shortest_path(
        &self,
        graph: &G,
        source: &str,
        target: &str,
    ) -> Result<Option<ShortestPath<W>>> {
        let best = self.search(graph, source, target)?;

        Ok(best.map(|(path, distance)| ShortestPath {
            path: path.into_iter().map(str::to_string).collect(),
            distance,
        }))
    }

    fn shortest_path_tree(&self, graph: &G, source: &str) -> Result<ShortestPathTree<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::UnknownVertex(source.to_string()));
        }

        let mut distances = HashMap::with_capacity(graph.vertex_count());
        let mut predecessors = HashMap::with_capacity(graph.vertex_count());

        for vertex in graph.vertices() {
            match self.search(graph, source, vertex)? {
                Some((path, distance)) => {
                    let previous = path
                        .len()
                        .checked_sub(2)
                        .map(|index| path[index].to_string());
                    distances.insert(vertex.to_string(), distance);
                    predecessors.insert(vertex.to_string(), previous);
                }
                None => {
                    distances.insert(vertex.to_string(), W::infinity());
                    predecessors.insert(vertex.to_string(), None);
                }
            }
        }

        debug!("brute force tree from {} covers {} vertices", source, distances.len());

        Ok(ShortestPathTree {
            source: source.to_string(),
            distances,
            predecessors,
        })
    }
}
