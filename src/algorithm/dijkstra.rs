use std::collections::HashMap;
use std::fmt::Debug;
use log::{debug, warn};
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{ShortestPath, ShortestPathAlgorithm, ShortestPathTree};
use crate::data_structures::{HeapEntry, IndexedMinPriorityQueue, MinPriorityQueue};
use crate::{Error, Result};

/// How the search frontier handles a vertex whose distance improves while
/// it is still queued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontierStrategy {
    /// Queue the vertex again with the lower priority and let the old entry
    /// go stale
    #[default]
    LazyDeletion,
    /// Lower the priority of the queued entry in place
    DecreaseKey,
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries taken off the frontier
    pub dequeued: usize,
    /// Dequeued entries ignored because a shorter distance was already known
    pub stale_skipped: usize,
    /// Edges examined while relaxing
    pub edges_scanned: usize,
    /// Successful distance improvements
    pub relaxations: usize,
    /// Insertions into (or priority decreases on) the frontier
    pub enqueued: usize,
}

/// The queue backing one search
enum Frontier<'g, W> {
    Lazy(MinPriorityQueue<&'g str, W>),
    Indexed(IndexedMinPriorityQueue<&'g str, W>),
}

impl<'g, W> Frontier<'g, W>
where
    W: Float + Zero + Debug + Copy,
{
    fn new(strategy: FrontierStrategy, capacity: usize) -> Self {
        match strategy {
            FrontierStrategy::LazyDeletion => {
                Frontier::Lazy(MinPriorityQueue::with_capacity(capacity))
            }
            FrontierStrategy::DecreaseKey => Frontier::Indexed(IndexedMinPriorityQueue::new()),
        }
    }

    fn push(&mut self, vertex: &'g str, priority: W) -> bool {
        match self {
            Frontier::Lazy(queue) => {
                queue.enqueue(vertex, priority);
                true
            }
            Frontier::Indexed(queue) => queue.push_or_decrease(vertex, priority),
        }
    }

    fn pop(&mut self) -> Option<HeapEntry<&'g str, W>> {
        match self {
            Frontier::Lazy(queue) => queue.dequeue(),
            Frontier::Indexed(queue) => queue.pop(),
        }
    }
}

/// State left behind by one run of the main loop
struct Search<'g, W> {
    source: &'g str,
    distances: HashMap<&'g str, W>,
    predecessors: HashMap<&'g str, Option<&'g str>>,
    /// Set when the run stopped at the requested target
    reached: Option<&'g str>,
    stats: SearchStats,
}

impl<'g, W> Search<'g, W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Follows predecessors back from `target` and reverses the result
    fn path_to(&self, target: &'g str) -> Option<Vec<String>> {
        let mut path = vec![target];
        let mut current = target;

        while let Some(&Some(previous)) = self.predecessors.get(current) {
            // Only possible when negative weights corrupted the predecessor map
            if path.len() > self.predecessors.len() {
                warn!("predecessor chain from {} does not terminate", target);
                return None;
            }
            path.push(previous);
            current = previous;
        }

        if current != self.source {
            return None;
        }

        path.reverse();
        Some(path.into_iter().map(str::to_string).collect())
    }
}

/// Dijkstra's algorithm over a binary min-heap frontier
///
/// By default the frontier uses lazy deletion: a vertex is queued again each
/// time its distance improves, and outdated entries are skipped when they
/// surface.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    frontier: FrontierStrategy,
    skip_stale: bool,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            frontier: FrontierStrategy::LazyDeletion,
            skip_stale: true,
        }
    }

    /// Set the frontier strategy
    pub fn with_frontier(mut self, frontier: FrontierStrategy) -> Self {
        self.frontier = frontier;
        self
    }

    /// Enable or disable skipping of stale frontier entries.
    ///
    /// When disabled, a stale entry is relaxed again from the vertex's
    /// current distance. Results are unchanged; only redundant edge scans
    /// are added.
    pub fn with_stale_skipping(mut self, skip_stale: bool) -> Self {
        self.skip_stale = skip_stale;
        self
    }

    pub fn frontier(&self) -> FrontierStrategy {
        self.frontier
    }

    pub fn skips_stale(&self) -> bool {
        self.skip_stale
    }

    /// Single-target search that also reports search counters
    pub fn shortest_path_with_stats<W, G>(
        &self,
        graph: &G,
        source: &str,
        target: &str,
    ) -> Result<(Option<ShortestPath<W>>, SearchStats)>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        let search = self.run(graph, source, Some(target))?;

        let path = search.reached.and_then(|reached| {
            search.path_to(reached).map(|path| ShortestPath {
                path,
                distance: search.distances[reached],
            })
        });

        Ok((path, search.stats))
    }

    /// Whole-graph search that also reports search counters
    pub fn shortest_path_tree_with_stats<W, G>(
        &self,
        graph: &G,
        source: &str,
    ) -> Result<(ShortestPathTree<W>, SearchStats)>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        let search = self.run(graph, source, None)?;

        let tree = ShortestPathTree {
            source: search.source.to_string(),
            distances: search
                .distances
                .iter()
                .map(|(vertex, distance)| (vertex.to_string(), *distance))
                .collect(),
            predecessors: search
                .predecessors
                .iter()
                .map(|(vertex, previous)| (vertex.to_string(), previous.map(str::to_string)))
                .collect(),
        };

        Ok((tree, search.stats))
    }

    /// Runs the main loop, stopping early once `target` is dequeued
    fn run<'g, W, G>(
        &self,
        graph: &'g G,
        source: &str,
        target: Option<&str>,
    ) -> Result<Search<'g, W>>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::UnknownVertex(source.to_string()));
        }
        if let Some(target) = target {
            if !graph.has_vertex(target) {
                return Err(Error::UnknownVertex(target.to_string()));
            }
        }

        let n = graph.vertex_count();

        // Initialize distances and predecessors
        let mut distances: HashMap<&'g str, W> = HashMap::with_capacity(n);
        let mut predecessors: HashMap<&'g str, Option<&'g str>> = HashMap::with_capacity(n);
        let mut adjacency_entries = 0;
        for vertex in graph.vertices() {
            distances.insert(vertex, W::infinity());
            predecessors.insert(vertex, None);
            adjacency_entries += graph.neighbors(vertex).count();
        }

        let (&source, _) = distances
            .get_key_value(source)
            .ok_or_else(|| Error::UnknownVertex(source.to_string()))?;
        distances.insert(source, W::zero());

        let mut stats = SearchStats::default();
        let mut reached = None;
        let mut negative_seen = false;

        let mut frontier = Frontier::new(self.frontier, n);
        frontier.push(source, W::zero());
        stats.enqueued += 1;

        // Main Dijkstra loop
        while let Some(HeapEntry { value: current, priority }) = frontier.pop() {
            // Non-negative weights improve each adjacency entry at most once
            if stats.relaxations > adjacency_entries {
                warn!(
                    "dijkstra from {}: giving up after {} relaxations (negative weights?)",
                    source, stats.relaxations
                );
                break;
            }

            stats.dequeued += 1;

            let best = distances.get(current).copied().unwrap_or_else(W::infinity);

            // A shorter path to `current` was already found and expanded
            if self.skip_stale && priority > best {
                stats.stale_skipped += 1;
                continue;
            }

            if target == Some(current) {
                reached = Some(current);
                break;
            }

            // Relax all incident edges
            for (neighbor, weight) in graph.neighbors(current) {
                stats.edges_scanned += 1;
                if !negative_seen && weight < W::zero() {
                    warn!("negative weight on edge {} -- {}", current, neighbor);
                    negative_seen = true;
                }
                let candidate = best + weight;

                let known = distances.get(neighbor).copied().unwrap_or_else(W::infinity);
                if candidate < known {
                    distances.insert(neighbor, candidate);
                    predecessors.insert(neighbor, Some(current));
                    stats.relaxations += 1;
                    if frontier.push(neighbor, candidate) {
                        stats.enqueued += 1;
                    }
                }
            }
        }

        debug!(
            "dijkstra from {} ({:?}, skip_stale={}): reached={:?} stats={:?}",
            source, self.frontier, self.skip_stale, reached, stats
        );

        Ok(Search {
            source,
            distances,
            predecessors,
            reached,
            stats,
        })
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn shortest_path(
        &self,
        graph: &G,
        source: &str,
        target: &str,
    ) -> Result<Option<ShortestPath<W>>> {
        self.shortest_path_with_stats(graph, source, target)
            .map(|(path, _)| path)
    }

    fn shortest_path_tree(&self, graph: &G, source: &str) -> Result<ShortestPathTree<W>> {
        self.shortest_path_tree_with_stats(graph, source)
            .map(|(tree, _)| tree)
    }
}
