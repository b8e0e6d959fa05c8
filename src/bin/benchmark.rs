use std::env;
use std::process;
use std::time::{Duration, Instant};
use heap_sssp::algorithm::{solve_batch, SearchStats};
use heap_sssp::graph::generators::{generate_connected, vertex_name};
use heap_sssp::graph::{Graph, WeightedGraph};
use heap_sssp::{Dijkstra, FrontierStrategy};
use ordered_float::OrderedFloat;
use rand::Rng;

const USAGE: &str = "usage: benchmark [vertices >= 1] [edge_factor] [queries]";

/// Benchmark settings, overridable by positional arguments:
/// `benchmark [vertices] [edge_factor] [queries]`
#[derive(Debug, Clone)]
struct BenchmarkConfig {
    vertices: usize,
    edge_factor: f64,
    queries: usize,
    seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            vertices: 50_000,
            edge_factor: 2.0,
            queries: 64,
            seed: 42,
        }
    }
}

impl BenchmarkConfig {
    /// Builds a config from the arguments after the program name. Missing or
    /// unparsable values fall back to the defaults; zero vertices is rejected.
    fn from_args(args: &[String]) -> Result<Self, String> {
        let defaults = Self::default();
        let config = Self {
            vertices: args.first().and_then(|a| a.parse().ok()).unwrap_or(defaults.vertices),
            edge_factor: args.get(1).and_then(|a| a.parse().ok()).unwrap_or(defaults.edge_factor),
            queries: args.get(2).and_then(|a| a.parse().ok()).unwrap_or(defaults.queries),
            seed: defaults.seed,
        };

        if config.vertices == 0 {
            return Err(format!("vertices must be at least 1\n{}", USAGE));
        }
        Ok(config)
    }
}

// Table label for a configured search
fn variant_label(dijkstra: &Dijkstra) -> String {
    let frontier = match dijkstra.frontier() {
        FrontierStrategy::LazyDeletion => "lazy",
        FrontierStrategy::DecreaseKey => "decrease-key",
    };
    let stale = if dijkstra.skips_stale() {
        "skip stale"
    } else {
        "relax stale"
    };
    format!("{}, {}", frontier, stale)
}

// Runs every query sequentially, returning total time and summed counters
fn benchmark_variant(
    dijkstra: &Dijkstra,
    graph: &WeightedGraph<OrderedFloat<f64>>,
    queries: &[(String, String)],
) -> Duration {
    let mut totals = SearchStats::default();
    let mut found = 0;

    let start = Instant::now();
    for (source, target) in queries {
        match dijkstra.shortest_path_with_stats(graph, source, target) {
            Ok((path, stats)) => {
                found += usize::from(path.is_some());
                totals.dequeued += stats.dequeued;
                totals.stale_skipped += stats.stale_skipped;
                totals.edges_scanned += stats.edges_scanned;
                totals.relaxations += stats.relaxations;
            }
            Err(e) => eprintln!("  query {} -> {} failed: {}", source, target, e),
        }
    }
    let duration = start.elapsed();

    println!(
        "{:<28} | {:>10.2} | {:>6} | {:>10} | {:>8} | {:>12}",
        variant_label(dijkstra),
        duration.as_secs_f64() * 1000.0,
        found,
        totals.dequeued,
        totals.stale_skipped,
        totals.edges_scanned
    );

    duration
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();
    let config = match BenchmarkConfig::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    };

    println!("=====================================================");
    println!("Benchmark: Dijkstra frontier strategies");
    println!("{:?}", config);
    println!("=====================================================");

    let extra_edges = (config.edge_factor * config.vertices as f64) as usize;
    let graph = generate_connected(config.vertices, extra_edges, 100.0, config.seed);
    println!(
        "Graph has {} vertices and {} edges\n",
        graph.vertex_count(),
        graph.edge_count()
    );

    let mut rng = rand::thread_rng();
    let queries: Vec<(String, String)> = (0..config.queries)
        .map(|_| {
            (
                vertex_name(rng.gen_range(0..config.vertices)),
                vertex_name(rng.gen_range(0..config.vertices)),
            )
        })
        .collect();

    println!(
        "{:<28} | {:>10} | {:>6} | {:>10} | {:>8} | {:>12}",
        "Variant", "Time (ms)", "Found", "Dequeued", "Stale", "Edges"
    );
    println!("-----------------------------------------------------");

    let variants = [
        Dijkstra::new(),
        Dijkstra::new().with_stale_skipping(false),
        Dijkstra::new().with_frontier(FrontierStrategy::DecreaseKey),
    ];

    let mut times = Vec::new();
    for dijkstra in &variants {
        times.push(benchmark_variant(dijkstra, &graph, &queries));
    }

    let batch = Dijkstra::new();
    let start = Instant::now();
    let results = solve_batch(&batch, &graph, &queries);
    let parallel = start.elapsed();
    let found = results.iter().filter(|r| matches!(r, Ok(Some(_)))).count();
    println!(
        "{:<28} | {:>10.2} | {:>6} |",
        format!("{}, parallel batch", variant_label(&batch)),
        parallel.as_secs_f64() * 1000.0,
        found
    );

    if let Some(baseline) = times.first() {
        println!(
            "\nParallel speedup over sequential: {:.2}x",
            baseline.as_secs_f64() / parallel.as_secs_f64().max(f64::EPSILON)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_config_defaults_and_overrides() {
        let defaults = BenchmarkConfig::from_args(&[]).unwrap();
        assert_eq!(defaults.vertices, 50_000);
        assert_eq!(defaults.queries, 64);

        let config = BenchmarkConfig::from_args(&args(&["10", "1.5", "3"])).unwrap();
        assert_eq!(config.vertices, 10);
        assert_eq!(config.edge_factor, 1.5);
        assert_eq!(config.queries, 3);
    }

    #[test]
    fn test_zero_vertices_is_rejected() {
        let err = BenchmarkConfig::from_args(&args(&["0"])).unwrap_err();
        assert!(err.contains(USAGE));
    }

    #[test]
    fn test_variant_labels() {
        assert_eq!(variant_label(&Dijkstra::new()), "lazy, skip stale");
        assert_eq!(
            variant_label(&Dijkstra::new().with_stale_skipping(false)),
            "lazy, relax stale"
        );
        assert_eq!(
            variant_label(&Dijkstra::new().with_frontier(FrontierStrategy::DecreaseKey)),
            "decrease-key, skip stale"
        );
    }
}
