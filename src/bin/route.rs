use heap_sssp::graph::{Graph, GraphDocument};
use heap_sssp::{Dijkstra, FrontierStrategy};
use std::env;
use std::process;

const USAGE: &str = "usage: route <graph.json> <source> <target> [--decrease-key]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().skip(1).collect();
    let positional: Vec<&String> = args.iter().filter(|arg| !arg.starts_with("--")).collect();
    if positional.len() != 3 {
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    let frontier = if args.iter().any(|arg| arg == "--decrease-key") {
        FrontierStrategy::DecreaseKey
    } else {
        FrontierStrategy::LazyDeletion
    };

    let (path, source, target) = (positional[0], positional[1], positional[2]);
    let graph = GraphDocument::from_path(path)?.into_graph()?;
    println!(
        "Loaded {} vertices and {} edges from {}",
        graph.vertex_count(),
        graph.edge_count(),
        path
    );

    let dijkstra = Dijkstra::new().with_frontier(frontier);
    let (result, stats) = dijkstra.shortest_path_with_stats(&graph, source, target)?;

    match result {
        Some(route) => {
            println!("Path: {}", route.path.join(" -> "));
            println!("Distance: {}", route.distance);
            println!(
                "Dequeued {} entries ({} stale), {} relaxations",
                stats.dequeued, stats.stale_skipped, stats.relaxations
            );
            Ok(())
        }
        None => {
            println!("No path from {} to {}", source, target);
            process::exit(2);
        }
    }
}
