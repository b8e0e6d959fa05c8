pub mod traits;
pub mod dijkstra;
pub mod brute_force;
pub mod batch;

pub use traits::{ShortestPath, ShortestPathAlgorithm, ShortestPathTree};
pub use dijkstra::{FrontierStrategy, SearchStats};
pub use batch::{solve_batch, solve_trees};
