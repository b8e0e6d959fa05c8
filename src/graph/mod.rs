pub mod traits;
pub mod weighted;
pub mod document;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use weighted::WeightedGraph;
pub use document::{EdgeRecord, GraphDocument};
