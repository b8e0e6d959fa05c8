pub mod indexed_queue;
pub mod priority_queue;

pub use indexed_queue::IndexedMinPriorityQueue;
pub use priority_queue::{HeapEntry, MinPriorityQueue};
