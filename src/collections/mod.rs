//! Sequence containers and priority queues.
//!
//! Collections are organized by role:
//! - `heap`: the comparator-driven binary heap and its orderings
//! - `priority_queue`: heap-backed and sorted-array priority queues
//! - `queue` / `stack`: FIFO and LIFO adapters used by graph traversals

pub mod heap;
pub mod priority_queue;
pub mod queue;
pub mod stack;
pub mod traits;

pub use heap::{nth_smallest, ByKey, Heap, HeapOrder, MaxOrder, MinOrder};
pub use priority_queue::{PriorityQueue, SortedQueue};
pub use queue::Queue;
pub use stack::Stack;
pub use traits::QueueOps;
