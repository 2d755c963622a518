//! # `heapgraph` - Heaps, Priority Queues and Graph Traversals
//!
//! Two independent engines built on plain owned storage:
//!
//! - **Heaps**: an array-backed binary heap whose ordering is supplied at
//!   construction, and priority queues layered on top of it.
//! - **Graphs**: insert-only directed graphs behind a [`Graph`] capability
//!   trait, with breadth-first and depth-first traversals, path counting,
//!   cycle detection and a connectivity check that work on any implementation.
//!
//! ## Invariants
//!
//! - **Heap property**: after every public operation, no element precedes its
//!   parent under the heap's ordering. `Heap::is_valid` checks it.
//! - **Sequential identifiers**: a graph numbers its vertices 0, 1, 2, ... in
//!   creation order and never reuses a number.
//! - **Validated edges**: an edge can only connect vertices created by the same
//!   graph; anything else is rejected with [`GraphError::InvalidVertex`].
//!
//! ## Absence is not an error
//!
//! Peeking or extracting from an empty heap, removing an out-of-range index and
//! asking for the edges of an unknown vertex all return `None` or an empty
//! sequence. Only edge insertion returns a `Result`.
//!
//! ## Concurrency
//!
//! Mutation takes `&mut self`, so heaps and graphs are single-writer by
//! construction. Traversals take `&G` and keep all scratch state local to the
//! call.
//!
//! ## Example
//!
//! ```rust
//! use heapgraph::collections::{Heap, MinOrder};
//! use heapgraph::graph::{AdjacencyList, EdgeType, Graph, Traversal};
//!
//! let mut heap = Heap::from_vec(vec![5, 3, 8, 1, 9, 2], MinOrder);
//! assert_eq!(heap.extract_root(), Some(1));
//!
//! let mut graph = AdjacencyList::new();
//! let a = graph.create_vertex("A");
//! let b = graph.create_vertex("B");
//! let c = graph.create_vertex("C");
//! graph.add(EdgeType::Directed, &a, &b, None)?;
//! graph.add(EdgeType::Directed, &b, &c, None)?;
//!
//! assert_eq!(graph.number_of_paths(&a, &c), 1);
//! assert!(!graph.has_cycle(&a));
//! # Ok::<(), heapgraph::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{Heap, PriorityQueue, Queue, SortedQueue, Stack};
pub use error::{GraphError, Result};
pub use graph::{AdjacencyList, AdjacencyMatrix, Edge, EdgeType, Graph, Traversal, Vertex};
