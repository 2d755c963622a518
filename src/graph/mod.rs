//! Graphs and the traversals that run over them.
//!
//! Graph code is organized into:
//! - `vertex`: vertex and edge value records
//! - `traits`: the [`Graph`] capability every storage strategy implements
//! - `basic`: adjacency-list and adjacency-matrix storage
//! - `algorithms`: BFS, DFS, path counting, cycle detection and connectivity

pub mod algorithms;
pub mod basic;
pub mod traits;
pub mod vertex;
pub(crate) mod access;

pub use algorithms::Traversal;
pub use basic::{AdjacencyList, AdjacencyMatrix};
pub use traits::Graph;
pub use vertex::{Edge, EdgeType, Vertex};
