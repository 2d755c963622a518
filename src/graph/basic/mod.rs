//! Graph storage strategies.
//!
//! Both representations implement [`crate::graph::Graph`], so every traversal
//! in [`crate::graph::algorithms`] runs unchanged on either.

pub mod adj_list;
pub mod adj_matrix;

pub use adj_list::AdjacencyList;
pub use adj_matrix::AdjacencyMatrix;
