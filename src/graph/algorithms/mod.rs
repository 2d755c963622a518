//! Traversal algorithms over any [`Graph`].
//!
//! Every algorithm allocates its own queue/stack and visited state per call
//! and only reads the graph, so concurrent traversals of an unmodified graph
//! do not interfere.
//!
//! The free functions are also available as methods through the
//! [`Traversal`] extension trait.

mod bfs;
mod connectivity;
mod cycle;
mod dfs;
mod paths;

#[cfg(test)]
mod tests;

pub use bfs::{breadth_first_max_queue_len, breadth_first_search, Bfs};
pub use connectivity::is_disconnected;
pub use cycle::{has_any_cycle, has_cycle};
pub use dfs::{depth_first_search, depth_first_search_recursive};
pub use paths::number_of_paths;

use crate::graph::traits::Graph;
use crate::graph::vertex::Vertex;

/// Method-call access to the traversal algorithms.
///
/// ```rust
/// use heapgraph::graph::{AdjacencyList, Graph, Traversal};
///
/// let mut graph = AdjacencyList::new();
/// let a = graph.create_vertex("A");
/// let b = graph.create_vertex("B");
/// graph.add_undirected_edge(&a, &b, None).unwrap();
///
/// assert_eq!(graph.breadth_first_search(&a), vec![a.clone(), b]);
/// assert!(!graph.is_disconnected());
/// ```
pub trait Traversal: Graph {
    /// See [`breadth_first_search`].
    fn breadth_first_search(&self, source: &Vertex<Self::Element>) -> Vec<Vertex<Self::Element>> {
        bfs::breadth_first_search(self, source)
    }

    /// See [`breadth_first_max_queue_len`].
    fn breadth_first_max_queue_len(&self, source: &Vertex<Self::Element>) -> usize {
        bfs::breadth_first_max_queue_len(self, source)
    }

    /// See [`depth_first_search`].
    fn depth_first_search(&self, source: &Vertex<Self::Element>) -> Vec<Vertex<Self::Element>> {
        dfs::depth_first_search(self, source)
    }

    /// See [`depth_first_search_recursive`].
    fn depth_first_search_recursive(
        &self,
        source: &Vertex<Self::Element>,
    ) -> Vec<Vertex<Self::Element>> {
        dfs::depth_first_search_recursive(self, source)
    }

    /// See [`number_of_paths`].
    fn number_of_paths(
        &self,
        source: &Vertex<Self::Element>,
        destination: &Vertex<Self::Element>,
    ) -> usize {
        paths::number_of_paths(self, source, destination)
    }

    /// See [`has_cycle`].
    fn has_cycle(&self, source: &Vertex<Self::Element>) -> bool {
        cycle::has_cycle(self, source)
    }

    /// See [`has_any_cycle`].
    fn has_any_cycle(&self) -> bool {
        cycle::has_any_cycle(self)
    }

    /// See [`is_disconnected`].
    fn is_disconnected(&self) -> bool {
        connectivity::is_disconnected(self)
    }
}

impl<G: Graph + ?Sized> Traversal for G {}
