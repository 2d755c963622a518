//! The graph capability shared by every storage strategy.

use core::hash::Hash;

use super::vertex::{Edge, EdgeType, Vertex};
use crate::error::{GraphError, Result};

/// Operations a type must support to be traversed by [`crate::graph::algorithms`].
///
/// Implementations assign vertex identifiers sequentially from 0 and never
/// reuse them, and edges only reference vertices created by the same graph.
/// Traversals rely on both. Graphs are insert-only.
pub trait Graph {
    /// Payload carried by each vertex.
    type Element: Clone + Eq + Hash;

    /// Creates a vertex holding `data` and returns it.
    fn create_vertex(&mut self, data: Self::Element) -> Vertex<Self::Element>;

    /// Returns `true` if `vertex` was created by this graph.
    fn contains_vertex(&self, vertex: &Vertex<Self::Element>) -> bool;

    /// Adds a `source -> destination` edge.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if either endpoint was not
    /// created by this graph. The graph is left unchanged.
    fn add_directed_edge(
        &mut self,
        source: &Vertex<Self::Element>,
        destination: &Vertex<Self::Element>,
        weight: Option<f64>,
    ) -> Result<()>;

    /// Adds an edge in each direction, both carrying `weight`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if either endpoint was not
    /// created by this graph. Neither direction is inserted in that case.
    fn add_undirected_edge(
        &mut self,
        source: &Vertex<Self::Element>,
        destination: &Vertex<Self::Element>,
        weight: Option<f64>,
    ) -> Result<()> {
        self.check_vertex(source)?;
        self.check_vertex(destination)?;
        self.add_directed_edge(source, destination, weight)?;
        self.add_directed_edge(destination, source, weight)
    }

    /// Adds an edge of the given kind.
    ///
    /// # Errors
    /// See [`Graph::add_directed_edge`].
    fn add(
        &mut self,
        edge_type: EdgeType,
        source: &Vertex<Self::Element>,
        destination: &Vertex<Self::Element>,
        weight: Option<f64>,
    ) -> Result<()> {
        match edge_type {
            EdgeType::Directed => self.add_directed_edge(source, destination, weight),
            EdgeType::Undirected => self.add_undirected_edge(source, destination, weight),
        }
    }

    /// Outgoing edges of `source`; empty if the vertex is unknown.
    fn edges(&self, source: &Vertex<Self::Element>) -> Vec<Edge<Self::Element>>;

    /// Destinations of the outgoing edges of `source`, in edge order.
    fn neighbors(&self, source: &Vertex<Self::Element>) -> Vec<Vertex<Self::Element>> {
        self.edges(source)
            .into_iter()
            .map(|edge| edge.destination().clone())
            .collect()
    }

    /// Weight of the first `source -> destination` edge, if any.
    fn weight(
        &self,
        source: &Vertex<Self::Element>,
        destination: &Vertex<Self::Element>,
    ) -> Option<f64> {
        self.edges(source)
            .iter()
            .find(|edge| edge.destination() == destination)
            .and_then(Edge::weight)
    }

    /// Every vertex, in creation order.
    fn all_vertices(&self) -> Vec<Vertex<Self::Element>>;

    /// Number of vertices created so far.
    fn vertex_count(&self) -> usize;

    /// Number of stored directed edges (an undirected edge counts twice).
    fn edge_count(&self) -> usize {
        self.all_vertices().iter().map(|v| self.edges(v).len()).sum()
    }

    /// Returns `Ok(())` if `vertex` belongs to this graph.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] otherwise.
    fn check_vertex(&self, vertex: &Vertex<Self::Element>) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(index = vertex.index(), "rejected edge endpoint");
            Err(GraphError::InvalidVertex {
                index: vertex.index(),
            })
        }
    }
}
