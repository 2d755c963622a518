//! Adjacency List Graph
//!
//! Each vertex owns an ordered list of its outgoing edges. Vertex identifiers
//! are dense and sequential, so the lists are kept in a `Vec` indexed by
//! `Vertex::index` (Structure of Arrays: vertex records and edge lists live in
//! parallel vectors). A lookup checks that the stored vertex equals the one
//! supplied, so vertices from another graph are never mistaken for local ones
//! unless they are equal in both index and data.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `create_vertex` | \(O(1)\) amortized | Appends to both vectors |
//! | `add_directed_edge` | \(O(1)\) amortized | Appends to the source list |
//! | `outgoing` | \(O(1)\) | Borrowed slice |
//! | `weight` | \(O(\text{out-degree})\) | First matching edge |

use core::fmt;
use core::hash::Hash;

use serde::Serialize;

use crate::error::Result;
use crate::graph::traits::Graph;
use crate::graph::vertex::{Edge, Vertex};

/// A directed graph stored as per-vertex outgoing edge lists.
///
/// Undirected edges are stored as two independent directed edges.
#[derive(Debug, Clone, Serialize)]
pub struct AdjacencyList<T> {
    vertices: Vec<Vertex<T>>,
    #[serde(rename = "edges")]
    adjacencies: Vec<Vec<Edge<T>>>,
}

impl<T> AdjacencyList<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            adjacencies: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `vertex_count` vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            adjacencies: Vec::with_capacity(vertex_count),
        }
    }

    /// Returns the vertex with identifier `index`.
    pub fn vertex(&self, index: usize) -> Option<&Vertex<T>> {
        self.vertices.get(index)
    }

    /// Iterates over vertices in creation order.
    pub fn vertices(&self) -> core::slice::Iter<'_, Vertex<T>> {
        self.vertices.iter()
    }
}

impl<T: PartialEq> AdjacencyList<T> {
    /// Slot of `vertex` if it belongs to this graph.
    #[inline]
    fn slot(&self, vertex: &Vertex<T>) -> Option<usize> {
        let index = vertex.index();
        self.vertices
            .get(index)
            .filter(|stored| *stored == vertex)
            .map(|_| index)
    }

    /// Borrows the outgoing edges of `source`; empty if the vertex is unknown.
    pub fn outgoing(&self, source: &Vertex<T>) -> &[Edge<T>] {
        match self.slot(source) {
            Some(slot) => &self.adjacencies[slot],
            None => &[],
        }
    }
}

impl<T> Default for AdjacencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> Graph for AdjacencyList<T> {
    type Element = T;

    fn create_vertex(&mut self, data: T) -> Vertex<T> {
        let vertex = Vertex::new(self.vertices.len(), data);
        self.vertices.push(vertex.clone());
        self.adjacencies.push(Vec::new());
        #[cfg(feature = "tracing")]
        tracing::trace!(index = vertex.index(), "vertex created");
        vertex
    }

    fn contains_vertex(&self, vertex: &Vertex<T>) -> bool {
        self.slot(vertex).is_some()
    }

    fn add_directed_edge(
        &mut self,
        source: &Vertex<T>,
        destination: &Vertex<T>,
        weight: Option<f64>,
    ) -> Result<()> {
        self.check_vertex(source)?;
        self.check_vertex(destination)?;
        self.adjacencies[source.index()].push(Edge::new(source.clone(), destination.clone(), weight));
        Ok(())
    }

    fn edges(&self, source: &Vertex<T>) -> Vec<Edge<T>> {
        self.outgoing(source).to_vec()
    }

    fn neighbors(&self, source: &Vertex<T>) -> Vec<Vertex<T>> {
        self.outgoing(source)
            .iter()
            .map(|edge| edge.destination().clone())
            .collect()
    }

    fn weight(&self, source: &Vertex<T>, destination: &Vertex<T>) -> Option<f64> {
        self.outgoing(source)
            .iter()
            .find(|edge| edge.destination() == destination)
            .and_then(Edge::weight)
    }

    fn all_vertices(&self) -> Vec<Vertex<T>> {
        self.vertices.clone()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacencies.iter().map(Vec::len).sum()
    }
}

impl<T: fmt::Display> fmt::Display for AdjacencyList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, edges) in self.vertices.iter().zip(&self.adjacencies) {
            write!(f, "{vertex} ---> [ ")?;
            for (i, edge) in edges.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", edge.destination())?;
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}
