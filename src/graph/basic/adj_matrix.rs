//! Adjacency Matrix Graph
//!
//! A dense `n x n` grid where cell `(i, j)` records the `i -> j` edge. At most
//! one edge exists per ordered pair: adding it again replaces the weight.
//! Outgoing edges are reported in destination-index order.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `create_vertex` | \(O(n)\) | Grows every row by one column |
//! | `add_directed_edge` | \(O(1)\) | Overwrites one cell |
//! | `edges` | \(O(n)\) | Scans one row |
//! | `weight` | \(O(1)\) | Reads one cell |

use core::hash::Hash;

use crate::error::Result;
use crate::graph::traits::Graph;
use crate::graph::vertex::{Edge, Vertex};

/// Presence of an edge in a matrix cell.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Link {
    weight: Option<f64>,
}

/// A directed graph stored as a dense adjacency matrix.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix<T> {
    vertices: Vec<Vertex<T>>,
    cells: Vec<Vec<Option<Link>>>,
}

impl<T> AdjacencyMatrix<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            cells: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `vertex_count` vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            cells: Vec::with_capacity(vertex_count),
        }
    }

    /// Returns `true` if a `from -> to` edge is stored, by identifier.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.cell(from, to).is_some()
    }

    #[inline]
    fn cell(&self, from: usize, to: usize) -> Option<Link> {
        self.cells.get(from).and_then(|row| row.get(to).copied().flatten())
    }
}

impl<T: PartialEq> AdjacencyMatrix<T> {
    #[inline]
    fn slot(&self, vertex: &Vertex<T>) -> Option<usize> {
        let index = vertex.index();
        self.vertices
            .get(index)
            .filter(|stored| *stored == vertex)
            .map(|_| index)
    }
}

impl<T> Default for AdjacencyMatrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> Graph for AdjacencyMatrix<T> {
    type Element = T;

    fn create_vertex(&mut self, data: T) -> Vertex<T> {
        let index = self.vertices.len();
        let vertex = Vertex::new(index, data);
        self.vertices.push(vertex.clone());
        for row in &mut self.cells {
            row.push(None);
        }
        self.cells.push(vec![None; index + 1]);
        #[cfg(feature = "tracing")]
        tracing::trace!(index, "vertex created");
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
        self.cells[source.index()][destination.index()] = Some(Link { weight });
        Ok(())
    }

    fn edges(&self, source: &Vertex<T>) -> Vec<Edge<T>> {
        let Some(from) = self.slot(source) else {
            return Vec::new();
        };
        self.cells[from]
            .iter()
            .zip(&self.vertices)
            .filter_map(|(cell, destination)| {
                cell.map(|link| Edge::new(source.clone(), destination.clone(), link.weight))
            })
            .collect()
    }

    fn weight(&self, source: &Vertex<T>, destination: &Vertex<T>) -> Option<f64> {
        let from = self.slot(source)?;
        let to = self.slot(destination)?;
        self.cell(from, to)?.weight
    }

    fn all_vertices(&self) -> Vec<Vertex<T>> {
        self.vertices.clone()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }
}
