//! Vertex and edge value records.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Whether an edge is stored in one direction or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    /// A single `source -> destination` edge.
    Directed,
    /// Two independent edges, one in each direction.
    Undirected,
}

/// A graph node: an identifier unique within its graph plus a payload.
///
/// Vertices are plain values. Two vertices are equal when both the index and
/// the data match, so a vertex from another graph with the same index and
/// data is indistinguishable from the local one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vertex<T> {
    index: usize,
    data: T,
}

impl<T> Vertex<T> {
    pub(crate) fn new(index: usize, data: T) -> Self {
        Self { index, data }
    }

    /// Identifier assigned by the owning graph, starting at 0.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The payload.
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }
}

impl<T: fmt::Display> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.index, self.data)
    }
}

/// A directed connection with an optional weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<T> {
    source: Vertex<T>,
    destination: Vertex<T>,
    weight: Option<f64>,
}

impl<T> Edge<T> {
    pub(crate) fn new(source: Vertex<T>, destination: Vertex<T>, weight: Option<f64>) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// The vertex the edge leaves.
    #[inline]
    pub fn source(&self) -> &Vertex<T> {
        &self.source
    }

    /// The vertex the edge enters.
    #[inline]
    pub fn destination(&self) -> &Vertex<T> {
        &self.destination
    }

    /// The edge weight, if one was given.
    #[inline]
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }
}
