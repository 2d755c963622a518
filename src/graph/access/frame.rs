//! Work-stack frames for depth-first traversals.

use std::vec::IntoIter;

use crate::graph::traits::Graph;
use crate::graph::vertex::Vertex;

/// A vertex on an explicit DFS stack and the neighbours not yet scanned.
pub(crate) struct Frame<T> {
    pub(crate) vertex: Vertex<T>,
    pub(crate) pending: IntoIter<Vertex<T>>,
}

impl<T> Frame<T> {
    pub(crate) fn enter<G>(graph: &G, vertex: Vertex<T>) -> Self
    where
        G: Graph<Element = T> + ?Sized,
        T: Clone + Eq + core::hash::Hash,
    {
        let pending = graph.neighbors(&vertex).into_iter();
        Self { vertex, pending }
    }
}
