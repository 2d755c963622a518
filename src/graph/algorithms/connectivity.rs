//! Connectivity check.

use super::bfs::Bfs;
use crate::graph::access::visited::VisitedSet;
use crate::graph::traits::Graph;

/// Returns `true` if some vertex cannot be reached from the first created
/// vertex.
///
/// Reachability follows edge direction, so on directed graphs this asks
/// whether everything is reachable from vertex 0. A graph with no vertices is
/// treated as connected.
pub fn is_disconnected<G: Graph + ?Sized>(graph: &G) -> bool {
    let vertices = graph.all_vertices();
    let Some(first) = vertices.first() else {
        return false;
    };

    let mut reached = VisitedSet::with_capacity(vertices.len());
    for vertex in Bfs::new(graph, first) {
        reached.insert(vertex.index());
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(reached = reached.len(), total = vertices.len(), "connectivity checked");

    // Edges only ever point at this graph's vertices, so every reached
    // index is a distinct vertex of the graph.
    reached.len() < vertices.len()
}
