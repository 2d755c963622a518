//! Path counting.

use crate::graph::access::visited::VisitedSet;
use crate::graph::traits::Graph;
use crate::graph::vertex::Vertex;

/// Counts the distinct paths from `source` to `destination` that never
/// repeat a vertex.
///
/// Backtracking search: a vertex is on the current path while its subtree is
/// explored and is released on the way back, so it can take part in paths
/// reached through other branches. Runtime is exponential in the worst case.
/// A vertex has exactly one path to itself.
pub fn number_of_paths<G: Graph + ?Sized>(
    graph: &G,
    source: &Vertex<G::Element>,
    destination: &Vertex<G::Element>,
) -> usize {
    let mut on_path = VisitedSet::with_capacity(graph.vertex_count());
    let mut count = 0;
    count_paths(graph, source, destination, &mut on_path, &mut count);
    count
}

fn count_paths<G: Graph + ?Sized>(
    graph: &G,
    source: &Vertex<G::Element>,
    destination: &Vertex<G::Element>,
    on_path: &mut VisitedSet,
    count: &mut usize,
) {
    on_path.insert(source.index());
    if source == destination {
        *count += 1;
    } else {
        for next in graph.neighbors(source) {
            if !on_path.contains(next.index()) {
                count_paths(graph, &next, destination, on_path, count);
            }
        }
    }
    on_path.remove(source.index());
}
