//! Depth-first traversal.
//!
//! Both variants produce the same canonical preorder: from each vertex,
//! descend into the first not-yet-visited neighbour in edge-list order, and
//! backtrack when none is left. The iterative variant keeps a scan cursor per
//! stack frame; neighbours before the cursor are already visited, so resuming
//! the scan is equivalent to restarting it from the top of the edge list.

use crate::collections::Stack;
use crate::graph::access::frame::Frame;
use crate::graph::access::visited::VisitedSet;
use crate::graph::traits::Graph;
use crate::graph::vertex::Vertex;

/// Depth-first preorder from `source` using an explicit stack.
///
/// Safe for graphs whose depth would exhaust the call stack.
pub fn depth_first_search<G: Graph + ?Sized>(
    graph: &G,
    source: &Vertex<G::Element>,
) -> Vec<Vertex<G::Element>> {
    let mut visited = VisitedSet::with_capacity(graph.vertex_count());
    let mut stack = Stack::new();
    let mut order = vec![source.clone()];

    visited.insert(source.index());
    stack.push(Frame::enter(graph, source.clone()));

    while let Some(frame) = stack.peek_mut() {
        match frame.pending.find(|n| !visited.contains(n.index())) {
            Some(next) => {
                visited.insert(next.index());
                order.push(next.clone());
                stack.push(Frame::enter(graph, next));
            }
            None => {
                stack.pop();
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(source = source.index(), visited = order.len(), "depth-first search finished");
    order
}

/// Depth-first preorder from `source` by recursion.
///
/// Recursion depth equals the longest descent, so prefer
/// [`depth_first_search`] on very deep graphs.
pub fn depth_first_search_recursive<G: Graph + ?Sized>(
    graph: &G,
    source: &Vertex<G::Element>,
) -> Vec<Vertex<G::Element>> {
    let mut visited = VisitedSet::with_capacity(graph.vertex_count());
    let mut order = Vec::new();
    visit(graph, source, &mut visited, &mut order);
    order
}

fn visit<G: Graph + ?Sized>(
    graph: &G,
    vertex: &Vertex<G::Element>,
    visited: &mut VisitedSet,
    order: &mut Vec<Vertex<G::Element>>,
) {
    visited.insert(vertex.index());
    order.push(vertex.clone());
    for next in graph.neighbors(vertex) {
        if !visited.contains(next.index()) {
            visit(graph, &next, visited, order);
        }
    }
}
