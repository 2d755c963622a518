//! Cycle detection.
//!
//! Depth-first search with three states per vertex: unseen, on the current
//! stack, and finished. Reaching a vertex that is still on the stack closes a
//! cycle. A finished vertex had its whole reachable subgraph explored without
//! finding one, so it is never entered again.
//!
//! An undirected edge is stored as two directed edges, so any undirected edge
//! forms a two-vertex cycle.

use crate::collections::Stack;
use crate::graph::access::frame::Frame;
use crate::graph::access::visited::VisitedSet;
use crate::graph::traits::Graph;
use crate::graph::vertex::Vertex;

/// Returns `true` if a cycle is reachable from `source`.
pub fn has_cycle<G: Graph + ?Sized>(graph: &G, source: &Vertex<G::Element>) -> bool {
    let n = graph.vertex_count();
    let mut on_stack = VisitedSet::with_capacity(n);
    let mut finished = VisitedSet::with_capacity(n);
    search_from(graph, source, &mut on_stack, &mut finished)
}

/// Returns `true` if the graph contains a cycle anywhere.
///
/// Every vertex is tried as a root; the finished set is shared between roots,
/// so each vertex is explored at most once overall.
pub fn has_any_cycle<G: Graph + ?Sized>(graph: &G) -> bool {
    let n = graph.vertex_count();
    let mut on_stack = VisitedSet::with_capacity(n);
    let mut finished = VisitedSet::with_capacity(n);
    graph
        .all_vertices()
        .iter()
        .any(|root| search_from(graph, root, &mut on_stack, &mut finished))
}

fn search_from<G: Graph + ?Sized>(
    graph: &G,
    root: &Vertex<G::Element>,
    on_stack: &mut VisitedSet,
    finished: &mut VisitedSet,
) -> bool {
    if finished.contains(root.index()) {
        return false;
    }

    let mut stack = Stack::new();
    on_stack.insert(root.index());
    stack.push(Frame::enter(graph, root.clone()));

    while let Some(frame) = stack.peek_mut() {
        match frame.pending.next() {
            Some(next) => {
                let index = next.index();
                if on_stack.contains(index) {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(from = frame.vertex.index(), to = index, "back edge closes a cycle");
                    return true;
                }
                if !finished.contains(index) {
                    on_stack.insert(index);
                    stack.push(Frame::enter(graph, next));
                }
            }
            None => {
                let index = frame.vertex.index();
                on_stack.remove(index);
                finished.insert(index);
                stack.pop();
            }
        }
    }
    false
}
