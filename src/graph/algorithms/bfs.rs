//! Breadth-first traversal.

use crate::collections::Queue;
use crate::graph::access::visited::VisitedSet;
use crate::graph::traits::Graph;
use crate::graph::vertex::Vertex;

/// An iterator yielding vertices in breadth-first order.
///
/// A vertex is marked when it is enqueued, so it is enqueued at most once and
/// every edge is examined once, from its source endpoint.
pub struct Bfs<'a, G: Graph + ?Sized> {
    graph: &'a G,
    queue: Queue<Vertex<G::Element>>,
    enqueued: VisitedSet,
    max_queue_len: usize,
}

impl<'a, G: Graph + ?Sized> Bfs<'a, G> {
    /// Starts a traversal at `source`.
    pub fn new(graph: &'a G, source: &Vertex<G::Element>) -> Self {
        let mut queue = Queue::new();
        let mut enqueued = VisitedSet::with_capacity(graph.vertex_count());
        enqueued.insert(source.index());
        queue.enqueue(source.clone());
        Self {
            graph,
            queue,
            enqueued,
            max_queue_len: 1,
        }
    }

    /// Largest number of vertices waiting in the queue so far.
    pub fn max_queue_len(&self) -> usize {
        self.max_queue_len
    }
}

impl<G: Graph + ?Sized> Iterator for Bfs<'_, G> {
    type Item = Vertex<G::Element>;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.queue.dequeue()?;
        for neighbor in self.graph.neighbors(&vertex) {
            if self.enqueued.insert(neighbor.index()) {
                self.queue.enqueue(neighbor);
                self.max_queue_len = self.max_queue_len.max(self.queue.len());
            }
        }
        Some(vertex)
    }
}

/// Returns the vertices reachable from `source` in breadth-first order.
pub fn breadth_first_search<G: Graph + ?Sized>(
    graph: &G,
    source: &Vertex<G::Element>,
) -> Vec<Vertex<G::Element>> {
    let order: Vec<_> = Bfs::new(graph, source).collect();
    #[cfg(feature = "tracing")]
    tracing::trace!(source = source.index(), visited = order.len(), "breadth-first search finished");
    order
}

/// Runs a breadth-first traversal from `source` and returns the largest
/// queue length observed, a measure of the traversal's memory footprint.
pub fn breadth_first_max_queue_len<G: Graph + ?Sized>(
    graph: &G,
    source: &Vertex<G::Element>,
) -> usize {
    let mut bfs = Bfs::new(graph, source);
    bfs.by_ref().for_each(drop);
    bfs.max_queue_len()
}
