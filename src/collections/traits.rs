//! Shared queue capability.

/// Operations common to every queue in this crate.
///
/// FIFO queues, heap-backed priority queues and sorted-array queues differ
/// only in which element `dequeue` hands back next.
pub trait QueueOps<T> {
    /// Adds an element.
    fn enqueue(&mut self, element: T);

    /// Removes and returns the next element, or `None` if empty.
    fn dequeue(&mut self) -> Option<T>;

    /// Returns the element `dequeue` would return, without removing it.
    fn peek(&self) -> Option<&T>;

    /// Returns the number of queued elements.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
