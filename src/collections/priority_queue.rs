//! Priority queues.
//!
//! - `PriorityQueue`: a thin adapter over [`Heap`], \(O(\log n)\) enqueue and dequeue.
//! - `SortedQueue`: keeps a sorted array, \(O(n)\) enqueue and \(O(1)\) dequeue,
//!   and serves equal priorities in arrival order.
//!
//! Both are comparator-agnostic: priority is whatever the supplied
//! [`HeapOrder`] says comes first.

use core::fmt;

use super::heap::{Heap, HeapOrder, MaxOrder, MinOrder};
use super::traits::QueueOps;

/// A priority queue backed by a binary heap.
///
/// ```rust
/// use heapgraph::collections::PriorityQueue;
///
/// let mut queue = PriorityQueue::from_vec(vec![4, 1, 7], |a: &i32, b: &i32| a > b);
/// queue.enqueue(5);
/// assert_eq!(queue.dequeue(), Some(7));
/// assert_eq!(queue.dequeue(), Some(5));
/// ```
#[derive(Clone)]
pub struct PriorityQueue<T, O = MinOrder> {
    heap: Heap<T, O>,
}

impl<T, O> PriorityQueue<T, O> {
    /// Creates an empty queue ordered by `order`.
    pub fn new(order: O) -> Self {
        Self {
            heap: Heap::new(order),
        }
    }

    /// Creates an empty queue with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, order: O) -> Self {
        Self {
            heap: Heap::with_capacity(capacity, order),
        }
    }

    /// Returns the highest-priority element.
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Returns `true` if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of queued elements.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T, O: HeapOrder<T>> PriorityQueue<T, O> {
    /// Creates a queue holding `elements`, heapified in \(O(n)\).
    pub fn from_vec(elements: Vec<T>, order: O) -> Self {
        Self {
            heap: Heap::from_vec(elements, order),
        }
    }

    /// Adds an element.
    pub fn enqueue(&mut self, element: T) {
        self.heap.insert(element);
    }

    /// Removes and returns the highest-priority element.
    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.extract_root()
    }

    /// Consumes the queue, returning elements in dequeue order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut sorted = self.heap.into_sorted_vec();
        sorted.reverse();
        sorted
    }
}

impl<T: Ord> PriorityQueue<T, MinOrder> {
    /// Creates an empty queue serving the smallest element first.
    pub fn min() -> Self {
        Self::new(MinOrder)
    }
}

impl<T: Ord> PriorityQueue<T, MaxOrder> {
    /// Creates an empty queue serving the largest element first.
    pub fn max() -> Self {
        Self::new(MaxOrder)
    }
}

impl<T, O: HeapOrder<T>> QueueOps<T> for PriorityQueue<T, O> {
    fn enqueue(&mut self, element: T) {
        PriorityQueue::enqueue(self, element);
    }

    fn dequeue(&mut self) -> Option<T> {
        PriorityQueue::dequeue(self)
    }

    fn peek(&self) -> Option<&T> {
        PriorityQueue::peek(self)
    }

    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }
}

impl<T, O: Default> Default for PriorityQueue<T, O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}

impl<T: fmt::Debug, O> fmt::Debug for PriorityQueue<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.len())
            .field("peek", &self.peek())
            .finish()
    }
}

/// A priority queue backed by a sorted array.
///
/// The highest-priority element is kept at the end of the array so that
/// `dequeue` is a `pop`. Elements of equal priority leave in the order they
/// arrived.
#[derive(Clone)]
pub struct SortedQueue<T, O = MinOrder> {
    // Lowest priority first, so the next element to serve is last.
    items: Vec<T>,
    order: O,
}

impl<T, O: HeapOrder<T>> SortedQueue<T, O> {
    /// Creates an empty queue ordered by `order`.
    pub fn new(order: O) -> Self {
        Self {
            items: Vec::new(),
            order,
        }
    }

    /// Creates a queue holding `elements`.
    pub fn from_vec(elements: Vec<T>, order: O) -> Self {
        let mut queue = Self::new(order);
        queue.items.reserve(elements.len());
        for element in elements {
            queue.enqueue(element);
        }
        queue
    }

    /// Inserts `element` behind every queued element of equal priority.
    pub fn enqueue(&mut self, element: T) {
        let at = self
            .items
            .partition_point(|queued| self.order.precedes(&element, queued));
        self.items.insert(at, element);
    }

    /// Removes and returns the highest-priority element.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the highest-priority element.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the number of queued elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over queued elements in dequeue order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().rev()
    }
}

impl<T, O: HeapOrder<T>> QueueOps<T> for SortedQueue<T, O> {
    fn enqueue(&mut self, element: T) {
        SortedQueue::enqueue(self, element);
    }

    fn dequeue(&mut self) -> Option<T> {
        SortedQueue::dequeue(self)
    }

    fn peek(&self) -> Option<&T> {
        SortedQueue::peek(self)
    }

    fn len(&self) -> usize {
        SortedQueue::len(self)
    }
}

impl<T: fmt::Debug, O> fmt::Debug for SortedQueue<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter().rev()).finish()
    }
}
