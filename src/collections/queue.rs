//! `Queue` — a FIFO adapter over `VecDeque`.

use std::collections::VecDeque;

use super::traits::QueueOps;

/// A first-in, first-out queue.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends an element at the back.
    pub fn enqueue(&mut self, element: T) {
        self.items.push_back(element);
    }

    /// Removes the element at the front.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns the element at the front.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns the number of queued elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> QueueOps<T> for Queue<T> {
    fn enqueue(&mut self, element: T) {
        Queue::enqueue(self, element);
    }

    fn dequeue(&mut self) -> Option<T> {
        Queue::dequeue(self)
    }

    fn peek(&self) -> Option<&T> {
        Queue::peek(self)
    }

    fn len(&self) -> usize {
        Queue::len(self)
    }
}
