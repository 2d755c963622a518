//! `Stack` — a LIFO adapter over `Vec`.

/// A last-in, first-out stack.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty stack with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Pushes an element on top.
    pub fn push(&mut self, element: T) {
        self.items.push(element);
    }

    /// Pops the top element.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top element.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the top element mutably.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    /// Returns the number of stacked elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
