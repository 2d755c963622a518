//! `Heap` — an array-backed binary heap driven by a caller-supplied ordering.
//!
//! The heap does not assume min or max semantics. Whatever `HeapOrder` it is
//! built with decides which element lives at the root:
//!
//! - `MinOrder` / `MaxOrder` for `Ord` elements
//! - any `Fn(&T, &T) -> bool` closure for domain priorities
//! - `ByKey` to order by an extracted key
//!
//! Elements are stored densely in a `Vec`. For index `i` the children live at
//! `2i + 1` and `2i + 2`, and the heap property is that no child precedes its
//! parent under the ordering.
//!
//! ### Performance Characteristics
//! | Operation | Complexity |
//! |-----------|------------|
//! | `insert` | \(O(\log n)\) |
//! | `peek` | \(O(1)\) |
//! | `extract_root` | \(O(\log n)\) |
//! | `remove_at` | \(O(\log n)\) |
//! | `from_vec` | \(O(n)\) |
//! | `sorted` | \(O(n \log n)\) |
//! | `index_of` | \(O(n)\) worst case, pruned by the heap property |

mod order;


pub use order::{ByKey, HeapOrder, MaxOrder, MinOrder};

use core::fmt;

#[inline(always)]
const fn left_child(index: usize) -> usize {
    2 * index + 1
}

#[inline(always)]
const fn right_child(index: usize) -> usize {
    2 * index + 2
}

#[inline(always)]
const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

/// A binary heap ordered by `O`.
#[derive(Clone)]
pub struct Heap<T, O = MinOrder> {
    elements: Vec<T>,
    order: O,
}

impl<T, O> Heap<T, O> {
    /// Creates an empty heap using `order`.
    pub fn new(order: O) -> Self {
        Self {
            elements: Vec::new(),
            order,
        }
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, order: O) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the root element, the most extreme one under the ordering.
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the ordering this heap was built with.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns the backing storage in heap layout.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Iterates over all elements in heap layout (not priority order).
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Consumes the heap and returns the backing storage in heap layout.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

impl<T, O: HeapOrder<T>> Heap<T, O> {
    /// Builds a heap from an existing vector in \(O(n)\).
    ///
    /// Every non-leaf index is sifted down, from `len / 2 - 1` down to and
    /// including the root.
    pub fn from_vec(elements: Vec<T>, order: O) -> Self {
        let mut heap = Self { elements, order };
        heap.heapify();
        #[cfg(feature = "tracing")]
        tracing::trace!(len = heap.len(), "heap built from vector");
        heap
    }

    /// Inserts an element and restores the heap property.
    pub fn insert(&mut self, element: T) {
        self.elements.push(element);
        self.sift_up(self.elements.len() - 1);
    }

    /// Removes and returns the root element.
    pub fn extract_root(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let root = self.elements.pop()?;
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        Some(root)
    }

    /// Removes the element stored at `index` in heap layout.
    ///
    /// Returns `None` if `index` is out of range. After the last element is
    /// moved into the hole it may violate the heap property in either
    /// direction, so both sifts run.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let len = self.elements.len();
        if index >= len {
            return None;
        }
        if index == len - 1 {
            return self.elements.pop();
        }
        self.elements.swap(index, len - 1);
        let removed = self.elements.pop()?;
        self.sift_down(index);
        self.sift_up(index);
        Some(removed)
    }

    /// Finds `element` in the subtree rooted at `starting_at`.
    ///
    /// A subtree is skipped as soon as `element` precedes its root: under a
    /// valid heap nothing below that root can equal `element`. Start at `0`
    /// to search the whole heap.
    pub fn index_of(&self, element: &T, starting_at: usize) -> Option<usize>
    where
        T: PartialEq,
    {
        let candidate = self.elements.get(starting_at)?;
        if self.order.precedes(element, candidate) {
            return None;
        }
        if element == candidate {
            return Some(starting_at);
        }
        self.index_of(element, left_child(starting_at))
            .or_else(|| self.index_of(element, right_child(starting_at)))
    }

    /// Returns `true` if `element` is stored in the heap.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(element, 0).is_some()
    }

    /// Heap-sorts a copy of the elements.
    ///
    /// The root is repeatedly swapped to the end of a shrinking region, so
    /// the most extreme element ends up last. With `MaxOrder` this is
    /// ascending order, matching `std::collections::BinaryHeap::into_sorted_vec`.
    /// The heap itself is left untouched.
    pub fn sorted(&self) -> Vec<T>
    where
        T: Clone,
        O: Clone,
    {
        self.clone().into_sorted_vec()
    }

    /// Consumes the heap and heap-sorts its elements in place.
    ///
    /// See [`Heap::sorted`] for the resulting order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        for end in (1..self.elements.len()).rev() {
            self.elements.swap(0, end);
            self.sift_down_bounded(0, end);
        }
        self.elements
    }

    /// Checks the heap property at every parent/child pair.
    pub fn is_valid(&self) -> bool {
        (1..self.elements.len())
            .all(|child| !self.order.precedes(&self.elements[child], &self.elements[parent(child)]))
    }

    fn heapify(&mut self) {
        for index in (0..self.elements.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let up = parent(child);
            if self.order.precedes(&self.elements[child], &self.elements[up]) {
                self.elements.swap(child, up);
                child = up;
            } else {
                break;
            }
        }
    }

    #[inline]
    fn sift_down(&mut self, from: usize) {
        self.sift_down_bounded(from, self.elements.len());
    }

    /// Sift-down that only considers indices below `up_to`.
    fn sift_down_bounded(&mut self, from: usize, up_to: usize) {
        let mut node = from;
        loop {
            let left = left_child(node);
            let right = right_child(node);
            let mut candidate = node;
            if left < up_to && self.order.precedes(&self.elements[left], &self.elements[candidate]) {
                candidate = left;
            }
            if right < up_to && self.order.precedes(&self.elements[right], &self.elements[candidate]) {
                candidate = right;
            }
            if candidate == node {
                return;
            }
            self.elements.swap(node, candidate);
            node = candidate;
        }
    }
}

impl<T: Ord> Heap<T, MinOrder> {
    /// Creates an empty heap with the smallest element at the root.
    pub fn min() -> Self {
        Self::new(MinOrder)
    }
}

impl<T: Ord> Heap<T, MaxOrder> {
    /// Creates an empty heap with the largest element at the root.
    pub fn max() -> Self {
        Self::new(MaxOrder)
    }
}

impl<T, O: Default> Default for Heap<T, O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}

impl<T, O: HeapOrder<T>> Extend<T> for Heap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T, O: HeapOrder<T> + Default> FromIterator<T> for Heap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect(), O::default())
    }
}

impl<T: fmt::Debug, O> fmt::Debug for Heap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}

/// Returns the `n`-th smallest element (1-based), or `None` if there are
/// fewer than `n` elements or `n` is zero.
pub fn nth_smallest<T: Ord>(n: usize, elements: Vec<T>) -> Option<T> {
    if n == 0 {
        return None;
    }
    let mut heap = Heap::from_vec(elements, MinOrder);
    for _ in 1..n {
        heap.extract_root()?;
    }
    heap.extract_root()
}
