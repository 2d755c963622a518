//! Orderings that decide which element sits closer to the root of a heap.

use core::marker::PhantomData;

/// A strict ordering predicate for heap placement.
///
/// `precedes(a, b)` returns `true` when `a` must appear above `b`. The
/// predicate must be irreflexive: `precedes(x, x)` is always `false`.
///
/// Any `Fn(&T, &T) -> bool` closure is an ordering, so custom priorities can
/// be supplied inline:
///
/// ```rust
/// use heapgraph::collections::Heap;
///
/// let mut heap = Heap::new(|a: &(u8, &str), b: &(u8, &str)| a.0 > b.0);
/// heap.insert((1, "low"));
/// heap.insert((9, "urgent"));
/// assert_eq!(heap.peek(), Some(&(9, "urgent")));
/// ```
pub trait HeapOrder<T> {
    /// Returns `true` if `a` must be placed above `b`.
    fn precedes(&self, a: &T, b: &T) -> bool;
}

impl<T, F> HeapOrder<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Smallest element at the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

impl<T: Ord> HeapOrder<T> for MinOrder {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Largest element at the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: Ord> HeapOrder<T> for MaxOrder {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Orders elements by a key extracted from them.
///
/// Ties on the key never swap, so insertion order among equal keys is not
/// preserved (heaps are not stable).
pub struct ByKey<F, K, O = MinOrder> {
    key: F,
    order: O,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K, MinOrder> {
    /// Smallest key at the root.
    pub fn min<T>(key: F) -> Self
    where
        F: Fn(&T) -> K,
    {
        Self {
            key,
            order: MinOrder,
            _key: PhantomData,
        }
    }
}

impl<F, K> ByKey<F, K, MaxOrder> {
    /// Largest key at the root.
    pub fn max<T>(key: F) -> Self
    where
        F: Fn(&T) -> K,
    {
        Self {
            key,
            order: MaxOrder,
            _key: PhantomData,
        }
    }
}

impl<T, F, K, O> HeapOrder<T> for ByKey<F, K, O>
where
    F: Fn(&T) -> K,
    O: HeapOrder<K>,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self.order.precedes(&(self.key)(a), &(self.key)(b))
    }
}
