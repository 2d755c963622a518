//! Dense visited sets for graph traversals.
//!
//! Vertex identifiers are small sequential integers, so visited state is a
//! word-packed bitset indexed by `Vertex::index` rather than a hash set of
//! vertex values.

const WORD_BITS: usize = u64::BITS as usize;

/// A fixed-size, word-packed set of vertex indices.
///
/// Capacity is fixed at construction from the graph's vertex count. An index
/// at or past it names no vertex of the graph, so it is never marked.
#[derive(Debug, Clone)]
pub(crate) struct VisitedSet {
    words: Vec<u64>,
    capacity: usize,
    len: usize,
}

impl VisitedSet {
    /// Creates a set sized for `vertex_count` vertices.
    pub(crate) fn with_capacity(vertex_count: usize) -> Self {
        Self {
            words: vec![0; vertex_count.div_ceil(WORD_BITS)],
            capacity: vertex_count,
            len: 0,
        }
    }

    /// Marks `index` as visited. Returns `true` iff it was not already marked.
    ///
    /// Out-of-range indices are ignored and return `false`.
    #[inline]
    pub(crate) fn insert(&mut self, index: usize) -> bool {
        if index >= self.capacity {
            return false;
        }
        let (word, mask) = Self::locate(index);
        let fresh = self.words[word] & mask == 0;
        if fresh {
            self.words[word] |= mask;
            self.len += 1;
        }
        fresh
    }

    /// Clears the mark on `index`. Returns `true` iff it was marked.
    #[inline]
    pub(crate) fn remove(&mut self, index: usize) -> bool {
        let (word, mask) = Self::locate(index);
        match self.words.get_mut(word) {
            Some(bits) if *bits & mask != 0 => {
                *bits &= !mask;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub(crate) fn contains(&self, index: usize) -> bool {
        let (word, mask) = Self::locate(index);
        self.words.get(word).is_some_and(|bits| bits & mask != 0)
    }

    /// Number of marked indices.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    fn locate(index: usize) -> (usize, u64) {
        (index / WORD_BITS, 1 << (index % WORD_BITS))
    }
}
