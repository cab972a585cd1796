//! `VertexIndex` — an insertion-ordered, 1-based vertex ↔ index bijection.
//!
//! Every vertex added to a graph receives the next sequential index, starting
//! at 1; the assignment is permanent (append-only, no removal), so indices
//! remain stable handles for the lifetime of the structure. The table is the
//! backbone of shell indexing: breadth-first construction guarantees that a
//! shell occupies a contiguous index interval, which the rest of the crate
//! exploits with binary searches over plain index lists.
//!
//! # Features
//! - **Stable indices**: values are never moved or removed.
//! - **Bidirectional**: O(1) vertex → index and index → vertex lookup.
//! - **Range access**: contiguous sub-sequences by index interval.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{GraphError, Result};

/// An insertion-ordered bijection between vertices and `1..=len` indices.
///
/// The vertex type is opaque to the table; it only needs equality and
/// hashing. `Clone` is required because each vertex is stored twice: once as
/// the lookup key and once in the index → vertex sequence.
#[derive(Debug, Clone, Default)]
pub struct VertexIndex<S> {
    lookup: HashMap<S, usize>,
    elements: Vec<S>,
}

impl<S: Eq + Hash + Clone> VertexIndex<S> {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            lookup: HashMap::new(),
            elements: Vec::new(),
        }
    }

    /// Creates an empty index with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lookup: HashMap::with_capacity(capacity),
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Adds a vertex, assigning it the next sequential index.
    ///
    /// Returns `true` if the vertex was newly added, `false` if it already
    /// had an index (in which case nothing changes).
    pub fn insert(&mut self, vertex: S) -> bool {
        if self.lookup.contains_key(&vertex) {
            return false;
        }
        let index = self.elements.len() + 1;
        self.lookup.insert(vertex.clone(), index);
        self.elements.push(vertex);
        true
    }

    /// Returns the index of `vertex`, if it was ever added.
    #[inline]
    pub fn get(&self, vertex: &S) -> Option<usize> {
        self.lookup.get(vertex).copied()
    }

    /// Returns the index of `vertex`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if the vertex was never added.
    pub fn index_of(&self, vertex: &S) -> Result<usize> {
        self.get(vertex).ok_or(GraphError::VertexNotFound)
    }

    /// Returns the vertex with the given 1-based index.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] if `index` is outside `1..=len`.
    pub fn element_at(&self, index: usize) -> Result<&S> {
        if index == 0 || index > self.elements.len() {
            return Err(GraphError::IndexOutOfRange {
                index,
                len: self.elements.len(),
            });
        }
        Ok(&self.elements[index - 1])
    }

    /// Returns the vertex at `index` without a range check.
    ///
    /// Callers must have obtained `index` from this table.
    #[inline]
    pub(crate) fn element_unchecked(&self, index: usize) -> &S {
        &self.elements[index - 1]
    }

    /// Returns the contiguous sub-sequence of vertices with indices in
    /// `lo..=hi`.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] unless `1 <= lo <= hi <= len`.
    pub fn elements_in_range(&self, lo: usize, hi: usize) -> Result<&[S]> {
        if lo == 0 || lo > hi {
            return Err(GraphError::IndexOutOfRange {
                index: lo,
                len: self.elements.len(),
            });
        }
        if hi > self.elements.len() {
            return Err(GraphError::IndexOutOfRange {
                index: hi,
                len: self.elements.len(),
            });
        }
        Ok(&self.elements[lo - 1..hi])
    }

    /// Returns whether `vertex` has an index.
    #[inline]
    pub fn contains(&self, vertex: &S) -> bool {
        self.lookup.contains_key(vertex)
    }

    /// Number of indexed vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if no vertex has been added yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the vertices in index order.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_insertion_order() {
        let mut index = VertexIndex::new();
        assert!(index.insert("a"));
        assert!(index.insert("b"));
        assert!(index.insert("c"));

        assert_eq!(index.index_of(&"a").unwrap(), 1);
        assert_eq!(index.index_of(&"b").unwrap(), 2);
        assert_eq!(index.index_of(&"c").unwrap(), 3);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn duplicate_insert_is_a_no_op() {
        let mut index = VertexIndex::new();
        assert!(index.insert(7));
        assert!(!index.insert(7));
        assert_eq!(index.len(), 1);
        assert_eq!(index.index_of(&7).unwrap(), 1);
    }

    #[test]
    fn element_lookup_round_trips() {
        let mut index = VertexIndex::new();
        for v in ["x", "y", "z"] {
            index.insert(v);
        }
        for i in 1..=3 {
            let v = index.element_at(i).unwrap();
            assert_eq!(index.index_of(v).unwrap(), i);
        }
    }

    #[test]
    fn missing_vertex_fails_loudly() {
        let index: VertexIndex<i32> = VertexIndex::new();
        assert!(matches!(
            index.index_of(&1),
            Err(GraphError::VertexNotFound)
        ));
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let mut index = VertexIndex::new();
        index.insert(10);
        assert!(matches!(
            index.element_at(0),
            Err(GraphError::IndexOutOfRange { index: 0, len: 1 })
        ));
        assert!(matches!(
            index.element_at(2),
            Err(GraphError::IndexOutOfRange { index: 2, len: 1 })
        ));
    }

    #[test]
    fn range_access() {
        let mut index = VertexIndex::new();
        for v in 0..5 {
            index.insert(v);
        }
        assert_eq!(index.elements_in_range(2, 4).unwrap(), &[1, 2, 3]);
        assert_eq!(index.elements_in_range(1, 5).unwrap().len(), 5);
        assert!(index.elements_in_range(0, 2).is_err());
        assert!(index.elements_in_range(3, 6).is_err());
        assert!(index.elements_in_range(4, 3).is_err());
    }
}
