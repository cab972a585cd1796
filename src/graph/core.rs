//! `NeighborGraph` — the two-phase adjacency core.
//!
//! Stores one neighbor list per vertex, addressed through a [`VertexIndex`]
//! so every list holds plain 1-based indices. The structure moves through a
//! one-way `Building → Finished` state machine: while building, lists grow in
//! arrival order; finishing sorts every list ascending by index and freezes
//! the graph. Index-sorted lists are what make the shell queries in
//! [`super::shell`] binary-searchable.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `insert_vertex` | O(1) amortized | Appends to the index and adjacency |
//! | `connect` | O(1) amortized | Pushes both half-edges |
//! | `has_edge` | O(log k) / O(k) | Binary search once finished, scan while building |
//! | `degree` | O(1) | List length |
//! | `edge_count` | O(n) / O(1) | O(1) under a fixed-degree hint |
//! | `finish` | O(m log m) | One sort per neighbor list |

use std::hash::Hash;

use tracing::debug;

use crate::error::Result;
use crate::index::VertexIndex;

/// Construction phase of a graph.
///
/// The transition is one-way: once `Finished`, the structure is logically
/// immutable and mutating calls fail silently (return `false`) without
/// touching any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    /// Vertices and edges may still be added through a builder.
    Building,
    /// Neighbor lists are index-sorted and the graph is frozen.
    Finished,
}

/// An undirected adjacency store over indexed vertices.
///
/// Mutation is crate-internal: the public way to grow a graph is one of the
/// builders in [`crate::builder`], which enforce their respective
/// construction disciplines and hand out the frozen value from `finish`.
#[derive(Debug, Clone)]
pub struct NeighborGraph<S> {
    index: VertexIndex<S>,
    /// `adjacency[i - 1]` holds the neighbor indices of the vertex with
    /// index `i`. Parallel edges are kept: a Cayley graph is a multigraph
    /// whenever two generators send a vertex to the same place.
    adjacency: Vec<Vec<usize>>,
    fixed_degree: Option<usize>,
    state: BuildState,
}

impl<S: Eq + Hash + Clone> NeighborGraph<S> {
    pub(crate) fn new(fixed_degree: Option<usize>) -> Self {
        Self {
            index: VertexIndex::new(),
            adjacency: Vec::new(),
            fixed_degree,
            state: BuildState::Building,
        }
    }

    /// Rebuilds a core from reconstructed parts (persistence layer).
    ///
    /// `adjacency` must be parallel to `index`; the result is still
    /// `Building` so the caller decides when to sort and freeze.
    pub(crate) fn from_parts(
        index: VertexIndex<S>,
        adjacency: Vec<Vec<usize>>,
        fixed_degree: Option<usize>,
    ) -> Self {
        debug_assert_eq!(index.len(), adjacency.len());
        Self {
            index,
            adjacency,
            fixed_degree,
            state: BuildState::Building,
        }
    }

    /// The vertex ↔ index table.
    #[inline]
    pub fn index(&self) -> &VertexIndex<S> {
        &self.index
    }

    /// Current construction phase.
    #[inline]
    pub fn state(&self) -> BuildState {
        self.state
    }

    /// Returns `true` once [`finish`](Self::finish_in_place) has run.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state == BuildState::Finished
    }

    /// The degree every vertex is expected to have, if the graph was
    /// declared regular at construction time.
    #[inline]
    pub fn fixed_degree(&self) -> Option<usize> {
        self.fixed_degree
    }

    /// Number of indexed vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// Sum of neighbor-list sizes, counting each undirected edge once per
    /// endpoint.
    ///
    /// Under a fixed-degree hint this is `vertex_count() * degree` — an
    /// optimization for regular graphs, never a re-derivation.
    pub fn edge_count(&self) -> usize {
        match self.fixed_degree {
            Some(d) => self.index.len() * d,
            None => self.adjacency.iter().map(Vec::len).sum(),
        }
    }

    /// Returns whether `vertex` is part of the graph.
    #[inline]
    pub fn contains_vertex(&self, vertex: &S) -> bool {
        self.index.contains(vertex)
    }

    /// Returns whether `v` appears in `u`'s neighbor list.
    ///
    /// `false` if either endpoint was never added.
    pub fn has_edge(&self, u: &S, v: &S) -> bool {
        let (Some(ui), Some(vi)) = (self.index.get(u), self.index.get(v)) else {
            return false;
        };
        let list = &self.adjacency[ui - 1];
        if self.is_finished() {
            list.binary_search(&vi).is_ok()
        } else {
            list.contains(&vi)
        }
    }

    /// Degree (neighbor-list length, with multiplicity) of `vertex`.
    ///
    /// # Errors
    /// [`crate::GraphError::VertexNotFound`] if the vertex was never added.
    pub fn degree(&self, vertex: &S) -> Result<usize> {
        let i = self.index.index_of(vertex)?;
        Ok(self.adjacency[i - 1].len())
    }

    /// Neighbor indices of the vertex with 1-based index `i`
    /// (index-sorted once the graph is finished).
    ///
    /// # Errors
    /// [`crate::GraphError::IndexOutOfRange`] if `i` is outside `1..=len`.
    pub fn neighbor_indices(&self, i: usize) -> Result<&[usize]> {
        // element_at performs the range check.
        self.index.element_at(i)?;
        Ok(&self.adjacency[i - 1])
    }

    /// Iterates over the neighbors of `vertex` as vertex values.
    ///
    /// # Errors
    /// [`crate::GraphError::VertexNotFound`] if the vertex was never added.
    pub fn neighbors(&self, vertex: &S) -> Result<impl Iterator<Item = &S>> {
        let i = self.index.index_of(vertex)?;
        Ok(self.adjacency[i - 1]
            .iter()
            .map(|&n| self.index.element_unchecked(n)))
    }

    /// Adds `vertex` if absent and returns its index (new or existing).
    ///
    /// No-op returning the existing index if the graph is finished and the
    /// vertex is known; callers gate on state before inserting new vertices.
    pub(crate) fn insert_vertex(&mut self, vertex: S) -> usize {
        if let Some(i) = self.index.get(&vertex) {
            return i;
        }
        self.index.insert(vertex);
        self.adjacency.push(Vec::new());
        self.index.len()
    }

    /// Records the undirected edge between indices `ui` and `vi` by pushing
    /// each onto the other's neighbor list.
    pub(crate) fn connect(&mut self, ui: usize, vi: usize) {
        self.adjacency[ui - 1].push(vi);
        self.adjacency[vi - 1].push(ui);
    }

    /// Raw neighbor list access for the shell machinery.
    #[inline]
    pub(crate) fn neighbor_indices_unchecked(&self, i: usize) -> &[usize] {
        &self.adjacency[i - 1]
    }

    /// Sorts every neighbor list ascending by index and freezes the graph.
    ///
    /// Returns `false` (leaving everything untouched) if already finished.
    pub(crate) fn finish_in_place(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        for list in &mut self.adjacency {
            list.sort_unstable();
        }
        self.state = BuildState::Finished;
        debug!(
            vertices = self.vertex_count(),
            half_edges = self.adjacency.iter().map(Vec::len).sum::<usize>(),
            "neighbor graph finished"
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> NeighborGraph<&'static str> {
        let mut g = NeighborGraph::new(None);
        let a = g.insert_vertex("a");
        let b = g.insert_vertex("b");
        let c = g.insert_vertex("c");
        g.connect(a, b);
        g.connect(b, c);
        g.connect(c, a);
        g
    }

    #[test]
    fn counts_and_membership() {
        let g = triangle();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 6); // each edge counted at both endpoints
        assert!(g.contains_vertex(&"a"));
        assert!(!g.contains_vertex(&"d"));
        assert!(g.has_edge(&"a", &"b"));
        assert!(g.has_edge(&"b", &"a"));
        assert!(!g.has_edge(&"a", &"d"));
    }

    #[test]
    fn fixed_degree_shortcuts_edge_count() {
        let mut g = NeighborGraph::new(Some(4));
        g.insert_vertex(1);
        g.insert_vertex(2);
        assert_eq!(g.edge_count(), 8);
    }

    #[test]
    fn finish_sorts_and_freezes() {
        let mut g = triangle();
        assert_eq!(g.state(), BuildState::Building);
        assert!(g.finish_in_place());
        assert_eq!(g.state(), BuildState::Finished);

        for i in 1..=g.vertex_count() {
            let nbrs = g.neighbor_indices(i).unwrap();
            assert!(nbrs.windows(2).all(|w| w[0] <= w[1]));
        }

        // A second finish fails silently.
        assert!(!g.finish_in_place());
    }

    #[test]
    fn neighbors_resolve_to_vertices() {
        let mut g = triangle();
        g.finish_in_place();
        let nbrs: Vec<_> = g.neighbors(&"a").unwrap().copied().collect();
        assert_eq!(nbrs, vec!["b", "c"]);
    }

    #[test]
    fn duplicate_vertex_keeps_its_index() {
        let mut g = NeighborGraph::new(None);
        assert_eq!(g.insert_vertex(42), 1);
        assert_eq!(g.insert_vertex(42), 1);
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut g = NeighborGraph::new(None);
        let u = g.insert_vertex(0);
        let v = g.insert_vertex(1);
        g.connect(u, v);
        g.connect(u, v);
        assert_eq!(g.degree(&0).unwrap(), 2);
        assert_eq!(g.edge_count(), 4);
    }
}
