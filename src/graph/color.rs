//! `ColorGraph` — an edge-labeled shell graph with a color involution.
//!
//! Each directed edge `src → tgt` carries a [`Color`], the generator index in
//! a Cayley graph. Colors come in involutive pairs: if `src → tgt` is colored
//! `c`, the reverse edge `tgt → src` is colored `inv(c)`, mirroring that
//! traversing an edge backwards applies the inverse generator. The involution
//! table is supplied by the caller and trusted as given; the builders never
//! verify the self-inverse property (use [`ColorInvolution::is_involution`]
//! in tests if it matters).
//!
//! Per vertex the graph keeps both directions of the correspondence:
//! `color → neighbor index` for walking color words, and
//! `neighbor index → color` for deriving the word along a known path.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::trace;

use crate::error::Result;
use crate::graph::shell::{ShellGraph, ShellStatistics};
use crate::index::VertexIndex;

/// An edge label; the index of a generator in Cayley-graph use.
///
/// Colors are nonzero by convention: label `0` is reserved as the shell
/// sentinel of the persisted sparse-adjacency format (see [`crate::io`]).
pub type Color = u32;

/// A total self-inverse mapping on colors.
///
/// Pairing is always installed in both directions, so a well-formed table
/// satisfies `inverse(inverse(c)) == c` for every color it contains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorInvolution {
    inverse: HashMap<Color, Color>,
}

impl ColorInvolution {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from mutually inverse pairs; `(c, c)` marks a
    /// self-inverse color.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Color, Color)>) -> Self {
        let mut table = Self::new();
        for (a, b) in pairs {
            table.pair(a, b);
        }
        table
    }

    /// Declares `a` and `b` mutually inverse.
    ///
    /// Re-pairing a color detaches its previous partner, so the table stays
    /// a genuine involution.
    pub fn pair(&mut self, a: Color, b: Color) {
        if let Some(old) = self.inverse.insert(a, b) {
            if old != a && old != b {
                self.inverse.remove(&old);
            }
        }
        if let Some(old) = self.inverse.insert(b, a) {
            if old != a && old != b {
                self.inverse.remove(&old);
            }
        }
    }

    /// Declares `c` self-inverse.
    pub fn fix(&mut self, c: Color) {
        self.pair(c, c);
    }

    /// The inverse of `c`, if `c` is in the table.
    #[inline]
    pub fn inverse(&self, c: Color) -> Option<Color> {
        self.inverse.get(&c).copied()
    }

    /// Returns whether `c` is in the table.
    #[inline]
    pub fn contains(&self, c: Color) -> bool {
        self.inverse.contains_key(&c)
    }

    /// Checks the self-inverse property over the whole table.
    pub fn is_involution(&self) -> bool {
        self.inverse
            .iter()
            .all(|(&c, &i)| self.inverse.get(&i) == Some(&c))
    }

    /// Iterates over the colors in the table.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.inverse.keys().copied()
    }

    /// Number of colors in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.inverse.len()
    }

    /// Returns `true` if the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inverse.is_empty()
    }
}

/// Per-vertex color tables, parallel to the vertex index.
#[derive(Debug, Clone, Default)]
pub(crate) struct VertexColors {
    /// Color of the outgoing edge → neighbor index. Last write wins.
    pub(crate) by_color: HashMap<Color, usize>,
    /// Neighbor index → color of the outgoing edge. First write wins, so the
    /// navigator sees one stable canonical color per neighbor even in
    /// multigraphs.
    pub(crate) by_neighbor: HashMap<usize, Color>,
}

/// A shell graph whose edges carry involutive colors.
#[derive(Debug, Clone)]
pub struct ColorGraph<S> {
    shell: ShellGraph<S>,
    colors: Vec<VertexColors>,
    involution: ColorInvolution,
}

impl<S: Eq + Hash + Clone> ColorGraph<S> {
    /// Creates a graph holding only `root`.
    pub(crate) fn with_root(
        root: S,
        involution: ColorInvolution,
        fixed_degree: Option<usize>,
    ) -> Self {
        Self {
            shell: ShellGraph::with_root(root, fixed_degree),
            colors: vec![VertexColors::default()],
            involution,
        }
    }

    /// The degenerate finished graph with no vertices at all.
    ///
    /// Only produced by the persistence layer when a read degrades.
    pub(crate) fn empty() -> Self {
        Self {
            shell: ShellGraph::from_parts(VertexIndex::new(), Vec::new(), Vec::new(), None),
            colors: Vec::new(),
            involution: ColorInvolution::new(),
        }
    }

    /// Assembles a finished color graph from reconstructed parts.
    pub(crate) fn from_parts(
        index: VertexIndex<S>,
        adjacency: Vec<Vec<usize>>,
        shell_starts: Vec<usize>,
        colors: Vec<VertexColors>,
        involution: ColorInvolution,
    ) -> Self {
        Self {
            shell: ShellGraph::from_parts(index, adjacency, shell_starts, None),
            colors,
            involution,
        }
    }

    /// The underlying shell-indexed graph.
    #[inline]
    pub fn shell(&self) -> &ShellGraph<S> {
        &self.shell
    }

    /// Shortcut to the vertex ↔ index table.
    #[inline]
    pub(crate) fn vertex_index(&self) -> &VertexIndex<S> {
        self.shell.graph().index()
    }

    /// The color involution this graph was built with.
    #[inline]
    pub fn involution(&self) -> &ColorInvolution {
        &self.involution
    }

    /// Number of vertices. Delegates to the shell graph.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.shell.vertex_count()
    }

    /// Sum of neighbor-list sizes. Delegates to the shell graph.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.shell.edge_count()
    }

    /// Returns whether the graph has been frozen.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.shell.is_finished()
    }

    /// Breadth-first distance of `vertex`. Delegates to the shell graph.
    ///
    /// # Errors
    /// [`crate::GraphError::VertexNotFound`] if the vertex was never added.
    pub fn distance_from_root(&self, vertex: &S) -> Result<usize> {
        self.shell.distance_from_root(vertex)
    }

    /// Shell and degree summary. Delegates to the shell graph.
    pub fn statistics(&self) -> ShellStatistics {
        self.shell.statistics()
    }

    /// The neighbor reached from `vertex` along the edge colored `color`,
    /// or `None` if `vertex` has no outgoing edge of that color.
    ///
    /// # Errors
    /// [`crate::GraphError::VertexNotFound`] if the vertex was never added.
    pub fn neighbor_by_color(&self, vertex: &S, color: Color) -> Result<Option<&S>> {
        let i = self.shell.graph().index().index_of(vertex)?;
        Ok(self
            .neighbor_index_by_color(i, color)
            .map(|n| self.shell.graph().index().element_unchecked(n)))
    }

    /// The canonical color of the directed edge `u → v`, or `None` if the
    /// edge does not exist.
    ///
    /// # Errors
    /// [`crate::GraphError::VertexNotFound`] if either vertex was never
    /// added.
    pub fn color_between(&self, u: &S, v: &S) -> Result<Option<Color>> {
        let ui = self.shell.graph().index().index_of(u)?;
        let vi = self.shell.graph().index().index_of(v)?;
        Ok(self.color_between_indices(ui, vi))
    }

    #[inline]
    pub(crate) fn neighbor_index_by_color(&self, i: usize, color: Color) -> Option<usize> {
        self.colors.get(i - 1)?.by_color.get(&color).copied()
    }

    #[inline]
    pub(crate) fn color_between_indices(&self, i: usize, j: usize) -> Option<Color> {
        self.colors.get(i - 1)?.by_neighbor.get(&j).copied()
    }

    /// One colored breadth-first join: admits `(src, tgt)` under the radius
    /// discipline, then installs `color` on `src → tgt` and its inverse on
    /// `tgt → src`.
    ///
    /// Rejected (returning `false`, graph untouched) when the shell engine
    /// rejects the edge or when `color` has no inverse in the involution
    /// table, since the reverse edge could not be labeled.
    pub(crate) fn join_colored(&mut self, src: &S, tgt: S, color: Color) -> bool {
        let Some(inv) = self.involution.inverse(color) else {
            trace!(color, "join rejected: color has no inverse in the involution");
            return false;
        };
        let Some((si, ti)) = self.shell.admit_join(src, tgt) else {
            return false;
        };
        // New vertices may have been created by the admission.
        while self.colors.len() < self.shell.vertex_count() {
            self.colors.push(VertexColors::default());
        }
        self.install(si, ti, color);
        self.install(ti, si, inv);
        true
    }

    fn install(&mut self, from: usize, to: usize, color: Color) {
        let table = &mut self.colors[from - 1];
        table.by_color.insert(color, to);
        table.by_neighbor.entry(to).or_insert(color);
    }

    /// Sorts and freezes the underlying core. `false` if already finished.
    pub(crate) fn finish_in_place(&mut self) -> bool {
        self.shell.finish_in_place()
    }
}
