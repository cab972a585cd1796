//! `Navigator` — canonical color words and group-style products over a
//! finished [`ColorGraph`].
//!
//! In a Cayley graph the color word along a path is a word in the
//! generators, so a shortest root-to-vertex word is a canonical expression of
//! the vertex's group element, and walking one vertex's word starting at
//! another realizes group multiplication. The derivation descends shell by
//! shell — at every non-root vertex some neighbor lies strictly in the
//! previous shell, guaranteed by the breadth-first construction — and is
//! iterative throughout: expander-sized graphs make recursion a stack-depth
//! hazard.
//!
//! The navigator memoizes root words per target index. The cache has no
//! invalidation hook: it is sound precisely because the navigator borrows a
//! finished, no-longer-mutated graph, and it is cleared only by an explicit
//! [`Navigator::clear_cache`].

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{GraphError, Result};
use crate::graph::color::{Color, ColorGraph};

/// Root index of every rooted graph in this crate.
const ROOT: usize = 1;

/// Path derivation and word composition over a finished color graph.
pub struct Navigator<'g, S> {
    graph: &'g ColorGraph<S>,
    /// Memoized root words, keyed by target vertex index.
    cache: HashMap<usize, Vec<Color>>,
}

impl<'g, S: Eq + Hash + Clone> Navigator<'g, S> {
    /// Creates a navigator over `graph`.
    ///
    /// The graph should be finished; on a still-building graph every
    /// previous-shell lookup pays the per-query sorting fallback.
    pub fn new(graph: &'g ColorGraph<S>) -> Self {
        Self {
            graph,
            cache: HashMap::new(),
        }
    }

    /// The canonical shortest color word from the root to `vertex`
    /// (empty for the root itself). Uncached.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if the vertex was never added;
    /// [`GraphError::EdgeNotFound`] if the path cannot be labeled, which
    /// indicates a graph not built by a colored breadth-first builder.
    pub fn word_from_root(&self, vertex: &S) -> Result<Vec<Color>> {
        let i = self.graph.vertex_index().index_of(vertex)?;
        derive_root_word(self.graph, i)
    }

    /// The color word leading from `vertex` back to the root: the reversed
    /// root word with every color inverted, read off the reverse edges.
    ///
    /// # Errors
    /// As for [`Self::word_from_root`].
    pub fn word_to_root(&self, vertex: &S) -> Result<Vec<Color>> {
        let mut i = self.graph.vertex_index().index_of(vertex)?;
        let mut word = Vec::new();
        while i != ROOT {
            let parent = self
                .graph
                .shell()
                .parent_index(i)
                .ok_or(GraphError::EdgeNotFound)?;
            let c = self
                .graph
                .color_between_indices(i, parent)
                .ok_or(GraphError::EdgeNotFound)?;
            word.push(c);
            i = parent;
        }
        Ok(word)
    }

    /// Walks `word` color by color starting at `start`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] for an unknown start;
    /// [`GraphError::EdgeNotFound`] if some step has no edge of the
    /// requested color.
    pub fn walk(&self, start: &S, word: &[Color]) -> Result<&'g S> {
        let i = self.graph.vertex_index().index_of(start)?;
        let end = walk_indices(self.graph, i, word)?;
        Ok(self.graph.vertex_index().element_unchecked(end))
    }

    /// Left product: walks the root word of `vertex` starting at `by`,
    /// realizing `by * vertex` in Cayley-graph terms. Memoizes the word.
    ///
    /// # Errors
    /// As for [`Self::walk`].
    pub fn left_product_by(&mut self, vertex: &S, by: &S) -> Result<&'g S> {
        let graph = self.graph;
        let vi = graph.vertex_index().index_of(vertex)?;
        let start = graph.vertex_index().index_of(by)?;
        let word = self.root_word_cached(vi)?;
        let end = walk_indices(graph, start, word)?;
        Ok(graph.vertex_index().element_unchecked(end))
    }

    /// Right product: walks the root word of `by` starting at `vertex`,
    /// realizing `vertex * by`. Memoizes the word.
    ///
    /// # Errors
    /// As for [`Self::walk`].
    pub fn right_product_by(&mut self, vertex: &S, by: &S) -> Result<&'g S> {
        let graph = self.graph;
        let start = graph.vertex_index().index_of(vertex)?;
        let bi = graph.vertex_index().index_of(by)?;
        let word = self.root_word_cached(bi)?;
        let end = walk_indices(graph, start, word)?;
        Ok(graph.vertex_index().element_unchecked(end))
    }

    /// Number of memoized root words.
    #[inline]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    /// Drops every memoized root word.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    fn root_word_cached(&mut self, i: usize) -> Result<&[Color]> {
        let graph = self.graph;
        match self.cache.entry(i) {
            Entry::Occupied(e) => Ok(e.into_mut().as_slice()),
            Entry::Vacant(e) => Ok(e.insert(derive_root_word(graph, i)?).as_slice()),
        }
    }
}

/// Shell-by-shell descent from index `i` to the root, collecting the colors
/// of the downward edges and reversing into root-to-vertex order.
fn derive_root_word<S: Eq + Hash + Clone>(graph: &ColorGraph<S>, mut i: usize) -> Result<Vec<Color>> {
    let mut word = Vec::new();
    while i != ROOT {
        let parent = graph
            .shell()
            .parent_index(i)
            .ok_or(GraphError::EdgeNotFound)?;
        let c = graph
            .color_between_indices(parent, i)
            .ok_or(GraphError::EdgeNotFound)?;
        word.push(c);
        i = parent;
    }
    word.reverse();
    Ok(word)
}

fn walk_indices<S: Eq + Hash + Clone>(
    graph: &ColorGraph<S>,
    mut i: usize,
    word: &[Color],
) -> Result<usize> {
    for &c in word {
        i = graph
            .neighbor_index_by_color(i, c)
            .ok_or(GraphError::EdgeNotFound)?;
    }
    Ok(i)
}
