//! The colored breadth-first builder.

use std::hash::Hash;

use crate::graph::color::{Color, ColorGraph, ColorInvolution};

/// Builds a [`ColorGraph`] under the same radius discipline as
/// [`crate::builder::BfsBuilder`], labeling every accepted edge.
///
/// `join(src, tgt, color)` installs `color` on `src → tgt` and the
/// involution's inverse on `tgt → src`. The involution table is taken on
/// trust — the builder never checks the self-inverse property — but a color
/// with *no* inverse in the table is rejected outright, since the reverse
/// edge could not be labeled.
#[derive(Debug)]
pub struct ColorBfsBuilder<S> {
    graph: ColorGraph<S>,
}

impl<S: Eq + Hash + Clone> ColorBfsBuilder<S> {
    /// Starts a graph at `root` with the given involution table.
    pub fn new(root: S, involution: ColorInvolution) -> Self {
        Self {
            graph: ColorGraph::with_root(root, involution, None),
        }
    }

    /// Starts a graph declared `degree`-regular at `root`.
    pub fn with_fixed_degree(root: S, involution: ColorInvolution, degree: usize) -> Self {
        Self {
            graph: ColorGraph::with_root(root, involution, Some(degree)),
        }
    }

    /// Index of the highest shell opened so far.
    #[inline]
    pub fn diameter(&self) -> usize {
        self.graph.shell().max_distance_from_root()
    }

    /// Attempts one colored breadth-first join.
    ///
    /// Returns `false` (no mutation) on a radius violation, unknown `src`, a
    /// color without an inverse, or after `finish`.
    pub fn join(&mut self, src: &S, tgt: S, color: Color) -> bool {
        self.graph.join_colored(src, tgt, color)
    }

    /// Read access to the graph under construction.
    #[inline]
    pub fn graph(&self) -> &ColorGraph<S> {
        &self.graph
    }

    /// Freezes the graph and releases it.
    pub fn finish(mut self) -> ColorGraph<S> {
        self.graph.finish_in_place();
        self.graph
    }
}
