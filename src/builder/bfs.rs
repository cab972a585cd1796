//! The breadth-first builder: the correctness engine behind shell indexing.

use std::hash::Hash;

use crate::graph::shell::ShellGraph;

/// Builds a [`ShellGraph`] under the breadth-first radius discipline.
///
/// The builder tracks the *diameter* — the index of the highest shell opened
/// so far — and admits `join(src, tgt)` only when it keeps radial distances
/// consistent with true breadth-first semantics:
///
/// 1. `src` must lie on the open frontier (distance `diameter`) or the shell
///    just completed (distance `diameter - 1`); anything deeper is rejected.
/// 2. A new `tgt` joins the open shell when `src` is at `diameter - 1`, or
///    opens shell `diameter + 1` when `src` is at `diameter`.
/// 3. An existing `tgt` is accepted iff its distance differs from `src`'s by
///    at most one.
///
/// Rejections return `false` and leave the graph byte-for-byte unchanged;
/// callers must check the return value. Distances assigned at insertion never
/// change, and every shell stays a contiguous index interval.
///
/// There is deliberately no `add_vertex`: vertices can only enter through
/// `join`, so the shell invariants cannot be bypassed.
#[derive(Debug)]
pub struct BfsBuilder<S> {
    graph: ShellGraph<S>,
}

impl<S: Eq + Hash + Clone> BfsBuilder<S> {
    /// Starts a graph at `root` (index 1, shell 0).
    pub fn new(root: S) -> Self {
        Self {
            graph: ShellGraph::with_root(root, None),
        }
    }

    /// Starts a graph declared `degree`-regular at `root`.
    pub fn with_fixed_degree(root: S, degree: usize) -> Self {
        Self {
            graph: ShellGraph::with_root(root, Some(degree)),
        }
    }

    /// Index of the highest shell opened so far.
    #[inline]
    pub fn diameter(&self) -> usize {
        self.graph.max_distance_from_root()
    }

    /// Attempts one breadth-first join; see the type docs for the rules.
    ///
    /// Returns `false` (no mutation) on any radius violation, unknown `src`,
    /// or after `finish`.
    pub fn join(&mut self, src: &S, tgt: S) -> bool {
        self.graph.admit_join(src, tgt).is_some()
    }

    /// Read access to the graph under construction. Shell partition queries
    /// on this view use the per-query sorting fallback until `finish`.
    #[inline]
    pub fn graph(&self) -> &ShellGraph<S> {
        &self.graph
    }

    /// Sorts every neighbor list by index, freezes the graph, and releases
    /// it; binary-search partition queries are valid from here on.
    pub fn finish(mut self) -> ShellGraph<S> {
        self.graph.finish_in_place();
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_scenario() {
        let mut b = BfsBuilder::new("r");
        assert_eq!(b.diameter(), 0);

        // r -> a opens shell 1.
        assert!(b.join(&"r", "a"));
        assert_eq!(b.graph().graph().index().index_of(&"a").unwrap(), 2);
        assert_eq!(b.graph().distance_from_root(&"a").unwrap(), 1);
        assert_eq!(b.diameter(), 1);

        // r -> b joins the open shell 1.
        assert!(b.join(&"r", "b"));
        assert_eq!(b.graph().graph().index().index_of(&"b").unwrap(), 3);
        assert_eq!(b.graph().distance_from_root(&"b").unwrap(), 1);
        assert_eq!(b.diameter(), 1);

        // a -> c opens shell 2.
        assert!(b.join(&"a", "c"));
        assert_eq!(b.graph().graph().index().index_of(&"c").unwrap(), 4);
        assert_eq!(b.graph().distance_from_root(&"c").unwrap(), 2);
        assert_eq!(b.diameter(), 2);

        // b and a are both at distance 1: accepted.
        assert!(b.join(&"b", "a"));

        // b (distance 1 = diameter - 1) to the existing c (distance 2):
        // a one-shell step, admitted by the radius rules.
        let edges = b.graph().edge_count();
        assert!(b.join(&"b", "c"));
        assert_eq!(b.graph().edge_count(), edges + 2);
    }

    #[test]
    fn two_shell_jumps_are_rejected_without_mutation() {
        let mut b = BfsBuilder::new(0u32);
        assert!(b.join(&0, 1));
        assert!(b.join(&1, 2));
        assert!(b.join(&2, 3)); // diameter now 3

        let (v, e) = (b.graph().vertex_count(), b.graph().edge_count());

        // 3 is at distance 3, 1 at distance 1.
        assert!(!b.join(&3, 1));
        // Source behind the frontier entirely.
        assert!(!b.join(&0, 9));
        // Unknown source.
        assert!(!b.join(&42, 9));

        assert_eq!(b.graph().vertex_count(), v);
        assert_eq!(b.graph().edge_count(), e);
    }

    #[test]
    fn source_on_closed_shell_extends_the_open_shell() {
        let mut b = BfsBuilder::new(0u32);
        assert!(b.join(&0, 1));
        assert!(b.join(&1, 2)); // opens shell 2, diameter 2

        // 0 is at distance 0 = diameter - 2: rejected.
        assert!(!b.join(&0, 3));
        // 1 is at distance 1 = diameter - 1: new vertex joins shell 2.
        assert!(b.join(&1, 3));
        assert_eq!(b.graph().distance_from_root(&3).unwrap(), 2);

        let g = b.finish();
        assert_eq!(g.shell_size(2).unwrap(), 2);
    }

    #[test]
    fn finish_sorts_adjacency_by_index() {
        let mut b = BfsBuilder::new(0u32);
        for v in [1, 2, 3] {
            assert!(b.join(&0, v));
        }
        assert!(b.join(&3, 4));
        assert!(b.join(&1, 4));
        let g = b.finish();

        for i in 1..=g.vertex_count() {
            let nbrs = g.graph().neighbor_indices(i).unwrap();
            assert!(nbrs.windows(2).all(|w| w[0] <= w[1]), "vertex {i} unsorted");
        }
    }
}
