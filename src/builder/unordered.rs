//! The plain unordered builder: no root, no shells, no ordering discipline.

use std::hash::Hash;

use crate::graph::core::NeighborGraph;

/// Builds a [`NeighborGraph`] with vertices and edges supplied in any order.
///
/// `join` auto-creates either endpoint, unlike the breadth-first builders,
/// which only admit vertices reachable from the frontier.
#[derive(Debug)]
pub struct GraphBuilder<S> {
    graph: NeighborGraph<S>,
}

impl<S: Eq + Hash + Clone> Default for GraphBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Eq + Hash + Clone> GraphBuilder<S> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            graph: NeighborGraph::new(None),
        }
    }

    /// Creates a builder for a graph declared `degree`-regular, enabling the
    /// O(1) edge count.
    pub fn with_fixed_degree(degree: usize) -> Self {
        Self {
            graph: NeighborGraph::new(Some(degree)),
        }
    }

    /// Adds an isolated vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: S) -> bool {
        let before = self.graph.vertex_count();
        self.graph.insert_vertex(vertex);
        self.graph.vertex_count() > before
    }

    /// Records the undirected edge `(u, v)`, creating either endpoint if
    /// absent. Always succeeds while building.
    pub fn join(&mut self, u: S, v: S) -> bool {
        let ui = self.graph.insert_vertex(u);
        let vi = self.graph.insert_vertex(v);
        self.graph.connect(ui, vi);
        true
    }

    /// Read access to the graph under construction.
    #[inline]
    pub fn graph(&self) -> &NeighborGraph<S> {
        &self.graph
    }

    /// Sorts every neighbor list by index, freezes the graph, and releases
    /// it.
    pub fn finish(mut self) -> NeighborGraph<S> {
        self.graph.finish_in_place();
        self.graph
    }
}
