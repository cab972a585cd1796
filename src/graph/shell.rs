//! `ShellGraph` — a rooted neighbor graph indexed by breadth-first shells.
//!
//! A *shell* is the set of vertices at one breadth-first distance from the
//! root. Because the breadth-first builders only ever append vertices to the
//! currently open shell, each shell occupies a contiguous interval of the
//! 1-based vertex indices, and the whole interval structure is captured by a
//! single table of shell start indices (`shell_starts[d]` = first index at
//! distance `d`; the root is always index 1, shell 0).
//!
//! The payoff is the neighbor partition: breadth-first discipline means a
//! vertex at distance `d` only has neighbors at distances `d - 1`, `d`, and
//! `d + 1`, so its index-sorted neighbor list splits into exactly three
//! contiguous runs, found with two binary searches against the shell
//! boundaries.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `distance_from_root` | O(log D) | Binary scan of shell starts |
//! | `neighbors_in_*_shell` (finished) | O(log k + r) | Two boundary searches + run copy |
//! | `neighbors_in_*_shell` (building) | O(k log k) | Sorts a copy of the one queried list |
//! | `shell` | O(1) | Contiguous slice of the index table |

use std::hash::Hash;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{GraphError, Result};
use crate::graph::core::NeighborGraph;
use crate::index::VertexIndex;

/// Which of the three runs of a partitioned neighbor list to extract.
#[derive(Clone, Copy)]
enum Band {
    Previous,
    Same,
    Next,
}

/// A rooted graph whose vertex indices are grouped into breadth-first shells.
///
/// Only the breadth-first builders produce values of this type, so the shell
/// invariants (contiguous intervals, edge distances differing by at most one)
/// hold by construction. Distance queries work in either phase; the
/// binary-search neighbor partition is cheap once finished and falls back to
/// sorting the single queried list while still building.
#[derive(Debug, Clone)]
pub struct ShellGraph<S> {
    graph: NeighborGraph<S>,
    /// `shell_starts[d]` is the index of the first vertex at distance `d`.
    /// Strictly increasing; `shell_starts[0] == 1` whenever a root exists.
    shell_starts: Vec<usize>,
}

impl<S: Eq + Hash + Clone> ShellGraph<S> {
    /// Creates a graph holding only `root` (index 1, shell 0).
    pub(crate) fn with_root(root: S, fixed_degree: Option<usize>) -> Self {
        let mut graph = NeighborGraph::new(fixed_degree);
        graph.insert_vertex(root);
        Self {
            graph,
            shell_starts: vec![1],
        }
    }

    /// Assembles a finished shell graph from reconstructed parts.
    ///
    /// Used by the persistence layer; `shell_starts` must be strictly
    /// increasing and start at 1 when non-empty.
    pub(crate) fn from_parts(
        index: VertexIndex<S>,
        adjacency: Vec<Vec<usize>>,
        shell_starts: Vec<usize>,
        fixed_degree: Option<usize>,
    ) -> Self {
        let mut graph = NeighborGraph::from_parts(index, adjacency, fixed_degree);
        graph.finish_in_place();
        Self {
            graph,
            shell_starts,
        }
    }

    /// The underlying adjacency core.
    #[inline]
    pub fn graph(&self) -> &NeighborGraph<S> {
        &self.graph
    }

    /// The root vertex (index 1).
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] on the degenerate empty graph.
    pub fn root(&self) -> Result<&S> {
        self.graph.index().element_at(1)
    }

    /// Number of vertices. Delegates to the core.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Sum of neighbor-list sizes. Delegates to the core.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns whether the graph has been frozen.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.graph.is_finished()
    }

    /// Number of shells opened so far.
    #[inline]
    pub fn shell_count(&self) -> usize {
        self.shell_starts.len()
    }

    /// Largest breadth-first distance assigned so far (shells minus one).
    #[inline]
    pub fn max_distance_from_root(&self) -> usize {
        self.shell_starts.len().saturating_sub(1)
    }

    /// Index of the first vertex in shell `d`.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] if no shell `d` exists.
    pub fn shell_start(&self, d: usize) -> Result<usize> {
        self.shell_starts
            .get(d)
            .copied()
            .ok_or(GraphError::IndexOutOfRange {
                index: d,
                len: self.shell_starts.len(),
            })
    }

    /// The index interval `start..end` occupied by shell `d`.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] if no shell `d` exists.
    pub fn shell_bounds(&self, d: usize) -> Result<Range<usize>> {
        let start = self.shell_start(d)?;
        let end = self
            .shell_starts
            .get(d + 1)
            .copied()
            .unwrap_or(self.vertex_count() + 1);
        Ok(start..end)
    }

    /// Number of vertices in shell `d`.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] if no shell `d` exists.
    pub fn shell_size(&self, d: usize) -> Result<usize> {
        Ok(self.shell_bounds(d)?.len())
    }

    /// The vertices of shell `d`, in index order.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] if no shell `d` exists.
    pub fn shell(&self, d: usize) -> Result<&[S]> {
        let bounds = self.shell_bounds(d)?;
        self.graph
            .index()
            .elements_in_range(bounds.start, bounds.end - 1)
    }

    /// Breadth-first distance of the vertex with 1-based index `i`.
    ///
    /// # Errors
    /// [`GraphError::IndexOutOfRange`] if `i` is outside `1..=len`.
    pub fn distance_of_index(&self, i: usize) -> Result<usize> {
        if i == 0 || i > self.vertex_count() || self.shell_starts.is_empty() {
            return Err(GraphError::IndexOutOfRange {
                index: i,
                len: self.vertex_count(),
            });
        }
        // Rightmost shell whose start does not exceed i.
        Ok(self.shell_starts.partition_point(|&s| s <= i) - 1)
    }

    /// Breadth-first distance of `vertex` from the root.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if the vertex was never added.
    pub fn distance_from_root(&self, vertex: &S) -> Result<usize> {
        let i = self.graph.index().index_of(vertex)?;
        self.distance_of_index(i)
    }

    /// Neighbors of `vertex` lying strictly in the previous shell.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if the vertex was never added.
    pub fn neighbors_in_previous_shell(&self, vertex: &S) -> Result<Vec<&S>> {
        self.neighbor_band(vertex, Band::Previous)
    }

    /// Neighbors of `vertex` in its own shell.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if the vertex was never added.
    pub fn neighbors_in_same_shell(&self, vertex: &S) -> Result<Vec<&S>> {
        self.neighbor_band(vertex, Band::Same)
    }

    /// Neighbors of `vertex` lying strictly in the next shell.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if the vertex was never added.
    pub fn neighbors_in_next_shell(&self, vertex: &S) -> Result<Vec<&S>> {
        self.neighbor_band(vertex, Band::Next)
    }

    fn neighbor_band(&self, vertex: &S, band: Band) -> Result<Vec<&S>> {
        let i = self.graph.index().index_of(vertex)?;
        let d = self.distance_of_index(i)?;
        let run = self.neighbor_run(i, d, band);
        Ok(run
            .into_iter()
            .map(|n| self.graph.index().element_unchecked(n))
            .collect())
    }

    /// Extracts one contiguous run of the index-sorted neighbor list of the
    /// vertex at index `i` (distance `d`), split at the shell boundaries.
    fn neighbor_run(&self, i: usize, d: usize, band: Band) -> Vec<usize> {
        let lo = self.shell_starts[d];
        let hi = self
            .shell_starts
            .get(d + 1)
            .copied()
            .unwrap_or(self.vertex_count() + 1);

        let split = |list: &[usize]| {
            let p = list.partition_point(|&n| n < lo);
            let q = list.partition_point(|&n| n < hi);
            match band {
                Band::Previous => list[..p].to_vec(),
                Band::Same => list[p..q].to_vec(),
                Band::Next => list[q..].to_vec(),
            }
        };

        let list = self.graph.neighbor_indices_unchecked(i);
        if self.graph.is_finished() {
            split(list)
        } else {
            // Lazy fallback while building: sort a copy of this one list.
            let mut copy = list.to_vec();
            copy.sort_unstable();
            split(&copy)
        }
    }

    /// First previous-shell neighbor of the vertex at index `i`, if any.
    ///
    /// For breadth-first-built graphs every non-root vertex has one.
    pub(crate) fn parent_index(&self, i: usize) -> Option<usize> {
        let d = self.distance_of_index(i).ok()?;
        if d == 0 {
            return None;
        }
        let boundary = self.shell_starts[d];
        let list = self.graph.neighbor_indices_unchecked(i);
        if self.graph.is_finished() {
            list.first().copied().filter(|&n| n < boundary)
        } else {
            list.iter().copied().find(|&n| n < boundary)
        }
    }

    /// Applies one breadth-first `join(src, tgt)` under the radius
    /// discipline, mutating the graph only on acceptance.
    ///
    /// Returns the `(src, tgt)` indices of the recorded edge, or `None` when
    /// the join was rejected (graph untouched). Shared engine of the
    /// breadth-first builders; see [`crate::builder::BfsBuilder::join`] for
    /// the rules.
    pub(crate) fn admit_join(&mut self, src: &S, tgt: S) -> Option<(usize, usize)> {
        if self.graph.is_finished() {
            return None;
        }
        let Some(si) = self.graph.index().get(src) else {
            trace!("join rejected: source vertex not in graph");
            return None;
        };
        // Infallible: si came from the index.
        let sd = self.distance_of_index(si).ok()?;
        let diameter = self.shell_starts.len() - 1;
        // The source must sit on the open frontier or the shell just closed.
        if sd + 1 < diameter {
            trace!(
                source_distance = sd,
                diameter,
                "join rejected: source behind the frontier"
            );
            return None;
        }

        let ti = match self.graph.index().get(&tgt) {
            Some(ti) => {
                let td = self.distance_of_index(ti).ok()?;
                if sd.abs_diff(td) > 1 {
                    trace!(
                        source_distance = sd,
                        target_distance = td,
                        "join rejected: edge would jump more than one shell"
                    );
                    return None;
                }
                ti
            }
            None if sd == diameter => {
                // Target opens the next shell.
                let ti = self.graph.insert_vertex(tgt);
                self.shell_starts.push(ti);
                ti
            }
            None => {
                // sd == diameter - 1: target joins the open shell.
                self.graph.insert_vertex(tgt)
            }
        };

        self.graph.connect(si, ti);
        Some((si, ti))
    }

    /// Sorts and freezes the underlying core. `false` if already finished.
    pub(crate) fn finish_in_place(&mut self) -> bool {
        self.graph.finish_in_place()
    }

    /// Shell start table, for the persistence layer.
    #[inline]
    pub(crate) fn shell_starts(&self) -> &[usize] {
        &self.shell_starts
    }

    /// Summarizes the shell structure and degree distribution.
    pub fn statistics(&self) -> ShellStatistics {
        let n = self.vertex_count();
        let degrees: Vec<usize> = (1..=n)
            .map(|i| self.graph.neighbor_indices_unchecked(i).len())
            .collect();
        let shell_sizes: Vec<usize> = (0..self.shell_count())
            .map(|d| self.shell_bounds(d).map_or(0, |b| b.len()))
            .collect();

        ShellStatistics {
            vertex_count: n,
            edge_count: self.edge_count(),
            shell_count: self.shell_count(),
            max_distance: self.max_distance_from_root(),
            shell_sizes,
            min_degree: degrees.iter().copied().min().unwrap_or(0),
            max_degree: degrees.iter().copied().max().unwrap_or(0),
            average_degree: if n == 0 {
                0.0
            } else {
                self.edge_count() as f64 / n as f64
            },
        }
    }
}

/// Summary of a shell graph's size, layering, and degree distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellStatistics {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Sum of neighbor-list sizes (each undirected edge counted twice).
    pub edge_count: usize,
    /// Number of breadth-first shells.
    pub shell_count: usize,
    /// Largest distance from the root.
    pub max_distance: usize,
    /// Vertices per shell, from the root outward.
    pub shell_sizes: Vec<usize>,
    /// Minimum neighbor-list length.
    pub min_degree: usize,
    /// Maximum neighbor-list length.
    pub max_degree: usize,
    /// `edge_count / vertex_count`; equals the degree of a regular graph.
    pub average_degree: f64,
}
