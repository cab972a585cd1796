//! # `shellgraph` - Shell-Indexed Breadth-First Graphs
//!
//! Builds and navigates large regular or edge-colored graphs representing
//! algebraic structures — the motivating case being Cayley graphs of finite
//! groups such as PGL2(F_q), grown from abstract generating sets.
//!
//! ## Core Ideas
//!
//! ### Indexed vertices
//! Every vertex receives a stable 1-based index in insertion order through
//! [`VertexIndex`], a permanent bijection between vertices and `1..=N`.
//! Adjacency is stored as plain index lists, sorted by index once
//! construction finishes.
//!
//! ### Shells
//! A *shell* is the set of vertices at one breadth-first distance from the
//! root. The breadth-first builders fill shells contiguously, so each shell
//! is a contiguous index interval and a vertex's distance is a binary scan
//! over the shell-start table. Because edges never jump more than one shell,
//! a sorted neighbor list splits into exactly three contiguous runs —
//! previous, same, and next shell — found by binary search
//! ([`ShellGraph::neighbors_in_previous_shell`] and friends).
//!
//! ### Two-phase construction
//! Graphs move one way through `Building → Finished` ([`BuildState`]).
//! Mutation happens only through a builder ([`GraphBuilder`],
//! [`BfsBuilder`], [`ColorBfsBuilder`]); `finish(self)` sorts every neighbor
//! list and releases the frozen value. Construction-time rejections — joins
//! violating the breadth-first radius discipline — return `false` and leave
//! the graph untouched, so generator streams can be filtered by the builder
//! itself. Post-finish mutation fails silently the same way.
//!
//! ### Colors
//! In a Cayley graph each edge is an application of a generator, recorded as
//! a [`Color`] on the directed edge with the inverse generator's color on
//! the reverse edge ([`ColorInvolution`]). A [`Navigator`] derives canonical
//! shortest root-to-vertex color words and composes them into group-style
//! products by walking the graph.
//!
//! ## Example
//!
//! ```rust
//! use shellgraph::BfsBuilder;
//!
//! let mut builder = BfsBuilder::new("root");
//! assert!(builder.join(&"root", "a"));
//! assert!(builder.join(&"root", "b"));
//! assert!(builder.join(&"a", "c")); // opens shell 2
//!
//! let graph = builder.finish();
//! assert_eq!(graph.distance_from_root(&"c").unwrap(), 2);
//! assert_eq!(graph.max_distance_from_root(), 2);
//! assert_eq!(graph.neighbors_in_previous_shell(&"c").unwrap(), vec![&"a"]);
//! ```
//!
//! ## Concurrency
//!
//! Single-threaded, synchronous, no internal locking. Construction is a
//! single-writer affair; the move out of `finish(self)` is the publication
//! boundary, after which the frozen graph is safe to share read-only
//! (`Send + Sync` when the vertex type is). The navigator's path cache
//! belongs to the navigator, not the graph, so independent readers each own
//! their memo.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod builder;
pub mod error;
pub mod graph;
pub mod index;
pub mod io;
pub mod navigator;

pub use builder::{BfsBuilder, ColorBfsBuilder, GraphBuilder};
pub use error::{GraphError, Result};
pub use graph::{
    BuildState,
    Color,
    ColorGraph,
    ColorInvolution,
    NeighborGraph,
    ShellGraph,
    ShellStatistics,
};
pub use index::VertexIndex;
pub use navigator::Navigator;
