//! Error type shared across the crate.
//!
//! Only caller misuse is reported through [`GraphError`]: looking up a vertex
//! that was never indexed, addressing an index outside the assigned range, or
//! walking a color word over an edge that does not exist. Construction-time
//! rejections (breadth-first radius violations) are *not* errors — the
//! builders report them through a `bool` return and leave the graph untouched,
//! so callers can keep feeding edges from a generator stream.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Failures surfaced by graph queries and persistence.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The vertex was never added to the index.
    #[error("vertex is not present in the index")]
    VertexNotFound,

    /// A 1-based index outside the assigned range `1..=len`.
    #[error("index {index} out of range 1..={len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of indexed vertices.
        len: usize,
    },

    /// A color word referenced an edge the graph does not have.
    #[error("no edge with the requested color at this vertex")]
    EdgeNotFound,

    /// Underlying I/O failure while reading or writing a persisted graph.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
