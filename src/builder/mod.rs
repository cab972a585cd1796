//! Mutation-only builder façades.
//!
//! Graphs in this crate are grown exclusively through a builder that owns the
//! value under construction and enforces its construction discipline, then
//! releases the frozen value from `finish(self)`. Three disciplines exist:
//!
//! - [`GraphBuilder`]: unordered — vertices and edges in any order.
//! - [`BfsBuilder`]: breadth-first — edges must respect the radius
//!   discipline so the shell invariants hold; vertices enter only through
//!   `join`, so there is no `add_vertex` to misuse.
//! - [`ColorBfsBuilder`]: breadth-first with involutive edge colors.
//!
//! All construction-time rejections are reported by a `false` return with no
//! mutation, never by an error: a generator stream can simply keep feeding
//! candidate edges and let the builder filter them.

mod bfs;
mod color;
mod unordered;

pub use bfs::BfsBuilder;
pub use color::ColorBfsBuilder;
pub use unordered::GraphBuilder;
