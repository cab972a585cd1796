//! Graph representations, layered bottom-up:
//! - `core`: the two-phase adjacency store over indexed vertices
//! - `shell`: the rooted, breadth-first-shell-indexed extension
//! - `color`: the edge-labeled variant with a color involution

pub mod color;
pub mod core;
pub mod shell;

// Re-export commonly used types from submodules
pub use color::{Color, ColorGraph, ColorInvolution};
pub use core::{BuildState, NeighborGraph};
pub use shell::{ShellGraph, ShellStatistics};
