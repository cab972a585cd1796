//! Persisted sparse-adjacency text format.
//!
//! A colored shell graph is stored as one directed edge per line, three
//! whitespace-separated integers `<from> <to> <label>`, grouped by ascending
//! `from`. A group's leading line with `label == 0` ([`SHELL_SENTINEL`]) is
//! not an edge: it marks `from` as the first index of a new shell, which is
//! why edge colors are nonzero by convention. Vertices are persisted purely
//! as their 1-based indices, so a read yields a `ColorGraph<usize>` whose
//! vertex values equal their indices.
//!
//! Reading reconstructs the index table, shell boundaries, adjacency, edge
//! colors, and the color involution (from mutually inverse directed pairs).
//! A line that does not parse as exactly three integers makes the whole read
//! return an **empty** graph — the malformed input is logged and the rest of
//! the file is dropped, not skipped line by line.

use std::hash::Hash;
use std::io::{BufRead, Write};

use tracing::warn;

use crate::error::{GraphError, Result};
use crate::graph::color::{Color, ColorGraph, ColorInvolution, VertexColors};
use crate::index::VertexIndex;

/// Label value marking a shell start; never a valid edge color.
pub const SHELL_SENTINEL: Color = 0;

/// Writes `graph` in the sparse-adjacency format.
///
/// Lines are grouped by ascending `from` index; the group of the first
/// vertex of each shell opens with the `<f> <f> 0` sentinel line.
///
/// Parallel edges are written once per multiplicity, but every line for a
/// given neighbor carries that neighbor's canonical color (the first one
/// installed). A second color joining the same pair is therefore not
/// persisted: after a round-trip only the canonical color resolves through
/// [`ColorGraph::neighbor_by_color`].
///
/// # Errors
/// [`GraphError::Io`] on write failure; [`GraphError::EdgeNotFound`] if some
/// edge carries no color, which indicates a graph not built by the colored
/// builder.
pub fn write_sparse<S, W>(graph: &ColorGraph<S>, writer: &mut W) -> Result<()>
where
    S: Eq + Hash + Clone,
    W: Write,
{
    let shell = graph.shell();
    for from in 1..=shell.vertex_count() {
        if shell.shell_starts().binary_search(&from).is_ok() {
            writeln!(writer, "{from} {from} {SHELL_SENTINEL}")?;
        }
        for &to in shell.graph().neighbor_indices(from)? {
            let color = graph
                .color_between_indices(from, to)
                .ok_or(GraphError::EdgeNotFound)?;
            writeln!(writer, "{from} {to} {color}")?;
        }
    }
    Ok(())
}

/// Reads a graph previously written by [`write_sparse`].
///
/// Degrades to the empty graph — logging a warning — when any line fails to
/// parse as exactly three integers, when an edge names the invalid vertex
/// index 0, or when the shell markers do not describe a valid layering
/// (first marker at index 1, strictly increasing).
///
/// # Errors
/// [`GraphError::Io`] on read failure. Malformed *content* is not an error;
/// it produces the empty graph as described above.
pub fn read_sparse<R: BufRead>(reader: R) -> Result<ColorGraph<usize>> {
    let mut triples: Vec<(usize, usize, Color)> = Vec::new();
    let mut shell_starts: Vec<usize> = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let Some((from, to, label)) = parse_triple(&line) else {
            warn!(
                line = number + 1,
                "malformed sparse-adjacency line; dropping the whole file"
            );
            return Ok(ColorGraph::empty());
        };
        if label == SHELL_SENTINEL {
            if shell_starts.last() != Some(&from) {
                shell_starts.push(from);
            }
        } else {
            triples.push((from, to, label));
        }
    }

    let n = triples
        .iter()
        .flat_map(|&(f, t, _)| [f, t])
        .chain(shell_starts.iter().copied())
        .max()
        .unwrap_or(0);
    if n == 0 {
        return Ok(ColorGraph::empty());
    }

    // Indices are 1-based; a stored 0 would underflow the adjacency slot or
    // dodge the index table entirely.
    if triples.iter().any(|&(f, t, _)| f == 0 || t == 0) {
        warn!("edge with vertex index 0; dropping the whole file");
        return Ok(ColorGraph::empty());
    }

    let layering_ok = shell_starts.first() == Some(&1)
        && shell_starts.windows(2).all(|w| w[0] < w[1])
        && shell_starts.iter().all(|&s| s <= n);
    if !layering_ok {
        warn!("inconsistent shell markers; dropping the whole file");
        return Ok(ColorGraph::empty());
    }

    let mut index = VertexIndex::with_capacity(n);
    for i in 1..=n {
        index.insert(i);
    }

    let mut adjacency = vec![Vec::new(); n];
    let mut colors = vec![VertexColors::default(); n];
    let mut first_color = std::collections::HashMap::new();
    for &(from, to, color) in &triples {
        adjacency[from - 1].push(to);
        let table = &mut colors[from - 1];
        table.by_color.insert(color, to);
        table.by_neighbor.entry(to).or_insert(color);
        first_color.entry((from, to)).or_insert(color);
    }

    // Mutually inverse directed pairs define the involution: the builder
    // installed inv(c) on the reverse edge, so read it back the same way.
    let mut involution = ColorInvolution::new();
    for (&(from, to), &color) in &first_color {
        if let Some(&reverse) = first_color.get(&(to, from)) {
            involution.pair(color, reverse);
        }
    }

    Ok(ColorGraph::from_parts(
        index,
        adjacency,
        shell_starts,
        colors,
        involution,
    ))
}

/// Writes the two-line `ORIGIN:`/`ORDER:` header followed by the index of
/// each supplied vertex, one per line.
///
/// # Errors
/// [`GraphError::VertexNotFound`] if some vertex is not in `index`;
/// [`GraphError::Io`] on write failure.
pub fn write_vertex_list<'a, S, W>(
    writer: &mut W,
    origin: &str,
    index: &VertexIndex<S>,
    vertices: impl IntoIterator<Item = &'a S>,
) -> Result<()>
where
    S: Eq + Hash + Clone + 'a,
    W: Write,
{
    let indices = vertices
        .into_iter()
        .map(|v| index.index_of(v))
        .collect::<Result<Vec<_>>>()?;

    writeln!(writer, "ORIGIN: {origin}")?;
    writeln!(writer, "ORDER: {}", indices.len())?;
    for i in indices {
        writeln!(writer, "{i}")?;
    }
    Ok(())
}

/// Parses exactly three whitespace-separated integers; anything else is
/// malformed.
fn parse_triple(line: &str) -> Option<(usize, usize, Color)> {
    let mut parts = line.split_whitespace();
    let from = parts.next()?.parse().ok()?;
    let to = parts.next()?.parse().ok()?;
    let label = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((from, to, label))
}
