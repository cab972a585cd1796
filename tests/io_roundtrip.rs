//! Persisting a colored graph to a real file and reading it back.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use shellgraph::io::{read_sparse, write_sparse, write_vertex_list};
use shellgraph::{ColorBfsBuilder, ColorGraph, ColorInvolution};

/// A two-generator circulant graph on Z_24: steps ±1 (colors 1/2) and
/// ±5 (colors 3/4), grown breadth-first from 0.
fn circulant_24() -> ColorGraph<u32> {
    const N: u32 = 24;
    let involution = ColorInvolution::from_pairs([(1, 2), (3, 4)]);
    let mut builder = ColorBfsBuilder::with_fixed_degree(0u32, involution, 4);

    let steps = [(1, 1u32), (N - 1, 2), (5, 3), (N - 5, 4)];
    let mut queue = vec![0u32];
    let mut head = 0;
    while head < queue.len() {
        let v = queue[head];
        head += 1;
        for &(step, color) in &steps {
            let t = (v + step) % N;
            if builder.graph().shell().graph().has_edge(&v, &t) {
                continue;
            }
            let known = builder.graph().shell().graph().contains_vertex(&t);
            assert!(builder.join(&v, t, color));
            if !known {
                queue.push(t);
            }
        }
    }
    builder.finish()
}

#[test]
fn file_round_trip_preserves_structure() {
    let original = circulant_24();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("circulant.graph");

    let mut writer = BufWriter::new(File::create(&path).unwrap());
    write_sparse(&original, &mut writer).unwrap();
    writer.flush().unwrap();

    let read = read_sparse(BufReader::new(File::open(&path).unwrap())).unwrap();
    assert!(read.is_finished());

    // Persisted vertices are plain indices; the shape must survive intact.
    assert_eq!(read.vertex_count(), original.vertex_count());
    let original_stats = original.statistics();
    let read_stats = read.statistics();
    assert_eq!(read_stats.shell_sizes, original_stats.shell_sizes);
    assert_eq!(read_stats.max_distance, original_stats.max_distance);
    assert_eq!(read_stats.min_degree, original_stats.min_degree);
    assert_eq!(read_stats.max_degree, original_stats.max_degree);

    for i in 1..=original.vertex_count() {
        assert_eq!(
            read.shell().graph().neighbor_indices(i).unwrap(),
            original.shell().graph().neighbor_indices(i).unwrap(),
            "adjacency mismatch at index {i}"
        );
        assert_eq!(
            read.distance_from_root(&i).unwrap(),
            original.shell().distance_of_index(i).unwrap(),
        );
    }
}

#[test]
fn file_round_trip_preserves_colors() {
    let original = circulant_24();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("colors.graph");

    let mut writer = BufWriter::new(File::create(&path).unwrap());
    write_sparse(&original, &mut writer).unwrap();
    writer.flush().unwrap();

    let read = read_sparse(BufReader::new(File::open(&path).unwrap())).unwrap();
    assert!(read.involution().is_involution());

    // Persisted vertices are plain indices, so look up the original's color
    // table by index and compare against the reread graph vertex-for-vertex.
    let index = original.shell().graph().index();
    for i in 1..=original.vertex_count() {
        let v = index.element_at(i).unwrap();
        for color in 1..=4 {
            let expected = original
                .neighbor_by_color(v, color)
                .unwrap()
                .map(|n| index.index_of(n).unwrap());
            let got = read.neighbor_by_color(&i, color).unwrap().copied();
            assert_eq!(got, expected, "color {color} mismatch at index {i}");
        }
    }
}

#[test]
fn vertex_list_appends_to_the_same_file() {
    let graph = circulant_24();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("listing.txt");

    let mut file = File::create(&path).unwrap();
    let shell_two: Vec<&u32> = graph.shell().shell(2).unwrap().iter().collect();
    write_vertex_list(
        &mut file,
        "circulant-24",
        graph.shell().graph().index(),
        shell_two,
    )
    .unwrap();
    drop(file);

    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("ORIGIN: circulant-24"));
    let order: usize = lines
        .next()
        .and_then(|l| l.strip_prefix("ORDER: "))
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(order, graph.shell().shell_size(2).unwrap());
    assert_eq!(lines.count(), order);
}
