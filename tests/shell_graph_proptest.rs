//! Property tests for the breadth-first shell invariants, with petgraph as
//! an independent distance oracle.

use std::collections::HashMap;

use petgraph::algo::dijkstra;
use petgraph::graph::{NodeIndex, UnGraph};
use proptest::prelude::*;

use shellgraph::{BfsBuilder, ColorInvolution};

/// Feeds a random edge stream to the builder and returns the finished graph
/// together with the accepted edges.
fn build_from_stream(stream: &[(u8, u8)]) -> (shellgraph::ShellGraph<u8>, Vec<(u8, u8)>) {
    let mut builder = BfsBuilder::new(0u8);
    let mut accepted = Vec::new();
    for &(src, tgt) in stream {
        let vertices = builder.graph().vertex_count();
        let edges = builder.graph().edge_count();
        if builder.join(&src, tgt) {
            accepted.push((src, tgt));
        } else {
            // Rejection must leave the graph untouched.
            assert_eq!(builder.graph().vertex_count(), vertices);
            assert_eq!(builder.graph().edge_count(), edges);
        }
    }
    (builder.finish(), accepted)
}

proptest! {
    #[test]
    fn shells_partition_the_index_range(stream in proptest::collection::vec(
        (0u8..12, 0u8..12),
        1..200,
    )) {
        let (graph, _) = build_from_stream(&stream);
        let n = graph.vertex_count();

        // Shell intervals tile [1, n] contiguously, increasing by distance.
        let mut next_expected = 1;
        for d in 0..graph.shell_count() {
            let bounds = graph.shell_bounds(d).unwrap();
            prop_assert_eq!(bounds.start, next_expected);
            prop_assert!(bounds.end > bounds.start, "shell {} empty", d);
            next_expected = bounds.end;
        }
        prop_assert_eq!(next_expected, n + 1);
    }

    #[test]
    fn edges_never_jump_more_than_one_shell(stream in proptest::collection::vec(
        (0u8..12, 0u8..12),
        1..200,
    )) {
        let (graph, _) = build_from_stream(&stream);
        prop_assert_eq!(graph.distance_from_root(&0).unwrap(), 0);

        for v in graph.graph().index().iter() {
            let dv = graph.distance_from_root(v).unwrap();
            for u in graph.graph().neighbors(v).unwrap() {
                let du = graph.distance_from_root(u).unwrap();
                prop_assert!(dv.abs_diff(du) <= 1);
            }
        }
    }

    #[test]
    fn adjacency_is_index_sorted_after_finish(stream in proptest::collection::vec(
        (0u8..12, 0u8..12),
        1..200,
    )) {
        let (graph, _) = build_from_stream(&stream);
        for i in 1..=graph.vertex_count() {
            let nbrs = graph.graph().neighbor_indices(i).unwrap();
            prop_assert!(nbrs.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn distances_match_a_petgraph_oracle(stream in proptest::collection::vec(
        (0u8..12, 0u8..12),
        1..200,
    )) {
        let (graph, accepted) = build_from_stream(&stream);

        let mut oracle: UnGraph<u8, ()> = UnGraph::new_undirected();
        let mut nodes: HashMap<u8, NodeIndex> = HashMap::new();
        let mut node = |g: &mut UnGraph<u8, ()>, v: u8, map: &mut HashMap<u8, NodeIndex>| {
            *map.entry(v).or_insert_with(|| g.add_node(v))
        };
        let root = node(&mut oracle, 0, &mut nodes);
        for (u, v) in accepted {
            let a = node(&mut oracle, u, &mut nodes);
            let b = node(&mut oracle, v, &mut nodes);
            oracle.add_edge(a, b, ());
        }

        let oracle_distances = dijkstra(&oracle, root, None, |_| 1usize);
        for v in graph.graph().index().iter() {
            let expected = oracle_distances[&nodes[v]];
            prop_assert_eq!(graph.distance_from_root(v).unwrap(), expected);
        }
    }

    #[test]
    fn involution_tables_are_self_inverse(pairs in proptest::collection::vec(
        (1u32..64, 1u32..64),
        0..32,
    )) {
        let table = ColorInvolution::from_pairs(pairs);
        prop_assert!(table.is_involution());
        for c in table.colors() {
            let inv = table.inverse(c).unwrap();
            prop_assert_eq!(table.inverse(inv), Some(c));
        }
    }
}
