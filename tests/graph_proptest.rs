use std::collections::HashSet;

use classics::MatrixGraph;
use petgraph::algo::{connected_components, dijkstra, min_spanning_tree};
use petgraph::data::Element;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::{Bfs, EdgeRef};
use proptest::prelude::*;

/// Builds the same random graph twice: once as a `MatrixGraph`, once as a petgraph oracle.
fn build(n: usize, edges: &[(usize, usize, u32)]) -> (MatrixGraph, UnGraph<(), u32>) {
    let mut g = MatrixGraph::new(n);
    for i in 0..n {
        g.insert_vertex(i, format!("v{i}"));
    }
    for &(a, b, w) in edges {
        if a < n && b < n && a != b {
            g.insert_edge(a, b, w);
        }
    }

    // Later edges overwrite earlier ones in the matrix, so read back what stuck.
    let mut oracle = UnGraph::<(), u32>::with_capacity(n, edges.len());
    for _ in 0..n {
        oracle.add_node(());
    }
    for (a, b, w) in g.weight_matrix().edges() {
        oracle.add_edge(NodeIndex::new(a), NodeIndex::new(b), w);
    }
    (g, oracle)
}

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
    (1usize..12).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 1u32..100);
        (Just(n), proptest::collection::vec(edge, 0..40))
    })
}

proptest! {
    #[test]
    fn test_shortest_paths_match_petgraph((n, edges) in graph_strategy()) {
        let (g, oracle) = build(n, &edges);
        let expected = dijkstra(&oracle, NodeIndex::new(0), None, |e| u64::from(*e.weight()));
        let paths = g.shortest_path(0);

        for v in 0..n {
            prop_assert_eq!(
                paths.distance(v),
                expected.get(&NodeIndex::new(v)).copied(),
                "distance mismatch for vertex {}", v
            );
        }
    }

    #[test]
    fn test_spanning_tree_weight_matches_petgraph((n, edges) in graph_strategy()) {
        let (g, oracle) = build(n, &edges);
        prop_assume!(connected_components(&oracle) == 1);

        let expected: u64 = min_spanning_tree(&oracle)
            .filter_map(|element| match element {
                Element::Edge { weight, .. } => Some(u64::from(weight)),
                Element::Node { .. } => None,
            })
            .sum();

        let chosen = g.spanning_tree_edges();
        prop_assert_eq!(chosen.len(), n - 1);
        prop_assert_eq!(g.minimum_spanning_tree().total_weight(), expected);
    }

    #[test]
    fn test_traversals_reach_component((n, edges) in graph_strategy()) {
        let (g, oracle) = build(n, &edges);

        let mut bfs = Bfs::new(&oracle, NodeIndex::new(0));
        let mut reachable = HashSet::new();
        while let Some(node) = bfs.next(&oracle) {
            reachable.insert(node.index());
        }

        let dfs: Vec<usize> = g.dfs(0).collect();
        let bfs: Vec<usize> = g.bfs(0).collect();
        prop_assert_eq!(dfs.len(), reachable.len());
        prop_assert_eq!(bfs.len(), reachable.len());
        prop_assert_eq!(dfs.iter().copied().collect::<HashSet<_>>(), reachable.clone());
        prop_assert_eq!(bfs.iter().copied().collect::<HashSet<_>>(), reachable);
        prop_assert_eq!(dfs.first(), Some(&0));
    }

    #[test]
    fn test_sort_orders_labels(labels in proptest::collection::vec("[a-z]{0,4}", 0..30)) {
        let mut g = MatrixGraph::new(labels.len());
        for (i, label) in labels.iter().enumerate() {
            g.insert_vertex(i, label.as_str());
        }
        let mut expected = labels.clone();
        expected.sort();

        let sorted: Vec<String> = g.sort().into_iter().flatten().map(str::to_owned).collect();
        prop_assert_eq!(sorted, expected);
    }
}
