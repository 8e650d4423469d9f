//! Integration tests for the BFS/DFS traversal pair

mod common;

use algokit::prelude::*;
use common::{reference_graph, REFERENCE_ROWS};

#[test]
fn test_reference_bfs_into_zeroed_buffer() {
    let graph = reference_graph();
    let mut result = [0usize; 5];
    assert_eq!(bfs_into(&graph, 0, &mut result).unwrap(), 5);
    assert_eq!(result, [0, 1, 2, 3, 4]);
}

#[test]
fn test_reference_dfs_into_zeroed_buffer() {
    let graph = reference_graph();
    let mut result = [0usize; 5];
    assert_eq!(dfs_into(&graph, 0, &mut result).unwrap(), 5);
    assert_eq!(result, [0, 1, 3, 4, 2]);
}

#[test]
fn test_sentinel_and_list_forms_agree() {
    let from_rows = AdjacencyGraph::from_rows(vec![
        vec![1, 2],
        vec![0, 3, 4],
        vec![0, 4],
        vec![1],
        vec![1, 2],
    ])
    .unwrap();
    assert_eq!(AdjacencyGraph::from_sentinel_rows(&REFERENCE_ROWS).unwrap(), from_rows);
}

#[test]
fn test_out_of_range_start_is_an_error() {
    let graph = reference_graph();
    let err = bfs(&graph, 5).unwrap_err();
    assert_eq!(err.error_type(), "node_out_of_range");
    let err = dfs(&graph, usize::MAX).unwrap_err();
    assert_eq!(err.error_type(), "node_out_of_range");
}

#[test]
fn test_disconnected_component_is_skipped() {
    // Reference graph plus an isolated pair 5-6
    let mut graph = AdjacencyGraph::new(7);
    for (u, row) in REFERENCE_ROWS.iter().enumerate() {
        for &v in row.iter().filter(|&&v| v >= 0) {
            graph.add_edge(u, v as usize).unwrap();
        }
    }
    graph.add_undirected(5, 6).unwrap();

    let mut result = [usize::MAX; 7];
    assert_eq!(bfs_into(&graph, 0, &mut result).unwrap(), 5);
    assert_eq!(result[5..], [usize::MAX, usize::MAX]);

    assert_eq!(dfs(&graph, 6).unwrap(), vec![6, 5]);
}

#[test]
fn test_traversal_serializes() {
    let graph = reference_graph();
    let opts = TraversalOptions {
        order: Order::DepthFirst,
        max_nodes: Some(2),
    };
    let traversal = traverse(&graph, 0, &opts).unwrap();
    let json = serde_json::to_value(&traversal).unwrap();
    assert_eq!(json["start"], 0);
    assert_eq!(json["order"], "depth-first");
    assert_eq!(json["visited"], serde_json::json!([0, 1]));
    assert_eq!(json["truncated"], true);
    assert_eq!(json["truncation_reason"], "max_nodes");
}

#[test]
fn test_untruncated_traversal_omits_reason() {
    let graph = reference_graph();
    let traversal = traverse(&graph, 0, &TraversalOptions::default()).unwrap();
    let json = serde_json::to_value(&traversal).unwrap();
    assert_eq!(json["truncated"], false);
    assert!(json.get("truncation_reason").is_none());
}

#[test]
fn test_traversal_is_shareable_across_threads() {
    let graph = std::sync::Arc::new(reference_graph());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let graph = std::sync::Arc::clone(&graph);
            std::thread::spawn(move || (bfs(&*graph, 0).unwrap(), dfs(&*graph, 0).unwrap()))
        })
        .collect();

    for handle in handles {
        let (breadth, depth) = handle.join().unwrap();
        assert_eq!(breadth, vec![0, 1, 2, 3, 4]);
        assert_eq!(depth, vec![0, 1, 3, 4, 2]);
    }
}
