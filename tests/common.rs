use algokit::graph::AdjacencyGraph;

#[allow(dead_code)]
/// Edges 0-1, 0-2, 1-3, 1-4, 2-4 as legacy fixed-width sentinel rows
pub const REFERENCE_ROWS: [[i64; 5]; 5] = [
    [1, 2, -1, -1, -1],
    [0, 3, 4, -1, -1],
    [0, 4, -1, -1, -1],
    [1, -1, -1, -1, -1],
    [1, 2, -1, -1, -1],
];

#[allow(dead_code)]
pub fn reference_graph() -> AdjacencyGraph {
    AdjacencyGraph::from_sentinel_rows(&REFERENCE_ROWS).unwrap()
}

#[allow(dead_code)]
pub fn assert_close(actual: &[f64], expected: &[f64], epsilon: f64) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < epsilon, "index {}: {} != {}", i, a, e);
    }
}
