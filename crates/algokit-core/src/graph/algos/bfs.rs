use crate::error::Result;
use crate::graph::algos::shared::{
    build_result, check_buffer, check_neighbor, check_options, check_start, write_prefix,
};
use crate::graph::types::{Order, Traversal, TraversalOptions};
use crate::graph::GraphProvider;
use std::collections::VecDeque;


/// State tracked during BFS traversal
struct BfsState {
    visited: Vec<bool>,
    queue: VecDeque<usize>,
    order: Vec<usize>,
    truncated: bool,
    truncation_reason: Option<String>,
}

impl BfsState {
    fn new(node_count: usize) -> Self {
        Self {
            visited: vec![false; node_count],
            queue: VecDeque::with_capacity(node_count),
            order: Vec::with_capacity(node_count),
            truncated: false,
            truncation_reason: None,
        }
    }

    fn check_limits(&mut self, opts: &TraversalOptions) -> bool {
        super::shared::check_limits(
            self.order.len(),
            &mut self.truncated,
            &mut self.truncation_reason,
            opts,
        )
    }
}

/// Perform BFS traversal from a start node.
///
/// Neighbors are scanned in stored order and marked visited when enqueued,
/// so every reachable node is emitted exactly once.
#[tracing::instrument(skip(graph, opts), fields(node_count = graph.node_count(), max_nodes = ?opts.max_nodes))]
pub fn bfs_traverse<G: GraphProvider + ?Sized>(
    graph: &G,
    start: usize,
    opts: &TraversalOptions,
) -> Result<Traversal> {
    check_start(graph, start)?;
    check_options(opts)?;

    let node_count = graph.node_count();
    let mut state = BfsState::new(node_count);
    state.queue.push_back(start);
    state.visited[start] = true;

    while let Some(node) = state.queue.pop_front() {
        if !state.check_limits(opts) {
            break;
        }
        state.order.push(node);

        for &neighbor in graph.neighbors(node) {
            check_neighbor(neighbor, node_count)?;
            if !state.visited[neighbor] {
                state.visited[neighbor] = true;
                state.queue.push_back(neighbor);
            }
        }
    }

    tracing::debug!(
        visited = state.order.len(),
        truncated = state.truncated,
        "bfs complete"
    );

    Ok(build_result(
        start,
        Order::BreadthFirst,
        state.order,
        state.truncated,
        state.truncation_reason,
    ))
}

/// Breadth-first visit order from `start`
pub fn bfs<G: GraphProvider + ?Sized>(graph: &G, start: usize) -> Result<Vec<usize>> {
    Ok(bfs_traverse(graph, start, &TraversalOptions::default())?.visited)
}

/// Write the breadth-first visit order from `start` into `result`.
///
/// `result` must hold at least `node_count()` slots. Returns the number of
/// slots written; the rest keep their previous contents. On error the
/// buffer is untouched.
pub fn bfs_into<G: GraphProvider + ?Sized>(
    graph: &G,
    start: usize,
    result: &mut [usize],
) -> Result<usize> {
    check_start(graph, start)?;
    check_buffer(graph.node_count(), result.len())?;
    let visited = bfs(graph, start)?;
    Ok(write_prefix(&visited, result))
}
