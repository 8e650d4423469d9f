use crate::error::Result;
use crate::graph::algos::shared::{
    build_result, check_buffer, check_neighbor, check_options, check_start, write_prefix,
};
use crate::graph::types::{Order, Traversal, TraversalOptions};
use crate::graph::GraphProvider;

/// State tracked during DFS traversal
struct DfsState {
    visited: Vec<bool>,
    stack: Vec<usize>,
    order: Vec<usize>,
    truncated: bool,
    truncation_reason: Option<String>,
}

impl DfsState {
    fn new(node_count: usize) -> Self {
        Self {
            visited: vec![false; node_count],
            stack: Vec::with_capacity(node_count),
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

/// Perform DFS traversal from a start node.
///
/// Neighbors are pushed in reverse stored order so the lowest-index
/// unvisited neighbor is popped next; the first branch taken matches BFS on
/// the same graph. Nodes are marked visited when pushed, not when popped.
#[tracing::instrument(skip(graph, opts), fields(node_count = graph.node_count(), max_nodes = ?opts.max_nodes))]
pub fn dfs_traverse<G: GraphProvider + ?Sized>(
    graph: &G,
    start: usize,
    opts: &TraversalOptions,
) -> Result<Traversal> {
    check_start(graph, start)?;
    check_options(opts)?;

    let node_count = graph.node_count();
    let mut state = DfsState::new(node_count);
    state.stack.push(start);
    state.visited[start] = true;

    while let Some(node) = state.stack.pop() {
        if !state.check_limits(opts) {
            break;
        }
        state.order.push(node);

        for &neighbor in graph.neighbors(node).iter().rev() {
            check_neighbor(neighbor, node_count)?;
            if !state.visited[neighbor] {
                state.visited[neighbor] = true;
                state.stack.push(neighbor);
            }
        }
    }

    tracing::debug!(
        visited = state.order.len(),
        truncated = state.truncated,
        "dfs complete"
    );

    Ok(build_result(
        start,
        Order::DepthFirst,
        state.order,
        state.truncated,
        state.truncation_reason,
    ))
}

/// Depth-first visit order from `start`
pub fn dfs<G: GraphProvider + ?Sized>(graph: &G, start: usize) -> Result<Vec<usize>> {
    Ok(dfs_traverse(graph, start, &TraversalOptions::default())?.visited)
}

/// Write the depth-first visit order from `start` into `result`.
///
/// Same buffer contract as [`super::bfs::bfs_into`].
pub fn dfs_into<G: GraphProvider + ?Sized>(
    graph: &G,
    start: usize,
    result: &mut [usize],
) -> Result<usize> {
    check_start(graph, start)?;
    check_buffer(graph.node_count(), result.len())?;
    let visited = dfs(graph, start)?;
    Ok(write_prefix(&visited, result))
}
