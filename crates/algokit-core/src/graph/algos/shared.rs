use crate::{bail_invalid, bail_out_of_range};
use crate::error::{AlgoError, Result};
use crate::graph::types::{Order, Traversal, TraversalOptions};
use crate::graph::GraphProvider;

/// Reason recorded when a traversal stops at `max_nodes`
pub const TRUNCATED_MAX_NODES: &str = "max_nodes";

/// Reject a start node outside the graph
pub fn check_start<G: GraphProvider + ?Sized>(graph: &G, start: usize) -> Result<()> {
    let node_count = graph.node_count();
    if start >= node_count {
        tracing::debug!(start, node_count, "start node out of range");
        bail_out_of_range!(start, node_count);
    }
    Ok(())
}

/// Reject a neighbor id that points outside the graph
pub fn check_neighbor(neighbor: usize, node_count: usize) -> Result<()> {
    if neighbor >= node_count {
        tracing::debug!(neighbor, node_count, "dangling neighbor id");
        bail_out_of_range!(neighbor, node_count);
    }
    Ok(())
}

/// Reject a result buffer that cannot hold every node
pub fn check_buffer(needed: usize, actual: usize) -> Result<()> {
    if actual < needed {
        return Err(AlgoError::BufferTooSmall { needed, actual });
    }
    Ok(())
}

/// Reject options no traversal can honor.
///
/// A zero `max_nodes` would leave even the start node unemitted.
pub fn check_options(opts: &TraversalOptions) -> Result<()> {
    if opts.max_nodes == Some(0) {
        bail_invalid!("max_nodes", 0);
    }
    Ok(())
}

/// Check limits and return false if traversal should stop
pub fn check_limits(
    emitted: usize,
    truncated: &mut bool,
    truncation_reason: &mut Option<String>,
    opts: &TraversalOptions,
) -> bool {
    if let Some(max) = opts.max_nodes {
        if emitted >= max {
            *truncated = true;
            *truncation_reason = Some(TRUNCATED_MAX_NODES.to_string());
            return false;
        }
    }

    true
}

/// Copy a visit order into the front of a caller-owned buffer.
///
/// Slots past the visit order are left as they were.
pub fn write_prefix(visited: &[usize], result: &mut [usize]) -> usize {
    result[..visited.len()].copy_from_slice(visited);
    visited.len()
}

/// Build final Traversal
pub fn build_result(
    start: usize,
    order: Order,
    visited: Vec<usize>,
    truncated: bool,
    truncation_reason: Option<String>,
) -> Traversal {
    Traversal {
        start,
        order,
        visited,
        truncated,
        truncation_reason,
    }
}
