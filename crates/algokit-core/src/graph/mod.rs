//! Graph traversal operations
//!
//! Provides the traversal pair over adjacency-list graphs:
//! - BFS traversal in level order
//! - DFS traversal in depth order, first branch matching BFS
//! - Graph provider trait for borrowed or owned adjacency data

pub mod algos;
pub mod traversal;
pub mod types;

pub use algos::{
    bfs, bfs_distances, bfs_into, bfs_traverse, dfs, dfs_into, dfs_traverse, reachable,
};
pub use traversal::GraphProvider;
pub use types::{AdjacencyGraph, Order, Traversal, TraversalOptions, NO_NEIGHBOR};

use crate::error::Result;

/// Traverse from `start` in the order selected by `opts`
pub fn traverse<G: GraphProvider + ?Sized>(
    graph: &G,
    start: usize,
    opts: &TraversalOptions,
) -> Result<Traversal> {
    match opts.order {
        Order::BreadthFirst => bfs_traverse(graph, start, opts),
        Order::DepthFirst => dfs_traverse(graph, start, opts),
    }
}
