use crate::error::Result;
use crate::graph::algos::shared::{check_neighbor, check_start};
use crate::graph::GraphProvider;
use std::collections::VecDeque;

/// Hop distance from `start` to every node, `None` where unreachable.
///
/// Uses the same frontier discipline as [`super::bfs::bfs_traverse`], so
/// the BFS visit order is sorted by these distances.
pub fn bfs_distances<G: GraphProvider + ?Sized>(
    graph: &G,
    start: usize,
) -> Result<Vec<Option<usize>>> {
    check_start(graph, start)?;

    let node_count = graph.node_count();
    let mut distances = vec![None; node_count];
    let mut queue = VecDeque::with_capacity(node_count);
    distances[start] = Some(0);
    queue.push_back((start, 0usize));

    while let Some((node, hops)) = queue.pop_front() {
        for &neighbor in graph.neighbors(node) {
            check_neighbor(neighbor, node_count)?;
            if distances[neighbor].is_none() {
                distances[neighbor] = Some(hops + 1);
                queue.push_back((neighbor, hops + 1));
            }
        }
    }

    Ok(distances)
}

/// Reachability flags from `start` (the start node included)
pub fn reachable<G: GraphProvider + ?Sized>(graph: &G, start: usize) -> Result<Vec<bool>> {
    Ok(bfs_distances(graph, start)?
        .into_iter()
        .map(|d| d.is_some())
        .collect())
}
