use crate::graph::types::AdjacencyGraph;

/// Trait for providing graph adjacency to the traversal algorithms
pub trait GraphProvider {
    fn node_count(&self) -> usize;
    /// Neighbor ids of `node`, in the order the traversals scan them.
    /// Callers only ask for `node < node_count()`.
    fn neighbors(&self, node: usize) -> &[usize];
}

impl GraphProvider for AdjacencyGraph {
    fn node_count(&self) -> usize {
        AdjacencyGraph::node_count(self)
    }

    fn neighbors(&self, node: usize) -> &[usize] {
        AdjacencyGraph::neighbors(self, node)
    }
}

/// Borrowed adjacency lists. Neighbor ids are not validated up front; the
/// traversals reject dangling ids as they meet them.
impl GraphProvider for [Vec<usize>] {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn neighbors(&self, node: usize) -> &[usize] {
        &self[node]
    }
}

impl GraphProvider for Vec<Vec<usize>> {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn neighbors(&self, node: usize) -> &[usize] {
        &self[node]
    }
}
