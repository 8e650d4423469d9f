use crate::error::{AlgoError, Result};
use crate::{bail_invalid, bail_out_of_range};
use serde::{Deserialize, Serialize};

/// Filler value in legacy fixed-width adjacency rows meaning "no neighbor"
pub const NO_NEIGHBOR: i64 = -1;

/// Directed graph stored as one neighbor list per node.
///
/// Node ids are `0..node_count()`. Every stored neighbor id is checked
/// against that range on insertion, so traversals over an `AdjacencyGraph`
/// never see a dangling id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdjacencyGraph {
    adj: Vec<Vec<usize>>,
}

impl AdjacencyGraph {
    /// Create an empty graph with `n` nodes and no edges.
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n],
        }
    }

    /// Build a graph from one neighbor list per node.
    pub fn from_rows(rows: Vec<Vec<usize>>) -> Result<Self> {
        let node_count = rows.len();
        for row in &rows {
            if let Some(&bad) = row.iter().find(|&&n| n >= node_count) {
                bail_out_of_range!(bad, node_count);
            }
        }
        Ok(Self { adj: rows })
    }

    /// Build a graph from fixed-width rows padded with [`NO_NEIGHBOR`].
    ///
    /// Filler slots are dropped wherever they appear in a row. Any other
    /// negative id is rejected, as is any id `>= rows.len()`.
    pub fn from_sentinel_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self> {
        let node_count = rows.len();
        let mut adj = Vec::with_capacity(node_count);

        for row in rows {
            let mut neighbors = Vec::new();
            for &slot in row.as_ref() {
                if slot == NO_NEIGHBOR {
                    continue;
                }
                if slot < 0 {
                    bail_invalid!("neighbor id", slot);
                }
                let id = usize::try_from(slot)
                    .map_err(|_| AlgoError::invalid_value("neighbor id", slot))?;
                if id >= node_count {
                    bail_out_of_range!(id, node_count);
                }
                neighbors.push(id);
            }
            adj.push(neighbors);
        }

        Ok(Self { adj })
    }

    /// Build an undirected graph with `n` nodes from an edge list.
    pub fn from_undirected_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut graph = Self::new(n);
        for &(u, v) in edges {
            graph.add_undirected(u, v)?;
        }
        Ok(graph)
    }

    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(|n| n.len()).sum()
    }

    pub fn contains(&self, node: usize) -> bool {
        node < self.adj.len()
    }

    /// Add a directed edge u -> v.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        self.adj[u].push(v);
        Ok(())
    }

    /// Add an undirected edge (both directions).
    pub fn add_undirected(&mut self, u: usize, v: usize) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        self.adj[u].push(v);
        self.adj[v].push(u);
        Ok(())
    }

    /// Neighbors of `u` in insertion order.
    ///
    /// # Panics
    /// Panics if `u` is not a node of this graph.
    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.adj[u]
    }

    /// Borrow the neighbor lists.
    pub fn as_slice(&self) -> &[Vec<usize>] {
        &self.adj
    }

    fn check_node(&self, node: usize) -> Result<()> {
        if !self.contains(node) {
            bail_out_of_range!(node, self.adj.len());
        }
        Ok(())
    }
}

/// Visit order produced by a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Order {
    /// FIFO frontier, neighbors scanned in stored order
    #[default]
    #[serde(alias = "bfs")]
    BreadthFirst,
    /// LIFO frontier, neighbors scanned in reverse stored order
    #[serde(alias = "dfs")]
    DepthFirst,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::BreadthFirst => "breadth-first",
            Order::DepthFirst => "depth-first",
        }
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Order {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Order::BreadthFirst),
            "dfs" | "depth-first" => Ok(Order::DepthFirst),
            other => Err(format!(
                "unknown traversal order '{}' (expected: bfs, dfs)",
                other
            )),
        }
    }
}

/// Options for a traversal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversalOptions {
    /// Frontier discipline
    pub order: Order,
    /// Stop after emitting this many nodes
    pub max_nodes: Option<usize>,
}

impl From<&crate::config::TraversalConfig> for TraversalOptions {
    fn from(config: &crate::config::TraversalConfig) -> Self {
        TraversalOptions {
            order: config.order,
            max_nodes: config.max_nodes,
        }
    }
}

/// Result of a traversal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traversal {
    pub start: usize,
    pub order: Order,
    /// Node ids in visit order
    pub visited: Vec<usize>,
    pub truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncation_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_graph_has_no_edges() {
        let graph = AdjacencyGraph::new(4);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.neighbors(3).is_empty());
    }

    #[test]
    fn test_from_rows_rejects_dangling_neighbor() {
        let err = AdjacencyGraph::from_rows(vec![vec![1], vec![2]]).unwrap_err();
        assert!(matches!(
            err,
            AlgoError::NodeOutOfRange {
                node: 2,
                node_count: 2
            }
        ));
    }

    #[test]
    fn test_from_sentinel_rows_drops_filler() {
        let graph = AdjacencyGraph::from_sentinel_rows(&[
            [1i64, 2, -1],
            [-1, 0, -1],
            [-1, -1, -1],
        ])
        .unwrap();
        assert_eq!(graph.neighbors(0), &[1, 2]);
        assert_eq!(graph.neighbors(1), &[0]);
        assert!(graph.neighbors(2).is_empty());
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_from_sentinel_rows_rejects_other_negatives() {
        let err = AdjacencyGraph::from_sentinel_rows(&[[0i64, -2]]).unwrap_err();
        assert_eq!(err.error_type(), "invalid_value");
    }

    #[test]
    fn test_from_sentinel_rows_rejects_large_ids() {
        let err = AdjacencyGraph::from_sentinel_rows(&[[1i64, -1], [5, -1]]).unwrap_err();
        assert!(matches!(err, AlgoError::NodeOutOfRange { node: 5, .. }));
    }

    #[test]
    fn test_add_edge_is_directed() {
        let mut graph = AdjacencyGraph::new(2);
        graph.add_edge(0, 1).unwrap();
        assert_eq!(graph.neighbors(0), &[1]);
        assert!(graph.neighbors(1).is_empty());
    }

    #[test]
    fn test_add_undirected_adds_both_directions() {
        let mut graph = AdjacencyGraph::new(3);
        graph.add_undirected(0, 2).unwrap();
        assert_eq!(graph.neighbors(0), &[2]);
        assert_eq!(graph.neighbors(2), &[0]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_add_edge_out_of_range() {
        let mut graph = AdjacencyGraph::new(2);
        assert!(graph.add_edge(0, 2).is_err());
        assert!(graph.add_undirected(3, 0).is_err());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_order_from_str() {
        assert_eq!("bfs".parse::<Order>().unwrap(), Order::BreadthFirst);
        assert_eq!("Depth-First".parse::<Order>().unwrap(), Order::DepthFirst);
        assert!("sideways".parse::<Order>().is_err());
    }

    #[test]
    fn test_order_display_round_trips() {
        for order in [Order::BreadthFirst, Order::DepthFirst] {
            assert_eq!(order.to_string().parse::<Order>().unwrap(), order);
        }
    }

    #[test]
    fn test_traversal_options_default() {
        let opts = TraversalOptions::default();
        assert_eq!(opts.order, Order::BreadthFirst);
        assert!(opts.max_nodes.is_none());
    }
}
