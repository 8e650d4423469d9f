//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first traversal (FIFO frontier, forward neighbor scan)
//! - `dfs`: Depth-first traversal (LIFO frontier, reverse neighbor scan)
//! - `distance`: Hop distances and reachability
//! - `shared`: Common utilities used by multiple algorithms

pub mod bfs;
pub mod dfs;
pub mod distance;
pub(crate) mod shared;

pub use bfs::{bfs, bfs_into, bfs_traverse};
pub use dfs::{dfs, dfs_into, dfs_traverse};
pub use distance::{bfs_distances, reachable};
