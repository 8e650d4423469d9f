//! Algokit - classic textbook algorithms
//!
//! Re-exports the core library and adds [`Toolkit`], which runs the
//! algorithms with defaults taken from an [`AlgoConfig`].

mod toolkit;

pub use algokit_core::{bail_invalid, bail_out_of_range, trace_time};
pub use algokit_core::{config, error, graph, logging, nim, sma};

pub use algokit_core::config::AlgoConfig;
pub use algokit_core::error::{AlgoError, Result};
pub use toolkit::Toolkit;

/// Commonly used items
pub mod prelude {
    pub use algokit_core::config::AlgoConfig;
    pub use algokit_core::error::{AlgoError, Result};
    pub use algokit_core::graph::{
        bfs, bfs_into, dfs, dfs_into, traverse, AdjacencyGraph, GraphProvider, Order, Traversal,
        TraversalOptions,
    };
    pub use algokit_core::nim::{can_win, make_optimal_move, xor_sum, NimMove};
    pub use algokit_core::sma::{compute_sma, MovingAverage};

    pub use crate::Toolkit;
}
