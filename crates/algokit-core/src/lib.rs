//! Algokit Core Library
//!
//! Classic textbook algorithms with a shared error, logging and
//! configuration layer:
//! - `graph`: BFS and DFS traversal over adjacency-list graphs
//! - `nim`: XOR-sum solution to the game of Nim
//! - `sma`: Simple moving average over a trailing window

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod nim;
pub mod sma;
