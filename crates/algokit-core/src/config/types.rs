//! Configuration type definitions

use crate::graph::Order;
use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Default moving average window
pub const DEFAULT_SMA_WINDOW: usize = 3;

/// Algokit configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgoConfig {
    /// Format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Graph traversal defaults
    #[serde(default)]
    pub traversal: TraversalConfig,

    /// Moving average defaults
    #[serde(default)]
    pub moving_average: MovingAverageConfig,
}

impl Default for AlgoConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            traversal: TraversalConfig::default(),
            moving_average: MovingAverageConfig::default(),
        }
    }
}

/// Configuration for graph traversal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Frontier discipline used by `graph::traverse`
    #[serde(default)]
    pub order: Order,

    /// Maximum nodes to emit (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_nodes: Option<usize>,
}

/// Configuration for moving averages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovingAverageConfig {
    /// Window size in data points
    #[serde(default = "default_window")]
    pub window: usize,
}

impl Default for MovingAverageConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_SMA_WINDOW,
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_window() -> usize {
    DEFAULT_SMA_WINDOW
}
