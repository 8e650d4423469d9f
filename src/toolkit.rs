use std::time::Instant;

use algokit_core::config::AlgoConfig;
use algokit_core::error::Result;
use algokit_core::graph::{self, GraphProvider, Traversal, TraversalOptions};
use algokit_core::sma::{self, MovingAverage};
use algokit_core::trace_time;

/// Runs the algorithms with configured defaults
#[derive(Debug, Clone, Default)]
pub struct Toolkit {
    config: AlgoConfig,
}

impl Toolkit {
    /// Build a toolkit from an already validated configuration
    pub fn new(config: AlgoConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Build a toolkit from the discovered configuration file
    pub fn discover() -> Result<Self> {
        Self::new(AlgoConfig::discover()?)
    }

    pub fn config(&self) -> &AlgoConfig {
        &self.config
    }

    /// Traversal options from the `[traversal]` section
    pub fn traversal_options(&self) -> TraversalOptions {
        TraversalOptions::from(&self.config.traversal)
    }

    /// Traverse with the configured order and node limit
    pub fn traverse<G: GraphProvider + ?Sized>(
        &self,
        graph: &G,
        start: usize,
    ) -> Result<Traversal> {
        let started = Instant::now();
        let traversal = graph::traverse(graph, start, &self.traversal_options())?;
        trace_time!(started, "toolkit_traverse", visited = traversal.visited.len());
        Ok(traversal)
    }

    /// Moving average of `prices` over the configured window
    pub fn moving_average(&self, prices: &[f64]) -> Option<Vec<f64>> {
        let window = i64::try_from(self.config.moving_average.window).ok()?;
        sma::compute_sma(prices, window)
    }

    /// Streaming accumulator over the configured window
    pub fn moving_average_stream(&self) -> Result<MovingAverage> {
        MovingAverage::from_config(&self.config.moving_average)
    }
}
