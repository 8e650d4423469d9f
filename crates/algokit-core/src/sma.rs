//! Simple moving average over a trailing window
//!
//! Both the batch [`compute_sma`] and the streaming [`MovingAverage`] keep a
//! running sum: each step adds the entering value and subtracts the one
//! leaving the window instead of re-summing the window.

use crate::bail_invalid;
use crate::config::MovingAverageConfig;
use crate::error::Result;
use std::collections::VecDeque;

/// Trailing simple moving average of `prices` over `window` points.
///
/// Returns `None` when the average cannot be computed: empty input, a
/// window `<= 0`, or a window longer than the series. Otherwise returns one
/// average per full window, `prices.len() - window + 1` values in total.
pub fn compute_sma(prices: &[f64], window: i64) -> Option<Vec<f64>> {
    if prices.is_empty() || window <= 0 {
        return None;
    }
    let window = usize::try_from(window).ok()?;
    if window > prices.len() {
        return None;
    }

    let divisor = window as f64;
    let mut averages = Vec::with_capacity(prices.len() - window + 1);
    let mut sum: f64 = prices[..window].iter().sum();
    averages.push(sum / divisor);

    for (entering, leaving) in prices[window..].iter().zip(prices) {
        sum += entering - leaving;
        averages.push(sum / divisor);
    }

    Some(averages)
}

/// Streaming moving average fed one value at a time
#[derive(Debug, Clone)]
pub struct MovingAverage {
    window: usize,
    values: VecDeque<f64>,
    sum: f64,
}

impl MovingAverage {
    /// Create an accumulator over `window` points. A zero window is rejected.
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            bail_invalid!("moving average window", window);
        }
        Ok(Self {
            window,
            values: VecDeque::with_capacity(window),
            sum: 0.0,
        })
    }

    pub fn from_config(config: &MovingAverageConfig) -> Result<Self> {
        Self::new(config.window)
    }

    /// Add a value; returns the current average once the window is full.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        self.values.push_back(value);
        self.sum += value;
        if self.values.len() > self.window {
            if let Some(leaving) = self.values.pop_front() {
                self.sum -= leaving;
            }
        }

        self.is_full().then(|| self.sum / self.window as f64)
    }

    pub fn is_full(&self) -> bool {
        self.values.len() == self.window
    }

    /// Number of values currently in the window
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn reset(&mut self) {
        self.values.clear();
        self.sum = 0.0;
    }
}
