//! Integration tests for the simple moving average

mod common;

use algokit::prelude::*;
use common::assert_close;

#[test]
fn test_normal_series() {
    let prices = vec![
        100.0, 102.0, 104.0, 103.0, 101.0, 98.0, 97.0, 99.0, 100.0, 102.0, 105.0,
    ];
    let result = compute_sma(&prices, 3).unwrap();
    assert_eq!(result.len(), prices.len() - 3 + 1);
    assert_close(
        &result,
        &[
            102.0, 103.0, 102.67, 100.67, 98.67, 98.0, 98.67, 100.33, 102.33,
        ],
        0.01,
    );
}

#[test]
fn test_invalid_inputs_produce_no_result() {
    let prices = [100.0, 102.0, 104.0];
    assert!(compute_sma(&prices, 5).is_none());
    assert!(compute_sma(&prices, 0).is_none());
    assert!(compute_sma(&prices, -3).is_none());
    assert!(compute_sma(&[], 3).is_none());
}

#[test]
fn test_window_of_one_is_identity() {
    let prices = [100.0, 102.0, 104.0];
    assert_close(&compute_sma(&prices, 1).unwrap(), &prices, 0.01);
}

#[test]
fn test_stream_and_batch_agree() {
    let prices: Vec<f64> = (0..50).map(|i| ((i * 37) % 11) as f64 + 0.5).collect();
    for window in 1..=10 {
        let batch = compute_sma(&prices, window as i64).unwrap();
        let mut stream = MovingAverage::new(window).unwrap();
        let streamed: Vec<f64> = prices.iter().filter_map(|&p| stream.push(p)).collect();
        assert_close(&streamed, &batch, 1e-9);
    }
}
