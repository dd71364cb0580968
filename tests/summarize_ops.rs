//! Tests for the min/max/mean/std reduction

mod common;

use common::{assert_allclose_f64, reference_stats};
use proptest::prelude::*;
use tensorsum::error::Error;
use tensorsum::ops::{StatisticsSummarizer, SummaryStats, summarize};
use tensorsum::tensor::TensorView;

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_summarize_four_elements() {
    let data = [1.0f64, 2.0, 3.0, 4.0];
    let stats = StatisticsSummarizer::new()
        .compute(TensorView::from_slice(&data))
        .unwrap();
    assert_eq!(stats.min, 1.0);
    assert_eq!(stats.max, 4.0);
    assert_eq!(stats.mean, 2.5);
    assert_allclose_f64(&[stats.std], &[1.118033988749895], 1e-12, 0.0, "std");
}

#[test]
fn test_summarize_single_element() {
    let stats = summarize(&[5.0f64]).unwrap();
    assert_eq!(stats.min, 5.0);
    assert_eq!(stats.max, 5.0);
    assert_eq!(stats.mean, 5.0);
    assert_eq!(stats.std, 0.0);
}

#[test]
fn test_summarize_empty_view() {
    let data: Vec<f32> = Vec::new();
    let view = TensorView::new(&data, &[4, 0]).unwrap();
    let err = StatisticsSummarizer::new().compute(view).unwrap_err();
    assert!(matches!(err, Error::EmptyInput));
}

#[test]
fn test_summarize_matrix_view_is_flattened() {
    let data = [6.0f32, -1.0, 2.0, 9.0, 0.0, 2.0];
    let flat = summarize(&data).unwrap();
    let view = TensorView::new(&data, &[3, 2]).unwrap();
    let shaped = StatisticsSummarizer::new().compute(view).unwrap();
    assert_eq!(flat, shaped);
    assert_eq!(shaped.min, -1.0);
    assert_eq!(shaped.max, 9.0);
    assert_eq!(shaped.mean, 3.0);
}

#[test]
fn test_f32_input_accumulates_in_f64() {
    // 2^24 + 1 is not representable in f32; an f32 running sum stalls at 2^24
    let n = (1 << 24) + 16;
    let data = vec![1.0f32; n];
    let stats = summarize(&data).unwrap();
    assert_eq!(stats.mean, 1.0);
    assert_eq!(stats.std, 0.0);
}

#[test]
fn test_large_mean_small_spread() {
    let data: Vec<f64> = (0..1000).map(|i| 1.0e8 + (i % 2) as f64).collect();
    let stats = summarize(&data).unwrap();
    assert_allclose_f64(&[stats.mean], &[1.0e8 + 0.5], 1e-15, 0.0, "mean");
    assert_allclose_f64(&[stats.std], &[0.5], 1e-9, 0.0, "std");
}

#[test]
fn test_unsigned_elements() {
    let stats = summarize(&[0u8, 255, 255, 0]).unwrap();
    assert_eq!(stats.min, 0.0);
    assert_eq!(stats.max, 255.0);
    assert_eq!(stats.mean, 127.5);
    assert_eq!(stats.std, 127.5);
}

#[test]
fn test_repeated_calls_are_bitwise_identical() {
    let data: Vec<f64> = (0..257).map(|i| ((i * 37) % 101) as f64 * 0.013 - 0.4).collect();
    let a = summarize(&data).unwrap();
    let b = summarize(&data).unwrap();
    for (x, y) in a.to_array().iter().zip(b.to_array().iter()) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
}

#[test]
fn test_stats_array_order() {
    let stats = summarize(&[2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    let arr = stats.to_array();
    assert_eq!(arr[SummaryStats::MIN_IDX], 2.0);
    assert_eq!(arr[SummaryStats::MAX_IDX], 9.0);
    assert_eq!(arr[SummaryStats::MEAN_IDX], 5.0);
    assert_eq!(arr[SummaryStats::STD_IDX], 2.0);
}

#[test]
fn test_values_near_f64_max_stay_finite() {
    let data = [f64::MAX, f64::MAX / 2.0];
    let stats = summarize(&data).unwrap();
    assert_allclose_f64(
        &stats.to_array(),
        &[f64::MAX / 2.0, f64::MAX, 1.3482698511467367e308, 0.25 * f64::MAX],
        1e-12,
        0.0,
        "near-max pair",
    );
}

// ============================================================================
// Properties
// ============================================================================

fn buffers() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, 1..200)
}

proptest! {
    #[test]
    fn prop_mean_between_extremes(data in buffers()) {
        let stats = summarize(&data).unwrap();
        prop_assert!(stats.min <= stats.mean);
        prop_assert!(stats.mean <= stats.max);
    }

    #[test]
    fn prop_std_non_negative(data in buffers()) {
        let stats = summarize(&data).unwrap();
        prop_assert!(stats.std >= 0.0);
    }

    #[test]
    fn prop_std_zero_iff_constant(value in -1.0e6f64..1.0e6, len in 1usize..64, data in buffers()) {
        let constant = vec![value; len];
        let stats = summarize(&constant).unwrap();
        prop_assert_eq!(stats.std, 0.0);
        prop_assert_eq!(stats.mean, value);

        let stats = summarize(&data).unwrap();
        let all_equal = data.iter().all(|&x| x == data[0]);
        prop_assert_eq!(stats.std == 0.0, all_equal);
    }

    #[test]
    fn prop_order_insensitive(data in buffers()) {
        let forward = summarize(&data).unwrap();
        let mut reversed = data.clone();
        reversed.reverse();
        let backward = summarize(&reversed).unwrap();

        prop_assert_eq!(forward.min, backward.min);
        prop_assert_eq!(forward.max, backward.max);
        let scale = forward.max.abs().max(forward.min.abs()).max(1.0);
        prop_assert!((forward.mean - backward.mean).abs() <= 1e-9 * scale);
        prop_assert!((forward.std - backward.std).abs() <= 1e-9 * scale);
    }

    #[test]
    fn prop_huge_magnitudes_match_rescaled_reference(data in buffers()) {
        // Up to 1e308: the plain f64 sum overflows for most such buffers
        const FACTOR: f64 = 1.0e302;
        let huge: Vec<f64> = data.iter().map(|&x| x * FACTOR).collect();
        let stats = summarize(&huge).unwrap();
        let expected = reference_stats(&data);

        prop_assert!(stats.mean.is_finite());
        prop_assert!(stats.std.is_finite());
        prop_assert!(stats.min <= stats.mean && stats.mean <= stats.max);
        let scale = expected.max.abs().max(expected.min.abs()).max(1.0) * FACTOR;
        prop_assert!((stats.mean - expected.mean * FACTOR).abs() <= 1e-9 * scale);
        prop_assert!((stats.std - expected.std * FACTOR).abs() <= 1e-9 * scale);
    }

    #[test]
    fn prop_matches_reference(data in buffers()) {
        let stats = summarize(&data).unwrap();
        let expected = reference_stats(&data);
        prop_assert_eq!(stats.min, expected.min);
        prop_assert_eq!(stats.max, expected.max);
        let scale = expected.max.abs().max(expected.min.abs()).max(1.0);
        prop_assert!((stats.mean - expected.mean).abs() <= 1e-9 * scale);
        prop_assert!((stats.std - expected.std).abs() <= 1e-9 * scale);
    }
}
