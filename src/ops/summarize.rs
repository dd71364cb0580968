//! Min/max/mean/std reduction over a contiguous buffer

use std::fmt;

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::tensor::TensorView;

/// The four summary statistics of a tensor, in fixed order
///
/// For finite, non-empty input `min <= mean <= max` and `std >= 0`.
/// If any input element is NaN, every field is NaN.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SummaryStats {
    /// Smallest element
    pub min: f64,
    /// Largest element
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation (divides by N)
    pub std: f64,
}

impl SummaryStats {
    /// Position of `min` in [`to_array`](Self::to_array)
    pub const MIN_IDX: usize = 0;
    /// Position of `max` in [`to_array`](Self::to_array)
    pub const MAX_IDX: usize = 1;
    /// Position of `mean` in [`to_array`](Self::to_array)
    pub const MEAN_IDX: usize = 2;
    /// Position of `std` in [`to_array`](Self::to_array)
    pub const STD_IDX: usize = 3;
    /// Number of statistics
    pub const NUM_STATS: usize = 4;

    /// Stats as `[min, max, mean, std]`, suitable for a 4-element output tensor
    #[inline]
    pub fn to_array(&self) -> [f64; Self::NUM_STATS] {
        [self.min, self.max, self.mean, self.std]
    }

    /// Stat at `idx`, or `None` if `idx >= NUM_STATS`
    #[inline]
    pub fn get(&self, idx: usize) -> Option<f64> {
        self.to_array().get(idx).copied()
    }

    /// Population variance
    #[inline]
    pub fn variance(&self) -> f64 {
        self.std * self.std
    }

    fn nan() -> Self {
        Self {
            min: f64::NAN,
            max: f64::NAN,
            mean: f64::NAN,
            std: f64::NAN,
        }
    }
}

impl From<SummaryStats> for [f64; SummaryStats::NUM_STATS] {
    fn from(stats: SummaryStats) -> Self {
        stats.to_array()
    }
}

impl fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min: {} max: {} mean: {} std: {}",
            self.min, self.max, self.mean, self.std
        )
    }
}

/// Computes [`SummaryStats`] for tensor views
///
/// Stateless; one instance can serve any number of tensors. Output handling
/// lives in [`OutputSink`](crate::sink::OutputSink).
#[derive(Copy, Clone, Debug, Default)]
pub struct StatisticsSummarizer;

impl StatisticsSummarizer {
    /// Create a summarizer
    pub fn new() -> Self {
        Self
    }

    /// Summarize every element of `view`
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyInput` if the view has no elements.
    pub fn compute<T: Element>(&self, view: TensorView<'_, T>) -> Result<SummaryStats> {
        summarize(view.as_slice())
    }
}

/// Compute min, max, mean and population std of `data`
///
/// All arithmetic is carried out in f64 regardless of `T`.
///
/// # Algorithm
///
/// ```text
/// pass 1: min, max, sum            (all-NaN result on the first NaN)
/// s     = power of two near max(|min|, |max|)
/// mean  = sum / n, clamped to [min, max]
///         (if sum overflowed: s * sum(x_i / s) / n)
/// pass 2: d_i = x_i / s - mean / s
///         var = (sum(d_i^2) - sum(d_i)^2 / n) / n
/// std   = s * sqrt(var), with tiny negative var rounded to 0
/// ```
///
/// The second pass recomputes deviations from the known mean instead of
/// using `E[x^2] - E[x]^2`, which cancels catastrophically when the mean is
/// large relative to the spread. The `sum(d_i)^2 / n` term removes the
/// rounding error left in the mean.
///
/// Scaling by a power of two is exact, so it changes no bits for ordinary
/// input; it only keeps `sum` and `d_i^2` finite when elements approach
/// `f64::MAX`.
///
/// # Errors
///
/// Returns `Error::EmptyInput` if `data` is empty.
pub fn summarize<T: Element>(data: &[T]) -> Result<SummaryStats> {
    let Some((first, rest)) = data.split_first() else {
        return Err(Error::EmptyInput);
    };

    let first = first.to_f64();
    if first.is_nan() {
        return Ok(SummaryStats::nan());
    }

    let mut min = first;
    let mut max = first;
    let mut sum = first;
    for &x in rest {
        let v = x.to_f64();
        if v.is_nan() {
            return Ok(SummaryStats::nan());
        }
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
        sum += v;
    }

    let n = data.len() as f64;
    let scale = pow2_scale(min.abs().max(max.abs()));
    let inv_scale = 1.0 / scale;

    let raw_mean = if sum.is_finite() || !(min.is_finite() && max.is_finite()) {
        sum / n
    } else {
        // Finite elements whose sum overflowed
        let scaled_sum: f64 = data.iter().map(|&x| x.to_f64() * inv_scale).sum();
        scaled_sum / n * scale
    };
    // Rounding in `sum` can push the quotient just past an extreme
    let mean = raw_mean.clamp(min, max);
    let scaled_mean = mean * inv_scale;

    let mut sq_sum = 0.0f64;
    let mut dev_sum = 0.0f64;
    for &x in data {
        let d = x.to_f64() * inv_scale - scaled_mean;
        sq_sum += d * d;
        dev_sum += d;
    }
    let var = (sq_sum - dev_sum * dev_sum / n) / n;
    // NaN here (infinite input) must survive; f64::max would drop it
    let std = if var < 0.0 { 0.0 } else { var.sqrt() * scale };

    Ok(SummaryStats {
        min,
        max,
        mean,
        std,
    })
}

/// Power of two `s` with `magnitude / s` in `[1, 2)`
///
/// Returns 1 for zero, subnormal or non-finite magnitudes, which need no
/// rescaling (or cannot be rescaled).
fn pow2_scale(magnitude: f64) -> f64 {
    const EXP_BIAS: u64 = 1023;
    const MANTISSA_BITS: u32 = 52;

    if !magnitude.is_normal() {
        return 1.0;
    }
    let biased_exp = (magnitude.to_bits() >> MANTISSA_BITS) & 0x7ff;
    debug_assert!((1..2 * EXP_BIAS + 1).contains(&biased_exp));
    f64::from_bits(biased_exp << MANTISSA_BITS)
}
