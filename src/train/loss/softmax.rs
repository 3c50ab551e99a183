//! Numerically stable softmax primitives.
//!
//! The loss is built from these named steps rather than a fused kernel so
//! each one can be tested in isolation.

use ndarray::{Array1, ArrayView1};

/// Compute softmax: `exp(x_i - max) / sum(exp(x_j - max))`.
///
/// Subtracting the row maximum keeps `exp` in range for large logits.
///
/// # Example
///
/// ```
/// use medir::train::softmax;
/// use ndarray::array;
///
/// let probs = softmax(array![1.0, 2.0, 3.0].view());
/// let sum: f32 = probs.sum();
/// assert!((sum - 1.0).abs() < 1e-6);
/// ```
pub fn softmax(row: ArrayView1<'_, f32>) -> Array1<f32> {
    let max = row.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exp_x: Array1<f32> = row.mapv(|v| (v - max).exp());
    let sum: f32 = exp_x.sum();
    exp_x / sum
}

/// Compute log-softmax: `x_i - max - ln(sum(exp(x_j - max)))`.
///
/// Computed in log-sum-exp form instead of `softmax(...).ln()` so that
/// probabilities that underflow to zero still produce finite log values.
pub fn log_softmax(row: ArrayView1<'_, f32>) -> Array1<f32> {
    let max = row.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let log_sum: f32 = row.iter().map(|&v| (v - max).exp()).sum::<f32>().ln();
    row.mapv(|v| v - max - log_sum)
}
