//! Cross entropy over token predictions, with optional label smoothing.

use ndarray::{ArrayView1, ArrayView2};

use crate::{Error, Result};

use super::softmax::log_softmax;

/// Fixed label smoothing mass moved off the gold class.
pub const SMOOTHING_EPS: f32 = 0.1;

/// Cross entropy loss over flattened token predictions.
///
/// Logits are `[n_tokens, n_classes]`; gold is the matching `[n_tokens]`
/// vector of class ids, where row `i` of the logits scores gold position
/// `i`. Batch-shaped gold (`[batch, seq_len]`) flattens row-major to the
/// same ordering, so `gold.flatten()` lines up with logits flattened over
/// batch and position. Positions whose gold id equals `padding_idx` are excluded from the
/// loss entirely. The result is a **sum** over non-padding positions, not a
/// mean; callers divide by token count when they want an average.
///
/// With smoothing enabled, the one-hot target is replaced by a distribution
/// that puts `1 - eps` on the gold class and `eps / (n_classes - 1)` on each
/// other class, with `eps = 0.1`.
///
/// # Example
///
/// ```
/// use medir::train::CrossEntropyLoss;
/// use ndarray::{array, Array1};
///
/// let logits = array![[2.0, 0.5, 0.1], [0.1, 0.2, 5.0]];
/// let gold: Array1<i64> = array![0, 2];
///
/// let loss_fn = CrossEntropyLoss::new(-1);
/// let loss = loss_fn.forward(logits.view(), gold.view()).unwrap();
/// assert!(loss > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct CrossEntropyLoss {
    /// Gold id marking positions excluded from loss and accuracy.
    padding_idx: i64,
    /// Whether to smooth the target distribution.
    smoothing: bool,
}

impl CrossEntropyLoss {
    /// Create a loss with the given padding id; smoothing off.
    pub fn new(padding_idx: i64) -> Self {
        Self {
            padding_idx,
            smoothing: false,
        }
    }

    /// Enable or disable label smoothing.
    pub fn with_smoothing(mut self, smoothing: bool) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Gold id excluded from loss and counts.
    pub fn padding_idx(&self) -> i64 {
        self.padding_idx
    }

    /// Whether label smoothing is enabled.
    pub fn smoothing(&self) -> bool {
        self.smoothing
    }

    /// Check gold length against logit rows and every non-padding gold id
    /// against the class range. Fails fast instead of letting a bad index
    /// surface as NaN or a panic mid-reduction.
    pub(crate) fn validate(
        &self,
        logits: ArrayView2<'_, f32>,
        gold: ArrayView1<'_, i64>,
    ) -> Result<()> {
        if logits.ncols() == 0 {
            return Err(Error::EmptyClassDim);
        }
        if gold.len() != logits.nrows() {
            return Err(Error::LengthMismatch {
                gold_len: gold.len(),
                rows: logits.nrows(),
            });
        }
        let n_classes = logits.ncols();
        for (position, &g) in gold.iter().enumerate() {
            if g == self.padding_idx {
                continue;
            }
            if g < 0 || g as usize >= n_classes {
                return Err(Error::ClassOutOfRange {
                    index: g,
                    position,
                    n_classes,
                });
            }
        }
        Ok(())
    }

    /// Compute the summed loss over non-padding positions.
    ///
    /// All-padding input yields exactly 0.
    pub fn forward(&self, logits: ArrayView2<'_, f32>, gold: ArrayView1<'_, i64>) -> Result<f32> {
        self.validate(logits, gold)?;

        let n_classes = logits.ncols();
        let mut total = 0.0f32;

        for (row, &g) in logits.outer_iter().zip(gold.iter()) {
            if g == self.padding_idx {
                continue;
            }
            let gold_idx = g as usize;
            let log_probs = log_softmax(row);

            if self.smoothing && n_classes > 1 {
                // -(on * logp[gold] + off * sum(logp[other]))
                let on = 1.0 - SMOOTHING_EPS;
                let off = SMOOTHING_EPS / (n_classes - 1) as f32;
                let sum_log_probs: f32 = log_probs.sum();
                total -= on * log_probs[gold_idx] + off * (sum_log_probs - log_probs[gold_idx]);
            } else {
                total -= log_probs[gold_idx];
            }
        }

        Ok(total)
    }

    /// Name of the loss function.
    pub fn name(&self) -> &'static str {
        if self.smoothing {
            "SmoothedCrossEntropy"
        } else {
            "CrossEntropy"
        }
    }
}
