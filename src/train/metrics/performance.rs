//! Masked token accuracy alongside the loss.

use ndarray::{ArrayView1, ArrayView2};

use crate::train::loss::CrossEntropyLoss;
use crate::Result;

/// Index of the largest value in a row.
///
/// Ties break toward the **lowest** class index: the first maximal element
/// wins. This is observable through [`Performance`] counts, so it is pinned
/// by tests rather than left to the reduction order.
pub fn argmax(row: ArrayView1<'_, f32>) -> usize {
    let mut best = 0;
    let mut best_val = f32::NEG_INFINITY;
    for (i, &v) in row.iter().enumerate() {
        if v > best_val {
            best = i;
            best_val = v;
        }
    }
    best
}

/// Loss and token-level accuracy counts for one evaluation step.
///
/// `n_words` counts non-padding gold positions; `n_correct` counts those
/// whose argmax prediction matched the gold id. The loss is the summed
/// (not averaged) cross entropy over the same positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Performance {
    /// Summed loss over non-padding positions.
    pub loss: f32,
    /// Non-padding positions predicted correctly.
    pub n_correct: usize,
    /// Total non-padding positions.
    pub n_words: usize,
}

impl Performance {
    /// Fraction of non-padding positions predicted correctly; 0.0 when the
    /// batch contained no scorable tokens.
    pub fn accuracy(&self) -> f32 {
        if self.n_words == 0 {
            return 0.0;
        }
        self.n_correct as f32 / self.n_words as f32
    }

    /// Mean loss per non-padding token; 0.0 for an all-padding batch.
    pub fn loss_per_word(&self) -> f32 {
        if self.n_words == 0 {
            return 0.0;
        }
        self.loss / self.n_words as f32
    }
}

impl CrossEntropyLoss {
    /// Compute loss plus masked accuracy counts in one pass.
    ///
    /// Every call is independent; identical inputs give bit-identical
    /// results.
    pub fn performance(
        &self,
        logits: ArrayView2<'_, f32>,
        gold: ArrayView1<'_, i64>,
    ) -> Result<Performance> {
        let loss = self.forward(logits, gold)?;

        let mut n_correct = 0;
        let mut n_words = 0;
        for (row, &g) in logits.outer_iter().zip(gold.iter()) {
            if g == self.padding_idx() {
                continue;
            }
            n_words += 1;
            if argmax(row) as i64 == g {
                n_correct += 1;
            }
        }

        Ok(Performance {
            loss,
            n_correct,
            n_words,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{array, Array1};

    #[test]
    fn test_argmax_basic() {
        assert_eq!(argmax(array![0.1, 0.9, 0.3].view()), 1);
        assert_eq!(argmax(array![5.0, 1.0].view()), 0);
    }

    #[test]
    fn test_argmax_tie_breaks_to_lowest_index() {
        assert_eq!(argmax(array![2.0, 2.0, 1.0].view()), 0);
        assert_eq!(argmax(array![0.0, 3.0, 3.0].view()), 1);
    }

    #[test]
    fn test_performance_all_correct() {
        // predicted [0, 2], both match
        let logits = array![[2.0, 0.5, 0.1], [0.1, 0.2, 5.0]];
        let gold: Array1<i64> = array![0, 2];

        let perf = CrossEntropyLoss::new(-1)
            .performance(logits.view(), gold.view())
            .unwrap();
        assert_eq!(perf.n_correct, 2);
        assert_eq!(perf.n_words, 2);
        assert!(perf.loss > 0.0);
        assert_relative_eq!(perf.accuracy(), 1.0);
    }

    #[test]
    fn test_performance_counts_mistakes() {
        let logits = array![[2.0, 0.5], [0.1, 5.0], [4.0, 0.0]];
        let gold: Array1<i64> = array![0, 0, 1];

        let perf = CrossEntropyLoss::new(-1)
            .performance(logits.view(), gold.view())
            .unwrap();
        assert_eq!(perf.n_correct, 1);
        assert_eq!(perf.n_words, 3);
        assert_relative_eq!(perf.accuracy(), 1.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_performance_skips_padding() {
        let logits = array![[2.0, 0.5], [9.0, 9.0], [0.1, 5.0]];
        let gold: Array1<i64> = array![0, -1, 1];

        let perf = CrossEntropyLoss::new(-1)
            .performance(logits.view(), gold.view())
            .unwrap();
        // The padded middle row counts toward neither tally
        assert_eq!(perf.n_words, 2);
        assert_eq!(perf.n_correct, 2);
    }

    #[test]
    fn test_performance_all_padding() {
        let logits = array![[1.0, 2.0], [3.0, 4.0]];
        let gold: Array1<i64> = array![-1, -1];

        let perf = CrossEntropyLoss::new(-1)
            .performance(logits.view(), gold.view())
            .unwrap();
        assert_eq!(perf.loss, 0.0);
        assert_eq!(perf.n_correct, 0);
        assert_eq!(perf.n_words, 0);
        assert_eq!(perf.accuracy(), 0.0);
        assert_eq!(perf.loss_per_word(), 0.0);
    }

    #[test]
    fn test_performance_loss_matches_forward() {
        let logits = array![[0.3, -1.2, 4.0], [2.2, 0.0, -0.5]];
        let gold: Array1<i64> = array![2, 0];

        let loss_fn = CrossEntropyLoss::new(-1).with_smoothing(true);
        let loss = loss_fn.forward(logits.view(), gold.view()).unwrap();
        let perf = loss_fn.performance(logits.view(), gold.view()).unwrap();
        assert_eq!(loss.to_bits(), perf.loss.to_bits());
    }

    #[test]
    fn test_performance_validates_inputs() {
        let logits = array![[1.0, 2.0]];
        let gold: Array1<i64> = array![0, 1];

        let result = CrossEntropyLoss::new(-1).performance(logits.view(), gold.view());
        assert!(result.is_err());
    }

    mod performance_properties {
        use super::*;
        use proptest::prelude::*;
        use ndarray::Array2;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn prop_counts_bounded(
                nc in 2usize..=6,
                gold in proptest::collection::vec(prop_oneof![Just(-1i64), (0..6i64)], 1..=10),
                seed in 0..1000i32,
            ) {
                let gold: Vec<i64> = gold.into_iter().map(|g| if g >= nc as i64 { -1 } else { g }).collect();
                let n = gold.len();
                let flat: Vec<f32> = (0..n * nc)
                    .map(|i| ((i as f32 + seed as f32) * 0.37).sin() * 10.0)
                    .collect();
                let logits = Array2::from_shape_vec((n, nc), flat).unwrap();
                let gold = Array1::from(gold);

                let perf = CrossEntropyLoss::new(-1)
                    .performance(logits.view(), gold.view())
                    .unwrap();

                let non_pad = gold.iter().filter(|&&g| g != -1).count();
                prop_assert_eq!(perf.n_words, non_pad);
                prop_assert!(perf.n_correct <= perf.n_words);
                prop_assert!((0.0..=1.0).contains(&perf.accuracy()));
            }
        }
    }
}
