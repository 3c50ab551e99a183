//! Loss computation for token prediction
//!
//! The cross entropy is assembled from named numeric steps:
//!
//! - [`softmax`] / [`log_softmax`] - stable per-row normalization
//! - [`CrossEntropyLoss`] - summed ignore-index cross entropy, with an
//!   optional label-smoothed target distribution ([`SMOOTHING_EPS`])

mod cross_entropy;
mod softmax;

pub use cross_entropy::{CrossEntropyLoss, SMOOTHING_EPS};
pub use softmax::{log_softmax, softmax};
