//! Training-step utilities: loss and metrics.

pub mod loss;
pub mod metrics;

pub use loss::{log_softmax, softmax, CrossEntropyLoss, SMOOTHING_EPS};
pub use metrics::{argmax, Performance};
