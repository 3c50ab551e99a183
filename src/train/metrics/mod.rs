//! Evaluation metrics for training and validation
//!
//! Token-level accuracy under the same padding mask the loss uses:
//! - [`argmax`] - row-wise prediction with a documented tie break
//! - [`Performance`] - loss + correct/total counts for one step

mod performance;

pub use performance::{argmax, Performance};
