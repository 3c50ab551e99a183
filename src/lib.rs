//! # medir
//!
//! Loss, accuracy, and checkpoint utilities for sequence-to-sequence
//! training. The crate sits on top of an external model/optimizer stack:
//! it scores a step's logits against gold token ids and persists/restores
//! training snapshots, nothing more.
//!
//! - [`train::loss`] - summed cross entropy with ignore-index padding and
//!   optional label smoothing, built from named numeric steps
//! - [`train::metrics`] - masked token accuracy next to the loss
//! - [`io`] - checkpoint save/load (parameters + step + tokenizer config)
//! - [`tokenizer`] - tokenizer configuration carried with checkpoints
//!
//! # Example
//!
//! ```
//! use medir::train::CrossEntropyLoss;
//! use ndarray::{array, Array1};
//!
//! let logits = array![[2.0, 0.5, 0.1], [0.1, 0.2, 5.0]];
//! let gold: Array1<i64> = array![0, 2];
//!
//! let loss_fn = CrossEntropyLoss::new(-1).with_smoothing(true);
//! let perf = loss_fn.performance(logits.view(), gold.view()).unwrap();
//!
//! assert_eq!(perf.n_correct, 2);
//! assert_eq!(perf.n_words, 2);
//! assert!(perf.loss > 0.0);
//! ```

pub mod error;
pub mod io;
pub mod tokenizer;
pub mod train;

pub use error::{Error, Result};
pub use train::{CrossEntropyLoss, Performance};
