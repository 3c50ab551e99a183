//! Crate-level error types.

use thiserror::Error;

/// Errors produced by loss computation and checkpoint I/O.
#[derive(Debug, Error)]
pub enum Error {
    /// Gold sequence length does not match the number of logit rows.
    #[error("gold length {gold_len} does not match logit rows {rows}")]
    LengthMismatch { gold_len: usize, rows: usize },

    /// A non-padding gold index falls outside `[0, n_classes)`.
    #[error("class index {index} at position {position} out of range for {n_classes} classes")]
    ClassOutOfRange {
        index: i64,
        position: usize,
        n_classes: usize,
    },

    /// Logits with zero classes cannot be scored.
    #[error("logit matrix has no class dimension")]
    EmptyClassDim,

    /// Filesystem failure while reading or writing a checkpoint.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Encode/decode failure for checkpoint state or tokenizer config.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for medir operations.
pub type Result<T> = std::result::Result<T, Error>;
