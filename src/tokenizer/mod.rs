//! Tokenizer configuration types.

mod config;

pub use config::{SpecialTokens, TokenizerConfig, TokenizerScheme};
