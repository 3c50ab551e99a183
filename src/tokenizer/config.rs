//! Tokenizer configuration persisted alongside checkpoints.
//!
//! The tokenizer implementation itself lives outside this crate; only its
//! configuration travels with a checkpoint so a resumed run can rebuild
//! the same vocabulary mapping.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Special tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialTokens {
    /// Unknown token
    pub unk: String,
    /// Beginning of sequence
    pub bos: String,
    /// End of sequence
    pub eos: String,
    /// Padding token; its id is what callers pass to the loss as
    /// `padding_idx`
    pub pad: String,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self {
            unk: "<unk>".to_string(),
            bos: "<s>".to_string(),
            eos: "</s>".to_string(),
            pad: "<pad>".to_string(),
        }
    }
}

/// Tokenization scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenizerScheme {
    /// Byte Pair Encoding
    Bpe,
    /// WordPiece (BERT-style)
    WordPiece,
    /// Character-level
    Char,
}

/// Tokenizer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Vocabulary size
    pub vocab_size: usize,
    /// Tokenization scheme
    pub scheme: TokenizerScheme,
    /// Special tokens
    pub special_tokens: SpecialTokens,
    /// Whether input was lowercased
    pub lowercase: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            vocab_size: 32000,
            scheme: TokenizerScheme::Bpe,
            special_tokens: SpecialTokens::default(),
            lowercase: false,
        }
    }
}

impl TokenizerConfig {
    /// Set vocabulary size.
    pub fn with_vocab_size(mut self, size: usize) -> Self {
        self.vocab_size = size;
        self
    }

    /// Set the tokenization scheme.
    pub fn with_scheme(mut self, scheme: TokenizerScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Enable lowercase preprocessing.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Write the configuration as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Serialization(format!("tokenizer config encode failed: {e}")))?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Read a configuration back from JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| Error::Serialization(format!("tokenizer config decode failed: {e}")))
    }
}
