//! Checkpoint saving.
//!
//! Two entry points with deliberately different failure policies:
//!
//! - [`save_checkpoint`] propagates errors, for callers that treat a failed
//!   save as fatal.
//! - [`save_checkpoint_or_warn`] logs the error and returns, matching the
//!   operational rule that a lost checkpoint attempt must not stop a
//!   training run. Loading is the opposite: see [`super::load_checkpoint`].

use std::fs;
use std::path::Path;

use crate::tokenizer::TokenizerConfig;
use crate::{Error, Result};

use super::format::{CheckpointFormat, SaveConfig};
use super::state::Checkpoint;

/// File stem for the serialized checkpoint state.
pub(crate) const STATE_FILE_STEM: &str = "model_state";

/// File name for the tokenizer configuration saved alongside.
pub(crate) const TOKENIZER_FILE: &str = "tokenizer.json";

/// Save a checkpoint and its tokenizer configuration under a directory.
///
/// Creates the directory if needed, then writes `model_state.<ext>` and
/// `tokenizer.json`.
///
/// # Example
///
/// ```no_run
/// use medir::io::{save_checkpoint, Checkpoint, CheckpointMetadata, SaveConfig};
/// use medir::tokenizer::TokenizerConfig;
/// use ndarray::array;
///
/// let params = vec![("encoder.weight".to_string(), array![1.0, 2.0])];
/// let ckpt = Checkpoint::new(CheckpointMetadata::new("my-model", "seq2seq"), params, 100);
///
/// save_checkpoint(&ckpt, &TokenizerConfig::default(), "checkpoints/run1", &SaveConfig::default())
///     .unwrap();
/// ```
pub fn save_checkpoint(
    checkpoint: &Checkpoint,
    tokenizer: &TokenizerConfig,
    dir: impl AsRef<Path>,
    config: &SaveConfig,
) -> Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let state = checkpoint.to_state();
    let encoded = match config.format {
        CheckpointFormat::Json => {
            if config.pretty {
                serde_json::to_string_pretty(&state)
                    .map_err(|e| Error::Serialization(format!("JSON serialization failed: {e}")))?
            } else {
                serde_json::to_string(&state)
                    .map_err(|e| Error::Serialization(format!("JSON serialization failed: {e}")))?
            }
        }
        CheckpointFormat::Yaml => serde_yaml::to_string(&state)
            .map_err(|e| Error::Serialization(format!("YAML serialization failed: {e}")))?,
    };

    let state_path = dir.join(format!("{STATE_FILE_STEM}.{}", config.format.extension()));
    fs::write(state_path, encoded)?;

    tokenizer.save(dir.join(TOKENIZER_FILE))?;

    Ok(())
}

/// Save a checkpoint, logging any failure instead of propagating it.
///
/// A failed save loses this checkpoint attempt and nothing else; the next
/// attempt starts fresh. Callers that consider a failed save fatal should
/// use [`save_checkpoint`] directly.
pub fn save_checkpoint_or_warn(
    checkpoint: &Checkpoint,
    tokenizer: &TokenizerConfig,
    dir: impl AsRef<Path>,
    config: &SaveConfig,
) {
    let dir = dir.as_ref();
    if let Err(e) = save_checkpoint(checkpoint, tokenizer, dir, config) {
        eprintln!(
            "checkpoint save to '{}' failed, continuing: {e}",
            dir.display()
        );
    }
}
