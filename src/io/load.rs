//! Checkpoint loading.
//!
//! Unlike saving, load failures always propagate: a run resuming from a
//! checkpoint cannot proceed without one.

use std::fs;
use std::path::Path;

use crate::{Error, Result};

use super::format::CheckpointFormat;
use super::save::STATE_FILE_STEM;
use super::state::{Checkpoint, CheckpointState};

/// Load a checkpoint from a directory written by
/// [`save_checkpoint`](super::save_checkpoint).
///
/// Looks for `model_state.json`, `model_state.yaml`, or `model_state.yml`
/// and decodes according to the extension found.
///
/// # Example
///
/// ```no_run
/// use medir::io::load_checkpoint;
///
/// let ckpt = load_checkpoint("checkpoints/run1").expect("failed to load checkpoint");
/// println!("resuming '{}' from step {}", ckpt.metadata.name, ckpt.step);
/// ```
pub fn load_checkpoint(dir: impl AsRef<Path>) -> Result<Checkpoint> {
    let dir = dir.as_ref();

    let (path, format) = ["json", "yaml", "yml"]
        .iter()
        .find_map(|ext| {
            let candidate = dir.join(format!("{STATE_FILE_STEM}.{ext}"));
            candidate.exists().then(|| {
                // Candidates above are exactly the known extensions
                let format = CheckpointFormat::from_extension(ext).unwrap_or(CheckpointFormat::Json);
                (candidate, format)
            })
        })
        .ok_or_else(|| {
            Error::Serialization(format!(
                "no {STATE_FILE_STEM}.{{json,yaml,yml}} found in '{}'",
                dir.display()
            ))
        })?;

    let content = fs::read_to_string(&path)?;

    let state: CheckpointState = match format {
        CheckpointFormat::Json => serde_json::from_str(&content)
            .map_err(|e| Error::Serialization(format!("JSON deserialization failed: {e}")))?,
        CheckpointFormat::Yaml => serde_yaml::from_str(&content)
            .map_err(|e| Error::Serialization(format!("YAML deserialization failed: {e}")))?,
    };

    Checkpoint::from_state(state)
}
