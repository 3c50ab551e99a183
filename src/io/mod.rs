//! Checkpoint persistence
//!
//! A checkpoint is a directory holding the serialized model state
//! (parameters + training step + metadata) and the tokenizer configuration.
//!
//! Failure policy is asymmetric on purpose: [`save_checkpoint_or_warn`]
//! swallows and logs save errors so a training run survives a failed
//! attempt, while [`load_checkpoint`] propagates every error because
//! nothing can resume from a checkpoint that did not load.

mod format;
mod load;
mod save;
mod state;

pub use format::{CheckpointFormat, SaveConfig};
pub use load::load_checkpoint;
pub use save::{save_checkpoint, save_checkpoint_or_warn};
pub use state::{Checkpoint, CheckpointMetadata, CheckpointState, ParameterInfo};
