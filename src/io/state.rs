//! Checkpoint structure for serialization.

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{Error, Result};

/// Checkpoint metadata: what was trained and how far.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointMetadata {
    /// Model name/identifier
    pub name: String,

    /// Model architecture type (e.g., "transformer", "seq2seq")
    pub architecture: String,

    /// Checkpoint schema version
    pub version: String,

    /// Custom metadata fields
    pub custom: HashMap<String, serde_json::Value>,
}

impl CheckpointMetadata {
    /// Create new metadata with minimal fields.
    pub fn new(name: impl Into<String>, architecture: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            architecture: architecture.into(),
            version: "0.1.0".to_string(),
            custom: HashMap::new(),
        }
    }

    /// Add a custom metadata field.
    pub fn with_custom(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.custom.insert(key.into(), value);
        self
    }
}

/// Information about one saved parameter buffer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterInfo {
    /// Parameter name (e.g., "encoder.weight")
    pub name: String,

    /// Parameter shape
    pub shape: Vec<usize>,

    /// Data type
    pub dtype: String,
}

/// Serializable checkpoint state: parameter layout plus flattened data
/// plus the training step reached when it was written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckpointState {
    /// Checkpoint metadata
    pub metadata: CheckpointMetadata,

    /// Training step at save time
    pub step: usize,

    /// Parameter information
    pub parameters: Vec<ParameterInfo>,

    /// Flattened parameter data
    pub data: Vec<f32>,
}

/// A model snapshot: named parameter buffers and the training step.
#[derive(Debug, Clone)]
pub struct Checkpoint {
    /// Checkpoint metadata
    pub metadata: CheckpointMetadata,

    /// Training step at save time
    pub step: usize,

    /// Named parameter buffers
    pub parameters: Vec<(String, Array1<f32>)>,
}

impl Checkpoint {
    /// Create a new checkpoint.
    pub fn new(
        metadata: CheckpointMetadata,
        parameters: Vec<(String, Array1<f32>)>,
        step: usize,
    ) -> Self {
        Self {
            metadata,
            step,
            parameters,
        }
    }

    /// Get a parameter buffer by name.
    pub fn get_parameter(&self, name: &str) -> Option<&Array1<f32>> {
        self.parameters
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t)
    }

    /// Convert to serializable state.
    pub fn to_state(&self) -> CheckpointState {
        let mut data = Vec::new();
        let parameters: Vec<ParameterInfo> = self
            .parameters
            .iter()
            .map(|(name, buf)| {
                data.extend(buf.iter().copied());
                ParameterInfo {
                    name: name.clone(),
                    shape: vec![buf.len()],
                    dtype: "f32".to_string(),
                }
            })
            .collect();

        CheckpointState {
            metadata: self.metadata.clone(),
            step: self.step,
            parameters,
            data,
        }
    }

    /// Rebuild a checkpoint from serialized state.
    ///
    /// Fails if the flattened data does not cover the declared shapes,
    /// which indicates a truncated or hand-edited state file.
    pub fn from_state(state: CheckpointState) -> Result<Self> {
        let declared: usize = state
            .parameters
            .iter()
            .map(|p| p.shape.iter().product::<usize>())
            .sum();
        if declared != state.data.len() {
            return Err(Error::Serialization(format!(
                "parameter shapes declare {declared} values but data holds {}",
                state.data.len()
            )));
        }

        let mut offset = 0;
        let parameters: Vec<(String, Array1<f32>)> = state
            .parameters
            .into_iter()
            .map(|info| {
                let size: usize = info.shape.iter().product();
                let buf = Array1::from(state.data[offset..offset + size].to_vec());
                offset += size;
                (info.name, buf)
            })
            .collect();

        Ok(Self {
            metadata: state.metadata,
            step: state.step,
            parameters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn sample() -> Checkpoint {
        let params = vec![
            ("encoder.weight".to_string(), array![1.0, 2.0, 3.0]),
            ("decoder.bias".to_string(), array![0.1]),
        ];
        Checkpoint::new(CheckpointMetadata::new("test-model", "seq2seq"), params, 42)
    }

    #[test]
    fn test_metadata_creation() {
        let meta = CheckpointMetadata::new("test-model", "seq2seq");
        assert_eq!(meta.name, "test-model");
        assert_eq!(meta.architecture, "seq2seq");
        assert_eq!(meta.version, "0.1.0");
    }

    #[test]
    fn test_metadata_custom_fields() {
        let meta = CheckpointMetadata::new("test", "seq2seq")
            .with_custom("layers", serde_json::json!(6))
            .with_custom("d_model", serde_json::json!(512));
        assert_eq!(meta.custom.len(), 2);
        assert_eq!(meta.custom.get("layers").unwrap(), &serde_json::json!(6));
    }

    #[test]
    fn test_parameter_access() {
        let ckpt = sample();
        assert!(ckpt.get_parameter("encoder.weight").is_some());
        assert!(ckpt.get_parameter("decoder.bias").is_some());
        assert!(ckpt.get_parameter("nonexistent").is_none());
    }

    #[test]
    fn test_state_round_trip() {
        let original = sample();
        let state = original.to_state();
        assert_eq!(state.step, 42);

        let restored = Checkpoint::from_state(state).unwrap();
        assert_eq!(restored.metadata.name, original.metadata.name);
        assert_eq!(restored.step, 42);
        assert_eq!(restored.parameters.len(), 2);
        assert_eq!(
            restored.get_parameter("encoder.weight").unwrap(),
            original.get_parameter("encoder.weight").unwrap()
        );
    }

    #[test]
    fn test_from_state_rejects_truncated_data() {
        let mut state = sample().to_state();
        state.data.pop();
        let err = Checkpoint::from_state(state).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_checkpoint_debug_and_clone() {
        let ckpt = sample();
        let cloned = ckpt.clone();
        assert_eq!(cloned.step, ckpt.step);

        let debug_str = format!("{ckpt:?}");
        assert!(debug_str.contains("Checkpoint"));
        assert!(debug_str.contains("encoder.weight"));
    }

    #[test]
    fn test_empty_checkpoint() {
        let ckpt = Checkpoint::new(CheckpointMetadata::new("empty", "none"), vec![], 0);
        let restored = Checkpoint::from_state(ckpt.to_state()).unwrap();
        assert!(restored.parameters.is_empty());
        assert_eq!(restored.step, 0);
    }
}
