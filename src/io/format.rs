//! Checkpoint serialization formats.

/// On-disk encoding for the checkpoint state file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckpointFormat {
    /// JSON (default)
    Json,
    /// YAML
    Yaml,
}

impl CheckpointFormat {
    /// File extension written for this format.
    pub fn extension(self) -> &'static str {
        match self {
            CheckpointFormat::Json => "json",
            CheckpointFormat::Yaml => "yaml",
        }
    }

    /// Detect a format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "json" => Some(CheckpointFormat::Json),
            "yaml" | "yml" => Some(CheckpointFormat::Yaml),
            _ => None,
        }
    }
}

/// Options controlling how a checkpoint is written.
#[derive(Debug, Clone)]
pub struct SaveConfig {
    /// Serialization format
    pub format: CheckpointFormat,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl SaveConfig {
    /// Create a save configuration for the given format.
    pub fn new(format: CheckpointFormat) -> Self {
        Self {
            format,
            pretty: true,
        }
    }

    /// Set pretty-printing.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self::new(CheckpointFormat::Json)
    }
}
