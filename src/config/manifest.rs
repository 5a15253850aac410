//! Declarative sink manifest for defining log destinations in config files.

use serde::Deserialize;

#[cfg(any(feature = "json", feature = "yaml"))]
use crate::error::ConfigError;

/// Configuration for a single log sink.
#[derive(Debug, Clone, Deserialize)]
pub struct SinkConfig {
    /// Unique identifier for this sink
    pub id: String,
    /// Kind of sink: "file", "stdout", or "stderr"
    pub kind: String,
    /// File path (for file sinks)
    #[serde(default)]
    pub path: Option<String>,
}

impl SinkConfig {
    /// Create a file sink entry.
    pub fn file(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: "file".into(),
            path: Some(path.into()),
        }
    }

    /// Create a stdout sink entry.
    pub fn stdout(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: "stdout".into(),
            path: None,
        }
    }

    /// Create a stderr sink entry.
    pub fn stderr(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: "stderr".into(),
            path: None,
        }
    }
}

/// A declarative list of sinks, typically loaded from a config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SinkManifest {
    /// Sink configurations
    #[serde(default)]
    pub sinks: Vec<SinkConfig>,
}

impl SinkManifest {
    /// Create a new empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sink configuration.
    pub fn add_sink(mut self, sink: SinkConfig) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Parse a manifest from JSON text.
    #[cfg(feature = "json")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(|e| ConfigError::Manifest(Box::new(e)))
    }

    /// Parse a manifest from YAML text.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(s).map_err(|e| ConfigError::Manifest(Box::new(e)))
    }
}
