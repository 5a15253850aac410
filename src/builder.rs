//! Builder for resolving sink declarations into writers.

use std::path::PathBuf;

use crate::config::{FileWriterOptions, SinkConfig, SinkManifest};
use crate::error::ConfigError;
use crate::sink::LogWriter;

/// Builder that turns raw target strings and manifest entries into writers.
///
/// Target strings follow the usual CLI convention: `"-"` or `"stdout"` means
/// standard output, `"stderr"` standard error, and anything else is a file
/// path opened in create-or-append mode.
///
/// `build` is fail-fast: the first entry that cannot be resolved aborts the
/// build, and writers constructed before the failure are dropped (their
/// destinations released). A failed build never yields a usable writer.
pub struct SinkBuilder {
    targets: Vec<String>,
    sinks: Vec<SinkConfig>,
}

impl SinkBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            sinks: Vec::new(),
        }
    }

    /// Create a builder holding every sink declared in a manifest.
    pub fn from_manifest(manifest: SinkManifest) -> Self {
        Self {
            targets: Vec::new(),
            sinks: manifest.sinks,
        }
    }

    /// Add a raw target string.
    pub fn add_target(mut self, raw: impl Into<String>) -> Self {
        self.targets.push(raw.into());
        self
    }

    /// Set the raw target strings from argument-style input.
    pub fn targets_from_args(mut self, args: &[String]) -> Self {
        self.targets = args.to_vec();
        self
    }

    /// Add a sink configuration entry.
    pub fn add_sink(mut self, sink: SinkConfig) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Resolve every declared target and sink entry into a writer.
    pub fn build(self) -> Result<Vec<LogWriter>, ConfigError> {
        let mut writers = Vec::with_capacity(self.targets.len() + self.sinks.len());

        for raw in &self.targets {
            writers.push(Self::resolve_target(raw)?);
        }
        for sink in &self.sinks {
            writers.push(Self::resolve_sink(sink)?);
        }

        Ok(writers)
    }

    fn resolve_target(raw: &str) -> Result<LogWriter, ConfigError> {
        match raw {
            "-" | "stdout" => Ok(LogWriter::stdout()),
            "stderr" => Ok(LogWriter::stderr()),
            path => {
                let options = FileWriterOptions::new(PathBuf::from(path));
                Ok(LogWriter::file(options)?)
            }
        }
    }

    fn resolve_sink(cfg: &SinkConfig) -> Result<LogWriter, ConfigError> {
        match cfg.kind.as_str() {
            "stdout" | "-" => Ok(LogWriter::stdout()),
            "stderr" => Ok(LogWriter::stderr()),
            "file" => {
                let path = cfg.path.as_ref().ok_or_else(|| ConfigError::MissingPath {
                    id: cfg.id.clone(),
                })?;
                let options = FileWriterOptions::new(PathBuf::from(path));
                Ok(LogWriter::file(options)?)
            }
            other => Err(ConfigError::UnknownKind {
                id: cfg.id.clone(),
                kind: other.to_string(),
            }),
        }
    }
}

impl Default for SinkBuilder {
    fn default() -> Self {
        SinkBuilder::new()
    }
}
