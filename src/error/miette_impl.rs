//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{ConfigError, WriterError};

/// A diagnostic wrapper for sink errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct SinkDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<WriterError> for SinkDiagnostic {
    fn from(e: WriterError) -> Self {
        let (message, source, help) = match e {
            WriterError::InvalidPath { path, source } => (
                format!("invalid log destination path '{}'", path.display()),
                source,
                "Check that the parent directory exists and the path names a regular file",
            ),
            WriterError::NoPermission { path, source } => (
                format!("no permission to write log destination '{}'", path.display()),
                source,
                "Check filesystem permissions for the log destination",
            ),
            WriterError::WriteFailure { target, source } => (
                format!("write to log destination '{target}' failed"),
                source,
                "The destination stream rejected the write; the writer is still cleanable",
            ),
        };
        SinkDiagnostic {
            message,
            source: Some(Box::new(source)),
            help: Some(help.into()),
            severity: Severity::Error,
        }
    }
}

impl From<ConfigError> for SinkDiagnostic {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::Writer(inner) => SinkDiagnostic::from(inner),
            other => SinkDiagnostic {
                message: other.to_string(),
                source: None,
                help: Some("Check the sink manifest entries".into()),
                severity: Severity::Error,
            },
        }
    }
}

impl From<WriterError> for miette::Report {
    fn from(e: WriterError) -> Self {
        miette::Report::new(SinkDiagnostic::from(e))
    }
}

impl From<ConfigError> for miette::Report {
    fn from(e: ConfigError) -> Self {
        miette::Report::new(SinkDiagnostic::from(e))
    }
}
