//! Error types for log sink construction and writing.
//!
//! This module provides:
//! - `WriterError`: Failures of the writer contract itself (open and write)
//! - `ConfigError`: Failures while resolving sink configuration into writers
//!
//! `WriterError` is deliberately small: construction can fail in exactly two
//! ways (`InvalidPath`, `NoPermission`) and writing in one (`WriteFailure`).
//! Consumers of the sink layer match on these variants and nothing else.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced by [`LogWriter`](crate::LogWriter) factories and writes.
#[derive(Debug, Error)]
pub enum WriterError {
    /// The path cannot denote a writable file: it names a directory, a parent
    /// component is missing, or the path itself is malformed.
    #[error("invalid log destination path '{}': {}", .path.display(), .source)]
    InvalidPath {
        /// The rejected path
        path: PathBuf,
        /// The underlying OS error
        source: io::Error,
    },

    /// The path is syntactically valid but the caller may not write to it.
    #[error("no permission to write log destination '{}': {}", .path.display(), .source)]
    NoPermission {
        /// The denied path
        path: PathBuf,
        /// The underlying OS error
        source: io::Error,
    },

    /// An open destination rejected or only partially completed a write.
    #[error("write to log destination '{target}' failed: {source}")]
    WriteFailure {
        /// Identifier of the destination ("stdout", "stderr", or a file path)
        target: String,
        /// The underlying OS error
        source: io::Error,
    },
}

impl WriterError {
    /// Classify an open-time OS error into `InvalidPath` or `NoPermission`.
    ///
    /// Classification goes through the reported [`io::ErrorKind`] only, never
    /// through inspection of the path string, so the same path may classify
    /// differently across platforms. Opening `"."` for append is `EISDIR` on
    /// Unix (`InvalidPath`) but an access-denied error on Windows
    /// (`NoPermission`); per platform the result is deterministic.
    pub(crate) fn from_open_error(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
                WriterError::NoPermission { path, source }
            }
            // NotFound (missing parent), IsADirectory, NotADirectory,
            // InvalidInput and anything else the OS reports for an unusable
            // path all mean the path cannot denote a writable file.
            _ => WriterError::InvalidPath { path, source },
        }
    }

    /// Wrap a stream error from a failed or short write.
    pub(crate) fn from_write_error(target: &str, source: io::Error) -> Self {
        WriterError::WriteFailure {
            target: target.to_string(),
            source,
        }
    }
}

/// Errors produced while resolving sink configuration into writers.
///
/// These belong to the configuration surface, not to the writer contract:
/// a `ConfigError` means no writer was constructed for the offending entry.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The sink entry names a kind this crate does not provide.
    #[error("unknown sink kind '{kind}' for sink '{id}'")]
    UnknownKind {
        /// Identifier of the offending sink entry
        id: String,
        /// The unrecognized kind string
        kind: String,
    },

    /// A file sink entry is missing its `path` field.
    #[error("file sink '{id}' requires a 'path' field")]
    MissingPath {
        /// Identifier of the offending sink entry
        id: String,
    },

    /// The manifest text could not be parsed.
    #[error("malformed sink manifest: {0}")]
    Manifest(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Opening a configured destination failed.
    #[error(transparent)]
    Writer(#[from] WriterError),
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
