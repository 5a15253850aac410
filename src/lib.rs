//! # logsink
//!
//! A pluggable log output sink abstraction for CLI and server applications.
//!
//! ## Overview
//!
//! logsink is the bottom layer of a logging stack: a uniform
//! `write`/`cleanup` surface over interchangeable destinations, so the
//! subsystem that formats and filters messages never knows which backend is
//! active.
//!
//! - **File-backed sinks**: create-or-append semantics; pre-existing file
//!   content is never overwritten or truncated, even content written by
//!   earlier, unrelated processes
//! - **Stream passthrough**: wrap stdout/stderr or any caller-managed stream
//!   without taking ownership; cleanup flushes but never closes it
//! - **Three-kind error taxonomy**: `InvalidPath` or `NoPermission` at open
//!   time, `WriteFailure` at write time; nothing is retried or swallowed
//! - **Declarative manifests**: resolve sink declarations from JSON/YAML
//!   config text into writers
//! - **Capture buffer**: a cloneable in-memory stream for tests and
//!   embedders
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use logsink::{FileWriterOptions, LogWriter};
//!
//! fn main() -> Result<(), logsink::WriterError> {
//!     let mut writer = LogWriter::file(FileWriterOptions::new("app.log"))?;
//!     writer.write(b"starting up\n")?;
//!     writer.cleanup();
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `json` - JSON manifest support (enabled by default)
//! - `yaml` - YAML manifest support
//! - `miette` - Pretty error reporting with miette
//!
//! ## Writer contract
//!
//! A writer comes into existence through exactly one factory call (a
//! construction failure never yields a partially-built instance) and goes
//! out of existence through exactly one [`cleanup`](LogWriter::cleanup)
//! call, which consumes it. Writes are synchronous, blocking, and
//! unbuffered by this crate; each [`write`](LogWriter::write) hands the
//! full message to the destination or reports a [`WriterError`]. One
//! instance serves one thread at a time: `write` takes `&mut self`, and a
//! subsystem that shares a writer across threads synchronizes access
//! itself.

// Core modules
pub mod builder;
pub mod config;
pub mod error;
pub mod sink;

// Re-exports for convenience
pub use builder::SinkBuilder;
pub use config::{FileWriterOptions, SinkConfig, SinkManifest};
pub use error::{ConfigError, WriterError};
pub use sink::{LogWriter, SharedBuffer};

/// Resolve every sink declared in a manifest using a default builder.
pub fn build_sinks_from_manifest(manifest: SinkManifest) -> Result<Vec<LogWriter>, ConfigError> {
    SinkBuilder::from_manifest(manifest).build()
}

/// Resolve a manifest, allowing the caller to further customize the
/// SinkBuilder before it is built. This is a natural hook point for layering
/// CLI-style targets on top of a config file.
pub fn build_sinks_from_manifest_with<F>(
    manifest: SinkManifest,
    customize: F,
) -> Result<Vec<LogWriter>, ConfigError>
where
    F: FnOnce(SinkBuilder) -> SinkBuilder,
{
    let builder = SinkBuilder::from_manifest(manifest);
    customize(builder).build()
}

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::SinkDiagnostic;
