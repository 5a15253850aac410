//! Configuration types for log sink construction.
//!
//! This module provides:
//! - `FileWriterOptions`: Options for the file-backed writer factory
//! - `SinkConfig`: Declarative configuration for a single sink
//! - `SinkManifest`: A manifest of sinks, loadable from JSON/YAML text

mod manifest;
mod options;

pub use manifest::{SinkConfig, SinkManifest};
pub use options::FileWriterOptions;
