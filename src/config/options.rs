//! Options for the file-backed writer factory.

use std::path::PathBuf;

/// Options accepted by [`LogWriter::file`](crate::LogWriter::file).
///
/// The file is always opened in create-or-append mode; the only thing the
/// caller configures is where it lives.
#[derive(Debug, Clone)]
pub struct FileWriterOptions {
    /// Path of the log file to open.
    pub filename: PathBuf,
}

impl FileWriterOptions {
    /// Create options for the given path.
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
        }
    }
}
