//! The polymorphic log writer.

use std::io::Write;

use crate::config::FileWriterOptions;
use crate::error::WriterError;

use super::handle::DestinationHandle;

/// A write-only handle to a single log destination.
///
/// A `LogWriter` comes in two variants, selected at construction time:
///
/// - **file-backed** ([`LogWriter::file`]): opens a path in create-or-append
///   mode and owns the resulting file handle. New writes always land after
///   pre-existing content, including content written by earlier, unrelated
///   processes; nothing is ever truncated.
/// - **stream-passthrough** ([`LogWriter::stream`], [`LogWriter::stdout`],
///   [`LogWriter::stderr`]): wraps a stream the caller already manages. The
///   writer never closes it; [`cleanup`](LogWriter::cleanup) only flushes.
///
/// Callers drive the same `write`/`cleanup` surface regardless of variant.
/// Writes are synchronous and blocking, and `write` takes `&mut self`:
/// sharing one instance across threads requires external synchronization
/// (`Mutex<LogWriter>`, or one writer per thread). `LogWriter` is `Send`.
///
/// Dropping a writer releases its destination the same way `cleanup` does,
/// so early returns and panics cannot leak a file handle.
#[derive(Debug)]
pub struct LogWriter {
    target: String,
    handle: DestinationHandle,
}

impl LogWriter {
    /// Open a file-backed writer.
    ///
    /// The file is created if absent; existing content is preserved and all
    /// writes are appended after it. Open failures classify into
    /// [`WriterError::InvalidPath`] (the path cannot denote a writable file)
    /// or [`WriterError::NoPermission`] (access denied). The split is
    /// deterministic per platform but not identical across platforms for the
    /// same path string.
    pub fn file(options: FileWriterOptions) -> Result<Self, WriterError> {
        let handle = DestinationHandle::open_append(&options.filename)?;
        Ok(Self {
            target: options.filename.to_string_lossy().into_owned(),
            handle,
        })
    }

    /// Wrap a caller-managed stream. Cannot fail.
    ///
    /// The writer takes the stream *value* but never the underlying
    /// destination: pass a non-owning handle (`std::io::stdout()`, a
    /// [`SharedBuffer`](crate::SharedBuffer) clone, or similar), not an
    /// object whose drop would close the stream. `target` identifies the
    /// destination in error values.
    pub fn stream(target: impl Into<String>, stream: impl Write + Send + 'static) -> Self {
        Self {
            target: target.into(),
            handle: DestinationHandle::stream(Box::new(stream)),
        }
    }

    /// Passthrough writer for standard output.
    pub fn stdout() -> Self {
        Self::stream("stdout", std::io::stdout())
    }

    /// Passthrough writer for standard error.
    pub fn stderr() -> Self {
        Self::stream("stderr", std::io::stderr())
    }

    /// Identifier of the destination: the file path, `"stdout"`, `"stderr"`,
    /// or whatever id the caller passed to [`LogWriter::stream`].
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Append the full byte content of `message` to the destination.
    ///
    /// Success means every byte was handed to the underlying stream; the
    /// destination grows by exactly `message.len()` bytes. A stream error or
    /// short write surfaces as [`WriterError::WriteFailure`]; nothing is
    /// retried, and bytes transferred before the failure stay where they
    /// landed. A failed write does not invalidate the writer; the caller may
    /// keep writing or clean up.
    pub fn write(&mut self, message: &[u8]) -> Result<(), WriterError> {
        self.handle
            .write_all(message)
            .map_err(|e| WriterError::from_write_error(&self.target, e))
    }

    /// Release the destination.
    ///
    /// For the file variant this closes the owned handle (normal close
    /// semantics flush OS buffering); for the stream variant it flushes the
    /// wrapped stream and leaves it open for the caller. Consuming `self`
    /// makes double-cleanup and post-cleanup writes compile errors.
    pub fn cleanup(self) {
        // Variant-specific release runs in DestinationHandle::drop.
    }
}
