//! Destination handle: ownership and lifecycle of the underlying OS stream.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::error::WriterError;

/// The OS-level stream a writer ultimately writes bytes to.
///
/// The variant is the ownership tag. A `File` belongs to exactly one writer
/// and is closed when the handle is released; a `Stream` is a view of a
/// stream the caller manages and is flushed but never closed.
pub(crate) enum DestinationHandle {
    /// Owned file stream, opened in create-or-append mode.
    File(File),
    /// Caller-managed stream (stdout, stderr, a `SharedBuffer` clone, ...).
    Stream(Box<dyn Write + Send>),
}

impl DestinationHandle {
    /// Open `path` for appending, creating the file if it does not exist.
    ///
    /// Existing content is never truncated; the OS positions every write at
    /// the current end of file.
    pub(crate) fn open_append(path: &Path) -> Result<Self, WriterError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| WriterError::from_open_error(path, e))?;
        Ok(DestinationHandle::File(file))
    }

    /// Wrap a caller-managed stream without taking ownership of the
    /// underlying destination.
    pub(crate) fn stream(stream: Box<dyn Write + Send>) -> Self {
        DestinationHandle::Stream(stream)
    }
}

impl Write for DestinationHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            DestinationHandle::File(f) => f.write(buf),
            DestinationHandle::Stream(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            DestinationHandle::File(f) => f.flush(),
            DestinationHandle::Stream(w) => w.flush(),
        }
    }
}

impl Drop for DestinationHandle {
    fn drop(&mut self) {
        match self {
            // Dropping the File closes it; normal close semantics flush any
            // OS-level buffering.
            DestinationHandle::File(_) => {}
            // Push out anything the stream object buffers, leave the
            // destination open. Close-time failures are not actionable.
            DestinationHandle::Stream(w) => {
                let _ = w.flush();
            }
        }
    }
}

impl std::fmt::Debug for DestinationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DestinationHandle::File(file) => f.debug_tuple("File").field(file).finish(),
            DestinationHandle::Stream(_) => f.debug_tuple("Stream").finish(),
        }
    }
}
