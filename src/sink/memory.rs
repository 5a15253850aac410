//! In-memory capture stream for tests and embedders.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// A cloneable in-memory stream.
///
/// Clones share one underlying buffer. Pass a clone to
/// [`LogWriter::stream`](crate::LogWriter::stream) and keep the original:
/// the writer never closes a passthrough stream, so the captured bytes stay
/// readable after [`cleanup`](crate::LogWriter::cleanup).
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the captured bytes.
    pub fn contents(&self) -> Vec<u8> {
        self.buf.lock().unwrap().clone()
    }

    /// Get the captured bytes as a string.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Clear the buffer.
    pub fn clear(&self) {
        self.buf.lock().unwrap().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut guard = self.buf.lock().unwrap();
        guard.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
