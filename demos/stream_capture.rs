//! Example wrapping caller-managed streams: stderr and a capture buffer.
//!
//! Run with: cargo run --example stream_capture

use logsink::{LogWriter, SharedBuffer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Writer over standard error; cleanup flushes but never closes it
    let mut console = LogWriter::stderr();
    console.write(b"visible on stderr\n")?;
    console.cleanup();

    // Capture buffer: clones share storage, so the bytes stay readable
    // after the writer is gone
    let buffer = SharedBuffer::new();
    let mut capture = LogWriter::stream("capture", buffer.clone());
    capture.write(b"first line\n")?;
    capture.write(b"second line\n")?;
    capture.cleanup();

    println!("captured:\n{}", buffer.contents_string());

    Ok(())
}
