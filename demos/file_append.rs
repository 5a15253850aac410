//! Basic example demonstrating the file-backed writer.
//!
//! Run with: cargo run --example file_append

use logsink::{FileWriterOptions, LogWriter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::temp_dir().join("logsink-demo.log");

    // Open in create-or-append mode; content from earlier runs is preserved
    let mut writer = LogWriter::file(FileWriterOptions::new(path.clone()))?;

    writer.write(b"demo run started\n")?;
    writer.write(b"demo run finished\n")?;
    writer.cleanup();

    let contents = std::fs::read_to_string(&path)?;
    println!("{} now contains:", path.display());
    print!("{contents}");

    Ok(())
}
