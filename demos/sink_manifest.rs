//! Example resolving writers from a JSON sink manifest.
//!
//! Run with: cargo run --example sink_manifest

use logsink::{SinkManifest, build_sinks_from_manifest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_path = std::env::temp_dir().join("logsink-manifest-demo.log");

    let json = format!(
        r#"{{
    "sinks": [
        {{ "id": "console", "kind": "stdout" }},
        {{ "id": "app", "kind": "file", "path": {:?} }}
    ]
}}"#,
        log_path.to_string_lossy()
    );

    let manifest = SinkManifest::from_json_str(&json)?;
    let mut writers = build_sinks_from_manifest(manifest)?;
    println!("resolved {} writer(s)", writers.len());

    for writer in &mut writers {
        writer.write(b"hello from the manifest demo\n")?;
    }
    for writer in writers {
        writer.cleanup();
    }

    println!("file sink: {}", log_path.display());

    Ok(())
}
