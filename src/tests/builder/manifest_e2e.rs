#![cfg(feature = "json")]

use std::fs;

use crate::{SinkManifest, build_sinks_from_manifest};

#[test]
fn manifest_e2e_json_to_file_and_console() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log_path = dir.path().join("app.log");

    let json = format!(
        r#"{{
    "sinks": [
        {{ "id": "app", "kind": "file", "path": {:?} }},
        {{ "id": "console", "kind": "stdout" }}
    ]
}}"#,
        log_path.to_string_lossy()
    );

    let manifest = SinkManifest::from_json_str(&json).expect("parse manifest json");
    let mut writers = build_sinks_from_manifest(manifest).expect("build writers");
    assert_eq!(writers.len(), 2);

    for writer in &mut writers {
        writer.write(b"line one\n").expect("write");
    }
    for writer in writers {
        writer.cleanup();
    }

    assert_eq!(fs::read_to_string(&log_path).expect("read log file"), "line one\n");
}

#[test]
fn manifest_e2e_append_preserves_existing_content() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log_path = dir.path().join("existing.log");
    fs::write(&log_path, "Some existing text\n").expect("seed log file");

    let json = format!(
        r#"{{ "sinks": [ {{ "id": "app", "kind": "file", "path": {:?} }} ] }}"#,
        log_path.to_string_lossy()
    );

    let manifest = SinkManifest::from_json_str(&json).expect("parse manifest json");
    let mut writers = build_sinks_from_manifest(manifest).expect("build writers");

    writers[0].write(b"A few\nlog lines.\n").expect("write");
    for writer in writers {
        writer.cleanup();
    }

    assert_eq!(
        fs::read_to_string(&log_path).expect("read log file"),
        "Some existing text\nA few\nlog lines.\n"
    );
}

#[test]
fn manifest_e2e_unknown_kind_fails_fast() {
    let json = r#"{ "sinks": [ { "id": "net", "kind": "http" } ] }"#;

    let manifest = SinkManifest::from_json_str(json).expect("parse manifest json");
    let err = build_sinks_from_manifest(manifest).expect_err("expected unknown kind");
    assert!(err.to_string().contains("http"));
}
