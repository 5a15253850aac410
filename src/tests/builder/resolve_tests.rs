//! Tests for target and sink resolution.

use std::fs;

use crate::{
    ConfigError, SinkBuilder, SinkConfig, SinkManifest, build_sinks_from_manifest_with,
};

#[test]
fn default_builder_builds_no_writers() {
    let writers = SinkBuilder::default().build().unwrap();
    assert!(writers.is_empty());
}

#[test]
fn dash_and_stdout_resolve_to_standard_output() {
    let writers = SinkBuilder::new()
        .add_target("-")
        .add_target("stdout")
        .build()
        .unwrap();

    assert_eq!(writers.len(), 2);
    assert_eq!(writers[0].target(), "stdout");
    assert_eq!(writers[1].target(), "stdout");
}

#[test]
fn stderr_resolves_to_standard_error() {
    let writers = SinkBuilder::new().add_target("stderr").build().unwrap();
    assert_eq!(writers[0].target(), "stderr");
}

#[test]
fn other_targets_resolve_to_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cli.log");

    let mut writers = SinkBuilder::new()
        .add_target(path.to_string_lossy().into_owned())
        .build()
        .unwrap();

    writers[0].write(b"via builder\n").unwrap();
    for writer in writers {
        writer.cleanup();
    }

    assert_eq!(fs::read_to_string(&path).unwrap(), "via builder\n");
}

#[test]
fn targets_from_args_replaces_earlier_targets() {
    let args = vec!["stderr".to_string()];
    let writers = SinkBuilder::new()
        .add_target("stdout")
        .targets_from_args(&args)
        .build()
        .unwrap();

    assert_eq!(writers.len(), 1);
    assert_eq!(writers[0].target(), "stderr");
}

#[test]
fn build_preserves_declaration_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ordered.log");

    let writers = SinkBuilder::new()
        .add_sink(SinkConfig::stdout("console"))
        .add_sink(SinkConfig::file("app", path.to_string_lossy()))
        .add_sink(SinkConfig::stderr("errors"))
        .build()
        .unwrap();

    assert_eq!(writers[0].target(), "stdout");
    assert_eq!(writers[1].target(), path.to_string_lossy());
    assert_eq!(writers[2].target(), "stderr");
}

#[test]
fn unknown_sink_kind_fails_the_build() {
    let result = SinkBuilder::new()
        .add_sink(SinkConfig {
            id: "net".into(),
            kind: "syslog".into(),
            path: None,
        })
        .build();

    match result.unwrap_err() {
        ConfigError::UnknownKind { id, kind } => {
            assert_eq!(id, "net");
            assert_eq!(kind, "syslog");
        }
        other => panic!("expected UnknownKind, got {other:?}"),
    }
}

#[test]
fn file_sink_without_path_fails_the_build() {
    let result = SinkBuilder::new()
        .add_sink(SinkConfig {
            id: "app".into(),
            kind: "file".into(),
            path: None,
        })
        .build();

    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::MissingPath { .. }));
    assert!(err.to_string().contains("app"));
}

#[test]
fn manifest_customization_layers_targets_before_sinks() {
    let manifest = SinkManifest::new().add_sink(SinkConfig::stdout("console"));

    let writers = build_sinks_from_manifest_with(manifest, |b| b.add_target("stderr")).unwrap();

    assert_eq!(writers.len(), 2);
    assert_eq!(writers[0].target(), "stderr");
    assert_eq!(writers[1].target(), "stdout");
}

#[test]
fn unopenable_file_sink_surfaces_the_writer_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("app.log");

    let result = SinkBuilder::new()
        .add_sink(SinkConfig::file("app", path.to_string_lossy()))
        .build();

    assert!(matches!(result.unwrap_err(), ConfigError::Writer(_)));
}
