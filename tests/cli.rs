//! Integration tests for top-level CLI behavior.

use std::path::{Path, PathBuf};
use std::process::Command;

fn run_confgen(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_confgen");
    Command::new(bin).args(args).output().expect("failed to run confgen binary")
}

/// Creates a fresh scratch directory seeded with the standard fixtures.
fn setup_workspace(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("confgen_cli_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    std::fs::write(
        dir.join("model.yaml"),
        "\
classes:
  - name: Hub
    isRoot: true
    documentation: Central unit
    attributes:
      - name: id
        type: uint32
  - name: Device
    attributes:
      - name: serial
        type: string
aggregations:
  - source: Device
    target: Hub
    sourceMultiplicity: 1..16
    targetMultiplicity: \"1\"
",
    )
    .unwrap();
    std::fs::write(dir.join("config.json"), r#"{"a": 1, "b": 2}"#).unwrap();
    std::fs::write(dir.join("patched_config.json"), r#"{"b": 3, "c": 4}"#).unwrap();

    dir
}

fn path_arg(dir: &Path, name: &str) -> String {
    dir.join(name).to_str().unwrap().to_string()
}

#[test]
fn generate_writes_tree_and_metadata() {
    let dir = setup_workspace("generate");
    let out = path_arg(&dir, "out");

    let output =
        run_confgen(&["generate", "--model", &path_arg(&dir, "model.yaml"), "--out", &out]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Schema generated: 2 classes"));

    let tree = std::fs::read_to_string(dir.join("out/config.xml")).unwrap();
    assert!(tree.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(tree.contains("<Hub>"));
    assert!(tree.contains("    <serial>string</serial>"));

    let meta: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.join("out/meta.json")).unwrap()).unwrap();
    assert_eq!(meta.as_array().unwrap().len(), 2);
    assert_eq!(meta[1]["class"], "Device");
    assert_eq!(meta[1]["min"], "1");
    assert_eq!(meta[1]["max"], "16");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn delta_then_patch_round_trips() {
    let dir = setup_workspace("round_trip");
    let out = path_arg(&dir, "out");

    let output = run_confgen(&[
        "delta",
        "--base",
        &path_arg(&dir, "config.json"),
        "--patched",
        &path_arg(&dir, "patched_config.json"),
        "--out",
        &out,
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("1 additions, 1 deletions, 1 updates"));

    let output = run_confgen(&[
        "patch",
        "--base",
        &path_arg(&dir, "config.json"),
        "--delta",
        &path_arg(&dir, "out/delta.json"),
        "--out",
        &out,
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let result: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.join("out/res_patched_config.json")).unwrap(),
    )
    .unwrap();
    let expected: serde_json::Value = serde_json::from_str(r#"{"b": 3, "c": 4}"#).unwrap();
    assert_eq!(result, expected);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn all_produces_every_artifact() {
    let dir = setup_workspace("all");
    let out = path_arg(&dir, "out");

    let output = run_confgen(&[
        "all",
        "--model",
        &path_arg(&dir, "model.yaml"),
        "--base",
        &path_arg(&dir, "config.json"),
        "--patched",
        &path_arg(&dir, "patched_config.json"),
        "--out",
        &out,
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    for artifact in ["config.xml", "meta.json", "delta.json", "res_patched_config.json"] {
        assert!(dir.join("out").join(artifact).exists(), "missing artifact {artifact}");
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn generate_fails_on_rootless_model() {
    let dir = setup_workspace("rootless");
    std::fs::write(dir.join("model.yaml"), "classes:\n  - name: Loose\n").unwrap();

    let output = run_confgen(&[
        "generate",
        "--model",
        &path_arg(&dir, "model.yaml"),
        "--out",
        &path_arg(&dir, "out"),
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("marked as root"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_input_file_exits_with_error() {
    let output = run_confgen(&["generate", "--model", "/nonexistent/model.yaml"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("/nonexistent/model.yaml"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_confgen(&["nonsense"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unrecognized subcommand"));
}
