use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_doc(path: &PathBuf) {
    fs::write(
        path,
        r#"{"variables": [
            {"name": "A", "type": "double"},
            {"name": "B", "type": "string"},
            {"name": "C", "type": "logical"}
        ]}"#,
    )
    .unwrap();
}

#[test]
fn rename_by_index() {
    let tmp = tempdir().unwrap();
    let doc = tmp.path().join("opts.json");
    write_doc(&doc);

    let out = Command::new(assert_cmd::cargo::cargo_bin!("varopts"))
        .env("XDG_CONFIG_HOME", tmp.path())
        .args(["rename", "--format", "json"])
        .arg(&doc)
        .args(["[1, 3]", "Alpha", "Gamma"])
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let json: Value = serde_json::from_slice(&out.stdout).unwrap();
    let names: Vec<&str> =
        json["variables"].as_array().unwrap().iter().map(|v| v["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Alpha", "B", "Gamma"]);
}

#[test]
fn rename_rejects_duplicates() {
    let tmp = tempdir().unwrap();
    let doc = tmp.path().join("opts.json");
    write_doc(&doc);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("varopts"));
    cmd.env("XDG_CONFIG_HOME", tmp.path()).arg("rename").arg(&doc).args(["A", "B"]);
    cmd.assert().failure().stderr(predicate::str::contains("duplicate variable name: B"));
}

#[test]
fn rename_count_mismatch() {
    let tmp = tempdir().unwrap();
    let doc = tmp.path().join("opts.json");
    write_doc(&doc);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("varopts"));
    cmd.env("XDG_CONFIG_HOME", tmp.path()).arg("rename").arg(&doc).args([":", "X", "Y"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("3 variables selected but 2 names given"));
}
