use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

const ABC: &str = r#"
variables:
  - name: A
    type: char
  - name: B
    type: char
  - name: C
    type: char
"#;

fn write_doc(dir: &Path) -> PathBuf {
    let path = dir.join("opts.yaml");
    fs::write(&path, ABC).unwrap();
    path
}

fn varopts(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("varopts"));
    cmd.env("XDG_CONFIG_HOME", home);
    cmd
}

fn types(json: &Value) -> Vec<String> {
    json["variables"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["type"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn set_type_on_named_subset() {
    let tmp = tempdir().unwrap();
    let doc = write_doc(tmp.path());

    let out = varopts(tmp.path())
        .args(["set", "--format", "json"])
        .arg(&doc)
        .args(["[A, C]", "Type", "double"])
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let json: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(types(&json), ["double", "char", "double"]);

    // Without --in-place the file is untouched
    assert_eq!(fs::read_to_string(&doc).unwrap(), ABC);
}

#[test]
fn set_without_selection_applies_to_all() {
    let tmp = tempdir().unwrap();
    let doc = write_doc(tmp.path());

    let out = varopts(tmp.path())
        .args(["set", "--format", "json"])
        .arg(&doc)
        .args(["TreatAsMissing", "[NA, '-']"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let json: Value = serde_json::from_slice(&out.stdout).unwrap();
    for v in json["variables"].as_array().unwrap() {
        assert_eq!(v["treat_as_missing"], serde_json::json!(["NA", "-"]));
    }
}

#[test]
fn set_in_place_rewrites_document() {
    let tmp = tempdir().unwrap();
    let doc = write_doc(tmp.path());

    varopts(tmp.path())
        .args(["set", "-i"])
        .arg(&doc)
        .args(["2", "Type", "int8", "FillValue", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated"));

    let text = fs::read_to_string(&doc).unwrap();
    assert!(text.contains("type: int8"));
    assert!(text.contains("fill_value: -1"));
}

#[test]
fn set_uses_configured_output_format() {
    let tmp = tempdir().unwrap();
    let doc = write_doc(tmp.path());
    let cfg_dir = tmp.path().join("varopts");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(cfg_dir.join("config.toml"), "version = 1\n[output]\nformat = \"table\"\n").unwrap();

    varopts(tmp.path())
        .arg("set")
        .arg(&doc)
        .args([":", "FillValue", "?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FillValue"))
        .stdout(predicate::str::contains("Total: 3 variables"));
}

#[test]
fn swapped_symbols_written_in_place_load_again() {
    let tmp = tempdir().unwrap();
    let doc = tmp.path().join("flags.yaml");
    fs::write(&doc, "variables:\n  - name: Flag\n    type: logical\n").unwrap();

    varopts(tmp.path())
        .args(["set", "-i"])
        .arg(&doc)
        .args(["TrueSymbols", "[f]", "FalseSymbols", "[t]"])
        .assert()
        .success();

    let out = varopts(tmp.path())
        .args(["show", "--format", "json"])
        .arg(&doc)
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let json: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["variables"][0]["true_symbols"], serde_json::json!(["f"]));
    assert_eq!(json["variables"][0]["false_symbols"], serde_json::json!(["t"]));
}
