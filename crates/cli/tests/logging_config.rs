use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_logging_to_file() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let log_file = root.join("varopts.log");
    let doc = root.join("opts.yaml");
    fs::write(&doc, "variables:\n  - name: A\n    type: double\n").unwrap();

    let config_path = root.join("config.toml");
    let config_content = format!(
        r#"
version = 1
[logging]
level = "error"
file_level = "debug"
file = "{}"
"#,
        log_file.display()
    );
    fs::write(&config_path, &config_content).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("varopts"));
    cmd.arg("--config").arg(&config_path).arg("set").arg(&doc).args(["FillValue", "0"]);
    cmd.assert().success();

    assert!(log_file.exists(), "Log file should be created");
    let log = fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("applied option"));
}

#[test]
fn test_logging_level_parsing() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let doc = root.join("opts.yaml");
    fs::write(&doc, "variables: []\n").unwrap();

    let config_path = root.join("config.toml");
    fs::write(&config_path, "version = 1\n[logging]\nlevel = \"trace\"\n").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("varopts"));
    cmd.arg("--config").arg(&config_path).arg("show").arg(&doc).assert().success();
}
