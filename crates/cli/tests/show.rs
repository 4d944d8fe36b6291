use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn show_prints_table_by_default() {
    let tmp = tempdir().unwrap();
    let doc = tmp.path().join("opts.toml");
    fs::write(
        &doc,
        r#"
[[variables]]
name = "Station"
type = "categorical"
categories = ["north", "south"]

[[variables]]
name = "Temp"
type = "single"
fill_value = -99
"#,
    )
    .unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("varopts"));
    cmd.env("XDG_CONFIG_HOME", tmp.path()).arg("show").arg(&doc);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Station"))
        .stdout(predicate::str::contains("categorical"))
        .stdout(predicate::str::contains("-99"))
        .stdout(predicate::str::contains("Total: 2 variables"));
}

#[test]
fn show_empty_document() {
    let tmp = tempdir().unwrap();
    let doc = tmp.path().join("opts.yaml");
    fs::write(&doc, "variables: []\n").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("varopts"));
    cmd.env("XDG_CONFIG_HOME", tmp.path()).arg("show").arg(&doc);
    cmd.assert().success().stdout(predicate::str::contains("(no variables)"));
}
