//! CLI integration tests
//!
//! Drive the binary end to end with assert_cmd: exit codes, output formats,
//! and configuration errors.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixtures_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/go")
}

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("unusedresult").unwrap();
    cmd.arg("--quiet");
    cmd
}

#[test]
fn test_findings_exit_code_and_output() {
    cmd()
        .arg(fixtures_path())
        .arg("--format")
        .arg("compact")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("result of fmt.Sprintf call not used"))
        .stdout(predicate::str::contains("result of (Pizza).String call not used"))
        .stdout(predicate::str::contains("result of errors.New call not used"))
        .stdout(predicate::str::contains("kitchen.go:14:13"));
}

#[test]
fn test_clean_project_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("main.go"),
        "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(\"ok\")\n}\n",
    )
    .unwrap();

    cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No unused results found!"));
}

#[test]
fn test_empty_directory_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    cmd().arg(dir.path()).assert().success();
}

#[test]
fn test_malformed_list_is_a_usage_error() {
    cmd()
        .arg(fixtures_path())
        .arg("--unused-funcs")
        .arg("fmt.Sprintf,,errors.New")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("empty entry"));
}

#[test]
fn test_custom_lists_override_defaults() {
    // Only sort.Reverse configured: nothing in the fixtures calls it, so
    // the default findings disappear.
    cmd()
        .arg(fixtures_path())
        .arg("--unused-funcs")
        .arg("sort.Reverse")
        .arg("--unused-string-methods")
        .arg("GoString")
        .assert()
        .success();
}

#[test]
fn test_json_format() {
    cmd()
        .arg(fixtures_path())
        .arg("--format")
        .arg("json")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"tool\": \"unusedresult\""))
        .stdout(predicate::str::contains("\"rule\": \"UR001\""));
}

#[test]
fn test_config_file_is_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("main.go"),
        "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Sprintf(\"x\")\n}\n",
    )
    .unwrap();
    // Project file empties both lists, so the bare Sprintf is not reported.
    std::fs::write(
        dir.path().join(".unusedresult.toml"),
        "funcs = \"\"\nstring_methods = \"\"\n",
    )
    .unwrap();

    cmd().arg(dir.path()).assert().success();
}

#[test]
fn test_explicit_flag_beats_project_config_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("main.go"),
        "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Sprintf(\"x\")\n}\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join(".unusedresult.toml"),
        "funcs = \"\"\nstring_methods = \"\"\n",
    )
    .unwrap();

    // A flag given on the command line wins over the project file, even
    // when its value happens to spell out the built-in default list.
    cmd()
        .arg(dir.path())
        .arg("--unused-funcs")
        .arg("errors.New,fmt.Errorf,fmt.Sprintf,fmt.Sprint,sort.Reverse")
        .arg("--format")
        .arg("compact")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("result of fmt.Sprintf call not used"));
}
