#!/usr/bin/env rust
//! Integration tests for the fns CLI
//!
//! Each test works on a private copy of the `shapes` fixture package and
//! runs the binary from the copy's parent directory, so printed paths are
//! stable (`./shapes/widget.go`).

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Test helper to get the CLI binary
fn fns_cmd() -> Command {
    Command::cargo_bin("fns").unwrap()
}

fn shapes_package() -> TempDir {
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/shapes");
    let temp_dir = tempdir().unwrap();
    let package = temp_dir.path().join("shapes");
    fs::create_dir(&package).unwrap();
    for name in ["circle.go", "widget.go"] {
        fs::copy(fixtures.join(name), package.join(name)).unwrap();
    }
    temp_dir
}

fn package_file(temp_dir: &TempDir, name: &str) -> PathBuf {
    temp_dir.path().join("shapes").join(name)
}

const EXPECTED_REPORT: &str = "\
./shapes/circle.go:4 Incorrect fn tag \"shapes.square.Area\". Should be \"shapes.circle.Area\"
./shapes/widget.go:29 Incorrect fn tag \"wrong\". Should be \"shapes.widget.*Widget-Broken\"
./shapes/widget.go:34 Incorrect fn tag \"shapes.widget.ttt\". Should be \"shapes.widget.Widget-AlsoBroken\"
";

#[test]
fn test_cli_help() {
    fns_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rewrite the files with correct fn tags"));
}

#[test]
fn test_cli_version() {
    fns_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_requires_path() {
    fns_cmd().assert().failure().code(2);
}

#[test]
fn test_cli_reports_directory() {
    let temp_dir = shapes_package();
    let before = fs::read_to_string(package_file(&temp_dir, "widget.go")).unwrap();

    fns_cmd()
        .current_dir(temp_dir.path())
        .arg("shapes")
        .assert()
        .success()
        .stdout(EXPECTED_REPORT);

    assert_eq!(
        fs::read_to_string(package_file(&temp_dir, "widget.go")).unwrap(),
        before
    );
}

#[test]
fn test_cli_reports_single_file() {
    let temp_dir = shapes_package();

    fns_cmd()
        .current_dir(temp_dir.path())
        .arg("./shapes/../shapes/widget.go")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "./shapes/widget.go:29 Incorrect fn tag \"wrong\"",
        ))
        .stdout(predicate::str::contains("circle.go").not());
}

#[test]
fn test_cli_write_then_clean() {
    let temp_dir = shapes_package();

    fns_cmd()
        .current_dir(temp_dir.path())
        .args(["-w", "shapes"])
        .assert()
        .success()
        .stdout(EXPECTED_REPORT);

    let widget = fs::read_to_string(package_file(&temp_dir, "widget.go")).unwrap();
    assert!(widget.contains("fn := \"shapes.widget.*Widget-Broken\""));
    assert!(widget.contains("fn := \"shapes.widget.*Widget-Render\""));
    assert!(!package_file(&temp_dir, "widget.go.new").exists());
    assert!(!package_file(&temp_dir, "widget.go.old").exists());

    fns_cmd()
        .current_dir(temp_dir.path())
        .args(["--write", "shapes"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        fs::read_to_string(package_file(&temp_dir, "widget.go")).unwrap(),
        widget
    );
}

#[test]
fn test_cli_missing_path_fails() {
    let temp_dir = tempdir().unwrap();

    fns_cmd()
        .current_dir(temp_dir.path())
        .arg("does-not-exist")
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Failed to stat file or dir"));
}

#[test]
fn test_cli_unparsable_source_fails() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("bad.go"), "package bad\n\nfunc (\n").unwrap();

    fns_cmd()
        .current_dir(temp_dir.path())
        .arg("bad.go")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Parse error in go"));
}

#[test]
fn test_cli_unsupported_receiver_fails_without_output() {
    let temp_dir = tempdir().unwrap();
    let source = "package p\n\ntype T struct{}\n\nfunc F() {\n\tfn := \"bad\"\n\t_ = fn\n}\n\nfunc (a, b *T) Both() {\n\tfn := \"p.pair.Both\"\n\t_ = fn\n}\n";
    fs::write(temp_dir.path().join("pair.go"), source).unwrap();

    fns_cmd()
        .current_dir(temp_dir.path())
        .args(["-w", "pair.go"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Unsupported receiver on Both"));

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("pair.go")).unwrap(),
        source
    );
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    let temp_dir = shapes_package();

    fns_cmd()
        .current_dir(temp_dir.path())
        .args(["-v", "shapes"])
        .assert()
        .success()
        .stdout(EXPECTED_REPORT)
        .stderr(predicate::str::contains("fn tag check complete"));
}
