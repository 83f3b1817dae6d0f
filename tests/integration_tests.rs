//! Integration tests for bump-version
//!
//! These tests build a throwaway Tauri project tree and drive the binary
//! through its command-line interface.

mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::*;
use predicates::prelude::*;

#[test]
fn test_bumps_all_three_files() {
    let temp = create_tauri_project();
    let root = temp.path();

    run_bump(root, &["2.0.6"])
        .success()
        .stdout(predicate::str::contains(
            "Updated package.json: 1.0.0 -> 2.0.6\n\
             Updated src-tauri/Cargo.toml: 1.0.0 -> 2.0.6\n\
             Updated src-tauri/tauri.conf.json: 1.0.0 -> 2.0.6\n\n",
        ))
        .stdout(predicate::str::contains("All files updated successfully!"));

    assert_eq!(json_version(root, "package.json"), "2.0.6");
    assert_eq!(json_version(root, "src-tauri/tauri.conf.json"), "2.0.6");
    assert_eq!(
        read(root, "src-tauri/Cargo.toml"),
        CARGO_TOML.replacen("version = \"1.0.0\"", "version = \"2.0.6\"", 1)
    );
}

#[test]
fn test_json_files_keep_other_fields_and_order() {
    let temp = create_tauri_project();
    let root = temp.path();

    run_bump(root, &["1.1.0-beta.2"]).success();

    assert_eq!(
        read(root, "package.json"),
        PACKAGE_JSON.replace("\"version\": \"1.0.0\"", "\"version\": \"1.1.0-beta.2\"")
    );
    assert_eq!(
        read(root, "src-tauri/tauri.conf.json"),
        TAURI_CONF.replace("\"version\": \"1.0.0\"", "\"version\": \"1.1.0-beta.2\"")
    );
}

#[test]
fn test_defaults_to_current_directory() {
    let temp = create_tauri_project();
    let root = temp.path();

    let mut cmd = cargo_bin_cmd!("bump-version");
    cmd.arg("3.0.0")
        .current_dir(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated package.json: 1.0.0 -> 3.0.0"));

    assert_eq!(json_version(root, "package.json"), "3.0.0");
}

#[test]
fn test_invalid_version_is_rejected() {
    let temp = create_tauri_project();
    let root = temp.path();

    for bad in ["v1.2.3", "1.2", "1.2.3.4", "1.2.3-"] {
        run_bump(root, &[bad])
            .code(1)
            .stderr(predicate::str::contains(format!(
                "Invalid version format '{}'",
                bad
            )))
            .stderr(predicate::str::contains("'1.2.3' or '1.2.3-beta.1'"));
    }

    assert_eq!(read(root, "package.json"), PACKAGE_JSON);
    assert_eq!(read(root, "src-tauri/Cargo.toml"), CARGO_TOML);
    assert_eq!(read(root, "src-tauri/tauri.conf.json"), TAURI_CONF);
}

#[test]
fn test_two_arguments_print_usage() {
    let temp = create_tauri_project();
    let root = temp.path();

    run_bump(root, &["1.0.0", "2.0.0"])
        .code(1)
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("Example: bump-version 2.0.6"));

    assert_eq!(read(root, "package.json"), PACKAGE_JSON);
    assert_eq!(read(root, "src-tauri/Cargo.toml"), CARGO_TOML);
    assert_eq!(read(root, "src-tauri/tauri.conf.json"), TAURI_CONF);
}

#[test]
fn test_no_arguments_print_usage() {
    let temp = create_tauri_project();

    let mut cmd = cargo_bin_cmd!("bump-version");
    cmd.current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("Example: bump-version 2.0.6"));

    assert_eq!(read(temp.path(), "package.json"), PACKAGE_JSON);
}

#[test]
fn test_help_exits_successfully() {
    let mut cmd = cargo_bin_cmd!("bump-version");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--atomic"))
        .stdout(predicate::str::contains("Example: bump-version 2.0.6"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = create_tauri_project();
    let root = temp.path();

    run_bump(root, &["4.0.0", "--dry-run"])
        .success()
        .stdout(predicate::str::contains(
            "Would update src-tauri/Cargo.toml: 1.0.0 -> 4.0.0",
        ))
        .stdout(predicate::str::contains("no files were modified"));

    assert_eq!(read(root, "package.json"), PACKAGE_JSON);
    assert_eq!(read(root, "src-tauri/Cargo.toml"), CARGO_TOML);
    assert_eq!(read(root, "src-tauri/tauri.conf.json"), TAURI_CONF);
}

#[test]
fn test_round_trip() {
    let temp = create_tauri_project();
    let root = temp.path();

    run_bump(root, &["5.0.0"]).success();
    run_bump(root, &["1.0.0"])
        .success()
        .stdout(predicate::str::contains(
            "Updated src-tauri/tauri.conf.json: 5.0.0 -> 1.0.0",
        ));

    assert_eq!(read(root, "package.json"), PACKAGE_JSON);
    assert_eq!(read(root, "src-tauri/Cargo.toml"), CARGO_TOML);
    assert_eq!(read(root, "src-tauri/tauri.conf.json"), TAURI_CONF);
}

#[test]
fn test_same_version_is_idempotent() {
    let temp = create_tauri_project();
    let root = temp.path();

    run_bump(root, &["1.0.0"])
        .success()
        .stdout(predicate::str::contains("Updated package.json: 1.0.0 -> 1.0.0"));

    assert_eq!(read(root, "package.json"), PACKAGE_JSON);
    assert_eq!(read(root, "src-tauri/Cargo.toml"), CARGO_TOML);
}
