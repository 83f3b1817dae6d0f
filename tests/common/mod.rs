use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const PACKAGE_JSON: &str = r#"{
  "name": "desktop-app",
  "private": true,
  "version": "1.0.0",
  "type": "module",
  "scripts": {
    "dev": "vite",
    "tauri": "tauri"
  }
}
"#;

pub const CARGO_TOML: &str = r#"[package]
name = "desktop-app"
version = "1.0.0"
description = "A Tauri App"
edition = "2021"

# The `_lib` suffix may seem redundant but it is necessary
[lib]
name = "desktop_app_lib"
crate-type = ["staticlib", "cdylib", "rlib"]

[build-dependencies]
tauri-build = { version = "2", features = [] }

[dependencies]
tauri = { version = "2", features = [] }
serde = { version = "1", features = ["derive"] }
"#;

pub const TAURI_CONF: &str = r#"{
  "$schema": "https://schema.tauri.app/config/2",
  "productName": "desktop-app",
  "version": "1.0.0",
  "identifier": "com.example.desktop-app",
  "build": {
    "frontendDist": "../dist"
  }
}
"#;

/// Helper to create a Tauri project tree with all three versioned files
#[allow(unused)]
pub fn create_tauri_project() -> TempDir {
    let temp = TempDir::new().unwrap();

    fs::write(temp.path().join("package.json"), PACKAGE_JSON).unwrap();

    let src_tauri = temp.path().join("src-tauri");
    fs::create_dir(&src_tauri).unwrap();
    fs::write(src_tauri.join("Cargo.toml"), CARGO_TOML).unwrap();
    fs::write(src_tauri.join("tauri.conf.json"), TAURI_CONF).unwrap();

    temp
}

#[allow(unused)]
pub fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative)).unwrap()
}

/// Top-level `version` of a JSON file
#[allow(unused)]
pub fn json_version(root: &Path, relative: &str) -> String {
    let doc: serde_json::Value = serde_json::from_str(&read(root, relative)).unwrap();
    doc["version"].as_str().unwrap().to_string()
}

/// Helper to run a bump against `project_root`
pub fn run_bump(project_root: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("bump-version");
    cmd.args(args).arg("--root").arg(project_root);

    cmd.assert()
}
