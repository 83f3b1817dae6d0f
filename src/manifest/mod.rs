//! Version field rewrites for the project's metadata files.
//!
//! This module is split by file format:
//!
//! - **`json`**: `package.json` and `src-tauri/tauri.conf.json`
//! - **`cargo`**: the `[package]` section of `src-tauri/Cargo.toml`
//!
//! Every function reads its file, computes the new content in memory and
//! stages it on a [`Transaction`](crate::fs::Transaction). Nothing is written
//! until the transaction is committed, so a file whose version cannot be
//! located is never touched.

pub mod cargo;
pub mod json;

pub use cargo::update_cargo_manifest;
pub use json::{update_package_json, update_tauri_config};
