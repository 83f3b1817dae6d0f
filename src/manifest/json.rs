//! JSON manifest updates.
//!
//! Both `package.json` and `tauri.conf.json` keep their version in a
//! top-level string field. The document is parsed, the field replaced and
//! the whole document written back with two-space indentation. Key order is
//! preserved; whitespace is normalized.

use crate::error::{BumpError, Result};
use crate::fs::Transaction;
use crate::version::Version;
use serde_json::Value;
use std::fs;
use std::path::Path;

const VERSION_KEY: &str = "version";

/// Updates the top-level `version` of `package.json`.
///
/// Returns the previous version.
///
/// # Errors
///
/// - `Io`: Cannot read the file
/// - `Json`: The file is not valid JSON
/// - `MissingField`: No top-level string `version`
pub fn update_package_json(
    path: &Path,
    new_version: &Version,
    txn: &mut Transaction,
) -> Result<String> {
    update_json_version(path, new_version, txn)
}

/// Updates the top-level `version` of `src-tauri/tauri.conf.json`.
///
/// Same contract as [`update_package_json`].
pub fn update_tauri_config(
    path: &Path,
    new_version: &Version,
    txn: &mut Transaction,
) -> Result<String> {
    update_json_version(path, new_version, txn)
}

fn update_json_version(path: &Path, new_version: &Version, txn: &mut Transaction) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| {
        BumpError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read {}: {}", path.display(), e),
        ))
    })?;

    let mut doc: Value = serde_json::from_str(&content).map_err(|source| BumpError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let old_version = replace_version(&mut doc, new_version).map_err(|reason| {
        BumpError::MissingField {
            path: path.to_path_buf(),
            reason,
        }
    })?;

    // serde_json's pretty printer indents with two spaces
    let mut new_content = serde_json::to_string_pretty(&doc).map_err(|source| BumpError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if content.ends_with('\n') {
        new_content.push('\n');
    }

    log::debug!(
        "{}: version {} → {}",
        path.display(),
        old_version,
        new_version
    );

    txn.update_file(path.to_path_buf(), new_content)?;
    Ok(old_version)
}

/// Swaps the top-level version string, returning the old one.
fn replace_version(doc: &mut Value, new_version: &Version) -> std::result::Result<String, String> {
    let object = doc
        .as_object_mut()
        .ok_or_else(|| "top-level value is not an object".to_string())?;

    let field = object
        .get_mut(VERSION_KEY)
        .ok_or_else(|| format!("missing top-level '{}' field", VERSION_KEY))?;

    let old_version = field
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| format!("'{}' field is not a string", VERSION_KEY))?;

    *field = Value::String(new_version.to_string());
    Ok(old_version)
}
