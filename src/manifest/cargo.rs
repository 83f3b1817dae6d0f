//! Package manifest (`Cargo.toml`) updates.
//!
//! The manifest is edited line by line rather than through a TOML
//! serializer, so comments, spacing and every line other than the version
//! assignment come through untouched.

use crate::error::{BumpError, Result};
use crate::fs::Transaction;
use crate::version::Version;
use std::fs;
use std::path::Path;
use toml_edit::DocumentMut;

const PACKAGE_HEADER: &str = "[package]";
const VERSION_PREFIX: &str = "version = ";

/// Result of locating and replacing the package version in manifest text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEdit {
    /// Version found on the replaced line.
    pub old_version: String,
    /// Full manifest text with the replacement applied.
    pub content: String,
}

/// Updates the package version in a `Cargo.toml`.
///
/// This modifies the first `version = ` line of the `[package]` section:
/// ```toml
/// [package]
/// name = "app"
/// version = "2.0.0"  # ← Updated
///
/// [dependencies]
/// version = "9.9.9"  # untouched
/// ```
///
/// Returns the previous version.
///
/// # Errors
///
/// - `Io`: Cannot read manifest file
/// - `SectionNotFound`: No `[package]` section, or no version line in it
///
/// # Examples
///
/// ```no_run
/// # use bump_version::manifest::cargo::update_cargo_manifest;
/// # use bump_version::fs::Transaction;
/// # use bump_version::version::Version;
/// # use std::path::Path;
/// # fn example() -> bump_version::error::Result<()> {
/// let mut txn = Transaction::new(false);
/// let old = update_cargo_manifest(
///     Path::new("src-tauri/Cargo.toml"),
///     &Version::parse("2.0.0")?,
///     &mut txn,
/// )?;
/// txn.commit()?;
/// # Ok(())
/// # }
/// ```
pub fn update_cargo_manifest(
    manifest_path: &Path,
    new_version: &Version,
    txn: &mut Transaction,
) -> Result<String> {
    let content = fs::read_to_string(manifest_path).map_err(|e| {
        BumpError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read {}: {}", manifest_path.display(), e),
        ))
    })?;

    let edit = replace_package_version(&content, new_version)
        .ok_or_else(|| BumpError::SectionNotFound(manifest_path.to_path_buf()))?;

    verify_package_version(manifest_path, &edit.content, new_version);

    txn.update_file(manifest_path.to_path_buf(), edit.content)?;
    Ok(edit.old_version)
}

/// Replaces the first `version = ` line inside `[package]`.
///
/// The section starts at a line that is exactly `[package]` (ignoring
/// surrounding whitespace) and ends at the next line starting with `[`.
/// Returns `None` when no such line exists.
pub fn replace_package_version(content: &str, new_version: &Version) -> Option<VersionEdit> {
    let mut in_package = false;
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let start = offset;
        offset += line.len();
        let trimmed = line.trim();

        if trimmed == PACKAGE_HEADER {
            in_package = true;
            continue;
        }

        if in_package && trimmed.starts_with('[') {
            in_package = false;
            continue;
        }

        if in_package && trimmed.starts_with(VERSION_PREFIX) {
            let terminator = line_terminator(line);
            let replacement = format!("{}\"{}\"{}", VERSION_PREFIX, new_version, terminator);

            let mut new_content = String::with_capacity(content.len() + replacement.len());
            new_content.push_str(&content[..start]);
            new_content.push_str(&replacement);
            new_content.push_str(&content[offset..]);

            return Some(VersionEdit {
                old_version: assigned_value(&trimmed[VERSION_PREFIX.len()..]),
                content: new_content,
            });
        }
    }

    None
}

/// Line ending for the replacement line; a final unterminated line gets `\n`.
fn line_terminator(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// Extracts a quoted value, falling back to the raw right-hand side.
fn assigned_value(rhs: &str) -> String {
    let rhs = rhs.trim();

    for quote in ['"', '\''] {
        if let Some(rest) = rhs.strip_prefix(quote)
            && let Some(end) = rest.find(quote)
        {
            return rest[..end].to_string();
        }
    }

    rhs.to_string()
}

/// Reads the rewritten manifest back as TOML and logs if it disagrees.
fn verify_package_version(manifest_path: &Path, content: &str, new_version: &Version) {
    match content.parse::<DocumentMut>() {
        Ok(doc) => {
            let found = doc
                .get("package")
                .and_then(|package| package.get("version"))
                .and_then(|version| version.as_str());

            if found != Some(new_version.as_str()) {
                log::warn!(
                    "{}: package.version reads back as {:?} after update",
                    manifest_path.display(),
                    found
                );
            }
        }
        Err(e) => {
            log::warn!(
                "{} is not valid TOML after update: {}",
                manifest_path.display(),
                e
            );
        }
    }
}
