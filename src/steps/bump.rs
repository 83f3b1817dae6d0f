//! Orchestration logic for version bumps.
//!
//! All file modifications go through a `Transaction`. In the default mode
//! each file gets its own transaction, committed before the next file is
//! read, so a failure part-way leaves earlier files updated. With
//! `--atomic` all three are staged first and committed together.

use crate::cli::BumpArgs;
use crate::error::{BumpError, Result};
use crate::fs::Transaction;
use crate::manifest::{update_cargo_manifest, update_package_json, update_tauri_config};
use crate::version::Version;

use colored::Colorize;
use std::path::{Path, PathBuf};

/// A metadata file that carries the project version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    PackageJson,
    CargoManifest,
    TauriConfig,
}

impl Target {
    /// Update order.
    pub const ALL: [Target; 3] = [Target::PackageJson, Target::CargoManifest, Target::TauriConfig];

    /// Location relative to the project root.
    pub fn relative_path(self) -> &'static str {
        match self {
            Target::PackageJson => "package.json",
            Target::CargoManifest => "src-tauri/Cargo.toml",
            Target::TauriConfig => "src-tauri/tauri.conf.json",
        }
    }

    pub fn path_in(self, root: &Path) -> PathBuf {
        root.join(self.relative_path())
    }

    /// Stages the rewrite of this file, returning the previous version.
    pub fn stage(self, path: &Path, new_version: &Version, txn: &mut Transaction) -> Result<String> {
        match self {
            Target::PackageJson => update_package_json(path, new_version, txn),
            Target::CargoManifest => update_cargo_manifest(path, new_version, txn),
            Target::TauriConfig => update_tauri_config(path, new_version, txn),
        }
    }
}

/// One completed (or, in dry-run, planned) file update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub path: PathBuf,
    pub old_version: String,
}

/// Executes a version bump.
///
/// ## Phases
///
/// 1. Validate the version string
/// 2. Resolve the project root
/// 3. Stage and commit `package.json`, `src-tauri/Cargo.toml` and
///    `src-tauri/tauri.conf.json` in that order
/// 4. Print one line per file and a success message
///
/// Returns the first error encountered; later files are not touched.
pub fn execute(args: BumpArgs) -> Result<()> {
    let new_version = Version::parse(&args.new_version)?;
    let root = resolve_root(&args.root)?;

    log::debug!("Project root: {}", root.display());

    let changes = if args.atomic {
        bump_atomic(&root, &new_version, args.dry_run)?
    } else {
        bump_sequential(&root, &new_version, args.dry_run, |change| {
            print_change(change, &root, &new_version, args.dry_run)
        })?
    };

    if args.atomic {
        for change in &changes {
            print_change(change, &root, &new_version, args.dry_run);
        }
    }

    println!();
    if args.dry_run {
        println!(
            "{} Run without {} to apply.",
            "Dry run: no files were modified.".yellow().bold(),
            "--dry-run".cyan()
        );
    } else {
        println!("{}", "All files updated successfully!".green().bold());
    }

    Ok(())
}

/// Updates each file in turn, committing before moving on.
///
/// `on_change` runs right after each commit, so progress is reported even
/// when a later file fails.
pub fn bump_sequential(
    root: &Path,
    new_version: &Version,
    dry_run: bool,
    mut on_change: impl FnMut(&Change),
) -> Result<Vec<Change>> {
    let mut changes = Vec::with_capacity(Target::ALL.len());

    for target in Target::ALL {
        let path = target.path_in(root);
        log::info!("Updating {}", target.relative_path());

        let mut txn = Transaction::new(dry_run);
        let old_version = target.stage(&path, new_version, &mut txn)?;
        txn.commit()?;

        let change = Change { path, old_version };
        on_change(&change);
        changes.push(change);
    }

    Ok(changes)
}

/// Stages every file, then commits them together.
///
/// A parse failure in any file aborts before anything is written.
pub fn bump_atomic(root: &Path, new_version: &Version, dry_run: bool) -> Result<Vec<Change>> {
    let mut txn = Transaction::new(dry_run);
    let mut changes = Vec::with_capacity(Target::ALL.len());

    for target in Target::ALL {
        let path = target.path_in(root);
        log::info!("Staging {}", target.relative_path());

        match target.stage(&path, new_version, &mut txn) {
            Ok(old_version) => changes.push(Change { path, old_version }),
            Err(e) => {
                if !dry_run && !txn.is_empty() {
                    eprintln!("{} No files were modified.", "ℹ".blue().bold());
                }
                return Err(e);
            }
        }
    }

    log::debug!("Staged {} operations", txn.len());
    txn.commit()?;

    Ok(changes)
}

fn resolve_root(root: &Path) -> Result<PathBuf> {
    if !root.exists() {
        return Err(BumpError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Project root does not exist: {}", root.display()),
        )));
    }

    if !root.is_dir() {
        return Err(BumpError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Project root is not a directory: {}", root.display()),
        )));
    }

    Ok(root.to_path_buf())
}

fn print_change(change: &Change, root: &Path, new_version: &Version, dry_run: bool) {
    let verb = if dry_run { "Would update" } else { "Updated" };
    println!(
        "{} {}: {} -> {}",
        verb,
        display_path(&change.path, root),
        change.old_version,
        new_version
    );
}

/// Path relative to `root` with forward slashes.
fn display_path(path: &Path, root: &Path) -> String {
    let relative = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
    relative.to_string_lossy().replace('\\', "/")
}
