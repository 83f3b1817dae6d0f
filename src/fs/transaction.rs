//! Staged file rewrites with rollback support.
//!
//! Coordinates several file updates that must succeed or fail as a unit.
//!
//! ## Execution Guarantees
//!
//! - **Atomicity**: A failed write restores every file already written
//! - **Ordering**: Files are written in the order they were staged
//! - **Validation**: Pre-flight checks before any mutations
//! - **Idempotency**: Files with unchanged content are skipped
//!
//! ## Phases
//!
//! 1. **Build**: Stage rewrites via `update_file()`
//! 2. **Validate**: Check paths exist, are writable, no duplicates
//! 3. **Execute**: Write the new contents
//! 4. **Rollback** (on failure): Restore originals in LIFO order
//!
//! ## Example
//!
//! ```no_run
//! # use bump_version::fs::Transaction;
//! # use std::path::PathBuf;
//! # fn example() -> bump_version::error::Result<()> {
//! let mut txn = Transaction::new(false);
//!
//! txn.update_file(PathBuf::from("package.json"), "{\n  \"version\": \"2.0.0\"\n}".into())?;
//!
//! txn.commit()?;
//! # Ok(())
//! # }
//! ```

use crate::error::{BumpError, Result};

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

/// A staged file rewrite.
///
/// Stores original content for rollback.
#[derive(Debug, Clone)]
struct Operation {
    path: PathBuf,
    original: String,
    new: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransactionState {
    /// Staging operations.
    Building,
    /// All operations succeeded.
    Committed,
    /// Rolled back, either manually or after a failed write.
    RolledBack,
    /// Validation or rollback failed.
    Failed,
}

/// Transaction coordinating multiple file rewrites.
///
/// Must be explicitly committed. If dropped without committing, logs a warning
/// but doesn't roll back (since operations weren't applied).
///
/// ## Dry-Run Mode
///
/// When `dry_run = true`, operations are staged but never written.
#[must_use = "Transaction must be committed or rolled back"]
pub struct Transaction {
    operations: Vec<Operation>,
    dry_run: bool,
    state: TransactionState,
    executed: usize,
}

impl Transaction {
    /// Creates a new transaction.
    pub fn new(dry_run: bool) -> Self {
        Self {
            operations: Vec::new(),
            dry_run,
            state: TransactionState::Building,
            executed: 0,
        }
    }

    /// Stages a file rewrite.
    ///
    /// Reads current content and compares to `new_content`. If identical,
    /// skips (idempotent). Otherwise stages for commit.
    pub fn update_file(&mut self, path: PathBuf, new_content: String) -> Result<()> {
        if self.state != TransactionState::Building {
            return Err(BumpError::Other(anyhow::anyhow!(
                "Cannot modify transaction after commit/rollback"
            )));
        }

        log::debug!("Staging update for: {}", path.display());

        let original = fs::read_to_string(&path).map_err(|e| {
            log::error!("Failed to read {}: {}", path.display(), e);
            BumpError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            ))
        })?;

        if original == new_content {
            log::debug!("Content unchanged, skipping: {}", path.display());
            return Ok(());
        }

        if self.dry_run {
            log::info!("Would update: {}", path.display());
        }

        self.operations.push(Operation {
            path,
            original,
            new: new_content,
        });

        Ok(())
    }

    /// Validates all staged operations.
    ///
    /// Checks:
    /// - No duplicate file operations
    /// - Files still exist
    /// - Files are writable
    fn validate(&self) -> Result<()> {
        let mut file_paths = HashSet::new();

        for op in &self.operations {
            if !file_paths.insert(&op.path) {
                return Err(BumpError::Other(anyhow::anyhow!(
                    "Duplicate file operation: {}",
                    op.path.display()
                )));
            }

            if !op.path.exists() {
                return Err(BumpError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File no longer exists: {}", op.path.display()),
                )));
            }

            if let Ok(metadata) = fs::metadata(&op.path)
                && metadata.permissions().readonly()
            {
                return Err(BumpError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    format!("File is read-only: {}", op.path.display()),
                )));
            }
        }

        Ok(())
    }

    /// Writes all staged operations.
    ///
    /// On a failed write, files already written are restored and the write
    /// error is returned.
    pub fn commit(&mut self) -> Result<()> {
        if self.state != TransactionState::Building {
            return Err(BumpError::Other(anyhow::anyhow!(
                "Transaction already committed/rolled back"
            )));
        }

        if self.dry_run {
            self.state = TransactionState::Committed;
            return Ok(());
        }

        if let Err(e) = self.validate() {
            self.state = TransactionState::Failed;
            return Err(e);
        }

        let mut failure = None;
        for op in &self.operations {
            if let Err(e) = fs::write(&op.path, &op.new) {
                failure = Some(BumpError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to write {}: {}", op.path.display(), e),
                )));
                break;
            }

            self.executed += 1;
            log::debug!("Updated: {}", op.path.display());
        }

        match failure {
            None => {
                self.state = TransactionState::Committed;
                Ok(())
            }
            Some(err) => {
                if self.executed > 0 {
                    log::warn!("Rolling back {} written file(s)...", self.executed);
                    self.rollback_partial()?;
                } else {
                    self.state = TransactionState::Failed;
                }
                Err(err)
            }
        }
    }

    /// Manually rolls back a committed transaction.
    ///
    /// Restores original contents in LIFO order. Only works on committed
    /// transactions.
    pub fn rollback(&mut self) -> Result<()> {
        match self.state {
            TransactionState::Building => Ok(()),
            TransactionState::Committed if self.dry_run => Ok(()),
            TransactionState::Committed => {
                self.executed = self.operations.len();
                self.rollback_partial()
            }
            TransactionState::Failed => Err(BumpError::Other(anyhow::anyhow!(
                "Transaction failed; nothing to roll back"
            ))),
            TransactionState::RolledBack => Err(BumpError::Other(anyhow::anyhow!(
                "Transaction already rolled back"
            ))),
        }
    }

    /// Rolls back executed operations only.
    fn rollback_partial(&mut self) -> Result<()> {
        let errors: Vec<String> = self.operations[..self.executed]
            .iter()
            .rev()
            .filter_map(|op| {
                fs::write(&op.path, &op.original)
                    .map_err(|e| format!("Failed to restore {}: {}", op.path.display(), e))
                    .err()
            })
            .collect();

        self.executed = 0;

        if errors.is_empty() {
            self.state = TransactionState::RolledBack;
            log::info!("Rollback completed successfully");
            Ok(())
        } else {
            self.state = TransactionState::Failed;
            Err(BumpError::RollbackFailed(errors.join("; ")))
        }
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Returns true if successfully committed.
    pub fn is_committed(&self) -> bool {
        self.state == TransactionState::Committed
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if self.state == TransactionState::Building && !self.operations.is_empty() && !self.dry_run
        {
            log::warn!("Transaction dropped without commit");
        }
    }
}
