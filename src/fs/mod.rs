//! File system operations with transaction support.
//!
//! Provides staged file rewrites that can be committed or rolled back as a
//! unit.

pub mod transaction;

pub use transaction::Transaction;
