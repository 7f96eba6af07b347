//! Override store trait definitions

use crate::graph::{OverrideEntry, Term};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during override persistence
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Durable per-center override records.
///
/// Mutations apply to the in-memory mappings first and then persist both
/// mappings wholesale. A persist failure is surfaced to the caller, but
/// the in-memory mutation stands so the session stays usable; the caller
/// decides whether to warn that edits will not survive a restart.
pub trait OverrideStore: Send + Sync {
    /// The overrides recorded for a center (empty entry if none)
    fn entry(&self, center: &Term) -> OverrideEntry;

    /// Centers that have at least one override recorded
    fn centers(&self) -> Vec<Term>;

    /// Record a user-added association for a center.
    ///
    /// The input is trimmed; a blank input is rejected as a no-op and
    /// never reaches storage. An add reverses a prior delete for the same
    /// pair. Returns true if anything changed.
    fn add_relation(&mut self, center: &Term, input: &str) -> StorageResult<bool>;

    /// Suppress a term for a center.
    ///
    /// The add record, if any, is kept; deletion is a display-time veto,
    /// not a retraction. Returns true if anything changed.
    fn delete_relation(&mut self, center: &Term, term: &Term) -> StorageResult<bool>;
}

/// Extension trait for opening stores from paths
pub trait OpenOverrideStore: OverrideStore + Sized {
    /// Open or create a store at the given path, loading existing
    /// overrides. Corrupt stored values yield empty mappings, never an
    /// open failure.
    fn open(path: impl AsRef<Path>) -> StorageResult<Self>;

    /// Create an in-memory store (useful for testing)
    fn open_in_memory() -> StorageResult<Self>;
}
