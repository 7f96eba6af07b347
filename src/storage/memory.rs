//! In-memory override store
//!
//! Holds the same mappings as the SQLite store without persisting them.
//! Used in tests and as the fallback when persistent storage cannot be
//! opened (edits still apply for the session, they just do not survive a
//! restart).

use super::traits::{OverrideStore, StorageResult};
use crate::graph::{OverrideEntry, OverrideMap, Term};

/// Override store with no persistence
#[derive(Debug, Default)]
pub struct MemoryOverrideStore {
    overrides: OverrideMap,
}

impl MemoryOverrideStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with existing overrides
    pub fn with_overrides(overrides: OverrideMap) -> Self {
        Self { overrides }
    }
}

impl OverrideStore for MemoryOverrideStore {
    fn entry(&self, center: &Term) -> OverrideEntry {
        self.overrides.entry(center)
    }

    fn centers(&self) -> Vec<Term> {
        self.overrides.centers().into_iter().cloned().collect()
    }

    fn add_relation(&mut self, center: &Term, input: &str) -> StorageResult<bool> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }
        Ok(self.overrides.entry_mut(center).add(Term::new(trimmed)))
    }

    fn delete_relation(&mut self, center: &Term, term: &Term) -> StorageResult<bool> {
        Ok(self.overrides.entry_mut(center).delete(term.clone()))
    }
}
