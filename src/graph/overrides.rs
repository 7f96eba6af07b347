//! User-local override records: per-center added and deleted terms

use super::term::Term;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Override records for a single center term.
///
/// `added` holds user-supplied extra associations, `deleted` holds terms
/// the user wants hidden for this center. A term may appear in both: a
/// delete is a display-time veto, not a retraction of the add record, and
/// a later add removes the term from `deleted` again.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideEntry {
    /// User-added associations, insertion-ordered, deduped
    #[serde(default)]
    pub added: Vec<Term>,
    /// Terms suppressed for this center
    #[serde(default)]
    pub deleted: Vec<Term>,
}

impl OverrideEntry {
    /// Entry with no overrides
    pub fn empty() -> Self {
        Self::default()
    }

    /// Record an added term; reverses a prior delete for the same term.
    ///
    /// Returns true if anything changed.
    pub fn add(&mut self, term: Term) -> bool {
        let reversed = if let Some(pos) = self.deleted.iter().position(|t| *t == term) {
            self.deleted.remove(pos);
            true
        } else {
            false
        };
        if self.added.contains(&term) {
            reversed
        } else {
            self.added.push(term);
            true
        }
    }

    /// Record a deleted term. The add record, if any, is kept.
    ///
    /// Returns true if anything changed.
    pub fn delete(&mut self, term: Term) -> bool {
        if self.deleted.contains(&term) {
            false
        } else {
            self.deleted.push(term);
            true
        }
    }

    /// True if the term is currently suppressed
    pub fn is_deleted(&self, term: &Term) -> bool {
        self.deleted.contains(term)
    }

    /// True if no overrides are recorded
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.deleted.is_empty()
    }
}

/// All override records, keyed by center term.
///
/// Persisted as two JSON mappings (center -> added terms, center ->
/// deleted terms), matching the two logical storage keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideMap {
    entries: HashMap<Term, OverrideEntry>,
}

impl OverrideMap {
    /// Empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from the two persisted mappings
    pub fn from_mappings(
        added: HashMap<Term, Vec<Term>>,
        deleted: HashMap<Term, Vec<Term>>,
    ) -> Self {
        let mut entries: HashMap<Term, OverrideEntry> = HashMap::new();
        for (center, terms) in added {
            entries.entry(center).or_default().added = terms;
        }
        for (center, terms) in deleted {
            entries.entry(center).or_default().deleted = terms;
        }
        Self { entries }
    }

    /// The overrides for a center, or an empty entry if none recorded
    pub fn entry(&self, center: &Term) -> OverrideEntry {
        self.entries.get(center).cloned().unwrap_or_default()
    }

    /// Mutable entry for a center, created on demand
    pub fn entry_mut(&mut self, center: &Term) -> &mut OverrideEntry {
        self.entries.entry(center.clone()).or_default()
    }

    /// Centers that have at least one override recorded
    pub fn centers(&self) -> Vec<&Term> {
        let mut centers: Vec<&Term> = self
            .entries
            .iter()
            .filter(|(_, e)| !e.is_empty())
            .map(|(c, _)| c)
            .collect();
        centers.sort();
        centers
    }

    /// Project the added mapping for persistence
    pub fn added_mapping(&self) -> HashMap<Term, Vec<Term>> {
        self.entries
            .iter()
            .filter(|(_, e)| !e.added.is_empty())
            .map(|(c, e)| (c.clone(), e.added.clone()))
            .collect()
    }

    /// Project the deleted mapping for persistence
    pub fn deleted_mapping(&self) -> HashMap<Term, Vec<Term>> {
        self.entries
            .iter()
            .filter(|(_, e)| !e.deleted.is_empty())
            .map(|(c, e)| (c.clone(), e.deleted.clone()))
            .collect()
    }
}
