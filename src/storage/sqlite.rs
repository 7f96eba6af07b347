//! SQLite-backed override store
//!
//! One key-value table with two logical keys, `added-overrides` and
//! `deleted-overrides`, each holding the full JSON serialization of the
//! respective mapping (center term -> list of terms). Both values are
//! rewritten on every mutation; the mappings are small enough that a
//! wholesale rewrite is cheaper than row-level bookkeeping.

use super::traits::{OpenOverrideStore, OverrideStore, StorageError, StorageResult};
use crate::graph::{OverrideEntry, OverrideMap, Term};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

const ADDED_KEY: &str = "added-overrides";
const DELETED_KEY: &str = "deleted-overrides";

/// SQLite-backed override store
///
/// Thread-safe via internal mutex on the connection; mutations themselves
/// arrive single-threaded from the exploration controller.
pub struct SqliteOverrideStore {
    conn: Mutex<Connection>,
    overrides: OverrideMap,
}

impl SqliteOverrideStore {
    fn init_schema(conn: &Connection) -> StorageResult<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS overrides (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            PRAGMA journal_mode = WAL;
            "#,
        )?;
        Ok(())
    }

    /// Read one persisted mapping. A missing or corrupt value yields an
    /// empty mapping, never an error to the caller.
    fn load_mapping(conn: &Connection, key: &str) -> StorageResult<HashMap<Term, Vec<Term>>> {
        let value: Option<String> = conn
            .query_row(
                "SELECT value FROM overrides WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        let Some(text) = value else {
            return Ok(HashMap::new());
        };
        match serde_json::from_str(&text) {
            Ok(mapping) => Ok(mapping),
            Err(e) => {
                tracing::warn!(key, error = %e, "corrupt override mapping, starting empty");
                Ok(HashMap::new())
            }
        }
    }

    fn from_connection(conn: Connection) -> StorageResult<Self> {
        Self::init_schema(&conn)?;
        let added = Self::load_mapping(&conn, ADDED_KEY)?;
        let deleted = Self::load_mapping(&conn, DELETED_KEY)?;
        Ok(Self {
            conn: Mutex::new(conn),
            overrides: OverrideMap::from_mappings(added, deleted),
        })
    }

    /// Serialize both mappings and rewrite both keys in one transaction.
    fn persist(&self) -> StorageResult<()> {
        let added = serde_json::to_string(&self.overrides.added_mapping())?;
        let deleted = serde_json::to_string(&self.overrides.deleted_mapping())?;

        let mut conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT OR REPLACE INTO overrides (key, value) VALUES (?1, ?2)",
            params![ADDED_KEY, added],
        )?;
        tx.execute(
            "INSERT OR REPLACE INTO overrides (key, value) VALUES (?1, ?2)",
            params![DELETED_KEY, deleted],
        )?;
        tx.commit()?;
        Ok(())
    }
}

impl OverrideStore for SqliteOverrideStore {
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
        if !self.overrides.entry_mut(center).add(Term::new(trimmed)) {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn delete_relation(&mut self, center: &Term, term: &Term) -> StorageResult<bool> {
        if !self.overrides.entry_mut(center).delete(term.clone()) {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }
}

impl OpenOverrideStore for SqliteOverrideStore {
    fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    fn open_in_memory() -> StorageResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }
}
