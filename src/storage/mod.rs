//! Persistent storage for user overrides
//!
//! Overrides live behind the `OverrideStore` trait. The primary
//! implementation is `SqliteOverrideStore`; `MemoryOverrideStore` backs
//! tests and the degraded-persistence fallback.

mod memory;
mod sqlite;
mod traits;

pub use memory::MemoryOverrideStore;
pub use sqlite::SqliteOverrideStore;
pub use traits::{OpenOverrideStore, OverrideStore, StorageError, StorageResult};
