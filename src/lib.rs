//! Semnet: Semantic Association Graph Exploration Engine
//!
//! Starting from a keyword, semnet fetches related terms from a remote
//! knowledge-graph service, reconciles them with user-local overrides
//! into a deterministic node/link set, and supports back-navigation
//! through prior centers. Rendering and the remote API are thin
//! collaborators behind traits; the engine owns the merge semantics,
//! the override store, and the traversal history.
//!
//! # Core Concepts
//!
//! - **Center term**: the graph's current focal node
//! - **Reconciliation**: the deterministic merge of remote associations
//!   with user-added and user-deleted overrides
//! - **Overrides**: per-center local curation, persisted across sessions
//!
//! # Example
//!
//! ```
//! use semnet::{reconcile, OverrideEntry, ReconcileOptions, RemoteEdge, Term};
//!
//! let center = Term::new("dog");
//! let remote = vec![RemoteEdge::new("animal", 0.9), RemoteEdge::new("bark", 0.5)];
//! let graph = reconcile(
//!     &center,
//!     &remote,
//!     &OverrideEntry::empty(),
//!     &ReconcileOptions::default(),
//! );
//! assert_eq!(graph.nodes.len(), 3);
//! ```

mod graph;
mod history;

pub mod explorer;
pub mod source;
pub mod storage;

pub use explorer::{Explorer, ExplorerError, ExplorerResult, ExplorerState, NullSink, RenderSink};
pub use graph::{
    reconcile, Link, Node, OverrideEntry, OverrideMap, ReconcileOptions, ReconciledGraph,
    RemoteEdge, Term, TermFilter,
};
pub use history::TraversalHistory;
pub use source::{AssociationSource, ConceptNetSource, SourceError, SourceResult, DEFAULT_ENDPOINT};
pub use storage::{
    MemoryOverrideStore, OpenOverrideStore, OverrideStore, SqliteOverrideStore, StorageError,
    StorageResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
