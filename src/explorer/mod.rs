//! Exploration controller
//!
//! Orchestrates fetching, reconciliation, history, and override edits.
//! Single-threaded and event-driven: one logical operation at a time, and
//! the only suspension point is the remote fetch. Navigation requests that
//! arrive while a fetch is in flight are dropped, not queued.

use crate::graph::{reconcile, ReconcileOptions, ReconciledGraph, Term};
use crate::history::TraversalHistory;
use crate::source::{AssociationSource, SourceError};
use crate::storage::{OverrideStore, StorageError};
use thiserror::Error;

/// Errors surfaced by the exploration controller.
///
/// None of these are fatal: the controller always returns to a navigable
/// state with the previously displayed graph intact.
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] SourceError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for explorer operations
pub type ExplorerResult<T> = Result<T, ExplorerError>;

/// Controller state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerState {
    /// Ready for the next event
    Idle,
    /// A remote fetch is in flight; navigation is dropped
    Fetching,
    /// The last fetch failed; still navigable
    Error,
}

/// Consumer of reconciled graphs — the render surface.
///
/// Receives the graph and current center on every change.
pub trait RenderSink {
    /// Called after every successful reconciliation
    fn graph_updated(&mut self, center: &Term, graph: &ReconciledGraph);
}

/// Sink that discards updates
#[derive(Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn graph_updated(&mut self, _center: &Term, _graph: &ReconciledGraph) {}
}

/// The exploration controller.
///
/// Owns the current center, the displayed graph, the traversal history,
/// and the override store, and drives reconciliation on every center
/// change or override edit. Override edits re-fetch unconditionally so the
/// displayed graph always reflects the latest remote state; the extra
/// round trip per edit is the accepted cost.
pub struct Explorer {
    source: Box<dyn AssociationSource>,
    store: Box<dyn OverrideStore>,
    options: ReconcileOptions,
    sink: Box<dyn RenderSink>,
    history: TraversalHistory,
    center: Option<Term>,
    graph: Option<ReconciledGraph>,
    state: ExplorerState,
    add_mode: bool,
    add_anchor: Option<Term>,
}

impl Explorer {
    /// Create a controller with no center yet
    pub fn new(
        source: Box<dyn AssociationSource>,
        store: Box<dyn OverrideStore>,
        options: ReconcileOptions,
    ) -> Self {
        Self {
            source,
            store,
            options,
            sink: Box::new(NullSink),
            history: TraversalHistory::new(),
            center: None,
            graph: None,
            state: ExplorerState::Idle,
            add_mode: false,
            add_anchor: None,
        }
    }

    /// Attach a render sink receiving every graph update
    pub fn with_sink(mut self, sink: Box<dyn RenderSink>) -> Self {
        self.sink = sink;
        self
    }

    /// The current center, if any navigation has succeeded yet
    pub fn center(&self) -> Option<&Term> {
        self.center.as_ref()
    }

    /// The currently displayed graph
    pub fn graph(&self) -> Option<&ReconciledGraph> {
        self.graph.as_ref()
    }

    /// Current controller state
    pub fn state(&self) -> ExplorerState {
        self.state
    }

    /// Number of prior centers; 0 means back-navigation is disabled
    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }

    /// True while collecting input for a new user-added relation
    pub fn in_add_mode(&self) -> bool {
        self.add_mode
    }

    /// The term the add-relation mode was anchored at, if any
    pub fn add_anchor(&self) -> Option<&Term> {
        self.add_anchor.as_ref()
    }

    /// Read access to the override store
    pub fn store(&self) -> &dyn OverrideStore {
        self.store.as_ref()
    }

    /// Navigate to a new center.
    ///
    /// Fetches the remote associations, reconciles them with the current
    /// overrides, and updates the displayed graph. When `push_history` is
    /// set, the previous center is pushed onto the traversal history —
    /// only after the fetch succeeded, so a failed navigation changes
    /// nothing. On failure the prior graph and center stay displayed and
    /// the controller remains navigable.
    pub async fn set_center(&mut self, term: Term, push_history: bool) -> ExplorerResult<()> {
        if self.state == ExplorerState::Fetching {
            tracing::debug!(%term, "navigation dropped, fetch already in flight");
            return Ok(());
        }

        self.state = ExplorerState::Fetching;
        let edges = match self.source.associations(&term).await {
            Ok(edges) => edges,
            Err(e) => {
                tracing::warn!(%term, error = %e, "fetch failed, keeping prior graph");
                self.state = ExplorerState::Error;
                return Err(e.into());
            }
        };

        let entry = self.store.entry(&term);
        let graph = reconcile(&term, &edges, &entry, &self.options);

        if push_history {
            if let Some(prev) = self.center.take() {
                self.history.push(prev);
            }
        }
        self.center = Some(term);
        self.graph = Some(graph);
        self.state = ExplorerState::Idle;
        self.notify();
        Ok(())
    }

    /// Handle a node activation (click).
    ///
    /// Ignored while a fetch is in flight or while add-relation mode is
    /// active; otherwise navigates to the activated term, recording the
    /// previous center in the history. Returns whether the activation was
    /// acted on.
    pub async fn activate_node(&mut self, term: Term) -> ExplorerResult<bool> {
        if self.state == ExplorerState::Fetching || self.add_mode {
            tracing::debug!(%term, "node activation ignored");
            return Ok(false);
        }
        self.set_center(term, true).await?;
        Ok(true)
    }

    /// Go back to the previous center. No-op when the history is empty.
    pub async fn go_back(&mut self) -> ExplorerResult<bool> {
        if self.state == ExplorerState::Fetching {
            return Ok(false);
        }
        let Some(prev) = self.history.pop() else {
            return Ok(false);
        };
        match self.set_center(prev.clone(), false).await {
            Ok(()) => Ok(true),
            Err(e) => {
                // the failed target stays available for another attempt
                self.history.push(prev);
                Err(e)
            }
        }
    }

    /// Enter add-relation mode, optionally anchored at a term (the
    /// secondary node action). Node activations are ignored until the
    /// input is submitted or cancelled.
    pub fn begin_add_relation(&mut self, anchor: Option<Term>) {
        self.add_mode = true;
        self.add_anchor = anchor;
    }

    /// Leave add-relation mode without applying anything
    pub fn cancel_add_relation(&mut self) {
        self.add_mode = false;
        self.add_anchor = None;
    }

    /// Submit the add-relation input for the current center.
    ///
    /// A blank input (after trimming) is silently ignored and the mode
    /// stays active, matching the input-field behavior. On success the
    /// mode ends and the graph is refreshed. A persist failure keeps the
    /// in-memory edit and the refreshed graph; the warning is the signal
    /// that the edit will not survive a restart.
    pub async fn submit_add_relation(&mut self, input: &str) -> ExplorerResult<bool> {
        if input.trim().is_empty() {
            return Ok(false);
        }
        let Some(center) = self.center.clone() else {
            return Ok(false);
        };
        if let Err(e) = self.store.add_relation(&center, input) {
            tracing::warn!(error = %e, "override not persisted, edit applies in memory only");
        }
        self.add_mode = false;
        self.add_anchor = None;
        self.set_center(center, false).await?;
        Ok(true)
    }

    /// Suppress a term for the current center and refresh the graph.
    pub async fn apply_delete_relation(&mut self, term: Term) -> ExplorerResult<bool> {
        let Some(center) = self.center.clone() else {
            return Ok(false);
        };
        if let Err(e) = self.store.delete_relation(&center, &term) {
            tracing::warn!(error = %e, "override not persisted, edit applies in memory only");
        }
        self.set_center(center, false).await?;
        Ok(true)
    }

    fn notify(&mut self) {
        if let (Some(center), Some(graph)) = (&self.center, &self.graph) {
            self.sink.graph_updated(center, graph);
        }
    }
}
