//! Shared test fixtures: a deterministic association source and a
//! recording render sink, so controller flows run without network access.

use async_trait::async_trait;
use semnet::{AssociationSource, ReconciledGraph, RemoteEdge, RenderSink, SourceError, SourceResult, Term};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Association source answering from a fixed table.
///
/// Terms not in the table resolve to no associations. Terms in the
/// failing set return a fetch error; the set is shared so tests can flip
/// a term to failing mid-flow.
pub struct MockAssociationSource {
    responses: HashMap<Term, Vec<RemoteEdge>>,
    failing: Arc<Mutex<HashSet<Term>>>,
    calls: Arc<Mutex<Vec<Term>>>,
}

impl MockAssociationSource {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            failing: Arc::new(Mutex::new(HashSet::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register the associations returned for a term
    pub fn respond(mut self, term: &str, edges: Vec<RemoteEdge>) -> Self {
        self.responses.insert(Term::new(term), edges);
        self
    }

    /// Mark a term as failing from the start
    pub fn fail_on(self, term: &str) -> Self {
        self.failing.lock().unwrap().insert(Term::new(term));
        self
    }

    /// Handle for flipping terms to failing after construction
    pub fn failing_handle(&self) -> Arc<Mutex<HashSet<Term>>> {
        Arc::clone(&self.failing)
    }

    /// Handle for inspecting which terms were fetched
    pub fn calls_handle(&self) -> Arc<Mutex<Vec<Term>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl AssociationSource for MockAssociationSource {
    fn id(&self) -> &str {
        "mock"
    }

    async fn associations(&self, term: &Term) -> SourceResult<Vec<RemoteEdge>> {
        self.calls.lock().unwrap().push(term.clone());
        if self.failing.lock().unwrap().contains(term) {
            return Err(SourceError::Status(503));
        }
        Ok(self.responses.get(term).cloned().unwrap_or_default())
    }
}

/// Render sink recording every update it receives
#[derive(Default)]
pub struct RecordingSink {
    updates: Arc<Mutex<Vec<(Term, ReconciledGraph)>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates_handle(&self) -> Arc<Mutex<Vec<(Term, ReconciledGraph)>>> {
        Arc::clone(&self.updates)
    }
}

impl RenderSink for RecordingSink {
    fn graph_updated(&mut self, center: &Term, graph: &ReconciledGraph) {
        self.updates
            .lock()
            .unwrap()
            .push((center.clone(), graph.clone()));
    }
}
