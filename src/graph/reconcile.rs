//! Graph reconciliation: merge remote associations with user overrides
//!
//! The reconciler is a pure function from (center, remote edges, overrides)
//! to the node/link set handed to rendering. All fallibility lives upstream
//! in the fetch step; reconciliation itself never fails.

use super::edge::{Link, RemoteEdge};
use super::node::Node;
use super::overrides::OverrideEntry;
use super::term::Term;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Pluggable predicate restricting which remote end terms are admitted.
///
/// Deployment configuration, not a core constraint: the reference
/// deployment restricts remote terms to Han script, other deployments
/// admit everything.
#[derive(Clone, Default)]
pub enum TermFilter {
    /// Admit every term
    #[default]
    Any,
    /// Admit only terms consisting entirely of CJK unified ideographs
    Han,
    /// Arbitrary predicate
    Predicate(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}

impl TermFilter {
    /// Apply the filter to a term
    pub fn admits(&self, term: &str) -> bool {
        match self {
            TermFilter::Any => true,
            TermFilter::Han => {
                !term.is_empty() && term.chars().all(|c| ('\u{4e00}'..='\u{9fa5}').contains(&c))
            }
            TermFilter::Predicate(pred) => pred(term),
        }
    }
}

impl std::fmt::Debug for TermFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TermFilter::Any => write!(f, "Any"),
            TermFilter::Han => write!(f, "Han"),
            TermFilter::Predicate(_) => write!(f, "Predicate(..)"),
        }
    }
}

/// Configuration for reconciliation.
///
/// The observed variants of this system differ only in these knobs, so
/// behavioral differences are configuration choices rather than separate
/// code paths.
#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    /// Cap on remote-sourced related terms, applied before merging adds
    pub max_related: usize,
    /// Multiplier applied to remote weights before the floor of 1.0
    pub weight_scale: f64,
    /// Fixed weight for links sourced purely from user adds
    pub added_weight: f64,
    /// Optional restriction on remote end terms
    pub term_filter: TermFilter,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            max_related: 20,
            weight_scale: 2.0,
            added_weight: 4.0,
            term_filter: TermFilter::Any,
        }
    }
}

/// The canonical node/link set for a center, handed to rendering.
///
/// Recomputed on every center change or override mutation, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciledGraph {
    /// All nodes, center first
    pub nodes: Vec<Node>,
    /// One link per related term, always center -> related
    pub links: Vec<Link>,
    /// Related terms in display order (drives the edit listing)
    pub related: Vec<Term>,
}

impl ReconciledGraph {
    /// A graph containing only the center node
    pub fn single(center: Term) -> Self {
        Self {
            nodes: vec![Node::center(center)],
            links: Vec::new(),
            related: Vec::new(),
        }
    }
}

/// Merge remote associations with overrides into the displayed graph.
///
/// Remote edges are filtered (no self-loops, no empty terms, no deleted
/// terms, optional term filter), capped at `max_related`, then merged with
/// user-added terms. First-seen order is preserved: remote terms first,
/// then added terms not already present. Where a term is both remote and
/// user-added, the remote weight wins.
///
/// Deterministic for identical inputs; an empty or fully-filtered remote
/// set yields a single-node graph, not an error.
pub fn reconcile(
    center: &Term,
    remote_edges: &[RemoteEdge],
    overrides: &OverrideEntry,
    options: &ReconcileOptions,
) -> ReconciledGraph {
    let deleted: HashSet<&Term> = overrides.deleted.iter().collect();

    // Admitted remote edges, capped before adds so user terms are never
    // crowded out by remote noise. First occurrence wins on duplicates.
    let mut seen: HashSet<Term> = HashSet::new();
    let mut related: Vec<Term> = Vec::new();
    let mut links: Vec<Link> = Vec::new();
    for edge in remote_edges {
        if related.len() >= options.max_related {
            break;
        }
        if edge.end.is_empty()
            || edge.end == *center
            || deleted.contains(&edge.end)
            || !options.term_filter.admits(edge.end.as_str())
        {
            continue;
        }
        if seen.insert(edge.end.clone()) {
            related.push(edge.end.clone());
            links.push(Link {
                source: center.clone(),
                target: edge.end.clone(),
                weight: (edge.weight * options.weight_scale).max(1.0),
            });
        }
    }

    // Added terms supplement the remote set; they never pass through the
    // term filter (the user typed them deliberately) but the deleted veto
    // still holds.
    for term in &overrides.added {
        if term.is_empty() || *term == *center || deleted.contains(term) {
            continue;
        }
        if !seen.insert(term.clone()) {
            continue;
        }
        related.push(term.clone());
        links.push(Link {
            source: center.clone(),
            target: term.clone(),
            weight: options.added_weight,
        });
    }

    let mut nodes = Vec::with_capacity(related.len() + 1);
    nodes.push(Node::center(center.clone()));
    nodes.extend(related.iter().cloned().map(Node::related));

    ReconciledGraph {
        nodes,
        links,
        related,
    }
}
