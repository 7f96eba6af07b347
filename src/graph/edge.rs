//! Remote association edges and reconciled links

use super::term::Term;
use serde::{Deserialize, Serialize};

/// An association reported by the remote source for a center term.
///
/// The wire format is decoded by the source implementation; by the time a
/// `RemoteEdge` reaches the reconciler, an absent weight has already
/// defaulted to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteEdge {
    /// The related term at the far end of the edge
    pub end: Term,
    /// Association weight reported by the source, >= 0
    pub weight: f64,
}

impl RemoteEdge {
    /// Create a remote edge
    pub fn new(end: impl Into<Term>, weight: f64) -> Self {
        Self {
            end: end.into(),
            weight,
        }
    }
}

/// A directed link in the reconciled graph, always center -> related.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// The center term
    pub source: Term,
    /// The related term
    pub target: Term,
    /// Display weight after scaling
    pub weight: f64,
}
