//! Node representation in the reconciled graph

use super::term::Term;
use serde::{Deserialize, Serialize};

/// A node in the reconciled graph.
///
/// Node identity is the term string; duplicate terms collapse to one node
/// during reconciliation. Exactly one node per reconciled graph carries
/// `is_center = true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// The term this node represents
    pub id: Term,
    /// Whether this node is the current center
    pub is_center: bool,
}

impl Node {
    /// Create a related-term node
    pub fn related(id: impl Into<Term>) -> Self {
        Self {
            id: id.into(),
            is_center: false,
        }
    }

    /// Create the center node
    pub fn center(id: impl Into<Term>) -> Self {
        Self {
            id: id.into(),
            is_center: true,
        }
    }
}
