//! Traversal history: the back-navigation stack

use crate::graph::Term;

/// Stack of previously visited center terms, most-recent-last.
///
/// Pushed only on node-activation navigation; re-issuing the same center
/// or going back never pushes. Popping an empty stack is a no-op.
#[derive(Debug, Default, Clone)]
pub struct TraversalHistory {
    stack: Vec<Term>,
}

impl TraversalHistory {
    /// Empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a center the user is navigating away from
    pub fn push(&mut self, term: Term) {
        self.stack.push(term);
    }

    /// Yield the most recent prior center, shrinking the stack by one
    pub fn pop(&mut self) -> Option<Term> {
        self.stack.pop()
    }

    /// Number of prior centers available (0 means back is disabled)
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// True when there is nothing to go back to
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
