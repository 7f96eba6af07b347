//! Term: the string identity shared by nodes and override keys

use serde::{Deserialize, Serialize};

/// A term in the association graph.
///
/// Terms are the unit of both graph nodes and override keys. Equality is
/// exact string equality; no normalization is applied. Serializes as a
/// bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Term(String);

impl Term {
    /// Create a term from a string
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The term as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the term is the empty string
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Term {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
