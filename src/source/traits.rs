//! Association source trait — the contract remote sources implement

use crate::graph::{RemoteEdge, Term};
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while fetching associations.
///
/// All variants collapse to the same recovery at the controller: the
/// previously displayed graph stays up and the session remains navigable.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid endpoint URL: {0}")]
    BadEndpoint(String),
}

/// Result type for source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// The contract remote association sources implement.
///
/// Given a term, a source returns the raw `(end term, weight)` pairs the
/// reconciler merges with local overrides. Sources are opaque: they may
/// fail, return nothing, or return terms the reconciler will filter out.
#[async_trait]
pub trait AssociationSource: Send + Sync {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Fetch the associations for a term
    async fn associations(&self, term: &Term) -> SourceResult<Vec<RemoteEdge>>;
}
