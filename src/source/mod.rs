//! Remote association sources
//!
//! The exploration controller talks to the remote knowledge-graph service
//! through the `AssociationSource` trait; `ConceptNetSource` is the HTTP
//! implementation.

mod conceptnet;
mod traits;

pub use conceptnet::{ConceptNetSource, DEFAULT_ENDPOINT};
pub use traits::{AssociationSource, SourceError, SourceResult};
