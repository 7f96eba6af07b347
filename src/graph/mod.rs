//! Core graph data structures and reconciliation

mod edge;
mod node;
mod overrides;
mod reconcile;
mod term;


pub use edge::{Link, RemoteEdge};
pub use node::Node;
pub use overrides::{OverrideEntry, OverrideMap};
pub use reconcile::{reconcile, ReconcileOptions, ReconciledGraph, TermFilter};
pub use term::Term;
