//! Static rooted trees
//!
//! Ingestion turns a raw adjacency description into validated neighbour
//! lists; the Euler tour then flattens the rooted tree into the sequence that
//! the RMQ layer indexes.
//!
//! Nothing here is mutated after construction.

mod adjacency;
mod euler;

pub use adjacency::{AdjacencyList, InputError};
pub use euler::{EulerTour, TreeError};

/// Dense node identifier in `[0, n)`.
pub type NodeId = usize;

/// Root used when the caller does not choose one.
pub const DEFAULT_ROOT: NodeId = 0;
