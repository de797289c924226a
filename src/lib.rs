//! # Lowest common ancestor via Euler tour + sparse table
//!
//! Answers LCA queries on a static rooted tree in O(1) after O(n log n)
//! preprocessing, by reducing LCA to a range minimum query.
//!
//! ## Pipeline
//!
//! 1. **Ingestion**: adjacency matrix, list, or edge list → [`AdjacencyList`]
//! 2. **Euler tour**: explicit-stack DFS → tour, depths, first occurrences
//! 3. **Sparse table**: argmin of every power-of-two window of depths
//! 4. **Query**: shallowest tour entry between two first occurrences
//!
//! Everything is built once; the finished [`LcaIndex`] is immutable and can be
//! shared between threads without locking.
//!
//! ## Usage Example
//!
//! ```
//! use euler_lca::{LcaConfig, LcaIndex};
//!
//! let edges = [(0, 1), (0, 2), (1, 3), (1, 4)];
//! let index = LcaIndex::from_edges(5, &edges, LcaConfig::default())?;
//! assert_eq!(index.query(3, 4)?, 1);
//! assert_eq!(index.query(3, 2)?, 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod io;   // Text formats for trees and queries
pub mod lca;  // Query engine
pub mod rmq;  // Range minimum queries
pub mod tree; // Ingestion and Euler tour

/// Python bindings for exposing the LCA index to external runtimes.
#[cfg(feature = "python-bindings")]
pub mod python_bindings;

// Re-exports for convenience
pub use lca::{LcaConfig, LcaError, LcaIndex, QueryError};
pub use rmq::SparseTable;
pub use tree::{AdjacencyList, EulerTour, InputError, NodeId, TreeError, DEFAULT_ROOT};
