//! Lowest common ancestor queries
//!
//! Construction runs ingestion, the Euler tour, and the sparse table once;
//! the resulting [`LcaIndex`] is immutable and answers each query with two
//! table lookups.

mod config;

pub use config::LcaConfig;

use thiserror::Error;
use tracing::{debug, trace};

use crate::rmq::SparseTable;
use crate::tree::{AdjacencyList, EulerTour, InputError, NodeId, TreeError};

/// Failure while building an [`LcaIndex`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LcaError {
    /// Adjacency description has the wrong shape.
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    /// Adjacency is not a single connected, acyclic tree.
    #[error("malformed tree: {0}")]
    MalformedTree(#[from] TreeError),
}

/// A query named a node outside the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Node id is not in `[0, n)`.
    #[error("node {node} out of range for {len} nodes")]
    NodeOutOfRange {
        /// Requested node id.
        node: NodeId,
        /// Number of nodes in the tree.
        len: usize,
    },
}

/// Immutable LCA structure over a static rooted tree.
///
/// Build: O(n log n). Query: O(1).
///
/// The sparse table owns a copy of the tour depths, so the `2n - 1` depths
/// are stored twice: once in the tour and once in the table.
#[derive(Debug, Clone)]
pub struct LcaIndex {
    tour: EulerTour,
    table: SparseTable,
}

impl LcaIndex {
    /// Build from an `n × n` adjacency matrix, rooted at node 0.
    pub fn new(rows: &[Vec<bool>]) -> Result<Self, LcaError> {
        let adjacency = AdjacencyList::from_matrix(rows)?;
        Self::build(&adjacency, LcaConfig::default())
    }

    /// Build from an undirected edge list over `n` nodes.
    pub fn from_edges(
        n: usize,
        edges: &[(NodeId, NodeId)],
        config: LcaConfig,
    ) -> Result<Self, LcaError> {
        let adjacency = AdjacencyList::from_edges(n, edges)?;
        Self::build(&adjacency, config)
    }

    /// Build from per-node neighbour lists.
    pub fn from_neighbors(lists: Vec<Vec<NodeId>>, config: LcaConfig) -> Result<Self, LcaError> {
        let adjacency = AdjacencyList::from_neighbors(lists)?;
        Self::build(&adjacency, config)
    }

    /// Build from validated adjacency.
    pub fn build(adjacency: &AdjacencyList, config: LcaConfig) -> Result<Self, LcaError> {
        let tour = EulerTour::build(adjacency, config.root)?;
        let table = SparseTable::build(tour.depths());

        debug!(
            nodes = tour.node_count(),
            root = tour.root(),
            levels = table.levels().len(),
            "built lca index"
        );

        Ok(Self { tour, table })
    }

    /// Number of tree nodes.
    pub fn len(&self) -> usize {
        self.tour.node_count()
    }

    /// Always false for a successfully built index.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Root the index was built with.
    pub fn root(&self) -> NodeId {
        self.tour.root()
    }

    /// Underlying Euler tour.
    pub fn euler_tour(&self) -> &EulerTour {
        &self.tour
    }

    /// Underlying sparse table over tour depths.
    pub fn sparse_table(&self) -> &SparseTable {
        &self.table
    }

    /// Lowest common ancestor of `u` and `v`.
    pub fn query(&self, u: NodeId, v: NodeId) -> Result<NodeId, QueryError> {
        let mut i = self.first_occurrence(u)?;
        let mut j = self.first_occurrence(v)?;
        if i > j {
            std::mem::swap(&mut i, &mut j);
        }

        let winner = self.table.argmin_inclusive(i, j);
        let lca = self.tour.nodes()[winner];
        trace!(u, v, lca, "lca query");
        Ok(lca)
    }

    /// Answer a batch of queries, failing on the first bad pair.
    pub fn query_many(&self, pairs: &[(NodeId, NodeId)]) -> Result<Vec<NodeId>, QueryError> {
        pairs.iter().map(|&(u, v)| self.query(u, v)).collect()
    }

    /// Depth of `node`; the root has depth 0.
    pub fn depth(&self, node: NodeId) -> Result<u32, QueryError> {
        let index = self.first_occurrence(node)?;
        Ok(self.tour.depths()[index])
    }

    /// True when `ancestor` lies on the path from the root to `node`.
    ///
    /// Every node is its own ancestor.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> Result<bool, QueryError> {
        Ok(self.query(ancestor, node)? == ancestor)
    }

    /// Number of edges on the path between `u` and `v`.
    pub fn distance(&self, u: NodeId, v: NodeId) -> Result<u32, QueryError> {
        let lca = self.query(u, v)?;
        Ok(self.depth(u)? + self.depth(v)? - 2 * self.depth(lca)?)
    }

    fn first_occurrence(&self, node: NodeId) -> Result<usize, QueryError> {
        self.tour
            .first_occurrence(node)
            .ok_or(QueryError::NodeOutOfRange {
                node,
                len: self.len(),
            })
    }
}
