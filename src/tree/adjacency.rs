use thiserror::Error;

use super::NodeId;

/// Malformed adjacency description, detected before any traversal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The description contained no nodes.
    #[error("tree must contain at least one node")]
    Empty,

    /// A matrix row does not have one entry per node.
    #[error("adjacency matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Row index that has the wrong width.
        row: usize,
        /// Number of entries found in that row.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },

    /// The input size disagrees with a separately declared node count.
    #[error("input describes {actual} nodes but {declared} were declared")]
    NodeCountMismatch {
        /// Node count declared by the caller.
        declared: usize,
        /// Node count implied by the input.
        actual: usize,
    },

    /// Edge `u -> v` is present without `v -> u`.
    #[error("adjacency is not symmetric: edge {u} -> {v} has no reverse")]
    Asymmetric {
        /// Source endpoint.
        u: NodeId,
        /// Target endpoint.
        v: NodeId,
    },

    /// A node is adjacent to itself.
    #[error("self-loop on node {node}")]
    SelfLoop {
        /// Offending node.
        node: NodeId,
    },

    /// An edge endpoint is outside `[0, n)`.
    #[error("node {node} out of range for {len} nodes")]
    NodeOutOfRange {
        /// Offending node id.
        node: NodeId,
        /// Number of nodes.
        len: usize,
    },

    /// The same undirected edge appears more than once.
    #[error("duplicate edge {u} - {v}")]
    DuplicateEdge {
        /// First endpoint.
        u: NodeId,
        /// Second endpoint.
        v: NodeId,
    },
}

/// Validated, undirected neighbour lists over nodes `[0, n)`.
///
/// Shape is checked on construction (square, symmetric, no self-loops, no
/// multi-edges). Connectivity and acyclicity are checked by the Euler tour.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjacencyList {
    neighbors: Vec<Vec<NodeId>>,
    edge_count: usize,
}

impl AdjacencyList {
    /// Build from an `n × n` boolean adjacency matrix.
    pub fn from_matrix(rows: &[Vec<bool>]) -> Result<Self, InputError> {
        if rows.is_empty() {
            return Err(InputError::Empty);
        }
        let n = rows.len();
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != n {
                return Err(InputError::NotSquare {
                    row,
                    len: entries.len(),
                    expected: n,
                });
            }
        }

        let mut neighbors = vec![Vec::new(); n];
        let mut edge_count = 0;
        for u in 0..n {
            if rows[u][u] {
                return Err(InputError::SelfLoop { node: u });
            }
            for v in (u + 1)..n {
                match (rows[u][v], rows[v][u]) {
                    (true, true) => {
                        neighbors[u].push(v);
                        neighbors[v].push(u);
                        edge_count += 1;
                    }
                    (true, false) => return Err(InputError::Asymmetric { u, v }),
                    (false, true) => return Err(InputError::Asymmetric { u: v, v: u }),
                    (false, false) => {}
                }
            }
        }

        Ok(Self {
            neighbors,
            edge_count,
        })
    }

    /// Build from a matrix whose size must match `declared_nodes`.
    pub fn from_matrix_with_nodes(
        rows: &[Vec<bool>],
        declared_nodes: usize,
    ) -> Result<Self, InputError> {
        if rows.len() != declared_nodes {
            return Err(InputError::NodeCountMismatch {
                declared: declared_nodes,
                actual: rows.len(),
            });
        }
        Self::from_matrix(rows)
    }

    /// Build from per-node neighbour lists.
    ///
    /// Every undirected edge must be listed from both endpoints.
    pub fn from_neighbors(lists: Vec<Vec<NodeId>>) -> Result<Self, InputError> {
        if lists.is_empty() {
            return Err(InputError::Empty);
        }
        let n = lists.len();
        let mut directed = 0usize;

        let mut pairs: Vec<(NodeId, NodeId)> = lists
            .iter()
            .enumerate()
            .flat_map(|(u, list)| list.iter().map(move |&v| (u, v)))
            .collect();
        pairs.sort_unstable();

        for (u, list) in lists.iter().enumerate() {
            let mut seen = list.clone();
            seen.sort_unstable();
            for pair in seen.windows(2) {
                if pair[0] == pair[1] {
                    return Err(InputError::DuplicateEdge { u, v: pair[0] });
                }
            }
            for &v in list {
                if v >= n {
                    return Err(InputError::NodeOutOfRange { node: v, len: n });
                }
                if v == u {
                    return Err(InputError::SelfLoop { node: u });
                }
                if pairs.binary_search(&(v, u)).is_err() {
                    return Err(InputError::Asymmetric { u, v });
                }
                directed += 1;
            }
        }

        Ok(Self {
            neighbors: lists,
            edge_count: directed / 2,
        })
    }

    /// Build from an undirected edge list over `n` nodes.
    pub fn from_edges(n: usize, edges: &[(NodeId, NodeId)]) -> Result<Self, InputError> {
        if n == 0 {
            return Err(InputError::Empty);
        }
        let mut neighbors = vec![Vec::new(); n];
        for &(u, v) in edges {
            for node in [u, v] {
                if node >= n {
                    return Err(InputError::NodeOutOfRange { node, len: n });
                }
            }
            if u == v {
                return Err(InputError::SelfLoop { node: u });
            }
            neighbors[u].push(v);
            neighbors[v].push(u);
        }

        let mut normalized: Vec<_> = edges.iter().map(|&(u, v)| (u.min(v), u.max(v))).collect();
        normalized.sort_unstable();
        if let Some(pair) = normalized.windows(2).find(|pair| pair[0] == pair[1]) {
            let (u, v) = pair[0];
            return Err(InputError::DuplicateEdge { u, v });
        }

        Ok(Self {
            neighbors,
            edge_count: edges.len(),
        })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Always false for a successfully built list.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Neighbours of `node`, or `None` when out of range.
    pub fn neighbors(&self, node: NodeId) -> Option<&[NodeId]> {
        self.neighbors.get(node).map(Vec::as_slice)
    }
}
