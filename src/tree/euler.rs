//! Euler tour construction
//!
//! A node is appended when the walk enters it and again every time the walk
//! returns to it from a child, so a tree with `n` nodes yields `2n - 1`
//! entries. Between the first occurrences of `u` and `v` the shallowest
//! entry is their lowest common ancestor.

use bitvec::prelude::*;
use thiserror::Error;
use tracing::debug;

use super::{AdjacencyList, NodeId};

/// The adjacency does not describe a single connected, acyclic tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Requested root is not a node of the tree.
    #[error("root {root} out of range for {len} nodes")]
    RootOutOfRange {
        /// Requested root.
        root: NodeId,
        /// Number of nodes.
        len: usize,
    },

    /// The walk reached an already visited node through a second path.
    #[error("cycle detected: edge {u} - {v} closes a cycle")]
    Cycle {
        /// Node being expanded.
        u: NodeId,
        /// Already visited neighbour.
        v: NodeId,
    },

    /// Some nodes are unreachable from the root.
    #[error("{unreached} node(s) unreachable from root {root}, first is {first}")]
    Disconnected {
        /// Root the walk started from.
        root: NodeId,
        /// Number of nodes never visited.
        unreached: usize,
        /// Smallest unvisited node id.
        first: NodeId,
    },

    /// The finished tour does not have `2n - 1` entries.
    #[error("euler tour has {actual} entries, expected {expected}")]
    TourLength {
        /// `2n - 1`.
        expected: usize,
        /// Entries produced.
        actual: usize,
    },
}

/// Euler tour of a rooted tree with per-entry depths.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EulerTour {
    root: NodeId,
    nodes: Vec<NodeId>,
    depths: Vec<u32>,
    first: Vec<usize>,
}

/// One level of the explicit DFS stack.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    parent: Option<NodeId>,
    cursor: usize,
}

impl EulerTour {
    /// Walk `adjacency` depth-first from `root`.
    ///
    /// Uses an explicit stack, so path-shaped trees of any depth are fine.
    pub fn build(adjacency: &AdjacencyList, root: NodeId) -> Result<Self, TreeError> {
        let n = adjacency.len();
        if root >= n {
            return Err(TreeError::RootOutOfRange { root, len: n });
        }

        let capacity = 2 * n - 1;
        let mut nodes = Vec::with_capacity(capacity);
        let mut depths = Vec::with_capacity(capacity);
        let mut first: Vec<Option<usize>> = vec![None; n];
        let mut visited = bitvec![0; n];

        let mut stack = vec![Frame {
            node: root,
            parent: None,
            cursor: 0,
        }];
        visited.set(root, true);
        first[root] = Some(0);
        nodes.push(root);
        depths.push(0u32);

        while let Some(frame) = stack.last_mut() {
            let u = frame.node;
            let neighbors = adjacency.neighbors(u).unwrap_or(&[]);

            if frame.cursor < neighbors.len() {
                let v = neighbors[frame.cursor];
                frame.cursor += 1;
                if frame.parent == Some(v) {
                    continue;
                }
                if visited[v] {
                    return Err(TreeError::Cycle { u, v });
                }

                visited.set(v, true);
                first[v] = Some(nodes.len());
                nodes.push(v);
                depths.push(stack.len() as u32);
                stack.push(Frame {
                    node: v,
                    parent: Some(u),
                    cursor: 0,
                });
            } else {
                stack.pop();
                if let Some(parent) = stack.last() {
                    nodes.push(parent.node);
                    depths.push((stack.len() - 1) as u32);
                }
            }
        }

        let unreached = visited.count_zeros();
        if unreached > 0 {
            let first_unreached = visited.first_zero().unwrap_or(n);
            return Err(TreeError::Disconnected {
                root,
                unreached,
                first: first_unreached,
            });
        }
        if nodes.len() != capacity {
            return Err(TreeError::TourLength {
                expected: capacity,
                actual: nodes.len(),
            });
        }

        let first: Vec<usize> = first.into_iter().flatten().collect();

        debug!(nodes = n, tour_len = nodes.len(), root, "built euler tour");

        Ok(Self {
            root,
            nodes,
            depths,
            first,
        })
    }

    /// Root the walk started from.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of tour entries (`2n - 1`).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a successfully built tour.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of tree nodes.
    pub fn node_count(&self) -> usize {
        self.first.len()
    }

    /// Visited node ids in tour order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Depth of each tour entry.
    pub fn depths(&self) -> &[u32] {
        &self.depths
    }

    /// Tour index of the first appearance of `node`.
    pub fn first_occurrence(&self, node: NodeId) -> Option<usize> {
        self.first.get(node).copied()
    }

    /// Depth of `node` below the root.
    pub fn node_depth(&self, node: NodeId) -> Option<u32> {
        self.first_occurrence(node).map(|index| self.depths[index])
    }
}
