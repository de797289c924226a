//! Construction parameters for [`LcaIndex`](super::LcaIndex)

use crate::tree::{NodeId, DEFAULT_ROOT};

/// Parameters fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcaConfig {
    /// Node the tree is rooted at; validated against the node count.
    pub root: NodeId,
}

impl LcaConfig {
    /// Root the tree at `root` instead of node 0.
    pub fn with_root(root: NodeId) -> Self {
        Self { root }
    }
}

impl Default for LcaConfig {
    fn default() -> Self {
        Self { root: DEFAULT_ROOT }
    }
}
