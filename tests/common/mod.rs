//! Reference implementations and fixtures shared by integration tests

#![allow(dead_code)]

use std::collections::VecDeque;

/// Edges of the five-node sample tree: node 1 has children 3 and 4, node 0
/// has children 1 and 2.
pub const SAMPLE_EDGES: [(usize, usize); 4] = [(0, 1), (0, 2), (1, 3), (1, 4)];

/// Symmetric boolean matrix for `edges` over `n` nodes.
pub fn matrix(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<bool>> {
    let mut rows = vec![vec![false; n]; n];
    for &(u, v) in edges {
        rows[u][v] = true;
        rows[v][u] = true;
    }
    rows
}

/// Rooted tree with parent pointers, answering LCA by walking upwards.
#[derive(Debug)]
pub struct NaiveTree {
    pub parent: Vec<Option<usize>>,
    pub depth: Vec<u32>,
}

impl NaiveTree {
    pub fn new(n: usize, edges: &[(usize, usize)], root: usize) -> Self {
        let mut neighbors = vec![Vec::new(); n];
        for &(u, v) in edges {
            neighbors[u].push(v);
            neighbors[v].push(u);
        }

        let mut parent = vec![None; n];
        let mut depth = vec![0u32; n];
        let mut seen = vec![false; n];
        let mut queue = VecDeque::from([root]);
        seen[root] = true;
        while let Some(u) = queue.pop_front() {
            for &v in &neighbors[u] {
                if !seen[v] {
                    seen[v] = true;
                    parent[v] = Some(u);
                    depth[v] = depth[u] + 1;
                    queue.push_back(v);
                }
            }
        }

        Self { parent, depth }
    }

    /// True when `a` is on the path from the root to `b` (inclusive).
    pub fn is_ancestor(&self, a: usize, b: usize) -> bool {
        let mut cur = Some(b);
        while let Some(node) = cur {
            if node == a {
                return true;
            }
            cur = self.parent[node];
        }
        false
    }

    pub fn lca(&self, mut u: usize, mut v: usize) -> usize {
        while self.depth[u] > self.depth[v] {
            u = self.parent[u].expect("non-root has parent");
        }
        while self.depth[v] > self.depth[u] {
            v = self.parent[v].expect("non-root has parent");
        }
        while u != v {
            u = self.parent[u].expect("non-root has parent");
            v = self.parent[v].expect("non-root has parent");
        }
        u
    }

    pub fn children(&self, node: usize) -> Vec<usize> {
        (0..self.parent.len())
            .filter(|&v| self.parent[v] == Some(node))
            .collect()
    }
}
