//! Python bindings that expose the LCA index via PyO3.
use pyo3::{
    exceptions::{PyIndexError, PyValueError},
    prelude::*,
    types::PyModule,
};

use crate::{LcaConfig, LcaIndex};

/// Python-facing wrapper around a built [`LcaIndex`].
#[pyclass(frozen)]
#[derive(Debug)]
pub struct PyLcaIndex {
    inner: LcaIndex,
}

#[pymethods]
impl PyLcaIndex {
    /// Build from `n` nodes and a list of `(u, v)` edges.
    ///
    /// Args:
    ///     n: Number of nodes.
    ///     edges: List of `(u, v)` tuples, exactly `n - 1` for a tree.
    ///     root: Root node (default 0).
    #[staticmethod]
    #[pyo3(signature = (n, edges, root = 0))]
    pub fn from_edges(n: usize, edges: Vec<(usize, usize)>, root: usize) -> PyResult<Self> {
        let inner = LcaIndex::from_edges(n, &edges, LcaConfig::with_root(root))
            .map_err(|err| PyValueError::new_err(err.to_string()))?;
        Ok(Self { inner })
    }

    /// Lowest common ancestor of `u` and `v`.
    pub fn query(&self, u: usize, v: usize) -> PyResult<usize> {
        self.inner
            .query(u, v)
            .map_err(|err| PyIndexError::new_err(err.to_string()))
    }

    /// Edge count on the path between `u` and `v`.
    pub fn distance(&self, u: usize, v: usize) -> PyResult<u32> {
        self.inner
            .distance(u, v)
            .map_err(|err| PyIndexError::new_err(err.to_string()))
    }

    /// Depth of `node` below the root.
    pub fn depth(&self, node: usize) -> PyResult<u32> {
        self.inner
            .depth(node)
            .map_err(|err| PyIndexError::new_err(err.to_string()))
    }

    /// Number of nodes.
    pub fn __len__(&self) -> usize {
        self.inner.len()
    }
}

/// Module initialiser registering [`PyLcaIndex`].
#[pymodule]
pub fn euler_lca_py(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyLcaIndex>()?;
    Ok(())
}
