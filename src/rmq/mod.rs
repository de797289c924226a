//! Range minimum queries
//!
//! Static RMQ over a key array, answered in O(1) from a table of
//! power-of-two windows built in O(m log m).

mod sparse_table;

pub use sparse_table::SparseTable;
