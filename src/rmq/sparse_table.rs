use std::ops::Range;

use tracing::debug;

/// Sparse table of argmin positions.
///
/// Level `k` holds, for every start `i`, the index of the smallest key in
/// `[i, i + 2^k)`. Equal keys resolve to the smaller index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseTable {
    keys: Vec<u32>,
    levels: Vec<Vec<usize>>,
}

impl SparseTable {
    /// Precompute every power-of-two window over `keys`.
    pub fn build(keys: &[u32]) -> Self {
        let m = keys.len();
        if m == 0 {
            return Self {
                keys: Vec::new(),
                levels: Vec::new(),
            };
        }

        let height = m.ilog2() as usize + 1;
        let mut levels: Vec<Vec<usize>> = Vec::with_capacity(height);
        levels.push((0..m).collect());

        for k in 1..height {
            let half = 1usize << (k - 1);
            let width = m - (1usize << k) + 1;
            let prev = &levels[k - 1];
            let row = (0..width)
                .map(|i| pick(keys, prev[i], prev[i + half]))
                .collect();
            levels.push(row);
        }

        debug!(len = m, levels = levels.len(), "built sparse table");

        Self {
            keys: keys.to_vec(),
            levels,
        }
    }

    /// Number of indexed keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True when built over an empty key array.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Indexed keys.
    pub fn keys(&self) -> &[u32] {
        &self.keys
    }

    /// Table rows; `levels()[k][i]` covers `[i, i + 2^k)`.
    pub fn levels(&self) -> &[Vec<usize>] {
        &self.levels
    }

    /// Index of the minimum key in `range`.
    ///
    /// Returns `None` for an empty range or one reaching past the end.
    pub fn argmin(&self, range: Range<usize>) -> Option<usize> {
        if range.start >= range.end || range.end > self.len() {
            return None;
        }
        Some(self.argmin_inclusive(range.start, range.end - 1))
    }

    /// Index of the minimum key in `[lo, hi]`; requires `lo <= hi < len`.
    pub(crate) fn argmin_inclusive(&self, lo: usize, hi: usize) -> usize {
        debug_assert!(lo <= hi && hi < self.len());
        let k = (hi - lo + 1).ilog2() as usize;
        let row = &self.levels[k];
        pick(&self.keys, row[lo], row[hi + 1 - (1usize << k)])
    }
}

/// Smaller key wins; ties go to the earlier index.
#[inline]
fn pick(keys: &[u32], a: usize, b: usize) -> usize {
    if keys[b] < keys[a] || (keys[b] == keys[a] && b < a) {
        b
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_argmin(keys: &[u32], range: Range<usize>) -> usize {
        let mut best = range.start;
        for i in range {
            if keys[i] < keys[best] {
                best = i;
            }
        }
        best
    }

    #[test]
    fn matches_naive_scan_on_every_range() {
        let keys = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9];
        let table = SparseTable::build(&keys);

        for start in 0..keys.len() {
            for end in (start + 1)..=keys.len() {
                assert_eq!(
                    table.argmin(start..end),
                    Some(naive_argmin(&keys, start..end)),
                    "range {start}..{end}"
                );
            }
        }
    }

    #[test]
    fn ties_resolve_to_earliest_index() {
        let keys = [2, 0, 0, 0, 0, 0, 0, 1];
        let table = SparseTable::build(&keys);
        assert_eq!(table.argmin(0..8), Some(1));
        assert_eq!(table.argmin(3..8), Some(3));
        assert_eq!(table.argmin(6..8), Some(6));
    }

    #[test]
    fn level_shapes() {
        let table = SparseTable::build(&[0; 9]);
        let widths: Vec<_> = table.levels().iter().map(Vec::len).collect();
        assert_eq!(widths, vec![9, 8, 6, 2]);
        assert_eq!(table.levels()[0], (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn invalid_ranges_yield_none() {
        let table = SparseTable::build(&[5, 4, 3]);
        assert_eq!(table.argmin(1..1), None);
        assert_eq!(table.argmin(2..4), None);
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = 2..1;
        assert_eq!(table.argmin(reversed), None);
    }

    #[test]
    fn empty_table() {
        let table = SparseTable::build(&[]);
        assert!(table.is_empty());
        assert!(table.levels().is_empty());
        assert_eq!(table.argmin(0..1), None);
    }
}
