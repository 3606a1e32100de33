// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Precomputed binomial coefficients.
//!
//! # Memory Layout
//!
//! `columns[k][n] = C(n, k)` for `k <= MEMO_MAX_K` and `n <= MEMO_MAX_N`,
//! one heap-allocated column per `k`. A column is what the inverse search
//! needs: for fixed `k` it is non-decreasing in `n`, so it can be bisected.
//! Entries that do not fit in [`Index`] are stored as `None`; once a column
//! overflows it stays overflowed.
//!
//! Size: 33 columns × 129 entries × 16 bytes ≈ 68 KB.

use crate::constants::{Index, MEMO_MAX_K, MEMO_MAX_N};
use crate::errors::{FockError, FockResult};
use crate::ranking::{binomial, largest_below};
use once_cell::sync::Lazy;
use tracing::debug;

static SHARED: Lazy<BinomialTable> = Lazy::new(BinomialTable::new);

/// Frozen table of binomial coefficients.
#[derive(Debug, Clone)]
pub struct BinomialTable {
    columns: Vec<Vec<Option<Index>>>,
}

impl BinomialTable {
    /// Build the table from Pascal's rule `C(n, k) = C(n-1, k-1) + C(n-1, k)`.
    pub fn new() -> Self {
        let mut columns: Vec<Vec<Option<Index>>> =
            vec![vec![None; MEMO_MAX_N + 1]; MEMO_MAX_K + 1];
        for n in 0..=MEMO_MAX_N {
            columns[0][n] = Some(1);
        }
        for k in 1..=MEMO_MAX_K {
            columns[k][0] = Some(0);
            for n in 1..=MEMO_MAX_N {
                columns[k][n] = match (columns[k - 1][n - 1], columns[k][n - 1]) {
                    (Some(left), Some(up)) => left.checked_add(up),
                    _ => None,
                };
            }
        }

        let stored: usize = columns
            .iter()
            .map(|column| column.iter().filter(|c| c.is_some()).count())
            .sum();
        debug!(
            max_n = MEMO_MAX_N,
            max_k = MEMO_MAX_K,
            stored,
            "binomial table built"
        );

        Self { columns }
    }

    /// The process-wide table, built on first access.
    pub fn shared() -> &'static BinomialTable {
        &SHARED
    }

    /// `C(n, k)` if it is inside the table and fits in [`Index`].
    pub fn get(&self, n: usize, k: usize) -> Option<Index> {
        self.columns.get(k)?.get(n).copied().flatten()
    }

    /// `C(n, k)`, from the table when possible, computed otherwise.
    pub fn binomial(&self, n: usize, k: usize) -> FockResult<Index> {
        match self.get(n, k) {
            Some(coefficient) => Ok(coefficient),
            None => binomial(n, k),
        }
    }

    fn column(&self, k: usize) -> Option<&[Option<Index>]> {
        self.columns.get(k).map(Vec::as_slice)
    }
}

impl Default for BinomialTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Bisection variant of [`largest_below`], with identical results.
///
/// Searches the precomputed column `C(·, k)` of the shared table. When the
/// answer may lie past the end of the table, bisects over `r` with each
/// `C(r, k)` computed directly, so the cost grows with `log n` rather than `n`.
///
/// # Errors
///
/// - [`FockError::ZeroModes`] if `k == 0`
/// - [`FockError::Overflow`] if the answer does not fit in `usize`
pub fn largest_below_bisect(value: Index, k: usize) -> FockResult<(usize, Index)> {
    if k == 0 {
        return Err(FockError::ZeroModes);
    }
    if value == 0 || k == 1 {
        return largest_below(value, k);
    }

    if let Some(column) = BinomialTable::shared().column(k) {
        // C(k, k) = 1 <= value, so at least one entry qualifies.
        let candidates = &column[k..];
        let fitting = candidates.partition_point(|c| matches!(c, Some(c) if *c <= value));
        if fitting < candidates.len() {
            if let Some(coefficient) = candidates[fitting - 1] {
                return Ok((k + fitting - 1, coefficient));
            }
        }
    }
    bisect_unbounded(value, k)
}

/// Galloping search for the largest `r` with `C(r, k) <= value`, for `k >= 2`
/// and `value >= 1`.
fn bisect_unbounded(value: Index, k: usize) -> FockResult<(usize, Index)> {
    // An overflowing coefficient certainly exceeds value.
    let fits = |r: usize| binomial(r, k).ok().filter(|c| *c <= value);

    // C(low, k) <= value < C(high, k)
    let mut low = k;
    let mut low_coefficient: Index = 1;
    let mut high = k;
    loop {
        high = high.checked_mul(2).unwrap_or(usize::MAX);
        match fits(high) {
            Some(_) if high == usize::MAX => {
                return Err(FockError::overflow("separator position"));
            }
            Some(coefficient) => {
                low = high;
                low_coefficient = coefficient;
            }
            None => break,
        }
    }
    while high - low > 1 {
        let mid = low + (high - low) / 2;
        match fits(mid) {
            Some(coefficient) => {
                low = mid;
                low_coefficient = coefficient;
            }
            None => high = mid,
        }
    }
    Ok((low, low_coefficient))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_formula() {
        let table = BinomialTable::new();
        for k in 0..=MEMO_MAX_K {
            for n in 0..=MEMO_MAX_N {
                match table.get(n, k) {
                    Some(coefficient) => assert_eq!(binomial(n, k), Ok(coefficient)),
                    None => assert!(binomial(n, k).is_err(), "C({}, {}) missing", n, k),
                }
            }
        }
    }

    #[test]
    fn test_out_of_range() {
        let table = BinomialTable::shared();
        assert_eq!(table.get(MEMO_MAX_N + 1, 2), None);
        assert_eq!(table.get(10, MEMO_MAX_K + 1), None);
        assert_eq!(table.binomial(MEMO_MAX_N + 1, 2), binomial(MEMO_MAX_N + 1, 2));
        assert_eq!(table.binomial(3, 5), Ok(0));
    }

    #[test]
    fn test_bisect_matches_incremental() {
        for k in 1..12 {
            for value in 0..3000 {
                assert_eq!(
                    largest_below_bisect(value, k),
                    largest_below(value, k),
                    "value={} k={}",
                    value,
                    k
                );
            }
        }
    }

    #[test]
    fn test_bisect_past_table() {
        // C(MEMO_MAX_N + 5, 2) lies beyond the table.
        let value = binomial(MEMO_MAX_N + 5, 2).unwrap();
        assert_eq!(largest_below_bisect(value, 2), Ok((MEMO_MAX_N + 5, value)));
        assert_eq!(
            largest_below_bisect(value, MEMO_MAX_K + 3),
            largest_below(value, MEMO_MAX_K + 3)
        );
    }

    #[test]
    fn test_bisect_matches_incremental_past_table() {
        for k in 2..6 {
            let edge = binomial(200, k).unwrap();
            for value in edge - 50..edge + 50 {
                assert_eq!(
                    largest_below_bisect(value, k),
                    largest_below(value, k),
                    "value={} k={}",
                    value,
                    k
                );
            }
        }
        for value in 1..500 {
            let k = MEMO_MAX_K + 8;
            assert_eq!(largest_below_bisect(value, k), largest_below(value, k));
        }
    }

    #[test]
    #[cfg(not(feature = "wide_index"))]
    fn test_bisect_near_max() {
        // The incremental search would take billions of steps here.
        let (result, coefficient) = largest_below_bisect(Index::MAX, 2).unwrap();
        assert_eq!(binomial(result, 2), Ok(coefficient));
        assert!(binomial(result + 1, 2).is_err());
    }

    #[test]
    fn test_shared_is_frozen() {
        let first = BinomialTable::shared() as *const BinomialTable;
        let second = BinomialTable::shared() as *const BinomialTable;
        assert_eq!(first, second);
    }
}
