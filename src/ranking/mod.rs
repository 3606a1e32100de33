// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ranking engine: the combinatorial number system over separator positions.
//!
//! A Fock state of `m` modes holding `n` photons is written as a unary stream
//! of `n` photons (`*`) and `m` separators (`|`), each separator closing one
//! mode. `|0,2,1>` becomes `|**|*|`. The state is identified by the positions
//! of its separators in that stream, a strictly increasing `m`-tuple ending at
//! `n + m - 1`.
//!
//! The combinatorial number system maps such tuples bijectively onto the
//! non-negative integers:
//!
//! ```text
//! rank(c_1 < c_2 < ... < c_m) = C(c_1, 1) + C(c_2, 2) + ... + C(c_m, m)
//! ```
//!
//! Tuples are ordered colexicographically, and since the last separator sits
//! at `n + m - 1`, all states with fewer photons come first:
//!
//! ```text
//! |0,0,0> = |||    = 0,1,2    0
//! |0,0,1> = ||*|   = 0,1,3    1
//! |0,1,0> = |*||   = 0,2,3    2
//! |1,0,0> = *|||   = 1,2,3    3
//! |0,0,2> = ||**|  = 0,1,4    4
//! ...
//! |2,0,0> = **|||  = 2,3,4    9
//! ```
//!
//! See <https://en.wikipedia.org/wiki/Combinatorial_number_system>.

pub mod binomial;

pub use binomial::{binomial, largest_below};

use crate::constants::Index;
use crate::errors::{check_modes, check_positions, FockError, FockResult};
use crate::memo::{largest_below_bisect, BinomialTable};

/// Separator positions of the state at `index`, in ascending order.
///
/// Peels off the largest `C(c_k, k)` not exceeding the remaining index for
/// `k = m, m - 1, ..., 1`. Each step uses the bisection search, so large
/// photon numbers cost `O(log n)` lookups instead of an `O(n)` walk.
///
/// # Errors
///
/// - [`FockError::ZeroModes`] if `m == 0`
/// - [`FockError::Overflow`] if a position does not fit in `usize`
///
/// # Examples
///
/// ```
/// use fock_index::ranking::unrank;
///
/// assert_eq!(unrank(0, 3).unwrap(), vec![0, 1, 2]);
/// assert_eq!(unrank(5, 3).unwrap(), vec![0, 2, 4]);
/// ```
pub fn unrank(index: Index, m: usize) -> FockResult<Vec<usize>> {
    check_modes(m)?;
    let mut positions = Vec::with_capacity(m);
    let mut remaining = index;
    for k in (1..=m).rev() {
        let (position, coefficient) = largest_below_bisect(remaining, k)?;
        positions.push(position);
        remaining -= coefficient;
    }
    positions.reverse();
    Ok(positions)
}

/// Index of the state with the given separator positions.
///
/// # Errors
///
/// - [`FockError::ZeroModes`] if `m == 0`
/// - [`FockError::LengthMismatch`] if `positions.len() != m`
/// - [`FockError::NotAscending`] if `positions` is not strictly increasing
/// - [`FockError::Overflow`] if the index does not fit in [`Index`]
pub fn rank(positions: &[usize], m: usize) -> FockResult<Index> {
    check_positions(positions, m)?;
    let table = BinomialTable::shared();
    let mut index: Index = 0;
    for (k, &position) in (1..).zip(positions) {
        index = index
            .checked_add(table.binomial(position, k)?)
            .ok_or(FockError::overflow("rank"))?;
    }
    Ok(index)
}

/// Total photon number of the state at `index`.
///
/// Only the last separator is needed: it sits at `n + m - 1`.
pub fn photon_count(index: Index, m: usize) -> FockResult<usize> {
    check_modes(m)?;
    let (last, _) = largest_below_bisect(index, m)?;
    Ok(last - (m - 1))
}

/// Number of states of `m` modes holding exactly `n` photons, `C(n + m - 1, m - 1)`.
pub fn states_with_photons(n: usize, m: usize) -> FockResult<Index> {
    check_modes(m)?;
    let top = n
        .checked_add(m - 1)
        .ok_or(FockError::overflow("photon number"))?;
    binomial(top, m - 1)
}

/// Index of the first state of `m` modes holding `n` photons, `C(n + m - 1, m)`.
///
/// Equivalently, the number of states holding fewer than `n` photons.
pub fn first_index_with_photons(n: usize, m: usize) -> FockResult<Index> {
    check_modes(m)?;
    let top = n
        .checked_add(m - 1)
        .ok_or(FockError::overflow("photon number"))?;
    binomial(top, m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrank_m3() {
        let expected: [[usize; 3]; 11] = [
            [0, 1, 2],
            [0, 1, 3],
            [0, 2, 3],
            [1, 2, 3],
            [0, 1, 4],
            [0, 2, 4],
            [1, 2, 4],
            [0, 3, 4],
            [1, 3, 4],
            [2, 3, 4],
            [0, 1, 5],
        ];
        for (index, positions) in expected.iter().enumerate() {
            assert_eq!(unrank(index as Index, 3).unwrap(), positions.to_vec());
            assert_eq!(rank(positions, 3), Ok(index as Index));
        }
    }

    #[test]
    fn test_unrank_single_mode() {
        assert_eq!(unrank(0, 1).unwrap(), vec![0]);
        assert_eq!(unrank(42, 1).unwrap(), vec![42]);
        assert_eq!(rank(&[42], 1), Ok(42));
    }

    #[test]
    fn test_round_trip() {
        for m in 1..=8 {
            for index in 0..2000 {
                let positions = unrank(index, m).unwrap();
                assert_eq!(positions.len(), m);
                assert!(positions.windows(2).all(|w| w[0] < w[1]));
                assert_eq!(rank(&positions, m), Ok(index), "m={} index={}", m, index);
            }
        }
    }

    #[test]
    #[cfg(not(feature = "wide_index"))]
    fn test_unrank_top_of_range() {
        assert_eq!(unrank(Index::MAX, 1).unwrap(), vec![usize::MAX]);
        assert_eq!(rank(&[usize::MAX], 1), Ok(Index::MAX));
        assert_eq!(photon_count(Index::MAX, 1), Ok(usize::MAX));

        let positions = unrank(Index::MAX, 2).unwrap();
        assert!(positions[0] < positions[1]);
        assert_eq!(rank(&positions, 2), Ok(Index::MAX));
        assert_eq!(photon_count(Index::MAX, 2), Ok(positions[1] - 1));
    }

    #[test]
    #[cfg(feature = "wide_index")]
    fn test_unrank_position_overflow() {
        assert_eq!(
            unrank(Index::MAX, 1),
            Err(FockError::overflow("separator position"))
        );
    }

    #[test]
    fn test_unrank_large_two_mode() {
        // C(3e9, 2) sits exactly on a separator boundary.
        let top = 3_000_000_000usize;
        let index = binomial(top, 2).unwrap();
        assert_eq!(unrank(index, 2).unwrap(), vec![0, top]);
        assert_eq!(unrank(index + 1, 2).unwrap(), vec![1, top]);
        assert_eq!(unrank(index - 1, 2).unwrap(), vec![top - 2, top - 1]);
        for i in [index - 1, index, index + 1] {
            assert_eq!(rank(&unrank(i, 2).unwrap(), 2), Ok(i));
        }
    }

    #[test]
    fn test_zero_modes() {
        assert_eq!(unrank(3, 0), Err(FockError::ZeroModes));
        assert_eq!(rank(&[], 0), Err(FockError::ZeroModes));
        assert_eq!(photon_count(3, 0), Err(FockError::ZeroModes));
    }

    #[test]
    fn test_rank_rejects_bad_positions() {
        assert_eq!(
            rank(&[0, 1], 3),
            Err(FockError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            rank(&[1, 1, 2], 3),
            Err(FockError::NotAscending {
                slot: 1,
                previous: 1,
                position: 1
            })
        );
    }

    #[test]
    fn test_photon_count() {
        // m = 3: index 0 has no photons, 1..=3 one, 4..=9 two, 10 three.
        let expected = [0, 1, 1, 1, 2, 2, 2, 2, 2, 2, 3];
        for (index, &n) in expected.iter().enumerate() {
            assert_eq!(photon_count(index as Index, 3), Ok(n));
        }
    }

    #[test]
    fn test_photon_shells() {
        for m in 1..=6 {
            for n in 0..8 {
                let first = first_index_with_photons(n, m).unwrap();
                let count = states_with_photons(n, m).unwrap();
                assert_eq!(first_index_with_photons(n + 1, m).unwrap(), first + count);
                assert_eq!(photon_count(first, m), Ok(n));
                assert_eq!(photon_count(first + count - 1, m), Ok(n));
            }
        }
        assert_eq!(states_with_photons(2, 3), Ok(6));
        assert_eq!(first_index_with_photons(3, 3), Ok(10));
    }
}
