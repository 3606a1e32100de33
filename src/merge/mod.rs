// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mode-wise addition of Fock states without leaving index space.
//!
//! Two states are added by interleaving their photon/separator streams so
//! that, for every mode, the photons of both operands come before that mode's
//! single shared separator:
//!
//! ```text
//! A = |1,0,2>   *||**|
//! B = |0,1,1>   |*|*|
//! A + B         *|*|***|    = |1,1,3>
//! ```
//!
//! The walk never materialises an occupation vector: it only tracks, per
//! operand, where its next separator lands in the merged stream.

use crate::codec::{decode, encode};
use crate::constants::Index;
use crate::errors::{check_positions, FockError, FockResult};
use crate::ranking::{rank, unrank};

/// Read position of one operand during the merge.
///
/// `next` is the merged-stream position of the operand's next separator.
/// It equals the operand's own stored position shifted by `offset`, the
/// number of photons the other operand has placed so far.
#[derive(Debug)]
struct Cursor<'a> {
    separators: &'a [usize],
    slot: usize,
    next: usize,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(separators: &'a [usize]) -> Self {
        Self {
            separators,
            slot: 0,
            next: separators[0],
            offset: 0,
        }
    }

    /// The other operand placed a photon ahead of our pending separator.
    fn shift(&mut self) {
        self.next += 1;
        self.offset += 1;
    }

    /// Our separator was placed; move to the next one.
    fn advance(&mut self) {
        self.slot += 1;
        if let Some(&separator) = self.separators.get(self.slot) {
            self.next = separator + self.offset;
        }
    }
}

/// Separator positions of the mode-wise sum of two states.
///
/// Both inputs must be strictly increasing and of equal length; the output
/// has that same length. Mode `i` of the result holds `a[i] + b[i]` photons
/// when `a` and `b` are the decoded operands.
///
/// # Errors
///
/// - [`FockError::ZeroModes`] if both inputs are empty
/// - [`FockError::LengthMismatch`] if the inputs differ in length
/// - [`FockError::NotAscending`] if either input is not strictly increasing
/// - [`FockError::Overflow`] if the merged stream does not fit in `usize`
///
/// # Examples
///
/// ```
/// use fock_index::merge::merge;
///
/// // |1,0,2> + |0,1,1> = |1,1,3>
/// assert_eq!(merge(&[1, 2, 5], &[0, 2, 4]).unwrap(), vec![1, 3, 7]);
/// ```
pub fn merge(a: &[usize], b: &[usize]) -> FockResult<Vec<usize>> {
    let m = a.len();
    check_positions(a, m)?;
    if b.len() != m {
        return Err(FockError::LengthMismatch {
            expected: m,
            actual: b.len(),
        });
    }
    check_positions(b, m)?;
    // Last merged separator: both photon totals plus m - 1 separators.
    a[m - 1]
        .checked_add(b[m - 1])
        .ok_or(FockError::overflow("merged photon stream"))?;

    let mut merged = Vec::with_capacity(m);
    let mut left = Cursor::new(a);
    let mut right = Cursor::new(b);
    let mut position = 0;
    while merged.len() < m {
        if position == left.next && position == right.next {
            merged.push(position);
            left.advance();
            right.advance();
        } else if position < left.next {
            // Photon from `a`.
            right.shift();
        } else {
            // Photon from `b`.
            left.shift();
        }
        position += 1;
    }
    Ok(merged)
}

/// Index of the mode-wise sum of the states at `index_a` and `index_b`.
///
/// ```
/// use fock_index::merge::add;
///
/// // |0,0,1> + |1,0,0> = |1,0,1>
/// assert_eq!(add(1, 3, 3).unwrap(), 6);
/// ```
pub fn add(index_a: Index, index_b: Index, m: usize) -> FockResult<Index> {
    let a = unrank(index_a, m)?;
    let b = unrank(index_b, m)?;
    let merged = merge(&a, &b)?;
    rank(&merged, m)
}

/// Mode-wise sum of two occupation vectors, computed through their indices.
pub fn add_states(a: &[usize], b: &[usize]) -> FockResult<Vec<usize>> {
    if a.len() != b.len() {
        return Err(FockError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    let m = a.len();
    let sum = add(encode(a)?, encode(b)?, m)?;
    decode(sum, m)
}
