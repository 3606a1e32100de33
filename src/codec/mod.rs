// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! State codec: separator positions ↔ occupation vectors, and index ↔ state.
//!
//! # Examples
//!
//! ```
//! use fock_index::codec::{decode, encode};
//!
//! assert_eq!(decode(4, 3).unwrap(), vec![0, 0, 2]);
//! assert_eq!(encode(&[2, 0, 0]).unwrap(), 9);
//! ```

pub mod state;

pub use state::{FockRepr, FockState, FockStates};

use crate::constants::Index;
use crate::errors::{check_modes, check_positions, FockError, FockResult};
use crate::ranking::{rank, unrank};

/// Mode of each photon, in stream order.
///
/// Walks the unary stream: each position is either the next separator
/// (moving on to the next mode) or a photon of the current mode. The result
/// is non-decreasing and its length is the photon number, so it is only
/// suitable for states with few photons; [`positions_to_occupation`] works
/// in `O(m)` regardless.
pub fn positions_to_mode_sequence(positions: &[usize], m: usize) -> FockResult<Vec<usize>> {
    check_positions(positions, m)?;
    let mut modes = Vec::with_capacity(positions[m - 1] - (m - 1));
    let mut start = 0;
    for (mode, &separator) in positions.iter().enumerate() {
        modes.extend(std::iter::repeat(mode).take(separator - start));
        // Only the last separator can sit at usize::MAX.
        start = separator.saturating_add(1);
    }
    Ok(modes)
}

/// Occupation vector encoded by `positions`.
///
/// Mode `i` holds as many photons as there are stream positions between
/// separators `i - 1` and `i`.
pub fn positions_to_occupation(positions: &[usize], m: usize) -> FockResult<Vec<usize>> {
    check_positions(positions, m)?;
    Ok(occupation_of(positions))
}

/// Occupation from already-validated ascending positions.
pub(crate) fn occupation_of(positions: &[usize]) -> Vec<usize> {
    let mut start = 0;
    positions
        .iter()
        .map(|&separator| {
            let photons = separator - start;
            start = separator.saturating_add(1);
            photons
        })
        .collect()
}

/// Separator positions encoding `occupation`.
///
/// Each mode contributes its photons and then one separator; the separator's
/// position is the number of stream tokens placed before it.
///
/// # Errors
///
/// - [`FockError::ZeroModes`] if `occupation` is empty
/// - [`FockError::Overflow`] if the stream length does not fit in `usize`
pub fn occupation_to_positions(occupation: &[usize]) -> FockResult<Vec<usize>> {
    check_modes(occupation.len())?;
    let mut positions = Vec::with_capacity(occupation.len());
    let mut stream: usize = 0;
    for (mode, &photons) in occupation.iter().enumerate() {
        // The previous mode's separator.
        let separators = usize::from(mode > 0);
        stream = stream
            .checked_add(separators)
            .and_then(|s| s.checked_add(photons))
            .ok_or(FockError::overflow("photon stream"))?;
        positions.push(stream);
    }
    Ok(positions)
}

/// Occupation vector of the state at `index` among states of `m` modes.
///
/// Total for every index; `decode(0, m)` is the vacuum.
pub fn decode(index: Index, m: usize) -> FockResult<Vec<usize>> {
    let positions = unrank(index, m)?;
    positions_to_occupation(&positions, m)
}

/// Index of the state with the given occupation vector. Left inverse of [`decode`].
pub fn encode(occupation: &[usize]) -> FockResult<Index> {
    let positions = occupation_to_positions(occupation)?;
    rank(&positions, occupation.len())
}

/// Decode straight into a caller-chosen Fock-state representation.
///
/// Errors raised by the representation are returned unchanged.
pub fn decode_into<S: FockRepr>(index: Index, m: usize) -> FockResult<S> {
    S::from_occupation(decode(index, m)?)
}
