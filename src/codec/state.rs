// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fock-state values and enumeration.
//!
//! Decoded occupation vectors are handed to a Fock-state representation that
//! only needs to be constructible from a plain vector of counts, expressed as
//! the [`FockRepr`] trait. [`FockState`] is the crate's own minimal one.

use crate::codec::{encode, occupation_of};
use crate::constants::Index;
use crate::errors::{check_modes, FockResult};
use crate::ranking::{first_index_with_photons, states_with_photons, unrank};
use std::fmt;

/// A Fock-state representation constructible from an occupation vector.
pub trait FockRepr: Sized {
    /// Build the state. Representations that cannot hold the state return
    /// [`crate::errors::FockError::Unsupported`].
    fn from_occupation(occupation: Vec<usize>) -> FockResult<Self>;
}

impl FockRepr for Vec<usize> {
    fn from_occupation(occupation: Vec<usize>) -> FockResult<Self> {
        Ok(occupation)
    }
}

/// Photon occupation numbers of each mode.
///
/// ```
/// use fock_index::codec::FockState;
///
/// let state = FockState::from(vec![0, 2, 1]);
/// assert_eq!(state.photons(), 3);
/// assert_eq!(format!("{}", state), "|0,2,1>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FockState(Vec<usize>);

impl FockState {
    pub fn modes(&self) -> usize {
        self.0.len()
    }

    /// Total photon number.
    pub fn photons(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn occupation(&self) -> &[usize] {
        &self.0
    }

    pub fn into_occupation(self) -> Vec<usize> {
        self.0
    }

    /// Index of this state among all states with the same number of modes.
    pub fn index(&self) -> FockResult<Index> {
        encode(&self.0)
    }
}

impl FockRepr for FockState {
    fn from_occupation(occupation: Vec<usize>) -> FockResult<Self> {
        Ok(Self(occupation))
    }
}

impl From<Vec<usize>> for FockState {
    fn from(occupation: Vec<usize>) -> Self {
        Self(occupation)
    }
}

impl fmt::Display for FockState {
    /// Format as a ket, "|0,2,1>".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for (mode, photons) in self.0.iter().enumerate() {
            if mode > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", photons)?;
        }
        write!(f, ">")
    }
}

/// Iterator over consecutive states in index order.
///
/// Steps the separator positions to their colexicographic successor instead
/// of unranking every index. Yields `(index, occupation)` pairs.
#[derive(Debug, Clone)]
pub struct FockStates {
    positions: Vec<usize>,
    index: Option<Index>,
    remaining: Option<Index>,
}

impl FockStates {
    /// All states of `m` modes, starting from the vacuum.
    pub fn new(m: usize) -> FockResult<Self> {
        Self::starting_at(0, m)
    }

    /// All states of `m` modes from `index` onwards.
    pub fn starting_at(index: Index, m: usize) -> FockResult<Self> {
        Ok(Self {
            positions: unrank(index, m)?,
            index: Some(index),
            remaining: None,
        })
    }

    /// Exactly the states of `m` modes holding `n` photons.
    pub fn with_photons(n: usize, m: usize) -> FockResult<Self> {
        check_modes(m)?;
        let first = first_index_with_photons(n, m)?;
        let count = states_with_photons(n, m)?;
        // Every photon in the last mode: separators packed at the front.
        let mut positions: Vec<usize> = (0..m - 1).collect();
        positions.push(n + m - 1);
        Ok(Self {
            positions,
            index: Some(first),
            remaining: Some(count),
        })
    }

    /// Stop after at most `count` further states.
    pub fn take_states(mut self, count: Index) -> Self {
        self.remaining = Some(self.remaining.map_or(count, |r| r.min(count)));
        self
    }

    fn advance(&mut self) {
        let m = self.positions.len();
        let mut j = 0;
        while j + 1 < m && self.positions[j] + 1 == self.positions[j + 1] {
            j += 1;
        }
        self.positions[j] += 1;
        for (slot, position) in self.positions[..j].iter_mut().enumerate() {
            *position = slot;
        }
    }
}

impl Iterator for FockStates {
    type Item = (Index, Vec<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == Some(0) {
            return None;
        }
        let index = self.index?;
        let occupation = occupation_of(&self.positions);

        self.index = index.checked_add(1);
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        if self.index.is_some() {
            self.advance();
        }
        Some((index, occupation))
    }
}
