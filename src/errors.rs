// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for ranking, decoding and merging Fock states.

use strum_macros::{Display, EnumCount as EnumCountMacro, IntoStaticStr};
use thiserror::Error;

/// Coarse classification of a [`FockError`].
///
/// Callers are expected to treat every kind as a programming error: all
/// operations are deterministic, so retrying never helps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCountMacro, IntoStaticStr)]
pub enum ErrorKind {
    /// Zero modes, or a separator sequence that is not strictly increasing.
    InvalidArgument,

    /// Operands with different mode counts.
    LengthMismatch,

    /// A result does not fit in the configured index width.
    Overflow,

    /// A collaborating Fock-state representation rejected a state.
    Unsupported,
}

/// Errors reported by the ranking engine, the state codec and the merge engine.
///
/// All errors are raised before any partial result is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FockError {
    /// The mode count `m` was zero.
    #[error("mode count must be at least 1")]
    ZeroModes,

    /// Separator positions were not strictly increasing.
    #[error("separator {position} at slot {slot} does not exceed previous {previous}")]
    NotAscending {
        slot: usize,
        previous: usize,
        position: usize,
    },

    /// Two operands (or an operand and `m`) disagree on the number of modes.
    #[error("expected {expected} modes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Checked arithmetic overflowed.
    #[error("{operation} overflows the index type")]
    Overflow { operation: &'static str },

    /// Propagated from a Fock-state representation outside this crate.
    #[error("unsupported state: {reason}")]
    Unsupported { reason: String },
}

impl FockError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FockError::ZeroModes | FockError::NotAscending { .. } => {
                ErrorKind::InvalidArgument
            }
            FockError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            FockError::Overflow { .. } => ErrorKind::Overflow,
            FockError::Unsupported { .. } => ErrorKind::Unsupported,
        }
    }

    pub(crate) fn overflow(operation: &'static str) -> Self {
        FockError::Overflow { operation }
    }
}

pub type FockResult<T> = Result<T, FockError>;

/// Reject `m == 0`.
pub(crate) fn check_modes(m: usize) -> FockResult<()> {
    if m == 0 {
        Err(FockError::ZeroModes)
    } else {
        Ok(())
    }
}

/// Check that `positions` holds exactly `m` strictly increasing values.
pub(crate) fn check_positions(positions: &[usize], m: usize) -> FockResult<()> {
    check_modes(m)?;
    if positions.len() != m {
        return Err(FockError::LengthMismatch {
            expected: m,
            actual: positions.len(),
        });
    }
    for (slot, pair) in positions.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(FockError::NotAscending {
                slot: slot + 1,
                previous: pair[0],
                position: pair[1],
            });
        }
    }
    Ok(())
}
