// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time configuration for Fock-state indexing.
//!
//! This module defines the integer type used for Fock indices and the bounds
//! of the precomputed binomial table. The index width can be configured at
//! compile time via cargo features.
//!
//! # Example
//!
//! ```bash
//! # Default: 64-bit indices
//! cargo build
//!
//! # 128-bit indices
//! cargo build --features wide_index
//! ```

/// Integer type of a Fock index.
///
/// - (default) → `u64`
/// - `wide_index` → `u128`
///
/// With 64-bit indices every state of up to 20 photons in 20 modes is
/// addressable; `wide_index` roughly doubles that reach.
#[cfg(not(feature = "wide_index"))]
pub type Index = u64;

#[cfg(feature = "wide_index")]
pub type Index = u128;

/// Largest `n` stored in the shared binomial table.
pub const MEMO_MAX_N: usize = 128;

/// Largest `k` stored in the shared binomial table.
///
/// `k` is a mode count in every lookup the ranking engine makes, so this
/// caps the number of modes that benefit from the table.
pub const MEMO_MAX_K: usize = 32;

/// Compile-time assertion that we're on a 64-bit architecture.
///
/// Separator positions are `usize` and are widened to `Index` without checks.
const _: () = assert!(
    std::mem::size_of::<usize>() == 8,
    "64-bit architecture required"
);

const _: () = assert!(
    std::mem::size_of::<Index>() >= std::mem::size_of::<usize>(),
    "Index must be at least as wide as usize"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::assertions_on_constants)] // Validates compile-time constant
    fn test_memo_bounds() {
        assert!(MEMO_MAX_K <= MEMO_MAX_N);
        assert!(MEMO_MAX_K >= 8, "table should cover the common mode counts");
    }

    #[test]
    fn test_index_width() {
        #[cfg(not(feature = "wide_index"))]
        assert_eq!(Index::BITS, 64);
        #[cfg(feature = "wide_index")]
        assert_eq!(Index::BITS, 128);
    }
}
