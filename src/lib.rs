// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compact integer indexing of photonic Fock states.
//!
//! A Fock state over `m` modes is a vector of photon counts, one per mode.
//! This crate maps every such vector bijectively onto a non-negative integer,
//! so that exponentially large families of states can be stored, iterated
//! and combined as plain indices.
//!
//! # Architecture
//!
//! ## Ranking engine ([`ranking`])
//!
//! Binomial arithmetic and the combinatorial number system. A state is
//! represented by the positions of its `m` mode separators in a unary
//! photon/separator stream; `rank` and `unrank` convert between those
//! positions and the index.
//!
//! ## State codec ([`codec`])
//!
//! Separator positions ↔ occupation vectors, composed with the ranking
//! engine into `decode` and `encode`.
//!
//! ## Merge/add engine ([`merge`])
//!
//! Mode-wise addition of two states: both indices are unranked, their
//! separator sequences merged in one synchronized walk, and the result
//! re-ranked.
//!
//! ## MEMO data ([`memo`])
//!
//! A frozen table of binomial coefficients, built once and shared read-only.
//!
//! # Ordering
//!
//! States are ordered by total photon number, then colexicographically by
//! separator positions. For `m = 3`:
//!
//! ```text
//! 0 |0,0,0>   1 |0,0,1>   2 |0,1,0>   3 |1,0,0>   4 |0,0,2>   ...   9 |2,0,0>
//! ```
//!
//! # Example
//!
//! ```
//! use fock_index::{add, decode, encode};
//!
//! let a = encode(&[1, 0, 2]).unwrap();
//! let b = encode(&[0, 1, 1]).unwrap();
//! assert_eq!(decode(add(a, b, 3).unwrap(), 3).unwrap(), vec![1, 1, 3]);
//! ```

pub mod codec;
pub mod constants;
pub mod errors;
pub mod memo;
pub mod merge;
pub mod ranking;

// Re-export commonly used types
pub use codec::{decode, decode_into, encode, FockRepr, FockState, FockStates};
pub use constants::Index;
pub use errors::{ErrorKind, FockError, FockResult};
pub use merge::{add, add_states, merge};
pub use ranking::{binomial, largest_below, rank, unrank};
