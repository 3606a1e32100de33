// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable, precomputed data.
//!
//! The binomial table is built once on first use and never written again, so
//! it can be read from any number of threads without coordination.

pub mod binomials;

pub use binomials::{largest_below_bisect, BinomialTable};
