// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use proptest::prelude::*;

/// Every occupation vector of `m` modes holding at most `max_photons` photons.
pub fn all_vectors(m: usize, max_photons: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut current = vec![0; m];
    fill(&mut current, 0, max_photons, &mut out);
    out
}

fn fill(current: &mut [usize], mode: usize, budget: usize, out: &mut Vec<Vec<usize>>) {
    if mode == current.len() {
        out.push(current.to_vec());
        return;
    }
    for photons in 0..=budget {
        current[mode] = photons;
        fill(current, mode + 1, budget - photons, out);
    }
    current[mode] = 0;
}

pub fn elementwise_sum(a: &[usize], b: &[usize]) -> Vec<usize> {
    a.iter().zip(b).map(|(x, y)| x + y).collect()
}

/// Occupation vectors of `m` modes with small counts.
pub fn occupation(m: usize) -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..6, m)
}

/// A mode count together with two occupation vectors of that many modes.
pub fn occupation_pair() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    (1usize..=8).prop_flat_map(|m| (occupation(m), occupation(m)))
}
