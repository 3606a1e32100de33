// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Checked binomial coefficients and the inverse search used by unranking.

use crate::constants::Index;
use crate::errors::{FockError, FockResult};

/// Compute `c * num / den` when the division is known to be exact.
///
/// The product is split as `(c / den) * num + (c % den) * num / den` so the
/// intermediate never exceeds the result by more than a factor of `den`.
/// Returns `None` on overflow.
pub(crate) fn mul_div_exact(c: Index, num: Index, den: Index) -> Option<Index> {
    let quotient = c / den;
    let remainder = c % den;
    let whole = quotient.checked_mul(num)?;
    let part = remainder.checked_mul(num)? / den;
    whole.checked_add(part)
}

/// Binomial coefficient `C(n, k)`, zero when `k > n`.
///
/// Computed with the multiplicative formula on the smaller of `k` and `n - k`,
/// so every intermediate value is itself a binomial coefficient.
///
/// # Errors
///
/// [`FockError::Overflow`] if the coefficient does not fit in [`Index`].
pub fn binomial(n: usize, k: usize) -> FockResult<Index> {
    if k > n {
        return Ok(0);
    }
    let k = k.min(n - k);
    let mut result: Index = 1;
    for i in 1..=k {
        // C(n-k+i, i) = C(n-k+i-1, i-1) * (n-k+i) / i
        result = mul_div_exact(result, (n - k + i) as Index, i as Index)
            .ok_or(FockError::overflow("binomial coefficient"))?;
    }
    Ok(result)
}

/// Find the largest `result >= k - 1` with `C(result, k) <= value`.
///
/// Returns `(result, C(result, k))`. A `value` of zero is the base of the
/// unranking recursion and yields `(k - 1, 0)`, since `C(k - 1, k) = 0`.
///
/// The general case walks `result` upwards from `k`, deriving each
/// coefficient from the previous one with
/// `C(r + 1, k) = C(r, k) * (r + 1) / (r + 1 - k)`, and stops before the
/// first coefficient that exceeds `value`. For `k == 1` the answer is
/// `value` itself.
///
/// # Errors
///
/// - [`FockError::ZeroModes`] if `k == 0` (every `C(r, 0)` is 1, so no
///   largest `result` exists)
/// - [`FockError::Overflow`] if `result` does not fit in `usize`
pub fn largest_below(value: Index, k: usize) -> FockResult<(usize, Index)> {
    if k == 0 {
        return Err(FockError::ZeroModes);
    }
    if value == 0 {
        return Ok((k - 1, 0));
    }
    if k == 1 {
        let result =
            usize::try_from(value).map_err(|_| FockError::overflow("separator position"))?;
        return Ok((result, value));
    }

    let mut result = k;
    let mut current: Index = 1;
    let mut step: Index = 1;
    loop {
        // A coefficient past Index::MAX certainly exceeds value.
        let next = match mul_div_exact(current, result as Index + 1, step) {
            Some(next) if next <= value => next,
            _ => return Ok((result, current)),
        };
        step += 1;
        result += 1;
        current = next;
    }
}
