// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/duckdb-behavioral)

//! Binomial coefficients for the per-group combination breakdown.

/// Binomial coefficient `C(n, k)`.
///
/// Returns 0 when `k < 0` or `k > n`, and 1 when `k` is 0 or `n`.
/// Otherwise uses the multiplicative formula over `min(k, n - k)` terms in
/// floating point and rounds to the nearest integer, which is exact for
/// the `n` of a few dozen seen in practice.
///
/// # Examples
///
/// ```
/// use agahnim::combinatorics::choose;
///
/// assert_eq!(choose(5, 2), 10);
/// assert_eq!(choose(5, 6), 0);
/// ```
#[must_use]
pub fn choose(n: i64, k: i64) -> u64 {
    if k < 0 || k > n {
        return 0;
    }
    if k == 0 || k == n {
        return 1;
    }
    let k = k.min(n - k);
    let mut result = 1.0f64;
    for i in 1..=k {
        result = result * (n - k + i) as f64 / i as f64;
    }
    result.round() as u64
}
