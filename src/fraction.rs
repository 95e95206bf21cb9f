// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/duckdb-behavioral)

//! Continued-fraction approximation of probabilities.
//!
//! Enumerated probabilities are sums of products of `p` and `1 - p`, so with
//! the usual `p = 0.5` they are dyadic rationals. [`approximate`] recovers
//! the small fraction behind a float by walking the convergents of its
//! continued-fraction expansion.

use std::fmt;

use serde::Serialize;

/// Tolerance used by [`format_probability`].
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Upper bound on recurrence steps before giving up on a fraction.
const MAX_CONVERGENTS: usize = 64;

/// Digits kept by the decimal fallback.
const DECIMAL_DIGITS: usize = 6;

/// Result of [`approximate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Approximation {
    /// A convergent within tolerance.
    Fraction {
        /// Numerator.
        numerator: u64,
        /// Denominator, always >= 1.
        denominator: u64,
    },
    /// No convergent was within tolerance; the value truncated to a fixed
    /// number of decimal digits.
    Decimal(String),
}

impl fmt::Display for Approximation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fraction {
                numerator,
                denominator,
            } => write!(f, "{numerator}/{denominator}"),
            Self::Decimal(s) => f.write_str(s),
        }
    }
}

/// Finds the first convergent `h/k` of `x` with `|h/k - x| < tolerance`.
///
/// Uses the recurrence `h(n) = a(n)·h(n-1) + h(n-2)` (same for `k`) over the
/// partial quotients `a(n)` of `x`. `x = 0` short-circuits to `0/1`.
///
/// Falls back to [`Approximation::Decimal`] when `x` is negative or not
/// finite, when the expansion terminates or overflows `u64` without meeting
/// the tolerance, or after a bounded number of steps.
///
/// # Examples
///
/// ```
/// use agahnim::fraction::{approximate, Approximation};
///
/// assert_eq!(
///     approximate(0.375, 1e-9),
///     Approximation::Fraction { numerator: 3, denominator: 8 }
/// );
/// assert_eq!(approximate(0.375, 1e-9).to_string(), "3/8");
/// ```
pub fn approximate(x: f64, tolerance: f64) -> Approximation {
    if x == 0.0 {
        return Approximation::Fraction {
            numerator: 0,
            denominator: 1,
        };
    }
    if !x.is_finite() || x < 0.0 {
        return decimal(x);
    }

    // (h, k) = (h(n-1), k(n-1)); (h_prev, k_prev) = (h(n-2), k(n-2))
    let (mut h_prev, mut h) = (0u64, 1u64);
    let (mut k_prev, mut k) = (1u64, 0u64);
    let mut remainder = x;

    for _ in 0..MAX_CONVERGENTS {
        let whole = remainder.floor();
        if whole >= u64::MAX as f64 {
            break;
        }
        let a = whole as u64;
        let (Some(h_next), Some(k_next)) = (
            a.checked_mul(h).and_then(|v| v.checked_add(h_prev)),
            a.checked_mul(k).and_then(|v| v.checked_add(k_prev)),
        ) else {
            break;
        };

        if (h_next as f64 / k_next as f64 - x).abs() < tolerance {
            return Approximation::Fraction {
                numerator: h_next,
                denominator: k_next,
            };
        }

        (h_prev, h) = (h, h_next);
        (k_prev, k) = (k, k_next);

        let fractional = remainder - whole;
        if fractional <= 0.0 {
            break;
        }
        remainder = 1.0 / fractional;
        if !remainder.is_finite() {
            break;
        }
    }

    decimal(x)
}

fn decimal(x: f64) -> Approximation {
    Approximation::Decimal(format!("{:.*}", DECIMAL_DIGITS, x))
}

/// Formats a probability as `"<fraction> (<percent>%)"`, or `"0"`.
///
/// The percentage keeps three decimals unless they are all zero.
///
/// # Examples
///
/// ```
/// use agahnim::fraction::format_probability;
///
/// assert_eq!(format_probability(0.5), "1/2 (50%)");
/// assert_eq!(format_probability(0.0625), "1/16 (6.250%)");
/// assert_eq!(format_probability(0.0), "0");
/// ```
pub fn format_probability(probability: f64) -> String {
    if probability == 0.0 {
        return "0".to_string();
    }
    let percent = format!("{:.3}", probability * 100.0);
    let percent = percent.strip_suffix(".000").unwrap_or(&percent);
    format!(
        "{} ({percent}%)",
        approximate(probability, DEFAULT_TOLERANCE)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(numerator: u64, denominator: u64) -> Approximation {
        Approximation::Fraction {
            numerator,
            denominator,
        }
    }

    #[test]
    fn test_zero() {
        assert_eq!(approximate(0.0, 1e-9), frac(0, 1));
        assert_eq!(approximate(-0.0, 1e-9), frac(0, 1));
    }

    #[test]
    fn test_one() {
        assert_eq!(approximate(1.0, 1e-9), frac(1, 1));
    }

    #[test]
    fn test_dyadic() {
        assert_eq!(approximate(0.5, 1e-10), frac(1, 2));
        assert_eq!(approximate(0.0625, 1e-10), frac(1, 16));
        assert_eq!(approximate(2f64.powi(-15), 1e-10), frac(1, 32768));
        assert_eq!(approximate(11.0 / 32.0, 1e-10), frac(11, 32));
    }

    #[test]
    fn test_repeating() {
        assert_eq!(approximate(1.0 / 3.0, 1e-10), frac(1, 3));
        assert_eq!(approximate(2.0 / 7.0, 1e-10), frac(2, 7));
    }

    #[test]
    fn test_loose_tolerance_prefers_small_denominator() {
        // 0.33 is within 0.01 of 1/3
        assert_eq!(approximate(0.33, 0.01), frac(1, 3));
        // pi/4 is close to 11/14 at 1e-3
        assert_eq!(approximate(std::f64::consts::FRAC_PI_4, 1e-3), frac(11, 14));
    }

    #[test]
    fn test_zero_tolerance_falls_back_to_decimal() {
        assert_eq!(
            approximate(std::f64::consts::FRAC_PI_4, 0.0),
            Approximation::Decimal("0.785398".to_string())
        );
    }

    #[test]
    fn test_invalid_input_falls_back_to_decimal() {
        assert_eq!(
            approximate(-0.25, 1e-9),
            Approximation::Decimal("-0.250000".to_string())
        );
        assert!(matches!(approximate(f64::NAN, 1e-9), Approximation::Decimal(_)));
        assert!(matches!(
            approximate(f64::INFINITY, 1e-9),
            Approximation::Decimal(_)
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(frac(3, 8).to_string(), "3/8");
        assert_eq!(Approximation::Decimal("0.1".into()).to_string(), "0.1");
    }

    #[test]
    fn test_format_probability() {
        assert_eq!(format_probability(0.0), "0");
        assert_eq!(format_probability(1.0), "1/1 (100%)");
        assert_eq!(format_probability(0.5), "1/2 (50%)");
        assert_eq!(format_probability(0.125), "1/8 (12.500%)");
        assert_eq!(format_probability(0.0625), "1/16 (6.250%)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const fn gcd(a: u64, b: u64) -> u64 {
        if b == 0 {
            a
        } else {
            gcd(b, a % b)
        }
    }

    proptest! {
        #[test]
        fn small_fractions_round_trip(d in 1u64..200, n_seed in 0u64..200) {
            let n = n_seed % (d + 1);
            let g = gcd(n, d);
            let expected = if n == 0 {
                Approximation::Fraction { numerator: 0, denominator: 1 }
            } else {
                Approximation::Fraction { numerator: n / g, denominator: d / g }
            };
            prop_assert_eq!(approximate(n as f64 / d as f64, 1e-9), expected);
        }

        #[test]
        fn fraction_is_within_tolerance(x in 0.0f64..=1.0, exp in 2i32..12) {
            let tolerance = 10f64.powi(-exp);
            if let Approximation::Fraction { numerator, denominator } = approximate(x, tolerance) {
                prop_assert!(denominator >= 1);
                prop_assert!((numerator as f64 / denominator as f64 - x).abs() < tolerance);
            }
        }
    }
}
