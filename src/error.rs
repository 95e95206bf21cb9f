// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/duckdb-behavioral)

//! Configuration error types.

/// Result type alias for configuration and enumeration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while building a [`Configuration`](crate::config::Configuration).
///
/// Budget truncation is deliberately absent: pruning by the random budget
/// is an expected outcome, visible only as a probability total below 1.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A cycle pattern contains a symbol outside `Y`, `B`, `?`, `L`.
    #[error("invalid cycle symbol '{symbol}' at position {position}: use only Y, B, ?, L")]
    InvalidToken {
        /// The offending character.
        symbol: char,
        /// Character index of the symbol in the pattern text.
        position: usize,
    },

    /// The hit target is negative.
    #[error("hits to win must be >= 0, got {0}")]
    NegativeHitTarget(i64),

    /// The hit target does not fit the enumerator's counters.
    #[error("hits to win must be <= {max}, got {0}", max = u32::MAX)]
    HitTargetTooLarge(i64),

    /// The random hit probability is NaN or outside `[0, 1]`.
    #[error("random hit probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    /// The search tree would be infinite: the random budget is unbounded,
    /// no token guarantees a hit, and random tokens can keep missing.
    #[error("unbounded random budget needs a guaranteed hit (Y) in the cycle to terminate")]
    UnboundedSearch,
}
