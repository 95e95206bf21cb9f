// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/duckdb-behavioral)

//! Cycle tokens and the symbols they emit into sequence labels.
//!
//! A cycle is written with one symbol per token. Resolved sequences reuse
//! the uppercase symbols for guaranteed tokens and lowercase symbols for
//! random tokens, so a label like `YyybLY` shows both what happened and
//! which outcomes were forced:
//!
//! | Token | Pattern | Emitted |
//! |-------|---------|---------|
//! | [`Token::GuaranteedHit`] | `Y` | `Y` |
//! | [`Token::GuaranteedSecondary`] | `B` | `B` |
//! | [`Token::Random`] | `?` | `y` (hit) or `b` (secondary) |
//! | [`Token::Decorative`] | `L` | `L` |

use serde::Serialize;

/// Emitted for a guaranteed hit.
pub const GUARANTEED_HIT: char = 'Y';
/// Emitted for a guaranteed secondary (blue ball).
pub const GUARANTEED_SECONDARY: char = 'B';
/// Emitted when a random token resolves as a hit.
pub const RANDOM_HIT: char = 'y';
/// Emitted when a random token resolves as a secondary.
pub const RANDOM_SECONDARY: char = 'b';
/// Emitted for a decorative marker (lightning).
pub const DECORATIVE: char = 'L';
/// Pattern symbol for a random token.
pub const RANDOM_PATTERN: char = '?';

/// One position in a repeating cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Token {
    /// Always a hit.
    GuaranteedHit,
    /// Always a secondary-count increment.
    GuaranteedSecondary,
    /// Hit with probability `p_hit`, secondary otherwise.
    Random,
    /// Display-only marker. No effect on counts or probability.
    Decorative,
}

impl Token {
    /// Maps a pattern symbol (case-insensitive) to its token.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            GUARANTEED_HIT => Some(Self::GuaranteedHit),
            GUARANTEED_SECONDARY => Some(Self::GuaranteedSecondary),
            RANDOM_PATTERN => Some(Self::Random),
            DECORATIVE => Some(Self::Decorative),
            _ => None,
        }
    }

    /// The symbol used to write this token in a cycle pattern.
    #[must_use]
    pub const fn pattern_symbol(self) -> char {
        match self {
            Self::GuaranteedHit => GUARANTEED_HIT,
            Self::GuaranteedSecondary => GUARANTEED_SECONDARY,
            Self::Random => RANDOM_PATTERN,
            Self::Decorative => DECORATIVE,
        }
    }

    /// Whether resolving this token can increment the secondary count.
    #[must_use]
    pub const fn can_add_secondary(self) -> bool {
        matches!(self, Self::GuaranteedSecondary | Self::Random)
    }
}

/// Returns `true` if an emitted sequence symbol increments the secondary count.
#[must_use]
#[inline]
pub const fn is_secondary_symbol(symbol: char) -> bool {
    matches!(symbol, GUARANTEED_SECONDARY | RANDOM_SECONDARY)
}
