// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/duckdb-behavioral)

//! Validated enumeration input.
//!
//! A [`Configuration`] is immutable once built. Construction checks
//! everything the enumerator relies on, so [`enumerate`](crate::enumerate::enumerate)
//! itself cannot fail.

use serde::Serialize;

use crate::common::token::Token;
use crate::error::{ConfigError, Result};
use crate::pattern::parser::{parse_cycle, Cycle};

/// Cap on the number of random tokens resolved along any one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RandomBudget {
    /// At most this many random tokens per path; the next one prunes the branch.
    Limited(u32),
    /// No cap.
    Unbounded,
}

impl RandomBudget {
    /// Returns `true` if a path that has already resolved `used` random
    /// tokens may resolve another one.
    #[must_use]
    #[inline]
    pub const fn allows(self, used: u32) -> bool {
        match self {
            Self::Limited(cap) => used < cap,
            Self::Unbounded => true,
        }
    }
}

impl From<Option<u32>> for RandomBudget {
    fn from(cap: Option<u32>) -> Self {
        cap.map_or(Self::Unbounded, Self::Limited)
    }
}

/// Input to the enumerator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Configuration {
    hits_to_win: u32,
    cycle: Cycle,
    p_hit: f64,
    budget: RandomBudget,
}

impl Configuration {
    /// Builds a configuration from a token cycle.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NegativeHitTarget`] if `hits_to_win < 0`.
    /// - [`ConfigError::HitTargetTooLarge`] if `hits_to_win` exceeds `u32::MAX`.
    /// - [`ConfigError::InvalidProbability`] if `p_hit` is NaN or outside `[0, 1]`.
    /// - [`ConfigError::UnboundedSearch`] if a hit is needed, the budget is
    ///   unbounded, the cycle has no guaranteed hit, and random tokens can
    ///   resolve both ways (`0 < p_hit < 1`).
    pub fn new(hits_to_win: i64, cycle: Cycle, p_hit: f64, budget: RandomBudget) -> Result<Self> {
        if hits_to_win < 0 {
            return Err(ConfigError::NegativeHitTarget(hits_to_win));
        }
        let hits_to_win =
            u32::try_from(hits_to_win).map_err(|_| ConfigError::HitTargetTooLarge(hits_to_win))?;
        if !(0.0..=1.0).contains(&p_hit) {
            return Err(ConfigError::InvalidProbability(p_hit));
        }
        let config = Self {
            hits_to_win,
            cycle,
            p_hit,
            budget,
        };
        if budget == RandomBudget::Unbounded
            && config.hits_to_win > 0
            && config.can_make_progress()
            && !config.cycle.contains(Token::GuaranteedHit)
            && config.p_hit < 1.0
        {
            return Err(ConfigError::UnboundedSearch);
        }
        Ok(config)
    }

    /// Builds a configuration from a textual cycle pattern such as `Y???L`.
    ///
    /// # Errors
    ///
    /// Everything [`Configuration::new`] rejects, plus
    /// [`ConfigError::InvalidToken`] for unrecognized pattern symbols.
    pub fn from_pattern(
        hits_to_win: i64,
        pattern: &str,
        p_hit: f64,
        budget: RandomBudget,
    ) -> Result<Self> {
        Self::new(hits_to_win, parse_cycle(pattern)?, p_hit, budget)
    }

    /// Builds a configuration from per-cycle counts: `guaranteed` hits
    /// followed by `random` tokens.
    ///
    /// # Errors
    ///
    /// Everything [`Configuration::new`] rejects.
    pub fn from_counts(
        hits_to_win: i64,
        guaranteed: u32,
        random: u32,
        p_hit: f64,
        budget: RandomBudget,
    ) -> Result<Self> {
        Self::new(hits_to_win, Cycle::from_counts(guaranteed, random), p_hit, budget)
    }

    /// Target number of hits.
    #[must_use]
    pub const fn hits_to_win(&self) -> u32 {
        self.hits_to_win
    }

    /// The repeating token cycle.
    #[must_use]
    pub const fn cycle(&self) -> &Cycle {
        &self.cycle
    }

    /// Probability that a random token resolves as a hit.
    #[must_use]
    pub const fn p_hit(&self) -> f64 {
        self.p_hit
    }

    /// Random-token cap.
    #[must_use]
    pub const fn budget(&self) -> RandomBudget {
        self.budget
    }

    /// Returns `true` if some token in the cycle can produce a hit with
    /// non-zero probability. Without one, the hit count never moves.
    #[must_use]
    pub fn can_make_progress(&self) -> bool {
        self.cycle.contains(Token::GuaranteedHit)
            || (self.cycle.contains(Token::Random) && self.p_hit > 0.0)
    }
}
