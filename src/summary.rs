// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/duckdb-behavioral)

//! Summaries computed from enumerated groups.
//!
//! None of this feeds back into the enumerator. These are the numbers a
//! front-end shows next to the groups: distribution statistics over
//! `{secondary count → probability}`, coverage of the outcome space, the
//! theoretical maximum secondary count, and the combination breakdown of a
//! group's representative path.

use serde::Serialize;

use crate::combinatorics::choose;
use crate::common::token::{Token, RANDOM_HIT, RANDOM_SECONDARY};
use crate::config::Configuration;
use crate::enumerate::Group;
use crate::pattern::parser::Cycle;

/// Probabilities closer than this are treated as equal when finding modes
/// and the exact-half median.
const PROBABILITY_EPSILON: f64 = 1e-12;

/// Totals below `1 - COVERAGE_EPSILON` count as truncated.
const COVERAGE_EPSILON: f64 = 1e-9;

/// Median of a discrete distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Median {
    /// The CDF crosses 0.5 inside this value.
    Single(u32),
    /// The CDF is exactly 0.5 at the first value; the median sits between
    /// it and the next.
    Split(u32, u32),
}

/// Statistics over the secondary-count distribution.
///
/// Moments are normalized by the total probability, so a budget-truncated
/// enumeration describes the conditional distribution of what was found.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Distribution {
    /// Sum of all group probabilities. Below 1 when the budget truncated.
    pub total_probability: f64,
    /// Expected secondary count.
    pub mean: f64,
    /// Standard deviation of the secondary count.
    pub std_dev: f64,
    /// `None` only for an empty distribution.
    pub median: Option<Median>,
    /// Every secondary count attaining the maximum probability, ascending.
    pub modes: Vec<u32>,
}

impl Distribution {
    /// Computes statistics from groups sorted by ascending secondary count,
    /// as returned by [`enumerate`](crate::enumerate::enumerate).
    #[must_use]
    pub fn from_groups(groups: &[Group]) -> Self {
        let total_probability = total(groups);
        let norm = if total_probability > 0.0 {
            total_probability
        } else {
            1.0
        };

        let mean = groups
            .iter()
            .map(|g| f64::from(g.secondary_count) * g.probability)
            .sum::<f64>()
            / norm;
        let variance = groups
            .iter()
            .map(|g| (f64::from(g.secondary_count) - mean).powi(2) * g.probability)
            .sum::<f64>()
            / norm;

        Self {
            total_probability,
            mean,
            std_dev: variance.max(0.0).sqrt(),
            median: median(groups, norm),
            modes: modes(groups),
        }
    }

    /// Returns `true` if the groups account for all probability mass.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total_probability >= 1.0 - COVERAGE_EPSILON
    }
}

// `Iterator::sum` over no floats is -0.0
fn total(groups: &[Group]) -> f64 {
    groups.iter().fold(0.0, |acc, g| acc + g.probability)
}

/// How much of the outcome space an enumeration accounts for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Coverage {
    /// Every outcome was enumerated.
    Complete,
    /// The random budget pruned branches; the value is the mass found.
    Truncated(f64),
    /// The cycle can never reach the hit target, so there are no outcomes.
    Unreachable,
}

impl Coverage {
    /// Classifies the groups enumerated for `config`.
    #[must_use]
    pub fn of(config: &Configuration, groups: &[Group]) -> Self {
        if config.hits_to_win() > 0 && !config.can_make_progress() {
            return Self::Unreachable;
        }
        let found = total(groups);
        if found >= 1.0 - COVERAGE_EPSILON {
            Self::Complete
        } else {
            Self::Truncated(found)
        }
    }
}

fn median(groups: &[Group], norm: f64) -> Option<Median> {
    let mut cdf = 0.0;
    for (i, group) in groups.iter().enumerate() {
        cdf += group.probability / norm;
        if (cdf - 0.5).abs() < PROBABILITY_EPSILON {
            return Some(match groups.get(i + 1) {
                Some(next) => Median::Split(group.secondary_count, next.secondary_count),
                None => Median::Single(group.secondary_count),
            });
        }
        if cdf > 0.5 {
            return Some(Median::Single(group.secondary_count));
        }
    }
    groups.last().map(|g| Median::Single(g.secondary_count))
}

fn modes(groups: &[Group]) -> Vec<u32> {
    let peak = groups
        .iter()
        .map(|g| g.probability)
        .fold(f64::NEG_INFINITY, f64::max);
    groups
        .iter()
        .filter(|g| (g.probability - peak).abs() < PROBABILITY_EPSILON)
        .map(|g| g.secondary_count)
        .collect()
}

/// Largest secondary count any path can reach, ignoring the random budget.
///
/// Assumes every random token resolves as a secondary, so the path ends on
/// the `hits_to_win`-th guaranteed hit. Returns `None` when that hit never
/// comes (no guaranteed hit in the cycle and a positive target). An empty
/// cycle emits nothing, so its maximum is `Some(0)`.
///
/// # Examples
///
/// ```
/// use agahnim::pattern::parser::parse_cycle;
/// use agahnim::summary::theoretical_max_secondary;
///
/// let cycle = parse_cycle("Y???L").unwrap();
/// assert_eq!(theoretical_max_secondary(6, &cycle), Some(15));
/// assert_eq!(theoretical_max_secondary(3, &parse_cycle("??").unwrap()), None);
/// ```
#[must_use]
pub fn theoretical_max_secondary(hits_to_win: u32, cycle: &Cycle) -> Option<u64> {
    if hits_to_win == 0 || cycle.is_empty() {
        return Some(0);
    }
    let per_cycle_hits = cycle.count(Token::GuaranteedHit) as u64;
    if per_cycle_hits == 0 {
        return None;
    }
    let per_cycle_secondary = cycle
        .tokens
        .iter()
        .filter(|t| t.can_add_secondary())
        .count() as u64;

    // Whole cycles completed before the one holding the final hit
    let full_cycles = (u64::from(hits_to_win) - 1) / per_cycle_hits;
    let needed = u64::from(hits_to_win) - full_cycles * per_cycle_hits;

    let mut hits = 0u64;
    let mut partial = 0u64;
    for token in &cycle.tokens {
        if *token == Token::GuaranteedHit {
            hits += 1;
            if hits == needed {
                break;
            }
        } else if token.can_add_secondary() {
            partial += 1;
        }
    }

    Some(full_cycles * per_cycle_secondary + partial)
}

/// Combination count behind a group's representative sequence.
///
/// The representative is the group's first sequence. A path that ends in a
/// random hit has its last flip forced, so it is left out of `random_flips`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct GroupBreakdown {
    /// Free random flips in the representative sequence.
    pub random_flips: u32,
    /// Random flips that resolved as secondaries.
    pub random_secondaries: u32,
    /// `C(random_flips, random_secondaries)`.
    pub combinations: u64,
    /// Probability of one such arrangement.
    pub each: f64,
}

impl GroupBreakdown {
    /// Builds the breakdown for `group` under the given random hit probability.
    #[must_use]
    pub fn for_group(group: &Group, p_hit: f64) -> Self {
        let representative = group.sequences.first().map_or("", String::as_str);
        let random_hits = representative.chars().filter(|&c| c == RANDOM_HIT).count() as u32;
        let random_secondaries = representative
            .chars()
            .filter(|&c| c == RANDOM_SECONDARY)
            .count() as u32;
        let forced = u32::from(representative.ends_with(RANDOM_HIT));
        let random_flips = random_hits + random_secondaries - forced;

        Self {
            random_flips,
            random_secondaries,
            combinations: choose(i64::from(random_flips), i64::from(random_secondaries)),
            each: p_hit.powi(random_hits as i32) * (1.0 - p_hit).powi(random_secondaries as i32),
        }
    }
}

/// One-line overview of an enumeration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Summary {
    /// Number of groups.
    pub groups: usize,
    /// Largest secondary count found.
    pub max_secondary_shown: u32,
    /// [`theoretical_max_secondary`] for the configuration; `None` is unbounded.
    pub theoretical_max_secondary: Option<u64>,
    /// Sum of all group probabilities.
    pub total_probability: f64,
}

impl Summary {
    /// Summarizes the groups enumerated for `config`.
    #[must_use]
    pub fn new(config: &Configuration, groups: &[Group]) -> Self {
        Self {
            groups: groups.len(),
            max_secondary_shown: groups.last().map_or(0, |g| g.secondary_count),
            theoretical_max_secondary: theoretical_max_secondary(
                config.hits_to_win(),
                config.cycle(),
            ),
            total_probability: total(groups),
        }
    }
}
