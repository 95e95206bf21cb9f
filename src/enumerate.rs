// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/duckdb-behavioral)

//! Exhaustive enumeration of outcome sequences.
//!
//! Walks the infinite repetition of a [`Cycle`](crate::pattern::parser::Cycle)
//! one token at a time until the hit target is reached, branching in two at
//! every random token. Each terminal path is recorded with its exact
//! probability into the [`Group`] keyed by its secondary count.
//!
//! # Example
//!
//! ```
//! use agahnim::config::{Configuration, RandomBudget};
//! use agahnim::enumerate::enumerate;
//!
//! let config = Configuration::from_pattern(2, "Y?L", 0.5, RandomBudget::Unbounded).unwrap();
//! let groups = enumerate(&config);
//!
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[0].sequences, vec!["Yy"]);
//! assert_eq!(groups[1].sequences, vec!["YbLY"]);
//! assert_eq!(groups[0].probability, 0.5);
//! ```

use std::collections::BTreeMap;

use log::{debug, trace};
use serde::Serialize;

use crate::common::token::{
    Token, DECORATIVE, GUARANTEED_HIT, GUARANTEED_SECONDARY, RANDOM_HIT, RANDOM_SECONDARY,
};
use crate::config::Configuration;

/// All terminal sequences that end with the same secondary count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct Group {
    /// Secondary count shared by every sequence in the group.
    pub secondary_count: u32,
    /// Emitted sequence labels, sorted lexicographically.
    pub sequences: Vec<String>,
    /// Sum of the path probabilities of `sequences`.
    pub probability: f64,
}

impl Group {
    const fn empty(secondary_count: u32) -> Self {
        Self {
            secondary_count,
            sequences: Vec::new(),
            probability: 0.0,
        }
    }

    fn record(&mut self, path: String, probability: f64) {
        self.sequences.push(path);
        self.probability += probability;
    }
}

/// One branch of the depth-first search.
///
/// Invariants along a path: `probability` stays in `(0, 1]`, `hits` and
/// `secondary` never decrease.
#[derive(Debug, Clone)]
struct SearchState {
    /// Index of the next token in the cycle.
    position: usize,
    hits: u32,
    secondary: u32,
    path: String,
    probability: f64,
    random_used: u32,
}

impl SearchState {
    const fn root() -> Self {
        Self {
            position: 0,
            hits: 0,
            secondary: 0,
            path: String::new(),
            probability: 1.0,
            random_used: 0,
        }
    }
}

/// Enumerates every outcome sequence that reaches the hit target.
///
/// Returns groups in ascending secondary-count order, each with its
/// sequences sorted lexicographically. The output depends only on
/// `config`, so repeated calls return identical results.
///
/// # Behavior
///
/// - A hit target of 0 yields a single group: secondary count 0, one empty
///   sequence, probability 1.
/// - A cycle that can never produce a hit yields no groups.
/// - A branch that reaches a random token after exhausting the random
///   budget is dropped. The missing mass shows up as a probability total
///   below 1; it is not an error.
/// - Branches whose probability is exactly 0 (`p_hit` of 0 or 1) are not
///   explored.
///
/// # Algorithm
///
/// Depth-first search over an explicit stack of search states. Guaranteed
/// and decorative tokens extend the current state in place; a random token
/// pushes its secondary child and continues with its hit child. Path count
/// is bounded by `2^budget`, or by the random tokens met before the
/// guaranteed hits alone finish every path when the budget is unbounded.
pub fn enumerate(config: &Configuration) -> Vec<Group> {
    let target = config.hits_to_win();
    if target == 0 {
        return vec![Group {
            secondary_count: 0,
            sequences: vec![String::new()],
            probability: 1.0,
        }];
    }
    if !config.can_make_progress() {
        debug!(
            "cycle '{}' cannot produce a hit; no sequences",
            config.cycle()
        );
        return Vec::new();
    }

    let tokens = &config.cycle().tokens;
    let budget = config.budget();
    let p_hit = config.p_hit();

    let mut groups: BTreeMap<u32, Group> = BTreeMap::new();
    let mut stack = vec![SearchState::root()];
    let mut terminals: usize = 0;
    let mut pruned: usize = 0;

    'search: while let Some(mut state) = stack.pop() {
        loop {
            let token = tokens[state.position];
            state.position = (state.position + 1) % tokens.len();

            match token {
                Token::GuaranteedHit => {
                    state.hits += 1;
                    state.path.push(GUARANTEED_HIT);
                }
                Token::GuaranteedSecondary => {
                    state.secondary += 1;
                    state.path.push(GUARANTEED_SECONDARY);
                }
                Token::Decorative => state.path.push(DECORATIVE),
                Token::Random => {
                    if !budget.allows(state.random_used) {
                        trace!("budget exhausted at '{}'", state.path);
                        pruned += 1;
                        continue 'search;
                    }
                    state.random_used += 1;

                    let miss_probability = state.probability * (1.0 - p_hit);
                    if miss_probability > 0.0 {
                        let mut miss = state.clone();
                        miss.secondary += 1;
                        miss.path.push(RANDOM_SECONDARY);
                        miss.probability = miss_probability;
                        stack.push(miss);
                    }

                    state.probability *= p_hit;
                    if state.probability <= 0.0 {
                        continue 'search;
                    }
                    state.hits += 1;
                    state.path.push(RANDOM_HIT);
                }
            }

            if state.hits >= target {
                terminals += 1;
                groups
                    .entry(state.secondary)
                    .or_insert_with(|| Group::empty(state.secondary))
                    .record(state.path, state.probability);
                continue 'search;
            }
        }
    }

    let mut result: Vec<Group> = groups.into_values().collect();
    for group in &mut result {
        group.sequences.sort_unstable();
    }

    debug!(
        "enumerated '{}' to {} hits: {} sequences in {} groups, {} branches pruned, mass {}",
        config.cycle(),
        target,
        terminals,
        result.len(),
        pruned,
        result.iter().map(|g| g.probability).sum::<f64>()
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::token::is_secondary_symbol;
    use crate::config::RandomBudget;

    fn run(hits: i64, pattern: &str, p: f64, budget: RandomBudget) -> Vec<Group> {
        enumerate(&Configuration::from_pattern(hits, pattern, p, budget).unwrap())
    }

    fn total(groups: &[Group]) -> f64 {
        groups.iter().map(|g| g.probability).sum()
    }

    #[test]
    fn test_zero_threshold() {
        for pattern in ["Y???L", "", "BL"] {
            let groups = run(0, pattern, 0.5, RandomBudget::Limited(4));
            assert_eq!(groups.len(), 1, "pattern {pattern:?}");
            assert_eq!(groups[0].secondary_count, 0);
            assert_eq!(groups[0].sequences, vec![String::new()]);
            assert_eq!(groups[0].probability, 1.0);
        }
    }

    #[test]
    fn test_no_hit_tokens_yields_nothing() {
        assert!(run(3, "BL", 0.5, RandomBudget::Unbounded).is_empty());
        assert!(run(3, "", 0.5, RandomBudget::Unbounded).is_empty());
        assert!(run(1, "B?L", 0.0, RandomBudget::Unbounded).is_empty());
    }

    #[test]
    fn test_single_guaranteed_hit() {
        let groups = run(1, "Y?L", 0.5, RandomBudget::Unbounded);
        assert_eq!(groups.len(), 1);
        // Nothing is appended after the threshold-crossing token
        assert_eq!(groups[0].sequences, vec!["Y"]);
        assert_eq!(groups[0].probability, 1.0);
    }

    #[test]
    fn test_two_hits_one_random() {
        let groups = run(2, "Y?L", 0.5, RandomBudget::Unbounded);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].secondary_count, 0);
        assert_eq!(groups[0].sequences, vec!["Yy"]);
        assert_eq!(groups[0].probability, 0.5);
        assert_eq!(groups[1].secondary_count, 1);
        assert_eq!(groups[1].sequences, vec!["YbLY"]);
        assert_eq!(groups[1].probability, 0.5);
    }

    #[test]
    fn test_guaranteed_secondary_counts() {
        let groups = run(2, "BY", 0.5, RandomBudget::Unbounded);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].secondary_count, 2);
        assert_eq!(groups[0].sequences, vec!["BYBY"]);
        assert_eq!(groups[0].probability, 1.0);
    }

    #[test]
    fn test_certain_hit_prunes_misses() {
        let groups = run(3, "Y?", 1.0, RandomBudget::Unbounded);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].sequences, vec!["YyY"]);
        assert_eq!(groups[0].probability, 1.0);
    }

    #[test]
    fn test_certain_miss_prunes_hits() {
        let groups = run(2, "Y?", 0.0, RandomBudget::Unbounded);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].secondary_count, 1);
        assert_eq!(groups[0].sequences, vec!["YbY"]);
        assert_eq!(groups[0].probability, 1.0);
    }

    #[test]
    fn test_random_only_with_certain_hits() {
        let groups = run(3, "?", 1.0, RandomBudget::Unbounded);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].sequences, vec!["yyy"]);
    }

    #[test]
    fn test_biased_probabilities() {
        let groups = run(1, "?", 0.25, RandomBudget::Limited(2));
        // y (0.25), by (0.75 * 0.25); bb is pruned at the third flip
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].sequences, vec!["y"]);
        assert!((groups[0].probability - 0.25).abs() < 1e-12);
        assert_eq!(groups[1].sequences, vec!["by"]);
        assert!((groups[1].probability - 0.1875).abs() < 1e-12);
        assert!((total(&groups) - 0.4375).abs() < 1e-12);
    }

    #[test]
    fn test_default_scenario() {
        let groups = run(6, "Y???L", 0.5, RandomBudget::Limited(16));

        let counts: Vec<u32> = groups.iter().map(|g| g.secondary_count).collect();
        assert_eq!(counts, (0..=15).collect::<Vec<u32>>());

        // Zero secondaries: every flip in the first cycle hits, then one more
        assert_eq!(groups[0].sequences, vec!["YyyyLYy"]);
        assert!((groups[0].probability - 1.0 / 16.0).abs() < 1e-15);

        // Fifteen secondaries: every flip misses, the sixth Y finishes
        assert_eq!(groups[15].sequences, vec!["YbbbL".repeat(5) + "Y"]);
        assert!((groups[15].probability - 2f64.powi(-15)).abs() < 1e-18);

        // The budget of 16 never binds: at most 15 flips happen
        assert!((total(&groups) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_truncation_is_silent_but_measurable() {
        let full = run(6, "Y???L", 0.5, RandomBudget::Limited(16));
        let tiny = run(6, "Y???L", 0.5, RandomBudget::Limited(1));
        let partial = run(6, "Y???L", 0.5, RandomBudget::Limited(8));

        assert!(total(&tiny) < total(&full));
        assert!(tiny.is_empty());
        let partial_total = total(&partial);
        assert!(partial_total > 0.0 && partial_total < 1.0 - 1e-6);
    }

    #[test]
    fn test_counts_match_budget_sugar() {
        let from_counts = enumerate(
            &Configuration::from_counts(4, 1, 2, 0.5, RandomBudget::Unbounded).unwrap(),
        );
        let from_pattern = run(4, "Y??", 0.5, RandomBudget::Unbounded);
        assert_eq!(from_counts, from_pattern);
    }

    #[test]
    fn test_sequences_sorted_and_groups_ascending() {
        let groups = run(3, "?B?L", 0.5, RandomBudget::Limited(6));
        assert!(groups
            .windows(2)
            .all(|w| w[0].secondary_count < w[1].secondary_count));
        for g in &groups {
            assert!(g.sequences.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_group_secondary_matches_symbols() {
        let groups = run(4, "Y?B?L", 0.4, RandomBudget::Unbounded);
        for g in &groups {
            for seq in &g.sequences {
                let n = seq.chars().filter(|&c| is_secondary_symbol(c)).count();
                assert_eq!(n as u32, g.secondary_count, "sequence {seq}");
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let config = Configuration::from_pattern(5, "Y??L?", 0.3, RandomBudget::Limited(9)).unwrap();
        assert_eq!(enumerate(&config), enumerate(&config));
    }
}
