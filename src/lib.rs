// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/duckdb-behavioral)

//! # `agahnim` — Exact Outcome Enumeration for Hit-Accumulation Mechanics
//!
//! Enumerates every way a cyclic pattern of guaranteed and random events can
//! play out until a target number of hits is reached, groups the resulting
//! sequences by how many secondary outcomes ("blue balls") they collected,
//! and attaches an exact probability to each group.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`pattern`] | Parses cycle patterns such as `Y???L` |
//! | [`config`] | Validated input: hit target, cycle, hit probability, random budget |
//! | [`enumerate`] | Depth-first enumeration into probability-weighted groups |
//! | [`fraction`] | Continued-fraction approximation for display (`1/16`) |
//! | [`combinatorics`] | Binomial coefficients |
//! | [`summary`] | Distribution statistics and per-group breakdowns |
//!
//! ## Usage
//!
//! ```
//! use agahnim::config::{Configuration, RandomBudget};
//! use agahnim::enumerate::enumerate;
//! use agahnim::fraction::format_probability;
//!
//! let config = Configuration::from_pattern(6, "Y???L", 0.5, RandomBudget::Limited(16)).unwrap();
//! let groups = enumerate(&config);
//!
//! assert_eq!(groups[0].secondary_count, 0);
//! assert_eq!(format_probability(groups[0].probability), "1/16 (6.250%)");
//! ```

pub mod combinatorics;
pub mod common;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod fraction;
pub mod pattern;
pub mod summary;
