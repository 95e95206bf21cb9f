// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/duckdb-behavioral)

//! Cycle patterns: the textual front-end for the enumerator.
//!
//! # Pattern Syntax
//!
//! ```text
//! Y   — guaranteed hit (yellow ball)
//! B   — guaranteed secondary (blue balls)
//! ?   — random: hit with probability p, secondary otherwise
//! L   — decorative marker (lightning), no effect on counts
//! ```
//!
//! Symbols are case-insensitive; whitespace is ignored. The count-based
//! front-end ("G guaranteed hits and R random tokens per cycle") compiles
//! to the same representation through [`parser::Cycle::from_counts`].

pub mod parser;
