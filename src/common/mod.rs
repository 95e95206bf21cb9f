// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/duckdb-behavioral)

//! Common types shared by the parser, the enumerator and the summaries.

pub mod token;
