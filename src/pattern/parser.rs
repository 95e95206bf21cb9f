// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F. (https://github.com/tomtom215/duckdb-behavioral)

//! Parser for cycle pattern strings.
//!
//! Parses patterns like `Y???L` into a [`Cycle`] of tokens that the
//! enumerator repeats indefinitely.

use std::fmt;

use serde::Serialize;

use crate::common::token::Token;
use crate::error::{ConfigError, Result};

/// A repeating token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[non_exhaustive]
pub struct Cycle {
    /// Tokens in cycle order.
    pub tokens: Vec<Token>,
}

impl Cycle {
    /// Creates a cycle from an explicit token list.
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Builds the cycle described by per-cycle counts: `guaranteed` hits
    /// followed by `random` tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use agahnim::pattern::parser::{parse_cycle, Cycle};
    ///
    /// assert_eq!(Cycle::from_counts(1, 3), parse_cycle("Y???").unwrap());
    /// ```
    #[must_use]
    pub fn from_counts(guaranteed: u32, random: u32) -> Self {
        let tokens = std::iter::repeat_n(Token::GuaranteedHit, guaranteed as usize)
            .chain(std::iter::repeat_n(Token::Random, random as usize))
            .collect();
        Self::new(tokens)
    }

    /// Number of tokens in one repetition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the cycle has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens of the given kind in one repetition.
    #[must_use]
    pub fn count(&self, kind: Token) -> usize {
        self.tokens.iter().filter(|&&t| t == kind).count()
    }

    /// Returns `true` if the cycle contains the given kind of token.
    #[must_use]
    pub fn contains(&self, kind: Token) -> bool {
        self.tokens.contains(&kind)
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{}", token.pattern_symbol())?;
        }
        Ok(())
    }
}

/// Parses a pattern string into a [`Cycle`].
///
/// Symbols are case-insensitive and whitespace is ignored. An empty
/// pattern yields an empty cycle.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidToken`] for any symbol other than
/// `Y`, `B`, `?` or `L`.
///
/// # Examples
///
/// ```
/// use agahnim::common::token::Token;
/// use agahnim::pattern::parser::parse_cycle;
///
/// let cycle = parse_cycle("Y?L").unwrap();
/// assert_eq!(
///     cycle.tokens,
///     vec![Token::GuaranteedHit, Token::Random, Token::Decorative]
/// );
/// ```
pub fn parse_cycle(input: &str) -> Result<Cycle> {
    let mut parser = Parser::new(input);
    Ok(Cycle::new(parser.parse()?))
}

struct Parser<'a> {
    input: std::iter::Peekable<std::iter::Enumerate<std::str::Chars<'a>>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input: input.chars().enumerate().peekable(),
        }
    }

    fn parse(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let Some((position, symbol)) = self.input.next() else {
                break;
            };
            let token =
                Token::from_symbol(symbol).ok_or(ConfigError::InvalidToken { symbol, position })?;
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn skip_whitespace(&mut self) {
        while self.input.next_if(|(_, c)| c.is_whitespace()).is_some() {}
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn display_then_parse_is_identity(pattern in "[YB?L]{0,12}") {
            let cycle = parse_cycle(&pattern).unwrap();
            prop_assert_eq!(cycle.len(), pattern.len());
            prop_assert_eq!(parse_cycle(&cycle.to_string()).unwrap(), cycle);
        }

        #[test]
        fn any_foreign_symbol_is_rejected(
            prefix in "[YB?L]{0,6}",
            bad in "[ACDE-KM-XZ0-9!#]",
        ) {
            let pattern = format!("{prefix}{bad}");
            let err = parse_cycle(&pattern).unwrap_err();
            let is_invalid_token = matches!(
                err,
                ConfigError::InvalidToken { position, .. } if position == prefix.len()
            );
            prop_assert!(is_invalid_token);
        }
    }
}
