//! Leaf parsers: exact-text and pattern matchers.
//!
//! Both leaf kinds skip a maximal run of leading whitespace before
//! attempting their match. The skipped run is consumed but never part of
//! the produced value. Skipping happens only here, never in structural
//! combinators, so whitespace is eaten immediately before a token attempt
//! and trailing whitespace after the final token of a parse stays in the
//! residual cursor.

use regex::Regex;

use crate::diagnostics::{Found, ParseError};
use crate::input::Input;
use crate::parser::{BoxedParser, Parsed};

// ============================================================================
// WHITESPACE SKIPPING
// ============================================================================

/// Skips a maximal run of leading whitespace.
///
/// Each leaf parser owns its own compiled skipper; there is no module-level
/// pattern singleton.
#[derive(Debug, Clone)]
struct Whitespace {
    pattern: Regex,
}

impl Whitespace {
    fn new() -> Self {
        // The pattern is a constant, so compilation cannot fail.
        Self {
            pattern: Regex::new(r"^\s+").expect("whitespace pattern is valid"),
        }
    }

    fn skip<'a>(&self, input: Input<'a>) -> Input<'a> {
        match self.pattern.find(input.source()) {
            Some(m) => input.advance(m.end()),
            None => input,
        }
    }
}

// ============================================================================
// LEAF PARSERS
// ============================================================================

/// Matches the exact text `expected` after skipping leading whitespace,
/// producing it as an owned string.
///
/// # Examples
///
/// ```rust
/// use filament::combinators::token::lit;
/// use filament::{Input, Parser};
///
/// let result = lit("AND").apply(Input::new("  AND rest")).unwrap();
/// assert_eq!(result.value, "AND");
/// assert_eq!(result.rest.source(), " rest");
/// ```
pub fn lit(expected: &str) -> BoxedParser<String> {
    let expected = expected.to_string();
    let whitespace = Whitespace::new();
    BoxedParser::new(format!("lit({expected})"), move |input| {
        let start = whitespace.skip(input);
        if start.source().starts_with(&expected) {
            let rest = start.advance(expected.len());
            return Ok(Parsed {
                value: expected.clone(),
                rest,
            });
        }
        Err(ParseError::LiteralMismatch {
            expected: expected.clone(),
            found: Found::at(start),
            at: start.position(),
        })
    })
}

/// Matches `pattern` anchored at the start of the whitespace-skipped
/// remainder, producing the matched substring.
///
/// A find that begins past offset 0 is a failure: this is a
/// leftmost-at-start match, not a search. Anchor patterns with `^` to skip
/// the fruitless scan of the rest of the input.
pub fn re(pattern: Regex) -> BoxedParser<String> {
    let whitespace = Whitespace::new();
    BoxedParser::new(format!("re({pattern})"), move |input| {
        let start = whitespace.skip(input);
        match pattern.find(start.source()) {
            Some(m) if m.start() == 0 => Ok(Parsed {
                value: m.as_str().to_string(),
                rest: start.advance(m.end()),
            }),
            _ => Err(ParseError::PatternMismatch {
                pattern: pattern.to_string(),
                at: start.position(),
            }),
        }
    })
}
