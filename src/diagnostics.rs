//! Parse failure diagnostics.
//!
//! Every failure mode of the engine is a variant of [`ParseError`], built
//! on `thiserror` for the error plumbing and `miette` for diagnostic codes.
//! There are exactly three kinds, matching what the combinators can raise:
//! a literal that did not match, a pattern that did not match, and a
//! bounded repetition that came up short. Intermediate combinators never
//! wrap or annotate errors; they propagate them unchanged, so the message a
//! caller sees is the one the failing leaf (or repetition) produced.

use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

use crate::input::{Input, Position};

/// What a failing leaf parser ran into instead of its expected text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    Char(char),
    EndOfInput,
}

impl Found {
    /// The first character of the remaining input, or the end-of-input
    /// marker when nothing remains.
    pub fn at(input: Input<'_>) -> Self {
        match input.source().chars().next() {
            Some(c) => Found::Char(c),
            None => Found::EndOfInput,
        }
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Char(c) => write!(f, "'{c}'"),
            Found::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Unified error type for all parse failures.
///
/// Each variant carries the position the failure was detected at, measured
/// after any whitespace skipping, so alternation can compare how far two
/// failing branches progressed.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    /// An exact-text leaf found something other than its expected string.
    #[error("'{expected}' expected but {found} found at {at}")]
    #[diagnostic(code(filament::literal_mismatch))]
    LiteralMismatch {
        expected: String,
        found: Found,
        at: Position,
    },

    /// A pattern leaf found no match at the current position.
    #[error("no match for pattern `{pattern}` at {at}")]
    #[diagnostic(code(filament::pattern_mismatch))]
    PatternMismatch { pattern: String, at: Position },

    /// A bounded repetition stopped before reaching its minimum count.
    #[error("expected at least {min} repetitions, got {actual} at {at}")]
    #[diagnostic(
        code(filament::repetition_count),
        help("the repeated parser stopped matching before the required minimum")
    )]
    RepetitionCount {
        min: usize,
        actual: usize,
        at: Position,
    },
}

impl ParseError {
    /// The position this failure was raised at.
    pub fn position(&self) -> Position {
        match self {
            ParseError::LiteralMismatch { at, .. } => *at,
            ParseError::PatternMismatch { at, .. } => *at,
            ParseError::RepetitionCount { at, .. } => *at,
        }
    }
}
