//! Filament: a small parser-combinator engine.
//!
//! A grammar is a graph of [`BoxedParser`] values built once from leaf
//! matchers ([`combinators::token::lit`], [`combinators::token::re`]) and
//! structural combinators (sequencing, ordered choice, repetition,
//! mapping), with recursive rules expressed through [`lazy`]. Applying the
//! root parser to an [`Input`] cursor threads that cursor through the graph
//! and yields a [`ParseResult`]: the produced value with the residual
//! cursor, or a [`ParseError`] describing what was expected and where.
//!
//! This is an ordered-choice (PEG-style) engine: alternation commits to the
//! first branch that succeeds, consumed input is never retried, and left
//! recursion is unsupported by design — write repetition instead.
//!
//! ```rust
//! use filament::combinators::token::{lit, re};
//! use filament::combinators::{rep, seq};
//! use filament::{Input, Parser};
//! use regex::Regex;
//!
//! let word = re(Regex::new(r"^[a-z]+").unwrap());
//! let list = seq(word.clone(), rep(lit(",").keep_right(word)));
//!
//! let parsed = list.apply(Input::new("alpha, beta, gamma")).unwrap();
//! assert_eq!(parsed.value.0, "alpha");
//! assert_eq!(parsed.value.1, vec!["beta", "gamma"]);
//! assert!(parsed.rest.is_at_end());
//! ```

pub use crate::diagnostics::{Found, ParseError};
pub use crate::input::{Input, Position};
pub use crate::parser::{lazy, BoxedParser, Parsed, ParseResult, Parser};

pub mod combinators;
pub mod diagnostics;
pub mod input;
pub mod parser;
