//! The parser abstraction: results, the apply contract, and type erasure.
//!
//! A parser is anything that can be applied to an [`Input`] cursor and
//! yield a [`ParseResult`]. Parsers are stateless values: they own no
//! cursor, carry no session state, and may be applied to any number of
//! independent inputs, concurrently if desired. The working currency is
//! [`BoxedParser`], a named, cheaply-cloneable wrapper around a shared
//! apply closure; every combinator consumes and produces `BoxedParser`s.

use std::sync::Arc;

use crate::diagnostics::ParseError;
use crate::input::Input;

// ============================================================================
// PARSE RESULTS
// ============================================================================

/// A successful parse: the produced value and the residual cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<'a, T> {
    pub value: T,
    pub rest: Input<'a>,
}

/// The outcome of applying a parser: a value with its residual cursor, or
/// a [`ParseError`]. On failure no residual cursor is exposed; a caller
/// can never advance past a failed parser.
pub type ParseResult<'a, T> = Result<Parsed<'a, T>, ParseError>;

// ============================================================================
// PARSER ABSTRACTION
// ============================================================================

/// The capability every leaf parser and combinator implements.
pub trait Parser<T> {
    /// Applies this parser at `input`, producing a value and residual
    /// cursor or a failure.
    fn apply<'a>(&self, input: Input<'a>) -> ParseResult<'a, T>;

    /// A diagnostic name for this parser, used when composing the names of
    /// structural combinators.
    fn describe(&self) -> String;
}

type ApplyFn<T> = dyn for<'a> Fn(Input<'a>) -> ParseResult<'a, T> + Send + Sync;

/// A type-erased, shareable parser.
///
/// Cloning is an `Arc` bump, so grammar rules can be referenced from many
/// enclosing combinators without rebuilding them. The apply closure is
/// `Send + Sync`: a grammar built once may serve parse sessions on any
/// number of threads.
pub struct BoxedParser<T> {
    name: String,
    apply: Arc<ApplyFn<T>>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            apply: Arc::clone(&self.apply),
        }
    }
}

impl<T> std::fmt::Debug for BoxedParser<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedParser").field("name", &self.name).finish()
    }
}

impl<T> BoxedParser<T> {
    /// Wraps an apply function under a diagnostic name.
    pub fn new<F>(name: impl Into<String>, apply: F) -> Self
    where
        F: for<'a> Fn(Input<'a>) -> ParseResult<'a, T> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            apply: Arc::new(apply),
        }
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn apply<'a>(&self, input: Input<'a>) -> ParseResult<'a, T> {
        (self.apply)(input)
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

// ============================================================================
// DEFERRED RESOLUTION
// ============================================================================

/// Wraps a zero-argument generator so a grammar rule can reference itself,
/// directly or through other rules, without recursing at construction time.
///
/// The generator runs on every `apply` and its result is deliberately not
/// cached: construction cost of the inner parser graph recurs per call,
/// which keeps the wrapper trivially correct for mutually recursive rules.
///
/// # Examples
///
/// ```rust
/// use filament::combinators::token::lit;
/// use filament::combinators::{or, seq_left, seq_right};
/// use filament::{lazy, BoxedParser, Input, Parser};
///
/// // parens := "(" parens ")" | "x"
/// fn parens() -> BoxedParser<String> {
///     or(
///         seq_right(lit("("), seq_left(lazy(parens), lit(")"))),
///         lit("x"),
///     )
/// }
/// let result = parens().apply(Input::new("((x))")).unwrap();
/// assert_eq!(result.value, "x");
/// ```
pub fn lazy<T, F>(generate: F) -> BoxedParser<T>
where
    F: Fn() -> BoxedParser<T> + Send + Sync + 'static,
{
    BoxedParser::new("lazy", move |input| generate().apply(input))
}
