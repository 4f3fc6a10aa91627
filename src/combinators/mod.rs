//! Structural combinators: sequencing, ordered choice, repetition, mapping.
//!
//! Every combinator here is a pure function from parsers to a new parser.
//! They thread a single cursor through their stages in order and never
//! retry consumed input: when a later stage fails, the whole branch fails,
//! and whatever earlier stages consumed stays consumed for that attempt.
//! Only [`or`] intercepts a failure, and it restarts its alternative from
//! the original cursor, not from wherever the first branch got stuck.
//!
//! Combinators never skip whitespace; that happens exclusively inside the
//! leaf parsers in [`token`].

pub mod token;

use crate::diagnostics::ParseError;
use crate::parser::{BoxedParser, Parsed, Parser};

// ============================================================================
// SEQUENCING
// ============================================================================

/// Applies `p1` then `p2` on `p1`'s residual cursor, pairing both values.
/// Fails as soon as either stage fails.
pub fn seq<A, B>(p1: BoxedParser<A>, p2: BoxedParser<B>) -> BoxedParser<(A, B)>
where
    A: 'static,
    B: 'static,
{
    let name = format!("seq({}, {})", p1.describe(), p2.describe());
    BoxedParser::new(name, move |input| {
        let first = p1.apply(input)?;
        let second = p2.apply(first.rest)?;
        Ok(Parsed {
            value: (first.value, second.value),
            rest: second.rest,
        })
    })
}

/// Sequencing that keeps only the left value. `p2` must still succeed and
/// its consumption still advances the cursor.
pub fn seq_left<A, B>(p1: BoxedParser<A>, p2: BoxedParser<B>) -> BoxedParser<A>
where
    A: 'static,
    B: 'static,
{
    let name = format!("seq_left({}, {})", p1.describe(), p2.describe());
    BoxedParser::new(name, move |input| {
        let first = p1.apply(input)?;
        let second = p2.apply(first.rest)?;
        Ok(Parsed {
            value: first.value,
            rest: second.rest,
        })
    })
}

/// Sequencing that keeps only the right value.
pub fn seq_right<A, B>(p1: BoxedParser<A>, p2: BoxedParser<B>) -> BoxedParser<B>
where
    A: 'static,
    B: 'static,
{
    let name = format!("seq_right({}, {})", p1.describe(), p2.describe());
    BoxedParser::new(name, move |input| {
        let first = p1.apply(input)?;
        p2.apply(first.rest)
    })
}

// ============================================================================
// ORDERED CHOICE
// ============================================================================

/// Ordered choice: tries `p1` from the original cursor and commits to it on
/// success; otherwise tries `p2` from the same original cursor.
///
/// When both branches fail, the reported error is the one raised furthest
/// into the input, with ties going to the second branch. A branch that
/// consumed several tokens before failing is almost always the one the
/// grammar author meant, so its error is the useful one to surface.
pub fn or<T: 'static>(p1: BoxedParser<T>, p2: BoxedParser<T>) -> BoxedParser<T> {
    let name = format!("or({}, {})", p1.describe(), p2.describe());
    BoxedParser::new(name, move |input| {
        let first_err = match p1.apply(input) {
            Ok(parsed) => return Ok(parsed),
            Err(e) => e,
        };
        p2.apply(input).map_err(|second_err| {
            if first_err.position().offset > second_err.position().offset {
                first_err
            } else {
                second_err
            }
        })
    })
}

// ============================================================================
// REPETITION
// ============================================================================

/// Zero-or-more repetition. Applies `p` until it fails, collecting the
/// values in order; the failing attempt's consumption is discarded and the
/// last successful cursor is returned. Never fails: zero matches yield an
/// empty vector and an unadvanced cursor.
///
/// A successful sub-match that consumed no input terminates the loop
/// without being collected; otherwise a zero-width `p` would repeat from
/// the same position forever.
pub fn rep<A: 'static>(p: BoxedParser<A>) -> BoxedParser<Vec<A>> {
    let name = format!("rep({})", p.describe());
    BoxedParser::new(name, move |input| {
        let mut values = Vec::new();
        let mut rest = input;
        while let Ok(parsed) = p.apply(rest) {
            if parsed.rest.position().offset == rest.position().offset {
                break;
            }
            values.push(parsed.value);
            rest = parsed.rest;
        }
        Ok(Parsed { value: values, rest })
    })
}

/// Bounded repetition: applies `p` at most `max` times, then fails with a
/// repetition-count error if fewer than `min` applications succeeded.
/// Shares [`rep`]'s zero-width termination guard.
pub fn rep_n_m<A: 'static>(p: BoxedParser<A>, min: usize, max: usize) -> BoxedParser<Vec<A>> {
    let name = format!("rep_n_m({}, {min}, {max})", p.describe());
    BoxedParser::new(name, move |input| {
        let mut values = Vec::new();
        let mut rest = input;
        for _ in 0..max {
            let Ok(parsed) = p.apply(rest) else { break };
            if parsed.rest.position().offset == rest.position().offset {
                break;
            }
            values.push(parsed.value);
            rest = parsed.rest;
        }
        if values.len() < min {
            return Err(ParseError::RepetitionCount {
                min,
                actual: values.len(),
                at: rest.position(),
            });
        }
        Ok(Parsed { value: values, rest })
    })
}

// ============================================================================
// MAPPING
// ============================================================================

/// Transforms the value of a successful parse, leaving the residual cursor
/// untouched. `f` must be total over `A`; it introduces no failure mode.
pub fn map<A, B, F>(p: BoxedParser<A>, f: F) -> BoxedParser<B>
where
    A: 'static,
    B: 'static,
    F: Fn(A) -> B + Send + Sync + 'static,
{
    let name = format!("map({})", p.describe());
    BoxedParser::new(name, move |input| {
        let parsed = p.apply(input)?;
        Ok(Parsed {
            value: f(parsed.value),
            rest: parsed.rest,
        })
    })
}

// ============================================================================
// METHOD SUGAR
// ============================================================================

/// Method forms of the combinators, for fluent grammar construction.
/// Each delegates to the free function of the same shape.
impl<T: 'static> BoxedParser<T> {
    /// `self` then `other`, keeping both values. See [`seq`].
    pub fn then<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<(T, U)> {
        seq(self, other)
    }

    /// `self` then `other`, keeping `self`'s value. See [`seq_left`].
    pub fn keep_left<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<T> {
        seq_left(self, other)
    }

    /// `self` then `other`, keeping `other`'s value. See [`seq_right`].
    pub fn keep_right<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<U> {
        seq_right(self, other)
    }

    /// Ordered choice with `other`. See [`or`].
    pub fn or(self, other: BoxedParser<T>) -> BoxedParser<T> {
        or(self, other)
    }

    /// Value transform. See [`map`].
    pub fn map<U, F>(self, f: F) -> BoxedParser<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        map(self, f)
    }
}
