//! End-to-end tests driving the engine through a consumer grammar: a small
//! boolean filter-expression language with field comparisons, `IS` checks,
//! `NOT(..)`, and `AND`/`OR` chains with parenthesized grouping.
//!
//! Grammar (right-recursive, cycles broken with `lazy`):
//!
//! ```text
//! query  := term ("OR" term)*
//! term   := factor ("AND" factor)*
//! factor := simple | "(" query ")" | "NOT" "(" query ")"
//! simple := field "IS" value | field op value
//! ```

use filament::combinators::token::{lit, re};
use filament::combinators::{map, or, rep, seq, seq_left, seq_right};
use filament::{lazy, BoxedParser, Input, ParseError, Parser};
use regex::Regex;

// ---
// The consumer's AST
// ---

#[derive(Debug, Clone, PartialEq)]
enum Filter {
    Not(Box<Filter>),
    Or(Vec<Filter>),
    And(Vec<Filter>),
    Unary {
        field: String,
        value: String,
    },
    Binary {
        field: String,
        op: String,
        value: String,
    },
}

// ---
// Tokens
// ---

fn field_name() -> BoxedParser<String> {
    re(Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap())
}

fn field_value() -> BoxedParser<String> {
    re(Regex::new(r#"^"([^"\x00-\x1F\x7F\\]|\\[\\'"bfnrt]|\\u[a-fA-F0-9]{4})*""#).unwrap())
}

fn binary_op() -> BoxedParser<String> {
    // Deliberately unanchored: the leaf's at-start check must reject
    // matches found further into the input.
    re(Regex::new("eq|neq|lte|gte|lt|gt").unwrap())
}

fn strip_quotes(quoted: &str) -> String {
    quoted[1..quoted.len() - 1].to_string()
}

// ---
// Grammar rules
// ---

fn binary_expr() -> BoxedParser<Filter> {
    map(
        seq(seq(field_name(), binary_op()), field_value()),
        |((field, op), value)| Filter::Binary {
            field,
            op,
            value: strip_quotes(&value),
        },
    )
}

fn unary_expr() -> BoxedParser<Filter> {
    map(
        seq(seq_left(field_name(), lit("IS")), field_value()),
        |(field, value)| Filter::Unary {
            field,
            value: strip_quotes(&value),
        },
    )
}

fn simple_expr() -> BoxedParser<Filter> {
    or(unary_expr(), binary_expr())
}

fn not_expr() -> BoxedParser<Filter> {
    lazy(|| {
        map(
            seq(seq(lit("NOT"), lit("(")), seq(query(), lit(")"))),
            |(_, (inner, _))| Filter::Not(Box::new(inner)),
        )
    })
}

fn gather(first: Filter, mut rest: Vec<Filter>, wrap: fn(Vec<Filter>) -> Filter) -> Filter {
    if rest.is_empty() {
        return first;
    }
    let mut all = Vec::with_capacity(rest.len() + 1);
    all.push(first);
    all.append(&mut rest);
    wrap(all)
}

fn query() -> BoxedParser<Filter> {
    lazy(|| {
        map(
            seq(term(), rep(seq_right(lit("OR"), term()))),
            |(first, rest)| gather(first, rest, Filter::Or),
        )
    })
}

fn term() -> BoxedParser<Filter> {
    lazy(|| {
        map(
            seq(factor(), rep(seq_right(lit("AND"), factor()))),
            |(first, rest)| gather(first, rest, Filter::And),
        )
    })
}

fn factor() -> BoxedParser<Filter> {
    lazy(|| {
        or(
            simple_expr(),
            or(
                seq_right(lit("("), seq_left(query(), lit(")"))),
                not_expr(),
            ),
        )
    })
}

fn parse_full(text: &str) -> Filter {
    let parsed = query().apply(Input::new(text)).unwrap();
    assert_eq!(parsed.rest.position().offset, text.len());
    parsed.value
}

fn binary(field: &str, op: &str, value: &str) -> Filter {
    Filter::Binary {
        field: field.into(),
        op: op.into(),
        value: value.into(),
    }
}

// ---
// End-to-end scenarios
// ---

#[test]
fn test_not_wrapping_binary_expression() {
    assert_eq!(
        parse_full(r#"NOT(fieldD gte "123")"#),
        Filter::Not(Box::new(binary("fieldD", "gte", "123")))
    );
}

#[test]
fn test_nested_grouping_unwraps_redundant_parentheses() {
    let filter = parse_full(r#"((fieldA eq "1") AND (((fieldB lt "2")))) OR (fieldC gte "3")"#);
    assert_eq!(
        filter,
        Filter::Or(vec![
            Filter::And(vec![
                binary("fieldA", "eq", "1"),
                binary("fieldB", "lt", "2"),
            ]),
            binary("fieldC", "gte", "3"),
        ])
    );
}

#[test]
fn test_unary_is_expression() {
    assert_eq!(
        parse_full(r#"fieldX IS "on""#),
        Filter::Unary {
            field: "fieldX".into(),
            value: "on".into(),
        }
    );
}

#[test]
fn test_single_term_has_no_wrapper() {
    assert_eq!(
        parse_full(r#"fieldA eq "1""#),
        binary("fieldA", "eq", "1")
    );
}

#[test]
fn test_and_or_precedence() {
    // AND binds tighter than OR.
    let filter = parse_full(r#"a eq "1" AND b eq "2" OR c eq "3""#);
    assert_eq!(
        filter,
        Filter::Or(vec![
            Filter::And(vec![binary("a", "eq", "1"), binary("b", "eq", "2")]),
            binary("c", "eq", "3"),
        ])
    );
}

#[test]
fn test_nested_not() {
    assert_eq!(
        parse_full(r#"NOT(NOT(a eq "1"))"#),
        Filter::Not(Box::new(Filter::Not(Box::new(binary("a", "eq", "1")))))
    );
}

#[test]
fn test_escaped_quotes_in_value() {
    assert_eq!(
        parse_full(r#"msg eq "say \"hi\"""#),
        binary("msg", "eq", r#"say \"hi\""#)
    );
}

// ---
// Failure scenarios
// ---

#[test]
fn test_unrecognized_operator_reports_pattern_mismatch() {
    let err = query().apply(Input::new(r#"fieldA qq "1""#)).unwrap_err();
    match err {
        ParseError::PatternMismatch { pattern, at } => {
            assert_eq!(pattern, "eq|neq|lte|gte|lt|gt");
            // Raised after the field name and its trailing space.
            assert_eq!(at.offset, 7);
        }
        other => panic!("expected a pattern mismatch, got: {other}"),
    }
}

#[test]
fn test_unterminated_group_reports_missing_paren() {
    let err = query().apply(Input::new(r#"(fieldA eq "1""#)).unwrap_err();
    assert!(matches!(
        err,
        ParseError::LiteralMismatch { ref expected, .. } if expected == ")"
    ));
}

#[test]
fn test_partial_parse_leaves_residual_input() {
    // A query followed by unparseable trailing text still succeeds; the
    // residual cursor shows how far it got.
    let parsed = query()
        .apply(Input::new(r#"fieldA eq "1" ???"#))
        .unwrap();
    assert_eq!(parsed.value, binary("fieldA", "eq", "1"));
    assert_eq!(parsed.rest.source(), " ???");
}
