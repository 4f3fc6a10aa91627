//! Input cursor for parse sessions.
//!
//! A cursor is an immutable view of the remaining source text plus the
//! position reached so far. Advancing never mutates: it produces a fresh
//! cursor over the unconsumed suffix, with line/column bookkeeping derived
//! by scanning the consumed span for newlines.

use std::fmt;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// A location in the original source text.
///
/// `offset` counts consumed bytes from the start of the source; `line` and
/// `column` count characters, with `\n` starting a new line at column 0.
/// All three are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Immutable parse cursor: the remaining source text and the position it
/// starts at.
///
/// Cursors are `Copy` values; every advance yields a new cursor and leaves
/// the old one valid. Within one parse session,
/// `original_len == position().offset + source().len()` always holds.
///
/// # Examples
///
/// ```rust
/// use filament::Input;
/// let input = Input::new("ab\ncd");
/// let rest = input.advance(3);
/// assert_eq!(rest.source(), "cd");
/// assert_eq!(rest.position().line, 1);
/// assert_eq!(rest.position().column, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Input<'a> {
    source: &'a str,
    position: Position,
}

// ============================================================================
// PUBLIC API
// ============================================================================

impl<'a> Input<'a> {
    /// Creates a cursor at the start of `text` (offset/line/column all 0).
    pub fn new(text: &'a str) -> Self {
        Self {
            source: text,
            position: Position::default(),
        }
    }

    /// The remaining, unconsumed source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The position of the first remaining byte.
    pub fn position(&self) -> Position {
        self.position
    }

    /// True if no input remains.
    pub fn is_at_end(&self) -> bool {
        self.source.is_empty()
    }

    /// Consumes the first `consumed` bytes, returning the cursor over the
    /// suffix with line/column recomputed from the consumed span.
    ///
    /// `consumed` must be at most `source().len()` and fall on a character
    /// boundary. Leaf parsers uphold this by only ever advancing by the
    /// byte length of text they actually matched.
    pub fn advance(self, consumed: usize) -> Input<'a> {
        debug_assert!(consumed <= self.source.len());
        let (eaten, rest) = self.source.split_at(consumed);
        let mut line = self.position.line;
        let mut column = self.position.column;
        for ch in eaten.chars() {
            if ch == '\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }
        Input {
            source: rest,
            position: Position {
                offset: self.position.offset + consumed,
                line,
                column,
            },
        }
    }
}
