use std::borrow::Cow;

/// Marker for a failed grammar rule.
///
/// Failure is cheap: the details of what was expected are kept on the
/// [`Parser`](super::Parser) and only turned into a [`ParseError`] when a
/// whole run fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backtrack;

/// Result of a grammar rule.
pub type PResult<T> = Result<T, Backtrack>;

/// A failed parse run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("parse error at line {line}, column {column}: expected {}", .expected.join(" or "))]
pub struct ParseError {
    /// Byte offset of the furthest failure.
    pub position: usize,
    /// 1-based line of `position`.
    pub line: usize,
    /// 1-based column (in characters) of `position`.
    pub column: usize,
    /// What the grammar would have accepted at `position`, sorted.
    pub expected: Vec<String>,
}

impl ParseError {
    /// Error at byte offset `position` of `input`.
    ///
    /// A position past the end is clamped to the end, and one inside a
    /// multi-byte character moves back to that character's start.
    pub fn new(input: &str, position: usize, expected: Vec<String>) -> Self {
        let mut position = position.min(input.len());
        while !input.is_char_boundary(position) {
            position -= 1;
        }
        let before = &input[..position];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[line_start..].chars().count() + 1;
        Self {
            position,
            line,
            column,
            expected,
        }
    }
}

/// The furthest failure seen so far and everything expected there.
#[derive(Debug, Default, Clone)]
pub(crate) struct Expected {
    pub pos: usize,
    pub items: Vec<Cow<'static, str>>,
}

impl Expected {
    /// Whether a failure at `pos` would be kept.
    pub fn reaches(&self, pos: usize) -> bool {
        pos >= self.pos || self.items.is_empty()
    }

    pub fn record(&mut self, pos: usize, what: Cow<'static, str>) {
        if pos > self.pos || self.items.is_empty() {
            self.pos = pos;
            self.items.clear();
        }
        if pos == self.pos && !self.items.contains(&what) {
            self.items.push(what);
        }
    }

    pub fn into_error(self, input: &str) -> ParseError {
        let mut expected: Vec<String> = self.items.into_iter().map(Cow::into_owned).collect();
        expected.sort();
        ParseError::new(input, self.pos, expected)
    }
}
