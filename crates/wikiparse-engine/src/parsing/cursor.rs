/// A cursor for character-by-character parsing with byte position tracking.
///
/// Positions are byte offsets into `s`; every movement stays on a `char`
/// boundary so slicing with two cursor positions is always valid.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Moves the cursor back (or forward) to a previously observed position.
    pub fn reset(&mut self, pos: usize) {
        debug_assert!(self.s.is_char_boundary(pos));
        self.i = pos;
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// Peeks at the current character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Checks if the remaining input starts with the given literal.
    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    /// Advances by one character, returning the consumed character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes. Callers pass the length of a literal they
    /// have just matched with [`Cursor::starts_with`].
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Consumes the longest run of characters satisfying `pred`.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.i;
        let len = self
            .rest()
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map(|(idx, _)| idx)
            .unwrap_or(self.s.len() - start);
        self.i += len;
        &self.s[start..self.i]
    }
}
