//! Position-tracking cursor over selector text.
//!
//! The scanner owns nothing but a byte offset into the borrowed input. All
//! lookahead is by `char`, so multi-byte identifiers are handled without
//! splitting code points.

/// A cursor over the selector source text.
#[derive(Debug, Clone)]
pub(crate) struct Scanner<'a> {
    /// The input string being scanned
    input: &'a str,
    /// Current byte offset in the input
    position: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) const fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Current byte offset.
    pub(crate) const fn position(&self) -> usize {
        self.position
    }

    pub(crate) const fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Peek at the next character without consuming it.
    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Peek at the character `offset` characters ahead of the cursor.
    pub(crate) fn peek_at(&self, offset: usize) -> Option<char> {
        self.rest().chars().nth(offset)
    }

    /// Consume and return the next character.
    pub(crate) fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Consume the next character if it is `expected`.
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.position += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume characters while `pred` holds and return them as a slice of
    /// the input.
    pub(crate) fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.position;
        let len = self
            .rest()
            .find(|c: char| !pred(c))
            .unwrap_or(self.input.len() - start);
        self.position += len;
        &self.input[start..self.position]
    }

    /// Skip whitespace and `/* ... */` comments.
    ///
    /// Comments do not nest. An unterminated comment consumes the rest of
    /// the input. Returns `true` if anything was skipped.
    pub(crate) fn skip_whitespace(&mut self) -> bool {
        let start = self.position;
        loop {
            let rest = self.rest();
            if let Some(c) = rest.chars().next()
                && c.is_whitespace()
            {
                self.position += c.len_utf8();
            } else if let Some(body) = rest.strip_prefix("/*") {
                self.position += match body.find("*/") {
                    Some(end) => 2 + end + 2,
                    None => rest.len(),
                };
            } else {
                break;
            }
        }
        self.position > start
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }
}
