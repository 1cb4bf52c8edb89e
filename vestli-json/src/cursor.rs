// SPDX-License-Identifier: Apache-2.0

/// A scan position within the input text.
///
/// Wraps the borrowed input together with the current index, which are always
/// used together. The input ends at the end of the slice or at the first NUL
/// byte, whichever comes first.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
        Self {
            data: &data[..end],
            pos: 0,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Byte at the current position, or `None` at the terminator.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Advances by one byte. Never moves past the terminator.
    pub fn bump(&mut self) {
        self.advance(1);
    }

    /// Advances by `n` bytes, clamped to the terminator.
    pub fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.data.len());
    }

    /// Consumes `byte` if it is next. Returns whether it was consumed.
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes `literal` if the remaining input starts with it.
    pub fn eat_literal(&mut self, literal: &[u8]) -> bool {
        if self.remaining().starts_with(literal) {
            self.advance(literal.len());
            true
        } else {
            false
        }
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if !is_space(b) {
                break;
            }
            self.bump();
        }
    }

    /// The unread input, up to the terminator.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Input between two absolute positions, empty when out of bounds.
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        self.data.get(start..end).unwrap_or(&[])
    }
}

/// Whitespace as the C locale classifies it, vertical tab and form feed included.
pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminator_is_nul_or_end() {
        let cursor = Cursor::new(b"ab\0cd");
        assert_eq!(cursor.remaining(), b"ab");

        let cursor = Cursor::new(b"abc");
        assert_eq!(cursor.remaining(), b"abc");
    }

    #[test]
    fn test_advance_clamps_at_end() {
        let mut cursor = Cursor::new(b"tr");
        assert!(!cursor.eat_literal(b"true"));
        assert_eq!(cursor.pos(), 0);

        cursor.advance(10);
        assert_eq!(cursor.pos(), 2);
        assert_eq!(cursor.peek(), None);

        cursor.bump();
        assert_eq!(cursor.pos(), 2);
    }

    #[test]
    fn test_skip_whitespace_includes_vertical_tab_and_form_feed() {
        let mut cursor = Cursor::new(b" \t\r\n\x0b\x0c1");
        cursor.skip_whitespace();
        assert_eq!(cursor.peek(), Some(b'1'));
        assert_eq!(cursor.pos(), 6);
    }

    #[test]
    fn test_eat_and_slice() {
        let mut cursor = Cursor::new(b"[1]");
        assert!(!cursor.eat(b'{'));
        assert!(cursor.eat(b'['));
        assert_eq!(cursor.peek(), Some(b'1'));
        assert_eq!(cursor.slice(0, 2), b"[1");
        assert_eq!(cursor.slice(2, 9), b"");
    }
}
