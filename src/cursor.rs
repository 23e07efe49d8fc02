//! Byte cursor for line splitting and line classification.
//!
//! Index-based over a borrowed slice. Markers and line breaks are ASCII
//! and whitespace is skipped a whole character at a time, so every
//! position a cursor stops at is a UTF-8 character boundary.

use crate::range::space_len_at;
use crate::Range;

/// A cursor for byte-by-byte scanning.
///
/// # Example
/// ```
/// use mdline::cursor::Cursor;
///
/// let input = b"Hello, World!";
/// let mut cursor = Cursor::new(input);
///
/// assert_eq!(cursor.peek(), Some(b'H'));
/// cursor.advance(7);
/// assert_eq!(cursor.peek(), Some(b'W'));
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor over a byte slice.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            end: input.len(),
        }
    }

    /// Create a cursor confined to `range` of `input`.
    ///
    /// Offsets stay relative to the start of `input`.
    #[inline]
    pub fn over(input: &'a [u8], range: Range) -> Self {
        debug_assert!(range.end_usize() <= input.len());
        Self {
            input,
            pos: range.start_usize(),
            end: range.end_usize(),
        }
    }

    /// Number of bytes remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.end - self.pos
    }

    /// Check if cursor is at end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.end
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        if self.is_eof() {
            None
        } else {
            Some(self.input[self.pos])
        }
    }

    /// Advance by n bytes.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        self.pos += n;
    }

    /// Advance by 1 byte.
    #[inline]
    pub fn bump(&mut self) {
        debug_assert!(!self.is_eof());
        self.pos += 1;
    }

    /// Check if current position matches a byte.
    #[inline]
    pub fn at(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    /// Skip while predicate is true, returning the number of bytes skipped.
    #[inline]
    pub fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !predicate(b) {
                break;
            }
            self.bump();
        }
        self.pos - start
    }

    /// Skip whitespace characters, returning the number of bytes skipped.
    #[inline]
    pub fn skip_whitespace(&mut self) -> usize {
        let bounded = &self.input[..self.end];
        let start = self.pos;
        while let Some(len) = space_len_at(bounded, self.pos) {
            self.pos += len;
        }
        self.pos - start
    }

    /// Consume a specific byte if present.
    #[inline]
    pub fn eat(&mut self, b: u8) -> bool {
        if self.at(b) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Range from the current position to the end of the cursor.
    #[inline]
    pub fn rest(&self) -> Range {
        Range::from_usize(self.pos, self.end)
    }

    /// Get the remaining bytes as a slice.
    #[inline]
    pub fn remaining_slice(&self) -> &'a [u8] {
        &self.input[self.pos..self.end]
    }

    /// Find the next line break (`\n` or `\r`) using memchr.
    #[inline]
    pub fn find_line_break(&self) -> Option<usize> {
        memchr::memchr2(b'\n', b'\r', self.remaining_slice())
    }

    /// Advance past the next line break, returning the range of the line
    /// (excluding the break). `\n`, `\r\n` and a lone `\r` all end a line.
    #[inline]
    pub fn consume_line(&mut self) -> Range {
        let start = self.pos;
        match self.find_line_break() {
            Some(pos) => {
                let line = Range::from_usize(start, start + pos);
                self.advance(pos);
                if self.eat(b'\r') {
                    self.eat(b'\n');
                } else {
                    self.bump();
                }
                line
            }
            None => {
                self.pos = self.end;
                Range::from_usize(start, self.end)
            }
        }
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.pos)
            .field("remaining", &self.remaining())
            .finish()
    }
}
