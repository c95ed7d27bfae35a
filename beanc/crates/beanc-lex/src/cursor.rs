//! Byte cursor for traversing beancode source.
//!
//! The cursor owns the scan position over a borrowed source string and keeps
//! line bookkeeping as it moves: the current 1-based line and the offset of
//! the first byte of that line. Columns are derived from those two, so they
//! are byte offsets within the line.
//!
//! Trivia (whitespace and `;;` line comments) is skipped here, before the
//! lexer classifies anything.

use crate::chars::is_whitespace;

/// UTF-8 byte order mark.
const BOM: &str = "\u{FEFF}";

/// A forward-only cursor over source bytes.
///
/// The cursor never moves backwards and never reads past the end of the
/// source.
///
/// # Example
///
/// ```
/// use beanc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("  ;; note\nOUTPUT");
/// cursor.skip_trivia();
/// assert_eq!(cursor.current_byte(), Some(b'O'));
/// assert_eq!(cursor.line(), 2);
/// assert_eq!(cursor.column(), 0);
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Next unread byte.
    position: usize,

    /// Current line number (1-based).
    line: usize,

    /// Offset of the first byte of the current line.
    line_start: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    ///
    /// A leading byte order mark is skipped and does not count toward the
    /// first line's columns.
    pub fn new(source: &'a str) -> Self {
        let start = if source.starts_with(BOM) { BOM.len() } else { 0 };
        Self {
            source,
            position: start,
            line: 1,
            line_start: start,
        }
    }

    /// Returns the byte under the cursor, or `None` at end of input.
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        self.peek_byte(0)
    }

    /// Returns the byte `offset` bytes ahead, or `None` past the end.
    ///
    /// # Example
    ///
    /// ```
    /// use beanc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("<-");
    /// assert_eq!(cursor.peek_byte(1), Some(b'-'));
    /// assert_eq!(cursor.peek_byte(2), None);
    /// ```
    #[inline]
    pub fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.position + offset).copied()
    }

    /// The unread bytes.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.source.as_bytes()[self.position..]
    }

    /// Returns true once every byte has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes one byte, updating line bookkeeping. No-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(b) = self.current_byte() {
            self.position += 1;
            if b == b'\n' {
                self.line += 1;
                self.line_start = self.position;
            }
        }
    }

    /// Consumes up to `count` bytes, stopping at end of input.
    pub fn advance_bytes(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Consumes bytes while `predicate` holds.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(u8) -> bool) {
        while let Some(b) = self.current_byte() {
            if !predicate(b) {
                break;
            }
            self.advance();
        }
    }

    /// Skips whitespace and line comments until real content or end of input.
    ///
    /// Whitespace and comments may interleave in any order, so this loops
    /// until neither makes progress.
    pub fn skip_trivia(&mut self) {
        loop {
            let skipped_whitespace = self.skip_whitespace();
            let skipped_comment = self.skip_line_comment();
            if !skipped_whitespace && !skipped_comment {
                return;
            }
        }
    }

    /// Skips a run of whitespace. Returns true if anything was consumed.
    pub fn skip_whitespace(&mut self) -> bool {
        let start = self.position;
        self.eat_while(is_whitespace);
        self.position != start
    }

    /// Skips one `;;` comment and the newline that ends it.
    ///
    /// A comment cut off by end of input still closes its line: `line` is
    /// bumped and `line_start` moves to the end offset. Returns false if the
    /// cursor is not at a comment.
    pub fn skip_line_comment(&mut self) -> bool {
        if !self.rest().starts_with(b";;") {
            return false;
        }

        self.eat_while(|b| b != b'\n');
        if self.is_at_end() {
            self.line += 1;
            self.line_start = self.position;
        } else {
            self.advance();
        }
        true
    }

    /// Current byte position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current line number (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Offset of the first byte of the current line.
    pub fn line_start(&self) -> usize {
        self.line_start
    }

    /// Byte offset of the cursor within the current line.
    pub fn column(&self) -> usize {
        self.position - self.line_start
    }

    /// Source text from `start` up to the cursor.
    ///
    /// The lexer only stops on ASCII bytes or at end of input, so both ends
    /// always fall on character boundaries.
    ///
    /// # Example
    ///
    /// ```
    /// use beanc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("WHILE x");
    /// cursor.advance_bytes(5);
    /// assert_eq!(cursor.slice_from(0), "WHILE");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// The full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
