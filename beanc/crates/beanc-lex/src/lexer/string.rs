//! String literal lexing.
//!
//! Strings have no escape sequences. The body runs to the next `"`, newline
//! or end of input, and the token text always ends in a quote.

use tracing::debug;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal starting at `"`.
    ///
    /// An unterminated literal is accepted: the closing quote is synthesized
    /// in the token text and a terminating newline is left in place for the
    /// trivia skipper.
    ///
    /// # Returns
    ///
    /// A `Literal` token whose text includes both quotes.
    pub(crate) fn lex_string(&mut self) -> Token {
        self.cursor.advance();

        let body_start = self.cursor.position();
        self.cursor.eat_while(|b| b != b'"' && b != b'\n');
        let body = self.cursor.slice_from(body_start);

        let mut text = String::with_capacity(body.len() + 2);
        text.push('"');
        text.push_str(body);
        text.push('"');

        if self.cursor.current_byte() == Some(b'"') {
            self.cursor.advance();
        } else {
            debug!(
                row = self.cursor.line(),
                start = self.token_start,
                "unterminated string literal"
            );
        }

        self.finish(TokenKind::Literal, text)
    }
}
