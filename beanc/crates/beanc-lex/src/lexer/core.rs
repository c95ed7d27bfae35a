//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the per-token dispatch and the loop
//! that materializes a whole token stream.

use tracing::{debug, trace};

use crate::chars::{is_operator_start, is_separator};
use crate::cursor::Cursor;
use crate::stream::TokenStream;
use crate::token::{Span, Token, TokenKind};

/// Lexer for beancode source.
///
/// Each call to [`Lexer::next_token`] skips trivia, classifies what follows
/// and returns exactly one owned [`Token`]. Once the source is exhausted it
/// keeps returning end-of-input tokens.
///
/// # Example
///
/// ```
/// use beanc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("OUTPUT \"hi\"");
/// assert_eq!(lexer.next_token().kind, TokenKind::Keyword);
/// assert_eq!(lexer.next_token().text, "\"hi\"");
/// assert!(lexer.next_token().is_eof());
/// ```
pub struct Lexer<'a> {
    /// Byte cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based).
    token_start_line: usize,

    /// Byte offset of the current token start within its line.
    token_start_column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 0,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Position is captured after trivia is skipped and before anything is
    /// consumed, so `row`/`col` always point at the first byte of the token.
    pub fn next_token(&mut self) -> Token {
        self.cursor.skip_trivia();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let Some(b) = self.cursor.current_byte() else {
            return self.finish(TokenKind::EndOfInput, String::new());
        };

        let token = match b {
            b if is_operator_start(b) => self.lex_operator(),
            b if is_separator(b) => self.lex_separator(),
            b'"' => self.lex_string(),
            _ => self.lex_word(),
        };
        trace!(%token, "lexed");
        token
    }

    /// Lexes every token up to and including end of input.
    ///
    /// # Example
    ///
    /// ```
    /// use beanc_lex::Lexer;
    ///
    /// let tokens = Lexer::new("(),").run();
    /// assert_eq!(tokens.len(), 4);
    /// assert!(tokens.eof().is_eof());
    /// ```
    pub fn run(mut self) -> TokenStream {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }

        debug!(
            tokens = tokens.len(),
            bytes = self.cursor.source().len(),
            lines = self.cursor.line(),
            "tokenized source"
        );
        TokenStream::from_tokens(tokens)
    }

    /// Lexes a one-byte separator.
    pub(crate) fn lex_separator(&mut self) -> Token {
        self.cursor.advance();
        let text = self.cursor.slice_from(self.token_start).to_owned();
        self.finish(TokenKind::Separator, text)
    }

    /// Builds the token that started at the recorded start position and ends
    /// at the cursor.
    pub(crate) fn finish(&self, kind: TokenKind, text: String) -> Token {
        Token::new(
            kind,
            text,
            self.token_start_line,
            self.token_start_column,
            Span::new(self.token_start, self.cursor.position()),
        )
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> usize {
        self.cursor.line()
    }

    /// Returns the byte offset of the cursor within its line.
    pub fn column(&self) -> usize {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
