//! Materialized token sequences.
//!
//! [`TokenStream`] is what the parser consumes: a finite, randomly indexable
//! run of tokens that always ends in exactly one end-of-input token.

use std::ops::Index;
use std::slice;

use crate::token::Token;

/// A complete token sequence terminated by a single end-of-input token.
///
/// The only way to build one is [`Lexer::run`](crate::Lexer::run), which
/// guarantees the terminator, so a stream is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TokenStream {
    tokens: Vec<Token>,
}

#[allow(clippy::len_without_is_empty)]
impl TokenStream {
    pub(crate) fn from_tokens(tokens: Vec<Token>) -> Self {
        debug_assert!(tokens.last().is_some_and(Token::is_eof));
        debug_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
        Self { tokens }
    }

    /// Number of tokens, including the end-of-input token.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns the token at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// The terminating end-of-input token.
    pub fn eof(&self) -> &Token {
        &self.tokens[self.tokens.len() - 1]
    }

    /// Iterates over all tokens in source order.
    pub fn iter(&self) -> slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// All tokens as a slice.
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Consumes the stream, returning the tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}
