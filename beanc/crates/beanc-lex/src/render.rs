//! Human-readable token listings.
//!
//! Rendering is kept apart from lexing: it is a pure function over tokens
//! that have already been produced.

use std::fmt::Write;

use crate::token::Token;

/// Renders tokens one per line using their `Display` form.
///
/// # Example
///
/// ```
/// use beanc_lex::{render::render_tokens, tokenize};
///
/// let tokens = tokenize("INPUT x");
/// assert_eq!(
///     render_tokens(tokens.as_slice()),
///     "Token(keyword): INPUT @ row 1, col 0\n\
///      Token(ident): x @ row 1, col 6\n\
///      Token(eof):  @ row 1, col 7\n"
/// );
/// ```
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter().fold(String::new(), |mut out, token| {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{token}");
        out
    })
}
