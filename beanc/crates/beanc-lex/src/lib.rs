//! beanc-lex - Lexical Analyzer for the beancode teaching language
//!
//! This crate turns beancode source text into a stream of tokens for the
//! parser. Beancode is a pseudocode-style language: keyword statements
//! (`DECLARE`, `IF`/`ENDIF`, `FOR`/`NEXT`, `WHILE`/`ENDWHILE`, ...), C-like
//! separators, and a family of arrow operators (`<-`, `->`, `**->`, `<-//`).
//!
//! # Example Usage
//!
//! ```
//! use beanc_lex::{tokenize, Lexer, TokenKind};
//!
//! let tokens = tokenize("DECLARE total <- 0 ;; running sum");
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[2].text, "<-");
//! assert!(tokens.eof().is_eof());
//!
//! // Or pull tokens one at a time
//! let mut lexer = Lexer::new("OUTPUT x");
//! assert_eq!(lexer.next_token().text, "OUTPUT");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, token kind, span and keyword definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Byte cursor and trivia skipping
//! - [`chars`] - Byte classes
//! - [`stream`] - The materialized token sequence
//! - [`render`] - Diagnostic token listings
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! Matched case-insensitively, original spelling kept: `DECLARE IF ELSE
//! ENDIF THEN CASE OF FOR NEXT TO REPEAT UNTIL WHILE ENDWHILE FUNCTION
//! ENDFUNCTION RETURN OUTPUT INPUT TRUE FALSE BREAK CONTINUE`.
//!
//! ## Literals
//!
//! - **Numerals**: any word made only of digits, `_` and `.` (`42`, `3.14`,
//!   `1_000`). The shape is not validated.
//! - **Strings**: `"..."` with no escapes, ending at the closing quote or the
//!   end of the line.
//!
//! ## Operators
//!
//! Longest match wins:
//!
//! - 4 bytes: `**->` `//->` `<-//` `<-**`
//! - 3 bytes: `<-+` `<--` `<-*` `<-/` `+->` `-->` `*->` `/->`
//! - 2 bytes: `==` `>=` `<=` `<>` `>>` `<<` `->` `<-` `**` `//`
//! - 1 byte: `=` `>` `<` `+` `-` `/` `%` `*`
//!
//! ## Separators
//!
//! `{ [ ( ) ] } . ,`
//!
//! ## Trivia
//!
//! Space, tab, carriage return, newline, and `;;` line comments.
//!
//! # Error Handling
//!
//! Lexing never fails. Unterminated strings get a synthesized closing quote
//! and odd bytes end up inside identifiers.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod lexer;
pub mod render;
pub mod stream;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use stream::TokenStream;
pub use token::{Keyword, Operator, Separator, Span, Token, TokenKind};

/// Lexes a whole source text.
///
/// Shorthand for `Lexer::new(source).run()`.
pub fn tokenize(source: &str) -> TokenStream {
    Lexer::new(source).run()
}
