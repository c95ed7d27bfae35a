//! Lexer module.
//!
//! The lexer implementation is split by token family:
//! - `core` - Lexer struct, dispatch, separators and the run loop
//! - `operator` - Longest-match operator scanning
//! - `string` - String literal scanning
//! - `word` - Numerals, keywords and identifiers

mod core;
mod operator;
mod string;
mod word;

pub use core::Lexer;
pub use operator::operator_len;
pub use word::classify_word;
