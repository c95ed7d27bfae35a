//! Operator lexing.
//!
//! Operators are matched longest first against fixed spelling tables. The
//! tables are prefix-disjoint within a tier, so the first hit in tier order
//! is the maximal munch.

use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Four-byte arrow operators.
const FOUR_BYTE_OPERATORS: [&str; 4] = ["**->", "//->", "<-//", "<-**"];

/// Three-byte arrow operators.
const THREE_BYTE_OPERATORS: [&str; 8] = ["<-+", "<--", "<-*", "<-/", "+->", "-->", "*->", "/->"];

/// Two-byte operators.
const TWO_BYTE_OPERATORS: [&str; 10] = ["==", ">=", "<=", "<>", ">>", "<<", "->", "<-", "**", "//"];

/// Multi-byte tiers, longest first.
const OPERATOR_TIERS: [&[&str]; 3] = [
    &FOUR_BYTE_OPERATORS,
    &THREE_BYTE_OPERATORS,
    &TWO_BYTE_OPERATORS,
];

/// Returns the byte length of the operator at the start of `rest`.
///
/// `rest` must start with an operator-start byte. Anything not matched by a
/// multi-byte spelling is a one-byte operator. Comparisons near the end of
/// the input simply fail to match; nothing past `rest` is read.
///
/// # Example
///
/// ```
/// use beanc_lex::lexer::operator_len;
///
/// assert_eq!(operator_len(b"**->x"), 4);
/// assert_eq!(operator_len(b"<-"), 2);
/// assert_eq!(operator_len(b"%"), 1);
/// ```
pub fn operator_len(rest: &[u8]) -> usize {
    OPERATOR_TIERS
        .iter()
        .flat_map(|tier| tier.iter())
        .find(|op| rest.starts_with(op.as_bytes()))
        .map_or(1, |op| op.len())
}

impl<'a> Lexer<'a> {
    /// Lexes the longest operator at the cursor.
    pub(crate) fn lex_operator(&mut self) -> Token {
        let len = operator_len(self.cursor.rest());
        self.cursor.advance_bytes(len);

        let text = self.cursor.slice_from(self.token_start).to_owned();
        self.finish(TokenKind::Operator, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_op(source: &str) -> Token {
        let mut lexer = Lexer::new(source);
        lexer.next_token()
    }

    fn lex_texts(source: &str) -> Vec<String> {
        Lexer::new(source).map(|t| t.text).collect()
    }

    #[test]
    fn test_four_byte_operators() {
        for op in FOUR_BYTE_OPERATORS {
            let token = lex_op(op);
            assert_eq!(token.kind, TokenKind::Operator);
            assert_eq!(token.text, op);
            assert_eq!(token.len(), 4);
        }
    }

    #[test]
    fn test_three_byte_operators() {
        for op in THREE_BYTE_OPERATORS {
            assert_eq!(lex_op(op).text, op);
        }
    }

    #[test]
    fn test_two_byte_operators() {
        for op in TWO_BYTE_OPERATORS {
            assert_eq!(lex_op(op).text, op);
        }
    }

    #[test]
    fn test_single_byte_operators() {
        for op in ["=", ">", "<", "+", "-", "/", "%", "*"] {
            let token = lex_op(op);
            assert_eq!(token.kind, TokenKind::Operator);
            assert_eq!(token.text, op);
        }
    }

    #[test]
    fn test_maximal_munch_pow_arrow() {
        assert_eq!(lex_texts("**->"), ["**->"]);
    }

    #[test]
    fn test_left_arrow_is_one_token() {
        let tokens = Lexer::new("<-").run();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "<-");
        assert_eq!(tokens[0].span.len(), 2);
    }

    #[test]
    fn test_truncated_four_byte_prefix() {
        // "<-/" at end of input: the 4-byte "<-//" cannot match
        assert_eq!(lex_texts("<-/"), ["<-/"]);
        assert_eq!(lex_texts("**-"), ["**", "-"]);
        assert_eq!(lex_texts("//-"), ["//", "-"]);
    }

    #[test]
    fn test_adjacent_operators_split_greedily() {
        assert_eq!(lex_texts("<<="), ["<<", "="]);
        assert_eq!(lex_texts("===="), ["==", "=="]);
        assert_eq!(lex_texts("--->"), ["-", "-->"]);
        assert_eq!(lex_texts("<-->"), ["<--", ">"]);
        assert_eq!(lex_texts("%%"), ["%", "%"]);
    }

    #[test]
    fn test_operator_stops_words() {
        assert_eq!(lex_texts("a<-b"), ["a", "<-", "b"]);
        assert_eq!(lex_texts("x+1"), ["x", "+", "1"]);
    }

    #[test]
    fn test_operator_len_prefers_longer_tier() {
        assert_eq!(operator_len(b"<-//"), 4);
        assert_eq!(operator_len(b"<-/"), 3);
        assert_eq!(operator_len(b"<-"), 2);
        assert_eq!(operator_len(b"<"), 1);
        assert_eq!(operator_len(b"<x"), 1);
    }

    #[test]
    fn test_tiers_are_prefix_disjoint() {
        for tier in OPERATOR_TIERS {
            for a in tier.iter() {
                for b in tier.iter() {
                    if a != b {
                        assert!(!a.starts_with(b), "{a} shadows {b}");
                    }
                }
            }
        }
    }
}
