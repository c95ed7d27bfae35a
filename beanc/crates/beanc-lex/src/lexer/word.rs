//! Word lexing: numerals, keywords and identifiers.

use crate::chars::{is_numeral, is_numeral_byte, is_word_byte};
use crate::token::{Keyword, Token, TokenKind};
use crate::Lexer;

/// Classifies a completed word.
///
/// Numerals win over keywords, keywords over identifiers.
///
/// # Example
///
/// ```
/// use beanc_lex::lexer::classify_word;
/// use beanc_lex::TokenKind;
///
/// assert_eq!(classify_word("1_000"), TokenKind::Literal);
/// assert_eq!(classify_word("Repeat"), TokenKind::Keyword);
/// assert_eq!(classify_word("total"), TokenKind::Identifier);
/// ```
pub fn classify_word(word: &str) -> TokenKind {
    if is_numeral(word) {
        TokenKind::Literal
    } else if Keyword::from_word(word).is_some() {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a word.
    ///
    /// The run ends at a separator, operator start or whitespace byte. A `.`
    /// is normally a separator, but while the word so far is numeral-shaped
    /// a `.` followed by a digit is kept, so `3.14` stays one literal. Past
    /// such a dot only numeral bytes continue the word: `3.1x` is `3.1`
    /// followed by `x`.
    pub(crate) fn lex_word(&mut self) -> Token {
        self.cursor.eat_while(is_word_byte);

        while self.continues_numeral() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b != b'.' && is_numeral_byte(b));
        }

        let word = self.cursor.slice_from(self.token_start);
        self.finish(classify_word(word), word.to_owned())
    }

    fn continues_numeral(&self) -> bool {
        self.cursor.current_byte() == Some(b'.')
            && self.cursor.peek_byte(1).is_some_and(|b| b.is_ascii_digit())
            && is_numeral(self.cursor.slice_from(self.token_start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_word(source: &str) -> Token {
        let mut lexer = Lexer::new(source);
        lexer.lex_word()
    }

    fn lex_pairs(source: &str) -> Vec<(TokenKind, String)> {
        Lexer::new(source).map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn test_simple_identifier() {
        let token = lex_word("total");
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.text, "total");
    }

    #[test]
    fn test_identifier_with_digits_and_underscore() {
        let token = lex_word("item_2b");
        assert_eq!(token.kind, TokenKind::Identifier);
    }

    #[test]
    fn test_keyword_case_insensitive() {
        for spelling in ["if", "IF", "If", "iF"] {
            let token = lex_word(spelling);
            assert_eq!(token.kind, TokenKind::Keyword);
            assert_eq!(token.text, spelling);
            assert_eq!(token.keyword(), Some(Keyword::If));
        }
    }

    #[test]
    fn test_every_keyword() {
        for kw in Keyword::ALL {
            assert_eq!(lex_word(kw.as_str()).kind, TokenKind::Keyword, "{kw}");
        }
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(lex_word("ENDIFX").kind, TokenKind::Identifier);
        assert_eq!(lex_word("OUTPUTS").kind, TokenKind::Identifier);
        assert_eq!(lex_word("CALL").kind, TokenKind::Identifier);
    }

    #[test]
    fn test_numerals() {
        for numeral in ["42", "3.14", "1_000", "3.1.4", "_", "0.5_0"] {
            let tokens = Lexer::new(numeral).run();
            assert_eq!(tokens.len(), 2, "{numeral}");
            assert_eq!(tokens[0].kind, TokenKind::Literal, "{numeral}");
            assert_eq!(tokens[0].text, numeral);
        }
    }

    #[test]
    fn test_dot_splits_non_numerals() {
        assert_eq!(
            lex_pairs("rec.field"),
            [
                (TokenKind::Identifier, "rec".to_string()),
                (TokenKind::Separator, ".".to_string()),
                (TokenKind::Identifier, "field".to_string()),
            ]
        );
    }

    #[test]
    fn test_trailing_dot_after_numeral() {
        assert_eq!(
            lex_pairs("1.x 2."),
            [
                (TokenKind::Literal, "1".to_string()),
                (TokenKind::Separator, ".".to_string()),
                (TokenKind::Identifier, "x".to_string()),
                (TokenKind::Literal, "2".to_string()),
                (TokenKind::Separator, ".".to_string()),
            ]
        );
    }

    #[test]
    fn test_leading_dot_is_separator() {
        assert_eq!(
            lex_pairs(".5"),
            [
                (TokenKind::Separator, ".".to_string()),
                (TokenKind::Literal, "5".to_string()),
            ]
        );
    }

    #[test]
    fn test_digit_led_identifier() {
        let token = lex_word("2nd");
        assert_eq!(token.kind, TokenKind::Identifier);
    }

    #[test]
    fn test_stray_bytes_stay_in_word() {
        assert_eq!(
            lex_pairs("a#b ;x y!"),
            [
                (TokenKind::Identifier, "a#b".to_string()),
                (TokenKind::Identifier, ";x".to_string()),
                (TokenKind::Identifier, "y!".to_string()),
            ]
        );
    }

    #[test]
    fn test_quote_inside_word() {
        assert_eq!(
            lex_pairs("ab\"cd"),
            [(TokenKind::Identifier, "ab\"cd".to_string())]
        );
    }

    #[test]
    fn test_word_stops_at_separator_and_operator() {
        assert_eq!(
            lex_pairs("f(x)*2"),
            [
                (TokenKind::Identifier, "f".to_string()),
                (TokenKind::Separator, "(".to_string()),
                (TokenKind::Identifier, "x".to_string()),
                (TokenKind::Separator, ")".to_string()),
                (TokenKind::Operator, "*".to_string()),
                (TokenKind::Literal, "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_unicode_identifier() {
        let token = lex_word("größe<-1");
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.text, "größe");
        assert_eq!(token.span.len(), 7);
    }

    #[test]
    fn test_numeral_stops_before_letters_after_dot() {
        assert_eq!(
            lex_pairs("3.1x 1.5abc"),
            [
                (TokenKind::Literal, "3.1".to_string()),
                (TokenKind::Identifier, "x".to_string()),
                (TokenKind::Literal, "1.5".to_string()),
                (TokenKind::Identifier, "abc".to_string()),
            ]
        );
    }

    #[test]
    fn test_dotted_numeral_then_identifier() {
        assert_eq!(
            lex_pairs("3.1.4x"),
            [
                (TokenKind::Literal, "3.1.4".to_string()),
                (TokenKind::Identifier, "x".to_string()),
            ]
        );
    }

    #[test]
    fn test_word_never_contains_separator() {
        for source in ["3.1x", "1.5abc", "3.1.4x", "2.0#", "9.9.z"] {
            for token in Lexer::new(source) {
                if token.text.contains('.') {
                    assert!(
                        matches!(token.kind, TokenKind::Separator | TokenKind::Literal),
                        "{source}: {token}"
                    );
                }
            }
        }
    }
}
