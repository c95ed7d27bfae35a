//! Byte classes for the beancode lexer.
//!
//! Every byte that can end a word, open an operator or separator, or count
//! as trivia is ASCII. A multi-byte UTF-8 sequence is therefore always part
//! of a word (or a string literal body) and the lexer can scan bytes without
//! ever splitting a character.

/// Checks if a byte is whitespace trivia.
///
/// Only space, carriage return, tab and newline count. Other ASCII control
/// bytes are word content.
///
/// # Example
///
/// ```
/// use beanc_lex::chars::is_whitespace;
///
/// assert!(is_whitespace(b' '));
/// assert!(is_whitespace(b'\n'));
/// assert!(!is_whitespace(0x0c)); // form feed
/// ```
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\r' | b'\t' | b'\n')
}

/// Checks if a byte can start an operator.
///
/// # Example
///
/// ```
/// use beanc_lex::chars::is_operator_start;
///
/// assert!(is_operator_start(b'<'));
/// assert!(is_operator_start(b'%'));
/// assert!(!is_operator_start(b'!'));
/// ```
#[inline]
pub fn is_operator_start(b: u8) -> bool {
    matches!(b, b'=' | b'>' | b'<' | b'+' | b'-' | b'/' | b'%' | b'*')
}

/// Checks if a byte is a one-byte separator.
///
/// # Example
///
/// ```
/// use beanc_lex::chars::is_separator;
///
/// assert!(is_separator(b'('));
/// assert!(is_separator(b'.'));
/// assert!(!is_separator(b';'));
/// ```
#[inline]
pub fn is_separator(b: u8) -> bool {
    matches!(b, b'{' | b'[' | b'(' | b')' | b']' | b'}' | b'.' | b',')
}

/// Checks if a byte continues a word run.
///
/// A word is anything up to the next separator, operator start or
/// whitespace. Quotes and semicolons inside a word stay in the word.
#[inline]
pub fn is_word_byte(b: u8) -> bool {
    !is_separator(b) && !is_operator_start(b) && !is_whitespace(b)
}

/// Checks if a byte may appear in a numeral: a digit, `_` or `.`.
#[inline]
pub fn is_numeral_byte(b: u8) -> bool {
    b.is_ascii_digit() || b == b'_' || b == b'.'
}

/// Checks if a completed word is a numeral.
///
/// Digits, underscores and dots only. The shape is not validated, so
/// `3.1.4` and `_` both pass.
///
/// # Example
///
/// ```
/// use beanc_lex::chars::is_numeral;
///
/// assert!(is_numeral("3.14"));
/// assert!(is_numeral("1_000"));
/// assert!(is_numeral("3.1.4"));
/// assert!(!is_numeral("x1"));
/// assert!(!is_numeral(""));
/// ```
pub fn is_numeral(word: &str) -> bool {
    !word.is_empty()
        && word
            .bytes()
            .all(is_numeral_byte)
}
