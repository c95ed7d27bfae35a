//! Token definitions for the beancode lexer.
//!
//! A [`Token`] is a plain owned value: its kind, the exact text it was lexed
//! from, and where it started. Tokens stay valid after the source buffer they
//! came from has been dropped.

use std::fmt;

/// The classification of a token.
///
/// There is no default kind. Every lexing path picks one of these
/// explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TokenKind {
    /// A word that is neither a numeral nor a keyword.
    Identifier,
    /// A numeral or a string literal.
    Literal,
    /// A reserved word, matched case-insensitively.
    Keyword,
    /// One of `{ [ ( ) ] } . ,`.
    Separator,
    /// An operator, one to four bytes long.
    Operator,
    /// Reserved for lexical error signaling. The lexer never produces it.
    NotImplemented,
    /// End of input. Always the last token of a stream.
    EndOfInput,
}

impl TokenKind {
    /// Short lowercase name used in diagnostic output.
    ///
    /// # Example
    ///
    /// ```
    /// use beanc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::Identifier.as_str(), "ident");
    /// assert_eq!(TokenKind::EndOfInput.as_str(), "eof");
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Identifier => "ident",
            TokenKind::Literal => "literal",
            TokenKind::Keyword => "keyword",
            TokenKind::Separator => "separator",
            TokenKind::Operator => "operator",
            TokenKind::NotImplemented => "notimplemented",
            TokenKind::EndOfInput => "eof",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Byte range `[start, end)` of source text consumed for a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    /// First consumed byte.
    pub start: usize,
    /// One past the last consumed byte.
    pub end: usize,
}

impl Span {
    /// Creates a span covering `start..end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Number of consumed bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if nothing was consumed (end-of-input tokens).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A single lexed token.
///
/// `row` is 1-based. `col` is the byte offset of the token start from the
/// first byte of its line, so the first token on a line has `col == 0`.
///
/// # Example
///
/// ```
/// use beanc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("x <- 1");
/// assert_eq!(tokens[1].kind, TokenKind::Operator);
/// assert_eq!(tokens[1].text, "<-");
/// assert_eq!((tokens[1].row, tokens[1].col), (1, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// Classification.
    pub kind: TokenKind,
    /// The spelling, owned. String literals keep both quotes.
    pub text: String,
    /// Line of the token start (1-based).
    pub row: usize,
    /// Byte offset of the token start within its line.
    pub col: usize,
    /// Source bytes consumed.
    pub span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>, row: usize, col: usize, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            row,
            col,
            span,
        }
    }

    /// Byte length of the token text.
    ///
    /// For an unterminated string literal this is one more than the number
    /// of consumed bytes, because the closing quote was synthesized.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the token text is empty. Only end-of-input tokens are.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns true for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// The keyword this token spells, if it is a keyword token.
    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword => Keyword::from_word(&self.text),
            _ => None,
        }
    }

    /// The operator this token spells, if it is an operator token.
    pub fn operator(&self) -> Option<Operator> {
        match self.kind {
            TokenKind::Operator => Operator::from_spelling(&self.text),
            _ => None,
        }
    }

    /// The separator this token spells, if it is a separator token.
    pub fn separator(&self) -> Option<Separator> {
        match self.kind {
            TokenKind::Separator => Separator::from_spelling(&self.text),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({}): {} @ row {}, col {}",
            self.kind, self.text, self.row, self.col
        )
    }
}

/// Reserved words of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Keyword {
    // Variables
    Declare,

    // Conditionals
    If,
    Else,
    Endif,
    Then,
    Case,
    Of,

    // Loops
    For,
    Next,
    To,
    Repeat,
    Until,
    While,
    Endwhile,
    Break,
    Continue,

    // Functions
    Function,
    Endfunction,
    Return,

    // Builtins
    Output,
    Input,

    // Boolean literals
    True,
    False,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 23] = [
        Keyword::Declare,
        Keyword::If,
        Keyword::Else,
        Keyword::Endif,
        Keyword::Then,
        Keyword::Case,
        Keyword::Of,
        Keyword::For,
        Keyword::Next,
        Keyword::To,
        Keyword::Repeat,
        Keyword::Until,
        Keyword::While,
        Keyword::Endwhile,
        Keyword::Break,
        Keyword::Continue,
        Keyword::Function,
        Keyword::Endfunction,
        Keyword::Return,
        Keyword::Output,
        Keyword::Input,
        Keyword::True,
        Keyword::False,
    ];

    /// Canonical upper-case spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Declare => "DECLARE",
            Keyword::If => "IF",
            Keyword::Else => "ELSE",
            Keyword::Endif => "ENDIF",
            Keyword::Then => "THEN",
            Keyword::Case => "CASE",
            Keyword::Of => "OF",
            Keyword::For => "FOR",
            Keyword::Next => "NEXT",
            Keyword::To => "TO",
            Keyword::Repeat => "REPEAT",
            Keyword::Until => "UNTIL",
            Keyword::While => "WHILE",
            Keyword::Endwhile => "ENDWHILE",
            Keyword::Break => "BREAK",
            Keyword::Continue => "CONTINUE",
            Keyword::Function => "FUNCTION",
            Keyword::Endfunction => "ENDFUNCTION",
            Keyword::Return => "RETURN",
            Keyword::Output => "OUTPUT",
            Keyword::Input => "INPUT",
            Keyword::True => "TRUE",
            Keyword::False => "FALSE",
        }
    }

    /// Looks a word up in the keyword set, ignoring ASCII case.
    ///
    /// # Example
    ///
    /// ```
    /// use beanc_lex::Keyword;
    ///
    /// assert_eq!(Keyword::from_word("endWhile"), Some(Keyword::Endwhile));
    /// assert_eq!(Keyword::from_word("CALL"), None);
    /// ```
    pub fn from_word(word: &str) -> Option<Keyword> {
        Self::ALL
            .iter()
            .copied()
            .find(|kw| kw.as_str().eq_ignore_ascii_case(word))
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operators, by spelling.
///
/// `<-` and `->` are the assignment arrows. The three- and four-byte
/// forms attach an arithmetic operator to one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=`
    Eq,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `*`
    Mul,

    /// `==`
    EqEq,
    /// `>=`
    Geq,
    /// `<=`
    Leq,
    /// `<>`
    Neq,
    /// `>>`
    Shr,
    /// `<<`
    Shl,
    /// `->`
    RAssign,
    /// `<-`
    LAssign,
    /// `**`
    Pow,
    /// `//`
    FloorDiv,

    /// `<-+`
    AddLAssign,
    /// `<--`
    SubLAssign,
    /// `<-*`
    MulLAssign,
    /// `<-/`
    DivLAssign,
    /// `+->`
    AddRAssign,
    /// `-->`
    SubRAssign,
    /// `*->`
    MulRAssign,
    /// `/->`
    DivRAssign,

    /// `**->`
    PowRAssign,
    /// `//->`
    FloorDivRAssign,
    /// `<-//`
    FloorDivLAssign,
    /// `<-**`
    PowLAssign,
}

impl Operator {
    /// Every operator, shortest spelling first.
    pub const ALL: [Operator; 30] = [
        Operator::Eq,
        Operator::Gt,
        Operator::Lt,
        Operator::Add,
        Operator::Sub,
        Operator::Div,
        Operator::Mod,
        Operator::Mul,
        Operator::EqEq,
        Operator::Geq,
        Operator::Leq,
        Operator::Neq,
        Operator::Shr,
        Operator::Shl,
        Operator::RAssign,
        Operator::LAssign,
        Operator::Pow,
        Operator::FloorDiv,
        Operator::AddLAssign,
        Operator::SubLAssign,
        Operator::MulLAssign,
        Operator::DivLAssign,
        Operator::AddRAssign,
        Operator::SubRAssign,
        Operator::MulRAssign,
        Operator::DivRAssign,
        Operator::PowRAssign,
        Operator::FloorDivRAssign,
        Operator::FloorDivLAssign,
        Operator::PowLAssign,
    ];

    /// Source spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Mul => "*",
            Operator::EqEq => "==",
            Operator::Geq => ">=",
            Operator::Leq => "<=",
            Operator::Neq => "<>",
            Operator::Shr => ">>",
            Operator::Shl => "<<",
            Operator::RAssign => "->",
            Operator::LAssign => "<-",
            Operator::Pow => "**",
            Operator::FloorDiv => "//",
            Operator::AddLAssign => "<-+",
            Operator::SubLAssign => "<--",
            Operator::MulLAssign => "<-*",
            Operator::DivLAssign => "<-/",
            Operator::AddRAssign => "+->",
            Operator::SubRAssign => "-->",
            Operator::MulRAssign => "*->",
            Operator::DivRAssign => "/->",
            Operator::PowRAssign => "**->",
            Operator::FloorDivRAssign => "//->",
            Operator::FloorDivLAssign => "<-//",
            Operator::PowLAssign => "<-**",
        }
    }

    /// Looks up an exact spelling.
    ///
    /// # Example
    ///
    /// ```
    /// use beanc_lex::Operator;
    ///
    /// assert_eq!(Operator::from_spelling("<-"), Some(Operator::LAssign));
    /// assert_eq!(Operator::from_spelling("**->"), Some(Operator::PowRAssign));
    /// assert_eq!(Operator::from_spelling("=>"), None);
    /// ```
    pub fn from_spelling(spelling: &str) -> Option<Operator> {
        Self::ALL.iter().copied().find(|op| op.as_str() == spelling)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Separators, by spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Separator {
    LCurly,
    LBracket,
    LParen,
    RParen,
    RBracket,
    RCurly,
    Dot,
    Comma,
}

impl Separator {
    /// Every separator.
    pub const ALL: [Separator; 8] = [
        Separator::LCurly,
        Separator::LBracket,
        Separator::LParen,
        Separator::RParen,
        Separator::RBracket,
        Separator::RCurly,
        Separator::Dot,
        Separator::Comma,
    ];

    /// Source spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::LCurly => "{",
            Separator::LBracket => "[",
            Separator::LParen => "(",
            Separator::RParen => ")",
            Separator::RBracket => "]",
            Separator::RCurly => "}",
            Separator::Dot => ".",
            Separator::Comma => ",",
        }
    }

    /// Looks up an exact spelling.
    pub fn from_spelling(spelling: &str) -> Option<Separator> {
        Self::ALL.iter().copied().find(|sep| sep.as_str() == spelling)
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
