use std::fmt;

use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in an expression line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// A sign is never part of a numeric literal: `-1` lexes as `Minus` followed
/// by `Number(1.0)`.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14` or `.5`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// Identifier tokens; variable names such as `x` or `_total2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Blanks, tabs and line breaks.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns `true` for the six operator tokens `+ - * / % =`.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self,
                 Self::Plus | Self::Minus | Self::Star | Self::Slash | Self::Percent | Self::Equals)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Equals => write!(f, "="),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Splits an expression line into tokens paired with their 1-based column.
///
/// Blank input yields an empty vector. Any character that does not belong to
/// a token is reported rather than skipped.
///
/// # Errors
/// Returns `ParseError::Lexical` for the first unrecognized character.
///
/// # Example
/// ```
/// use calcite::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = -1.5").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Identifier("x".to_string()), 1),
///                 (Token::Equals, 3),
///                 (Token::Minus, 5),
///                 (Token::Number(1.5), 6)]);
///
/// assert!(tokenize("   ").unwrap().is_empty());
/// assert!(tokenize("2 $ 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = lexer.span().start + 1;
        if let Ok(tok) = token {
            tokens.push((tok, column));
        } else {
            return Err(ParseError::Lexical { token: lexer.slice().to_string(),
                                             column });
        }
    }

    Ok(tokens)
}
