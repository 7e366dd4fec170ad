use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest parenthesis nesting accepted in one line.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
/// - `depth`: Number of enclosing parentheses; 0 at the top of a line.
///
/// # Returns
/// The parsed expression node. Tokens after the expression are left in the
/// iterator.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, depth)
}
