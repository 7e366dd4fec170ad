use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING_DEPTH, ParseResult, parse_expression},
    },
};

/// Parses a unary minus chain followed by a primary expression.
///
/// Unary minus binds tighter than every binary operator, so `-2 * 3` is
/// `(-2) * 3` and `2 - -3` is `2 - (-3)`. A run of minus signs is counted
/// rather than nested: an even run cancels out and an odd run becomes a
/// single `Negate`.
///
/// The rule is: `unary := "-" unary | primary`
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut first_minus = None;
    let mut negations = 0_usize;
    while let Some((Token::Minus, column)) = tokens.peek() {
        if first_minus.is_none() {
            first_minus = Some(*column);
        }
        negations += 1;
        tokens.next();
    }

    let expr = parse_primary(tokens, depth)?;
    match first_minus {
        Some(column) if negations % 2 == 1 => Ok(Expr::Negate { expr: Box::new(expr),
                                                                column }),
        _ => Ok(expr),
    }
}

/// Parses a primary expression: a number, a variable or a parenthesized
/// expression.
///
/// The rule is: `primary := Number | Identifier | "(" expression ")"`
///
/// Each `(` is matched with its own `)`, so sibling groups such as
/// `(a) / (b)` and nested groups parse independently of each other.
///
/// # Errors
/// - `ExpectedClosingParen` if a group is never closed.
/// - `NestingTooDeep` if a `(` would exceed [`MAX_NESTING_DEPTH`].
/// - `UnmatchedClosingParen` for a `)` in operand position outside any group.
/// - `UnexpectedEndOfInput` if the stream stops where an operand is needed;
///   the column is 0 when the stream was empty from the start.
/// - `UnexpectedToken` for operators, and for `)` in operand position inside
///   a group.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number(value), column)) => Ok(Expr::Number { value:  *value,
                                                                  column: *column, }),
        Some((Token::Identifier(name), column)) => Ok(Expr::Variable { name:   name.clone(),
                                                                       column: *column, }),
        Some((Token::LParen, column)) => {
            if depth >= MAX_NESTING_DEPTH {
                return Err(ParseError::NestingTooDeep { column: *column,
                                                        limit:  MAX_NESTING_DEPTH, });
            }
            if tokens.peek().is_none() {
                return Err(ParseError::UnexpectedEndOfInput { column: column + 1 });
            }
            let inner = parse_expression(tokens, depth + 1)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(inner),
                Some((token, found)) => {
                    Err(ParseError::UnexpectedToken { token:  token.to_string(),
                                                      column: *found, })
                },
                None => Err(ParseError::ExpectedClosingParen { column: *column }),
            }
        },
        Some((Token::RParen, column)) if depth == 0 => {
            Err(ParseError::UnmatchedClosingParen { column: *column })
        },
        Some((token, column)) => Err(ParseError::UnexpectedToken { token:  token.to_string(),
                                                                   column: *column, }),
        None => Err(ParseError::UnexpectedEndOfInput { column: 0 }),
    }
}
