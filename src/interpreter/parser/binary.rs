use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Precedence},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
/// - `depth`: Number of enclosing parentheses.
///
/// # Returns
/// An `Expr::Chain` of multiplicative operands, or the single operand when
/// no additive operator follows it.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_tier(tokens, depth, Precedence::Additive, parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`, so `20 / 2 % 3`
/// reads as `(20 / 2) % 3`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_tier(tokens, depth, Precedence::Multiplicative, parse_unary)
}

/// Collects `operand (op operand)*` for one tier into a flat chain.
fn parse_tier<'a, I>(tokens: &mut Peekable<I>,
                     depth: usize,
                     tier: Precedence,
                     parse_operand: fn(&mut Peekable<I>, usize) -> ParseResult<Expr>)
                     -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let first = parse_operand(tokens, depth)?;
    let mut rest = Vec::new();
    let mut chain_column = 0;

    while let Some((token, column)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && op.precedence() == tier
    {
        if rest.is_empty() {
            chain_column = *column;
        }
        tokens.next();
        rest.push((op, parse_operand(tokens, depth)?));
    }

    if rest.is_empty() {
        return Ok(first);
    }
    Ok(Expr::Chain { first: Box::new(first),
                     rest,
                     column: chain_column })
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not one of `+ - * / %`, including
/// `=`, which only ever appears at statement level.
///
/// # Example
/// ```
/// use calcite::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Percent), Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}
