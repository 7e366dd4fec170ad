use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses one expression line.
///
/// The line is classified in this order:
/// 1. ending on an operator (`+ - * / % =`) is a `TrailingOperator` error;
/// 2. a line containing `=` is an assignment;
/// 3. an empty line yields `None`;
/// 4. anything else is parsed as a bare expression.
///
/// # Parameters
/// - `tokens`: The whole tokenized line.
///
/// # Returns
/// `Some(Statement)` for a non-blank line, `None` for a blank one.
///
/// # Example
/// ```
/// use calcite::{
///     ast::Statement,
///     error::ParseError,
///     interpreter::{lexer::tokenize, parser::statement::parse_statement},
/// };
///
/// let tokens = tokenize("x = 2 * 3").unwrap();
/// assert!(matches!(parse_statement(&tokens), Ok(Some(Statement::Assignment { .. }))));
///
/// let tokens = tokenize("2 +").unwrap();
/// assert!(matches!(parse_statement(&tokens), Err(ParseError::TrailingOperator { .. })));
///
/// assert_eq!(parse_statement(&[]), Ok(None));
/// ```
pub fn parse_statement(tokens: &[(Token, usize)]) -> ParseResult<Option<Statement>> {
    if let Some((token, column)) = tokens.last()
       && token.is_operator()
    {
        return Err(ParseError::TrailingOperator { operator: token.to_string(),
                                                  column:   *column, });
    }
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(Some(statement));
    }
    if tokens.is_empty() {
        return Ok(None);
    }

    let expr = parse_complete_expression(tokens)?;
    Ok(Some(Statement::Expression { expr }))
}

/// Parses `identifier = expression`.
///
/// Returns `Ok(None)` when the line has no `=`. The `=` must be the second
/// token, the first token must be an identifier, and `=` may appear only
/// once.
fn parse_assignment(tokens: &[(Token, usize)]) -> ParseResult<Option<Statement>> {
    let mut equals = tokens.iter()
                           .enumerate()
                           .filter(|(_, (token, _))| *token == Token::Equals);

    let Some((index, (_, column))) = equals.next() else {
        return Ok(None);
    };
    if index != 1 {
        return Err(ParseError::MalformedAssignment { column: *column });
    }
    if let Some((_, (_, extra))) = equals.next() {
        return Err(ParseError::MalformedAssignment { column: *extra });
    }
    let Some((Token::Identifier(name), _)) = tokens.first() else {
        return Err(ParseError::MalformedAssignment { column: *column });
    };

    let value = parse_complete_expression(&tokens[2..])?;
    Ok(Some(Statement::Assignment { name: name.clone(),
                                    value }))
}

/// Parses an expression that must consume every token in `tokens`.
fn parse_complete_expression(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0)?;

    match iter.next() {
        None => Ok(expr),
        Some((Token::RParen, column)) => {
            Err(ParseError::UnmatchedClosingParen { column: *column })
        },
        Some((token, column)) => Err(ParseError::UnexpectedToken { token:  token.to_string(),
                                                                   column: *column, }),
    }
}
