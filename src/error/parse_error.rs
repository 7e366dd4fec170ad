use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Columns are 1-based positions in the expression line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that does not start any token.
    #[error("Error at column {column}: Unrecognized input '{token}'.")]
    Lexical {
        /// The rejected input.
        token:  String,
        /// The column where the input starts.
        column: usize,
    },
    /// The expression ends with an operator.
    #[error("Error at column {column}: Cannot finish expression with operator '{operator}'.")]
    TrailingOperator {
        /// The final operator.
        operator: String,
        /// The column of the final operator.
        column:   usize,
    },
    /// The left side of `=` is not exactly one identifier, or `=` appears
    /// more than once.
    #[error("Error at column {column}: There should be only one identifier on the left side of \
             the assignment.")]
    MalformedAssignment {
        /// The column of the offending `=`.
        column: usize,
    },
    /// Found a token that cannot start or continue an expression.
    #[error("Error at column {column}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The column where the token starts.
        column: usize,
    },
    /// Reached the end of input where an operand was required.
    #[error("Error at column {column}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The column just past the last token.
        column: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at column {column}: Expected closing parenthesis ')' for the '(' here.")]
    ExpectedClosingParen {
        /// The column of the unclosed `(`.
        column: usize,
    },
    /// Parentheses nested deeper than the parser accepts.
    #[error("Error at column {column}: Parentheses are nested more than {limit} levels deep.")]
    NestingTooDeep {
        /// The column of the first `(` past the limit.
        column: usize,
        /// The deepest accepted nesting.
        limit:  usize,
    },
    /// A `)` without a matching `(`.
    #[error("Error at column {column}: Closing parenthesis ')' has no matching '('.")]
    UnmatchedClosingParen {
        /// The column of the stray `)`.
        column: usize,
    },
}
