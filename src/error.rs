use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression line: unrecognized characters, trailing operators, malformed
/// assignments and unbalanced parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while evaluating a parsed statement against the
/// variable store.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a single `evaluate` call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The line could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The line parsed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
