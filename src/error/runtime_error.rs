use thiserror::Error;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    #[error("Error at column {column}: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name:   String,
        /// The column where the variable is read.
        column: usize,
    },
}
