use tracing::{debug, trace};

use crate::{
    error::Error,
    interpreter::{evaluator::core::Context, lexer::tokenize, parser::statement::parse_statement},
};

/// An interactive expression interpreter.
///
/// Each instance owns its own variable store; separate instances never see
/// each other's variables. The store is the only state kept between calls to
/// [`Interpreter::evaluate`].
///
/// # Example
/// ```
/// use calcite::Interpreter;
///
/// let mut interpreter = Interpreter::new();
///
/// assert_eq!(interpreter.evaluate("x = 5").unwrap(), Some(5.0));
/// assert_eq!(interpreter.evaluate("x + 1").unwrap(), Some(6.0));
/// assert_eq!(interpreter.evaluate("").unwrap(), None);
/// assert!(interpreter.evaluate("y + 1").is_err());
/// ```
#[derive(Debug, Default, Clone)]
pub struct Interpreter {
    context: Context,
}

impl Interpreter {
    /// Creates an interpreter with an empty variable store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates one line of input.
    ///
    /// Returns `Ok(None)` for blank input, otherwise the computed value. An
    /// assignment returns the value it stored.
    ///
    /// # Errors
    /// Returns an [`Error`] if the line cannot be tokenized or parsed, or if
    /// it reads an unassigned variable. The variable store is unchanged when
    /// an error is returned.
    pub fn evaluate(&mut self, source: &str) -> Result<Option<f64>, Error> {
        debug!(source, "evaluating");

        let tokens = tokenize(source)?;
        trace!(?tokens, "tokenized");

        let Some(statement) = parse_statement(&tokens)? else {
            return Ok(None);
        };
        trace!(?statement, "parsed");

        let value = self.context.eval_statement(&statement)?;
        debug!(value, "evaluated");
        Ok(Some(value))
    }

    /// Returns the current value of a variable, if it was ever assigned.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<f64> {
        self.context.get_variable(name)
    }

    /// Returns every variable and its value, sorted by name.
    #[must_use]
    pub fn variables(&self) -> Vec<(&str, f64)> {
        self.context.variables()
    }
}
