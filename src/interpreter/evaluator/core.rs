use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context holds the variable store: every name assigned so far and its
/// last value. Entries are only created or overwritten by assignments and are
/// never removed.
///
/// ## Usage
///
/// `Context` is created once and reused for every statement of a session.
/// Reading a name that was never assigned is an error, never an implicit
/// zero.
#[derive(Debug, Default, Clone)]
pub struct Context {
    variables: HashMap<String, f64>,
}

impl Context {
    /// Creates a new evaluation context with an empty variable store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates an expression and returns its value.
    ///
    /// Operands are evaluated left to right, and each chain is folded left to
    /// right with a running value. The store is only read.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` for a name that was never
    /// assigned.
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { value, .. } => Ok(*value),
            Expr::Variable { name, column } => self.eval_variable(name, *column),
            Expr::Negate { expr, .. } => Ok(-self.eval(expr)?),
            Expr::Chain { first, rest, .. } => {
                let mut value = self.eval(first)?;
                for (op, operand) in rest {
                    value = Self::eval_binary(*op, value, self.eval(operand)?);
                }
                Ok(value)
            },
        }
    }

    /// Evaluates a single statement.
    ///
    /// An assignment evaluates its right-hand side completely before writing
    /// the store, so a failing right-hand side leaves the store untouched.
    /// Both statement kinds return the computed value.
    ///
    /// # Example
    /// ```
    /// use calcite::{
    ///     ast::{Expr, Statement},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let mut context = Context::new();
    /// let statement = Statement::Assignment { name:  "x".to_string(),
    ///                                         value: Expr::Number { value:  5.0,
    ///                                                               column: 5, }, };
    ///
    /// assert_eq!(context.eval_statement(&statement), Ok(5.0));
    /// assert_eq!(context.get_variable("x"), Some(5.0));
    /// ```
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<f64> {
        match statement {
            Statement::Assignment { name, value } => {
                let value = self.eval(value)?;
                self.set_variable(name, value);
                Ok(value)
            },
            Statement::Expression { expr } => self.eval(expr),
        }
    }

    /// Returns the current value of `name`, if it was ever assigned.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Returns every variable and its value, sorted by name.
    #[must_use]
    pub fn variables(&self) -> Vec<(&str, f64)> {
        let mut variables = self.variables
                                .iter()
                                .map(|(name, value)| (name.as_str(), *value))
                                .collect::<Vec<_>>();
        variables.sort_unstable_by(|a, b| a.0.cmp(b.0));
        variables
    }

    fn set_variable(&mut self, name: &str, value: f64) {
        debug!(name, value, "assigning variable");
        self.variables.insert(name.to_string(), value);
    }

    fn eval_variable(&self, name: &str, column: usize) -> EvalResult<f64> {
        self.get_variable(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           column })
    }
}
