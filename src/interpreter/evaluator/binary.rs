use crate::{ast::BinaryOperator, interpreter::evaluator::core::Context};

impl Context {
    /// Evaluates a binary operation between two numbers.
    ///
    /// Arithmetic follows native `f64` semantics: division by zero yields an
    /// infinity or `NaN` instead of an error, and `%` is the remainder with
    /// the sign of the dividend.
    ///
    /// # Example
    /// ```
    /// use calcite::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Mod, 10.0, 3.0), 1.0);
    /// assert_eq!(Context::eval_binary(BinaryOperator::Mod, -7.0, 2.0), -1.0);
    /// assert!(Context::eval_binary(BinaryOperator::Div, 1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
            BinaryOperator::Mod => left % right,
        }
    }
}
