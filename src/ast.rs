use std::fmt;

/// The precedence tier of a binary operator.
///
/// `Multiplicative` binds tighter than `Additive`; operators within a tier
/// associate to the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// `+` and `-`.
    Additive,
    /// `*`, `/` and `%`.
    Multiplicative,
}

/// Represents a binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
}

impl BinaryOperator {
    /// Returns the precedence tier the operator belongs to.
    ///
    /// # Example
    /// ```
    /// use calcite::ast::{BinaryOperator, Precedence};
    ///
    /// assert_eq!(BinaryOperator::Mod.precedence(), Precedence::Multiplicative);
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Sub.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Additive,
            Self::Mul | Self::Div | Self::Mod => Precedence::Multiplicative,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{symbol}")
    }
}

/// An abstract syntax tree node representing an arithmetic expression.
///
/// Every variant carries the 1-based column of the token it was built from,
/// which the evaluator uses for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The constant value.
        value:  f64,
        /// Column in the source line.
        column: usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:   String,
        /// Column in the source line.
        column: usize,
    },
    /// Unary minus.
    Negate {
        /// The operand expression.
        expr:   Box<Self>,
        /// Column of the `-` token.
        column: usize,
    },
    /// One precedence tier folded left to right: `first op1 e1 op2 e2 ...`.
    ///
    /// All operators in `rest` share a tier, so a long flat sum or product
    /// stays one node deep.
    Chain {
        /// The leftmost operand.
        first:  Box<Self>,
        /// Each following operator and its right operand, in source order.
        rest:   Vec<(BinaryOperator, Self)>,
        /// Column of the first operator token.
        column: usize,
    },
}

/// A complete, non-blank expression line.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `name = value`
    Assignment {
        /// The assignment target.
        name:  String,
        /// The right-hand side.
        value: Expr,
    },
    /// A bare expression whose value is returned.
    Expression {
        /// The expression.
        expr: Expr,
    },
}
