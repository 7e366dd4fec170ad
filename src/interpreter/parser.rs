/// Core expression entry point.
///
/// Holds the shared result type and the top of the precedence hierarchy.
pub mod core;

/// Unary and primary expressions.
///
/// Handles unary minus, literals, variables and parenthesized groups.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence tiers.
pub mod binary;

/// Statement parsing.
///
/// Classifies a whole line as blank, assignment or bare expression, and
/// rejects trailing operators and malformed assignment targets.
pub mod statement;
