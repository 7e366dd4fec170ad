//! # calcite
//!
//! calcite is a small interactive arithmetic expression evaluator written in
//! Rust. It evaluates one expression line at a time with the usual operator
//! precedence, parentheses and unary minus, and keeps assigned variables for
//! the lifetime of an [`Interpreter`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expression lines.
///
/// This module declares the `Expr` and `Statement` types that represent a
/// line as a tree, along with the binary operators and their precedence
/// tiers. The tree is built by the parser and traversed by the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating a line. Each error carries the source column it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Combines them into a single `Error` returned by `Interpreter::evaluate`.
pub mod error;
/// Orchestrates the evaluation of expression lines.
///
/// This module ties together lexing, parsing and evaluation, and exposes the
/// `Interpreter` handle that owns the variable store.
pub mod interpreter;

pub use interpreter::instance::Interpreter;

/// Evaluates a script line by line and returns the last non-empty result.
///
/// Every line of `source` is evaluated on one fresh [`Interpreter`], so
/// assignments carry over to later lines. Blank lines are skipped. Evaluation
/// stops at the first failing line.
///
/// When `auto_print` is set, every non-empty result is printed to stdout as
/// it is computed.
///
/// # Errors
/// Returns the error of the first line that fails to parse or evaluate.
///
/// # Examples
/// ```
/// use calcite::run_script;
///
/// let source = "width = 4\nheight = 2.5\n\nwidth * height";
/// assert_eq!(run_script(source, false).unwrap(), Some(10.0));
///
/// // 'depth' is never assigned.
/// let source = "width = 4\nwidth * depth";
/// assert!(run_script(source, false).is_err());
/// ```
pub fn run_script(source: &str, auto_print: bool) -> Result<Option<f64>, error::Error> {
    let mut interpreter = Interpreter::new();
    let mut result = None;

    for line in source.lines() {
        if let Some(value) = interpreter.evaluate(line)? {
            if auto_print {
                println!("{value}");
            }
            result = Some(value);
        }
    }

    Ok(result)
}
