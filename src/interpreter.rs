/// The evaluator module computes results from parsed statements.
///
/// The evaluator walks the expression tree, applies the arithmetic
/// operators, and reads and writes the variable store.
///
/// # Responsibilities
/// - Evaluates expression nodes with native floating-point arithmetic.
/// - Owns the variable store and applies assignments.
/// - Reports reads of unassigned variables.
pub mod evaluator;
/// The instance module exposes the interpreter handle.
///
/// An `Interpreter` owns one variable store and runs the full
/// tokenize-parse-evaluate pipeline for one line per call.
pub mod instance;
/// The lexer module tokenizes expression lines for further parsing.
///
/// The lexer reads the raw text and produces a sequence of tokens: numbers,
/// identifiers, operators and parentheses, each with its column.
///
/// # Responsibilities
/// - Converts the input text into tokens with source columns.
/// - Reports lexical errors instead of dropping unrecognized input.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser validates the shape of a line (trailing operators, assignment
/// targets, balanced parentheses) and resolves operator precedence with a
/// recursive descent over the token sequence.
pub mod parser;
