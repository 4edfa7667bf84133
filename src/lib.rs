//! # flatcalc
//!
//! flatcalc evaluates infix arithmetic expressions made of decimal numbers,
//! `+ - * /`, parentheses, unary minus and arbitrary whitespace.
//!
//! Instead of building a syntax tree, the evaluator works on a flat token
//! sequence and collapses the innermost parenthesis groups in place, round
//! after round, until a single number is left.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error types for tokenizing and evaluating.
///
/// Tokenizing failures and reduction failures are kept apart so callers can
/// tell a malformed input from an evaluator fault.
///
/// # Responsibilities
/// - Defines one error enum per phase, carrying columns or token positions.
/// - Wraps both in `EvalError`, the error of every public entry point.
pub mod error;
/// Runs the two phases of evaluation.
///
/// This module holds the lexer, the tokenizer that normalizes signs and
/// parentheses, the token types, and the evaluator that reduces the token
/// sequence.
pub mod interpreter;

pub use error::{EvalError, EvalResult};
pub use interpreter::{
    evaluator::core::evaluate_tokens,
    token::{Token, format_tokens},
    tokenizer::core::tokenize,
};

/// Evaluates an arithmetic expression.
///
/// The expression is tokenized, normalized and then reduced. Every call works
/// on its own token sequence, so evaluating the same string twice always gives
/// the same result.
///
/// # Errors
/// - [`EvalError::Syntax`] if the input cannot be tokenized: unknown
///   characters, dangling operators, unbalanced parentheses.
/// - [`EvalError::Grammar`] if the token sequence cannot be reduced.
///
/// Division by zero is not an error and yields an infinity or `NaN`.
///
/// # Examples
/// ```
/// use flatcalc::evaluate;
///
/// assert_eq!(evaluate("2 /2+3 * 4.75- -6").unwrap(), 21.25);
/// assert_eq!(evaluate("(20 / (1.5 + 3.5) * 4 + (0 + 4)) - -6").unwrap(), 26.0);
///
/// // Unbalanced input is rejected rather than guessed at.
/// assert!(evaluate("(1 + 2").is_err());
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    let tokens = tokenize(expression)?;
    evaluate_tokens(tokens)
}
