/// Tokenization errors.
///
/// Defines all errors raised while scanning and normalizing the raw input:
/// unknown characters, malformed literals, dangling operators and unbalanced
/// parentheses. These are detected before any arithmetic happens.
pub mod syntax_error;
/// Reduction errors.
///
/// Contains the errors raised by the evaluator when a token sequence does not
/// reduce to a single number. With a correctly normalized sequence these are
/// unreachable, so seeing one points at a normalization bug rather than at the
/// input.
pub mod grammar_error;

pub use grammar_error::GrammarError;
pub use syntax_error::SyntaxError;

/// Any failure produced by [`crate::evaluate`].
///
/// The two variants let callers tell "could not parse" apart from "could not
/// reduce".
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// The input could not be tokenized.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The token sequence could not be reduced to a single value.
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

/// Result type returned by every fallible public function of the crate.
pub type EvalResult<T> = Result<T, EvalError>;
