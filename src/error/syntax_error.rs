use crate::interpreter::lexer::Span;

/// Represents all errors that can occur while tokenizing an expression.
///
/// Columns are 1-based character positions into the original input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// A character outside the expression alphabet was found.
    #[error("Error at column {column}: Unexpected character '{found}'.")]
    UnexpectedCharacter {
        /// The offending text.
        found:  String,
        /// Where it starts.
        column: usize,
    },
    /// A numeric literal could not be converted to a number.
    #[error("Error at column {column}: Invalid number '{literal}'.")]
    InvalidNumber {
        /// The literal as written.
        literal: String,
        /// Where it starts.
        column:  usize,
    },
    /// An operator has no operand on one of its sides.
    #[error("Error at column {column}: Operator '{operator}' is missing an operand.")]
    DanglingOperator {
        /// The operator symbol.
        operator: char,
        /// Where the operator is.
        column:   usize,
    },
    /// Two operands follow each other with nothing joining them.
    #[error("Error at column {column}: Expected an operator before '{found}'.")]
    MissingOperator {
        /// The second operand as written.
        found:  String,
        /// Where it starts.
        column: usize,
    },
    /// A `(` is never closed.
    #[error("Error at column {column}: Opening parenthesis '(' is never closed.")]
    UnmatchedOpen {
        /// Where the parenthesis is.
        column: usize,
    },
    /// A `)` has no matching `(`.
    #[error("Error at column {column}: Closing parenthesis ')' has no matching '('.")]
    UnmatchedClose {
        /// Where the parenthesis is.
        column: usize,
    },
    /// The input contains no operand at all.
    #[error("Error: Expression is empty.")]
    EmptyExpression,
}

/// Converts a byte span into the 1-based character column of its start.
#[must_use]
pub fn column_of(source: &str, span: Span) -> usize {
    let prefix = source.get(..span.start).unwrap_or(source);
    prefix.chars().count() + 1
}
