use crate::interpreter::token::Token;

/// Represents all errors that can occur while reducing a token sequence.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GrammarError {
    /// A reduction round left the sequence unchanged.
    #[error("Error: Reduction stalled with {remaining} tokens left.")]
    NoProgress {
        /// Number of tokens that could not be reduced.
        remaining: usize,
    },
    /// A token appeared where the group grammar does not allow it.
    #[error("Error: Unexpected token '{token}' at position {position} during reduction.")]
    MisplacedToken {
        /// The token found.
        token:    Token,
        /// Its index in the current sequence.
        position: usize,
    },
    /// A group had no operand to reduce.
    #[error("Error: Cannot reduce an empty group.")]
    EmptyGroup,
    /// The final remaining token is not a number.
    #[error("Error: Reduction ended on '{0}' instead of a number.")]
    NonNumericResult(Token),
}
