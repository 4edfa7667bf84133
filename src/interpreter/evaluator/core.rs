use log::debug;

use crate::{
    error::{EvalResult, GrammarError},
    interpreter::{
        evaluator::collapse::reduce_round,
        token::{Token, format_tokens},
    },
};

/// Reduces a normalized token sequence to its value.
///
/// Each round collapses every innermost parenthesis group (or the whole
/// sequence once no parentheses remain) and rebuilds the sequence from
/// scratch; rounds repeat until one token is left. Division by zero is not an
/// error: the result is whatever IEEE-754 produces.
///
/// # Errors
/// Returns [`EvalError::Grammar`](crate::error::EvalError::Grammar) if the
/// sequence is empty, a round cannot make progress, or the last token is not
/// a number.
///
/// # Example
/// ```
/// use flatcalc::interpreter::{
///     evaluator::core::evaluate_tokens,
///     token::{Operator, Token},
/// };
///
/// let tokens = vec![Token::Number(1.0), Token::Operator(Operator::Div), Token::Number(0.0)];
/// assert_eq!(evaluate_tokens(tokens).unwrap(), f64::INFINITY);
/// ```
pub fn evaluate_tokens(mut tokens: Vec<Token>) -> EvalResult<f64> {
    let mut round = 0;

    while tokens.len() > 1 {
        round += 1;
        let reduced = reduce_round(&tokens)?;
        if reduced.len() >= tokens.len() {
            return Err(GrammarError::NoProgress { remaining: tokens.len() }.into());
        }

        debug!("round {round}: {}", format_tokens(&reduced));
        tokens = reduced;
    }

    match tokens.first() {
        Some(Token::Number(value)) => Ok(*value),
        Some(token) => Err(GrammarError::NonNumericResult(*token).into()),
        None => Err(GrammarError::EmptyGroup.into()),
    }
}
