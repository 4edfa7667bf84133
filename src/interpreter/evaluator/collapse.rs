use log::trace;

use crate::{
    error::GrammarError,
    interpreter::{
        evaluator::group::find_groups,
        token::{Operator, Token},
    },
};

/// Collapses a parenthesis-free run of tokens into a single value.
///
/// The run must alternate `number (operator number)*`. Every `*`/`/` window
/// is collapsed first, left to right, then every `+`/`-` window, left to
/// right. `offset` is the index of the run's first token in the enclosing
/// sequence and only affects error positions.
///
/// # Errors
/// - `EmptyGroup` if the run is empty.
/// - `MisplacedToken` if the run breaks the alternation or holds a
///   parenthesis.
///
/// # Example
/// ```
/// use flatcalc::{interpreter::evaluator::collapse::collapse_group, tokenize};
///
/// let tokens = tokenize("2 / 2 + 3 * 4.75").unwrap();
/// assert_eq!(collapse_group(&tokens, 0).unwrap(), 15.25);
/// ```
pub fn collapse_group(tokens: &[Token], offset: usize) -> Result<f64, GrammarError> {
    let misplaced = |i: usize| GrammarError::MisplacedToken { token:    tokens[i],
                                                              position: offset + i, };

    let Some(&first) = tokens.first() else {
        return Err(GrammarError::EmptyGroup);
    };
    let Token::Number(first) = first else {
        return Err(misplaced(0));
    };

    let mut operations: Vec<(Operator, f64)> = Vec::with_capacity(tokens.len() / 2);
    for (i, pair) in tokens[1..].chunks(2).enumerate() {
        let at = 1 + 2 * i;
        match *pair {
            [Token::Operator(op), Token::Number(right)] => operations.push((op, right)),
            [Token::Operator(_), _] => return Err(misplaced(at + 1)),
            _ => return Err(misplaced(at)),
        }
    }

    // Multiplicative windows collapse into the operand on their left.
    let mut operands = vec![first];
    let mut additive: Vec<Operator> = Vec::new();
    for (op, right) in operations {
        if op.is_multiplicative() {
            if let Some(left) = operands.last_mut() {
                let result = op.apply(*left, right);
                trace!("collapse {left} {op} {right} = {result}");
                *left = result;
            }
        } else {
            operands.push(right);
            additive.push(op);
        }
    }

    let mut operands = operands.into_iter();
    let mut result = operands.next().unwrap_or(first);
    for (op, right) in additive.into_iter().zip(operands) {
        let next = op.apply(result, right);
        trace!("collapse {result} {op} {right} = {next}");
        result = next;
    }

    Ok(result)
}

/// Runs one reduction round and returns the rebuilt sequence.
///
/// Every innermost group is collapsed to a number. The number then replaces
/// the group together with any redundant layers around it: contiguous `(` on
/// the left and `)` on the right are counted and the smaller count of layers
/// is removed from both sides. With no parentheses left, the whole sequence
/// collapses to one number.
///
/// # Errors
/// Propagates errors from [`collapse_group`].
///
/// # Example
/// ```
/// use flatcalc::{
///     interpreter::{evaluator::collapse::reduce_round, token::format_tokens},
///     tokenize,
/// };
///
/// let tokens = tokenize("((2 + 3) * 4) - (1 + 1)").unwrap();
/// let reduced = reduce_round(&tokens).unwrap();
/// assert_eq!(format_tokens(&reduced), "( 5 * 4 ) - 2");
/// ```
pub fn reduce_round(tokens: &[Token]) -> Result<Vec<Token>, GrammarError> {
    let groups = find_groups(tokens);
    if groups.is_empty() {
        return Ok(vec![Token::Number(collapse_group(tokens, 0)?)]);
    }

    let mut reduced = Vec::with_capacity(tokens.len());
    let mut cursor = 0;

    for group in groups {
        reduced.extend_from_slice(&tokens[cursor..group.open]);
        let value = collapse_group(&tokens[group.inner()], group.open + 1)?;

        let left_layers = 1 + reduced.iter().rev().take_while(|token| token.is_open()).count();
        let right_layers = 1 + tokens[group.close + 1..].iter()
                                                        .take_while(|token| token.is_close())
                                                        .count();
        let extra_layers = left_layers.min(right_layers) - 1;

        reduced.truncate(reduced.len() - extra_layers);
        reduced.push(Token::Number(value));
        cursor = group.close + 1 + extra_layers;
    }
    reduced.extend_from_slice(&tokens[cursor..]);

    Ok(reduced)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{interpreter::token::format_tokens, tokenize};

    fn round(source: &str) -> String {
        format_tokens(&reduce_round(&tokenize(source).unwrap()).unwrap())
    }

    #[test]
    fn multiplication_binds_before_addition() {
        let tokens = tokenize("1 + 2 * 3 - 4 / 2").unwrap();
        assert_eq!(collapse_group(&tokens, 0), Ok(5.0));
    }

    #[test]
    fn equal_precedence_is_left_associative() {
        assert_eq!(collapse_group(&tokenize("8 / 4 / 2").unwrap(), 0), Ok(1.0));
        assert_eq!(collapse_group(&tokenize("10 - 4 - 3").unwrap(), 0), Ok(3.0));
    }

    #[test]
    fn single_number_collapses_to_itself() {
        assert_eq!(collapse_group(&[Token::Number(4.5)], 0), Ok(4.5));
    }

    #[test]
    fn empty_run_is_rejected() {
        assert_eq!(collapse_group(&[], 0), Err(GrammarError::EmptyGroup));
    }

    #[test]
    fn broken_alternation_reports_position() {
        let tokens = [Token::Number(1.0), Token::Number(2.0)];
        assert_eq!(collapse_group(&tokens, 4),
                   Err(GrammarError::MisplacedToken { token:    Token::Number(2.0),
                                                      position: 5, }));

        let tokens = [Token::Number(1.0), Token::Operator(Operator::Add), Token::OPEN];
        assert_eq!(collapse_group(&tokens, 0),
                   Err(GrammarError::MisplacedToken { token:    Token::OPEN,
                                                      position: 2, }));

        let tokens = [Token::Number(1.0), Token::Operator(Operator::Add)];
        assert_eq!(collapse_group(&tokens, 0),
                   Err(GrammarError::MisplacedToken { token:    Token::Operator(Operator::Add),
                                                      position: 1, }));
    }

    #[test]
    fn reduced_group_drops_its_parentheses() {
        assert_eq!(round("2 / (2 + 3) * 4.33 - -6"), "2 / 5 * 4.33 - -6");
    }

    #[test]
    fn redundant_layers_are_stripped_together() {
        assert_eq!(round("(((1 + 2)))"), "3");
        assert_eq!(round("1 + ((((80 - 19))) * 2)"), "1 + ( 61 * 2 )");
    }

    #[test]
    fn uneven_layers_keep_the_outer_group() {
        assert_eq!(round("((2 + 3) + 1)"), "( 5 + 1 )");
        assert_eq!(round("(1 + (2 + 3))"), "( 1 + 5 )");
    }

    #[test]
    fn sibling_groups_reduce_in_one_round() {
        assert_eq!(round("(20 / (1.5 + 3.5) * 4 + (0 + 4)) - -6"),
                   "( 20 / 5 * 4 + 4 ) - -6");
    }

    #[test]
    fn no_groups_reduces_whole_sequence() {
        assert_eq!(round("2 /2+3 * 4.75- -6"), "21.25");
    }
}
