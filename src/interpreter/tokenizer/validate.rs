use crate::{
    error::{SyntaxError, syntax_error::column_of},
    interpreter::{
        lexer::{Span, Spanned},
        token::{Parenthesis, Token},
    },
};

/// Checks that a normalized sequence alternates between operands and
/// operators and that its parentheses balance, then strips the spans.
///
/// # Errors
/// - `EmptyExpression` if no tokens remain.
/// - `DanglingOperator` for an operator at the start, at the end, before `)`
///   or next to another operator.
/// - `MissingOperator` for two operands in a row, such as `1 2` or `2 (3)`.
/// - `UnmatchedOpen` / `UnmatchedClose` for unbalanced parentheses.
pub fn validate(source: &str, tokens: &[Spanned<Token>]) -> Result<Vec<Token>, SyntaxError> {
    let column = |span: Span| column_of(source, span);
    let mut open_spans: Vec<Span> = Vec::new();
    let mut previous: Option<Spanned<Token>> = None;

    for &(token, span) in tokens {
        let expects_operand = previous.is_none_or(|(prev, _)| !prev.ends_operand());

        match token {
            Token::Number(value) if !expects_operand => {
                return Err(SyntaxError::MissingOperator { found:  value.to_string(),
                                                          column: column(span), });
            },
            Token::Parenthesis(Parenthesis::Open) if !expects_operand => {
                return Err(SyntaxError::MissingOperator { found:  "(".to_string(),
                                                          column: column(span), });
            },
            Token::Operator(op) if expects_operand => {
                return Err(SyntaxError::DanglingOperator { operator: op.symbol(),
                                                           column:   column(span), });
            },
            Token::Parenthesis(Parenthesis::Close) => {
                if open_spans.pop().is_none() {
                    return Err(SyntaxError::UnmatchedClose { column: column(span) });
                }
                if let Some((Token::Operator(op), op_span)) = previous {
                    return Err(SyntaxError::DanglingOperator { operator: op.symbol(),
                                                               column:   column(op_span), });
                }
            },
            Token::Parenthesis(Parenthesis::Open) => open_spans.push(span),
            Token::Number(_) | Token::Operator(_) => {},
        }

        previous = Some((token, span));
    }

    if let Some(span) = open_spans.first() {
        return Err(SyntaxError::UnmatchedOpen { column: column(*span) });
    }

    match previous {
        None => Err(SyntaxError::EmptyExpression),
        Some((Token::Operator(op), span)) => {
            Err(SyntaxError::DanglingOperator { operator: op.symbol(),
                                                column:   column(span), })
        },
        Some(_) => Ok(tokens.iter().map(|&(token, _)| token).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::tokenizer::{
        core::scan,
        normalize::{fold_double_negatives, remove_degenerate_parentheses, resolve_signs},
    };

    fn check(source: &str) -> Result<Vec<Token>, SyntaxError> {
        let lexemes = fold_double_negatives(scan(source)?);
        let tokens = remove_degenerate_parentheses(resolve_signs(source, lexemes)?);
        validate(source, &tokens)
    }

    #[test]
    fn accepts_well_formed_sequence() {
        assert_eq!(check("(1 + 2) * 3").unwrap().len(), 7);
    }

    #[test]
    fn rejects_trailing_operator() {
        assert_eq!(check("1 +"),
                   Err(SyntaxError::DanglingOperator { operator: '+',
                                                       column:   3, }));
    }

    #[test]
    fn rejects_leading_binary_operator() {
        assert_eq!(check("* 2"),
                   Err(SyntaxError::DanglingOperator { operator: '*',
                                                       column:   1, }));
    }

    #[test]
    fn rejects_operator_before_close() {
        assert_eq!(check("(1 + 2 *) + 1"),
                   Err(SyntaxError::DanglingOperator { operator: '*',
                                                       column:   8, }));
    }

    #[test]
    fn rejects_adjacent_operands() {
        assert_eq!(check("1 2"),
                   Err(SyntaxError::MissingOperator { found:  "2".to_string(),
                                                      column: 3, }));
        assert_eq!(check("2 (3 + 1)"),
                   Err(SyntaxError::MissingOperator { found:  "(".to_string(),
                                                      column: 3, }));
    }

    #[test]
    fn rejects_unbalanced_parentheses() {
        assert_eq!(check("(1 + 2"), Err(SyntaxError::UnmatchedOpen { column: 1 }));
        assert_eq!(check("1 + 2)"), Err(SyntaxError::UnmatchedClose { column: 6 }));
        assert_eq!(check(")1 + 2("), Err(SyntaxError::UnmatchedClose { column: 1 }));
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(check("   "), Err(SyntaxError::EmptyExpression));
        assert_eq!(check("()"), Err(SyntaxError::EmptyExpression));
    }
}
