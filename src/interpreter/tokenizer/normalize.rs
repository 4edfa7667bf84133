use log::trace;

use crate::{
    error::{SyntaxError, syntax_error::column_of},
    interpreter::{
        lexer::{Lexeme, Spanned},
        token::{Operator, Token},
    },
};

/// Folds every `- -` pair into a single `+`, left to right.
///
/// Only separated minus signs reach this pass: `- -6` is already a minus and a
/// signed literal, while `- - 6` or `--(` produce two adjacent minus lexemes.
#[must_use]
pub fn fold_double_negatives(lexemes: Vec<Spanned<Lexeme>>) -> Vec<Spanned<Lexeme>> {
    let mut folded: Vec<Spanned<Lexeme>> = Vec::with_capacity(lexemes.len());

    for (lexeme, span) in lexemes {
        if lexeme == Lexeme::Minus
           && let Some((last @ Lexeme::Minus, last_span)) = folded.last_mut()
        {
            *last = Lexeme::Plus;
            *last_span = last_span.to(span);
            continue;
        }
        folded.push((lexeme, span));
    }

    folded
}

/// Converts lexemes into tokens, deciding the role of every sign.
///
/// A `+` or `-` that appears where an operand is expected (at the start, after
/// `(` or after another operator) is a unary sign:
/// - before a literal it is folded into the literal's value;
/// - before `(` a negative sign rewrites the group `-( .. )` as
///   `( -1 * ( .. ) )`, so the negation applies to that group alone.
///
/// A signed literal directly after an operand is the binary minus the scanner
/// merged into the literal (`1 -1`); an implicit `+` is inserted in front of it.
///
/// # Errors
/// `DanglingOperator` if a sign run is not followed by an operand.
pub fn resolve_signs(source: &str,
                     lexemes: Vec<Spanned<Lexeme>>)
                     -> Result<Vec<Spanned<Token>>, SyntaxError> {
    let mut tokens: Vec<Spanned<Token>> = Vec::with_capacity(lexemes.len());
    let mut depth = 0usize;
    // Depths at which a synthetic `)` is still owed to a rewritten `-( .. )`.
    let mut owed_closes: Vec<usize> = Vec::new();
    let mut lexemes = lexemes.into_iter().peekable();

    while let Some((lexeme, span)) = lexemes.next() {
        let expects_operand = tokens.last().is_none_or(|(token, _)| !token.ends_operand());

        match lexeme {
            Lexeme::Number(value) => {
                if !expects_operand && value.is_sign_negative() {
                    trace!("implicit '+' before {value}");
                    tokens.push((Token::Operator(Operator::Add), span));
                }
                tokens.push((Token::Number(value), span));
            },
            sign if sign.is_sign() && expects_operand => {
                let mut negative = sign == Lexeme::Minus;
                let mut sign_span = span;
                while let Some((next, next_span)) = lexemes.next_if(|(next, _)| next.is_sign()) {
                    negative ^= next == Lexeme::Minus;
                    sign_span = sign_span.to(next_span);
                }

                match lexemes.peek() {
                    Some(&(Lexeme::Number(value), value_span)) => {
                        lexemes.next();
                        let value = if negative { -value } else { value };
                        tokens.push((Token::Number(value), sign_span.to(value_span)));
                    },
                    Some((Lexeme::LParen, _)) => {
                        if negative {
                            trace!("unary '-' before group at byte {}", sign_span.start);
                            depth += 1;
                            owed_closes.push(depth);
                            tokens.push((Token::OPEN, sign_span));
                            tokens.push((Token::Number(-1.0), sign_span));
                            tokens.push((Token::Operator(Operator::Mul), sign_span));
                        }
                    },
                    _ => {
                        let operator = if negative { '-' } else { '+' };
                        return Err(SyntaxError::DanglingOperator { operator,
                                                                   column: column_of(source,
                                                                                     sign_span) });
                    },
                }
            },
            Lexeme::Plus => tokens.push((Token::Operator(Operator::Add), span)),
            Lexeme::Minus => tokens.push((Token::Operator(Operator::Sub), span)),
            Lexeme::Star => tokens.push((Token::Operator(Operator::Mul), span)),
            Lexeme::Slash => tokens.push((Token::Operator(Operator::Div), span)),
            Lexeme::LParen => {
                depth += 1;
                tokens.push((Token::OPEN, span));
            },
            Lexeme::RParen => {
                tokens.push((Token::CLOSE, span));
                depth = depth.saturating_sub(1);
                while owed_closes.last() == Some(&depth) {
                    owed_closes.pop();
                    depth -= 1;
                    tokens.push((Token::CLOSE, span));
                }
            },
        }
    }

    Ok(tokens)
}

/// Removes `( n )` and `()` until none remain.
///
/// Afterwards the evaluator never meets a group that holds a single value
/// before any reduction has happened.
#[must_use]
pub fn remove_degenerate_parentheses(mut tokens: Vec<Spanned<Token>>) -> Vec<Spanned<Token>> {
    loop {
        let mut kept: Vec<Spanned<Token>> = Vec::with_capacity(tokens.len());
        let mut i = 0;

        while i < tokens.len() {
            match tokens[i..] {
                [(open, _), (Token::Number(value), span), (close, _), ..]
                    if open.is_open() && close.is_close() =>
                {
                    kept.push((Token::Number(value), span));
                    i += 3;
                },
                [(open, _), (close, _), ..] if open.is_open() && close.is_close() => i += 2,
                _ => {
                    kept.push(tokens[i]);
                    i += 1;
                },
            }
        }

        if kept.len() == tokens.len() {
            return kept;
        }
        tokens = kept;
    }
}
