use log::debug;
use logos::Logos;

use crate::{
    error::{EvalResult, SyntaxError, syntax_error::column_of},
    interpreter::{
        lexer::{Lexeme, Span, Spanned},
        token::{Token, format_tokens},
        tokenizer::{
            normalize::{fold_double_negatives, remove_degenerate_parentheses, resolve_signs},
            validate::validate,
        },
    },
};

/// Scans the source into spanned lexemes.
///
/// Number spans are matched by the literal pattern; everything between them
/// is split into single-character operator and parenthesis lexemes, with
/// whitespace dropped.
///
/// # Errors
/// - `UnexpectedCharacter` for anything outside digits, `.`, `+ - * /`,
///   parentheses and whitespace.
/// - `InvalidNumber` if a literal cannot be converted to `f64`.
///
/// # Example
/// ```
/// use flatcalc::interpreter::{lexer::Lexeme, tokenizer::core::scan};
///
/// let lexemes = scan("2 /2").unwrap();
/// let kinds: Vec<Lexeme> = lexemes.into_iter().map(|(lexeme, _)| lexeme).collect();
/// assert_eq!(kinds, vec![Lexeme::Number(2.0), Lexeme::Slash, Lexeme::Number(2.0)]);
/// ```
pub fn scan(source: &str) -> Result<Vec<Spanned<Lexeme>>, SyntaxError> {
    let mut lexemes = Vec::new();
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let span = Span::from(lexer.span());
        match lexeme {
            Ok(lexeme) => lexemes.push((lexeme, span)),
            Err(()) => return Err(unrecognized(source, lexer.slice(), span)),
        }
    }

    Ok(lexemes)
}

// The literal pattern only matches text `f64` accepts, so `InvalidNumber`
// is a guard for the `parse_number` callback rejecting a slice.
fn unrecognized(source: &str, slice: &str, span: Span) -> SyntaxError {
    let column = column_of(source, span);
    let looks_numeric = slice.trim_start_matches('-')
                             .starts_with(|c: char| c.is_ascii_digit());

    if looks_numeric {
        SyntaxError::InvalidNumber { literal: slice.to_string(),
                                     column }
    } else {
        SyntaxError::UnexpectedCharacter { found: slice.to_string(),
                                           column }
    }
}

/// Tokenizes an expression into its normalized token sequence.
///
/// The pipeline is: scan, fold `- -` into `+`, resolve unary signs (and the
/// implicit addition hidden in `1 -1`), drop degenerate parentheses, then
/// check that operands and operators alternate and parentheses balance.
///
/// The returned sequence is ready for
/// [`evaluate_tokens`](crate::interpreter::evaluator::core::evaluate_tokens).
///
/// # Errors
/// Returns [`EvalError::Syntax`](crate::error::EvalError::Syntax) for any
/// malformed input.
///
/// # Example
/// ```
/// use flatcalc::{interpreter::token::format_tokens, tokenize};
///
/// let tokens = tokenize("-(2 + 3)").unwrap();
/// assert_eq!(format_tokens(&tokens), "( -1 * ( 2 + 3 ) )");
/// ```
pub fn tokenize(source: &str) -> EvalResult<Vec<Token>> {
    let lexemes = scan(source)?;
    let lexemes = fold_double_negatives(lexemes);
    let tokens = resolve_signs(source, lexemes)?;
    let tokens = remove_degenerate_parentheses(tokens);
    let tokens = validate(source, &tokens)?;

    debug!("tokens = {}", format_tokens(&tokens));
    Ok(tokens)
}
