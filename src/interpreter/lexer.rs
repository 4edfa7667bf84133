use std::ops::Range;

use logos::Logos;

/// Represents a raw lexeme of the source input.
///
/// Lexemes are what the scanner sees before any normalization: a `-` here
/// is only a character, and whether it is a sign or a subtraction is decided
/// later by the tokenizer.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"\s+")]
pub enum Lexeme {
    /// Numeric literal, optionally signed, such as `42`, `-6` or `4.75`.
    ///
    /// Longest match wins, so `-6` is one literal while `- 6` is a minus
    /// followed by `6`.
    #[regex(r"-?[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Lexeme {
    /// Returns `true` for `+` and `-`, the lexemes that may act as a sign.
    #[must_use]
    pub const fn is_sign(&self) -> bool {
        matches!(self, Self::Plus | Self::Minus)
    }
}

/// A half-open `[start, end)` byte range into the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// First byte of the span.
    pub start: usize,
    /// One past the last byte of the span.
    pub end:   usize,
}

impl Span {
    /// Returns the smallest span covering both `self` and `other`.
    #[must_use]
    pub fn to(self, other: Self) -> Self {
        Self { start: self.start.min(other.start),
               end:   self.end.max(other.end), }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self { start: range.start,
               end:   range.end, }
    }
}

/// A value paired with the source span it came from.
pub type Spanned<T> = (T, Span);

/// Parses a numeric literal from the current lexeme slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float, which makes the lexer report
///   an error for this slice.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Lexeme> {
        Lexeme::lexer(source).map(|lexeme| lexeme.expect("valid lexeme"))
                             .collect()
    }

    #[test]
    fn signed_literal_is_one_lexeme() {
        assert_eq!(lex("1 -1"), vec![Lexeme::Number(1.0), Lexeme::Number(-1.0)]);
        assert_eq!(lex("1 - 1"),
                   vec![Lexeme::Number(1.0), Lexeme::Minus, Lexeme::Number(1.0)]);
    }

    #[test]
    fn double_minus_splits_before_literal() {
        assert_eq!(lex("4.75- -6"),
                   vec![Lexeme::Number(4.75), Lexeme::Minus, Lexeme::Number(-6.0)]);
        assert_eq!(lex("2--3"),
                   vec![Lexeme::Number(2.0), Lexeme::Minus, Lexeme::Number(-3.0)]);
    }

    #[test]
    fn whitespace_is_skipped_everywhere() {
        assert_eq!(lex("\t( 2 )\n"),
                   vec![Lexeme::LParen, Lexeme::Number(2.0), Lexeme::RParen]);
    }

    #[test]
    fn any_unicode_whitespace_separates_lexemes() {
        assert_eq!(lex("1\u{b}+\u{a0}2"),
                   vec![Lexeme::Number(1.0), Lexeme::Plus, Lexeme::Number(2.0)]);
    }

    #[test]
    fn unknown_character_is_an_error() {
        let mut lexer = Lexeme::lexer("1 % 2");
        assert_eq!(lexer.next(), Some(Ok(Lexeme::Number(1.0))));
        assert_eq!(lexer.next(), Some(Err(())));
        assert_eq!(lexer.span(), 2..3);
    }

    #[test]
    fn span_union_covers_both() {
        let merged = Span::from(3..4).to(Span::from(5..7));
        assert_eq!(merged, Span { start: 3, end: 7 });
    }
}
