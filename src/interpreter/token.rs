use std::fmt;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// The source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Returns `true` for the operators collapsed first within a group (`*` and
    /// `/`).
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }

    /// Applies the operator to two operands.
    ///
    /// Division follows IEEE-754: dividing by zero yields an infinity or `NaN`
    /// rather than an error.
    ///
    /// # Example
    /// ```
    /// use flatcalc::interpreter::token::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(7.0, 2.0), 5.0);
    /// assert!(Operator::Div.apply(1.0, 0.0).is_infinite());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An opening or closing parenthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parenthesis {
    /// `(`
    Open,
    /// `)`
    Close,
}

impl fmt::Display for Parenthesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "("),
            Self::Close => write!(f, ")"),
        }
    }
}

/// A typed atom of a normalized expression.
///
/// Tokens are immutable values; the evaluator only ever replaces whole tokens
/// in the sequence that holds them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric operand.
    Number(f64),
    /// A binary operator.
    Operator(Operator),
    /// A parenthesis.
    Parenthesis(Parenthesis),
}

impl Token {
    /// `(`
    pub const OPEN: Self = Self::Parenthesis(Parenthesis::Open);
    /// `)`
    pub const CLOSE: Self = Self::Parenthesis(Parenthesis::Close);

    /// Returns `true` if this token is `(`.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Parenthesis(Parenthesis::Open))
    }

    /// Returns `true` if this token is `)`.
    #[must_use]
    pub const fn is_close(&self) -> bool {
        matches!(self, Self::Parenthesis(Parenthesis::Close))
    }

    /// Returns `true` if an operand ends at this token, i.e. the next token
    /// must be an operator or `)`.
    #[must_use]
    pub const fn ends_operand(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Parenthesis(Parenthesis::Close))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Parenthesis(paren) => write!(f, "{paren}"),
        }
    }
}

/// Renders a token sequence as space-separated source symbols.
///
/// # Example
/// ```
/// use flatcalc::interpreter::token::{Operator, Token, format_tokens};
///
/// let tokens = [Token::OPEN, Token::Number(1.5), Token::Operator(Operator::Add), Token::Number(2.0), Token::CLOSE];
/// assert_eq!(format_tokens(&tokens), "( 1.5 + 2 )");
/// ```
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
