/// The evaluator module reduces token sequences to numbers.
///
/// The evaluator never builds a tree. It repeatedly finds the innermost
/// parenthesis groups of the flat sequence, collapses each one with the usual
/// precedence rules, and rebuilds the sequence until one number is left.
///
/// # Responsibilities
/// - Discovers innermost groups, left to right.
/// - Applies `*`/`/` before `+`/`-`, left-associatively within each level.
/// - Strips parentheses that end up wrapping a single value.
/// - Reports grammar errors when a sequence cannot be reduced.
pub mod evaluator;
/// The lexer module splits source text into raw lexemes.
///
/// The lexer recognizes numeric literals (with an optional leading `-`), the
/// four operators and parentheses, skipping whitespace. It records the span
/// of every lexeme so later errors can point at a column.
pub mod lexer;
/// Typed tokens shared by the tokenizer and the evaluator.
pub mod token;
/// The tokenizer module turns lexemes into a normalized token sequence.
///
/// # Responsibilities
/// - Decides whether each `+`/`-` is a sign or a binary operator.
/// - Folds double negatives and inserts implicit additions.
/// - Removes degenerate parentheses.
/// - Validates operand/operator alternation and parenthesis balance.
pub mod tokenizer;
