/// Scanning and the public tokenizer entry point.
///
/// Splits the raw input into spanned lexemes and runs the normalization
/// pipeline over them.
pub mod core;

/// Normalization passes.
///
/// Folds double negatives, resolves unary signs, repairs implicit additions
/// and removes degenerate parentheses.
pub mod normalize;

/// Final grammar check on the normalized sequence.
pub mod validate;
