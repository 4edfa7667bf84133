/// The reduction loop.
///
/// Repeats reduction rounds over the flat token sequence until a single
/// number is left, and extracts it.
pub mod core;

/// Parenthesis group discovery.
///
/// Locates the innermost bracket pairs of the current sequence, left to
/// right.
pub mod group;

/// Collapsing a group into one value.
///
/// Applies `*` and `/` before `+` and `-`, each left to right, and strips the
/// parentheses that end up wrapping the result.
pub mod collapse;
