use crate::interpreter::token::Token;

/// An innermost parenthesis pair of the current token sequence.
///
/// Indices are only valid for the sequence they were computed from; every
/// round recomputes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    /// Index of the `(`.
    pub open:  usize,
    /// Index of the matching `)`.
    pub close: usize,
}

impl Group {
    /// Index range of the tokens between the parentheses.
    #[must_use]
    pub const fn inner(&self) -> std::ops::Range<usize> {
        self.open + 1..self.close
    }
}

/// Finds every innermost group, in left-to-right order.
///
/// A group is innermost when no `(` appears between its parentheses. Groups
/// returned by one call never overlap, so they can all be reduced in the same
/// round.
///
/// # Example
/// ```
/// use flatcalc::{
///     interpreter::evaluator::group::{Group, find_groups},
///     tokenize,
/// };
///
/// let tokens = tokenize("(1 + (2 * 3)) - (4 / 5)").unwrap();
/// assert_eq!(find_groups(&tokens),
///            vec![Group { open: 3, close: 7 }, Group { open: 10, close: 14 }]);
/// ```
#[must_use]
pub fn find_groups(tokens: &[Token]) -> Vec<Group> {
    let mut groups = Vec::new();
    let mut last_open = None;

    for (i, token) in tokens.iter().enumerate() {
        if token.is_open() {
            last_open = Some(i);
        } else if token.is_close()
                  && let Some(open) = last_open.take()
        {
            groups.push(Group { open, close: i });
        }
    }

    groups
}
