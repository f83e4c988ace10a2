//! Errors returned by [`Node`][crate::Node] operations.

use std::fmt;

/// One of the two child slots of a [`Node`][crate::Node].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left child slot.
    Left,
    /// The right child slot.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Errors triggered by tree operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The text handed to the parser does not follow the tree grammar.
    #[error("malformed tree description {description:?}: {reason}")]
    MalformedTreeDescription {
        /// The (sub)description that was rejected.
        description: String,
        /// What was wrong with it.
        reason: Malformed,
    },
    /// An explicit removal asked for a child that isn't there.
    #[error("no {0} child to remove")]
    NoSuchChild(Side),
    /// An order statistic was requested for a rank outside `1..=size`.
    #[error("rank {index} is out of range for a tree of {size} nodes")]
    IndexOutOfRange {
        /// The requested 1-indexed rank.
        index: usize,
        /// The size of the tree the rank was requested from.
        size: usize,
    },
}

/// The reason a tree description was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Malformed {
    /// A node has no value text, e.g. `"(a b)"` or `""`.
    #[error("missing node value")]
    EmptyValue,
    /// A value contains whitespace or a parenthesis in a position the grammar doesn't allow.
    #[error("value contains reserved character {0:?}")]
    ReservedCharacter(char),
    /// A `)` without an opening `(` or an unclosed `(` inside a children list.
    #[error("unbalanced parentheses")]
    UnbalancedParens,
    /// The description opens a children list but doesn't end with `)`.
    #[error("children list is not closed by a final ')'")]
    MissingClosingParen,
    /// A children list holds something other than one or two children.
    #[error("expected 1 or 2 children, found {0}")]
    ChildCount(usize),
    /// The value text couldn't be converted into the node's value type.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Children are nested deeper than the parser accepts.
    #[error("nesting exceeds the depth limit of {limit}")]
    TooDeep {
        /// The configured maximum depth.
        limit: usize,
    },
}
