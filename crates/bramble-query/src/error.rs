//! Selector parse errors.
//!
//! Only parsing can fail. Matching and traversal are total over a
//! well-formed tree.

use std::fmt;

use thiserror::Error;

/// A failed selector parse. No partial selector is ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// Malformed selector syntax.
    #[error("invalid selector at offset {position}: {kind}")]
    InvalidInput {
        /// Byte offset in the selector text where parsing stopped.
        position: usize,
        /// What was wrong.
        kind: InvalidInputKind,
    },

    /// A backslash escape inside an identifier or quoted string.
    #[error("escape sequences are not supported (offset {position})")]
    EscapingUnimplemented {
        /// Byte offset of the backslash.
        position: usize,
    },

    /// A structural pseudo-class that is recognized but not implemented.
    #[error("pseudo-class ':{name}' is not supported")]
    PseudoClassUnimplemented {
        /// The lowercased pseudo-class name.
        name: String,
    },
}

/// Cause of a [`SelectorError::InvalidInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputKind {
    /// Input ended where a token was required.
    UnexpectedEnd,
    /// A character that cannot start or continue the expected token.
    UnexpectedCharacter(char),
    /// An identifier or name with no characters.
    EmptyIdentifier,
    /// Two characters after an attribute name that form no known operator.
    UnknownAttributeOperator(String),
    /// A quoted string without its closing quote.
    UnterminatedString,
    /// A line break inside a quoted string.
    LineBreakInString,
    /// An attribute selector without its closing `]`.
    MissingClosingBracket,
    /// A functional pseudo-class without its `(`.
    MissingOpeningParenthesis,
    /// A functional pseudo-class without its closing `)`.
    MissingClosingParenthesis,
    /// A pseudo-class name this engine does not know.
    UnknownPseudoClass(String),
    /// Input left over after a complete selector group.
    TrailingInput(char),
}

impl fmt::Display for InvalidInputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEnd => f.write_str("unexpected end of input"),
            Self::UnexpectedCharacter(c) => write!(f, "unexpected character {c:?}"),
            Self::EmptyIdentifier => f.write_str("expected an identifier"),
            Self::UnknownAttributeOperator(op) => write!(f, "unknown attribute operator {op:?}"),
            Self::UnterminatedString => f.write_str("unterminated string"),
            Self::LineBreakInString => f.write_str("line break inside string"),
            Self::MissingClosingBracket => f.write_str("expected ']'"),
            Self::MissingOpeningParenthesis => f.write_str("expected '('"),
            Self::MissingClosingParenthesis => f.write_str("expected ')'"),
            Self::UnknownPseudoClass(name) => write!(f, "unknown pseudo-class ':{name}'"),
            Self::TrailingInput(c) => write!(f, "unexpected {c:?} after selector"),
        }
    }
}

impl SelectorError {
    pub(crate) fn invalid(position: usize, kind: InvalidInputKind) -> Self {
        Self::InvalidInput { position, kind }
    }
}
