//! Crate-level error type.

use crate::lexer::{LexError, Span};
use crate::parser::SyntaxError;

/// Any failure of a `parse` call.
///
/// Both variants are terminal: the parser does not recover, and the first
/// error aborts the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input could not be tokenized.
    #[error("Lexical error: {0}")]
    Lex(#[from] LexError),

    /// The tokens do not form a valid query.
    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    /// Returns the source location of the error.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Lex(e) => e.span,
            Self::Syntax(e) => e.span,
        }
    }

    /// Returns true for syntax (as opposed to lexical) errors.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }
}

/// Result type for parse operations.
pub type Result<T> = std::result::Result<T, ParseError>;
