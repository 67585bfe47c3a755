//! Lexical error type.

use super::Span;

/// A lexical error: the input contains text that cannot form a token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at position {}..{}", span.start, span.end)]
pub struct LexError {
    /// The error message.
    pub message: String,
    /// The location of the offending text.
    pub span: Span,
}

impl LexError {
    /// Creates a new lexical error.
    #[must_use]
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    /// Creates an "unexpected character" error.
    #[must_use]
    pub fn unexpected_char(c: char, span: Span) -> Self {
        Self::new(format!("Unexpected character: {c}"), span)
    }
}
