//! Syntax error type.

use crate::lexer::{Span, TokenKind};

/// A syntax error: the token stream does not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at position {}..{}", span.start, span.end)]
pub struct SyntaxError {
    /// The error message.
    pub message: String,
    /// The location of the error.
    pub span: Span,
    /// The construct the parser expected (if applicable).
    pub expected: Option<String>,
    /// The token actually found.
    pub found: Option<TokenKind>,
}

impl SyntaxError {
    /// Creates a new syntax error.
    #[must_use]
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            expected: None,
            found: None,
        }
    }

    /// Creates an "unexpected token" error.
    ///
    /// Reaching end of input is reported as [`SyntaxError::unexpected_eof`].
    #[must_use]
    pub fn unexpected(expected: impl Into<String>, found: TokenKind, span: Span) -> Self {
        if found == TokenKind::Eof {
            return Self::unexpected_eof(expected, span);
        }
        let expected: String = expected.into();
        Self {
            message: format!(
                "Unexpected token: expected {expected}, found {}",
                found.describe()
            ),
            span,
            expected: Some(expected),
            found: Some(found),
        }
    }

    /// Creates an "unexpected end of input" error.
    #[must_use]
    pub fn unexpected_eof(expected: impl Into<String>, span: Span) -> Self {
        let expected: String = expected.into();
        Self {
            message: format!("Unexpected end of input: expected {expected}"),
            span,
            expected: Some(expected),
            found: Some(TokenKind::Eof),
        }
    }

    /// Returns true if the parser ran out of input.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.found == Some(TokenKind::Eof)
    }
}
