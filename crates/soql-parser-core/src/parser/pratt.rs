//! Pratt binding powers for the expression grammar.
//!
//! Precedence, lowest to highest: `OR`, `AND`, prefix `NOT`, comparison and
//! predicate forms, primaries.

use crate::ast::CompareOp;
use crate::lexer::{Keyword, TokenKind};

/// Binding power of the operand of a prefix `NOT`.
pub const NOT_OPERAND_BP: u8 = 5;

/// Returns the prefix binding power for a token.
///
/// Returns `None` if the token cannot start an expression.
#[must_use]
pub const fn prefix_binding_power(kind: &TokenKind) -> Option<u8> {
    match kind {
        TokenKind::Keyword(Keyword::Not) => Some(NOT_OPERAND_BP),
        TokenKind::Integer(_)
        | TokenKind::Decimal(_)
        | TokenKind::String(_)
        | TokenKind::Identifier(_)
        | TokenKind::LeftParen
        | TokenKind::Keyword(Keyword::True | Keyword::False | Keyword::Exists) => Some(0),
        _ => None,
    }
}

/// Returns the infix binding power for a token.
///
/// Returns `(left_bp, right_bp)`; all infix forms are left associative.
/// An infix `NOT` only occurs as `NOT IN`, `NOT BETWEEN` or `NOT LIKE`.
///
/// Returns `None` if the token is not an infix operator.
#[must_use]
pub const fn infix_binding_power(kind: &TokenKind) -> Option<(u8, u8)> {
    match kind {
        TokenKind::Keyword(Keyword::Or) => Some((1, 2)),
        TokenKind::Keyword(Keyword::And) => Some((3, 4)),
        TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::Lt
        | TokenKind::LtEq
        | TokenKind::Gt
        | TokenKind::GtEq
        | TokenKind::Keyword(
            Keyword::Is | Keyword::In | Keyword::Between | Keyword::Like | Keyword::Not,
        ) => Some((7, 8)),
        _ => None,
    }
}

/// Converts a token to a comparison operator. `!=` and `<>` both lex to
/// `NotEq`, so both map to [`CompareOp::NotEq`].
#[must_use]
pub const fn token_to_compare_op(kind: &TokenKind) -> Option<CompareOp> {
    match kind {
        TokenKind::Eq => Some(CompareOp::Eq),
        TokenKind::NotEq => Some(CompareOp::NotEq),
        TokenKind::Lt => Some(CompareOp::Lt),
        TokenKind::LtEq => Some(CompareOp::LtEq),
        TokenKind::Gt => Some(CompareOp::Gt),
        TokenKind::GtEq => Some(CompareOp::GtEq),
        _ => None,
    }
}
