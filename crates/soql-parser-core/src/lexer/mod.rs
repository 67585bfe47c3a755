//! SQL Lexer/Tokenizer
//!
//! A hand-written lexer that turns query text into a stream of tokens.
//! Keywords are case-folded; identifiers and literals keep their source text.

mod error;
mod span;
mod token;
mod tokenizer;

pub use error::LexError;
pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
