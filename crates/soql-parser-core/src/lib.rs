//! # soql-parser-core
//!
//! A parser and canonicalizing printer for the SQL `SELECT` dialect used by
//! Salesforce SOQL.
//!
//! This crate provides:
//! - A hand-written lexer with byte spans on every token
//! - A recursive descent parser with Pratt expression parsing
//! - A plain-data AST with negation normalized at parse time
//! - A canonical printer: upper-case keywords, single spacing, no `AS`
//!
//! ## Canonicalizing a query
//!
//! ```rust
//! use soql_parser_core::canonicalize;
//!
//! let text = canonicalize(
//!     "select Id from Opportunity where not Amount = 0 and StageName != 'Won'",
//! )
//! .unwrap();
//! assert_eq!(
//!     text,
//!     "SELECT Id FROM Opportunity WHERE (Amount <> 0 AND StageName <> 'Won')"
//! );
//! ```
//!
//! ## Inspecting the tree
//!
//! ```rust
//! use soql_parser_core::ast::{Expr, FromClause};
//! use soql_parser_core::parse;
//!
//! let statement = parse("SELECT u.Id FROM User u USING SCOPE mine").unwrap();
//! let query = statement.query();
//! assert_eq!(query.items[0].expr, Expr::qualified_column("u", "Id"));
//! assert!(matches!(&query.from, Some(FromClause::Table(t)) if t.alias.as_deref() == Some("u")));
//! assert_eq!(query.using_scope.as_deref(), Some("mine"));
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;

use tracing::debug;

pub use ast::{Expr, Statement};
pub use error::{ParseError, Result};
pub use lexer::{LexError, Lexer, Span, Token, TokenKind};
pub use parser::{parse, parse_statements, Parser, SyntaxError};

/// Parses a single statement and renders it in canonical form.
///
/// # Errors
///
/// Returns a `ParseError` if the input is not exactly one valid statement.
pub fn canonicalize(input: &str) -> Result<String> {
    let text = parse(input)?.to_canonical_text();
    debug!(input_len = input.len(), output_len = text.len(), "canonicalized");
    Ok(text)
}

/// Parses a standalone expression spanning the whole input.
///
/// # Errors
///
/// Returns a `ParseError` if the input is not exactly one expression.
pub fn parse_expr(input: &str) -> Result<Expr> {
    Parser::new(input)?.parse_expression_only()
}
