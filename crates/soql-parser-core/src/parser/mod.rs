//! SQL Parser
//!
//! A hand-written recursive descent parser with Pratt expression parsing.
//! Negation is normalized while parsing: a prefix `NOT` over `=`, `IN`,
//! `BETWEEN` or `LIKE` is folded into the negated form of that predicate.

mod error;
#[allow(clippy::module_inception)]
mod parser;
mod pratt;

pub use error::SyntaxError;
pub use parser::{Parser, MAX_DEPTH};

use tracing::debug;

use crate::ast::Statement;
use crate::error::Result;

/// Parses exactly one statement, optionally terminated by `;`.
///
/// # Errors
///
/// Returns a `ParseError` if the input is not exactly one valid statement.
pub fn parse(input: &str) -> Result<Statement> {
    debug!(len = input.len(), "parsing statement");
    let result = parse_one(input);
    if let Err(e) = &result {
        debug!(start = e.span().start, end = e.span().end, "parse failed: {e}");
    }
    result
}

fn parse_one(input: &str) -> Result<Statement> {
    let mut parser = Parser::new(input)?;
    let statement = parser.parse_statement()?;
    parser.eat_semicolon();
    parser.expect_end()?;
    Ok(statement)
}

/// Parses a `;`-separated sequence of statements.
///
/// Empty statements (repeated or trailing `;`) are skipped.
///
/// # Errors
///
/// Returns the first `ParseError` encountered.
pub fn parse_statements(input: &str) -> Result<Vec<Statement>> {
    debug!(len = input.len(), "parsing statement list");
    let mut parser = Parser::new(input)?;
    let mut statements = Vec::new();
    loop {
        while parser.eat_semicolon() {}
        if parser.is_eof() {
            break;
        }
        statements.push(parser.parse_statement()?);
        if !parser.eat_semicolon() {
            parser.expect_end()?;
            break;
        }
    }
    debug!(count = statements.len(), "parsed statements");
    Ok(statements)
}
