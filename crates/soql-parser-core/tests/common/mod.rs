#![allow(dead_code)]

use soql_parser_core::ast::{Expr, SelectQuery, Statement};
use soql_parser_core::{parse_expr, ParseError};

pub fn parse(sql: &str) -> Statement {
    soql_parser_core::parse(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    soql_parser_core::parse(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> SelectQuery {
    let Statement::Select(query) = parse(sql);
    query
}

pub fn parse_where(sql: &str) -> Expr {
    parse_select(sql)
        .where_clause
        .unwrap_or_else(|| panic!("Expected WHERE clause in: {sql}"))
}

pub fn expr(sql: &str) -> Expr {
    parse_expr(sql).unwrap_or_else(|e| panic!("Failed to parse expression: {sql}\nError: {e:?}"))
}

/// Asserts that `sql` canonicalizes to `expected`, and that `expected` is
/// itself canonical.
pub fn assert_sql(sql: &str, expected: &str) {
    let rendered = parse(sql).to_canonical_text();
    assert_eq!(rendered, expected, "Canonical form of: {sql}");
    round_trip(expected);
}

/// Asserts that `sql` is already in canonical form.
pub fn assert_understands(sql: &str) {
    assert_sql(sql, sql);
}

/// Verifies that printing produces a fixed point:
/// parse(sql).to_string() can be re-parsed and yields the same
/// string again.
pub fn round_trip(sql: &str) {
    let ast1 = parse(sql);
    let rendered1 = ast1.to_string();
    let ast2 = parse(&rendered1);
    let rendered2 = ast2.to_string();
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}
