//! Tests for WHERE predicates: comparisons, IN, BETWEEN, LIKE, IS NULL,
//! EXISTS, boolean connectives and negation folding.

mod common;
use common::*;

use soql_parser_core::ast::{CompareOp, Expr, Literal};

// ===================================================================
// Comparisons
// ===================================================================

#[test]
fn compare_operators() {
    assert_understands("SELECT * FROM users WHERE id = 1");
    assert_understands("SELECT * FROM users WHERE id <> 1");
    assert_understands("SELECT * FROM users WHERE id >= 1");
    assert_understands("SELECT * FROM users WHERE id <= 1");
    assert_understands("SELECT * FROM users WHERE id > 1");
    assert_understands("SELECT * FROM users WHERE id < 1");
    assert_understands("SELECT * FROM users WHERE 1 = 1");
}

#[test]
fn compare_bang_equals_prints_as_not_equal() {
    assert_sql(
        "SELECT * FROM users WHERE id != 1",
        "SELECT * FROM users WHERE id <> 1",
    );
    assert!(matches!(
        parse_where("SELECT * FROM users WHERE id != 1"),
        Expr::Compare { op: CompareOp::NotEq, .. }
    ));
}

#[test]
fn compare_with_subquery() {
    assert_understands("SELECT * FROM t1 WHERE id > (SELECT SUM(a) FROM t2)");
}

#[test]
fn compare_literal_forms() {
    assert_understands("SELECT * FROM items WHERE price = 0.50");
    assert_understands("SELECT * FROM users WHERE name = 'O''Brien'");
    assert_sql(
        "SELECT * FROM users WHERE active = TRUE",
        "SELECT * FROM users WHERE active = true",
    );
    assert!(matches!(
        parse_where("SELECT * FROM items WHERE price = 0.50"),
        Expr::Compare { right, .. } if *right == Expr::Literal(Literal::Number(String::from("0.50")))
    ));
}

// ===================================================================
// IN / BETWEEN / LIKE / IS NULL / EXISTS
// ===================================================================

#[test]
fn in_list_and_subquery() {
    assert_understands("SELECT * FROM users WHERE id IN (1, 2, 3)");
    assert_understands("SELECT * FROM users WHERE id IN (SELECT id FROM users WHERE age = 18)");
    assert_understands("SELECT * FROM users WHERE id NOT IN (1, 2, 3)");
    assert_understands(
        "SELECT * FROM users WHERE id NOT IN (SELECT id FROM users WHERE age = 18)",
    );
}

#[test]
fn in_list_spacing_is_normalized() {
    assert_sql(
        "SELECT * FROM users WHERE id IN (1,2,3)",
        "SELECT * FROM users WHERE id IN (1, 2, 3)",
    );
}

#[test]
fn between() {
    assert_understands("SELECT * FROM users WHERE id BETWEEN 1 AND 3");
    assert_understands("SELECT * FROM users WHERE id NOT BETWEEN 1 AND 3");
}

#[test]
fn between_inside_conjunction() {
    assert_sql(
        "SELECT * FROM users WHERE id BETWEEN 1 AND 3 AND age = 18",
        "SELECT * FROM users WHERE (id BETWEEN 1 AND 3 AND age = 18)",
    );
}

#[test]
fn like() {
    assert_understands("SELECT * FROM users WHERE name LIKE 'Joe%'");
    assert_understands("SELECT * FROM users WHERE name NOT LIKE 'Joe%'");
}

#[test]
fn is_null() {
    assert_understands("SELECT * FROM users WHERE deleted_at IS NULL");
    assert_understands("SELECT * FROM users WHERE deleted_at IS NOT NULL");
    assert!(matches!(
        parse_where("SELECT * FROM users WHERE deleted_at IS NOT NULL"),
        Expr::IsNull { negated: true, .. }
    ));
}

#[test]
fn exists() {
    assert_understands("SELECT * FROM users WHERE EXISTS (SELECT id FROM users)");
    assert_understands("SELECT * FROM users WHERE NOT EXISTS (SELECT id FROM users)");
}

// ===================================================================
// AND / OR / parentheses
// ===================================================================

#[test]
fn or_and_with_explicit_parens() {
    assert_understands("SELECT * FROM users WHERE (id = 1 OR age = 18)");
    assert_understands("SELECT * FROM users WHERE (id = 1 AND age = 18)");
}

#[test]
fn compound_where_gains_one_paren_pair() {
    assert_sql(
        "SELECT * FROM users WHERE id = 1 OR age = 18",
        "SELECT * FROM users WHERE (id = 1 OR age = 18)",
    );
    assert_sql(
        "SELECT * FROM users WHERE a = 1 AND b = 2 OR c = 3",
        "SELECT * FROM users WHERE (a = 1 AND b = 2 OR c = 3)",
    );
}

#[test]
fn nested_parens_are_kept() {
    assert_understands("SELECT * FROM users WHERE (a = 1 AND (b = 2 OR c = 3))");
}

#[test]
fn and_binds_tighter_than_or() {
    let e = expr("a = 1 OR b = 2 AND c = 3");
    assert!(matches!(&e, Expr::Or(_, right) if matches!(**right, Expr::And(..))));
}

// ===================================================================
// Negation folding
// ===================================================================

#[test]
fn not_folds_into_predicates() {
    assert_sql(
        "SELECT * FROM users WHERE NOT id = 1",
        "SELECT * FROM users WHERE id <> 1",
    );
    assert_sql(
        "SELECT * FROM users WHERE NOT id IN (1, 2, 3)",
        "SELECT * FROM users WHERE id NOT IN (1, 2, 3)",
    );
    assert_sql(
        "SELECT * FROM users WHERE NOT id BETWEEN 1 AND 3",
        "SELECT * FROM users WHERE id NOT BETWEEN 1 AND 3",
    );
    assert_sql(
        "SELECT * FROM users WHERE NOT name LIKE 'A%'",
        "SELECT * FROM users WHERE name NOT LIKE 'A%'",
    );
}

#[test]
fn not_exists_is_preserved() {
    assert_understands("SELECT * FROM users WHERE NOT EXISTS (SELECT id FROM users WHERE id = 1)");
    assert!(matches!(
        parse_where("SELECT * FROM users WHERE NOT EXISTS (SELECT id FROM users)"),
        Expr::Exists { negated: true, .. }
    ));
}

#[test]
fn not_stays_generic_for_other_shapes() {
    assert_understands("SELECT * FROM users WHERE NOT active");
    assert_understands("SELECT * FROM users WHERE NOT (id = 1 OR age = 18)");
    assert_understands("SELECT * FROM users WHERE NOT id > 1");
    assert!(matches!(
        parse_where("SELECT * FROM users WHERE NOT id > 1"),
        Expr::Not(_)
    ));
}

#[test]
fn folded_comparison_operand_keeps_its_grouping() {
    assert_sql(
        "SELECT * FROM t WHERE a = NOT b = c",
        "SELECT * FROM t WHERE a = (b <> c)",
    );
    assert!(matches!(
        parse_where("SELECT * FROM t WHERE a = NOT b = c"),
        Expr::Compare { op: CompareOp::Eq, right, .. }
            if matches!(*right, Expr::Compare { op: CompareOp::NotEq, .. })
    ));
    assert_sql(
        "SELECT * FROM t WHERE x BETWEEN NOT a = 1 AND 2",
        "SELECT * FROM t WHERE x BETWEEN (a <> 1) AND 2",
    );
    assert_sql(
        "SELECT * FROM t WHERE name LIKE NOT a IN (1)",
        "SELECT * FROM t WHERE name LIKE (a NOT IN (1))",
    );
}

#[test]
fn not_folds_inside_conjunction() {
    assert_sql(
        "SELECT * FROM users WHERE NOT id = 1 AND age = 18",
        "SELECT * FROM users WHERE (id <> 1 AND age = 18)",
    );
}
