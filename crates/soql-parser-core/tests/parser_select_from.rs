//! Tests for the select list and FROM clause: columns, functions, aliases,
//! qualified tables, and all JOIN types.

mod common;
use common::*;

use soql_parser_core::ast::{
    ColumnRef, Expr, FromClause, JoinCondition, JoinType, SelectItem, TableRef,
};

// ===================================================================
// Select list
// ===================================================================

#[test]
fn select_star() {
    let s = parse_select("SELECT * FROM users");
    assert_eq!(s.items, vec![SelectItem::new(Expr::Star)]);
    assert_understands("SELECT * FROM users");
}

#[test]
fn select_literal_and_columns() {
    assert_understands("SELECT 1 FROM users");
    assert_understands("SELECT id FROM users");
    assert_understands("SELECT users.id FROM users");
    assert_understands("SELECT Id FROM Opportunity");
    assert_understands("SELECT Id, Name, Amount FROM Opportunity");
}

#[test]
fn select_qualified_column() {
    let s = parse_select("SELECT users.id FROM users");
    assert_eq!(s.items[0].expr, Expr::qualified_column("users", "id"));
}

#[test]
fn select_without_from() {
    let s = parse_select("SELECT 1");
    assert!(s.from.is_none());
    assert_understands("SELECT 1");
}

#[test]
fn select_aggregates() {
    assert_understands("SELECT SUM(messages_count) FROM users");
    assert_understands("SELECT MIN(age) FROM users");
    assert_understands("SELECT MAX(age) FROM users");
    assert_understands("SELECT AVG(age) FROM users");
    assert_understands("SELECT COUNT(*) FROM users");
    assert_understands("SELECT COUNT(id) FROM users");
}

#[test]
fn select_count_star_tree() {
    let s = parse_select("SELECT COUNT(*) FROM users");
    assert!(matches!(
        &s.items[0].expr,
        Expr::Function(call) if call.name == "COUNT" && call.args == vec![Expr::Star]
    ));
}

#[test]
fn select_function_name_keeps_case() {
    assert_sql("select count(id) from users", "SELECT count(id) FROM users");
}

#[test]
fn select_item_aliases() {
    let s = parse_select("SELECT Id OppId FROM Opportunity");
    assert_eq!(s.items[0].alias.as_deref(), Some("OppId"));
    assert_understands("SELECT Id OppId FROM Opportunity");
    assert_understands("SELECT Id, Name OppName FROM Opportunity");
    assert_understands("SELECT SUM(Amount) Total FROM Opportunity");
}

#[test]
fn select_alias_does_not_swallow_keyword() {
    let s = parse_select("SELECT Id FROM Opportunity");
    assert_eq!(s.items[0].alias, None);
    assert_eq!(s.from, Some(FromClause::table("Opportunity")));
}

// ===================================================================
// Table references
// ===================================================================

#[test]
fn from_simple_table() {
    let s = parse_select("SELECT * FROM users");
    assert!(matches!(
        &s.from,
        Some(FromClause::Table(TableRef { name, qualifier: None, alias: None }))
            if name == "users"
    ));
}

#[test]
fn from_qualified_table() {
    let s = parse_select("SELECT * FROM foo.bar");
    assert!(matches!(
        &s.from,
        Some(FromClause::Table(TableRef { qualifier: Some(q), name, .. }))
            if q == "foo" && name == "bar"
    ));
    assert_understands("SELECT * FROM foo.bar");
}

#[test]
fn from_table_with_bare_alias() {
    let s = parse_select("SELECT u.Id FROM User u");
    assert_eq!(s.from, Some(FromClause::Table(TableRef::new("User").alias("u"))));
    assert_eq!(
        s.items[0].expr,
        Expr::Column(ColumnRef::qualified("u", "Id"))
    );
    assert_understands("SELECT u.Id FROM User u");
}

#[test]
fn from_comma_list_keeps_aliases() {
    assert_sql(
        "SELECT * FROM t1, t2 a, t3",
        "SELECT * FROM t1 CROSS JOIN t2 a CROSS JOIN t3",
    );
}

// ===================================================================
// Joins
// ===================================================================

fn join_cases(keyword: &str) {
    assert_understands(&format!("SELECT * FROM t1 {keyword} t2 ON t1.a = t2.a"));
    assert_understands(&format!(
        "SELECT * FROM t1 {keyword} t2 ON t1.a = t2.a {keyword} t3 ON t2.a = t3.a"
    ));
    assert_understands(&format!("SELECT * FROM t1 {keyword} t2 USING (a)"));
    assert_understands(&format!(
        "SELECT * FROM t1 {keyword} t2 USING (a) {keyword} t3 USING (b)"
    ));
}

#[test]
fn join_full_outer() {
    join_cases("FULL OUTER JOIN");
}

#[test]
fn join_full() {
    join_cases("FULL JOIN");
}

#[test]
fn join_right_outer() {
    join_cases("RIGHT OUTER JOIN");
}

#[test]
fn join_right() {
    join_cases("RIGHT JOIN");
}

#[test]
fn join_left_outer() {
    join_cases("LEFT OUTER JOIN");
}

#[test]
fn join_left() {
    join_cases("LEFT JOIN");
}

#[test]
fn join_inner() {
    join_cases("INNER JOIN");
}

#[test]
fn join_bare_join_is_inner() {
    assert_sql(
        "SELECT * FROM t1 JOIN t2 ON t1.a = t2.a",
        "SELECT * FROM t1 INNER JOIN t2 ON t1.a = t2.a",
    );
}

#[test]
fn join_cross() {
    assert_understands("SELECT * FROM t1 CROSS JOIN t2");
    assert_understands("SELECT * FROM t1 CROSS JOIN t2 CROSS JOIN t3");
}

#[test]
fn join_comma_desugars_to_cross() {
    assert_sql("SELECT * FROM t1, t2", "SELECT * FROM t1 CROSS JOIN t2");
    assert_sql(
        "SELECT * FROM t1, t2, t3",
        "SELECT * FROM t1 CROSS JOIN t2 CROSS JOIN t3",
    );
    assert_eq!(
        parse_select("SELECT * FROM t1, t2").from,
        parse_select("SELECT * FROM t1 CROSS JOIN t2").from
    );
}

#[test]
fn join_tree_is_left_deep() {
    let s = parse_select("SELECT * FROM t1 LEFT JOIN t2 USING (a) RIGHT JOIN t3 USING (b)");
    let Some(FromClause::Join(outer)) = s.from else {
        panic!("Expected join");
    };
    assert_eq!(outer.join_type, JoinType::Right);
    assert_eq!(outer.right, FromClause::table("t3"));
    assert_eq!(
        outer.condition,
        Some(JoinCondition::Using(vec![String::from("b")]))
    );
    let FromClause::Join(inner) = &outer.left else {
        panic!("Expected nested join on the left");
    };
    assert_eq!(inner.join_type, JoinType::Left);
    assert_eq!(inner.left, FromClause::table("t1"));
}

#[test]
fn join_keyword_spellings_stay_distinct() {
    let spellings = [
        "INNER JOIN",
        "LEFT JOIN",
        "LEFT OUTER JOIN",
        "RIGHT JOIN",
        "RIGHT OUTER JOIN",
        "FULL JOIN",
        "FULL OUTER JOIN",
    ];
    let rendered: Vec<String> = spellings
        .iter()
        .map(|kw| parse(&format!("SELECT * FROM a {kw} b USING (x)")).to_string())
        .collect();
    for (i, a) in rendered.iter().enumerate() {
        for b in &rendered[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn join_on_compound_condition_is_not_wrapped() {
    assert_understands("SELECT * FROM a INNER JOIN b ON a.x = b.x AND a.y = b.y WHERE a.id = 1");
}

#[test]
fn join_with_aliases() {
    assert_understands("SELECT o.Id FROM Opportunity o LEFT JOIN Account a ON o.AccountId = a.Id");
}
