//! Canonical printer.
//!
//! Every AST node implements [`fmt::Display`], rendering it in canonical
//! form: upper-case keywords, single spaces, `, ` between list items, and
//! identifiers and literals exactly as stored. Canonical text is a fixed
//! point: parsing and printing it again yields the same text.

use core::fmt::{self, Display};

use crate::ast::{
    ColumnRef, Expr, FromClause, FunctionCall, JoinCondition, JoinNode, Literal, OrderItem,
    OrderTarget, SelectItem, SelectQuery, Statement, TableRef,
};

impl Statement {
    /// Renders the statement in canonical form.
    #[must_use]
    pub fn to_canonical_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(query) => query.fmt(f),
        }
    }
}

impl fmt::Display for SelectQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        write_list(f, &self.items)?;

        if let Some(from) = &self.from {
            write!(f, " FROM {from}")?;
        }
        if let Some(scope) = &self.using_scope {
            write!(f, " USING SCOPE {scope}")?;
        }
        if let Some(expr) = &self.where_clause {
            f.write_str(" WHERE ")?;
            write_condition(f, expr)?;
        }
        if !self.group_by.is_empty() {
            f.write_str(" GROUP BY ")?;
            write_list(f, &self.group_by)?;
        }
        if let Some(expr) = &self.having {
            f.write_str(" HAVING ")?;
            write_condition(f, expr)?;
        }
        if !self.order_by.is_empty() {
            f.write_str(" ORDER BY ")?;
            write_list(f, &self.order_by)?;
        }
        if let Some(limit) = &self.limit {
            write!(f, " LIMIT {limit}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SelectItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.expr.fmt(f)?;
        if let Some(alias) = &self.alias {
            write!(f, " {alias}")?;
        }
        Ok(())
    }
}

impl fmt::Display for FromClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table(table) => table.fmt(f),
            Self::Join(join) => join.fmt(f),
        }
    }
}

impl fmt::Display for JoinNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.join_type.as_str(), self.right)?;
        if let Some(condition) = &self.condition {
            write!(f, " {condition}")?;
        }
        Ok(())
    }
}

impl fmt::Display for JoinCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On(expr) => write!(f, "ON {expr}"),
            Self::Using(columns) => {
                f.write_str("USING (")?;
                write_list(f, columns)?;
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(qualifier) = &self.qualifier {
            write!(f, "{qualifier}.")?;
        }
        f.write_str(&self.name)?;
        if let Some(alias) = &self.alias {
            write!(f, " {alias}")?;
        }
        Ok(())
    }
}

impl fmt::Display for OrderItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.target.fmt(f)?;
        if let Some(direction) = self.direction {
            write!(f, " {}", direction.as_str())?;
        }
        if let Some(nulls) = self.nulls {
            write!(f, " {}", nulls.as_str())?;
        }
        Ok(())
    }
}

impl fmt::Display for OrderTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ordinal(n) => write!(f, "{n}"),
            Self::Column(column) => column.fmt(f),
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.qualifier {
            Some(qualifier) => write!(f, "{qualifier}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) => f.write_str(text),
            Self::String(value) => write!(f, "'{value}'"),
            Self::Boolean(value) => write!(f, "{value}"),
        }
    }
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        write_list(f, &self.args)?;
        f.write_str(")")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Star => f.write_str("*"),
            Self::Column(column) => column.fmt(f),
            Self::Literal(literal) => literal.fmt(f),
            Self::Function(call) => call.fmt(f),
            Self::Subquery(query) => write!(f, "({query})"),
            Self::And(left, right) => {
                write_and_operand(f, left)?;
                f.write_str(" AND ")?;
                write_and_operand(f, right)
            }
            Self::Or(left, right) => write!(f, "{left} OR {right}"),
            Self::Not(operand) => {
                if operand.is_logical() {
                    write!(f, "NOT ({operand})")
                } else {
                    write!(f, "NOT {operand}")
                }
            }
            Self::Paren(inner) => write!(f, "({inner})"),
            Self::Compare { left, op, right } => {
                write_left_operand(f, left)?;
                write!(f, " {} ", op.as_str())?;
                write_right_operand(f, right)
            }
            Self::Between {
                expr,
                low,
                high,
                negated,
            } => {
                write_left_operand(f, expr)?;
                write!(f, "{} BETWEEN ", not(*negated))?;
                write_right_operand(f, low)?;
                f.write_str(" AND ")?;
                write_right_operand(f, high)
            }
            Self::InList {
                expr,
                list,
                negated,
            } => {
                write_left_operand(f, expr)?;
                write!(f, "{} IN (", not(*negated))?;
                write_list(f, list)?;
                f.write_str(")")
            }
            Self::InSubquery {
                expr,
                query,
                negated,
            } => {
                write_left_operand(f, expr)?;
                write!(f, "{} IN ({query})", not(*negated))
            }
            Self::Like {
                expr,
                pattern,
                negated,
            } => {
                write_left_operand(f, expr)?;
                write!(f, "{} LIKE ", not(*negated))?;
                write_right_operand(f, pattern)
            }
            Self::IsNull { expr, negated } => {
                write_left_operand(f, expr)?;
                f.write_str(if *negated { " IS NOT NULL" } else { " IS NULL" })
            }
            Self::Exists { query, negated } => {
                if *negated {
                    write!(f, "NOT EXISTS ({query})")
                } else {
                    write!(f, "EXISTS ({query})")
                }
            }
        }
    }
}

/// Returns the infix `NOT` marker for a negated predicate.
const fn not(negated: bool) -> &'static str {
    if negated {
        " NOT"
    } else {
        ""
    }
}

/// Writes a WHERE/HAVING condition. A bare `AND`/`OR` root gets one pair of
/// parentheses; every other root is written as is.
fn write_condition(f: &mut fmt::Formatter<'_>, expr: &Expr) -> fmt::Result {
    if expr.is_logical() {
        write!(f, "({expr})")
    } else {
        expr.fmt(f)
    }
}

/// The parser never puts a bare `OR` under an `AND`, but a hand-built tree
/// may; parenthesize it so the text parses back to the same tree.
fn write_and_operand(f: &mut fmt::Formatter<'_>, expr: &Expr) -> fmt::Result {
    if matches!(expr, Expr::Or(..)) {
        write!(f, "({expr})")
    } else {
        expr.fmt(f)
    }
}

/// Writes the left operand of a comparison or predicate.
///
/// Comparisons are left associative, so only an operand that binds looser
/// (`AND`, `OR`, `NOT`) needs parentheses.
fn write_left_operand(f: &mut fmt::Formatter<'_>, expr: &Expr) -> fmt::Result {
    if matches!(expr, Expr::And(..) | Expr::Or(..) | Expr::Not(_)) {
        write!(f, "({expr})")
    } else {
        expr.fmt(f)
    }
}

/// Writes a comparison right operand, `BETWEEN` bound or `LIKE` pattern.
///
/// These are read above comparison precedence, so any comparison or
/// predicate in this position is parenthesized to keep its grouping.
fn write_right_operand(f: &mut fmt::Formatter<'_>, expr: &Expr) -> fmt::Result {
    let needs_parens = matches!(
        expr,
        Expr::And(..)
            | Expr::Or(..)
            | Expr::Not(_)
            | Expr::Compare { .. }
            | Expr::Between { .. }
            | Expr::InList { .. }
            | Expr::InSubquery { .. }
            | Expr::Like { .. }
            | Expr::IsNull { .. }
    );
    if needs_parens {
        write!(f, "({expr})")
    } else {
        expr.fmt(f)
    }
}

fn write_list<T: Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        item.fmt(f)?;
    }
    Ok(())
}
