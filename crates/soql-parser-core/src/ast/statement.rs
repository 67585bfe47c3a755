//! Query statement AST types.

use super::expression::{ColumnRef, Expr};

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OrderDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Null ordering for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NullOrdering {
    /// NULLs come first.
    First,
    /// NULLs come last.
    Last,
}

impl NullOrdering {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "NULLS FIRST",
            Self::Last => "NULLS LAST",
        }
    }
}

/// What an ORDER BY entry sorts on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OrderTarget {
    /// 1-based position in the select list, as written.
    Ordinal(String),
    /// A column.
    Column(ColumnRef),
}

/// An ORDER BY entry. Direction and null ordering are only present when the
/// source wrote them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OrderItem {
    /// The sort target.
    pub target: OrderTarget,
    /// The direction, if written.
    pub direction: Option<OrderDirection>,
    /// Null ordering, if written.
    pub nulls: Option<NullOrdering>,
}

/// Join type.
///
/// The `OUTER` spellings are kept apart from the short forms so printing
/// reproduces the keywords the source used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum JoinType {
    /// `INNER JOIN` or bare `JOIN`.
    Inner,
    /// `LEFT OUTER JOIN`.
    LeftOuter,
    /// `LEFT JOIN`.
    Left,
    /// `RIGHT OUTER JOIN`.
    RightOuter,
    /// `RIGHT JOIN`.
    Right,
    /// `FULL OUTER JOIN`.
    FullOuter,
    /// `FULL JOIN`.
    Full,
    /// `CROSS JOIN`, or a comma in the FROM list.
    Cross,
}

impl JoinType {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::LeftOuter => "LEFT OUTER JOIN",
            Self::Left => "LEFT JOIN",
            Self::RightOuter => "RIGHT OUTER JOIN",
            Self::Right => "RIGHT JOIN",
            Self::FullOuter => "FULL OUTER JOIN",
            Self::Full => "FULL JOIN",
            Self::Cross => "CROSS JOIN",
        }
    }
}

/// A join condition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum JoinCondition {
    /// `ON <expr>`
    On(Expr),
    /// `USING (a, b, ...)`
    Using(Vec<String>),
}

/// A table name in the FROM clause.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableRef {
    /// Schema or other qualifier (optional).
    pub qualifier: Option<String>,
    /// Table or object name.
    pub name: String,
    /// Alias.
    pub alias: Option<String>,
}

impl TableRef {
    /// Creates a simple table reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            qualifier: None,
            name: name.into(),
            alias: None,
        }
    }

    /// Adds an alias to this table reference.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// A join of two FROM sources.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct JoinNode {
    /// Left side of the join.
    pub left: FromClause,
    /// Right side of the join.
    pub right: FromClause,
    /// The type of join.
    pub join_type: JoinType,
    /// The join condition; always `None` for `CROSS` joins.
    pub condition: Option<JoinCondition>,
}

/// The FROM clause: a single table or a left-deep tree of joins.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FromClause {
    /// A single table.
    Table(TableRef),
    /// A joined pair of sources.
    Join(Box<JoinNode>),
}

impl FromClause {
    /// Creates a single-table FROM clause.
    #[must_use]
    pub fn table(name: impl Into<String>) -> Self {
        Self::Table(TableRef::new(name))
    }

    /// Joins `right` onto this source.
    #[must_use]
    pub fn join(self, join_type: JoinType, right: Self, condition: Option<JoinCondition>) -> Self {
        Self::Join(Box::new(JoinNode {
            left: self,
            right,
            join_type,
            condition,
        }))
    }
}

/// An item of the select list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelectItem {
    /// The expression.
    pub expr: Expr,
    /// Bare trailing alias (`SUM(Amount) Total`).
    pub alias: Option<String>,
}

impl SelectItem {
    /// Creates a select item without alias.
    #[must_use]
    pub const fn new(expr: Expr) -> Self {
        Self { expr, alias: None }
    }

    /// Creates a select item with an alias.
    #[must_use]
    pub fn with_alias(expr: Expr, alias: impl Into<String>) -> Self {
        Self {
            expr,
            alias: Some(alias.into()),
        }
    }
}

/// A SELECT query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelectQuery {
    /// The select list; never empty.
    pub items: Vec<SelectItem>,
    /// The FROM clause.
    pub from: Option<FromClause>,
    /// SOQL `USING SCOPE` filter scope, verbatim.
    pub using_scope: Option<String>,
    /// The WHERE clause.
    pub where_clause: Option<Expr>,
    /// GROUP BY columns.
    pub group_by: Vec<ColumnRef>,
    /// HAVING clause.
    pub having: Option<Expr>,
    /// ORDER BY entries.
    pub order_by: Vec<OrderItem>,
    /// LIMIT row count, as written.
    pub limit: Option<String>,
}

impl SelectQuery {
    /// Creates a query with the given select list and no other clauses.
    #[must_use]
    pub const fn new(items: Vec<SelectItem>) -> Self {
        Self {
            items,
            from: None,
            using_scope: None,
            where_clause: None,
            group_by: Vec::new(),
            having: None,
            order_by: Vec::new(),
            limit: None,
        }
    }
}

/// A parsed statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Statement {
    /// SELECT statement.
    Select(SelectQuery),
}

impl Statement {
    /// Returns the top-level query.
    #[must_use]
    pub const fn query(&self) -> &SelectQuery {
        match self {
            Self::Select(query) => query,
        }
    }
}
