//! Expression AST types.

use super::SelectQuery;

/// A literal value. Number and string literals keep their source text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Literal {
    /// Integer or decimal literal, verbatim (e.g., `10000`, `0.50`).
    Number(String),
    /// String literal contents, without the enclosing quotes.
    String(String),
    /// Boolean literal.
    Boolean(bool),
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CompareOp {
    /// `=`
    Eq,
    /// `<>` (also written `!=` in source)
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
}

impl CompareOp {
    /// Returns the canonical SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
        }
    }
}

/// A column reference, optionally qualified (`users.id`, `Recordtype.Name`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColumnRef {
    /// Table, alias or relationship name (optional).
    pub qualifier: Option<String>,
    /// Column name.
    pub name: String,
}

impl ColumnRef {
    /// Creates an unqualified column reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            qualifier: None,
            name: name.into(),
        }
    }

    /// Creates a qualified column reference.
    #[must_use]
    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            qualifier: Some(qualifier.into()),
            name: name.into(),
        }
    }
}

/// A function call expression (`COUNT(*)`, `SUM(Amount)`, `toLabel(StageName)`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FunctionCall {
    /// The function name, as written.
    pub name: String,
    /// The arguments. `*` appears only as the sole argument.
    pub args: Vec<Expr>,
}

/// An SQL expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Expr {
    /// `*`, as a select item or the argument of `COUNT(*)`.
    Star,

    /// A column reference.
    Column(ColumnRef),

    /// A literal value.
    Literal(Literal),

    /// A function call.
    Function(FunctionCall),

    /// A parenthesized subquery used as a value.
    Subquery(Box<SelectQuery>),

    /// Logical AND.
    And(Box<Expr>, Box<Expr>),

    /// Logical OR.
    Or(Box<Expr>, Box<Expr>),

    /// Logical NOT that could not be folded into a predicate.
    Not(Box<Expr>),

    /// Parentheses written in the source.
    Paren(Box<Expr>),

    /// A comparison.
    Compare {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: CompareOp,
        /// Right operand.
        right: Box<Expr>,
    },

    /// BETWEEN expression.
    Between {
        /// The expression to check.
        expr: Box<Expr>,
        /// Lower bound.
        low: Box<Expr>,
        /// Upper bound.
        high: Box<Expr>,
        /// Whether this is NOT BETWEEN.
        negated: bool,
    },

    /// IN with a value list.
    InList {
        /// The expression to check.
        expr: Box<Expr>,
        /// The values.
        list: Vec<Expr>,
        /// Whether this is NOT IN.
        negated: bool,
    },

    /// IN with a subquery.
    InSubquery {
        /// The expression to check.
        expr: Box<Expr>,
        /// The subquery.
        query: Box<SelectQuery>,
        /// Whether this is NOT IN.
        negated: bool,
    },

    /// LIKE expression.
    Like {
        /// The expression to match.
        expr: Box<Expr>,
        /// The pattern.
        pattern: Box<Expr>,
        /// Whether this is NOT LIKE.
        negated: bool,
    },

    /// IS NULL expression.
    IsNull {
        /// The expression to check.
        expr: Box<Expr>,
        /// Whether this is IS NOT NULL.
        negated: bool,
    },

    /// EXISTS subquery.
    Exists {
        /// The subquery.
        query: Box<SelectQuery>,
        /// Whether this is NOT EXISTS.
        negated: bool,
    },
}

impl Expr {
    /// Creates a new column reference.
    #[must_use]
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(ColumnRef::new(name))
    }

    /// Creates a new qualified column reference.
    #[must_use]
    pub fn qualified_column(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Column(ColumnRef::qualified(qualifier, name))
    }

    /// Creates a number literal from its source text.
    #[must_use]
    pub fn number(text: impl Into<String>) -> Self {
        Self::Literal(Literal::Number(text.into()))
    }

    /// Creates a string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal::String(value.into()))
    }

    /// Creates a boolean literal.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Literal(Literal::Boolean(value))
    }

    /// Creates a function call.
    #[must_use]
    pub fn function(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Function(FunctionCall {
            name: name.into(),
            args,
        })
    }

    /// Creates a comparison expression.
    #[must_use]
    pub fn compare(self, op: CompareOp, right: Self) -> Self {
        Self::Compare {
            left: Box::new(self),
            op,
            right: Box::new(right),
        }
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, right: Self) -> Self {
        self.compare(CompareOp::Eq, right)
    }

    /// Creates an inequality expression.
    #[must_use]
    pub fn not_eq(self, right: Self) -> Self {
        self.compare(CompareOp::NotEq, right)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, right: Self) -> Self {
        self.compare(CompareOp::Gt, right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        Self::And(Box::new(self), Box::new(right))
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        Self::Or(Box::new(self), Box::new(right))
    }

    /// Wraps the expression in a logical NOT.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Wraps the expression in source-style parentheses.
    #[must_use]
    pub fn paren(self) -> Self {
        Self::Paren(Box::new(self))
    }

    /// Creates an IN expression over a value list.
    #[must_use]
    pub fn in_list(self, list: Vec<Self>) -> Self {
        Self::InList {
            expr: Box::new(self),
            list,
            negated: false,
        }
    }

    /// Creates a BETWEEN expression.
    #[must_use]
    pub fn between(self, low: Self, high: Self) -> Self {
        Self::Between {
            expr: Box::new(self),
            low: Box::new(low),
            high: Box::new(high),
            negated: false,
        }
    }

    /// Creates a LIKE expression.
    #[must_use]
    pub fn like(self, pattern: Self) -> Self {
        Self::Like {
            expr: Box::new(self),
            pattern: Box::new(pattern),
            negated: false,
        }
    }

    /// Creates an IS NULL expression.
    #[must_use]
    pub fn is_null(self) -> Self {
        Self::IsNull {
            expr: Box::new(self),
            negated: false,
        }
    }

    /// Returns true for `AND` and `OR` nodes.
    #[must_use]
    pub const fn is_logical(&self) -> bool {
        matches!(self, Self::And(..) | Self::Or(..))
    }

    /// Returns true if this node carries a predicate-level negation
    /// (`<>`, `NOT IN`, `NOT BETWEEN`, `NOT LIKE`, `IS NOT NULL`, `NOT EXISTS`).
    #[must_use]
    pub const fn is_negated_predicate(&self) -> bool {
        match self {
            Self::Compare { op, .. } => matches!(op, CompareOp::NotEq),
            Self::Between { negated, .. }
            | Self::InList { negated, .. }
            | Self::InSubquery { negated, .. }
            | Self::Like { negated, .. }
            | Self::IsNull { negated, .. }
            | Self::Exists { negated, .. } => *negated,
            _ => false,
        }
    }
}
