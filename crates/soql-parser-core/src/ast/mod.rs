//! Abstract Syntax Tree (AST) types for SQL and SOQL queries.
//!
//! The tree is plain data: the parser builds it, the printer in
//! [`crate::printer`] renders it, and nothing mutates it in between.

mod expression;
mod statement;

pub use expression::{ColumnRef, CompareOp, Expr, FunctionCall, Literal};
pub use statement::{
    FromClause, JoinCondition, JoinNode, JoinType, NullOrdering, OrderDirection, OrderItem,
    OrderTarget, SelectItem, SelectQuery, Statement, TableRef,
};
