//! SQL Parser implementation.

use tracing::trace;

use super::error::SyntaxError;
use super::pratt::{infix_binding_power, prefix_binding_power, token_to_compare_op};
use crate::ast::{
    ColumnRef, CompareOp, Expr, FromClause, FunctionCall, JoinCondition, JoinType, Literal,
    NullOrdering, OrderDirection, OrderItem, OrderTarget, SelectItem, SelectQuery, Statement,
    TableRef,
};
use crate::error::ParseError;
use crate::lexer::{Keyword, Lexer, Span, Token, TokenKind};

/// Maximum nesting of expressions (parentheses, subqueries, `NOT` chains).
pub const MAX_DEPTH: usize = 100;

type PResult<T> = Result<T, SyntaxError>;

/// SQL/SOQL parser over a fully tokenized input.
pub struct Parser {
    tokens: Vec<Token>,
    /// Index of the current token. Never moves past the trailing `Eof`.
    pos: usize,
    /// Current expression nesting depth.
    depth: usize,
}

impl Parser {
    /// Tokenizes `input` and creates a parser positioned at its first token.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Lex` if the input cannot be tokenized.
    pub fn new(input: &str) -> Result<Self, ParseError> {
        let tokens = Lexer::new(input).tokenize()?;
        Ok(Self {
            tokens,
            pos: 0,
            depth: 0,
        })
    }

    /// Parses a single SQL statement, leaving any trailing tokens unread.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not a valid statement.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match &self.current().kind {
            TokenKind::Keyword(Keyword::Select) => {
                Ok(Statement::Select(self.parse_select_query()?))
            }
            kind => Err(SyntaxError::unexpected("SELECT", kind.clone(), self.current().span).into()),
        }
    }

    /// Parses a standalone expression that must span the whole input.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not exactly one expression.
    pub fn parse_expression_only(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression(0)?;
        self.expect_end()?;
        Ok(expr)
    }

    /// Returns true once all tokens have been consumed.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.current().is_eof()
    }

    /// Consumes a `;` if one is next. Returns whether it did.
    pub fn eat_semicolon(&mut self) -> bool {
        if self.check(&TokenKind::Semicolon) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Requires that no tokens remain.
    ///
    /// # Errors
    ///
    /// Returns a `SyntaxError` naming the first leftover token.
    pub fn expect_end(&self) -> Result<(), SyntaxError> {
        if self.is_eof() {
            Ok(())
        } else {
            Err(SyntaxError::unexpected(
                "end of input",
                self.current().kind.clone(),
                self.current().span,
            ))
        }
    }

    /// Parses a SELECT query. Clauses must appear in canonical order.
    fn parse_select_query(&mut self) -> PResult<SelectQuery> {
        self.expect_keyword(Keyword::Select)?;
        let items = self.parse_select_items()?;
        let mut query = SelectQuery::new(items);

        if self.check_keyword(Keyword::From) {
            self.advance();
            query.from = Some(self.parse_from_clause()?);
        }

        if self.check_keyword(Keyword::Using) && self.peek_is_keyword(Keyword::Scope) {
            self.advance();
            self.advance();
            query.using_scope = Some(self.expect_identifier("scope name")?);
        }

        if self.check_keyword(Keyword::Where) {
            self.advance();
            trace!("parsing WHERE clause");
            query.where_clause = Some(self.parse_expression(0)?);
        }

        if self.check_keyword(Keyword::Group) {
            self.advance();
            self.expect_keyword(Keyword::By)?;
            query.group_by = self.parse_column_list()?;
        }

        if self.check_keyword(Keyword::Having) {
            self.advance();
            trace!("parsing HAVING clause");
            query.having = Some(self.parse_expression(0)?);
        }

        if self.check_keyword(Keyword::Order) {
            self.advance();
            self.expect_keyword(Keyword::By)?;
            query.order_by = self.parse_order_by_list()?;
        }

        if self.check_keyword(Keyword::Limit) {
            self.advance();
            query.limit = Some(self.parse_integer_text("row count")?);
        }

        Ok(query)
    }

    /// Parses the select list.
    fn parse_select_items(&mut self) -> PResult<Vec<SelectItem>> {
        let mut items = vec![];
        loop {
            let expr = if self.check(&TokenKind::Star) {
                self.advance();
                Expr::Star
            } else {
                self.parse_expression(0)?
            };
            let alias = self.parse_optional_alias();
            items.push(SelectItem { expr, alias });

            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        Ok(items)
    }

    /// Takes a bare trailing identifier as an alias.
    ///
    /// Keywords lex to their own token kind, so a clause keyword is never
    /// mistaken for an alias.
    fn parse_optional_alias(&mut self) -> Option<String> {
        if let TokenKind::Identifier(name) = &self.current().kind {
            let name = name.clone();
            self.advance();
            Some(name)
        } else {
            None
        }
    }

    /// Parses the FROM clause into a left-deep join tree.
    ///
    /// A comma between sources is read as `CROSS JOIN`.
    fn parse_from_clause(&mut self) -> PResult<FromClause> {
        trace!("parsing FROM clause");
        let mut from = FromClause::Table(self.parse_table_ref()?);

        loop {
            let join_type = if self.check(&TokenKind::Comma) {
                self.advance();
                JoinType::Cross
            } else if self.is_join_keyword() {
                self.parse_join_type()?
            } else {
                break;
            };

            let right = FromClause::Table(self.parse_table_ref()?);
            let condition = if join_type == JoinType::Cross {
                None
            } else {
                Some(self.parse_join_condition()?)
            };
            from = from.join(join_type, right, condition);
        }

        Ok(from)
    }

    /// Parses a table reference: `[qualifier.]name [alias]`.
    fn parse_table_ref(&mut self) -> PResult<TableRef> {
        let first = self.expect_identifier("table name")?;
        let (qualifier, name) = if self.check(&TokenKind::Dot) {
            self.advance();
            (Some(first), self.expect_identifier("table name")?)
        } else {
            (None, first)
        };
        let alias = self.parse_optional_alias();
        Ok(TableRef {
            qualifier,
            name,
            alias,
        })
    }

    /// Checks if current token starts a join.
    fn is_join_keyword(&self) -> bool {
        matches!(
            &self.current().kind,
            TokenKind::Keyword(
                Keyword::Join
                    | Keyword::Inner
                    | Keyword::Left
                    | Keyword::Right
                    | Keyword::Full
                    | Keyword::Cross
            )
        )
    }

    /// Parses a join type, keeping `OUTER` spellings distinct.
    fn parse_join_type(&mut self) -> PResult<JoinType> {
        let join_type = match &self.current().kind {
            TokenKind::Keyword(Keyword::Join) => {
                self.advance();
                return Ok(JoinType::Inner);
            }
            TokenKind::Keyword(Keyword::Inner) => {
                self.advance();
                JoinType::Inner
            }
            TokenKind::Keyword(Keyword::Left) => {
                self.advance();
                self.outer_or(JoinType::LeftOuter, JoinType::Left)
            }
            TokenKind::Keyword(Keyword::Right) => {
                self.advance();
                self.outer_or(JoinType::RightOuter, JoinType::Right)
            }
            TokenKind::Keyword(Keyword::Full) => {
                self.advance();
                self.outer_or(JoinType::FullOuter, JoinType::Full)
            }
            TokenKind::Keyword(Keyword::Cross) => {
                self.advance();
                JoinType::Cross
            }
            kind => {
                return Err(SyntaxError::unexpected(
                    "JOIN keyword",
                    kind.clone(),
                    self.current().span,
                ));
            }
        };
        self.expect_keyword(Keyword::Join)?;
        Ok(join_type)
    }

    /// Consumes an optional `OUTER` and picks the matching join type.
    fn outer_or(&mut self, outer: JoinType, plain: JoinType) -> JoinType {
        if self.check_keyword(Keyword::Outer) {
            self.advance();
            outer
        } else {
            plain
        }
    }

    /// Parses `ON <expr>` or `USING (<columns>)`.
    fn parse_join_condition(&mut self) -> PResult<JoinCondition> {
        if self.check_keyword(Keyword::On) {
            self.advance();
            return Ok(JoinCondition::On(self.parse_expression(0)?));
        }
        if self.check_keyword(Keyword::Using) {
            self.advance();
            let open = self.current().span;
            self.expect(&TokenKind::LeftParen)?;
            let columns = self.parse_identifier_list()?;
            self.expect_closing(open)?;
            return Ok(JoinCondition::Using(columns));
        }
        Err(SyntaxError::unexpected(
            "ON or USING",
            self.current().kind.clone(),
            self.current().span,
        ))
    }

    /// Parses the ORDER BY list.
    fn parse_order_by_list(&mut self) -> PResult<Vec<OrderItem>> {
        let mut items = vec![];
        loop {
            let target = if matches!(self.current().kind, TokenKind::Integer(_)) {
                OrderTarget::Ordinal(self.parse_integer_text("ordinal")?)
            } else {
                OrderTarget::Column(self.parse_column_ref()?)
            };

            let direction = if self.check_keyword(Keyword::Asc) {
                self.advance();
                Some(OrderDirection::Asc)
            } else if self.check_keyword(Keyword::Desc) {
                self.advance();
                Some(OrderDirection::Desc)
            } else {
                None
            };

            let nulls = if self.check_keyword(Keyword::Nulls) {
                self.advance();
                if self.check_keyword(Keyword::First) {
                    self.advance();
                    Some(NullOrdering::First)
                } else if self.check_keyword(Keyword::Last) {
                    self.advance();
                    Some(NullOrdering::Last)
                } else {
                    return Err(SyntaxError::unexpected(
                        "FIRST or LAST",
                        self.current().kind.clone(),
                        self.current().span,
                    ));
                }
            } else {
                None
            };

            items.push(OrderItem {
                target,
                direction,
                nulls,
            });

            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        Ok(items)
    }

    /// Parses an expression using Pratt parsing.
    fn parse_expression(&mut self, min_bp: u8) -> PResult<Expr> {
        if self.depth >= MAX_DEPTH {
            return Err(SyntaxError::new(
                format!("Expression nesting exceeds maximum depth of {MAX_DEPTH}"),
                self.current().span,
            ));
        }
        self.depth += 1;
        let result = self.parse_expression_bp(min_bp);
        self.depth -= 1;
        result
    }

    fn parse_expression_bp(&mut self, min_bp: u8) -> PResult<Expr> {
        let mut lhs = self.parse_prefix()?;

        loop {
            let Some((l_bp, r_bp)) = infix_binding_power(&self.current().kind) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }

            lhs = match &self.current().kind {
                TokenKind::Keyword(Keyword::Or) => {
                    self.advance();
                    let rhs = self.parse_expression(r_bp)?;
                    Expr::Or(Box::new(lhs), Box::new(rhs))
                }
                TokenKind::Keyword(Keyword::And) => {
                    self.advance();
                    let rhs = self.parse_expression(r_bp)?;
                    Expr::And(Box::new(lhs), Box::new(rhs))
                }
                TokenKind::Keyword(Keyword::Is) => {
                    self.advance();
                    let negated = if self.check_keyword(Keyword::Not) {
                        self.advance();
                        true
                    } else {
                        false
                    };
                    self.expect_keyword(Keyword::Null)?;
                    Expr::IsNull {
                        expr: Box::new(lhs),
                        negated,
                    }
                }
                TokenKind::Keyword(Keyword::Not) => {
                    self.advance();
                    self.parse_predicate(lhs, true, r_bp)?
                }
                TokenKind::Keyword(Keyword::In | Keyword::Between | Keyword::Like) => {
                    self.parse_predicate(lhs, false, r_bp)?
                }
                kind => {
                    let Some(op) = token_to_compare_op(kind) else {
                        break;
                    };
                    self.advance();
                    let rhs = self.parse_expression(r_bp)?;
                    Expr::Compare {
                        left: Box::new(lhs),
                        op,
                        right: Box::new(rhs),
                    }
                }
            };
        }

        Ok(lhs)
    }

    /// Parses the `IN`, `BETWEEN` or `LIKE` predicate following `lhs`.
    fn parse_predicate(&mut self, lhs: Expr, negated: bool, r_bp: u8) -> PResult<Expr> {
        let expr = Box::new(lhs);
        match &self.current().kind {
            TokenKind::Keyword(Keyword::In) => {
                self.advance();
                let open = self.current().span;
                self.expect(&TokenKind::LeftParen)?;
                if self.check_keyword(Keyword::Select) {
                    let query = self.parse_select_query()?;
                    self.expect_closing(open)?;
                    Ok(Expr::InSubquery {
                        expr,
                        query: Box::new(query),
                        negated,
                    })
                } else {
                    let list = self.parse_expression_list()?;
                    self.expect_closing(open)?;
                    Ok(Expr::InList {
                        expr,
                        list,
                        negated,
                    })
                }
            }
            TokenKind::Keyword(Keyword::Between) => {
                self.advance();
                let low = self.parse_expression(r_bp)?;
                self.expect_keyword(Keyword::And)?;
                let high = self.parse_expression(r_bp)?;
                Ok(Expr::Between {
                    expr,
                    low: Box::new(low),
                    high: Box::new(high),
                    negated,
                })
            }
            TokenKind::Keyword(Keyword::Like) => {
                self.advance();
                let pattern = self.parse_expression(r_bp)?;
                Ok(Expr::Like {
                    expr,
                    pattern: Box::new(pattern),
                    negated,
                })
            }
            kind => Err(SyntaxError::unexpected(
                "IN, BETWEEN or LIKE",
                kind.clone(),
                self.current().span,
            )),
        }
    }

    /// Parses a prefix expression.
    fn parse_prefix(&mut self) -> PResult<Expr> {
        match prefix_binding_power(&self.current().kind) {
            None => Err(SyntaxError::unexpected(
                "expression",
                self.current().kind.clone(),
                self.current().span,
            )),
            Some(bp) if self.check_keyword(Keyword::Not) => {
                self.advance();
                if self.check_keyword(Keyword::Exists) {
                    return self.parse_exists(true);
                }
                let operand = self.parse_expression(bp)?;
                Ok(fold_not(operand))
            }
            Some(_) => self.parse_primary(),
        }
    }

    /// Parses a primary expression.
    fn parse_primary(&mut self) -> PResult<Expr> {
        let token = self.current().clone();

        match token.kind {
            TokenKind::Integer(text) | TokenKind::Decimal(text) => {
                self.advance();
                Ok(Expr::Literal(Literal::Number(text)))
            }
            TokenKind::String(value) => {
                self.advance();
                Ok(Expr::Literal(Literal::String(value)))
            }
            TokenKind::Keyword(Keyword::True) => {
                self.advance();
                Ok(Expr::boolean(true))
            }
            TokenKind::Keyword(Keyword::False) => {
                self.advance();
                Ok(Expr::boolean(false))
            }

            // Parenthesized expression or subquery
            TokenKind::LeftParen => {
                self.advance();
                if self.check_keyword(Keyword::Select) {
                    let query = self.parse_select_query()?;
                    self.expect_closing(token.span)?;
                    Ok(Expr::Subquery(Box::new(query)))
                } else {
                    let expr = self.parse_expression(0)?;
                    self.expect_closing(token.span)?;
                    Ok(Expr::Paren(Box::new(expr)))
                }
            }

            TokenKind::Keyword(Keyword::Exists) => self.parse_exists(false),

            // Column reference or function call
            TokenKind::Identifier(name) => {
                self.advance();
                if self.check(&TokenKind::LeftParen) {
                    return self.parse_function_call(name);
                }
                if self.check(&TokenKind::Dot) {
                    self.advance();
                    let column = self.expect_identifier("column name")?;
                    return Ok(Expr::Column(ColumnRef {
                        qualifier: Some(name),
                        name: column,
                    }));
                }
                Ok(Expr::Column(ColumnRef {
                    qualifier: None,
                    name,
                }))
            }

            kind => Err(SyntaxError::unexpected("expression", kind, token.span)),
        }
    }

    /// Parses `EXISTS (<select>)`; the `EXISTS` keyword is current.
    fn parse_exists(&mut self, negated: bool) -> PResult<Expr> {
        self.expect_keyword(Keyword::Exists)?;
        let open = self.current().span;
        self.expect(&TokenKind::LeftParen)?;
        let query = self.parse_select_query()?;
        self.expect_closing(open)?;
        Ok(Expr::Exists {
            query: Box::new(query),
            negated,
        })
    }

    /// Parses a function call's argument list. `*` is only accepted alone.
    fn parse_function_call(&mut self, name: String) -> PResult<Expr> {
        let open = self.current().span;
        self.expect(&TokenKind::LeftParen)?;

        let args = if self.check(&TokenKind::RightParen) {
            vec![]
        } else if self.check(&TokenKind::Star) {
            self.advance();
            vec![Expr::Star]
        } else {
            self.parse_expression_list()?
        };

        self.expect_closing(open)?;
        Ok(Expr::Function(FunctionCall { name, args }))
    }

    /// Parses `[qualifier.]name`.
    fn parse_column_ref(&mut self) -> PResult<ColumnRef> {
        let first = self.expect_identifier("column name")?;
        if self.check(&TokenKind::Dot) {
            self.advance();
            let name = self.expect_identifier("column name")?;
            Ok(ColumnRef {
                qualifier: Some(first),
                name,
            })
        } else {
            Ok(ColumnRef {
                qualifier: None,
                name: first,
            })
        }
    }

    /// Parses a comma-separated list of column references.
    fn parse_column_list(&mut self) -> PResult<Vec<ColumnRef>> {
        let mut columns = vec![];
        loop {
            columns.push(self.parse_column_ref()?);
            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        Ok(columns)
    }

    /// Parses a comma-separated list of expressions.
    fn parse_expression_list(&mut self) -> PResult<Vec<Expr>> {
        let mut exprs = vec![];
        loop {
            exprs.push(self.parse_expression(0)?);
            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        Ok(exprs)
    }

    /// Parses a comma-separated list of identifiers.
    fn parse_identifier_list(&mut self) -> PResult<Vec<String>> {
        let mut idents = vec![];
        loop {
            idents.push(self.expect_identifier("column name")?);
            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        Ok(idents)
    }

    /// Parses an integer token, keeping its source text.
    fn parse_integer_text(&mut self, what: &str) -> PResult<String> {
        let token = self.current();
        match &token.kind {
            TokenKind::Integer(text) => {
                let text = text.clone();
                self.advance();
                Ok(text)
            }
            kind => Err(SyntaxError::unexpected(
                format!("integer {what}"),
                kind.clone(),
                token.span,
            )),
        }
    }

    // --- Helper methods ---

    /// Returns the current token.
    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Checks whether the token after the current one is `keyword`.
    fn peek_is_keyword(&self, keyword: Keyword) -> bool {
        self.tokens
            .get(self.pos + 1)
            .is_some_and(|t| t.as_keyword() == Some(keyword))
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Checks if the current token matches the given kind.
    fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.current().kind) == core::mem::discriminant(kind)
    }

    /// Checks if the current token is the given keyword.
    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.current().as_keyword() == Some(keyword)
    }

    /// Expects the current token to be the given kind.
    fn expect(&mut self, kind: &TokenKind) -> PResult<()> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(SyntaxError::unexpected(
                kind.describe(),
                self.current().kind.clone(),
                self.current().span,
            ))
        }
    }

    /// Expects the `)` matching the `(` at `open`.
    ///
    /// The error span runs from the opening parenthesis to the offending
    /// token.
    fn expect_closing(&mut self, open: Span) -> PResult<()> {
        if self.check(&TokenKind::RightParen) {
            self.advance();
            Ok(())
        } else {
            Err(SyntaxError::unexpected(
                format!("')' to close '(' at position {}", open.start),
                self.current().kind.clone(),
                open.merge(self.current().span),
            ))
        }
    }

    /// Expects the current token to be the given keyword.
    fn expect_keyword(&mut self, keyword: Keyword) -> PResult<()> {
        if self.check_keyword(keyword) {
            self.advance();
            Ok(())
        } else {
            Err(SyntaxError::unexpected(
                keyword.as_str(),
                self.current().kind.clone(),
                self.current().span,
            ))
        }
    }

    /// Expects and returns an identifier.
    fn expect_identifier(&mut self, what: &str) -> PResult<String> {
        match &self.current().kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            kind => Err(SyntaxError::unexpected(
                what,
                kind.clone(),
                self.current().span,
            )),
        }
    }
}

/// Applies a prefix `NOT` to an already parsed operand.
///
/// Only an un-negated `=`, `IN`, `BETWEEN` or `LIKE` absorbs the negation;
/// every other operand is wrapped in [`Expr::Not`].
fn fold_not(operand: Expr) -> Expr {
    match operand {
        Expr::Compare {
            left,
            op: CompareOp::Eq,
            right,
        } => Expr::Compare {
            left,
            op: CompareOp::NotEq,
            right,
        },
        Expr::InList {
            expr,
            list,
            negated: false,
        } => Expr::InList {
            expr,
            list,
            negated: true,
        },
        Expr::InSubquery {
            expr,
            query,
            negated: false,
        } => Expr::InSubquery {
            expr,
            query,
            negated: true,
        },
        Expr::Between {
            expr,
            low,
            high,
            negated: false,
        } => Expr::Between {
            expr,
            low,
            high,
            negated: true,
        },
        Expr::Like {
            expr,
            pattern,
            negated: false,
        } => Expr::Like {
            expr,
            pattern,
            negated: true,
        },
        other => Expr::Not(Box::new(other)),
    }
}
