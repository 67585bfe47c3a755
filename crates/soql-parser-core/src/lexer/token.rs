//! Token types for the SQL lexer.

use super::Span;

/// SQL and SOQL keywords.
///
/// Keywords are matched case-insensitively; the source casing is dropped and
/// [`Keyword::as_str`] gives the canonical spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Keyword {
    // Query clauses
    Select,
    From,
    Where,
    Group,
    By,
    Having,
    Order,
    Limit,

    // Joins
    Join,
    Inner,
    Left,
    Right,
    Full,
    Outer,
    Cross,
    On,
    Using,

    // Predicates and logical operators
    And,
    Or,
    Not,
    In,
    Between,
    Like,
    Is,
    Null,
    Exists,
    True,
    False,

    // Ordering
    Asc,
    Desc,
    Nulls,
    First,
    Last,

    // SOQL
    Scope,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SELECT" => Some(Self::Select),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "GROUP" => Some(Self::Group),
            "BY" => Some(Self::By),
            "HAVING" => Some(Self::Having),
            "ORDER" => Some(Self::Order),
            "LIMIT" => Some(Self::Limit),
            "JOIN" => Some(Self::Join),
            "INNER" => Some(Self::Inner),
            "LEFT" => Some(Self::Left),
            "RIGHT" => Some(Self::Right),
            "FULL" => Some(Self::Full),
            "OUTER" => Some(Self::Outer),
            "CROSS" => Some(Self::Cross),
            "ON" => Some(Self::On),
            "USING" => Some(Self::Using),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            "IN" => Some(Self::In),
            "BETWEEN" => Some(Self::Between),
            "LIKE" => Some(Self::Like),
            "IS" => Some(Self::Is),
            "NULL" => Some(Self::Null),
            "EXISTS" => Some(Self::Exists),
            "TRUE" => Some(Self::True),
            "FALSE" => Some(Self::False),
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            "NULLS" => Some(Self::Nulls),
            "FIRST" => Some(Self::First),
            "LAST" => Some(Self::Last),
            "SCOPE" => Some(Self::Scope),
            _ => None,
        }
    }

    /// Returns the canonical (upper-case) spelling of the keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Group => "GROUP",
            Self::By => "BY",
            Self::Having => "HAVING",
            Self::Order => "ORDER",
            Self::Limit => "LIMIT",
            Self::Join => "JOIN",
            Self::Inner => "INNER",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Full => "FULL",
            Self::Outer => "OUTER",
            Self::Cross => "CROSS",
            Self::On => "ON",
            Self::Using => "USING",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::In => "IN",
            Self::Between => "BETWEEN",
            Self::Like => "LIKE",
            Self::Is => "IS",
            Self::Null => "NULL",
            Self::Exists => "EXISTS",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::Nulls => "NULLS",
            Self::First => "FIRST",
            Self::Last => "LAST",
            Self::Scope => "SCOPE",
        }
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    // Literals
    /// Integer literal, source text kept verbatim (e.g., 42)
    Integer(String),
    /// Decimal literal, source text kept verbatim (e.g., 10.50)
    Decimal(String),
    /// String literal contents without the enclosing quotes
    String(String),

    // Identifiers and keywords
    /// Identifier (e.g., StageName, toLabel)
    Identifier(String),
    /// SQL keyword
    Keyword(Keyword),

    // Operators
    /// *
    Star,
    /// =
    Eq,
    /// != or <>
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// .
    Dot,
    /// ;
    Semicolon,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns a short human-readable description, used in diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Integer(text) | Self::Decimal(text) => format!("number {text}"),
            Self::String(text) => format!("string '{text}'"),
            Self::Identifier(name) => format!("identifier {name}"),
            Self::Keyword(kw) => format!("keyword {}", kw.as_str()),
            Self::Star => String::from("'*'"),
            Self::Eq => String::from("'='"),
            Self::NotEq => String::from("'<>'"),
            Self::Lt => String::from("'<'"),
            Self::LtEq => String::from("'<='"),
            Self::Gt => String::from("'>'"),
            Self::GtEq => String::from("'>='"),
            Self::LeftParen => String::from("'('"),
            Self::RightParen => String::from("')'"),
            Self::Comma => String::from("','"),
            Self::Dot => String::from("'.'"),
            Self::Semicolon => String::from("';'"),
            Self::Eof => String::from("end of input"),
        }
    }
}

/// A token with its span in the source code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }
}
