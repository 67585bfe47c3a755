//! SQL Tokenizer implementation.

use tracing::trace;

use super::{Keyword, LexError, Span, Token, TokenKind};

/// A lexer that tokenizes SQL input.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character after the current one without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skips whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }

            // -- comment
            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            // /* comment */
            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                let comment_start = self.pos;
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        Some(_) => {}
                        None => {
                            return Err(LexError::new(
                                "Unterminated block comment",
                                Span::new(comment_start, self.pos),
                            ));
                        }
                    }
                }
                continue;
            }

            return Ok(());
        }
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a token with the current span.
    const fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.make_span())
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];
        match Keyword::from_str(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier(String::from(text))),
        }
    }

    /// Scans an integer or decimal literal, keeping its source text.
    fn scan_number(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let mut is_decimal = false;
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_decimal = true;
            self.advance(); // .
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let text = String::from(&self.input[self.start..self.pos]);
        if is_decimal {
            self.make_token(TokenKind::Decimal(text))
        } else {
            self.make_token(TokenKind::Integer(text))
        }
    }

    /// Scans a single-quoted string literal.
    ///
    /// The contents are kept verbatim; a doubled quote stays doubled.
    fn scan_string(&mut self) -> Result<Token, LexError> {
        let content_start = self.pos;
        loop {
            match self.advance() {
                Some('\'') if self.peek() == Some('\'') => {
                    self.advance();
                }
                Some('\'') => break,
                Some(_) => {}
                None => {
                    return Err(LexError::new(
                        "Unterminated string literal",
                        self.make_span(),
                    ));
                }
            }
        }

        let content = &self.input[content_start..self.pos - 1];
        Ok(self.make_token(TokenKind::String(String::from(content))))
    }

    /// Scans the next token.
    ///
    /// # Errors
    ///
    /// Returns a `LexError` on an unterminated string literal or comment, or
    /// on a character that cannot start any token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments()?;
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return Ok(self.make_token(TokenKind::Eof));
        };

        let token = match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            ',' => self.make_token(TokenKind::Comma),
            '.' => self.make_token(TokenKind::Dot),
            ';' => self.make_token(TokenKind::Semicolon),
            '*' => self.make_token(TokenKind::Star),
            '=' => self.make_token(TokenKind::Eq),
            '<' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::LtEq)
                } else if self.peek() == Some('>') {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                } else {
                    self.make_token(TokenKind::Lt)
                }
            }
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::GtEq)
                } else {
                    self.make_token(TokenKind::Gt)
                }
            }
            '!' if self.peek() == Some('=') => {
                self.advance();
                self.make_token(TokenKind::NotEq)
            }
            '\'' => self.scan_string()?,
            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_alphabetic() || c == '_' => self.scan_identifier(),
            _ => return Err(LexError::unexpected_char(c, self.make_span())),
        };

        Ok(token)
    }

    /// Tokenizes the entire input. The last token is always `Eof`.
    ///
    /// # Errors
    ///
    /// Returns the first `LexError` encountered.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        trace!(count = tokens.len(), "tokenized input");
        Ok(tokens)
    }
}
