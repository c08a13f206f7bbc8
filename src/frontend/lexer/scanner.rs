//! Scanner implementation
//!
//! A single pass over the source text with one character of lookahead.
//! The scanner records a token start offset and a current cursor; the
//! lexeme of every emitted token is the source slice between them.

use super::keywords;
use super::tokens::{LexError, Literal, Token, TokenKind};
use crate::util::diagnostic::Reporter;

/// Returns true for ASCII decimal digits
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns true for characters that may start an identifier
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true for characters that may continue an identifier
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Main scanner structure
///
/// Single-use: one instance scans one source string.
pub struct Scanner<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scan the whole source, routing lexical errors to `reporter`
    ///
    /// Never fails: every lexical error is reported exactly once and
    /// scanning resumes at the next character. The returned slice always
    /// ends with an EOF token carrying an empty lexeme and the final
    /// line number.
    pub fn scan_tokens(&mut self, reporter: &mut dyn Reporter) -> &[Token] {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token(reporter);
        }

        self.tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            literal: None,
            line: self.line,
        });
        &self.tokens
    }

    /// Tokens scanned so far
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Consume the scanner, yielding the token sequence
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    fn scan_token(&mut self, reporter: &mut dyn Reporter) {
        let c = self.advance();
        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            '/' => {
                if self.match_char('/') {
                    // A line comment runs to the end of the line
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' | '\n' => {}
            '"' => self.scan_string(reporter),
            c if is_digit(c) => self.scan_number(),
            c if is_identifier_start(c) => self.scan_identifier(),
            c => reporter.report(self.line, &LexError::UnexpectedCharacter(c).to_string()),
        }
    }

    fn scan_string(&mut self, reporter: &mut dyn Reporter) {
        while self.peek() != '"' && !self.is_at_end() {
            self.advance();
        }

        if self.is_at_end() {
            reporter.report(self.line, &LexError::UnterminatedString.to_string());
            return;
        }

        // The closing quote
        self.advance();

        // Quotes belong to the lexeme, not the value
        let value = self.source[self.start + 1..self.current - 1].to_string();
        self.add_token_literal(TokenKind::String, Some(Literal::String(value)));
    }

    fn scan_number(&mut self) {
        while is_digit(self.peek()) {
            self.advance();
        }

        // A fractional part needs a digit after the dot; a trailing dot
        // is left for the next iteration
        if self.peek() == '.' && is_digit(self.peek_next()) {
            self.advance();
            while is_digit(self.peek()) {
                self.advance();
            }
        }

        let value = self.source[self.start..self.current]
            .parse::<f64>()
            .unwrap_or_default();
        self.add_token_literal(TokenKind::Number, Some(Literal::Number(value)));
    }

    fn scan_identifier(&mut self) {
        while is_identifier_char(self.peek()) {
            self.advance();
        }

        let text = &self.source[self.start..self.current];
        let kind = keywords::keyword(text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    /// Consume one character, counting newlines
    fn advance(&mut self) -> char {
        match self.source[self.current..].chars().next() {
            Some('\n') => {
                self.current += 1;
                self.line += 1;
                '\n'
            }
            Some(c) => {
                self.current += c.len_utf8();
                c
            }
            None => '\0',
        }
    }

    /// Consume the next character only when it equals `expected`
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    /// One character of lookahead; `'\0'` at end of input
    fn peek(&self) -> char {
        self.source[self.current..].chars().next().unwrap_or('\0')
    }

    /// Two characters of lookahead
    fn peek_next(&self) -> char {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next().unwrap_or('\0')
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_token_literal(kind, None);
    }

    fn add_token_literal(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = self.source[self.start..self.current].to_string();
        self.tokens.push(Token {
            kind,
            lexeme,
            literal,
            line: self.line,
        });
    }
}
