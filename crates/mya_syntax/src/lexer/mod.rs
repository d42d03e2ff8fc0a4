//! Lexer for MYA code lines.
//!
//! Scans the payload of a single preprocessed `CODE` token:
//! - Keywords (fn, let, print, struct, render, asm, etc.)
//! - Identifiers and literals (int, float, string)
//! - Operators and punctuation (`->`, `==`, `:`, `;`, ...)
//!
//! Indentation never reaches this lexer: the preprocessor strips it and
//! brackets blocks with INDENT/DEDENT before payloads get here, which is
//! also why spans are byte offsets within the payload rather than source
//! positions — the token-stream adapter re-bases them.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types ([`Token`], [`TokenKind`], the keyword table)

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::diagnostics::LexError;
use crate::span::Span;
use tokens::KEYWORDS;

/// Lexer for a single MYA code payload.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given payload.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the whole payload.
    ///
    /// Returns a vector of tokens on success, or every scan error found on
    /// failure. The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<LexError>> {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(self.current_pos, self.current_pos),
        ));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        // Skip inner whitespace
        while let Some(c) = self.peek() {
            if c == ' ' || c == '\t' || c == '\r' {
                self.advance();
            } else {
                break;
            }
        }

        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            // Trailing comment runs to the end of the payload
            '$' => {
                while self.advance().is_some() {}
            }

            // Operators and punctuation
            '+' => self.add_token(TokenKind::Plus, start),
            '-' => self.operator(start, TokenKind::Minus, &[('>', TokenKind::Arrow)]),
            '*' => self.add_token(TokenKind::Star, start),
            '/' => self.add_token(TokenKind::Slash, start),
            '=' => self.operator(start, TokenKind::Eq, &[('=', TokenKind::EqEq)]),
            '!' => {
                if self.match_char('=') {
                    self.add_token(TokenKind::NotEq, start);
                } else {
                    self.errors.push(LexError::new(
                        "unexpected character '!'",
                        Span::new(start, self.current_pos),
                    ));
                }
            }
            '<' => self.operator(start, TokenKind::Lt, &[('=', TokenKind::LtEq)]),
            '>' => self.operator(start, TokenKind::Gt, &[('=', TokenKind::GtEq)]),
            ':' => self.add_token(TokenKind::Colon, start),
            ';' => self.add_token(TokenKind::Semi, start),
            ',' => self.add_token(TokenKind::Comma, start),
            '(' => self.add_token(TokenKind::LParen, start),
            ')' => self.add_token(TokenKind::RParen, start),

            // Strings
            '"' => self.scan_string(start),

            // Numbers
            '0'..='9' => self.scan_number(start),

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(start, c),

            _ => {
                self.errors.push(LexError::new(
                    format!("unexpected character '{}'", c),
                    Span::new(start, self.current_pos),
                ));
            }
        }
    }

    // ========================================================================
    // Operator helpers
    // ========================================================================

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    /// Try to match a compound operator, fall back to the simple one.
    fn operator(&mut self, start: usize, simple: TokenKind, compounds: &[(char, TokenKind)]) {
        for (c, kind) in compounds {
            if self.match_char(*c) {
                self.add_token(kind.clone(), start);
                return;
            }
        }
        self.add_token(simple, start);
    }

    // ========================================================================
    // Literal scanning
    // ========================================================================

    fn scan_string(&mut self, start: usize) {
        let mut value = String::new();
        loop {
            match self.advance() {
                Some('"') => {
                    self.add_token(TokenKind::Str(value), start);
                    return;
                }
                Some('\\') => match self.advance() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('\\') => value.push('\\'),
                    Some('"') => value.push('"'),
                    Some(other) => value.push(other),
                    None => break,
                },
                Some(c) => value.push(c),
                None => break,
            }
        }
        self.errors.push(LexError::new(
            "unterminated string literal",
            Span::new(start, self.current_pos),
        ));
    }

    fn scan_number(&mut self, start: usize) {
        while matches!(self.peek(), Some('0'..='9')) {
            self.advance();
        }

        // Fractional part only when a digit follows the dot
        let mut is_float = false;
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            is_float = true;
            self.advance();
            while matches!(self.peek(), Some('0'..='9')) {
                self.advance();
            }
        }

        let text = &self.source[start..self.current_pos];
        if is_float {
            match text.parse::<f64>() {
                Ok(v) => self.add_token(TokenKind::Float(v), start),
                Err(_) => self.errors.push(LexError::new(
                    format!("invalid float literal '{}'", text),
                    Span::new(start, self.current_pos),
                )),
            }
        } else {
            match text.parse::<i64>() {
                Ok(v) => self.add_token(TokenKind::Int(v), start),
                Err(_) => self.errors.push(LexError::new(
                    format!("integer literal out of range '{}'", text),
                    Span::new(start, self.current_pos),
                )),
            }
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize, first: char) {
        let mut name = String::from(first);

        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                name.push(c);
                self.advance();
            } else {
                break;
            }
        }

        let kind = KEYWORDS.get(name.as_str()).cloned().unwrap_or(TokenKind::Ident(name));

        self.add_token(kind, start);
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a single code payload.
///
/// This is a shorthand for `Lexer::new(payload).tokenize()`.
#[tracing::instrument(skip_all, fields(payload_len = payload.len()))]
pub fn lex(payload: &str) -> Result<Vec<Token>, Vec<LexError>> {
    Lexer::new(payload).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
