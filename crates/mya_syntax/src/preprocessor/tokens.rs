//! Token types produced by the indentation preprocessor.

use std::fmt;

/// Kinds of preprocessed tokens.
///
/// `Newline` is reserved for a future logical-line pass; the preprocessor
/// never emits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Indent,
    Dedent,
    Newline,
    Code,
    Eof,
}

/// A single preprocessed token.
///
/// `line` is 1-based and counts every physical source line, blanks and
/// comments included, so downstream diagnostics point back into the original
/// file. `column` is the indentation width for `Code` tokens and 0 for
/// synthetic ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Stripped line contents for `Code`; an opaque display form for
    /// synthetic kinds.
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn code(text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind: TokenKind::Code,
            text: text.into(),
            line,
            column,
        }
    }

    pub fn indent(line: usize) -> Self {
        Self {
            kind: TokenKind::Indent,
            text: "<INDENT>".to_string(),
            line,
            column: 0,
        }
    }

    pub fn dedent(line: usize) -> Self {
        Self {
            kind: TokenKind::Dedent,
            text: "<DEDENT>".to_string(),
            line,
            column: 0,
        }
    }

    pub fn newline(line: usize) -> Self {
        Self {
            kind: TokenKind::Newline,
            text: "<NEWLINE>".to_string(),
            line,
            column: 0,
        }
    }

    pub fn eof(line: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            text: "<EOF>".to_string(),
            line,
            column: 0,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Indent => write!(f, "[INDENT]"),
            TokenKind::Dedent => write!(f, "[DEDENT]"),
            TokenKind::Newline => write!(f, "[NEWLINE]"),
            TokenKind::Code => write!(f, "[CODE] {}", self.text),
            TokenKind::Eof => write!(f, "[EOF]"),
        }
    }
}
