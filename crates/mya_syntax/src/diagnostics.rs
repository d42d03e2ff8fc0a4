//! Diagnostics for the MYA syntax frontend.
//!
//! All diagnostics are plain values: the preprocessor and lexer collect them
//! and keep going, so the caller decides what is fatal. A [`DedentMismatch`]
//! in particular is a warning; the stream it accompanies is still well
//! bracketed and can be handed to a parser for richer follow-up errors.

use miette::Diagnostic;
use thiserror::Error;

use crate::span::Span;

/// A dedent landed on an indentation width that no enclosing block opened.
///
/// The preprocessor closes scopes down to the nearest lower width and
/// continues from there.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("line {line}: dedent to width {found} matches no open block (closed back to width {resolved})")]
#[diagnostic(code(mya::preprocess::dedent_mismatch), severity(Warning))]
pub struct DedentMismatch {
    /// 1-based source line of the triggering code line
    pub line: usize,
    /// Indentation width the line actually has
    pub found: usize,
    /// Stack level the preprocessor settled on
    pub resolved: usize,
}

/// A scan error inside a single code payload, in payload-relative bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LexError {
    pub message: String,
    pub span: Span,
}

impl LexError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

/// A [`LexError`] re-based to original source coordinates by the
/// token-stream adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("line {line}, column {column}: {message}")]
#[diagnostic(code(mya::lex::unexpected))]
pub struct StreamError {
    pub message: String,
    /// 1-based source line
    pub line: usize,
    /// 0-based source column
    pub column: usize,
}
