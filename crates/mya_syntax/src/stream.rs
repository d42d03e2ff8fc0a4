//! Parser-facing token stream.
//!
//! Re-emits the preprocessor's output in the shape a grammar-driven parser
//! consumes: the synthetic `INDENT`/`DEDENT` brackets become ordinary token
//! kinds, and every `CODE` payload is re-lexed in place with its sub-tokens
//! re-based to original source coordinates. Keeping this a separate pass over
//! a materialized token stream costs a second walk, but lets the preprocessor
//! and lexer be tested in isolation.

use crate::diagnostics::StreamError;
use crate::lexer;
use crate::lexer::TokenKind;
use crate::preprocessor::{Preprocessed, TokenKind as PreKind};

/// A lexed token positioned in original source coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamToken {
    pub kind: TokenKind,
    /// 1-based source line
    pub line: usize,
    /// 0-based source column
    pub column: usize,
}

/// Translate preprocessed output into a parser-ready stream.
///
/// `CODE` payloads are re-lexed with [`lexer::lex`]; their sub-tokens inherit
/// the payload's line and have their columns re-based past the stripped
/// indentation. The sub-lexer's own end-of-input marker is dropped; the
/// preprocessor's `Eof` becomes the stream terminal.
///
/// Scan errors inside payloads are collected across the whole stream and
/// returned together, re-based the same way.
#[tracing::instrument(skip_all, fields(token_count = pre.tokens().len()))]
pub fn adapt(pre: &Preprocessed) -> Result<Vec<StreamToken>, Vec<StreamError>> {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    for token in pre.tokens() {
        let kind = match token.kind {
            PreKind::Indent => TokenKind::Indent,
            PreKind::Dedent => TokenKind::Dedent,
            PreKind::Newline => TokenKind::Newline,
            PreKind::Eof => TokenKind::Eof,
            PreKind::Code => {
                match lexer::lex(&token.text) {
                    Ok(sub_tokens) => {
                        for sub in sub_tokens {
                            // Drop the sub-lexer's end-of-input marker
                            if matches!(sub.kind, TokenKind::Eof) {
                                continue;
                            }
                            tokens.push(StreamToken {
                                kind: sub.kind,
                                line: token.line,
                                column: token.column + sub.span.start,
                            });
                        }
                    }
                    Err(errs) => {
                        errors.extend(errs.into_iter().map(|e| StreamError {
                            message: e.message,
                            line: token.line,
                            column: token.column + e.span.start,
                        }));
                    }
                }
                continue;
            }
        };
        tokens.push(StreamToken {
            kind,
            line: token.line,
            column: 0,
        });
    }

    if errors.is_empty() {
        Ok(tokens)
    } else {
        Err(errors)
    }
}
