//! Indentation preprocessing for MYA source.
//!
//! MYA infers block structure from leading whitespace. The preprocessor walks
//! the source line by line, maintains a stack of open indentation widths, and
//! makes the structure explicit as synthetic `INDENT`/`DEDENT` tokens. Each
//! opened scope is also recorded in a [`ScopeLedger`] so later passes can
//! move between sibling scopes without re-scanning the source.
//!
//! ## Module Structure
//!
//! - `tokens` - Preprocessed token types ([`Token`], [`TokenKind`])
//! - `scope` - Scope classification and the ledger ([`ScopeType`],
//!   [`ScopeInfo`], [`ScopeLedger`])

mod scope;
mod tokens;

pub use scope::{ScopeInfo, ScopeLedger, ScopeType};
pub use tokens::{Token, TokenKind};

use crate::diagnostics::DedentMismatch;

/// Space-equivalent width of a tab when measuring indentation.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Converts leading whitespace into symbolic `INDENT`/`DEDENT` tokens.
///
/// The only configuration is the tab width. One instance may be reused
/// serially; every call to [`process`](Self::process) starts from a fresh
/// stack and empty outputs.
#[derive(Debug, Clone)]
pub struct IndentationPreprocessor {
    tab_width: usize,
}

impl Default for IndentationPreprocessor {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl IndentationPreprocessor {
    /// Create a preprocessor with the given tab width.
    ///
    /// ## Panics
    ///
    /// Panics if `tab_width` is zero.
    pub fn new(tab_width: usize) -> Self {
        assert!(tab_width > 0, "tab width must be positive");
        Self { tab_width }
    }

    /// Process source text into a token stream and scope ledger.
    ///
    /// The returned stream is always well bracketed: every `INDENT` is
    /// matched by a `DEDENT` and the final token is `Eof`, malformed input
    /// included. Indentation faults are collected as diagnostics, never
    /// raised.
    #[tracing::instrument(skip_all, fields(source_len = source.len()))]
    pub fn process(&self, source: &str) -> Preprocessed {
        let mut out = Preprocessed::default();
        let mut indent_stack: Vec<usize> = vec![0];
        let mut previous_indent = 0usize;
        let mut current_line = 1usize;
        // Classification of the most recent code line. The line that opens a
        // scope is the one *before* the line whose deeper indent fires the
        // INDENT, so it is remembered across the transition.
        let mut opening_scope: Option<ScopeType> = None;

        for line in source.lines() {
            // Blank and comment lines are transparent: no token, no ledger
            // entry, no indent update.
            if is_blank(line) || is_comment(line) {
                current_line += 1;
                continue;
            }

            let (current_indent, prefix_len) = self.measure_indent(line);
            let payload = &line[prefix_len..];

            if current_indent > previous_indent {
                indent_stack.push(current_indent);
                out.tokens.push(Token::indent(current_line));
                out.ledger.push(ScopeInfo {
                    indent_level: current_indent,
                    line: current_line,
                    // A source that starts indented has no opening line; the
                    // triggering line classifies itself.
                    scope_type: opening_scope.unwrap_or_else(|| ScopeType::classify(payload)),
                });
            } else if current_indent < previous_indent {
                while indent_stack.last().is_some_and(|&top| top > current_indent) {
                    indent_stack.pop();
                    out.tokens.push(Token::dedent(current_line));
                }
                let resolved = indent_stack.last().copied().unwrap_or(0);
                if resolved != current_indent {
                    tracing::warn!(
                        line = current_line,
                        found = current_indent,
                        resolved,
                        "dedent misalignment"
                    );
                    out.diagnostics.push(DedentMismatch {
                        line: current_line,
                        found: current_indent,
                        resolved,
                    });
                }
            }

            out.tokens.push(Token::code(payload, current_line, current_indent));
            opening_scope = Some(ScopeType::classify(payload));
            previous_indent = current_indent;
            current_line += 1;
        }

        // Close every scope still open at end of input.
        while indent_stack.len() > 1 {
            indent_stack.pop();
            out.tokens.push(Token::dedent(current_line));
        }
        out.tokens.push(Token::eof(current_line));

        out
    }

    /// Measure the leading whitespace of a line: width in space-equivalent
    /// columns (tabs count as `tab_width`) and prefix length in bytes.
    fn measure_indent(&self, line: &str) -> (usize, usize) {
        let mut width = 0;
        let mut bytes = 0;
        for c in line.chars() {
            match c {
                ' ' => width += 1,
                '\t' => width += self.tab_width,
                _ => break,
            }
            bytes += c.len_utf8();
        }
        (width, bytes)
    }
}

/// The preprocessor's outputs: token stream, scope ledger, and any
/// recoverable diagnostics.
///
/// All three collections are append-only during the run and handed to the
/// caller as immutable views.
#[derive(Debug, Clone, Default)]
pub struct Preprocessed {
    tokens: Vec<Token>,
    ledger: ScopeLedger,
    diagnostics: Vec<DedentMismatch>,
}

impl Preprocessed {
    /// The token stream. The last token is always `Eof`.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// One ledger entry per emitted `INDENT`, in emission order.
    pub fn scope_ledger(&self) -> &ScopeLedger {
        &self.ledger
    }

    /// Non-fatal indentation faults found during the run.
    pub fn diagnostics(&self) -> &[DedentMismatch] {
        &self.diagnostics
    }
}

fn is_blank(line: &str) -> bool {
    line.chars().all(|c| matches!(c, ' ' | '\t' | '\r'))
}

fn is_comment(line: &str) -> bool {
    line.trim_start_matches([' ', '\t']).starts_with('$')
}
