//! Syntax frontend for the MYA language: indentation preprocessing, code-line
//! lexing, and the parser-facing token stream.
//!
//! MYA is an off-side-rule language: block structure comes from leading
//! whitespace rather than explicit delimiters. The [`preprocessor`] makes that
//! structure explicit as synthetic `INDENT`/`DEDENT` tokens and records every
//! scope opening in a ledger, the [`lexer`] scans the contents of individual
//! code lines, and [`stream`] splices the two into the flat stream a
//! grammar-driven parser consumes.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": no AST construction, no
//!   semantic analysis.
//! - The preprocessor always returns a well-bracketed stream. Indentation
//!   faults become collected diagnostics, never early exits.
//!
//! ## Examples
//! ```rust
//! use mya_syntax::preprocessor::IndentationPreprocessor;
//!
//! let pre = IndentationPreprocessor::default().process("fn greet():\n    pass\n");
//! assert_eq!(pre.scope_ledger().len(), 1);
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod preprocessor;
pub mod span;
pub mod stream;
