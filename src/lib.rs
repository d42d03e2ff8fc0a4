#![forbid(unsafe_code)]
//! MYA Indentation Frontend
//!
//! MYA is a small significant-whitespace language. This crate provides the
//! command-line driver over the [`mya_syntax`] frontend: it preprocesses raw
//! source into an `INDENT`/`DEDENT`-bracketed token stream, records the scope
//! ledger, and can re-lex code payloads into the parser-ready stream.
//!
//! ## Panic Policy
//!
//! Production code uses `Result` with `?`; the `cli` module enforces
//! `#![deny(clippy::unwrap_used)]`. `.unwrap()` and `.expect()` are
//! acceptable in tests.

pub mod cli;
pub mod version;

pub use mya_syntax::diagnostics;
pub use mya_syntax::lexer;
pub use mya_syntax::preprocessor;
pub use mya_syntax::stream;
