//! CLI module for the MYA frontend
//!
//! This module provides the command-line interface for the indentation
//! preprocessor driver.
//!
//! ## Usage
//!
//! - `mya <file>` - Preprocess a source file and report a summary
//! - `--tokens` - Dump the preprocessed token stream
//! - `--scope-ledger` - Dump the scope ledger
//! - `--stream` - Re-lex code payloads and dump the parser-ready stream
//! - `--demo` - Run against the built-in demo program
//! - `--tab-width N` - Space-equivalent width of a tab (default 4)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::version::MYA_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The MYA language indentation frontend
#[derive(Parser, Debug)]
#[command(name = "mya")]
#[command(version = MYA_VERSION)]
#[command(about = "The MYA language indentation frontend", long_about = None)]
pub struct Cli {
    /// Source file to preprocess
    #[arg(value_name = "FILE", required_unless_present = "demo", conflicts_with = "demo")]
    pub file: Option<PathBuf>,

    /// Run against the built-in demo program
    #[arg(long)]
    pub demo: bool,

    /// Dump the preprocessed token stream
    #[arg(long)]
    pub tokens: bool,

    /// Dump the scope ledger
    #[arg(long = "scope-ledger")]
    pub scope_ledger: bool,

    /// Re-lex code payloads and dump the parser-ready stream
    #[arg(long)]
    pub stream: bool,

    /// Space-equivalent width of a tab character
    #[arg(long = "tab-width", value_name = "N", default_value_t = 4)]
    pub tab_width: usize,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. The command
/// implementation returns `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match commands::preprocess(&cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}
