//! CLI command implementations
//!
//! The command function returns `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use mya_syntax::preprocessor::{IndentationPreprocessor, ScopeLedger, Token};
use mya_syntax::stream;

use super::{Cli, CliError, CliResult, ExitCode};

/// Built-in demo program - embedded at compile time from assets/example.mya
const DEMO_SOURCE: &str = include_str!("../../assets/example.mya");

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// during preprocessing.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(path: &Path) -> CliResult<String> {
    // Check file size before reading
    let metadata = fs::metadata(path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(path)
        .map_err(|e| CliError::failure(format!("Error reading file '{}': {}", path.display(), e)))
}

/// Preprocess the requested source and print the selected views.
pub fn preprocess(cli: &Cli) -> CliResult<ExitCode> {
    if cli.tab_width == 0 {
        return Err(CliError::failure("tab width must be positive"));
    }

    let (name, source) = if cli.demo {
        ("<demo>".to_string(), DEMO_SOURCE.to_string())
    } else {
        let Some(file) = &cli.file else {
            return Err(CliError::failure("no input file (pass FILE or --demo)"));
        };
        (file.display().to_string(), read_source(file)?)
    };

    let pre = IndentationPreprocessor::new(cli.tab_width).process(&source);
    tracing::debug!(
        tokens = pre.tokens().len(),
        scopes = pre.scope_ledger().len(),
        "preprocessing complete"
    );

    println!(
        "{}: {} tokens, {} scopes",
        name,
        pre.tokens().len(),
        pre.scope_ledger().len()
    );

    // Indentation faults are warnings: report them, keep the exit code
    for diag in pre.diagnostics() {
        eprintln!("{:?}", miette::Report::new(diag.clone()));
    }

    if cli.tokens {
        println!();
        print!("{}", render_tokens(pre.tokens()));
    }

    if cli.scope_ledger {
        println!();
        print!("{}", render_scope_ledger(pre.scope_ledger()));
    }

    if cli.stream {
        match stream::adapt(&pre) {
            Ok(tokens) => {
                println!();
                for t in &tokens {
                    println!("{}:{}: {:?}", t.line, t.column, t.kind);
                }
            }
            Err(errors) => {
                for err in errors {
                    eprintln!("{:?}", miette::Report::new(err));
                }
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Render the token dump, one token per line.
fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!("Line {}: {}\n", token.line, token));
    }
    out
}

/// Render the scope ledger dump.
fn render_scope_ledger(ledger: &ScopeLedger) -> String {
    let mut out = String::from("=== Scope Ledger (Lateral Navigation Map) ===\n");
    for (i, scope) in ledger.iter().enumerate() {
        out.push_str(&format!(
            "Scope {}: level={}, line={}, type={}\n",
            i, scope.indent_level, scope.line, scope.scope_type
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn demo_source_preprocesses_cleanly() {
        let pre = IndentationPreprocessor::default().process(DEMO_SOURCE);
        assert!(pre.diagnostics().is_empty());
        assert!(!pre.scope_ledger().is_empty());
        // the demo exercises every scope category at least once
        let types: Vec<_> = pre.scope_ledger().iter().map(|s| s.scope_type.as_str()).collect();
        for expected in ["function", "filter", "loop", "struct", "render", "asm"] {
            assert!(types.contains(&expected), "demo is missing a {} scope", expected);
        }
    }

    #[test]
    fn demo_source_relexes_cleanly() {
        let pre = IndentationPreprocessor::default().process(DEMO_SOURCE);
        let tokens = stream::adapt(&pre).unwrap();
        assert!(tokens.len() > pre.scope_ledger().len());
    }

    #[test]
    fn token_dump_matches_debug_format() {
        let pre = IndentationPreprocessor::default().process("a:\n    b\n");
        let dump = render_tokens(pre.tokens());
        let expected = "\
Line 1: [CODE] a:
Line 2: [INDENT]
Line 2: [CODE] b
Line 3: [DEDENT]
Line 3: [EOF]
";
        assert_eq!(dump, expected);
    }

    #[test]
    fn ledger_dump_lists_scopes_in_order() {
        let pre = IndentationPreprocessor::default().process("fn f():\n    x\n");
        let dump = render_scope_ledger(pre.scope_ledger());
        assert!(dump.contains("Scope 0: level=4, line=2, type=function"));
    }
}
