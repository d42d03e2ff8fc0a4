//! Integration tests for the MYA indentation frontend

use mya::preprocessor::{IndentationPreprocessor, Preprocessed, ScopeType, TokenKind};
use mya::stream;

/// Helper to run the preprocessor with default configuration
fn preprocess(source: &str) -> Preprocessed {
    IndentationPreprocessor::default().process(source)
}

const PROGRAM: &str = "\
$ a small MYA program
Main() fn:
    let x: int = 10;

    filter x > 0 pass:
        print \"positive\";

fn double(a: int) -> int:
    return a + a;
";

#[test]
fn program_scopes_are_recorded_in_order() {
    let pre = preprocess(PROGRAM);
    assert!(pre.diagnostics().is_empty());

    let types: Vec<_> = pre.scope_ledger().iter().map(|s| s.scope_type).collect();
    assert_eq!(
        types,
        vec![ScopeType::Function, ScopeType::Filter, ScopeType::Function]
    );

    // the two function bodies open at the same width and are siblings
    let ledger = pre.scope_ledger();
    assert_eq!(ledger.entries()[0].indent_level, ledger.entries()[2].indent_level);
    assert_eq!(ledger.next_sibling(0), Some(2));
    assert_eq!(ledger.prev_sibling(2), Some(0));
    assert_eq!(ledger.enclosing(1), Some(0));
}

#[test]
fn program_stream_is_well_bracketed() {
    let pre = preprocess(PROGRAM);
    let tokens = pre.tokens();

    let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
    let dedents = tokens.iter().filter(|t| t.kind == TokenKind::Dedent).count();
    assert_eq!(indents, dedents);
    assert_eq!(indents, pre.scope_ledger().len());
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

#[test]
fn program_lines_point_into_the_original_file() {
    let pre = preprocess(PROGRAM);
    // the comment on line 1 is transparent; the first code line is line 2
    assert_eq!(pre.tokens()[0].line, 2);
    assert_eq!(pre.tokens()[0].text, "Main() fn:");
    // the filter body INDENT fires on its body line
    let filter_scope = &pre.scope_ledger().entries()[1];
    assert_eq!(filter_scope.line, 6);
    assert_eq!(filter_scope.indent_level, 8);
}

mod stream_pipeline {
    use super::*;
    use mya::lexer::TokenKind as LexKind;

    #[test]
    fn code_payloads_are_relexed_in_place() {
        let pre = preprocess(PROGRAM);
        let tokens = stream::adapt(&pre).expect("program re-lexes cleanly");

        // opens with the Main header tokens
        assert!(matches!(tokens[0].kind, LexKind::MainKw));
        assert!(matches!(tokens[1].kind, LexKind::LParen));
        assert!(matches!(tokens[2].kind, LexKind::RParen));
        assert!(matches!(tokens[3].kind, LexKind::Fn));
        assert!(matches!(tokens[4].kind, LexKind::Colon));
        assert!(matches!(tokens[5].kind, LexKind::Indent));

        // exactly one terminal Eof
        let eofs = tokens.iter().filter(|t| matches!(t.kind, LexKind::Eof)).count();
        assert_eq!(eofs, 1);
        assert!(matches!(tokens.last().map(|t| &t.kind), Some(LexKind::Eof)));
    }

    #[test]
    fn bracket_counts_survive_adaptation() {
        let pre = preprocess(PROGRAM);
        let tokens = stream::adapt(&pre).expect("program re-lexes cleanly");

        let indents = tokens.iter().filter(|t| matches!(t.kind, LexKind::Indent)).count();
        let dedents = tokens.iter().filter(|t| matches!(t.kind, LexKind::Dedent)).count();
        assert_eq!(indents, dedents);
        assert_eq!(indents, pre.scope_ledger().len());
    }

    #[test]
    fn sub_token_columns_land_on_source_text() {
        let source = "a:\n    let v = 3;\n";
        let pre = preprocess(source);
        let tokens = stream::adapt(&pre).expect("re-lexes cleanly");

        // `let` starts where the payload starts
        let let_tok = tokens
            .iter()
            .find(|t| matches!(t.kind, LexKind::Let))
            .expect("let token present");
        assert_eq!((let_tok.line, let_tok.column), (2, 4));

        // the literal sits at its byte offset in the original line
        let int_tok = tokens
            .iter()
            .find(|t| matches!(t.kind, LexKind::Int(3)))
            .expect("int token present");
        assert_eq!(int_tok.column, source.lines().nth(1).unwrap().find('3').unwrap());
    }

    #[test]
    fn lex_failure_reports_every_faulty_payload() {
        let pre = preprocess("a ? b\nc:\n    d @ e\n");
        let errors = stream::adapt(&pre).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].line, 1);
        assert_eq!(errors[1].line, 3);
    }
}

mod malformed_input {
    use super::*;

    #[test]
    fn misaligned_dedent_still_produces_balanced_stream() {
        let pre = preprocess("a:\n        b\n   c\n");
        assert_eq!(pre.diagnostics().len(), 1);

        let indents = pre.tokens().iter().filter(|t| t.kind == TokenKind::Indent).count();
        let dedents = pre.tokens().iter().filter(|t| t.kind == TokenKind::Dedent).count();
        assert_eq!(indents, dedents);
        assert_eq!(pre.tokens().last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn unterminated_blocks_close_at_eof() {
        let pre = preprocess("a:\n    b:\n        c:\n            d");
        let dedents = pre.tokens().iter().filter(|t| t.kind == TokenKind::Dedent).count();
        assert_eq!(dedents, 3);
    }
}
