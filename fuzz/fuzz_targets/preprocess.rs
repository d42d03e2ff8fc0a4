#![no_main]

use libfuzzer_sys::fuzz_target;
use mya_syntax::preprocessor::{IndentationPreprocessor, TokenKind};
use mya_syntax::stream;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let pre = IndentationPreprocessor::default().process(s);

        // The stream must stay balanced whatever the input
        let indents = pre.tokens().iter().filter(|t| t.kind == TokenKind::Indent).count();
        let dedents = pre.tokens().iter().filter(|t| t.kind == TokenKind::Dedent).count();
        assert_eq!(indents, dedents);
        assert_eq!(pre.scope_ledger().len(), indents);

        // Re-lexing may reject payloads but must not panic
        let _ = stream::adapt(&pre);
    }
});
