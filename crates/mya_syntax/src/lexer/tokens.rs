//! Token types for the MYA code-line lexer.

use crate::span::Span;
use phf::phf_map;

/// Token kinds for MYA code.
///
/// `Indent`/`Dedent`/`Newline`/`Eof` are never produced by scanning a
/// payload; the token-stream adapter re-emits them from the preprocessor's
/// synthetic tokens so parsers see a single uniform kind.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keywords ==========
    Fn,     // function definition
    MainKw, // program entry point
    Let,    // variable binding
    Print,  // print statement
    Return, // return statement
    Struct, // struct declaration
    Render, // render block
    Asm,    // inline assembly block
    If,     // conditional
    For,    // loop
    Filter, // filter guard
    In,     // loop iterator keyword
    Range,  // range expression
    To,     // range bound keyword
    Pass,   // filter pass arm
    End,    // block terminator

    // ========== Identifiers and Literals ==========
    Ident(String),
    Int(i64),
    Float(f64),
    Str(String),

    // ========== Operators ==========
    Plus,  // +
    Minus, // -
    Star,  // *
    Slash, // /
    Eq,    // =
    EqEq,  // ==
    NotEq, // !=
    Lt,    // <
    Gt,    // >
    LtEq,  // <=
    GtEq,  // >=
    Arrow, // ->
    Colon, // :
    Semi,  // ;
    Comma, // ,

    // ========== Brackets ==========
    LParen, // (
    RParen, // )

    // ========== Indentation (adapter-emitted) ==========
    Newline,
    Indent,
    Dedent,

    // ========== Special ==========
    Eof, // end of input
}

/// Keyword lookup table using a perfect hash map for O(1) lookup.
///
/// Maps MYA source text to `TokenKind` variants; the lexer consults it after
/// scanning an identifier.
pub static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "fn" => TokenKind::Fn,
    "Main" => TokenKind::MainKw,
    "let" => TokenKind::Let,
    "print" => TokenKind::Print,
    "return" => TokenKind::Return,
    "struct" => TokenKind::Struct,
    "render" => TokenKind::Render,
    "asm" => TokenKind::Asm,
    "if" => TokenKind::If,
    "for" => TokenKind::For,
    "filter" => TokenKind::Filter,
    "in" => TokenKind::In,
    "range" => TokenKind::Range,
    "to" => TokenKind::To,
    "pass" => TokenKind::Pass,
    "end" => TokenKind::End,
};

/// A token with its kind and payload-relative span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}
