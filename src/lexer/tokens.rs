use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("LET");
        set.insert("IF");
        set.insert("THEN");
        set.insert("ELSE");
        set.insert("END");
        set.insert("FOR");
        set.insert("NEXT");
        set.insert("GOTO");
        set.insert("GOSUB");
        set.insert("RETURN");
        set.insert("REM");
        set.insert("INPUT");
        set
    };
}

/// Keyword that turns the rest of its physical line into comment text.
pub const COMMENT_KEYWORD: &str = "REM";

/// Text carried by the terminating [`TokenKind::EndOfInput`] token.
pub const EOF_TEXT: &str = "EOF";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    Symbol,
    StringLiteral,
    Newline,
    EndOfInput,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, \"{}\"", self.kind, self.value)
    }
}

impl Token {
    pub fn is_comment(&self) -> bool {
        self.kind == TokenKind::Keyword && self.value.starts_with(COMMENT_KEYWORD)
    }
}
