//! Lexical analysis for line-numbered BASIC source.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a flat sequence of classified tokens. It handles:
//!
//! - An ordered, regex-based rule table where the first match wins
//! - Keywords, identifiers, numbers, symbols and string literals
//! - `REM` comments running to the end of their line
//! - Newline tokens, which are kept for callers to filter

pub mod lexer;
pub mod tokens;
