//! Error types for lexing and reading source files.
//!
//! - Error structures with source position information
//! - The fatal `InvalidCharacter` lexer error
//! - File collaborator errors (missing or unreadable files)
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;
