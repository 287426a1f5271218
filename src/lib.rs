#![allow(clippy::module_inception)]

use std::{
    fs,
    io::{self, ErrorKind, Write},
    path::Path,
    rc::Rc,
};

use crate::{
    errors::errors::{Error, ErrorImpl, ErrorTip},
    lexer::tokens::{Token, TokenKind},
};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub usize, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.0 - self.start.0
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Reads a source file, reporting a missing file distinctly from other
/// I/O failures.
pub fn read_source(path: &Path) -> Result<String, Error> {
    let display = path.to_string_lossy().into_owned();

    fs::read_to_string(path).map_err(|e| {
        let error_impl = match e.kind() {
            ErrorKind::NotFound => ErrorImpl::FileNotFound { path: display.clone() },
            _ => ErrorImpl::FileReadError {
                path: display.clone(),
                message: e.to_string(),
            },
        };

        Error::new(error_impl, Position(0, Rc::new(display.clone())))
    })
}

/// Writes one line per token as `Kind, "text"`. Newline tokens are
/// skipped unless `show_newlines` is set.
pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token], show_newlines: bool) -> io::Result<()> {
    for token in tokens {
        if token.kind == TokenKind::Newline && !show_newlines {
            continue;
        }

        if token.kind == TokenKind::Newline {
            writeln!(out, "{}, \"\\n\"", token.kind)?;
        } else {
            writeln!(out, "{}", token)?;
        }
    }

    Ok(())
}

pub fn print_tokens(tokens: &[Token]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_tokens(&mut lock, tokens, false)
}

/// Finds the 1-based line number, the line text and the column of a byte
/// offset in `source`.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((index + 1, line.to_string(), position - start));
        }

        start = end;
    }

    None
}


/// Renders an error as a caret diagnostic pointing into `source`:
///
/// ```text
/// Error: InvalidCharacter (Invalid character `@`)
/// -> prog.bas
///   |
/// 2 | 20 LET b = @
///   | -----------^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let position = error.get_position();

    let located = if error.is_lexical() {
        get_line_at_position(source, position.0)
    } else {
        None
    };

    let (line, line_text, line_pos) = match located {
        Some(found) => found,
        None => return format!("Error: {}\n", error),
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", position.1));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    // Caret width counts characters, not bytes.
    let column = line_text[..line_pos].chars().count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

pub fn display_error(error: &Error, source: &str) {
    eprint!("{}", format_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches(' ').len();

    (String::from(&string[start..]), start)
}
