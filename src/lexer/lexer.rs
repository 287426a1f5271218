use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind, COMMENT_KEYWORD, EOF_TEXT, KEYWORDS};

/// A recognition rule. A `None` kind recognises and discards the match.
pub struct Rule {
    pub regex: Regex,
    pub kind: Option<TokenKind>,
}

impl Rule {
    fn new(pattern: &str, kind: Option<TokenKind>) -> Rule {
        // Every rule is anchored at the cursor, never searched for.
        let regex = Regex::new(&format!("^(?:{})", pattern))
            .unwrap_or_else(|e| panic!("invalid lexer rule {:?}: {}", pattern, e));

        Rule { regex, kind }
    }

    /// Length in bytes of the match at the start of `remaining`, if any.
    pub fn match_len(&self, remaining: &str) -> Option<usize> {
        self.regex
            .find(remaining)
            .map(|m| m.end())
            .filter(|len| *len > 0)
    }
}

fn keyword_pattern() -> String {
    let mut keywords = KEYWORDS.iter().copied().collect::<Vec<&str>>();
    keywords.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

    format!("(?:{})\\b", keywords.join("|"))
}

lazy_static! {
    /// Ordered rule table; the first rule matching at the cursor wins.
    pub static ref RULES: Vec<Rule> = vec![
        Rule::new(&keyword_pattern(), Some(TokenKind::Keyword)),
        Rule::new("[A-Za-z_][A-Za-z0-9_]*", Some(TokenKind::Identifier)),
        Rule::new("[0-9]+(?:\\.[0-9]+)?", Some(TokenKind::Number)),
        Rule::new("[-+*/=><!(),:;]", Some(TokenKind::Symbol)),
        Rule::new("\".*?\"", Some(TokenKind::StringLiteral)),
        Rule::new("\\n", Some(TokenKind::Newline)),
        Rule::new("[^\\S\\n]+", None),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn span(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos, Rc::clone(&self.file)),
            end: Position(self.pos + len, Rc::clone(&self.file)),
        }
    }

    /// Length of a comment starting at the cursor: up to the line break
    /// (`\n` or the `\r` of a `\r\n`), or to end of input on the last line.
    fn comment_len(&self) -> usize {
        let line = match self.remainder().find('\n') {
            Some(end) => &self.remainder()[..end],
            None => self.remainder(),
        };

        line.strip_suffix('\r').unwrap_or(line).len()
    }

    fn step(&mut self) -> Result<(), Error> {
        let matched = RULES
            .iter()
            .find_map(|rule| rule.match_len(self.remainder()).map(|len| (rule.kind, len)));

        let (kind, mut len) = match matched {
            Some(found) => found,
            None => {
                let character = self.at().unwrap_or_default();
                debug!(offset = self.pos, ?character, "no rule matches");
                return Err(Error::new(
                    ErrorImpl::InvalidCharacter { character },
                    Position(self.pos, Rc::clone(&self.file)),
                ));
            }
        };

        if let Some(kind) = kind {
            if kind == TokenKind::Keyword && &self.remainder()[..len] == COMMENT_KEYWORD {
                len = self.comment_len();
            }

            let token = MK_TOKEN!(kind, String::from(&self.remainder()[..len]), self.span(len));
            trace!(offset = self.pos, %kind, value = ?token.value, comment = token.is_comment(), "token");
            self.push(token);
        }

        self.advance_n(len);
        Ok(())
    }

    /// Runs the lexer to completion, consuming it.
    pub fn lex(mut self) -> Result<Vec<Token>, Error> {
        while !self.at_eof() {
            self.step()?;
        }

        let eof = MK_TOKEN!(TokenKind::EndOfInput, String::from(EOF_TEXT), self.span(0));
        self.push(eof);

        debug!(file = %self.file, tokens = self.tokens.len(), "lexed source");
        Ok(self.tokens)
    }
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    Lexer::new(source, file).lex()
}
