//! Block classification
//!
//!     Each call to [Lexer::next_token] advances the cursor one character and looks at it plus up to
//!     three characters of lookahead to pick the block kind, in this order:
//!
//!         1. line break                       NEWLINE
//!         2. `# `, `## `, `### `              HEADER1..3 (any other `#` falls through to TEXT)
//!         3. digit followed by `.`            OLIST
//!         4. `---`, `***`, `___` line         THEMATIC_BREAK (when enabled)
//!         5. `-` or `*` not doubled           ULIST
//!         6. `>`                              BLOCKQUOTE, nested markers flattened
//!         7. end of input                     EOF
//!         8. backtick run of width N          CODE, closed by exactly N backticks
//!         9. anything else                    TEXT
//!
//!     Skips passed to the cursor cover marker characters only (the `#` run, the digit's dot, the
//!     opening fence), never the space after them, so a marker followed directly by a line break
//!     cannot swallow it. The body is then inline-formatted when the configured scope covers the
//!     kind, and trimmed, which also drops the space after the marker.

use super::cursor::{Cursor, Delimiter};
use crate::rmd::config::{FormatScope, LexerConfig};
use crate::rmd::inlines::InlineFormatter;
use crate::rmd::token::{Token, TokenKind};
use tracing::trace;

/// Stateful scanner over a fully buffered source string.
///
/// A lexer is mutated by every call and is meant to be owned by a single consuming loop.
#[derive(Debug, Clone)]
pub struct Lexer {
    cursor: Cursor,
    formatter: InlineFormatter,
    scope: FormatScope,
    thematic_breaks: bool,
    finished: bool,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self::with_config(source, &LexerConfig::default())
    }

    pub fn with_config(source: &str, config: &LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            formatter: config.formatter(),
            scope: config.format_scope,
            thematic_breaks: config.thematic_breaks,
            finished: false,
        }
    }

    /// Pull exactly one token. After end of input, every call returns EOF again.
    pub fn next_token(&mut self) -> Token {
        self.cursor.advance();
        let line = self.cursor.line();

        let (kind, body) = match self.cursor.current() {
            None => (TokenKind::Eof, String::new()),
            Some('\n') => {
                self.cursor.bump_line();
                (TokenKind::Newline, String::new())
            }
            Some('#') => self.heading(),
            Some(c) if c.is_ascii_digit() && self.cursor.peek(0) == Some('.') => (
                TokenKind::Olist,
                self.cursor.consume_until(Delimiter::LineEnd, 1),
            ),
            Some(c @ ('-' | '*' | '_')) if self.thematic_breaks && self.is_thematic_break(c) => {
                self.cursor.consume_until(Delimiter::LineEnd, -1);
                (TokenKind::ThematicBreak, String::new())
            }
            Some(c @ ('-' | '*')) if self.cursor.peek(0) != Some(c) => (
                TokenKind::Ulist,
                self.cursor.consume_until(Delimiter::LineEnd, 0),
            ),
            Some('>') => {
                let body = self.cursor.consume_until(Delimiter::LineEnd, 0);
                (TokenKind::Blockquote, flatten_quote(&body).to_string())
            }
            Some('`') => self.fenced_code(),
            Some(_) => self.text(),
        };

        let text = if self.scope.applies_to(kind) {
            self.formatter.format(&body)
        } else {
            body
        };

        trace!(kind = %kind, line, "token");
        Token::new(kind, text.trim(), line)
    }

    /// Pull tokens until EOF, inclusive.
    ///
    /// Not restartable: calling it again on the same lexer yields only the trailing EOF.
    pub fn tokenize_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                break;
            }
        }
        self.finished = true;
        tokens
    }

    fn heading(&mut self) -> (TokenKind, String) {
        let level = self.cursor.run_length('#');
        match TokenKind::heading(level) {
            Some(kind) if self.cursor.peek(level - 1) == Some(' ') => {
                (kind, self.cursor.consume_until(Delimiter::LineEnd, level as isize - 1))
            }
            _ => self.text(),
        }
    }

    fn fenced_code(&mut self) -> (TokenKind, String) {
        let width = self.cursor.run_length('`');
        trace!(width, line = self.cursor.line(), "code fence");
        let body = self
            .cursor
            .consume_until(Delimiter::Fence(width), width as isize - 1);
        (TokenKind::Code, body)
    }

    fn text(&mut self) -> (TokenKind, String) {
        (
            TokenKind::Text,
            self.cursor.consume_until(Delimiter::LineEnd, -1),
        )
    }

    /// Three or more `marker` characters and nothing else but spaces or tabs up to the line end.
    fn is_thematic_break(&self, marker: char) -> bool {
        let line = self.cursor.rest_of_line();
        let markers = line.iter().filter(|c| **c == marker).count();
        markers >= 3 && line.iter().all(|c| *c == marker || *c == ' ' || *c == '\t')
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields every token including the final EOF, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
        }
        Some(token)
    }
}

/// Strip leading spaces and `>` markers, collapsing any quote depth into one body.
fn flatten_quote(body: &str) -> &str {
    body.trim_start_matches([' ', '>'])
}
