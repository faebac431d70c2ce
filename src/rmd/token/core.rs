//! Block-level token kinds and the token record produced by the lexer
//!
//!     Every call to the lexer yields exactly one token. A token carries the category of the
//!     construct that started at the cursor (see [TokenKind]), the extracted text for that
//!     construct and the 1-based line on which it began.
//!
//!     Inline markup never produces tokens of its own: it is rewritten into HTML fragments inside
//!     the text of the block token that contains it (see [crate::rmd::inlines]).

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// End of input. Terminal: once produced, every further call produces it again.
    Eof,
    /// Reserved for input no rule can classify. Not produced by the current rules.
    Illegal,
    /// A line break that starts a token (an empty line).
    Newline,
    /// An ordinary line of text.
    Text,
    /// `- item` or `* item`
    Ulist,
    /// `1. item`
    Olist,
    /// A backtick-fenced block, its body kept verbatim.
    Code,
    /// `# Heading`
    Header1,
    /// `## Heading`
    Header2,
    /// `### Heading`
    Header3,
    /// `> quoted`, nested markers flattened.
    Blockquote,
    /// `---`, `***` or `___` on a line of their own.
    ThematicBreak,
}

impl TokenKind {
    /// Upper-case category name, as used in token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Text => "TEXT",
            TokenKind::Ulist => "ULIST",
            TokenKind::Olist => "OLIST",
            TokenKind::Code => "CODE",
            TokenKind::Header1 => "HEADER1",
            TokenKind::Header2 => "HEADER2",
            TokenKind::Header3 => "HEADER3",
            TokenKind::Blockquote => "BLOCKQUOTE",
            TokenKind::ThematicBreak => "THEMATIC_BREAK",
        }
    }

    /// Heading kind for a run of `level` hash marks, if the level is supported.
    pub fn heading(level: usize) -> Option<TokenKind> {
        match level {
            1 => Some(TokenKind::Header1),
            2 => Some(TokenKind::Header2),
            3 => Some(TokenKind::Header3),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified, positioned unit of lexer output.
///
/// Equality is structural: two tokens are equal when kind, text and line all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Extracted text, inline-formatted where the configuration asks for it, trimmed at both ends.
    pub text: String,
    /// 1-based line on which the token began.
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, String::new(), line)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type: {}, line: {}, literal: {}",
            self.kind, self.line, self.text
        )
    }
}
