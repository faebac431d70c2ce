//! Character cursor
//!
//!     An index-based cursor over an owned character buffer. `position` is the index of the current
//!     character and `read_position` the index of the next one to read; after every read
//!     `read_position == position + 1`. Past the end of input the current character is `None`,
//!     which is the only end-of-input sentinel: a NUL in the source is an ordinary character.
//!
//!     The cursor also owns the line counter. Single-line bodies bump it when their terminating
//!     line break is consumed; multi-line bodies add the line breaks found inside them once the
//!     body has been extracted.

use tracing::debug;

/// What ends a body extracted by [Cursor::consume_until].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// The first line break. It is consumed but not part of the body.
    LineEnd,
    /// A run of exactly this many backticks. Longer or shorter runs are body content.
    Fence(usize),
}

#[derive(Debug, Clone)]
pub struct Cursor {
    chars: Vec<char>,
    position: usize,
    read_position: usize,
    line: usize,
    ch: Option<char>,
}

impl Cursor {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            position: 0,
            read_position: 0,
            line: 1,
            ch: None,
        }
    }

    pub fn current(&self) -> Option<char> {
        self.ch
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn bump_line(&mut self) {
        self.line += 1;
    }

    /// Move one character forward. Total: past the end the cursor parks on `None`.
    pub fn advance(&mut self) {
        self.ch = self.chars.get(self.read_position).copied();
        self.position = self.read_position.min(self.chars.len());
        self.read_position = self.position + 1;
    }

    /// The character `offset` places after the current one, without moving.
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.read_position + offset).copied()
    }

    /// Length of the run of `ch` starting at the current character.
    pub fn run_length(&self, ch: char) -> usize {
        self.chars
            .get(self.position..)
            .unwrap_or_default()
            .iter()
            .take_while(|c| **c == ch)
            .count()
    }

    /// The characters from the current one up to, not including, the next line break.
    pub fn rest_of_line(&self) -> &[char] {
        let rest = self.chars.get(self.position..).unwrap_or_default();
        let end = rest.iter().position(|c| *c == '\n').unwrap_or(rest.len());
        &rest[..end]
    }

    /// Skip `skip` characters past the current one, then collect characters until `delimiter`.
    ///
    /// A negative skip re-reads already consumed characters: `-1` starts the body at the current
    /// character. Reaching end of input without the delimiter is not an error; whatever was
    /// collected is returned. Line breaks inside the body, and a terminating line break, are added
    /// to the line counter.
    pub fn consume_until(&mut self, delimiter: Delimiter, skip: isize) -> String {
        self.read_position = self.read_position.saturating_add_signed(skip);
        self.position = self.read_position.saturating_sub(1);
        self.advance();

        let mut body = String::new();
        let mut terminated = false;
        while let Some(ch) = self.ch {
            match delimiter {
                Delimiter::LineEnd if ch == '\n' => {
                    terminated = true;
                    break;
                }
                Delimiter::Fence(width) if ch == '`' => {
                    let mut run = 1;
                    while self.peek(0) == Some('`') {
                        self.advance();
                        run += 1;
                    }
                    if run == width {
                        terminated = true;
                        break;
                    }
                    body.push_str(&"`".repeat(run));
                }
                _ => body.push(ch),
            }
            self.advance();
        }

        self.line += body.matches('\n').count();
        match delimiter {
            Delimiter::LineEnd if terminated => self.line += 1,
            Delimiter::Fence(width) if !terminated => {
                debug!(width, line = self.line, "code fence not closed before end of input");
            }
            _ => {}
        }
        body
    }
}
