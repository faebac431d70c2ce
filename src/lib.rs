//! # rmdlex
//!
//! A single-pass lexer for R-Markdown documents (Pandoc / CommonMark conventions).
//!
//! The lexer classifies each line-level construct (headings, list items, block quotes, fenced
//! code, thematic breaks, text) into a flat token stream and rewrites inline markup inside the
//! token text to HTML fragments. Renderers consume the tokens; there is no AST.
//!
//! Layout
//!
//! src/rmd
//!   ├── token      Token kinds, the token record and inline kinds
//!   ├── lexing     Cursor, block classification and the tokenize drivers
//!   ├── inlines    The pure inline formatter
//!   ├── config     Dialect presets and lexer configuration
//!   └── testing    Shared test helpers
//!
//! Layered configuration loading from TOML lives in the `rmdlex-config` crate.

pub mod rmd;

pub use rmd::config::{Dialect, FormatScope, LexerConfig};
pub use rmd::inlines::{format_inline, InlineFormatter};
pub use rmd::lexing::{tokenize, tokenize_with, Lexer};
pub use rmd::token::{InlineKind, Token, TokenKind};
