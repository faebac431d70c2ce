//! Token types shared by the lexer, the inline formatter and downstream renderers.
//!
//!     Block Tokens:
//!         One token per construct found at the start of the cursor: headings, list items, block
//!         quotes, fenced code, thematic breaks, plain text lines and empty lines. See [core].
//!
//!     Inline Kinds:
//!         Text-level markup rewritten to HTML inside a block token's text. These never become
//!         tokens. See [inline].

pub mod core;
pub mod inline;

pub use self::core::{Token, TokenKind};
pub use inline::InlineKind;
