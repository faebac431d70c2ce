//! Lexer
//!
//!     Turns an R-Markdown source string into a flat sequence of typed tokens in a single pass.
//!     There is no tree-building stage: each token is classified by the block construct it starts
//!     with, and inline markup inside its text is rewritten to HTML on the spot.
//!
//! Structure
//!
//!     - [cursor]: character access, lookahead and body extraction with line counting.
//!     - [lexer]: block classification and the token-by-token [Lexer].
//!     - this module: the [tokenize] drivers, which pull tokens until EOF.
//!
//! Line Numbers
//!
//!     Tokens carry the 1-based line they start on. The counter advances once per line break the
//!     lexer consumes, including the ones inside fenced code bodies, so line numbers never decrease
//!     and the difference between two tokens is exactly the number of line breaks between them.
//!
//! Totality
//!
//!     Every input, including the empty string, yields a finite sequence ending in EOF. Unclosed
//!     fences run to the end of input. Nothing here returns an error or panics on input.

pub mod cursor;
pub mod lexer;

pub use cursor::{Cursor, Delimiter};
pub use lexer::Lexer;

use crate::rmd::config::LexerConfig;
use crate::rmd::token::Token;

/// Tokenize `source` with the default (CommonMark) configuration.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize_all()
}

/// Tokenize `source` with an explicit configuration.
pub fn tokenize_with(source: &str, config: &LexerConfig) -> Vec<Token> {
    Lexer::with_config(source, config).tokenize_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rmd::testing::tok;
    use crate::rmd::token::TokenKind;

    #[test]
    fn test_tokenize_ends_with_eof() {
        let tokens = tokenize("hello\n");
        assert_eq!(
            tokens,
            vec![tok(TokenKind::Text, "hello", 1), tok(TokenKind::Eof, "", 2)]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert_eq!(tokenize(""), vec![tok(TokenKind::Eof, "", 1)]);
    }

    #[test]
    fn test_tokenize_with_pandoc_keeps_math() {
        let tokens = tokenize_with("cost $x$", &LexerConfig::pandoc());
        assert_eq!(tokens[0], tok(TokenKind::Text, "cost $x$", 1));
    }
}
