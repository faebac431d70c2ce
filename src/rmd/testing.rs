//! Test helpers
//!
//!     Factories and assertions shared by the unit tests and the integration tests under `tests/`.
//!     Lexer tests compare the leading tokens of a source against an expected list, the way the
//!     token streams are documented: kind, text, line.

use crate::rmd::config::LexerConfig;
use crate::rmd::lexing::Lexer;
use crate::rmd::token::{Token, TokenKind};

/// Shorthand token factory.
pub fn tok(kind: TokenKind, text: &str, line: usize) -> Token {
    Token::new(kind, text, line)
}

/// Assert that lexing `source` starts with `expected`, pulling one token per expected entry.
pub fn assert_leading_tokens(source: &str, expected: &[Token]) {
    assert_leading_tokens_with(source, &LexerConfig::default(), expected);
}

pub fn assert_leading_tokens_with(source: &str, config: &LexerConfig, expected: &[Token]) {
    let mut lexer = Lexer::with_config(source, config);
    for (index, want) in expected.iter().enumerate() {
        let got = lexer.next_token();
        assert_eq!(
            &got, want,
            "token #{index} of {source:?}\n  got:      {got}\n  expected: {want}"
        );
    }
}

/// One line per token: `line KIND "text"`. Used for snapshot tests.
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{} {} {:?}", t.line, t.kind, t.text))
        .collect::<Vec<_>>()
        .join("\n")
}
