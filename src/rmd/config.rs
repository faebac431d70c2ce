//! Lexer configuration
//!
//!     The Pandoc and CommonMark flavours of the lexer share one scanner. What differs between them
//!     is captured here and chosen when a [Lexer](crate::rmd::lexing::Lexer) is built:
//!
//!         - which block kinds get inline formatting (only TEXT, or every kind but CODE)
//!         - which inline rules are enabled (CommonMark adds math)
//!         - whether thematic breaks are recognized
//!
//!     Layered loading from TOML files lives in the `rmdlex-config` crate; this module only holds
//!     the resolved values.

use crate::rmd::inlines::InlineFormatter;
use crate::rmd::token::{InlineKind, TokenKind};
use serde::{Deserialize, Serialize};

/// Markdown flavour presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// R-Markdown with Pandoc conventions.
    Pandoc,
    #[default]
    #[serde(rename = "commonmark")]
    CommonMark,
}

/// Which block kinds have their text passed through the inline formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatScope {
    TextOnly,
    /// Every kind except fenced code.
    #[default]
    AllBlocks,
}

impl FormatScope {
    pub fn applies_to(self, kind: TokenKind) -> bool {
        match self {
            FormatScope::TextOnly => kind == TokenKind::Text,
            FormatScope::AllBlocks => kind != TokenKind::Code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    pub format_scope: FormatScope,
    pub inline: Vec<InlineKind>,
    pub thematic_breaks: bool,
}

impl LexerConfig {
    pub fn for_dialect(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Pandoc => Self {
                format_scope: FormatScope::TextOnly,
                inline: InlineKind::ALL
                    .into_iter()
                    .filter(|kind| *kind != InlineKind::Math)
                    .collect(),
                thematic_breaks: false,
            },
            Dialect::CommonMark => Self {
                format_scope: FormatScope::AllBlocks,
                inline: InlineKind::ALL.to_vec(),
                thematic_breaks: true,
            },
        }
    }

    pub fn pandoc() -> Self {
        Self::for_dialect(Dialect::Pandoc)
    }

    pub fn commonmark() -> Self {
        Self::for_dialect(Dialect::CommonMark)
    }

    pub fn formatter(&self) -> InlineFormatter {
        InlineFormatter::new(&self.inline)
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self::for_dialect(Dialect::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_commonmark() {
        assert_eq!(LexerConfig::default(), LexerConfig::commonmark());
        assert!(LexerConfig::default().thematic_breaks);
    }

    #[test]
    fn test_pandoc_has_no_math() {
        let config = LexerConfig::pandoc();
        assert!(!config.inline.contains(&InlineKind::Math));
        assert!(config.formatter().enables(InlineKind::Strong));
        assert!(!config.formatter().enables(InlineKind::Math));
        assert_eq!(config.format_scope, FormatScope::TextOnly);
    }

    #[test]
    fn test_format_scope() {
        assert!(FormatScope::TextOnly.applies_to(TokenKind::Text));
        assert!(!FormatScope::TextOnly.applies_to(TokenKind::Ulist));
        assert!(FormatScope::AllBlocks.applies_to(TokenKind::Header1));
        assert!(!FormatScope::AllBlocks.applies_to(TokenKind::Code));
    }

    #[test]
    fn test_deserialize_partial_falls_back_to_defaults() {
        let config: LexerConfig =
            serde_json::from_str(r#"{ "format_scope": "text-only" }"#).unwrap();
        assert_eq!(config.format_scope, FormatScope::TextOnly);
        assert_eq!(config.inline, InlineKind::ALL.to_vec());
        assert!(config.thematic_breaks);
    }

    #[test]
    fn test_dialect_names() {
        let dialect: Dialect = serde_json::from_str(r#""commonmark""#).unwrap();
        assert_eq!(dialect, Dialect::CommonMark);
        let dialect: Dialect = serde_json::from_str(r#""pandoc""#).unwrap();
        assert_eq!(dialect, Dialect::Pandoc);
    }
}
