//! Shared configuration loader for rmdlex.
//!
//! `defaults/rmdlex.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`RmdlexConfig`],
//! and then resolve the lexer settings into an [`rmdlex::LexerConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use rmdlex::{Dialect, FormatScope, InlineKind, LexerConfig};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/rmdlex.default.toml");

/// Top-level configuration consumed by rmdlex applications.
#[derive(Debug, Clone, Deserialize)]
pub struct RmdlexConfig {
    pub lexer: LexerSettings,
}

/// A dialect preset plus optional per-knob overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct LexerSettings {
    pub dialect: Dialect,
    #[serde(default)]
    pub format_scope: Option<FormatScope>,
    #[serde(default)]
    pub inline: Option<Vec<InlineKind>>,
    #[serde(default)]
    pub thematic_breaks: Option<bool>,
}

impl LexerSettings {
    /// Start from the dialect preset and apply whichever overrides are set.
    pub fn to_lexer_config(&self) -> LexerConfig {
        let mut config = LexerConfig::for_dialect(self.dialect);
        if let Some(scope) = self.format_scope {
            config.format_scope = scope;
        }
        if let Some(inline) = &self.inline {
            config.inline = inline.clone();
        }
        if let Some(thematic_breaks) = self.thematic_breaks {
            config.thematic_breaks = thematic_breaks;
        }
        config
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `lexer.dialect = "pandoc"`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<RmdlexConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    /// Build and resolve straight to the lexer configuration.
    pub fn build_lexer_config(self) -> Result<LexerConfig, ConfigError> {
        Ok(self.build()?.lexer.to_lexer_config())
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RmdlexConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.lexer.dialect, Dialect::CommonMark);
        assert_eq!(config.lexer.to_lexer_config(), LexerConfig::commonmark());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("lexer.dialect", "pandoc")
            .expect("override to apply")
            .build_lexer_config()
            .expect("config to build");
        assert_eq!(config, LexerConfig::pandoc());
    }

    #[test]
    fn knob_overrides_apply_on_top_of_preset() {
        let config = Loader::new()
            .set_override("lexer.dialect", "pandoc")
            .expect("override to apply")
            .set_override("lexer.thematic_breaks", true)
            .expect("override to apply")
            .build_lexer_config()
            .expect("config to build");
        assert!(config.thematic_breaks);
        assert_eq!(config.format_scope, FormatScope::TextOnly);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(
            file,
            "[lexer]\ndialect = \"pandoc\"\nformat_scope = \"all-blocks\"\ninline = [\"strong\", \"math\"]"
        )
        .expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build_lexer_config()
            .expect("config to build");
        assert_eq!(config.format_scope, FormatScope::AllBlocks);
        assert_eq!(config.inline, vec![InlineKind::Strong, InlineKind::Math]);
        assert!(!config.thematic_breaks);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/definitely/not/here/rmdlex.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.lexer.dialect, Dialect::CommonMark);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new()
            .with_file("/definitely/not/here/rmdlex.toml")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn unknown_dialect_is_an_error() {
        let result = Loader::new()
            .set_override("lexer.dialect", "asciidoc")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }
}
