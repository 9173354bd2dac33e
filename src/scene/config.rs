//! Configuration loading
//!
//! `defaults/scene.default.toml` is embedded into the library so that the documented defaults
//! and the runtime behavior never drift apart. Applications layer their own files and
//! overrides on top of it through [Loader] before deserializing into [SceneConfig].

use crate::scene::error::SceneError;
use crate::scene::formats::OutputFormat;
use crate::scene::locales::Locale;
use crate::scene::parsing::parser::DEFAULT_MAX_PARSE_ERRORS;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

const DEFAULT_TOML: &str = include_str!("../../defaults/scene.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SceneConfig {
    pub parsing: ParsingConfig,
    pub inspect: InspectConfig,
}

/// How scene text is turned into a parse result
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParsingConfig {
    pub locale: LocalePreference,
    pub ensure_trailing_newline: bool,
    pub max_parse_errors: usize,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            locale: LocalePreference::Auto,
            ensure_trailing_newline: true,
            max_parse_errors: DEFAULT_MAX_PARSE_ERRORS,
        }
    }
}

/// Controls `scene inspect` output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub format: OutputFormat,
    pub show_line_numbers: bool,
}

/// Which locale to parse a scene with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum LocalePreference {
    /// Detect it from the first page keyword
    #[default]
    Auto,
    Fixed(Locale),
}

impl FromStr for LocalePreference {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            Ok(LocalePreference::Auto)
        } else {
            s.parse().map(LocalePreference::Fixed)
        }
    }
}

impl TryFrom<String> for LocalePreference {
    type Error = SceneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for LocalePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalePreference::Auto => f.write_str("auto"),
            LocalePreference::Fixed(locale) => write!(f, "{locale}"),
        }
    }
}

/// Layers user configuration over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// A loader seeded with the embedded defaults
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. A missing file is an error at [Loader::build].
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a configuration file if it exists.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override a single key, e.g. from a command line flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, SceneError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<SceneConfig, SceneError> {
        Ok(self.builder.build()?.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in defaults, for callers that do not load files
pub fn load_defaults() -> Result<SceneConfig, SceneError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.parsing, ParsingConfig::default());
        assert_eq!(config.inspect.format, OutputFormat::Treeviz);
        assert!(!config.inspect.show_line_numbers);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("parsing.locale", "ru_RU")
            .unwrap()
            .set_override("inspect.format", "json")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.parsing.locale, LocalePreference::Fixed(Locale::RuRu));
        assert_eq!(config.inspect.format, OutputFormat::Json);
    }

    #[test]
    fn rejects_unknown_locale() {
        let result = Loader::new()
            .set_override("parsing.locale", "de_DE")
            .unwrap()
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[parsing]\nmax_parse_errors = 5").unwrap();
        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert_eq!(config.parsing.max_parse_errors, 5);
        // untouched keys keep their defaults
        assert!(config.parsing.ensure_trailing_newline);
    }

    #[test]
    fn optional_file_may_be_missing() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/scene.toml")
            .build()
            .unwrap();
        assert_eq!(config.parsing.locale, LocalePreference::Auto);
    }

    #[test]
    fn locale_preference_parsing() {
        assert_eq!("AUTO".parse::<LocalePreference>().unwrap(), LocalePreference::Auto);
        assert_eq!(
            "en-US".parse::<LocalePreference>().unwrap(),
            LocalePreference::Fixed(Locale::EnUs)
        );
        assert_eq!(LocalePreference::Fixed(Locale::RuRu).to_string(), "ru_RU");
    }
}
