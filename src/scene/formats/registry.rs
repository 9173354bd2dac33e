//! Format registry
//!
//! Formats are pluggable: each implements [Formatter] and is registered under its name. The
//! `scene` binary and tests resolve formats through [FormatRegistry::with_defaults].

use crate::scene::config::InspectConfig;
use crate::scene::error::SceneError;
use crate::scene::pipeline::ParseResult;
use std::collections::HashMap;

/// Settings shared by all formats. Formats ignore what does not apply to them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Prefix treeviz lines with the source line of the node
    pub show_line_numbers: bool,
}

impl From<&InspectConfig> for FormatOptions {
    fn from(config: &InspectConfig) -> Self {
        Self {
            show_line_numbers: config.show_line_numbers,
        }
    }
}

pub trait Formatter: Send + Sync {
    /// The name the format is registered under, e.g. "treeviz"
    fn name(&self) -> &str;

    fn serialize(
        &self,
        result: &ParseResult,
        options: &FormatOptions,
    ) -> Result<String, SceneError>;

    fn description(&self) -> &str {
        ""
    }
}

/// The whole parse result as pretty-printed JSON
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(
        &self,
        result: &ParseResult,
        _options: &FormatOptions,
    ) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(result)?)
    }

    fn description(&self) -> &str {
        "Parse result as JSON, errors included"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(
        &self,
        result: &ParseResult,
        _options: &FormatOptions,
    ) -> Result<String, SceneError> {
        Ok(serde_yaml::to_string(result)?)
    }

    fn description(&self) -> &str {
        "Parse result as YAML, errors included"
    }
}

/// Registry of formatters by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any other registered under the same name.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    pub fn serialize(
        &self,
        result: &ParseResult,
        format: &str,
        options: &FormatOptions,
    ) -> Result<String, SceneError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| SceneError::UnknownFormat(format.to_string()))?;
        formatter.serialize(result, options)
    }

    /// Registered format names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(JsonFormatter);
        registry.register(YamlFormatter);
        registry.register(super::TreevizFormatter);
        registry.register(super::TokensFormatter);
        registry.register(super::SceneFormatter);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::pipeline::parse_scene_to_ast;

    struct CountFormatter;

    impl Formatter for CountFormatter {
        fn name(&self) -> &str {
            "count"
        }

        fn serialize(
            &self,
            result: &ParseResult,
            _options: &FormatOptions,
        ) -> Result<String, SceneError> {
            Ok(result.tokens().map_or(0, |tokens| tokens.len()).to_string())
        }
    }

    #[test]
    fn test_register_and_serialize() {
        let mut registry = FormatRegistry::new();
        assert!(registry.list_formats().is_empty());
        registry.register(CountFormatter);
        assert!(registry.has("count"));
        assert_eq!(registry.get("count").map(|f| f.description()), Some(""));

        let result = parse_scene_to_ast("Page: Login\n");
        let output = registry
            .serialize(&result, "count", &FormatOptions::default())
            .unwrap();
        assert_eq!(output, "3");
    }

    #[test]
    fn test_serialize_unknown_format() {
        let registry = FormatRegistry::new();
        let result = parse_scene_to_ast("Page: Login\n");
        match registry.serialize(&result, "xml", &FormatOptions::default()) {
            Err(SceneError::UnknownFormat(name)) => assert_eq!(name, "xml"),
            other => panic!("expected an unknown format error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_formats() {
        let registry = FormatRegistry::default();
        assert_eq!(
            registry.list_formats(),
            vec!["json", "scene", "tokens", "treeviz", "yaml"]
        );
    }

    #[test]
    fn test_json_includes_errors() {
        let result = parse_scene_to_ast("Block: Form\n");
        let json = JsonFormatter
            .serialize(&result, &FormatOptions::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "lex_errors");
        assert_eq!(value["errors"][0]["line"], 1);
    }

    #[test]
    fn test_yaml_output() {
        let result = parse_scene_to_ast("Page: Login\n");
        let yaml = YamlFormatter
            .serialize(&result, &FormatOptions::default())
            .unwrap();
        assert!(yaml.starts_with("status: success\n"), "{yaml}");
        assert!(yaml.contains("locale: en_US"));
    }
}
