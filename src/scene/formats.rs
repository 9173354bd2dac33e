//! Output formats for parse results
//!
//! Every format implements [Formatter] and is looked up by name in a [FormatRegistry]:
//!
//! - `json`, `yaml`: the whole [ParseResult](crate::scene::pipeline::ParseResult), errors
//!   included
//! - `treeviz`: one line per CST node, for eyeballing the tree
//! - `tokens`: the token stream, one token per line
//! - `scene`: the tree printed back as scene text

pub mod printer;
pub mod registry;
pub mod tokens;
pub mod treeviz;

pub use printer::{print_scene, SceneFormatter, ScenePrinter};
pub use registry::{FormatOptions, FormatRegistry, Formatter, JsonFormatter, YamlFormatter};
pub use tokens::{to_token_dump, TokensFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};

use crate::scene::error::SceneError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Yaml,
    Treeviz,
    Tokens,
    Scene,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Json,
        OutputFormat::Yaml,
        OutputFormat::Treeviz,
        OutputFormat::Tokens,
        OutputFormat::Scene,
    ];

    /// Name the format is registered under
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Tokens => "tokens",
            OutputFormat::Scene => "scene",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SceneError::UnknownFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_format_is_registered() {
        let registry = FormatRegistry::with_defaults();
        for format in OutputFormat::ALL {
            assert!(registry.has(format.name()), "{format} is not registered");
            assert_eq!(format.name().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_unknown_format() {
        match "xml".parse::<OutputFormat>() {
            Err(SceneError::UnknownFormat(name)) => assert_eq!(name, "xml"),
            other => panic!("expected an unknown format error, got {other:?}"),
        }
    }
}
