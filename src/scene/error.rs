//! Error types
//!
//! Two families live here. Diagnostics ([LexError], [ParseError]) are data: they describe
//! problems in a scene and are carried inside a
//! [ParseResult](crate::scene::pipeline::ParseResult), several per pass. [SceneError] is the
//! error of the library's fallible operations (loading configuration, reading files,
//! formatting output) and is returned through `Result`.

use crate::scene::lexing::tokens::TokenPosition;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Unmatched input found by the lexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexError {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    pub length: usize,
    pub message: String,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

/// A recognition error recorded by the parser before it resynchronized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseError {
    pub message: String,
    /// Names of the token kinds that would have been accepted
    pub expected: Vec<String>,
    /// Name of the token kind found instead, `EOF` at the end of input
    pub found: String,
    pub token: TokenPosition,
    /// Rules being parsed when the error happened, outermost first
    pub rule_stack: Vec<String>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.token.line, self.token.column, self.message)
    }
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown output format '{0}'")]
    UnknownFormat(String),

    #[error("unknown locale '{0}'")]
    UnknownLocale(String),

    /// The format shows the tree or the tokens, and the parse did not get that far
    #[error("format '{0}' has nothing to show, the scene did not parse")]
    NothingToShow(String),
}
