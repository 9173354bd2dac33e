//! Scene language: locales, lexer, parser and the derived views over its syntax tree.
//!
//! The pipeline:
//!
//!     raw text -> locale detection -> token set (cached per locale) -> lexer -> parser -> CST
//!
//! The CST is then consumed by layout and rendering code, usually through the helpers in
//! [views].

pub mod cache;
pub mod config;
pub mod cst;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod locales;
pub mod nlp;
pub mod parsing;
pub mod pipeline;
pub mod testing;
pub mod views;

pub use config::{Loader, LocalePreference, ParsingConfig, SceneConfig};
pub use cst::{CstNode, Rule, Scene};
pub use error::{LexError, ParseError, SceneError};
pub use lexing::{Token, TokenKind};
pub use locales::{detect_locale, Locale};
pub use pipeline::{parse_scene_to_ast, ParseResult, SceneProcessor};

/// Appends the trailing newline the grammar expects at the end of every line.
///
/// Returns the source untouched if it is empty or already ends with a newline.
pub fn ensure_source_ends_with_newline(source: &str) -> String {
    if !source.is_empty() && !source.ends_with('\n') {
        format!("{}\n", source)
    } else {
        source.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_missing_newline() {
        assert_eq!(ensure_source_ends_with_newline("Page: A"), "Page: A\n");
        assert_eq!(ensure_source_ends_with_newline("Page: A\n"), "Page: A\n");
        assert_eq!(ensure_source_ends_with_newline(""), "");
    }
}
